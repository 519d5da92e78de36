use crate::data::RegisterParticipant;
use crate::validation::{self, ValidationError};

/// The fixed, ordered steps of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Name,
    Usn,
    Email,
    Password,
    ConfirmPassword,
    Skills,
    Review,
}

/// What kind of input a step collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Text,
    Secret,
    Skills,
    Review,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Name,
        Step::Usn,
        Step::Email,
        Step::Password,
        Step::ConfirmPassword,
        Step::Skills,
        Step::Review,
    ];

    pub fn index(self) -> usize {
        match self {
            Step::Name => 0,
            Step::Usn => 1,
            Step::Email => 2,
            Step::Password => 3,
            Step::ConfirmPassword => 4,
            Step::Skills => 5,
            Step::Review => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    pub fn kind(self) -> StepKind {
        match self {
            Step::Name | Step::Usn | Step::Email => StepKind::Text,
            Step::Password | Step::ConfirmPassword => StepKind::Secret,
            Step::Skills => StepKind::Skills,
            Step::Review => StepKind::Review,
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Step::Name => Some(Field::Name),
            Step::Usn => Some(Field::Usn),
            Step::Email => Some(Field::Email),
            Step::Password => Some(Field::Password),
            Step::ConfirmPassword => Some(Field::ConfirmPassword),
            Step::Skills => Some(Field::Skills),
            Step::Review => None,
        }
    }

    /// Prompt template; `{name}` is replaced by the participant's name.
    fn template(self) -> &'static str {
        match self {
            Step::Name => {
                "Hey there! 👋 I'm your registration assistant, and I'm here to help you sign up for the event! Let's start with your name. What should I call you?"
            }
            Step::Usn => {
                "Great to meet you, {name}! 🎉 Now, I need your USN (University Serial Number). This helps us keep track of all our awesome participants!"
            }
            Step::Email => {
                "Perfect, {name}! 📧 Now, what's your email address? We'll use this to send you important updates and team information."
            }
            Step::Password => {
                "Security time, {name}! 🔐 Let's create a strong password to protect your account. Make it something memorable but secure!"
            }
            Step::ConfirmPassword => {
                "Just to be sure, {name}! 🔒 Please confirm your password by typing it again."
            }
            Step::Skills => {
                "Awesome, {name}! 🚀 Now for the fun part - let's discover your superpowers! Select all the skills that describe you:"
            }
            Step::Review => {
                "Fantastic, {name}! 🎯 You're almost there! Let me review what we have and then we can complete your registration. Ready to proceed?"
            }
        }
    }

    pub fn prompt(self, name: &str) -> String {
        self.template().replace("{name}", name)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Step::Name => "Enter your full name",
            Step::Usn => "Enter your USN",
            Step::Email => "Enter your email address",
            Step::Password => "Create a password",
            Step::ConfirmPassword => "Confirm your password",
            Step::Skills | Step::Review => "",
        }
    }
}

/// A value collected by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Usn,
    Email,
    Password,
    ConfirmPassword,
    Skills,
}

impl Field {
    pub fn step(self) -> Step {
        match self {
            Field::Name => Step::Name,
            Field::Usn => Step::Usn,
            Field::Email => Step::Email,
            Field::Password => Step::Password,
            Field::ConfirmPassword => Step::ConfirmPassword,
            Field::Skills => Step::Skills,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Usn => "USN",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "password confirmation",
            Field::Skills => "skills",
        }
    }

    /// Fields offered for editing from the review step.
    pub fn is_editable(self) -> bool {
        matches!(self, Field::Name | Field::Usn | Field::Email | Field::Skills)
    }

    /// Fields checked against existing registrations.
    pub fn requires_availability(self) -> bool {
        matches!(self, Field::Usn | Field::Email)
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    pub(crate) fn saved_message(self) -> &'static str {
        match self {
            Field::Name => "✅ Name saved!",
            Field::Usn => "✅ USN saved!",
            Field::Email => "✅ Email saved!",
            Field::Password => "✅ Password saved!",
            Field::ConfirmPassword => "✅ Password confirmed!",
            Field::Skills => "✅ Skills saved!",
        }
    }

    pub(crate) fn updated_message(self) -> &'static str {
        match self {
            Field::Name => "✅ Name updated successfully!",
            Field::Usn => "✅ USN updated successfully!",
            Field::Email => "✅ Email updated successfully!",
            Field::Password | Field::ConfirmPassword => "✅ Password updated successfully!",
            Field::Skills => "✅ Skills updated successfully!",
        }
    }

    pub(crate) fn duplicate_message(self) -> &'static str {
        match self {
            Field::Email => {
                "❌ This email is already registered. Please use a different email address or login with your existing account."
            }
            _ => "❌ This USN is already registered. Please enter a different USN.",
        }
    }
}

/// Values collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub usn: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub skills: Vec<String>,
}

impl RegistrationForm {
    /// Current text value of a field; skills are comma-joined.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Usn => self.usn.clone(),
            Field::Email => self.email.clone(),
            Field::Password => self.password.clone(),
            Field::ConfirmPassword => self.confirm_password.clone(),
            Field::Skills => self.skills.join(", "),
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: &str) {
        let value = value.to_string();
        match field {
            Field::Name => self.name = value,
            Field::Usn => self.usn = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
            Field::Skills => {}
        }
    }

    pub fn validate(&self, field: Field, value: &str) -> Result<(), ValidationError> {
        match field {
            Field::Name => validation::validate_name(value),
            Field::Usn => validation::validate_usn(value),
            Field::Email => validation::validate_email(value),
            Field::Password => validation::validate_password(value),
            Field::ConfirmPassword => validation::validate_confirmation(value, &self.password),
            Field::Skills => validation::validate_skills(&self.skills),
        }
    }

    pub fn to_request(&self) -> RegisterParticipant {
        RegisterParticipant {
            name: self.name.clone(),
            usn: self.usn.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            skills: self.skills.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_linear() {
        let mut step = Step::Name;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            visited.push(next);
            step = next;
        }
        assert_eq!(visited, Step::ALL.to_vec());
        assert_eq!(Step::Review.index(), 6);
    }

    #[test]
    fn test_prompt_substitutes_name() {
        let prompt = Step::Email.prompt("Ada");
        assert!(prompt.starts_with("Perfect, Ada!"));
        assert!(!prompt.contains("{name}"));
    }

    #[test]
    fn test_confirmation_checked_against_password() {
        let form = RegistrationForm {
            password: "hunter22".to_string(),
            ..RegistrationForm::default()
        };
        assert!(form.validate(Field::ConfirmPassword, "hunter22").is_ok());
        assert_eq!(
            form.validate(Field::ConfirmPassword, "hunter23"),
            Err(ValidationError::PasswordMismatch)
        );
    }
}
