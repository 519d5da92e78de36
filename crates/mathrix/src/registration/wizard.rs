use crate::api::ApiError;
use crate::data::{Participant, RegisterParticipant};
use crate::sequence::RequestSequence;
use crate::validation;

use super::step::{Field, RegistrationForm, Step, StepKind};

const EMAIL_CHECK_FAILED: &str = "❌ Error checking email. Please try again.";
const REVIEW_UPDATED: &str = "Let's review your updated information:";
const RETRY_EMAIL_PROMPT: &str =
    "Great! Let's try with a different email address. What's your email?";

/// Who a transcript line belongs to, which also decides how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Bot,
    User,
    /// Status lines such as "✅ Email saved!".
    System,
    /// Bot line that opens an inline edit form.
    Edit,
    /// Bot line followed by the conflict choices.
    Options,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub content: String,
}

impl ChatMessage {
    fn new(author: Author, content: impl Into<String>) -> Self {
        Self {
            author,
            content: content.into(),
        }
    }
}

/// Result of the latest uniqueness check for a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Unknown,
    Checking,
    Available,
    Taken,
    /// The check failed; the value is accepted but was never confirmed unique.
    Unverified,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveCheck {
    pub value: String,
    pub availability: Availability,
    sequence: RequestSequence,
}

impl LiveCheck {
    fn reset(&mut self, value: &str) {
        // Supersede any in-flight check for the previous value.
        self.sequence.issue();
        self.value = value.to_string();
        self.availability = Availability::Unknown;
    }

    fn is_taken(&self, value: &str) -> bool {
        self.availability == Availability::Taken && self.value == value
    }
}

/// Which value collided with an existing registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Email,
    Usn,
    /// The server rejected the data without naming a field.
    Other,
}

/// The two ways out of a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    GoToLogin,
    StartFresh,
}

impl ConflictChoice {
    pub const ALL: [ConflictChoice; 2] = [ConflictChoice::GoToLogin, ConflictChoice::StartFresh];

    pub fn label(self) -> &'static str {
        match self {
            ConflictChoice::GoToLogin => "🔐 Login with Existing Account",
            ConflictChoice::StartFresh => "🚀 Start Fresh Registration",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Collecting,
    /// Waiting for the uniqueness check that gates leaving the current step.
    AwaitingCheck {
        field: Field,
        value: String,
        seq: u64,
    },
    /// Final email + USN check before registering.
    Submitting,
    Registering,
    Conflict(ConflictKind),
    Registered(Participant),
}

/// Outcome of the pre-submit duplicate check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalCheck {
    pub email_taken: bool,
    pub usn_taken: bool,
}

/// IO the wizard needs performed. Run it with [`super::perform`] and hand the
/// returned event back to [`RegistrationWizard::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CheckAvailability { field: Field, value: String, seq: u64 },
    FinalCheck { email: String, usn: String },
    Register(RegisterParticipant),
}

#[derive(Debug)]
pub enum WizardEvent {
    /// Raw typing in the email or USN input.
    InputChanged { field: Field, value: String },
    /// The debounce interval after the last keystroke elapsed.
    LiveCheckDue { field: Field, value: String },
    SubmitInput(String),
    AvailabilityResolved {
        field: Field,
        seq: u64,
        result: Result<bool, ApiError>,
    },
    ToggleSkill(String),
    SubmitSkills,
    Edit(Field),
    CancelEdit,
    Submit,
    FinalCheckResolved(Result<FinalCheck, ApiError>),
    RegistrationResolved(Result<Participant, ApiError>),
    StartFresh,
    RetryWithNewEmail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationWizard {
    step: Step,
    form: RegistrationForm,
    transcript: Vec<ChatMessage>,
    phase: Phase,
    editing: Option<Field>,
    email_check: LiveCheck,
    usn_check: LiveCheck,
}

impl Default for RegistrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationWizard {
    pub fn new() -> Self {
        Self {
            step: Step::Name,
            form: RegistrationForm::default(),
            transcript: vec![ChatMessage::new(Author::Bot, Step::Name.prompt(""))],
            phase: Phase::Collecting,
            editing: None,
            email_check: LiveCheck::default(),
            usn_check: LiveCheck::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn editing(&self) -> Option<Field> {
        self.editing
    }

    pub fn availability(&self, field: Field) -> Availability {
        self.live_check(field)
            .map(|check| check.availability)
            .unwrap_or_default()
    }

    /// Whether a request is outstanding and input should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingCheck { .. } | Phase::Submitting | Phase::Registering
        )
    }

    pub fn registered(&self) -> Option<&Participant> {
        match &self.phase {
            Phase::Registered(participant) => Some(participant),
            _ => None,
        }
    }

    /// Value to pre-fill the input with; secrets are never pre-filled.
    pub fn draft(&self) -> String {
        match self.editing {
            Some(field) if !field.is_secret() => self.form.value(field),
            _ => String::new(),
        }
    }

    /// Completed steps out of all steps, for the progress bar.
    pub fn progress(&self) -> (usize, usize) {
        (self.step.index(), Step::ALL.len() - 1)
    }

    pub fn handle(&mut self, event: WizardEvent) -> Option<Effect> {
        match event {
            WizardEvent::InputChanged { field, value } => {
                self.input_changed(field, &value);
                None
            }
            WizardEvent::LiveCheckDue { field, value } => self.request_live_check(field, &value),
            WizardEvent::SubmitInput(text) => self.submit_input(&text),
            WizardEvent::AvailabilityResolved { field, seq, result } => {
                self.availability_resolved(field, seq, result)
            }
            WizardEvent::ToggleSkill(id) => {
                self.toggle_skill(&id);
                None
            }
            WizardEvent::SubmitSkills => {
                self.submit_skills();
                None
            }
            WizardEvent::Edit(field) => {
                self.edit(field);
                None
            }
            WizardEvent::CancelEdit => {
                self.cancel_edit();
                None
            }
            WizardEvent::Submit => self.submit(),
            WizardEvent::FinalCheckResolved(result) => self.final_check_resolved(result),
            WizardEvent::RegistrationResolved(result) => {
                self.registration_resolved(result);
                None
            }
            WizardEvent::StartFresh => {
                self.start_fresh();
                None
            }
            WizardEvent::RetryWithNewEmail => {
                self.retry_with_new_email();
                None
            }
        }
    }

    pub fn input_changed(&mut self, field: Field, value: &str) {
        if !self.accepts_input() {
            return;
        }
        if let Some(check) = self.live_check_mut(field) {
            check.reset(value.trim());
        }
    }

    /// Live feedback only runs while the user is typing; once a step check is
    /// outstanding it owns the field's latest sequence number.
    pub fn request_live_check(&mut self, field: Field, value: &str) -> Option<Effect> {
        let value = value.trim();
        if !self.accepts_input() || !live_checkable(field, value) {
            return None;
        }
        let check = self.live_check_mut(field)?;
        // The input changed again since this timer was armed.
        if check.value != value {
            return None;
        }
        let seq = check.sequence.issue();
        check.availability = Availability::Checking;
        Some(Effect::CheckAvailability {
            field,
            value: value.to_string(),
            seq,
        })
    }

    pub fn submit_input(&mut self, text: &str) -> Option<Effect> {
        if !self.accepts_input() {
            return None;
        }
        let field = self.step.field()?;
        if !matches!(self.step.kind(), StepKind::Text | StepKind::Secret) {
            return None;
        }
        let value = text.trim();
        if value.is_empty() {
            return None;
        }

        let echo = if field.is_secret() {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        self.say(Author::User, echo);

        if let Err(error) = self.form.validate(field, value) {
            let retry = match self.editing {
                Some(_) => "Please try again.".to_string(),
                None => format!("Let's try that again. {}", self.prompt()),
            };
            self.say(Author::Bot, format!("Oops! {error} {retry}"));
            return None;
        }

        if !field.requires_availability() {
            self.accept(field, value);
            return None;
        }

        let check = self.live_check_mut(field)?;
        if check.is_taken(value) {
            self.report_duplicate(field);
            return None;
        }
        let seq = check.sequence.issue();
        check.value = value.to_string();
        check.availability = Availability::Checking;
        self.phase = Phase::AwaitingCheck {
            field,
            value: value.to_string(),
            seq,
        };
        Some(Effect::CheckAvailability {
            field,
            value: value.to_string(),
            seq,
        })
    }

    pub fn availability_resolved(
        &mut self,
        field: Field,
        seq: u64,
        result: Result<bool, ApiError>,
    ) -> Option<Effect> {
        let check = self.live_check_mut(field)?;
        if !check.sequence.is_latest(seq) {
            tracing::debug!(?field, seq, "ignoring stale availability response");
            return None;
        }
        let checked_value = check.value.clone();
        check.availability = match &result {
            Ok(true) => Availability::Taken,
            Ok(false) => Availability::Available,
            Err(error) => {
                tracing::warn!(?field, %error, "availability check failed, value unverified");
                Availability::Unverified
            }
        };

        let Phase::AwaitingCheck {
            field: pending,
            value,
            seq: pending_seq,
        } = self.phase.clone()
        else {
            return None;
        };
        // A newer check of the same value answers the pending step check too.
        if pending != field || (pending_seq != seq && checked_value != value) {
            return None;
        }

        self.phase = Phase::Collecting;
        match result {
            Ok(true) => self.report_duplicate(field),
            Ok(false) => self.accept(field, &value),
            Err(_) if field == Field::Email => self.say(Author::Bot, EMAIL_CHECK_FAILED),
            Err(_) => self.accept(field, &value),
        }
        None
    }

    pub fn toggle_skill(&mut self, id: &str) {
        if self.step != Step::Skills || !self.accepts_input() {
            return;
        }
        let skills = &mut self.form.skills;
        match skills.iter().position(|skill| skill == id) {
            Some(index) => {
                skills.remove(index);
            }
            None => skills.push(id.to_string()),
        }
    }

    pub fn submit_skills(&mut self) {
        if self.step != Step::Skills || !self.accepts_input() {
            return;
        }
        if let Err(error) = validation::validate_skills(&self.form.skills) {
            self.say(Author::Bot, error.to_string());
            return;
        }
        if self.editing.take().is_some() {
            self.say(Author::System, Field::Skills.updated_message());
            self.return_to_review();
        } else {
            self.say(
                Author::System,
                format!(
                    "🎯 Great! You've selected {} skills. Let's review everything!",
                    self.form.skills.len()
                ),
            );
            self.advance();
        }
    }

    /// Jumps from the review step back to `field` for a single correction.
    pub fn edit(&mut self, field: Field) {
        if self.step != Step::Review || !field.is_editable() {
            return;
        }
        if !matches!(self.phase, Phase::Collecting | Phase::Conflict(_)) {
            return;
        }
        self.phase = Phase::Collecting;
        self.editing = Some(field);
        self.step = field.step();
        self.say(
            Author::Edit,
            format!("Let's edit your {}. Please enter the new value:", field.label()),
        );
    }

    pub fn cancel_edit(&mut self) {
        if self.is_busy() {
            return;
        }
        if self.editing.take().is_some() {
            self.step = Step::Review;
            self.phase = Phase::Collecting;
        }
    }

    pub fn submit(&mut self) -> Option<Effect> {
        if self.step != Step::Review || !matches!(self.phase, Phase::Collecting | Phase::Conflict(_))
        {
            return None;
        }
        self.phase = Phase::Submitting;
        Some(Effect::FinalCheck {
            email: self.form.email.clone(),
            usn: self.form.usn.clone(),
        })
    }

    pub fn final_check_resolved(&mut self, result: Result<FinalCheck, ApiError>) -> Option<Effect> {
        if self.phase != Phase::Submitting {
            return None;
        }
        match result {
            Ok(FinalCheck {
                email_taken: true, ..
            }) => {
                self.email_check.availability = Availability::Taken;
                self.enter_conflict(ConflictKind::Email);
                None
            }
            Ok(FinalCheck { usn_taken: true, .. }) => {
                self.usn_check.availability = Availability::Taken;
                self.enter_conflict(ConflictKind::Usn);
                None
            }
            Ok(_) => {
                self.phase = Phase::Registering;
                Some(Effect::Register(self.form.to_request()))
            }
            Err(error) => {
                tracing::warn!(%error, "final duplicate check failed");
                self.report_failure();
                None
            }
        }
    }

    pub fn registration_resolved(&mut self, result: Result<Participant, ApiError>) {
        if self.phase != Phase::Registering {
            return;
        }
        match result {
            Ok(participant) => {
                tracing::info!(participant_id = %participant.participant_id, "registration complete");
                self.say(
                    Author::System,
                    "🎉 Congratulations! Your registration is complete!",
                );
                self.say(
                    Author::Bot,
                    "Welcome to the team! You're now ready to create or join teams and start your amazing journey. Let me take you to your dashboard!",
                );
                self.phase = Phase::Registered(participant);
            }
            Err(ApiError::BadRequest(detail)) => {
                tracing::warn!(%detail, "registration rejected");
                let detail = detail.to_lowercase();
                let kind = if detail.contains("email") {
                    ConflictKind::Email
                } else if detail.contains("usn") {
                    ConflictKind::Usn
                } else {
                    ConflictKind::Other
                };
                self.enter_conflict(kind);
            }
            Err(error) => {
                tracing::error!(%error, "registration failed");
                self.report_failure();
            }
        }
    }

    /// Discards everything entered and starts over at the first step.
    pub fn start_fresh(&mut self) {
        let mut email_check = std::mem::take(&mut self.email_check);
        let mut usn_check = std::mem::take(&mut self.usn_check);
        email_check.reset("");
        usn_check.reset("");
        *self = Self {
            email_check,
            usn_check,
            ..Self::new()
        };
    }

    /// Clears the email and asks for a new one, keeping everything else.
    pub fn retry_with_new_email(&mut self) {
        if self.is_busy() || self.registered().is_some() {
            return;
        }
        // From review the remaining fields are complete, so come straight back.
        self.editing = (self.step == Step::Review).then_some(Field::Email);
        self.form.email.clear();
        self.email_check.reset("");
        self.step = Step::Email;
        self.phase = Phase::Collecting;
        self.say(Author::Bot, RETRY_EMAIL_PROMPT);
    }

    fn accepts_input(&self) -> bool {
        self.phase == Phase::Collecting
    }

    fn prompt(&self) -> String {
        self.step.prompt(&self.form.name)
    }

    fn say(&mut self, author: Author, content: impl Into<String>) {
        self.transcript.push(ChatMessage::new(author, content));
    }

    fn live_check(&self, field: Field) -> Option<&LiveCheck> {
        match field {
            Field::Email => Some(&self.email_check),
            Field::Usn => Some(&self.usn_check),
            _ => None,
        }
    }

    fn live_check_mut(&mut self, field: Field) -> Option<&mut LiveCheck> {
        match field {
            Field::Email => Some(&mut self.email_check),
            Field::Usn => Some(&mut self.usn_check),
            _ => None,
        }
    }

    fn accept(&mut self, field: Field, value: &str) {
        self.form.set(field, value);
        if self.editing.take().is_some() {
            self.say(Author::System, field.updated_message());
            self.return_to_review();
        } else {
            self.say(Author::System, field.saved_message());
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
            let prompt = self.prompt();
            self.say(Author::Bot, prompt);
        }
    }

    fn return_to_review(&mut self) {
        self.step = Step::Review;
        self.phase = Phase::Collecting;
        self.say(Author::Bot, REVIEW_UPDATED);
    }

    fn report_duplicate(&mut self, field: Field) {
        self.say(Author::Bot, field.duplicate_message());
        if field == Field::Email {
            self.say(Author::Bot, "You have two options:");
            self.say(
                Author::Bot,
                "1️⃣ **Login instead** - Use this email to sign in to your existing account",
            );
            self.say(
                Author::Bot,
                "2️⃣ **Try different email** - Continue registration with a new email address",
            );
        }
    }

    fn enter_conflict(&mut self, kind: ConflictKind) {
        let headline = match kind {
            ConflictKind::Email => "❌ Oops! Someone with this email is already registered.",
            ConflictKind::Usn => "❌ Oops! Someone with this USN is already registered.",
            ConflictKind::Other => "❌ A validation error occurred.",
        };
        self.say(Author::System, headline);
        self.say(
            Author::Bot,
            "It looks like this is already in our system. You have two options:",
        );
        self.say(
            Author::Bot,
            "1️⃣ **Login instead** - Use this email to sign in to your existing account",
        );
        self.say(
            Author::Bot,
            "2️⃣ **Start fresh** - Begin registration with a different email",
        );
        self.say(Author::Options, "What would you like to do?");
        self.phase = Phase::Conflict(kind);
    }

    fn report_failure(&mut self) {
        self.say(Author::System, "❌ Something went wrong with the registration.");
        self.say(
            Author::Bot,
            "Don't worry! Let's try again. Sometimes the server needs a little break. Please try again in a moment.",
        );
        self.phase = Phase::Collecting;
    }
}

fn live_checkable(field: Field, value: &str) -> bool {
    match field {
        Field::Email => validation::email_checkable(value),
        Field::Usn => validation::usn_checkable(value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_to(step: Step) -> RegistrationWizard {
        let mut wizard = RegistrationWizard::new();
        let inputs = [
            (Step::Name, "Ada Lovelace"),
            (Step::Usn, "1MS21CS001"),
            (Step::Email, "ada@uni.edu"),
            (Step::Password, "engine42"),
            (Step::ConfirmPassword, "engine42"),
        ];
        for (at, input) in inputs {
            if wizard.step() == step {
                return wizard;
            }
            assert_eq!(wizard.step(), at);
            if let Some(Effect::CheckAvailability { field, seq, .. }) = wizard.submit_input(input) {
                wizard.availability_resolved(field, seq, Ok(false));
            }
        }
        if step == Step::Review {
            wizard.toggle_skill("python");
            wizard.submit_skills();
        }
        assert_eq!(wizard.step(), step);
        wizard
    }

    fn last(wizard: &RegistrationWizard) -> &ChatMessage {
        wizard.transcript().last().expect("transcript is never empty")
    }

    #[test]
    fn test_starts_with_greeting() {
        let wizard = RegistrationWizard::new();
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.transcript().len(), 1);
        assert_eq!(wizard.transcript()[0].author, Author::Bot);
    }

    #[test]
    fn test_invalid_name_stays_on_step() {
        let mut wizard = RegistrationWizard::new();
        assert_eq!(wizard.submit_input("A"), None);
        assert_eq!(wizard.step(), Step::Name);
        assert!(
            last(&wizard)
                .content
                .starts_with("Oops! Name must be at least 2 characters long. Let's try that again.")
        );
    }

    #[test]
    fn test_name_advances_and_personalises_prompt() {
        let mut wizard = RegistrationWizard::new();
        wizard.submit_input("  Ada  ");
        assert_eq!(wizard.step(), Step::Usn);
        assert_eq!(wizard.form().name, "Ada");
        assert!(last(&wizard).content.starts_with("Great to meet you, Ada!"));
    }

    #[test]
    fn test_passwords_are_masked_in_transcript() {
        let mut wizard = filled_to(Step::Password);
        wizard.submit_input("secret99");
        let echoed = wizard
            .transcript()
            .iter()
            .rev()
            .find(|message| message.author == Author::User)
            .expect("user echo");
        assert_eq!(echoed.content, "••••••••");
        assert_eq!(wizard.step(), Step::ConfirmPassword);
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let mut wizard = filled_to(Step::ConfirmPassword);
        wizard.submit_input("engine43");
        assert_eq!(wizard.step(), Step::ConfirmPassword);
        assert!(last(&wizard).content.contains("Passwords do not match."));
    }

    #[test]
    fn test_usn_step_waits_for_check() {
        let mut wizard = filled_to(Step::Usn);
        let effect = wizard.submit_input("1MS21CS001");
        let Some(Effect::CheckAvailability { field, value, seq }) = effect else {
            panic!("expected availability check, got {effect:?}");
        };
        assert_eq!((field, value.as_str()), (Field::Usn, "1MS21CS001"));
        assert!(wizard.is_busy());
        assert_eq!(wizard.submit_input("ignored"), None);

        wizard.availability_resolved(Field::Usn, seq, Ok(true));
        assert_eq!(wizard.step(), Step::Usn);
        assert_eq!(wizard.availability(Field::Usn), Availability::Taken);
        assert_eq!(
            last(&wizard).content,
            "❌ This USN is already registered. Please enter a different USN."
        );
    }

    #[test]
    fn test_usn_check_failure_fails_open() {
        let mut wizard = filled_to(Step::Usn);
        let Some(Effect::CheckAvailability { seq, .. }) = wizard.submit_input("1MS21CS001") else {
            panic!("expected availability check");
        };
        wizard.availability_resolved(Field::Usn, seq, Err(ApiError::InternalServerError));
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(wizard.availability(Field::Usn), Availability::Unverified);
    }

    #[test]
    fn test_email_check_failure_fails_closed() {
        let mut wizard = filled_to(Step::Email);
        let Some(Effect::CheckAvailability { seq, .. }) = wizard.submit_input("ada@uni.edu") else {
            panic!("expected availability check");
        };
        wizard.availability_resolved(Field::Email, seq, Err(ApiError::InternalServerError));
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(last(&wizard).content, EMAIL_CHECK_FAILED);
        assert!(!wizard.is_busy());
    }

    #[test]
    fn test_live_taken_email_blocks_without_request() {
        let mut wizard = filled_to(Step::Email);
        wizard.input_changed(Field::Email, "taken@x.com");
        let Some(Effect::CheckAvailability { seq, .. }) =
            wizard.request_live_check(Field::Email, "taken@x.com")
        else {
            panic!("expected live check");
        };
        wizard.availability_resolved(Field::Email, seq, Ok(true));
        assert_eq!(wizard.availability(Field::Email), Availability::Taken);

        assert_eq!(wizard.submit_input("taken@x.com"), None);
        assert_eq!(wizard.step(), Step::Email);
        assert!(wizard.transcript().iter().any(|message| {
            message.content.starts_with("❌ This email is already registered.")
        }));
    }

    #[test]
    fn test_stale_live_response_is_ignored() {
        let mut wizard = filled_to(Step::Email);
        wizard.input_changed(Field::Email, "ada@");
        let Some(Effect::CheckAvailability { seq: stale, .. }) =
            wizard.request_live_check(Field::Email, "ada@")
        else {
            panic!("expected live check");
        };
        wizard.input_changed(Field::Email, "ada@uni.edu");
        let Some(Effect::CheckAvailability { seq: current, .. }) =
            wizard.request_live_check(Field::Email, "ada@uni.edu")
        else {
            panic!("expected live check");
        };

        wizard.availability_resolved(Field::Email, current, Ok(false));
        wizard.availability_resolved(Field::Email, stale, Ok(true));
        assert_eq!(wizard.availability(Field::Email), Availability::Available);
    }

    #[test]
    fn test_live_check_skipped_for_uncheckable_or_outdated_values() {
        let mut wizard = filled_to(Step::Email);
        wizard.input_changed(Field::Email, "ada");
        assert_eq!(wizard.request_live_check(Field::Email, "ada"), None);

        wizard.input_changed(Field::Usn, "1MS2");
        assert_eq!(wizard.request_live_check(Field::Usn, "1MS2"), None);

        wizard.input_changed(Field::Email, "ada@uni.edu");
        assert_eq!(wizard.request_live_check(Field::Email, "ada@un"), None);
    }

    #[test]
    fn test_live_check_error_is_unverified() {
        let mut wizard = filled_to(Step::Email);
        wizard.input_changed(Field::Email, "ada@uni.edu");
        let Some(Effect::CheckAvailability { seq, .. }) =
            wizard.request_live_check(Field::Email, "ada@uni.edu")
        else {
            panic!("expected live check");
        };
        wizard.availability_resolved(Field::Email, seq, Err(ApiError::InternalServerError));
        assert_eq!(wizard.availability(Field::Email), Availability::Unverified);
        assert_eq!(wizard.step(), Step::Email);
    }

    /// Submits `value` before its debounced live check fires, then lets the
    /// timer go off while the step check is still outstanding.
    fn submit_before_debounce(wizard: &mut RegistrationWizard, field: Field, value: &str) {
        wizard.input_changed(field, value);
        let Some(Effect::CheckAvailability { seq, .. }) = wizard.submit_input(value) else {
            panic!("expected step check");
        };
        assert!(wizard.is_busy());

        assert_eq!(wizard.request_live_check(field, value), None);
        wizard.input_changed(field, "ignored while busy");

        wizard.availability_resolved(field, seq, Ok(false));
        assert!(!wizard.is_busy());
    }

    #[test]
    fn test_usn_submit_before_debounce_advances() {
        let mut wizard = filled_to(Step::Usn);
        submit_before_debounce(&mut wizard, Field::Usn, "1MS21CS001");
        assert_eq!(wizard.step(), Step::Email);
        assert_eq!(wizard.form().usn, "1MS21CS001");
    }

    #[test]
    fn test_email_submit_before_debounce_advances() {
        let mut wizard = filled_to(Step::Email);
        submit_before_debounce(&mut wizard, Field::Email, "ada@uni.edu");
        assert_eq!(wizard.step(), Step::Password);
        assert_eq!(wizard.form().email, "ada@uni.edu");
    }

    #[test]
    fn test_stale_live_response_leaves_step_check_pending() {
        let mut wizard = filled_to(Step::Usn);
        wizard.input_changed(Field::Usn, "1MS21CS001");
        let Some(Effect::CheckAvailability { seq: step_seq, .. }) =
            wizard.submit_input("1MS21CS001")
        else {
            panic!("expected step check");
        };

        // The live check of an earlier edit lost the race and is stale.
        wizard.availability_resolved(Field::Usn, step_seq - 1, Ok(true));
        assert!(wizard.is_busy());

        wizard.availability_resolved(Field::Usn, step_seq, Ok(false));
        assert!(!wizard.is_busy());
        assert_eq!(wizard.step(), Step::Email);
    }

    #[test]
    fn test_live_usn_check_is_trimmed() {
        let mut wizard = filled_to(Step::Usn);
        wizard.input_changed(Field::Usn, "  1MS21CS001 ");
        assert!(matches!(
            wizard.request_live_check(Field::Usn, "  1MS21CS001 "),
            Some(Effect::CheckAvailability { field: Field::Usn, ref value, .. }) if value == "1MS21CS001"
        ));
    }

    #[test]
    fn test_zero_skills_rejected() {
        let mut wizard = filled_to(Step::Skills);
        wizard.submit_skills();
        assert_eq!(wizard.step(), Step::Skills);
        assert_eq!(
            last(&wizard).content,
            validation::ValidationError::NoSkills.to_string()
        );

        wizard.toggle_skill("python");
        wizard.toggle_skill("react");
        wizard.toggle_skill("python");
        assert_eq!(wizard.form().skills, vec!["react".to_string()]);
        wizard.submit_skills();
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn test_edit_returns_to_review() {
        let mut wizard = filled_to(Step::Review);
        wizard.edit(Field::Name);
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.draft(), "Ada Lovelace");
        assert_eq!(last(&wizard).author, Author::Edit);

        wizard.submit_input("Grace");
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.form().name, "Grace");
        assert_eq!(wizard.editing(), None);
        assert_eq!(last(&wizard).content, REVIEW_UPDATED);
    }

    #[test]
    fn test_edit_rejects_invalid_value() {
        let mut wizard = filled_to(Step::Review);
        wizard.edit(Field::Name);
        wizard.submit_input("G");
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(
            last(&wizard).content,
            "Oops! Name must be at least 2 characters long. Please try again."
        );
    }

    #[test]
    fn test_edit_only_from_review_and_editable_fields() {
        let mut wizard = filled_to(Step::Review);
        wizard.edit(Field::Password);
        assert_eq!(wizard.step(), Step::Review);

        let mut early = filled_to(Step::Email);
        early.edit(Field::Name);
        assert_eq!(early.step(), Step::Email);
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let mut wizard = filled_to(Step::Review);
        wizard.edit(Field::Usn);
        wizard.cancel_edit();
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.form().usn, "1MS21CS001");
    }

    #[test]
    fn test_final_check_conflict_offers_choices() {
        let mut wizard = filled_to(Step::Review);
        let effect = wizard.submit();
        assert_eq!(
            effect,
            Some(Effect::FinalCheck {
                email: "ada@uni.edu".to_string(),
                usn: "1MS21CS001".to_string(),
            })
        );
        let effect = wizard.final_check_resolved(Ok(FinalCheck {
            email_taken: false,
            usn_taken: true,
        }));
        assert_eq!(effect, None);
        assert_eq!(wizard.phase(), &Phase::Conflict(ConflictKind::Usn));
        assert_eq!(last(&wizard).author, Author::Options);
    }

    #[test]
    fn test_rejected_registration_is_classified() {
        let mut wizard = filled_to(Step::Review);
        wizard.submit();
        let effect = wizard.final_check_resolved(Ok(FinalCheck::default()));
        assert!(matches!(effect, Some(Effect::Register(_))));
        wizard.registration_resolved(Err(ApiError::BadRequest(
            "Email already registered".to_string(),
        )));
        assert_eq!(wizard.phase(), &Phase::Conflict(ConflictKind::Email));
    }

    #[test]
    fn test_server_failure_stays_on_review() {
        let mut wizard = filled_to(Step::Review);
        wizard.submit();
        wizard.final_check_resolved(Ok(FinalCheck::default()));
        wizard.registration_resolved(Err(ApiError::InternalServerError));
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.phase(), &Phase::Collecting);
        assert!(
            wizard
                .transcript()
                .iter()
                .any(|message| message.content == "❌ Something went wrong with the registration.")
        );
    }

    #[test]
    fn test_start_fresh_resets() {
        let mut wizard = filled_to(Step::Review);
        wizard.submit();
        wizard.final_check_resolved(Ok(FinalCheck {
            email_taken: true,
            usn_taken: false,
        }));
        wizard.start_fresh();
        assert_eq!(wizard.step(), Step::Name);
        assert_eq!(wizard.form(), &RegistrationForm::default());
        assert_eq!(wizard.transcript().len(), 1);
        assert_eq!(wizard.availability(Field::Email), Availability::Unknown);
    }

    #[test]
    fn test_start_fresh_invalidates_in_flight_checks() {
        let mut wizard = filled_to(Step::Email);
        wizard.input_changed(Field::Email, "ada@uni.edu");
        let Some(Effect::CheckAvailability { seq, .. }) =
            wizard.request_live_check(Field::Email, "ada@uni.edu")
        else {
            panic!("expected live check");
        };
        wizard.start_fresh();
        wizard.availability_resolved(Field::Email, seq, Ok(true));
        assert_eq!(wizard.availability(Field::Email), Availability::Unknown);
    }

    #[test]
    fn test_retry_with_new_email_returns_to_review() {
        let mut wizard = filled_to(Step::Review);
        wizard.submit();
        wizard.final_check_resolved(Ok(FinalCheck {
            email_taken: true,
            usn_taken: false,
        }));
        wizard.retry_with_new_email();
        assert_eq!(wizard.step(), Step::Email);
        assert!(wizard.form().email.is_empty());
        assert_eq!(last(&wizard).content, RETRY_EMAIL_PROMPT);

        let Some(Effect::CheckAvailability { seq, .. }) = wizard.submit_input("lovelace@uni.edu")
        else {
            panic!("expected availability check");
        };
        wizard.availability_resolved(Field::Email, seq, Ok(false));
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.form().email, "lovelace@uni.edu");
    }
}
