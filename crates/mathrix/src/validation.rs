//! Client-side format checks for the registration fields.
//!
//! These only catch obvious input mistakes; uniqueness and everything else is
//! decided by the backend.

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_USN_LEN: usize = 5;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,
    #[error("USN is required.")]
    UsnRequired,
    #[error("USN must be at least 5 characters long.")]
    UsnTooShort,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Please enter a valid email address.")]
    EmailInvalid,
    #[error("Password is required.")]
    PasswordRequired,
    #[error("Password must be at least 6 characters long.")]
    PasswordTooShort,
    #[error("Please confirm your password.")]
    ConfirmationRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Come on! You must have at least one superpower! 🦸 Select at least one skill to continue.")]
    NoSkills,
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::NameRequired)
    } else if char_len(value) < MIN_NAME_LEN {
        Err(ValidationError::NameTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_usn(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::UsnRequired)
    } else if char_len(value) < MIN_USN_LEN {
        Err(ValidationError::UsnTooShort)
    } else {
        Ok(())
    }
}

pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmailRequired)
    } else if !is_email_shaped(value) {
        Err(ValidationError::EmailInvalid)
    } else {
        Ok(())
    }
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::PasswordRequired)
    } else if char_len(value) < MIN_PASSWORD_LEN {
        Err(ValidationError::PasswordTooShort)
    } else {
        Ok(())
    }
}

pub fn validate_confirmation(value: &str, password: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::ConfirmationRequired)
    } else if value != password {
        Err(ValidationError::PasswordMismatch)
    } else {
        Ok(())
    }
}

pub fn validate_skills(skills: &[String]) -> Result<(), ValidationError> {
    if skills.is_empty() {
        Err(ValidationError::NoSkills)
    } else {
        Ok(())
    }
}

/// Whether a partially typed email is worth a live availability check.
pub fn email_checkable(value: &str) -> bool {
    !value.is_empty() && value.contains('@')
}

/// Whether a partially typed USN is worth a live availability check.
pub fn usn_checkable(value: &str) -> bool {
    char_len(value.trim()) >= MIN_USN_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_two_or_more_chars() {
        for name in ["Al", "Ada", "Grace Hopper", "李雷"] {
            assert_eq!(validate_name(name), Ok(()), "{name}");
        }
    }

    #[test]
    fn test_name_rejects_short_or_empty() {
        assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
        assert_eq!(validate_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
        assert_eq!(validate_name(" A "), Err(ValidationError::NameTooShort));
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Name must be at least 2 characters long."
        );
    }

    #[test]
    fn test_usn_length() {
        assert_eq!(validate_usn("1MS2"), Err(ValidationError::UsnTooShort));
        assert_eq!(validate_usn("1MS21CS001"), Ok(()));
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@uni.edu.in", "x+y@d.io"] {
            assert_eq!(validate_email(ok), Ok(()), "{ok}");
        }
        for bad in [
            "plain",
            "a@b",
            "@b.com",
            "a@.com",
            "a@b.",
            "a b@c.com",
            "a@@b.com",
            "a@b@c.com",
        ] {
            assert_eq!(
                validate_email(bad),
                Err(ValidationError::EmailInvalid),
                "{bad}"
            );
        }
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("12345"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("123456"), Ok(()));
        assert_eq!(validate_password("      "), Err(ValidationError::PasswordRequired));
    }

    #[test]
    fn test_confirmation_must_match() {
        assert_eq!(validate_confirmation("secret1", "secret1"), Ok(()));
        assert_eq!(
            validate_confirmation("secret2", "secret1"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_confirmation("", "secret1"),
            Err(ValidationError::ConfirmationRequired)
        );
    }

    #[test]
    fn test_skills_required() {
        assert_eq!(validate_skills(&[]), Err(ValidationError::NoSkills));
        assert_eq!(validate_skills(&["algebra".to_string()]), Ok(()));
    }

    #[test]
    fn test_live_check_thresholds() {
        assert!(!email_checkable("ada"));
        assert!(email_checkable("ada@"));
        assert!(!usn_checkable(" 1MS2 "));
        assert!(usn_checkable("1MS21"));
    }
}
