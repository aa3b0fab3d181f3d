use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Deliberately loose: something@something.something, no whitespace or extra '@'
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Why a form cannot be submitted. The display text is shown to the visitor as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Tous les champs sont requis.")]
    MissingFields,
    #[error("Email invalide.")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Required fields first, then the email shape.
pub fn validate<'a>(
    required: impl IntoIterator<Item = &'a str>,
    email: &str,
) -> Result<(), ValidationError> {
    if required.into_iter().any(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_minimal_shape() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
        // only a dot somewhere after the '@' is needed
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "alice@example",
            "alice.example.com",
            "@example.com",
            "alice@.",
            "al ice@example.com",
            "alice@@example.com",
            " alice@example.com",
            "",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn blank_required_field_wins_over_bad_email() {
        assert_eq!(
            validate(["Alice", "   ", "Hello"], "not-an-email"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate(["", "alice@example.com"], "alice@example.com"),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn checks_email_once_fields_are_filled() {
        assert_eq!(
            validate(["Alice", "alice@example", "Hello"], "alice@example"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(validate(["Alice", "alice@example.com", "Hello"], "alice@example.com"), Ok(()));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::MissingFields.to_string(), "Tous les champs sont requis.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Email invalide.");
    }
}
