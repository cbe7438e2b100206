//! Shared field validators and error flattening.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Accepts digits, spaces, dashes, dots, parentheses and a leading `+`.
///
/// # Errors
///
/// Returns a `phone` [`ValidationError`] for any other character or a
/// value longer than 120 characters.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let valid_chars = phone.char_indices().all(|(i, c)| {
        c.is_ascii_digit() || matches!(c, ' ' | '-' | '.' | '(' | ')') || (c == '+' && i == 0)
    });
    if valid_chars && phone.len() <= 120 && phone.chars().any(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone");
        error.message = Some(Cow::Borrowed("phone number is invalid"));
        Err(error)
    }
}

/// Flattens validator output into sorted, user-facing messages.
#[must_use]
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut out: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
            })
        })
        .collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_common_formats() {
        assert!(validate_phone("123-123-1234").is_ok());
        assert!(validate_phone("+1 (415) 555.0100").is_ok());
    }

    #[test]
    fn phone_rejects_letters() {
        assert!(validate_phone("call me").is_err());
        assert!(validate_phone("12+34").is_err());
        assert!(validate_phone("--").is_err());
    }

    #[test]
    fn messages_fall_back_to_field_name() {
        let mut errors = ValidationErrors::new();
        errors.add("city", ValidationError::new("length"));
        let mut phone = ValidationError::new("phone");
        phone.message = Some(Cow::Borrowed("phone number is invalid"));
        errors.add("phone", phone);

        assert_eq!(
            messages(&errors),
            vec![
                "city is invalid".to_string(),
                "phone number is invalid".to_string()
            ]
        );
    }
}
