//! Shared form validation rules.
//!
//! Forms collect every failing field into [`FieldErrors`] rather than stopping
//! at the first problem, so the view can mark all invalid inputs at once.

/// Characters allowed in a password besides ASCII letters and digits.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";
pub const PASSWORD_MIN_LEN: usize = 6;

/// Per-field validation messages, in the order they were found.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn required(&mut self, field: &'static str, label: &str) {
        self.push(field, format!("{} is required.", label));
    }

    /// First message recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|(_, message)| message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Loose shape check: some text, one `@`, and a dotted domain.
pub fn check_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.".to_string());
    }

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.') =>
        {
            Ok(())
        }
        _ => Err("Enter a valid email address.".to_string()),
    }
}

pub fn check_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required.".to_string());
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(format!(
            "Password must be at least {} characters long.",
            PASSWORD_MIN_LEN
        ));
    }

    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || is_special(c));
    let complete = password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special);

    if allowed && complete {
        Ok(())
    } else {
        Err(format!(
            "Password must include at least one uppercase letter, one lowercase letter, one number, and one special character ({}).",
            PASSWORD_SPECIALS
        ))
    }
}

/// Digits of a phone number with spaces, dashes, brackets and a leading `+`
/// removed.
pub fn normalize_phone(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter a valid phone number.".to_string());
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation::ValidationError;

    mod check_email {
        use super::*;

        /// Expect ordinary addresses to pass
        #[test]
        fn accepts_address() {
            assert!(check_email("jane@example.com").is_ok());
        }

        /// Expect addresses without a usable domain to fail
        #[test]
        fn rejects_malformed() {
            assert!(check_email("").is_err());
            assert!(check_email("jane").is_err());
            assert!(check_email("@example.com").is_err());
            assert!(check_email("jane@localhost").is_err());
            assert!(check_email("jane@example.com.").is_err());
        }
    }

    mod check_password {
        use super::*;

        /// Expect a password with every character class to pass
        #[test]
        fn accepts_strong_password() {
            assert!(check_password("Abc12!").is_ok());
        }

        /// Expect the length rule to be reported before composition
        #[test]
        fn rejects_short_password() {
            let err = check_password("Ab1!").unwrap_err();

            assert!(err.contains("at least 6"));
        }

        /// Expect missing character classes to fail
        #[test]
        fn rejects_incomplete_password() {
            assert!(check_password("abcdef1!").is_err());
            assert!(check_password("ABCDEF1!").is_err());
            assert!(check_password("Abcdefg!").is_err());
            assert!(check_password("Abcdefg1").is_err());
        }

        /// Expect characters outside the allowed set to fail
        #[test]
        fn rejects_disallowed_characters() {
            assert!(check_password("Abc12! ").is_err());
            assert!(check_password("Abc12#x").is_err());
        }
    }

    mod normalize_phone {
        use super::*;

        /// Expect separators to be stripped
        #[test]
        fn strips_separators() {
            assert_eq!(normalize_phone("+12 345-6789").unwrap(), "123456789");
            assert_eq!(normalize_phone("(03) 1234 5678").unwrap(), "0312345678");
        }

        /// Expect letters to be rejected
        #[test]
        fn rejects_letters() {
            assert!(normalize_phone("012-CALL-NOW").is_err());
            assert!(normalize_phone("   ").is_err());
        }
    }

    mod field_errors {
        use super::*;

        /// Expect the summary to list messages in insertion order
        #[test]
        fn summary_joins_messages() {
            let mut errors = FieldErrors::new();
            errors.required("email", "Email");
            errors.push("password", "Too short.");

            assert_eq!(errors.summary(), "Email is required. Too short.");
            assert_eq!(errors.len(), 2);
            assert_eq!(errors.get("password"), Some("Too short."));
        }

        /// Expect a field-level error to display as the form summary
        #[test]
        fn validation_error_displays_summary() {
            let mut errors = FieldErrors::new();
            errors.push("age", "Age must be a whole number.");
            errors.push("age", "Age must not be negative.");

            assert_eq!(errors.get("age"), Some("Age must be a whole number."));
            assert_eq!(
                ValidationError::Fields(errors).to_string(),
                "Age must be a whole number. Age must not be negative."
            );
        }
    }
}
