//! Field checks applied before a row is written.

use thiserror::Error;

/// Maximum width of name-like columns.
pub const NAME_MAX_CHARS: usize = 100;
/// Maximum width of `museum.location`.
pub const LOCATION_MAX_CHARS: usize = 150;
/// Maximum width of `gallery.theme`.
pub const THEME_MAX_CHARS: usize = 100;

/// A field value rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Required text must be non-blank and at most `max` characters.
pub fn required_text(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, "must not be empty"));
    }
    max_chars(field, value, max)
}

/// Optional text is only length-checked.
pub fn optional_text(field: &'static str, value: Option<&str>, max: usize) -> Result<(), FieldError> {
    match value {
        Some(v) => max_chars(field, v, max),
        None => Ok(()),
    }
}

fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    let len = value.chars().count();
    if len > max {
        return Err(FieldError::new(
            field,
            format!("at most {} characters allowed, got {}", max, len),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("name", "   ", NAME_MAX_CHARS).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn test_required_text_counts_chars_not_bytes() {
        let value = "é".repeat(NAME_MAX_CHARS);
        assert!(required_text("name", &value, NAME_MAX_CHARS).is_ok());

        let value = "é".repeat(NAME_MAX_CHARS + 1);
        assert!(required_text("name", &value, NAME_MAX_CHARS).is_err());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(optional_text("theme", None, THEME_MAX_CHARS).is_ok());
        assert!(optional_text("theme", Some(""), THEME_MAX_CHARS).is_ok());
    }
}
