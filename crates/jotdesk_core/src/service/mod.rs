//! Controller-facing use-case services.
//!
//! # Responsibility
//! - Validate raw form input under the shared coercion contract.
//! - Orchestrate validate → store → result for each resource.
//!
//! # Invariants
//! - Invalid input never reaches a collection store.
//! - Rejections echo the submitted raw values unchanged, so the caller
//!   can redisplay the form as the user typed it.

pub mod calculator_service;
pub mod note_service;

/// Trims a required free-text field.
///
/// Returns `None` when the field is absent or empty after trimming.
pub(crate) fn required_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a required exact-integer field.
///
/// Surrounding whitespace is tolerated; fractional or otherwise
/// non-integer strings are rejected.
pub(crate) fn required_integer(value: Option<&str>) -> Option<i64> {
    value?.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::{required_integer, required_text};

    #[test]
    fn required_text_trims_and_rejects_blank_input() {
        assert_eq!(required_text(Some("  hello  ")), Some("hello".to_string()));
        assert_eq!(required_text(Some("")), None);
        assert_eq!(required_text(Some("   \t")), None);
        assert_eq!(required_text(None), None);
    }

    #[test]
    fn required_integer_accepts_exact_integers_only() {
        assert_eq!(required_integer(Some(" 42 ")), Some(42));
        assert_eq!(required_integer(Some("-7")), Some(-7));
        assert_eq!(required_integer(Some("7.5")), None);
        assert_eq!(required_integer(Some("7.0")), None);
        assert_eq!(required_integer(Some("abc")), None);
        assert_eq!(required_integer(Some("")), None);
        assert_eq!(required_integer(None), None);
    }
}
