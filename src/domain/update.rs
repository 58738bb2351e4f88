//! Partial-update semantics shared by every entity.
//!
//! A replacement only lands when it is present and non-empty; anything else
//! keeps the current value.

/// Overwrite `field` with `value` if `value` is a non-empty string.
///
/// Returns `true` if the field was changed.
pub(crate) fn replace_text(field: &mut String, value: Option<String>) -> bool {
    match value {
        Some(value) if !value.is_empty() => {
            *field = value;
            true
        }
        _ => false,
    }
}

/// Overwrite `field` with `value` if present.
///
/// Returns `true` if the field was changed.
pub(crate) fn replace<T>(field: &mut T, value: Option<T>) -> bool {
    value.map(|value| *field = value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_keeps_current_value() {
        let mut field = "Doe".to_string();
        assert!(!replace_text(&mut field, Some(String::new())));
        assert!(!replace_text(&mut field, None));
        assert_eq!(field, "Doe");
    }

    #[test]
    fn non_empty_text_overwrites_exactly() {
        let mut field = "Doe".to_string();
        assert!(replace_text(&mut field, Some("  Smith ".to_string())));
        assert_eq!(field, "  Smith ");
    }

    #[test]
    fn present_value_overwrites() {
        let mut credits = 3;
        assert!(replace(&mut credits, Some(4)));
        assert!(!replace(&mut credits, None));
        assert_eq!(credits, 4);
    }
}
