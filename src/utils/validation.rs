use crate::utils::{ConvertError, ConvertResult};

/// Parse a raw dimension text field into an optional pixel count.
///
/// Empty or whitespace-only input means "not set". Anything else must parse
/// to a positive integer; this is surfaced to the user before any background
/// work starts.
pub fn parse_dimension(field: &str, text: &str) -> ConvertResult<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value: u32 = text.parse().map_err(|_| {
        ConvertError::validation(format!(
            "Invalid {field} value: {text:?}. Must be a positive integer"
        ))
    })?;

    if value == 0 {
        return Err(ConvertError::validation(format!("{field} cannot be 0")));
    }

    Ok(Some(value))
}

/// Validate an already-parsed resize target.
pub fn validate_dimensions(width: Option<u32>, height: Option<u32>) -> ConvertResult<()> {
    if width == Some(0) {
        return Err(ConvertError::validation("Width cannot be 0"));
    }
    if height == Some(0) {
        return Err(ConvertError::validation("Height cannot be 0"));
    }
    Ok(())
}
