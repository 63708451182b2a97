//! Small shared helpers

/// Render rule for absent display fields: show a dash.
pub const FIELD_PLACEHOLDER: &str = "-";

/// Returns the field value, or the dash placeholder when absent or blank.
pub fn field_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => FIELD_PLACEHOLDER,
    }
}
