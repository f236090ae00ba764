//! JSON encoding of change groups.

use crate::error::RenderError;

use super::group::ChangeGroup;

/// Encode groups as a JSON array.
pub fn render_json(groups: &[ChangeGroup], pretty: bool) -> Result<String, RenderError> {
    let json = if pretty {
        serde_json::to_string_pretty(groups)?
    } else {
        serde_json::to_string(groups)?
    };
    Ok(json)
}

/// Decode a JSON report back into groups.
pub fn parse_report_json(json: &str) -> Result<Vec<ChangeGroup>, RenderError> {
    Ok(serde_json::from_str(json)?)
}
