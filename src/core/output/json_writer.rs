//! JSON writer for reports.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;

/// Converts a report to pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "selection": "Overall",
///   "stats": { "messages": 3, "words": 2, "media": 1, "links": 0 },
///   "busy_users": { "top": [["Alice", 2]], "shares": [...] },
///   ...
/// }
/// ```
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to a JSON file.
pub fn write_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
