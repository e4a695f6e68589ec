use crate::table::CurvePoint;
use std::fmt::Write as _;

/// Render curve points as plain text, one `channel raw db` line per point
#[must_use]
pub fn to_text(points: &[CurvePoint]) -> String {
    let mut output = String::new();
    for point in points {
        let _ = writeln!(output, "{} {} {}", point.channel, point.raw, point.db);
    }
    output
}

/// Write the plain-text rendering to a file
///
/// # Errors
///
/// Returns an I/O error if writing to the file fails.
pub fn to_text_file(points: &[CurvePoint], path: &str) -> std::io::Result<()> {
    std::fs::write(path, to_text(points))
}
