use caltab_lib::curve::Curve;
use caltab_lib::export::to_text;
use caltab_lib::table::CurvePoint;

/// Build the json report for a curve run
#[must_use]
pub fn render_json(curve: Curve, points: &[CurvePoint]) -> String {
    serde_json::json!({
        "curve": curve.as_str(),
        "count": points.len(),
        "points": points,
    })
    .to_string()
}

/// Render points in the requested output format
///
/// Both formats end with a trailing newline so the result can be written
/// verbatim to stdout or a file.
///
/// # Errors
///
/// Returns an error for an unknown format name.
pub fn render(format: &str, curve: Curve, points: &[CurvePoint]) -> Result<String, String> {
    match format {
        "text" => Ok(to_text(points)),
        "json" => Ok(format!("{}\n", render_json(curve, points))),
        _ => Err(format!("Unknown format '{format}'. Use 'text' or 'json'")),
    }
}
