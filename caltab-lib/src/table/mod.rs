use crate::curve::{Curve, CurveError};
use crate::error::TableError;
use crate::record::{self, Record};
use serde::Serialize;
use std::path::Path;

/// One calibrated output point: `(channel, raw, dB)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePoint {
    pub channel: i64,
    pub raw: i64,
    pub db: f64,
}

impl CurvePoint {
    #[must_use]
    pub fn new(channel: i64, raw: i64, db: f64) -> Self {
        CurvePoint { channel, raw, db }
    }
}

/// Read a data file and parse every non-comment line into a record
///
/// Line numbers in errors are 1-based file positions, counting comment
/// lines. The file handle is scoped to this call.
///
/// # Errors
///
/// Returns `TableError::FileAccess` if the file cannot be read, and the
/// first `Parse`/`ShortRecord` error encountered otherwise.
pub fn load_records(path: &Path) -> Result<Vec<Record>, TableError> {
    let source = std::fs::read_to_string(path).map_err(|source| TableError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        if record::is_comment(text) {
            continue;
        }
        records.push(Record::parse(idx + 1, text)?);
    }

    Ok(records)
}

/// Apply a curve to every record's raw value, preserving input order
///
/// # Errors
///
/// Returns `TableError::Domain` for the first record whose raw value is
/// zero or negative; no partial result is produced.
pub fn transform(records: &[Record], curve: Curve) -> Result<Vec<CurvePoint>, TableError> {
    let mut points = Vec::with_capacity(records.len());
    for rec in records {
        let db = match curve.apply(rec.raw()) {
            Ok(db) => db,
            Err(CurveError::NonPositive(value)) => {
                return Err(TableError::Domain {
                    line: rec.line,
                    value,
                })
            }
        };
        points.push(CurvePoint::new(rec.channel(), rec.raw(), db));
    }
    Ok(points)
}

/// Load a data file and run it through a curve in one step
///
/// # Errors
///
/// Propagates the first error from `load_records` or `transform`.
pub fn load_table(path: &Path, curve: Curve) -> Result<Vec<CurvePoint>, TableError> {
    let records = load_records(path)?;
    transform(&records, curve)
}
