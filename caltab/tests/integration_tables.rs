use caltab_lib::curve::Curve;
use caltab_lib::error::TableError;
use caltab_lib::table::{load_records, load_table, transform};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_range_pipeline() {
    let points = load_table(&fixture_path("range.dat"), Curve::Range).expect("pipeline failed");

    // Two comment lines, four data lines
    assert_eq!(points.len(), 4);

    // Order matches the file
    let channels: Vec<i64> = points.iter().map(|p| p.channel).collect();
    assert_eq!(channels, vec![1, 2, 3, 4]);

    // Exact IEEE-754 results of 2.0 * (90.0 - 4.5 * ln(x))
    for point in &points {
        let x = point.raw as f64;
        assert_eq!(point.db, 2.0 * (90.0 - 4.5 * x.ln()));
    }
    assert!((points[0].db - 138.55).abs() < 0.01);
}

#[test]
fn test_threshold_pipeline() {
    let points =
        load_table(&fixture_path("thresh.dat"), Curve::Threshold).expect("pipeline failed");

    assert_eq!(points.len(), 3);

    // Exact IEEE-754 results of (10.0 * ln(x) - 160.0) * 6.0 / 7.0
    for point in &points {
        let x = point.raw as f64;
        assert_eq!(point.db, (10.0 * x.ln() - 160.0) * 6.0 / 7.0);
    }
    assert!((points[0].db + 103.61).abs() < 0.01);
}

#[test]
fn test_comment_lines_excluded() {
    let records = load_records(&fixture_path("range.dat")).expect("load failed");
    assert_eq!(records.len(), 4);
    // First data line sits below the two-line comment header
    assert_eq!(records[0].line, 3);
}

#[test]
fn test_mixed_literal_bases() {
    let records = load_records(&fixture_path("bases.dat")).expect("load failed");
    let raws: Vec<i64> = records.iter().map(caltab_lib::record::Record::raw).collect();
    assert_eq!(raws, vec![32, 15, 10, 64]);

    // All parse the same way downstream
    let points = transform(&records, Curve::Range).expect("transform failed");
    assert_eq!(points[0].db, 2.0 * (90.0 - 4.5 * (32.0f64).ln()));
}

#[test]
fn test_bad_token_halts_load() {
    let err = load_records(&fixture_path("bad_token.dat")).unwrap_err();
    match err {
        TableError::Parse { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn test_nonpositive_raw_halts_transform() {
    let err = load_table(&fixture_path("nonpositive.dat"), Curve::Threshold).unwrap_err();
    match err {
        TableError::Domain { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, 0);
        }
        other => panic!("expected Domain, got {other:?}"),
    }
}

#[test]
fn test_blank_line_is_short_record() {
    let err = load_records(&fixture_path("short.dat")).unwrap_err();
    assert!(matches!(err, TableError::ShortRecord { line: 2, found: 0 }));
}

#[test]
fn test_missing_input_file() {
    let err = load_records(&fixture_path("does_not_exist.dat")).unwrap_err();
    match err {
        TableError::FileAccess { path, .. } => {
            assert!(path.ends_with("does_not_exist.dat"));
        }
        other => panic!("expected FileAccess, got {other:?}"),
    }
}
