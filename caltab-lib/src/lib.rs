// Calibration table modules
pub mod curve;
pub mod error;
pub mod export;
pub mod literal;
pub mod record;
pub mod table;
