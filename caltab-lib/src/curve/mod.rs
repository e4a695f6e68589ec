use thiserror::Error;

/// Why a curve could not be applied to a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The logarithm argument was zero or negative.
    #[error("logarithm undefined for {0}")]
    NonPositive(i64),
}

/// The two fixed calibration curves mapping raw control values to decibels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Range,
    Threshold,
}

impl Curve {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "range" => Some(Curve::Range),
            "threshold" | "thresh" => Some(Curve::Threshold),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Curve::Range => "range",
            Curve::Threshold => "threshold",
        }
    }

    /// Conventional input file name for this curve
    #[must_use]
    pub fn default_input(&self) -> &'static str {
        match self {
            Curve::Range => "range.dat",
            Curve::Threshold => "thresh.dat",
        }
    }

    /// Map a raw control value to decibels
    ///
    /// Range: `2.0 * (90.0 - 4.5 * ln(x))`
    /// Threshold: `(10.0 * ln(x) - 160.0) * 6.0 / 7.0`
    ///
    /// The evaluation order is part of the contract: results must match
    /// these expressions exactly under IEEE-754 double rounding.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::NonPositive` when `raw <= 0`.
    pub fn apply(&self, raw: i64) -> Result<f64, CurveError> {
        if raw <= 0 {
            return Err(CurveError::NonPositive(raw));
        }
        let x = raw as f64;
        let db = match self {
            Curve::Range => 2.0 * (90.0 - 4.5 * x.ln()),
            Curve::Threshold => (10.0 * x.ln() - 160.0) * 6.0 / 7.0,
        };
        Ok(db)
    }
}
