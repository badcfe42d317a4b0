//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised while validating observations or building a chart.
///
/// A house whose geometry is unavailable is not an error: the renderer
/// skips it and keeps going.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// No Ascendant observation; houses cannot be anchored.
    MissingAscendant,
    /// The same chart point appears more than once.
    DuplicatePoint(String),
    /// Sign number outside 1..=12.
    InvalidSign(i64),
    /// House number outside 1..=12 (0 when the house is absent).
    InvalidHouse(i64),
    /// Degree within sign not finite or outside [0, 30).
    InvalidDegree(f64),
    /// Malformed API payload.
    Wire(String),
    /// The chart document could not be serialized.
    Svg(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAscendant => write!(f, "Ascendant data is missing"),
            Self::DuplicatePoint(name) => write!(f, "duplicate chart point: {name}"),
            Self::InvalidSign(n) => write!(f, "invalid sign number: {n} (expected 1-12)"),
            Self::InvalidHouse(n) => write!(f, "invalid house number: {n} (expected 1-12)"),
            Self::InvalidDegree(d) => write!(f, "invalid degree within sign: {d}"),
            Self::Wire(msg) => write!(f, "wire format error: {msg}"),
            Self::Svg(msg) => write!(f, "SVG serialization error: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::Wire(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_ascendant() {
        assert_eq!(ChartError::MissingAscendant.to_string(), "Ascendant data is missing");
    }

    #[test]
    fn display_carries_value() {
        assert!(ChartError::InvalidSign(13).to_string().contains("13"));
        assert!(ChartError::DuplicatePoint("Sun".into()).to_string().contains("Sun"));
        assert!(ChartError::Svg("closed".into()).to_string().starts_with("SVG"));
    }

    #[test]
    fn from_json_error() {
        let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(ChartError::from(e), ChartError::Wire(_)));
    }
}
