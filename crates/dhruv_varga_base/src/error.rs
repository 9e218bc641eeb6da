//! Error types for divisional chart calculations.

use thiserror::Error;

/// Errors from varga calculations.
///
/// Every failure is surfaced to the caller as-is. Computation is pure, so
/// there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VargaError {
    /// Chart type text is not one of D1, D2, D3, D4, D7, D9, D10, D12, D16,
    /// D20, D24, D27, D30, D40, D45, D60.
    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),
    /// A sign position that cannot be placed in the zodiac.
    #[error("invalid placement: {0}")]
    InvalidPlacement(PlacementFault),
    /// Unrecognized graha name.
    #[error("unknown graha: {0}")]
    UnknownGraha(String),
    /// Unrecognized nakshatra name.
    #[error("unknown nakshatra: {0}")]
    UnknownNakshatra(String),
    /// Structurally inconsistent chart input.
    #[error("invalid chart: {0}")]
    InvalidChart(&'static str),
    /// Failure while building the serialized mapping.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// What is wrong with a rejected placement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementFault {
    /// Degrees within a rashi outside [0, 30) or not finite.
    #[error("{0} deg is outside [0, 30)")]
    Degrees(f64),
    /// Unrecognized rashi name.
    #[error("unknown sign {0:?}")]
    Sign(String),
}
