//! Zodiacal placement: a rashi plus degrees within it.

use serde::{Deserialize, Serialize};

use crate::error::{PlacementFault, VargaError};
use crate::rashi::Rashi;

/// Span of one rashi in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Largest representable degree value strictly below [`SIGN_SPAN`].
pub const MAX_SIGN_DEGREES: f64 = f64::from_bits(SIGN_SPAN.to_bits() - 1);

/// A position inside one rashi.
///
/// `sign_degrees` is always finite and in [0, 30). Construction goes
/// through [`Placement::new`] (or serde, which applies the same check).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlacement", rename_all = "camelCase")]
pub struct Placement {
    #[serde(rename = "sign")]
    rashi: Rashi,
    sign_degrees: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlacement {
    sign: Rashi,
    sign_degrees: f64,
}

impl TryFrom<RawPlacement> for Placement {
    type Error = VargaError;

    fn try_from(raw: RawPlacement) -> Result<Self, Self::Error> {
        Placement::new(raw.sign, raw.sign_degrees)
    }
}

impl Placement {
    /// Validated constructor.
    pub fn new(rashi: Rashi, sign_degrees: f64) -> Result<Self, VargaError> {
        check_sign_degrees(sign_degrees)?;
        Ok(Self {
            rashi,
            sign_degrees,
        })
    }

    /// Build from a rashi name (western or Sanskrit) and degrees.
    pub fn from_names(sign: &str, sign_degrees: f64) -> Result<Self, VargaError> {
        Self::new(Rashi::from_name(sign)?, sign_degrees)
    }

    /// Build from an absolute sidereal longitude, normalised to [0, 360).
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let lon = sidereal_lon_deg.rem_euclid(360.0);
        // Clamp to 11 in case of floating point edge (exactly 360.0)
        let rashi_idx = ((lon / SIGN_SPAN).floor() as u8).min(11);
        let degrees = lon - rashi_idx as f64 * SIGN_SPAN;
        Self::from_parts(Rashi::from_index(rashi_idx), degrees)
    }

    /// Crate-internal constructor for computed values; clamps into [0, 30).
    pub(crate) fn from_parts(rashi: Rashi, sign_degrees: f64) -> Self {
        Self {
            rashi,
            sign_degrees: clamp_sign_degrees(sign_degrees),
        }
    }

    pub fn rashi(&self) -> Rashi {
        self.rashi
    }

    /// Decimal degrees within the rashi, [0, 30).
    pub fn sign_degrees(&self) -> f64 {
        self.sign_degrees
    }

    /// Absolute sidereal longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        self.rashi.index() as f64 * SIGN_SPAN + self.sign_degrees
    }
}

/// Reject degrees that cannot describe a position inside one rashi.
pub fn check_sign_degrees(sign_degrees: f64) -> Result<(), VargaError> {
    if sign_degrees.is_finite() && (0.0..SIGN_SPAN).contains(&sign_degrees) {
        Ok(())
    } else {
        Err(VargaError::InvalidPlacement(PlacementFault::Degrees(
            sign_degrees,
        )))
    }
}

fn clamp_sign_degrees(sign_degrees: f64) -> f64 {
    sign_degrees.clamp(0.0, MAX_SIGN_DEGREES)
}
