//! Zodiac primitives and divisional (amsha) sign arithmetic.
//!
//! This crate provides:
//! - Rashi, graha and nakshatra enumerations with naming and parsing
//! - Rashi modality / element / parity classification and lordship
//! - The Shodashavarga sign division table and the placement mapper
//!
//! Everything here is pure computation over plain values.

pub mod amsha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod placement;
pub mod rashi;

pub use amsha::{
    Amsha, AmshaRequest, AmshaVariation, DivisionRule, SHODASHAVARGA, VARGAS,
    amsha_longitude, amsha_longitudes, amsha_placements, amsha_rule, amsha_start_rashi, divide,
    division_index,
};
pub use error::{PlacementFault, VargaError};
pub use graha::{ALL_GRAHAS, Dignity, Graha, rashi_lord};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra};
pub use placement::{MAX_SIGN_DEGREES, Placement, SIGN_SPAN, check_sign_degrees};
pub use rashi::{ALL_RASHIS, Rashi, RashiElement, RashiModality};
