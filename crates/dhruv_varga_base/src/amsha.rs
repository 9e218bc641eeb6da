//! Amsha (divisional chart / varga chart) sign arithmetic.
//!
//! Each amsha divides the 30-degree rashi span into N equal parts and maps
//! each part to a target rashi. The target for part k is found by taking the
//! starting rashi for the natal sign and stepping k strides through the
//! zodiac. The position inside the part is then stretched back over a full
//! 30-degree sign.
//!
//! Starting rashis follow the BPHS Shodashavarga definitions. Schemes differ
//! in what selects the start: the sign itself, its modality (movable / fixed
//! / dual), its element, or its parity (odd / even).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VargaError;
use crate::placement::{Placement, SIGN_SPAN};
use crate::rashi::{Rashi, RashiElement, RashiModality};

// ---------------------------------------------------------------------------
// Amsha enum
// ---------------------------------------------------------------------------

/// The 16 Shodashavarga charts (D1 plus 15 divisional charts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Amsha {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// All 16 supported charts in order.
pub const SHODASHAVARGA: [Amsha; 16] = [
    Amsha::D1,
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D27,
    Amsha::D30,
    Amsha::D40,
    Amsha::D45,
    Amsha::D60,
];

/// The 15 true divisional charts (everything except D1).
pub const VARGAS: [Amsha; 15] = [
    Amsha::D2,
    Amsha::D3,
    Amsha::D4,
    Amsha::D7,
    Amsha::D9,
    Amsha::D10,
    Amsha::D12,
    Amsha::D16,
    Amsha::D20,
    Amsha::D24,
    Amsha::D27,
    Amsha::D30,
    Amsha::D40,
    Amsha::D45,
    Amsha::D60,
];

impl Amsha {
    /// Number of divisions per rashi.
    pub const fn divisions(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    /// Numeric D-number code.
    pub const fn code(self) -> u16 {
        self.divisions()
    }

    /// Width of one division in degrees (30 / N).
    pub fn division_span(self) -> f64 {
        SIGN_SPAN / self.divisions() as f64
    }

    /// Short label ("D9").
    pub const fn label(self) -> &'static str {
        match self {
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D12 => "D12",
            Self::D16 => "D16",
            Self::D20 => "D20",
            Self::D24 => "D24",
            Self::D27 => "D27",
            Self::D30 => "D30",
            Self::D40 => "D40",
            Self::D45 => "D45",
            Self::D60 => "D60",
        }
    }

    /// Reverse lookup from D-number code.
    pub fn from_code(code: u16) -> Option<Amsha> {
        SHODASHAVARGA.iter().copied().find(|a| a.code() == code)
    }
}

impl Display for Amsha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses "D9" / "d9"; anything outside the 16 charts is rejected.
impl FromStr for Amsha {
    type Err = VargaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || VargaError::UnsupportedChartType(s.to_string());
        let digits = s
            .trim()
            .strip_prefix(['D', 'd'])
            .ok_or_else(unsupported)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unsupported());
        }
        digits
            .parse::<u16>()
            .ok()
            .and_then(Amsha::from_code)
            .ok_or_else(unsupported)
    }
}

// ---------------------------------------------------------------------------
// Variation
// ---------------------------------------------------------------------------

/// Variation selection for amsha computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AmshaVariation {
    /// Parashari rules (default for every amsha).
    #[default]
    Parashari,
    /// D2 only: zodiacal cycling, part k of sign s falls in sign 2s + k.
    CyclicHora,
}

impl AmshaVariation {
    /// Check if this variation is applicable to the given amsha.
    pub fn is_applicable_to(self, amsha: Amsha) -> bool {
        match self {
            Self::Parashari => true,
            Self::CyclicHora => amsha == Amsha::D2,
        }
    }
}

// ---------------------------------------------------------------------------
// AmshaRequest
// ---------------------------------------------------------------------------

/// One requested divisional chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmshaRequest {
    pub amsha: Amsha,
    pub variation: Option<AmshaVariation>,
}

impl AmshaRequest {
    /// Create a request with the default variation.
    pub fn new(amsha: Amsha) -> Self {
        Self {
            amsha,
            variation: None,
        }
    }

    /// Create a request with a specific variation.
    pub fn with_variation(amsha: Amsha, variation: AmshaVariation) -> Self {
        Self {
            amsha,
            variation: Some(variation),
        }
    }

    /// The variation actually applied.
    ///
    /// Unset, or set to one that does not apply to this amsha, means Parashari.
    pub fn effective_variation(&self) -> AmshaVariation {
        match self.variation {
            Some(v) if v.is_applicable_to(self.amsha) => v,
            _ => AmshaVariation::Parashari,
        }
    }
}

impl From<Amsha> for AmshaRequest {
    fn from(amsha: Amsha) -> Self {
        Self::new(amsha)
    }
}

impl FromStr for AmshaRequest {
    type Err = VargaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Amsha>().map(Self::new)
    }
}

// ---------------------------------------------------------------------------
// Sign division table
// ---------------------------------------------------------------------------

/// Where the divisions of one natal rashi land.
///
/// Division k falls in `start` advanced by `k * stride` signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionRule {
    pub start: Rashi,
    pub stride: i8,
}

impl DivisionRule {
    const fn forward(start: Rashi) -> Self {
        Self { start, stride: 1 }
    }

    /// Target rashi of the k-th division.
    pub fn rashi_at(&self, div_idx: u16) -> Rashi {
        let steps = (div_idx % 12) as i32 * self.stride as i32;
        self.start.advance(steps)
    }
}

fn by_parity(natal: Rashi, odd: Rashi, even: Rashi) -> Rashi {
    if natal.is_odd() { odd } else { even }
}

fn by_modality(natal: Rashi, movable: Rashi, fixed: Rashi, dual: Rashi) -> Rashi {
    match natal.modality() {
        RashiModality::Movable => movable,
        RashiModality::Fixed => fixed,
        RashiModality::Dual => dual,
    }
}

/// Division rule for a natal rashi under the given amsha and variation.
pub fn amsha_rule(natal: Rashi, amsha: Amsha, variation: AmshaVariation) -> DivisionRule {
    let variation = if variation.is_applicable_to(amsha) {
        variation
    } else {
        AmshaVariation::Parashari
    };

    match amsha {
        Amsha::D1 | Amsha::D12 | Amsha::D60 => DivisionRule::forward(natal),

        // Hora: odd signs Sun (Simha) then Moon (Karka), even signs reversed
        Amsha::D2 => match variation {
            AmshaVariation::CyclicHora => {
                DivisionRule::forward(Rashi::from_index(natal.index() * 2))
            }
            AmshaVariation::Parashari => {
                if natal.is_odd() {
                    DivisionRule {
                        start: Rashi::Simha,
                        stride: -1,
                    }
                } else {
                    DivisionRule::forward(Rashi::Karka)
                }
            }
        },

        // Drekkana: 1st, 5th, 9th from the sign
        Amsha::D3 => DivisionRule {
            start: natal,
            stride: 4,
        },
        // Chaturthamsha: 1st, 4th, 7th, 10th from the sign
        Amsha::D4 => DivisionRule {
            start: natal,
            stride: 3,
        },

        Amsha::D7 => DivisionRule::forward(by_parity(natal, natal, natal.nth_from(7))),
        Amsha::D10 => DivisionRule::forward(by_parity(natal, natal, natal.nth_from(9))),
        Amsha::D24 => DivisionRule::forward(by_parity(natal, Rashi::Simha, Rashi::Karka)),
        Amsha::D30 => DivisionRule::forward(by_parity(natal, Rashi::Mesha, Rashi::Meena)),
        Amsha::D40 => DivisionRule::forward(by_parity(natal, Rashi::Mesha, Rashi::Tula)),

        Amsha::D9 => DivisionRule::forward(by_modality(
            natal,
            natal,
            natal.nth_from(9),
            natal.nth_from(5),
        )),
        Amsha::D16 | Amsha::D45 => DivisionRule::forward(by_modality(
            natal,
            Rashi::Mesha,
            Rashi::Simha,
            Rashi::Dhanu,
        )),
        Amsha::D20 => DivisionRule::forward(by_modality(
            natal,
            Rashi::Mesha,
            Rashi::Dhanu,
            Rashi::Simha,
        )),

        Amsha::D27 => DivisionRule::forward(match natal.element() {
            RashiElement::Fire => Rashi::Mesha,
            RashiElement::Earth => Rashi::Karka,
            RashiElement::Air => Rashi::Tula,
            RashiElement::Water => Rashi::Makara,
        }),
    }
}

/// Starting rashi of the division sequence for a natal rashi (Parashari).
pub fn amsha_start_rashi(natal: Rashi, amsha: Amsha) -> Rashi {
    amsha_rule(natal, amsha, AmshaVariation::Parashari).start
}

// ---------------------------------------------------------------------------
// Core transformation
// ---------------------------------------------------------------------------

/// 0-based division index of a placement, clamped to [0, N-1].
///
/// Computed on the scaled degree (degrees * N / 30) so that exact division
/// boundaries such as 10 deg in D9 land on the later division.
pub fn division_index(placement: &Placement, amsha: Amsha) -> u16 {
    let n = amsha.divisions();
    let scaled = placement.sign_degrees() * n as f64;
    ((scaled / SIGN_SPAN).floor() as u16).min(n - 1)
}

/// Map a placement into the given amsha.
///
/// Returns the divisional rashi and the position within the division
/// stretched to [0, 30).
pub fn divide(placement: &Placement, amsha: Amsha, variation: Option<AmshaVariation>) -> Placement {
    let variation = variation.unwrap_or_default();
    let n = amsha.divisions();
    let div_idx = division_index(placement, amsha);
    let rule = amsha_rule(placement.rashi(), amsha, variation);

    // (deg - k * span) * N, without dividing by the span first
    let scaled_pos = placement.sign_degrees() * n as f64 - div_idx as f64 * SIGN_SPAN;

    Placement::from_parts(rule.rashi_at(div_idx), scaled_pos)
}

/// Transform a sidereal longitude through an amsha division.
///
/// Returns amsha-transformed sidereal longitude in [0, 360).
pub fn amsha_longitude(sidereal_lon: f64, amsha: Amsha, variation: Option<AmshaVariation>) -> f64 {
    divide(&Placement::from_longitude(sidereal_lon), amsha, variation).longitude()
}

/// Batch: one longitude through multiple amshas.
pub fn amsha_longitudes(sidereal_lon: f64, requests: &[AmshaRequest]) -> Vec<f64> {
    requests
        .iter()
        .map(|req| amsha_longitude(sidereal_lon, req.amsha, req.variation))
        .collect()
}

/// Batch: one placement through multiple amshas.
pub fn amsha_placements(placement: &Placement, requests: &[AmshaRequest]) -> Vec<Placement> {
    requests
        .iter()
        .map(|req| divide(placement, req.amsha, req.variation))
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
