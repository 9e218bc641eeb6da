//! Chart model types: graha positions, lagna, houses, rasi and divisional charts.
//!
//! Serde field names follow the JSON shape consumed downstream (`sign`,
//! `signDegrees`, `occupants`, ...). Every graha and lagna entry carries
//! `signDegrees` unconditionally.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use dhruv_varga_base::{
    Amsha, AmshaVariation, Dignity, Graha, Nakshatra, Placement, Rashi, VargaError,
    check_sign_degrees, rashi_lord,
};

use crate::bhava::rebuild_houses;

/// Number of houses in every chart.
pub const HOUSE_COUNT: usize = 12;

// ---------------------------------------------------------------------------
// Placed capability
// ---------------------------------------------------------------------------

/// Anything that sits at a zodiacal placement: grahas and the lagna.
///
/// The divisional mapper and the serializer work through this trait so both
/// kinds of entity share one code path.
pub trait Placed {
    /// Display name used in serialized output.
    fn name(&self) -> &'static str;

    fn placement(&self) -> &Placement;

    /// Copy of `self` moved to a new placement; everything else unchanged.
    fn with_placement(&self, placement: Placement) -> Self
    where
        Self: Sized;
}

// ---------------------------------------------------------------------------
// Pass-through attributes
// ---------------------------------------------------------------------------

/// Direction of apparent motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    Direct,
    Retrograde,
}

/// An aspect between a graha and a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Aspect {
    /// The aspecting graha.
    pub graha: Graha,
    /// Aspected house number (1-12).
    pub house: u8,
}

/// Auxiliary graha data computed upstream.
///
/// Divisional charts carry these values unchanged; only the placement moves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrahaAttributes {
    pub nakshatra: Option<Nakshatra>,
    /// Nakshatra quarter, 1-4.
    pub pada: Option<u8>,
    pub motion: Option<Motion>,
    pub dignity: Option<Dignity>,
    /// Houses this graha rules in the rasi chart.
    #[serde(default)]
    pub lordships: Vec<u8>,
    /// Aspects cast by this graha.
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

// ---------------------------------------------------------------------------
// Graha position and lagna
// ---------------------------------------------------------------------------

/// A graha at a placement, with its pass-through attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrahaPosition {
    #[serde(rename = "name")]
    pub graha: Graha,
    #[serde(flatten)]
    pub placement: Placement,
    #[serde(flatten)]
    pub attributes: GrahaAttributes,
}

impl GrahaPosition {
    pub fn new(graha: Graha, placement: Placement) -> Self {
        Self {
            graha,
            placement,
            attributes: GrahaAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: GrahaAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl Placed for GrahaPosition {
    fn name(&self) -> &'static str {
        self.graha.english_name()
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn with_placement(&self, placement: Placement) -> Self {
        Self {
            graha: self.graha,
            placement,
            attributes: self.attributes.clone(),
        }
    }
}

/// The lagna (ascendant), treated as a planet-like point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Lagna {
    #[serde(flatten)]
    pub placement: Placement,
}

impl Lagna {
    pub const NAME: &'static str = "Ascendant";

    pub fn new(placement: Placement) -> Self {
        Self { placement }
    }
}

impl Placed for Lagna {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn placement(&self) -> &Placement {
        &self.placement
    }

    fn with_placement(&self, placement: Placement) -> Self {
        Self { placement }
    }
}

impl Serialize for Lagna {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Lagna", 3)?;
        s.serialize_field("name", Self::NAME)?;
        s.serialize_field("sign", &self.placement.rashi())?;
        s.serialize_field("signDegrees", &self.placement.sign_degrees())?;
        s.end()
    }
}

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// House number, 1-12.
    pub number: u8,
    pub sign: Rashi,
    pub lord: Graha,
    #[serde(default)]
    pub occupants: Vec<GrahaPosition>,
    #[serde(default)]
    pub aspects_received: Vec<Aspect>,
    #[serde(default)]
    pub aspects_cast: Vec<Aspect>,
    /// Lagna degrees; only present on house 1 of a rasi chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_degrees: Option<f64>,
}

impl House {
    /// Empty house with the classical lord of its sign.
    pub fn empty(number: u8, sign: Rashi) -> Self {
        Self {
            number,
            sign,
            lord: rashi_lord(sign),
            occupants: Vec::new(),
            aspects_received: Vec::new(),
            aspects_cast: Vec::new(),
            sign_degrees: None,
        }
    }

    pub fn is_occupied_by(&self, graha: Graha) -> bool {
        self.occupants.iter().any(|o| o.graha == graha)
    }
}

// ---------------------------------------------------------------------------
// Rasi chart (input)
// ---------------------------------------------------------------------------

/// The D1 birth chart as produced upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasiChart {
    /// Graha positions in upstream order.
    #[serde(rename = "planets")]
    pub grahas: Vec<GrahaPosition>,
    /// 12 houses; house 1 carries the lagna sign and degrees.
    pub houses: Vec<House>,
}

impl RasiChart {
    /// Validated constructor.
    pub fn new(grahas: Vec<GrahaPosition>, houses: Vec<House>) -> Result<Self, VargaError> {
        let chart = Self { grahas, houses };
        chart.validate()?;
        Ok(chart)
    }

    /// Build a rasi chart with whole-sign houses from a lagna and grahas.
    pub fn whole_sign(lagna: Placement, grahas: Vec<GrahaPosition>) -> Self {
        let mut houses = rebuild_houses(lagna.rashi(), grahas.clone());
        houses[0].sign_degrees = Some(lagna.sign_degrees());
        Self {
            grahas,
            houses: houses.into(),
        }
    }

    /// Check the structural invariants the varga engine relies on.
    pub fn validate(&self) -> Result<(), VargaError> {
        if self.houses.len() != HOUSE_COUNT {
            return Err(VargaError::InvalidChart(
                "rasi chart must have exactly 12 houses",
            ));
        }
        let first_sign = self.houses[0].sign;
        for (i, house) in self.houses.iter().enumerate() {
            if house.number as usize != i + 1 {
                return Err(VargaError::InvalidChart(
                    "houses must be numbered 1 to 12 in order",
                ));
            }
            if house.sign != first_sign.advance(i as i32) {
                return Err(VargaError::InvalidChart(
                    "house signs must follow the zodiac from the lagna sign",
                ));
            }
        }
        match self.houses[0].sign_degrees {
            Some(deg) => check_sign_degrees(deg)?,
            None => {
                return Err(VargaError::InvalidChart(
                    "house 1 must carry the lagna degrees",
                ));
            }
        }
        for graha in &self.grahas {
            check_sign_degrees(graha.placement.sign_degrees())?;
            if let Some(pada) = graha.attributes.pada {
                if !(1..=4).contains(&pada) {
                    return Err(VargaError::InvalidChart("pada must be between 1 and 4"));
                }
            }
        }
        Ok(())
    }

    /// The lagna from house 1.
    pub fn lagna(&self) -> Result<Lagna, VargaError> {
        let first = self
            .houses
            .first()
            .ok_or(VargaError::InvalidChart("rasi chart has no houses"))?;
        let deg = first
            .sign_degrees
            .ok_or(VargaError::InvalidChart("house 1 must carry the lagna degrees"))?;
        Ok(Lagna::new(Placement::new(first.sign, deg)?))
    }

    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas.iter().find(|g| g.graha == graha)
    }

    /// House by number (1-12).
    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }
}

// ---------------------------------------------------------------------------
// Divisional chart (output)
// ---------------------------------------------------------------------------

/// A fully built divisional chart.
///
/// Owns all of its data; nothing is shared with the rasi chart it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionalChart {
    #[serde(rename = "chartType")]
    amsha: Amsha,
    variation: AmshaVariation,
    #[serde(rename = "ascendant")]
    lagna: Lagna,
    houses: [House; HOUSE_COUNT],
}

impl DivisionalChart {
    pub(crate) fn new(
        amsha: Amsha,
        variation: AmshaVariation,
        lagna: Lagna,
        houses: [House; HOUSE_COUNT],
    ) -> Self {
        Self {
            amsha,
            variation,
            lagna,
            houses,
        }
    }

    pub fn amsha(&self) -> Amsha {
        self.amsha
    }

    pub fn variation(&self) -> AmshaVariation {
        self.variation
    }

    pub fn lagna(&self) -> &Lagna {
        &self.lagna
    }

    pub fn houses(&self) -> &[House; HOUSE_COUNT] {
        &self.houses
    }

    /// House by number (1-12).
    pub fn house(&self, number: u8) -> Option<&House> {
        number
            .checked_sub(1)
            .and_then(|i| self.houses.get(i as usize))
    }

    /// All graha positions, house by house.
    pub fn grahas(&self) -> impl Iterator<Item = &GrahaPosition> {
        self.houses.iter().flat_map(|h| h.occupants.iter())
    }

    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas().find(|g| g.graha == graha)
    }

    /// House holding the given graha.
    pub fn house_of(&self, graha: Graha) -> Option<&House> {
        self.houses.iter().find(|h| h.is_occupied_by(graha))
    }

    pub fn occupant_count(&self) -> usize {
        self.houses.iter().map(|h| h.occupants.len()).sum()
    }
}
