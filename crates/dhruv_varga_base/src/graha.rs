//! Vedic planet (graha) enum, rashi lordship and dignity grades.
//!
//! Each rashi has a planetary lord, which is a universal Vedic convention
//! (BPHS). House lords in a rebuilt divisional chart come from here.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VargaError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Look up a graha by English or Sanskrit name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Graha, VargaError> {
        let trimmed = name.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.english_name().eq_ignore_ascii_case(trimmed)
                    || g.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| VargaError::UnknownGraha(name.to_string()))
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = VargaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Graha::from_name(s)
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

impl<'de> Deserialize<'de> for Graha {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Graha::from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Dignity of a graha in a rashi.
///
/// Computed upstream; the varga engine only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dignity {
    Exalted,
    Moolatrikona,
    OwnSign,
    GreatFriend,
    Friend,
    Neutral,
    Enemy,
    GreatEnemy,
    Debilitated,
}
