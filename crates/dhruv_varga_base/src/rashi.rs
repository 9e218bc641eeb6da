//! Rashi (zodiac sign) enumeration and its classical classifications.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg. Divisional schemes pick their
//! starting sign from a rashi's modality, element or parity, so all three
//! classifications live here next to the enum.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PlacementFault, VargaError};

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Modality (quality) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiModality {
    /// Chara (cardinal): Mesha, Karka, Tula, Makara.
    Movable,
    /// Sthira: Vrishabha, Simha, Vrischika, Kumbha.
    Fixed,
    /// Dvisvabhava (mutable): Mithuna, Kanya, Dhanu, Meena.
    Dual,
}

/// Element (tattva) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Look up a rashi by western or Sanskrit name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Rashi, VargaError> {
        let trimmed = name.trim();
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| {
                r.western_name().eq_ignore_ascii_case(trimmed)
                    || r.name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| VargaError::InvalidPlacement(PlacementFault::Sign(name.to_string())))
    }

    /// Movable / fixed / dual classification.
    pub const fn modality(self) -> RashiModality {
        match self.index() % 3 {
            0 => RashiModality::Movable,
            1 => RashiModality::Fixed,
            _ => RashiModality::Dual,
        }
    }

    /// Fire / earth / air / water classification.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Odd sign in the traditional 1-based count (Mesha, Mithuna, Simha, ...).
    pub const fn is_odd(self) -> bool {
        self.index() % 2 == 0
    }

    /// Step `steps` signs through the zodiac; negative steps go backwards.
    pub const fn advance(self, steps: i32) -> Rashi {
        let idx = (self.index() as i32 + steps).rem_euclid(12);
        ALL_RASHIS[idx as usize]
    }

    /// The n-th rashi counted inclusively from this one.
    ///
    /// `nth_from(1)` is the same rashi, `nth_from(9)` the ninth (trine).
    pub const fn nth_from(self, offset: u8) -> Rashi {
        self.advance(offset as i32 - 1)
    }

    /// Number of signs to step forward from `self` to reach `other` (0..=11).
    pub const fn distance_to(self, other: Rashi) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }
}

impl Display for Rashi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

impl FromStr for Rashi {
    type Err = VargaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rashi::from_name(s)
    }
}

impl Serialize for Rashi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.western_name())
    }
}

impl<'de> Deserialize<'de> for Rashi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Rashi::from_name(&name).map_err(serde::de::Error::custom)
    }
}
