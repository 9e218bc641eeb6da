//! Whole-sign house construction.
//!
//! In a divisional chart the houses coincide exactly with signs: house n is
//! the sign n-1 steps forward from the lagna sign. Grahas are filed into
//! the house of their sign, keeping their input order.

use dhruv_varga_base::Rashi;

use crate::chart_types::{GrahaPosition, HOUSE_COUNT, House, Placed};

/// House number (1-12) of a rashi counted from the lagna rashi.
pub fn house_number_of(lagna_rashi: Rashi, rashi: Rashi) -> u8 {
    lagna_rashi.distance_to(rashi) + 1
}

/// 12 empty whole-sign houses starting from the lagna rashi.
pub fn whole_sign_houses(lagna_rashi: Rashi) -> [House; HOUSE_COUNT] {
    std::array::from_fn(|i| House::empty(i as u8 + 1, lagna_rashi.advance(i as i32)))
}

/// Build 12 whole-sign houses and file every graha into the house of its sign.
pub fn rebuild_houses(lagna_rashi: Rashi, grahas: Vec<GrahaPosition>) -> [House; HOUSE_COUNT] {
    let mut houses = whole_sign_houses(lagna_rashi);
    for graha in grahas {
        let idx = lagna_rashi.distance_to(graha.placement().rashi()) as usize;
        houses[idx].occupants.push(graha);
    }
    houses
}
