//! Conversion of charts into plain JSON mappings.
//!
//! Output shape:
//!
//! ```text
//! {"chartType": "D9", "variation": "Parashari",
//!  "ascendant": {"name": "Ascendant", "sign": "Cancer", "signDegrees": 0.0},
//!  "houses": [{"number": 1, "sign": "Cancer", "lord": "Moon",
//!              "occupants": [{"name": "Sun", "sign": "Taurus", "signDegrees": 19.5, ...}],
//!              "aspectsReceived": [], "aspectsCast": []}, ...]}
//! ```
//!
//! `signDegrees` is emitted for the ascendant and every occupant of every
//! chart type.

use serde::Serialize;
use serde_json::Value;

use dhruv_varga_base::VargaError;

use crate::chart_types::{DivisionalChart, Placed, RasiChart};

fn to_value<T: Serialize>(value: &T) -> Result<Value, VargaError> {
    serde_json::to_value(value).map_err(|e| VargaError::Serialization(e.to_string()))
}

/// Divisional chart as a nested JSON mapping.
pub fn to_dict(chart: &DivisionalChart) -> Result<Value, VargaError> {
    to_value(chart)
}

/// Rasi chart in the same shape it is accepted in.
pub fn rasi_to_dict(chart: &RasiChart) -> Result<Value, VargaError> {
    to_value(chart)
}

/// One graha or the lagna as a JSON mapping.
pub fn placed_to_dict<T: Placed + Serialize>(body: &T) -> Result<Value, VargaError> {
    to_value(body)
}

/// Pretty-printed JSON text of a divisional chart.
pub fn to_json_string(chart: &DivisionalChart) -> Result<String, VargaError> {
    serde_json::to_string_pretty(chart).map_err(|e| VargaError::Serialization(e.to_string()))
}
