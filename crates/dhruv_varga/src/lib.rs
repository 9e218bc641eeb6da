//! Divisional chart (varga) construction.
//!
//! Takes a resolved rasi (D1) chart and derives any of the 16 Shodashavarga
//! charts: the lagna and every graha are mapped through the amsha, whole-sign
//! houses are rebuilt around the divisional lagna, and the result can be
//! turned into a plain JSON mapping.
//!
//! ```no_run
//! use dhruv_varga::{RasiChart, compute_divisional_chart, to_dict};
//!
//! # fn run(chart: &RasiChart) -> Result<(), dhruv_varga::VargaError> {
//! let navamsha = compute_divisional_chart(chart, "D9")?;
//! let json = to_dict(&navamsha)?;
//! println!("{json}");
//! # Ok(())
//! # }
//! ```

pub mod bhava;
pub mod chart_types;
pub mod serialize;
pub mod varga;

pub use bhava::{house_number_of, rebuild_houses, whole_sign_houses};
pub use chart_types::{
    Aspect, DivisionalChart, GrahaAttributes, GrahaPosition, HOUSE_COUNT, House, Lagna, Motion,
    Placed, RasiChart,
};
pub use serialize::{placed_to_dict, rasi_to_dict, to_dict, to_json_string};
pub use varga::{
    compute_amsha_chart, compute_amsha_charts, compute_divisional_chart, compute_shodashavarga,
    divide_placed,
};

pub use dhruv_varga_base::{
    Amsha, AmshaRequest, AmshaVariation, Dignity, Graha, Nakshatra, Placement, PlacementFault,
    Rashi, SHODASHAVARGA, VARGAS, VargaError,
};
