//! Divisional chart assembly.
//!
//! Maps the lagna and every graha of a rasi chart through one amsha and
//! rebuilds whole-sign houses around the divisional lagna. D1 goes through
//! the same path and comes out unchanged.

use log::{debug, trace, warn};

use dhruv_varga_base::{Amsha, AmshaRequest, AmshaVariation, SHODASHAVARGA, VargaError, divide};

use crate::bhava::rebuild_houses;
use crate::chart_types::{DivisionalChart, GrahaPosition, Placed, RasiChart};

/// Move any placed entity into the given amsha.
pub fn divide_placed<T: Placed>(body: &T, amsha: Amsha, variation: AmshaVariation) -> T {
    let mapped = divide(body.placement(), amsha, Some(variation));
    trace!(
        "{} {}: {} {:.6} -> {} {:.6}",
        amsha,
        body.name(),
        body.placement().rashi(),
        body.placement().sign_degrees(),
        mapped.rashi(),
        mapped.sign_degrees()
    );
    body.with_placement(mapped)
}

/// Compute a divisional chart from its chart-type label ("D9", "D60", ...).
///
/// The label is checked before any other work; unknown labels fail with
/// [`VargaError::UnsupportedChartType`].
pub fn compute_divisional_chart(
    chart: &RasiChart,
    chart_type: &str,
) -> Result<DivisionalChart, VargaError> {
    let amsha = chart_type
        .parse::<Amsha>()
        .inspect_err(|e| warn!("rejecting divisional chart request: {e}"))?;
    compute_amsha_chart(chart, &AmshaRequest::new(amsha))
}

/// Compute one divisional chart.
///
/// The whole input is validated first, so either a complete chart comes
/// back or an error does.
pub fn compute_amsha_chart(
    chart: &RasiChart,
    request: &AmshaRequest,
) -> Result<DivisionalChart, VargaError> {
    chart
        .validate()
        .inspect_err(|e| warn!("rejecting rasi chart for {}: {e}", request.amsha))?;
    build_chart(chart, request)
}

/// Batch: one rasi chart through several amshas.
pub fn compute_amsha_charts(
    chart: &RasiChart,
    requests: &[AmshaRequest],
) -> Result<Vec<DivisionalChart>, VargaError> {
    chart
        .validate()
        .inspect_err(|e| warn!("rejecting rasi chart for batch of {}: {e}", requests.len()))?;
    requests.iter().map(|req| build_chart(chart, req)).collect()
}

/// All 16 Shodashavarga charts, D1 first.
pub fn compute_shodashavarga(chart: &RasiChart) -> Result<Vec<DivisionalChart>, VargaError> {
    let requests: Vec<AmshaRequest> = SHODASHAVARGA.iter().map(|&a| AmshaRequest::new(a)).collect();
    compute_amsha_charts(chart, &requests)
}

fn build_chart(chart: &RasiChart, request: &AmshaRequest) -> Result<DivisionalChart, VargaError> {
    let amsha = request.amsha;
    let variation = request.effective_variation();

    let lagna = divide_placed(&chart.lagna()?, amsha, variation);
    let grahas: Vec<GrahaPosition> = chart
        .grahas
        .iter()
        .map(|g| divide_placed(g, amsha, variation))
        .collect();
    let houses = rebuild_houses(lagna.placement().rashi(), grahas);

    debug!(
        "{} ({:?}): lagna {} {:.4}, {} grahas filed",
        amsha,
        variation,
        lagna.placement().rashi(),
        lagna.placement().sign_degrees(),
        chart.grahas.len()
    );
    Ok(DivisionalChart::new(amsha, variation, lagna, houses))
}
