//! Linear environmental-cost model.

/// USD cost assessed per tonne of CO2-equivalent.
pub const COST_USD_PER_TCO2EQ: f64 = 15.0;

/// Unrounded environmental cost for an emission figure.
///
/// Must be re-applied whenever the emission value changes; cost is never an
/// independent quantity.
#[must_use]
pub fn environmental_cost(emission: f64) -> f64 {
    emission * COST_USD_PER_TCO2EQ
}
