use super::leg_quantity::{clamp_magnitude, clamp_multiplier};
use super::{EmissionEstimate, EstimateDetails, LegQuantity};
use crate::model::emission_factor::{default_table, EmissionFactorTable};
use crate::model::{CarbonError, Domain};

/// estimates a leg against the built-in emission factors.
///
/// # Arguments
///
/// * `domain`     - kind of leg
/// * `category`   - category name within the domain, such as "train" or "hostel"
/// * `magnitude`  - km, nights, hours or meals. negative values count as zero.
/// * `multiplier` - passengers, guests or participants. zero counts as one.
///
/// # Returns
///
/// the estimate, or [`CarbonError::UnknownCategory`] when the category has no factor.
pub fn estimate(
    domain: Domain,
    category: &str,
    magnitude: f64,
    multiplier: u32,
) -> Result<EmissionEstimate, CarbonError> {
    estimate_with_table(default_table(), domain, category, magnitude, multiplier)
}

/// estimates a leg against a caller-supplied emission factor table.
pub fn estimate_with_table(
    table: &EmissionFactorTable,
    domain: Domain,
    category: &str,
    magnitude: f64,
    multiplier: u32,
) -> Result<EmissionEstimate, CarbonError> {
    let (emission_category, emission_factor) = table.lookup(domain, category)?;
    let value = clamp_magnitude(magnitude);
    let multiplier = clamp_multiplier(multiplier);
    let mass = value * emission_factor * multiplier as f64;
    Ok(EmissionEstimate {
        category: emission_category,
        mass,
        details: EstimateDetails {
            value,
            unit: domain.unit().to_string(),
            emission_factor,
            multiplier,
        },
    })
}

pub fn estimate_leg(
    table: &EmissionFactorTable,
    leg: &LegQuantity,
) -> Result<EmissionEstimate, CarbonError> {
    estimate_with_table(
        table,
        leg.domain,
        &leg.category,
        leg.magnitude(),
        leg.multiplier(),
    )
}
