use super::EcoScore;
use crate::model::estimate::{clamp_magnitude, EmissionEstimate};
use crate::model::{CarbonError, Domain};

/// score points lost per baseline-multiple of emissions per unit
const SCORE_SLOPE: f64 = 4.5;

/// scores emissions against the baseline of a domain:
/// `10 - (mass / magnitude) / baseline * 4.5`, clamped into [1, 10].
///
/// # Arguments
///
/// * `mass`      - kg CO2e emitted
/// * `magnitude` - quantity covered by `mass` (km, nights, hours)
/// * `domain`    - domain whose baseline applies
///
/// # Returns
///
/// the score. fails with [`CarbonError::DivisionByZero`] when `magnitude` is zero,
/// negative or NaN (clamped to zero, as the estimator does), and with [`CarbonError::MissingBaseline`] for a domain that has no baseline.
pub fn score(mass: f64, magnitude: f64, domain: Domain) -> Result<EcoScore, CarbonError> {
    let baseline = domain
        .baseline()
        .ok_or(CarbonError::MissingBaseline(domain))?;
    let magnitude = clamp_magnitude(magnitude);
    if magnitude == 0.0 {
        return Err(CarbonError::DivisionByZero { domain });
    }
    let emissions_per_unit = mass / magnitude;
    let raw = EcoScore::MAX - (emissions_per_unit / baseline) * SCORE_SLOPE;
    Ok(EcoScore::new(raw))
}

/// scores an estimate against the quantity it was computed from.
pub fn score_estimate(estimate: &EmissionEstimate) -> Result<EcoScore, CarbonError> {
    score(estimate.mass, estimate.details.value, estimate.domain())
}
