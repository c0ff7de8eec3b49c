use crate::model::Domain;
use serde::{Deserialize, Serialize};

/// one trip leg to estimate: a distance, a number of nights, a duration or a
/// meal count, shared by some number of passengers/guests/participants.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LegQuantity {
    pub domain: Domain,
    pub category: String,
    pub magnitude: f64,
    /// passengers, guests or participants. unset means 1.
    #[serde(default)]
    pub multiplier: Option<u32>,
}

impl LegQuantity {
    pub fn new(domain: Domain, category: &str, magnitude: f64, multiplier: u32) -> Self {
        Self {
            domain,
            category: category.to_string(),
            magnitude,
            multiplier: Some(multiplier),
        }
    }

    /// magnitude clamped to be non-negative. NaN is treated as zero.
    pub fn magnitude(&self) -> f64 {
        clamp_magnitude(self.magnitude)
    }

    /// multiplier with the default of 1 applied and values below 1 raised to 1
    pub fn multiplier(&self) -> u32 {
        clamp_multiplier(self.multiplier.unwrap_or(1))
    }
}

pub(crate) fn clamp_magnitude(magnitude: f64) -> f64 {
    magnitude.max(0.0)
}

pub(crate) fn clamp_multiplier(multiplier: u32) -> u32 {
    multiplier.max(1)
}
