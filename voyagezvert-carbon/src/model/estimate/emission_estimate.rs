use crate::model::{Domain, EmissionCategory};
use serde::{Deserialize, Serialize};

/// the emissions of one trip leg, along with the inputs that produced it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmissionEstimate {
    #[serde(flatten)]
    pub category: EmissionCategory,
    /// kg CO2e, equal to `value * emission_factor * multiplier`
    pub mass: f64,
    pub details: EstimateDetails,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EstimateDetails {
    pub value: f64,
    pub unit: String,
    pub emission_factor: f64,
    pub multiplier: u32,
}

impl EmissionEstimate {
    pub fn domain(&self) -> Domain {
        self.category.domain()
    }
}
