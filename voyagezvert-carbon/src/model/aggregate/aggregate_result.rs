use crate::model::estimate::EmissionEstimate;
use crate::model::Domain;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// total emissions of a set of legs, bucketed by domain.
///
/// `total` is always computed from `breakdown`, so summing the breakdown values
/// in key order reproduces it exactly.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateResult {
    pub total: f64,
    pub breakdown: BTreeMap<Domain, f64>,
    /// the estimates that were aggregated, in input order
    pub details: Vec<EmissionEstimate>,
}

impl AggregateResult {
    /// share of the total attributed to a domain, in [0, 1]. zero when the total is zero.
    pub fn share(&self, domain: &Domain) -> f64 {
        match self.breakdown.get(domain) {
            Some(mass) if self.total > 0.0 => mass / self.total,
            _ => 0.0,
        }
    }
}
