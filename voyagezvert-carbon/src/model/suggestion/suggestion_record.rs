use crate::model::Domain;
use serde::{Deserialize, Serialize};

/// advice attached to a single leg whose emissions exceed its domain threshold
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub domain: Domain,
    /// kg CO2e of the leg that triggered this suggestion
    pub current_emissions: f64,
    pub suggestion: String,
    /// kg CO2e that could be avoided by following the advice
    pub potential_reduction: f64,
    pub eco_alternative: String,
}
