use serde::{Deserialize, Serialize};

/// kg CO2e absorbed by one tree over a year
const TREE_ABSORPTION_KG_PER_YEAR: f64 = 22.0;
/// kg CO2e per km of an average petrol car
const CAR_KG_PER_KM: f64 = 0.171;
/// kg CO2e per day of an average EU household
const HOUSEHOLD_KG_PER_DAY: f64 = 11.0;

/// emissions expressed in everyday terms
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarbonEquivalents {
    pub trees_needed: u64,
    pub car_km_equivalent: u64,
    pub household_days: u64,
}

/// converts `mass_kg` of CO2e to equivalents. values are rounded to the nearest
/// whole number; negative masses give zero.
pub fn equivalents(mass_kg: f64) -> CarbonEquivalents {
    // TODO: trees_needed scales yearly absorption by 365, which reads as tree-days
    // rather than trees; confirm the intended unit with product before changing it.
    CarbonEquivalents {
        trees_needed: (mass_kg / TREE_ABSORPTION_KG_PER_YEAR * 365.0).round() as u64,
        car_km_equivalent: (mass_kg / CAR_KG_PER_KM).round() as u64,
        household_days: (mass_kg / HOUSEHOLD_KG_PER_DAY).round() as u64,
    }
}
