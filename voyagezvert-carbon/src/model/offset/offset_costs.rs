use serde::{Deserialize, Serialize};

const FOREST_EUR_PER_TONNE: f64 = 15.0;
const RENEWABLE_EUR_PER_TONNE: f64 = 25.0;
const TECHNOLOGY_EUR_PER_TONNE: f64 = 45.0;

/// approximate price (EUR) of offsetting some emissions through three kinds of project
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OffsetCosts {
    pub forest_project: OffsetProject,
    pub renewable_energy: OffsetProject,
    pub technology_project: OffsetProject,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OffsetProject {
    pub cost: f64,
    pub price_per_tonne: f64,
    pub description: String,
}

impl OffsetProject {
    fn new(mass_kg: f64, price_per_tonne: f64, description: &str) -> Self {
        Self {
            cost: mass_kg / 1000.0 * price_per_tonne,
            price_per_tonne,
            description: description.to_string(),
        }
    }
}

/// prices offsetting `mass_kg` of CO2e.
pub fn offset_costs(mass_kg: f64) -> OffsetCosts {
    OffsetCosts {
        forest_project: OffsetProject::new(
            mass_kg,
            FOREST_EUR_PER_TONNE,
            "Reforestation et conservation forestière",
        ),
        renewable_energy: OffsetProject::new(
            mass_kg,
            RENEWABLE_EUR_PER_TONNE,
            "Projets d'énergie renouvelable",
        ),
        technology_project: OffsetProject::new(
            mass_kg,
            TECHNOLOGY_EUR_PER_TONNE,
            "Capture et stockage du carbone",
        ),
    }
}
