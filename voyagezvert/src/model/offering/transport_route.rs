use super::{Offering, OfferingKind, Place};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportType {
    Train,
    Bus,
    Car,
    Plane,
    Bike,
    Walk,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportMode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub transport_type: TransportType,
    /// kg CO2e per km
    pub carbon_emission_per_km: f64,
    #[serde(default)]
    pub icon: String,
    pub eco_score: f64,
}

/// a bookable trip between two places with a single transport mode
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransportRoute {
    pub id: String,
    pub origin: Place,
    pub destination: Place,
    pub transport_mode: TransportMode,
    /// km
    pub distance: f64,
    /// minutes
    pub duration: f64,
    /// euros
    pub price: f64,
    /// total kg CO2e
    pub carbon_footprint: f64,
    pub eco_score: f64,
    pub provider: Option<String>,
    pub booking_url: Option<String>,
}

impl Offering for TransportRoute {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> OfferingKind {
        OfferingKind::Route
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn eco_score(&self) -> f64 {
        self.eco_score
    }

    fn carbon_footprint(&self) -> f64 {
        self.carbon_footprint
    }

    fn duration_minutes(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn rating(&self) -> Option<f64> {
        None
    }
}
