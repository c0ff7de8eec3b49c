use super::{Offering, OfferingKind, Place};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EcoLabelCategory {
    Environmental,
    Social,
    Economic,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EcoLabel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub category: EcoLabelCategory,
    /// importance weight of the label when scoring
    #[serde(default)]
    pub weight: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Renewable,
    Mixed,
    Fossil,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelSustainability {
    pub energy_source: EnergySource,
    pub water_conservation: bool,
    pub waste_reduction: bool,
    pub local_sourcing: bool,
    pub carbon_neutral: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelReviews {
    pub overall: f64,
    pub eco: f64,
    pub comfort: f64,
    pub service: f64,
    pub total_reviews: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: Place,
    #[serde(default)]
    pub images: Vec<String>,
    /// 1-5 stars
    pub rating: f64,
    pub eco_score: f64,
    #[serde(default)]
    pub eco_labels: Vec<EcoLabel>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// euros
    pub price_per_night: f64,
    /// kg CO2e per night
    pub carbon_footprint: f64,
    pub sustainability: HotelSustainability,
    #[serde(default)]
    pub reviews: HotelReviews,
    pub booking_url: Option<String>,
}

impl Offering for Hotel {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> OfferingKind {
        OfferingKind::Hotel
    }

    fn price(&self) -> f64 {
        self.price_per_night
    }

    fn eco_score(&self) -> f64 {
        self.eco_score
    }

    fn carbon_footprint(&self) -> f64 {
        self.carbon_footprint
    }

    fn duration_minutes(&self) -> Option<f64> {
        None
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }
}
