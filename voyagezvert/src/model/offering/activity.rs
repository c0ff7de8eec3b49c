use super::{Offering, OfferingKind, Place};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeasonName {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: String,
    pub name: SeasonName,
    /// month numbers, 1-12
    pub months: Vec<u8>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSize {
    pub min: u32,
    pub max: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySustainability {
    pub supports_local_community: bool,
    pub environmentally_friendly: bool,
    pub educational_value: bool,
    pub wildlife_conservation: bool,
    pub cultural_preservation: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProvider {
    pub name: String,
    pub rating: f64,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location: Place,
    pub category: ActivityCategory,
    #[serde(default)]
    pub images: Vec<String>,
    /// minutes
    pub duration: f64,
    /// euros
    pub price: f64,
    pub eco_score: f64,
    /// kg CO2e
    pub carbon_impact: f64,
    pub group_size: GroupSize,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub seasonality: Vec<Season>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub sustainability: ActivitySustainability,
    pub provider: ActivityProvider,
    pub booking_url: Option<String>,
}

impl Activity {
    pub fn duration_hours(&self) -> f64 {
        self.duration / 60.0
    }
}

impl Offering for Activity {
    fn id(&self) -> &str {
        &self.id
    }

    fn kind(&self) -> OfferingKind {
        OfferingKind::Activity
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn eco_score(&self) -> f64 {
        self.eco_score
    }

    fn carbon_footprint(&self) -> f64 {
        self.carbon_impact
    }

    fn duration_minutes(&self) -> Option<f64> {
        Some(self.duration)
    }

    fn rating(&self) -> Option<f64> {
        Some(self.provider.rating)
    }
}
