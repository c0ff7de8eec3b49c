use serde::{Deserialize, Serialize};

/// totals over the offerings of an itinerary selection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SelectionImpact {
    pub item_count: usize,
    pub route_count: usize,
    pub hotel_count: usize,
    pub activity_count: usize,
    /// euros
    pub total_cost: f64,
    /// kg CO2e
    pub total_carbon: f64,
    /// mean eco score of the selected offerings, 0 when nothing is selected
    pub average_eco_score: f64,
    /// minutes, over the offerings that have a duration
    pub total_duration_minutes: f64,
}
