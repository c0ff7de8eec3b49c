use crate::model::offering::TransportRoute;
use serde::Serialize;

/// side-by-side highlights of a set of candidate routes between two places.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteComparisonSummary<'a> {
    pub most_eco_friendly: &'a TransportRoute,
    pub fastest: &'a TransportRoute,
    pub cheapest: &'a TransportRoute,
    /// kg CO2e avoided by taking the most eco-friendly route instead of the
    /// highest-emitting one
    pub total_carbon_saved: f64,
}

/// summarizes a list of routes. when several routes tie on a criterion, the
/// first one in input order wins.
///
/// # Returns
///
/// the summary, or None if there are no routes to compare.
pub fn compare_routes(routes: &[TransportRoute]) -> Option<RouteComparisonSummary<'_>> {
    let most_eco_friendly = routes
        .iter()
        .min_by(|a, b| b.eco_score.total_cmp(&a.eco_score))?;
    let fastest = routes
        .iter()
        .min_by(|a, b| a.duration.total_cmp(&b.duration))?;
    let cheapest = routes.iter().min_by(|a, b| a.price.total_cmp(&b.price))?;
    let max_carbon = routes
        .iter()
        .map(|r| r.carbon_footprint)
        .fold(f64::NEG_INFINITY, f64::max);
    let total_carbon_saved = max_carbon - most_eco_friendly.carbon_footprint;
    log::debug!(
        "compared {} routes: most eco {}, fastest {}, cheapest {}",
        routes.len(),
        most_eco_friendly.id,
        fastest.id,
        cheapest.id
    );
    Some(RouteComparisonSummary {
        most_eco_friendly,
        fastest,
        cheapest,
        total_carbon_saved,
    })
}
