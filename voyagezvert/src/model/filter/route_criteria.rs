use super::filter_ops::{in_range, member_of};
use super::{OfferingFilter, Predicate, ValueRange};
use crate::model::offering::{TransportRoute, TransportType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RouteCriteria {
    #[serde(default)]
    pub price_range: Option<ValueRange>,
    #[serde(default)]
    pub eco_score_range: Option<ValueRange>,
    /// transport types to keep. empty keeps all.
    #[serde(default)]
    pub transport_types: Vec<TransportType>,
}

impl RouteCriteria {
    const PREDICATES: [Predicate<Self, TransportRoute>; 3] = [
        Self::price_matches,
        Self::eco_score_matches,
        Self::transport_type_matches,
    ];

    fn price_matches(&self, route: &TransportRoute) -> bool {
        in_range(&self.price_range, route.price)
    }

    fn eco_score_matches(&self, route: &TransportRoute) -> bool {
        in_range(&self.eco_score_range, route.eco_score)
    }

    fn transport_type_matches(&self, route: &TransportRoute) -> bool {
        member_of(&self.transport_types, &route.transport_mode.transport_type)
    }
}

impl OfferingFilter<TransportRoute> for RouteCriteria {
    fn matches(&self, route: &TransportRoute) -> bool {
        Self::PREDICATES.iter().all(|p| p(self, route))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::{filter_and_sort, SortKey};
    use crate::model::offering::fixtures::route;
    use crate::model::offering::Offering;

    fn routes() -> Vec<TransportRoute> {
        vec![
            route("train", TransportType::Train, 45.0, 120.0, 9.0),
            route("plane", TransportType::Plane, 89.0, 75.0, 3.0),
            route("bus", TransportType::Bus, 25.0, 360.0, 7.0),
            route("car", TransportType::Car, 50.0, 270.0, 4.0),
            route("bike", TransportType::Bike, 0.0, 1800.0, 10.0),
        ]
    }

    fn ids(result: &[&TransportRoute]) -> Vec<String> {
        result.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_inactive_criteria_keep_everything() {
        let input = routes();
        let result = filter_and_sort(&input, &RouteCriteria::default(), &SortKey::Eco);
        assert_eq!(ids(&result), vec!["bike", "train", "bus", "car", "plane"]);
        let result = filter_and_sort(&input, &RouteCriteria::default(), &SortKey::Duration);
        assert_eq!(ids(&result), vec!["plane", "train", "car", "bus", "bike"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let input = routes();
        let criteria = RouteCriteria {
            price_range: Some(ValueRange::new(0.0, 50.0)),
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Price);
        assert_eq!(ids(&result), vec!["bike", "bus", "train", "car"]);
    }

    #[test]
    fn test_transport_types_and_price_combine() {
        let input = routes();
        let criteria = RouteCriteria {
            price_range: Some(ValueRange::new(30.0, 100.0)),
            transport_types: vec![TransportType::Train, TransportType::Bus, TransportType::Plane],
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Eco);
        assert_eq!(ids(&result), vec!["train", "plane"]);
    }

    #[test]
    fn test_rating_sort_orders_unrated_routes_by_eco_score() {
        let input = routes();
        let result = filter_and_sort(&input, &RouteCriteria::default(), &SortKey::Rating);
        assert_eq!(ids(&result), vec!["bike", "train", "bus", "car", "plane"]);
    }
}
