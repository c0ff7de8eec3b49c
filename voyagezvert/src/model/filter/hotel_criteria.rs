use super::filter_ops::{all_selected, any_selected, flag_satisfied, in_range};
use super::{OfferingFilter, Predicate, ValueRange};
use crate::model::offering::{EnergySource, Hotel};
use serde::{Deserialize, Serialize};

/// sustainability requirements. a flag left off places no requirement.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HotelSustainabilityFlags {
    /// require energy from renewable sources
    pub renewable: bool,
    pub carbon_neutral: bool,
    pub local_sourcing: bool,
    pub water_conservation: bool,
    pub waste_reduction: bool,
}

/// hotel search constraints.
///
/// eco labels match if the hotel carries ANY selected label, while amenities
/// match only if the hotel offers ALL selected amenities.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HotelCriteria {
    pub price_range: Option<ValueRange>,
    pub eco_score_range: Option<ValueRange>,
    /// eco label ids
    pub eco_labels: Vec<String>,
    pub amenities: Vec<String>,
    /// minimum number of stars
    pub min_rating: Option<f64>,
    pub sustainability: HotelSustainabilityFlags,
}

impl HotelCriteria {
    const PREDICATES: [Predicate<Self, Hotel>; 6] = [
        Self::price_matches,
        Self::eco_score_matches,
        Self::eco_labels_match,
        Self::amenities_match,
        Self::rating_matches,
        Self::sustainability_matches,
    ];

    fn price_matches(&self, hotel: &Hotel) -> bool {
        in_range(&self.price_range, hotel.price_per_night)
    }

    fn eco_score_matches(&self, hotel: &Hotel) -> bool {
        in_range(&self.eco_score_range, hotel.eco_score)
    }

    fn eco_labels_match(&self, hotel: &Hotel) -> bool {
        any_selected(&self.eco_labels, hotel.eco_labels.iter().map(|l| l.id.as_str()))
    }

    fn amenities_match(&self, hotel: &Hotel) -> bool {
        all_selected(&self.amenities, &hotel.amenities)
    }

    fn rating_matches(&self, hotel: &Hotel) -> bool {
        self.min_rating.map(|r| hotel.rating >= r).unwrap_or(true)
    }

    fn sustainability_matches(&self, hotel: &Hotel) -> bool {
        let flags = &self.sustainability;
        let s = &hotel.sustainability;
        [
            (flags.renewable, s.energy_source == EnergySource::Renewable),
            (flags.carbon_neutral, s.carbon_neutral),
            (flags.local_sourcing, s.local_sourcing),
            (flags.water_conservation, s.water_conservation),
            (flags.waste_reduction, s.waste_reduction),
        ]
        .into_iter()
        .all(|(active, attribute)| flag_satisfied(active, attribute))
    }
}

impl OfferingFilter<Hotel> for HotelCriteria {
    fn matches(&self, hotel: &Hotel) -> bool {
        Self::PREDICATES.iter().all(|p| p(self, hotel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::filter::{filter_and_sort, SortKey};
    use crate::model::offering::fixtures::{eco_label, hotel};

    fn hotels() -> Vec<Hotel> {
        let mut eco_lodge = hotel("eco-lodge", 95.0, 9.2, 3.0);
        eco_lodge.eco_labels = vec![eco_label("green-key"), eco_label("ecolabel-eu")];
        eco_lodge.amenities = vec![String::from("wifi"), String::from("garden")];
        eco_lodge.sustainability.energy_source = EnergySource::Renewable;
        eco_lodge.sustainability.carbon_neutral = true;

        let mut city = hotel("city", 140.0, 6.0, 4.0);
        city.eco_labels = vec![eco_label("clef-verte")];
        city.amenities = vec![
            String::from("wifi"),
            String::from("spa"),
            String::from("garden"),
        ];
        city.sustainability.local_sourcing = true;

        let mut palace = hotel("palace", 420.0, 3.5, 5.0);
        palace.amenities = vec![String::from("wifi"), String::from("spa")];

        let budget = hotel("budget", 60.0, 6.0, 2.0);
        vec![eco_lodge, city, palace, budget]
    }

    fn ids(result: &[&Hotel]) -> Vec<String> {
        result.iter().map(|h| h.id.clone()).collect()
    }

    #[test]
    fn test_default_criteria_keep_everything() {
        let input = hotels();
        let result = filter_and_sort(&input, &HotelCriteria::default(), &SortKey::Eco);
        // city and budget tie on eco score and keep their input order
        assert_eq!(ids(&result), vec!["eco-lodge", "city", "budget", "palace"]);
        let result = filter_and_sort(&input, &HotelCriteria::default(), &SortKey::Rating);
        assert_eq!(ids(&result), vec!["palace", "city", "eco-lodge", "budget"]);
    }

    #[test]
    fn test_eco_labels_match_any() {
        let input = hotels();
        let criteria = HotelCriteria {
            eco_labels: vec![String::from("green-key"), String::from("clef-verte")],
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Price);
        assert_eq!(ids(&result), vec!["eco-lodge", "city"]);
    }

    #[test]
    fn test_amenities_match_all() {
        let input = hotels();
        let criteria = HotelCriteria {
            amenities: vec![String::from("wifi"), String::from("spa")],
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Price);
        assert_eq!(ids(&result), vec!["city", "palace"]);
    }

    #[test]
    fn test_sustainability_flags() {
        let input = hotels();
        let criteria = HotelCriteria {
            sustainability: HotelSustainabilityFlags {
                renewable: true,
                carbon_neutral: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Eco);
        assert_eq!(ids(&result), vec!["eco-lodge"]);
    }

    #[test]
    fn test_ranges_and_rating() {
        let input = hotels();
        let criteria = HotelCriteria {
            price_range: Some(ValueRange::new(50.0, 300.0)),
            eco_score_range: Some(ValueRange::new(5.0, 10.0)),
            min_rating: Some(3.0),
            ..Default::default()
        };
        let result = filter_and_sort(&input, &criteria, &SortKey::Price);
        assert_eq!(ids(&result), vec!["eco-lodge", "city"]);
    }

    #[test]
    fn test_decode_partial_criteria() {
        let criteria: HotelCriteria = toml::from_str(
            r#"
            amenities = ["wifi"]
            price_range = { min = 0.0, max = 150.0 }

            [sustainability]
            renewable = true
            "#,
        )
        .unwrap();
        assert_eq!(criteria.price_range, Some(ValueRange::new(0.0, 150.0)));
        assert!(criteria.sustainability.renewable);
        assert!(!criteria.sustainability.carbon_neutral);
        assert!(criteria.eco_labels.is_empty());
    }
}
