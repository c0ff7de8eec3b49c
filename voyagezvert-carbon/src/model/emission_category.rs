//! closed sets of emission categories for each [`Domain`], along with the
//! default emission factor (kg CO2e per unit) of each category.
use super::{CarbonError, Domain};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a closed enumeration of categories with a fixed name and default factor.
pub trait CategoryEntries: Sized + Copy + PartialEq + 'static {
    /// every category, its serialized name, and its default emission factor
    const ENTRIES: &'static [(Self, &'static str, f64)];

    fn name(&self) -> &'static str {
        Self::ENTRIES
            .iter()
            .find(|(c, _, _)| c == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    fn default_factor(&self) -> f64 {
        Self::ENTRIES
            .iter()
            .find(|(c, _, _)| c == self)
            .map(|(_, _, factor)| *factor)
            .unwrap_or_default()
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(c, _, _)| *c)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TransportCategory {
    Walk,
    Bike,
    Train,
    Bus,
    CarPetrol,
    CarDiesel,
    /// depends on the electricity grid
    CarElectric,
    PlaneDomestic,
    PlaneShort,
    PlaneMedium,
    PlaneLong,
    Metro,
    Tram,
}

impl CategoryEntries for TransportCategory {
    const ENTRIES: &'static [(Self, &'static str, f64)] = &[
        (Self::Walk, "walk", 0.0),
        (Self::Bike, "bike", 0.0),
        (Self::Train, "train", 0.041),
        (Self::Bus, "bus", 0.089),
        (Self::CarPetrol, "car_petrol", 0.171),
        (Self::CarDiesel, "car_diesel", 0.152),
        (Self::CarElectric, "car_electric", 0.053),
        (Self::PlaneDomestic, "plane_domestic", 0.255),
        (Self::PlaneShort, "plane_short", 0.195),
        (Self::PlaneMedium, "plane_medium", 0.156),
        (Self::PlaneLong, "plane_long", 0.195),
        (Self::Metro, "metro", 0.034),
        (Self::Tram, "tram", 0.029),
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AccommodationCategory {
    Camping,
    Hostel,
    HotelBudget,
    HotelStandard,
    HotelLuxury,
    HotelEco,
    Bnb,
    Apartment,
}

impl CategoryEntries for AccommodationCategory {
    const ENTRIES: &'static [(Self, &'static str, f64)] = &[
        (Self::Camping, "camping", 2.8),
        (Self::Hostel, "hostel", 4.6),
        (Self::HotelBudget, "hotel_budget", 8.3),
        (Self::HotelStandard, "hotel_standard", 12.2),
        (Self::HotelLuxury, "hotel_luxury", 18.7),
        (Self::HotelEco, "hotel_eco", 6.1),
        (Self::Bnb, "bnb", 7.2),
        (Self::Apartment, "apartment", 5.9),
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    MuseumVisit,
    CityTour,
    Hiking,
    Cycling,
    BoatTour,
    HelicopterTour,
    Skiing,
    SwimmingPool,
    Spa,
    CookingClass,
    WildlifeWatching,
    AdventureSports,
}

impl CategoryEntries for ActivityCategory {
    const ENTRIES: &'static [(Self, &'static str, f64)] = &[
        (Self::MuseumVisit, "museum_visit", 0.8),
        (Self::CityTour, "city_tour", 1.2),
        (Self::Hiking, "hiking", 0.3),
        (Self::Cycling, "cycling", 0.1),
        (Self::BoatTour, "boat_tour", 2.8),
        (Self::HelicopterTour, "helicopter_tour", 15.6),
        (Self::Skiing, "skiing", 3.2),
        (Self::SwimmingPool, "swimming_pool", 0.9),
        (Self::Spa, "spa", 1.8),
        (Self::CookingClass, "cooking_class", 0.6),
        (Self::WildlifeWatching, "wildlife_watching", 0.4),
        (Self::AdventureSports, "adventure_sports", 2.1),
    ];
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    LocalVegetarian,
    LocalOmnivore,
    ImportedVegetarian,
    ImportedOmnivore,
    FastFood,
    FineDining,
}

impl CategoryEntries for FoodCategory {
    const ENTRIES: &'static [(Self, &'static str, f64)] = &[
        (Self::LocalVegetarian, "local_vegetarian", 0.9),
        (Self::LocalOmnivore, "local_omnivore", 2.8),
        (Self::ImportedVegetarian, "imported_vegetarian", 1.8),
        (Self::ImportedOmnivore, "imported_omnivore", 4.2),
        (Self::FastFood, "fast_food", 3.1),
        (Self::FineDining, "fine_dining", 5.6),
    ];
}

/// a (domain, category) pair. serializes as `{"domain": .., "category": ..}`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", tag = "domain", content = "category")]
pub enum EmissionCategory {
    Transport(TransportCategory),
    Accommodation(AccommodationCategory),
    Activity(ActivityCategory),
    Food(FoodCategory),
}

impl EmissionCategory {
    /// finds the category with the given name within a domain.
    ///
    /// # Returns
    ///
    /// the category, or an [`CarbonError::UnknownCategory`] if the domain has no
    /// category by that name.
    pub fn parse(domain: Domain, category: &str) -> Result<Self, CarbonError> {
        let result = match domain {
            Domain::Transport => TransportCategory::from_name(category).map(Self::Transport),
            Domain::Accommodation => {
                AccommodationCategory::from_name(category).map(Self::Accommodation)
            }
            Domain::Activity => ActivityCategory::from_name(category).map(Self::Activity),
            Domain::Food => FoodCategory::from_name(category).map(Self::Food),
        };
        result.ok_or_else(|| CarbonError::UnknownCategory {
            domain,
            category: category.to_string(),
        })
    }

    pub fn domain(&self) -> Domain {
        match self {
            EmissionCategory::Transport(_) => Domain::Transport,
            EmissionCategory::Accommodation(_) => Domain::Accommodation,
            EmissionCategory::Activity(_) => Domain::Activity,
            EmissionCategory::Food(_) => Domain::Food,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EmissionCategory::Transport(c) => c.name(),
            EmissionCategory::Accommodation(c) => c.name(),
            EmissionCategory::Activity(c) => c.name(),
            EmissionCategory::Food(c) => c.name(),
        }
    }

    pub fn default_factor(&self) -> f64 {
        match self {
            EmissionCategory::Transport(c) => c.default_factor(),
            EmissionCategory::Accommodation(c) => c.default_factor(),
            EmissionCategory::Activity(c) => c.default_factor(),
            EmissionCategory::Food(c) => c.default_factor(),
        }
    }

    /// every category of every domain, in domain order
    pub fn all() -> impl Iterator<Item = EmissionCategory> {
        let transport = TransportCategory::ENTRIES
            .iter()
            .map(|(c, _, _)| Self::Transport(*c));
        let accommodation = AccommodationCategory::ENTRIES
            .iter()
            .map(|(c, _, _)| Self::Accommodation(*c));
        let activity = ActivityCategory::ENTRIES
            .iter()
            .map(|(c, _, _)| Self::Activity(*c));
        let food = FoodCategory::ENTRIES.iter().map(|(c, _, _)| Self::Food(*c));
        transport.chain(accommodation).chain(activity).chain(food)
    }
}

impl Display for EmissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_category() {
        let result = EmissionCategory::parse(Domain::Transport, "plane_domestic").unwrap();
        assert_eq!(
            result,
            EmissionCategory::Transport(TransportCategory::PlaneDomestic)
        );
        assert_eq!(result.default_factor(), 0.255);
        assert_eq!(result.to_string(), "transport.plane_domestic");
    }

    #[test]
    fn test_category_is_scoped_to_its_domain() {
        // "hiking" is an activity, not a transport mode
        let result = EmissionCategory::parse(Domain::Transport, "hiking");
        assert_eq!(
            result,
            Err(CarbonError::UnknownCategory {
                domain: Domain::Transport,
                category: String::from("hiking")
            })
        );
    }

    #[test]
    fn test_entry_names_match_serde_names() {
        for category in EmissionCategory::all() {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json["domain"], category.domain().as_str());
            assert_eq!(json["category"], category.name());
        }
    }

    #[test]
    fn test_all_categories_count() {
        assert_eq!(EmissionCategory::all().count(), 13 + 8 + 12 + 6);
    }
}
