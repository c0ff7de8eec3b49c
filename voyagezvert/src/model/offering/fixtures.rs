//! small offerings for unit tests. callers adjust the returned values as needed.
use super::*;

pub fn place(id: &str) -> Place {
    Place {
        id: id.to_string(),
        name: id.to_string(),
        address: String::new(),
        latitude: 48.8566,
        longitude: 2.3522,
        country: String::from("France"),
        city: id.to_string(),
    }
}

pub fn route(
    id: &str,
    transport_type: TransportType,
    price: f64,
    duration: f64,
    eco_score: f64,
) -> TransportRoute {
    TransportRoute {
        id: id.to_string(),
        origin: place("paris"),
        destination: place("lyon"),
        transport_mode: TransportMode {
            id: format!("{id}-mode"),
            name: format!("{transport_type:?}"),
            transport_type,
            carbon_emission_per_km: 0.0,
            icon: String::new(),
            eco_score,
        },
        distance: 462.0,
        duration,
        price,
        carbon_footprint: 0.0,
        eco_score,
        provider: None,
        booking_url: None,
    }
}

pub fn hotel(id: &str, price_per_night: f64, eco_score: f64, rating: f64) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        location: place("nice"),
        images: vec![],
        rating,
        eco_score,
        eco_labels: vec![],
        amenities: vec![],
        price_per_night,
        carbon_footprint: 0.0,
        sustainability: HotelSustainability {
            energy_source: EnergySource::Mixed,
            water_conservation: false,
            waste_reduction: false,
            local_sourcing: false,
            carbon_neutral: false,
        },
        reviews: HotelReviews::default(),
        booking_url: None,
    }
}

pub fn eco_label(id: &str) -> EcoLabel {
    EcoLabel {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        icon: String::new(),
        category: EcoLabelCategory::Environmental,
        weight: 1.0,
    }
}

pub fn activity(id: &str, price: f64, duration: f64, eco_score: f64) -> Activity {
    Activity {
        id: id.to_string(),
        name: id.to_string(),
        description: String::new(),
        location: place("annecy"),
        category: ActivityCategory {
            id: String::from("nature"),
            name: String::from("Nature"),
            icon: String::new(),
            description: String::new(),
        },
        images: vec![],
        duration,
        price,
        eco_score,
        carbon_impact: 0.0,
        group_size: GroupSize { min: 1, max: 12 },
        difficulty: Difficulty::Easy,
        seasonality: vec![],
        tags: vec![],
        sustainability: ActivitySustainability {
            supports_local_community: false,
            environmentally_friendly: false,
            educational_value: false,
            wildlife_conservation: false,
            cultural_preservation: false,
        },
        provider: ActivityProvider {
            name: String::from("provider"),
            rating: 4.0,
            certifications: vec![],
        },
        booking_url: None,
    }
}
