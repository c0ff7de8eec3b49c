mod activity;
mod any_offering;
#[cfg(test)]
pub(crate) mod fixtures;
mod hotel;
mod offering_kind;
mod place;
mod transport_route;

pub use activity::{
    Activity, ActivityCategory, ActivityProvider, ActivitySustainability, Difficulty, GroupSize,
    Season, SeasonName,
};
pub use any_offering::AnyOffering;
pub use hotel::{EcoLabel, EcoLabelCategory, EnergySource, Hotel, HotelReviews, HotelSustainability};
pub use offering_kind::OfferingKind;
pub use place::Place;
pub use transport_route::{TransportMode, TransportRoute, TransportType};

/// the common view over a bookable item used to filter, order and total offerings.
pub trait Offering {
    fn id(&self) -> &str;
    fn kind(&self) -> OfferingKind;
    /// price in euros. per night for hotels.
    fn price(&self) -> f64;
    /// 1-10 eco score
    fn eco_score(&self) -> f64;
    /// kg CO2e. per night for hotels.
    fn carbon_footprint(&self) -> f64;
    /// duration in minutes, if the offering has one
    fn duration_minutes(&self) -> Option<f64>;
    /// rating of the offering or its provider, if it has one
    fn rating(&self) -> Option<f64>;
}
