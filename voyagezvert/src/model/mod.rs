pub mod comparison;
pub mod filter;
pub mod itinerary;
pub mod offering;
