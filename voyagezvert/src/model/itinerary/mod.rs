mod itinerary_selection;
mod selection_impact;

pub use itinerary_selection::ItinerarySelection;
pub use selection_impact::SelectionImpact;
