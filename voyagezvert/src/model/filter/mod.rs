mod activity_criteria;
pub mod filter_ops;
mod hotel_criteria;
mod route_criteria;
mod sort_key;
mod value_range;

pub use activity_criteria::{ActivityCriteria, ActivitySustainabilityFlags};
pub use filter_ops::filter_and_sort;
pub use hotel_criteria::{HotelCriteria, HotelSustainabilityFlags};
pub use route_criteria::RouteCriteria;
pub use sort_key::SortKey;
pub use value_range::ValueRange;

/// a snapshot of user-chosen constraints over offerings of type `T`.
///
/// implementations AND together a fixed list of predicates. a predicate whose
/// constraint is unset (no range, no selection, flag off) is satisfied by every
/// offering.
pub trait OfferingFilter<T> {
    fn matches(&self, offering: &T) -> bool;
}

/// a single named check of a criteria record against an offering
pub type Predicate<C, T> = fn(&C, &T) -> bool;
