use super::{OfferingFilter, SortKey, ValueRange};
use crate::model::offering::Offering;
use itertools::Itertools;

/// selects the offerings that satisfy every active predicate of `criteria`, then
/// orders them by `sort_key`. the sort is stable, so offerings that compare equal
/// keep their input order. offerings are only borrowed.
pub fn filter_and_sort<'a, T, F>(offerings: &'a [T], criteria: &F, sort_key: &SortKey) -> Vec<&'a T>
where
    T: Offering,
    F: OfferingFilter<T>,
{
    let mut result = offerings
        .iter()
        .filter(|o| criteria.matches(o))
        .collect_vec();
    result.sort_by(|a, b| sort_key.compare(*a, *b));
    log::debug!(
        "kept {} of {} offerings, sorted by {sort_key}",
        result.len(),
        offerings.len()
    );
    result
}

/// an unset range accepts every value
pub fn in_range(range: &Option<ValueRange>, value: f64) -> bool {
    range.as_ref().map(|r| r.contains(value)).unwrap_or(true)
}

/// an empty selection accepts every value
pub fn member_of<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// true if any selected value is present. an empty selection accepts everything.
pub fn any_selected<'a>(selected: &[String], mut present: impl Iterator<Item = &'a str>) -> bool {
    selected.is_empty() || present.any(|p| selected.iter().any(|s| s == p))
}

/// true if every selected value is present. an empty selection accepts everything.
pub fn all_selected(selected: &[String], present: &[String]) -> bool {
    selected.iter().all(|s| present.contains(s))
}

/// a flag that is switched off accepts every offering
pub fn flag_satisfied(active: bool, attribute: bool) -> bool {
    !active || attribute
}
