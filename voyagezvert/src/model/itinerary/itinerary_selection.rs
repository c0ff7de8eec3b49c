use super::SelectionImpact;
use crate::model::offering::{Offering, OfferingKind};
use serde::{Deserialize, Serialize};

/// an ordered set of chosen offerings, unique by id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ItinerarySelection<T> {
    items: Vec<T>,
}

impl<T> Default for ItinerarySelection<T> {
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<T: Offering> ItinerarySelection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// appends an offering unless one with the same id is already selected.
    ///
    /// # Returns
    ///
    /// true if the offering was added
    pub fn add(&mut self, offering: T) -> bool {
        if self.contains(offering.id()) {
            log::debug!("offering {} already selected", offering.id());
            return false;
        }
        self.items.push(offering);
        true
    }

    /// removes the offering with this id, preserving the order of the others.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|o| o.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|o| o.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn impact(&self) -> SelectionImpact {
        let count_of =
            |kind: OfferingKind| self.items.iter().filter(|o| o.kind() == kind).count();
        let total_cost = self.items.iter().map(|o| o.price()).sum();
        let total_carbon = self.items.iter().map(|o| o.carbon_footprint()).sum();
        let total_duration_minutes = self.items.iter().filter_map(|o| o.duration_minutes()).sum();
        let average_eco_score = if self.items.is_empty() {
            0.0
        } else {
            self.items.iter().map(|o| o.eco_score()).sum::<f64>() / self.items.len() as f64
        };
        SelectionImpact {
            item_count: self.items.len(),
            route_count: count_of(OfferingKind::Route),
            hotel_count: count_of(OfferingKind::Hotel),
            activity_count: count_of(OfferingKind::Activity),
            total_cost,
            total_carbon,
            average_eco_score,
            total_duration_minutes,
        }
    }
}

impl<T: Offering> FromIterator<T> for ItinerarySelection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut selection = Self::new();
        for offering in iter {
            selection.add(offering);
        }
        selection
    }
}
