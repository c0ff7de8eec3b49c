use super::filter_ops::{flag_satisfied, in_range, member_of};
use super::{OfferingFilter, Predicate, ValueRange};
use crate::model::offering::{Activity, Difficulty};
use serde::{Deserialize, Serialize};

/// sustainability requirements. a flag left off places no requirement.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActivitySustainabilityFlags {
    pub supports_local: bool,
    pub educational: bool,
    pub conservation: bool,
    pub environmentally_friendly: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActivityCriteria {
    pub price_range: Option<ValueRange>,
    pub eco_score_range: Option<ValueRange>,
    /// range over the activity duration in hours
    pub duration_hours: Option<ValueRange>,
    /// activity category ids
    pub categories: Vec<String>,
    pub difficulties: Vec<Difficulty>,
    pub sustainability: ActivitySustainabilityFlags,
}

impl ActivityCriteria {
    const PREDICATES: [Predicate<Self, Activity>; 6] = [
        Self::price_matches,
        Self::eco_score_matches,
        Self::duration_matches,
        Self::category_matches,
        Self::difficulty_matches,
        Self::sustainability_matches,
    ];

    fn price_matches(&self, activity: &Activity) -> bool {
        in_range(&self.price_range, activity.price)
    }

    fn eco_score_matches(&self, activity: &Activity) -> bool {
        in_range(&self.eco_score_range, activity.eco_score)
    }

    fn duration_matches(&self, activity: &Activity) -> bool {
        in_range(&self.duration_hours, activity.duration_hours())
    }

    fn category_matches(&self, activity: &Activity) -> bool {
        member_of(&self.categories, &activity.category.id)
    }

    fn difficulty_matches(&self, activity: &Activity) -> bool {
        member_of(&self.difficulties, &activity.difficulty)
    }

    fn sustainability_matches(&self, activity: &Activity) -> bool {
        let flags = &self.sustainability;
        let s = &activity.sustainability;
        [
            (flags.supports_local, s.supports_local_community),
            (flags.educational, s.educational_value),
            (flags.conservation, s.wildlife_conservation),
            (flags.environmentally_friendly, s.environmentally_friendly),
        ]
        .into_iter()
        .all(|(active, attribute)| flag_satisfied(active, attribute))
    }
}

impl OfferingFilter<Activity> for ActivityCriteria {
    fn matches(&self, activity: &Activity) -> bool {
        Self::PREDICATES.iter().all(|p| p(self, activity))
    }
}
