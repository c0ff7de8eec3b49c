use crate::model::offering::Offering;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// the order in which filtered offerings are presented
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// eco score, highest first
    #[default]
    Eco,
    /// price, lowest first
    Price,
    /// duration, shortest first. offerings without a duration come last, by eco score.
    Duration,
    /// rating, highest first. offerings without a rating come last, by eco score.
    Rating,
}

impl SortKey {
    /// orders two offerings by this key. when neither offering has a value for
    /// the key (routes have no rating, hotels no duration), they are ordered by
    /// eco score instead.
    pub fn compare<T: Offering>(&self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Eco => by_eco_score(a, b),
            SortKey::Price => a.price().total_cmp(&b.price()),
            SortKey::Duration => {
                present_first(a.duration_minutes(), b.duration_minutes(), |x, y| {
                    x.total_cmp(y)
                })
                .unwrap_or_else(|| by_eco_score(a, b))
            }
            SortKey::Rating => present_first(a.rating(), b.rating(), |x, y| y.total_cmp(x))
                .unwrap_or_else(|| by_eco_score(a, b)),
        }
    }
}

fn by_eco_score<T: Offering>(a: &T, b: &T) -> Ordering {
    b.eco_score().total_cmp(&a.eco_score())
}

/// offerings with a value come first. None when both lack one.
fn present_first(
    a: Option<f64>,
    b: Option<f64>,
    cmp: fn(&f64, &f64) -> Ordering,
) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => Some(cmp(&x, &y)),
        (Some(_), None) => Some(Ordering::Less),
        (None, Some(_)) => Some(Ordering::Greater),
        (None, None) => None,
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortKey::Eco => "eco",
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Rating => "rating",
        };
        write!(f, "{}", s)
    }
}
