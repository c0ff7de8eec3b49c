use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// display band of an eco score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl From<f64> for ScoreRating {
    fn from(score: f64) -> Self {
        if score >= 8.0 {
            ScoreRating::Excellent
        } else if score >= 6.0 {
            ScoreRating::Good
        } else if score >= 4.0 {
            ScoreRating::Fair
        } else {
            ScoreRating::Poor
        }
    }
}

impl Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScoreRating::Poor => "poor",
            ScoreRating::Fair => "fair",
            ScoreRating::Good => "good",
            ScoreRating::Excellent => "excellent",
        };
        write!(f, "{}", s)
    }
}
