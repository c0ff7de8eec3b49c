use super::ScoreRating;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a 1-10 summary of how low-impact a leg is. 10 means no emissions.
/// decoding goes through [`EcoScore::new`], so a decoded score is clamped too.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(from = "f64", into = "f64")]
pub struct EcoScore(f64);

impl EcoScore {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 10.0;

    /// builds a score, clamping the value into [1, 10]. NaN becomes the minimum.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn rating(&self) -> ScoreRating {
        ScoreRating::from(self.0)
    }
}

impl From<f64> for EcoScore {
    fn from(value: f64) -> Self {
        EcoScore::new(value)
    }
}

impl From<EcoScore> for f64 {
    fn from(score: EcoScore) -> Self {
        score.0
    }
}

impl Display for EcoScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}/10", self.0)
    }
}
