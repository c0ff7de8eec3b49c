mod eco_score;
mod score_rating;
pub mod score_ops;

pub use eco_score::EcoScore;
pub use score_ops::{score, score_estimate};
pub use score_rating::ScoreRating;
