pub mod aggregate;
mod carbon_error;
mod domain;
pub mod emission_category;
pub mod emission_factor;
pub mod estimate;
pub mod offset;
pub mod score;
pub mod suggestion;

pub use carbon_error::CarbonError;
pub use domain::Domain;
pub use emission_category::EmissionCategory;
