mod emission_estimate;
pub mod estimate_ops;
mod leg_quantity;

pub use emission_estimate::{EmissionEstimate, EstimateDetails};
pub use estimate_ops::{estimate, estimate_leg, estimate_with_table};
pub use leg_quantity::LegQuantity;
pub(crate) use leg_quantity::clamp_magnitude;
