mod carbon_equivalents;
mod offset_costs;

pub use carbon_equivalents::{equivalents, CarbonEquivalents};
pub use offset_costs::{offset_costs, OffsetCosts, OffsetProject};
