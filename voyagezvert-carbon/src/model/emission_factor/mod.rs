mod emission_factor_config;
mod emission_factor_table;

pub use emission_factor_config::EmissionFactorConfig;
pub use emission_factor_table::{default_table, EmissionFactorTable};
