mod app_error;
mod carbon_report;
pub mod config_ops;
mod operation;
mod voyagezvert_app;

pub use app_error::AppError;
pub use carbon_report::{CarbonReport, LegScore};
pub use operation::Operation;
pub use voyagezvert_app::VoyagezVertApp;
