mod aggregate_ops;
mod aggregate_result;

pub use aggregate_ops::aggregate;
pub use aggregate_result::AggregateResult;
