mod route_comparison;

pub use route_comparison::{compare_routes, RouteComparisonSummary};
