//! carbon footprint estimation for VoyagezVert trip legs.
//!
//! a trip is described as a sequence of legs (a transport hop, a hotel stay, an
//! activity, a meal). each leg is estimated against a table of emission factors,
//! then estimates are aggregated, scored on a 1-10 eco scale and inspected for
//! improvement suggestions. every operation here is a pure function of its inputs.
pub mod model;
