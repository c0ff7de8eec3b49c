//! eco-rated travel offerings for VoyagezVert: filtering and ordering of routes,
//! hotels and activities, route comparison, itinerary impact, and the command
//! line tool producing carbon reports from trip legs.
pub mod app;
pub mod model;
