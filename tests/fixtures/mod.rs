//! Test fixtures for waypoint-router.
//!
//! Provides real Jaipur landmarks (from OpenStreetMap) to place as waypoints.

pub mod jaipur_locations;

pub use jaipur_locations::*;
