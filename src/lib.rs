//! waypoint-router core
//!
//! Waypoint editing with undo, and a short open-path visiting order over
//! great-circle distances (nearest neighbor + 2-opt).

pub mod error;
pub mod traits;
pub mod store;
pub mod solver;
pub mod planner;
pub mod geocode;
pub mod haversine;
pub mod polyline;

pub use error::{Error, Result};
