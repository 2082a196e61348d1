use thiserror::Error as ThisError;

use crate::store::WaypointId;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("waypoint {0} not found")]
    NotFound(WaypointId),
    #[error("no action to undo")]
    NoHistory,
    #[error("at least 2 waypoints are required to solve a route, found {found}")]
    InsufficientWaypoints { found: usize },
    #[error("search query is empty")]
    EmptyQuery,
    #[error("location not found: {0}")]
    LocationNotFound(String),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("geocoding request failed: {0}")]
    Geocode(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
