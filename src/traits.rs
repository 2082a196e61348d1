//! Seams between the routing core and its collaborators.
//!
//! The optimizer only sees coordinates through [`DistanceMetric`], and the
//! planner only sees address search through [`Geocoder`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A latitude/longitude pair in degrees.
///
/// Values are not range-checked; distances are only meaningful for
/// `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Provides pairwise distances (in meters) between coordinates.
pub trait DistanceMetric {
    fn distance(&self, from: Coord, to: Coord) -> f64;

    /// Full distance matrix indexed by the provided location order.
    fn matrix_for(&self, locations: &[Coord]) -> Vec<Vec<f64>>
    where
        Self: Sync,
    {
        locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0.0 } else { self.distance(*from, *to) })
                    .collect()
            })
            .collect()
    }
}

/// Resolves a free-text place query to a coordinate.
pub trait Geocoder {
    /// Returns `Ok(None)` when the service has no match for `query`, and
    /// [`crate::Error::EmptyQuery`] for a blank query.
    fn locate(&self, query: &str) -> Result<Option<Coord>>;
}
