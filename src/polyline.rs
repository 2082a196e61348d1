//! Route geometry handed to the presenter.
//!
//! A [`Polyline`] is the solved route as coordinates in visiting order;
//! drawing it and fitting the map view happens at the presentation boundary.

use serde::{Deserialize, Serialize};

use crate::traits::Coord;

/// The solved route as coordinates in visiting order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coord>,
}

/// Axis-aligned lat/lon box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coord,
    pub north_east: Coord,
}

impl Polyline {
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    /// Picks `points` in route order. Indices outside `points` are skipped.
    pub fn from_route(points: &[Coord], order: &[usize]) -> Self {
        Self::new(order.iter().filter_map(|&i| points.get(i).copied()).collect())
    }

    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Coord> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest box containing every point, or `None` for an empty polyline.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.points.first()?;
        let mut bounds = Bounds {
            south_west: first,
            north_east: first,
        };
        for point in &self.points[1..] {
            bounds.south_west.lat = bounds.south_west.lat.min(point.lat);
            bounds.south_west.lon = bounds.south_west.lon.min(point.lon);
            bounds.north_east.lat = bounds.north_east.lat.max(point.lat);
            bounds.north_east.lon = bounds.north_east.lon.max(point.lon);
        }
        Some(bounds)
    }
}

impl Bounds {
    /// Grows the box on every side by `ratio` of its span.
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lon_buffer = (self.north_east.lon - self.south_west.lon).abs() * ratio;
        Self {
            south_west: Coord::new(self.south_west.lat - lat_buffer, self.south_west.lon - lon_buffer),
            north_east: Coord::new(self.north_east.lat + lat_buffer, self.north_east.lon + lon_buffer),
        }
    }
}
