//! The presenter-facing entry point.
//!
//! A [`RoutePlanner`] owns one waypoint store and the last route solved for
//! it. Undo only touches the store: a solved route stays as it was until the
//! next [`RoutePlanner::solve_route`], except that clearing drops it.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::haversine::Haversine;
use crate::polyline::Polyline;
use crate::solver::{self, SolveOptions};
use crate::store::{AppliedChange, Waypoint, WaypointId, WaypointStore};
use crate::traits::{Coord, DistanceMetric, Geocoder};

/// One row of the waypoint list, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ListedWaypoint {
    pub index: usize,
    pub id: WaypointId,
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for ListedWaypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}, {:.6}", self.index, self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSolution {
    /// Indices into the waypoint list as it was when solved.
    pub order: Vec<usize>,
    pub total_meters: f64,
    pub path: Polyline,
}

impl fmt::Display for RouteSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self
            .order
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Order: [{}]\nDistance (m): {:.1}", order, self.total_meters)
    }
}

#[derive(Debug, Clone)]
pub struct RoutePlanner<M = Haversine> {
    store: WaypointStore,
    metric: M,
    options: SolveOptions,
    route: Option<RouteSolution>,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new(Haversine, SolveOptions::default())
    }
}

impl<M> RoutePlanner<M>
where
    M: DistanceMetric + Sync,
{
    pub fn new(metric: M, options: SolveOptions) -> Self {
        Self {
            store: WaypointStore::new(),
            metric,
            options,
            route: None,
        }
    }

    pub fn add_waypoint(&mut self, lat: f64, lon: f64) -> WaypointId {
        self.store.add(Coord::new(lat, lon))
    }

    pub fn remove_waypoint(&mut self, id: WaypointId) -> Result<Waypoint> {
        self.store.remove(id)
    }

    /// Removes every waypoint and forgets the solved route.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.route = None;
    }

    pub fn undo(&mut self) -> Result<AppliedChange> {
        self.store.undo()
    }

    /// Resolves `query` through `geocoder` and adds the first match.
    pub fn add_from_search<G>(&mut self, geocoder: &G, query: &str) -> Result<WaypointId>
    where
        G: Geocoder + ?Sized,
    {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        let coord = geocoder
            .locate(query)?
            .ok_or_else(|| Error::LocationNotFound(query.trim().to_string()))?;
        Ok(self.store.add(coord))
    }

    /// Solves the current waypoints and keeps the result as the current route.
    pub fn solve_route(&mut self) -> Result<&RouteSolution> {
        let points = self.store.snapshot();
        let solution = solver::solve(&points, &self.metric, &self.options)?;
        let path = Polyline::from_route(&points, &solution.order);

        Ok(self.route.insert(RouteSolution {
            order: solution.order,
            total_meters: solution.total_meters,
            path,
        }))
    }

    /// Last solved route; may be stale after later edits.
    pub fn current_route(&self) -> Option<&RouteSolution> {
        self.route.as_ref()
    }

    pub fn listing(&self) -> Vec<ListedWaypoint> {
        self.store
            .waypoints()
            .iter()
            .enumerate()
            .map(|(index, waypoint)| ListedWaypoint {
                index,
                id: waypoint.id,
                lat: waypoint.coord.lat,
                lon: waypoint.coord.lon,
            })
            .collect()
    }

    pub fn store(&self) -> &WaypointStore {
        &self.store
    }
}
