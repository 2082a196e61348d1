//! Ordered waypoint collection with a linear undo history.
//!
//! The store is the single owner of the waypoint sequence. Every mutation
//! pushes one [`ActionRecord`]; [`WaypointStore::undo`] pops one and applies
//! its inverse without recording anything, so undo is never itself undoable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::traits::Coord;

/// Identity of a waypoint, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaypointId(u64);

impl WaypointId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: WaypointId,
    pub coord: Coord,
}

/// A reversible description of one mutating operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRecord {
    Add {
        id: WaypointId,
        coord: Coord,
    },
    Remove {
        id: WaypointId,
        coord: Coord,
        original_index: usize,
    },
    Clear {
        removed: Vec<Waypoint>,
    },
}

impl ActionRecord {
    /// Points references to a waypoint that has been re-created under a new
    /// identity at that new identity.
    fn rename(&mut self, from: WaypointId, to: WaypointId) {
        match self {
            Self::Add { id, .. } | Self::Remove { id, .. } => {
                if *id == from {
                    *id = to;
                }
            }
            Self::Clear { removed } => {
                for waypoint in removed.iter_mut().filter(|w| w.id == from) {
                    waypoint.id = to;
                }
            }
        }
    }
}

/// What an undo did to the sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum AppliedChange {
    /// An add was reverted; the waypoint is gone.
    Removed(Waypoint),
    /// A removal was reverted; the waypoint is back under a fresh id.
    Restored {
        previous: WaypointId,
        waypoint: Waypoint,
        index: usize,
    },
    /// A clear was reverted; all waypoints are back, in their original order.
    RestoredAll(Vec<Waypoint>),
}

#[derive(Debug, Clone, Default)]
pub struct WaypointStore {
    sequence: Vec<Waypoint>,
    history: Vec<ActionRecord>,
    next_id: u64,
}

impl WaypointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a waypoint and returns its identity.
    pub fn add(&mut self, coord: Coord) -> WaypointId {
        let id = self.append(coord).id;
        self.history.push(ActionRecord::Add { id, coord });
        tracing::debug!(%id, lat = coord.lat, lon = coord.lon, "waypoint added");
        id
    }

    /// Removes a waypoint, keeping the relative order of the others.
    pub fn remove(&mut self, id: WaypointId) -> Result<Waypoint> {
        let (original_index, waypoint) = self.take(id)?;
        self.history.push(ActionRecord::Remove {
            id,
            coord: waypoint.coord,
            original_index,
        });
        tracing::debug!(%id, index = original_index, "waypoint removed");
        Ok(waypoint)
    }

    /// Removes every waypoint as a single undoable step. Does nothing (and
    /// records nothing) when the store is already empty.
    pub fn clear(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        let removed = std::mem::take(&mut self.sequence);
        tracing::debug!(count = removed.len(), "waypoints cleared");
        self.history.push(ActionRecord::Clear { removed });
    }

    /// Reverts the most recent mutation.
    pub fn undo(&mut self) -> Result<AppliedChange> {
        let record = self.history.pop().ok_or(Error::NoHistory)?;

        let change = match record {
            ActionRecord::Add { id, .. } => {
                // History is kept consistent by `rename`, so a missing id
                // means the record is stale; it is dropped either way.
                let (_, waypoint) = self.take(id)?;
                AppliedChange::Removed(waypoint)
            }
            ActionRecord::Remove {
                id,
                coord,
                original_index,
            } => {
                let index = original_index.min(self.sequence.len());
                let waypoint = self.insert(index, coord);
                self.rename_in_history(id, waypoint.id);
                AppliedChange::Restored {
                    previous: id,
                    waypoint,
                    index,
                }
            }
            ActionRecord::Clear { removed } => {
                debug_assert!(self.sequence.is_empty());
                let restored: Vec<Waypoint> = removed
                    .iter()
                    .map(|old| {
                        let waypoint = self.append(old.coord);
                        self.rename_in_history(old.id, waypoint.id);
                        waypoint
                    })
                    .collect();
                AppliedChange::RestoredAll(restored)
            }
        };

        tracing::debug!(remaining = self.history.len(), ?change, "undo applied");
        Ok(change)
    }

    /// Coordinates in sequence order, for the optimizer.
    pub fn snapshot(&self) -> Vec<Coord> {
        self.sequence.iter().map(|waypoint| waypoint.coord).collect()
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.sequence
    }

    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.sequence.iter().find(|waypoint| waypoint.id == id)
    }

    /// Display position (and route index) of a waypoint.
    pub fn position(&self, id: WaypointId) -> Option<usize> {
        self.sequence.iter().position(|waypoint| waypoint.id == id)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    fn fresh_id(&mut self) -> WaypointId {
        let id = WaypointId(self.next_id);
        self.next_id += 1;
        id
    }

    fn append(&mut self, coord: Coord) -> Waypoint {
        let index = self.sequence.len();
        self.insert(index, coord)
    }

    fn insert(&mut self, index: usize, coord: Coord) -> Waypoint {
        let waypoint = Waypoint {
            id: self.fresh_id(),
            coord,
        };
        self.sequence.insert(index, waypoint);
        waypoint
    }

    fn take(&mut self, id: WaypointId) -> Result<(usize, Waypoint)> {
        let index = self.position(id).ok_or(Error::NotFound(id))?;
        Ok((index, self.sequence.remove(index)))
    }

    fn rename_in_history(&mut self, from: WaypointId, to: WaypointId) {
        for record in &mut self.history {
            record.rename(from, to);
        }
    }
}
