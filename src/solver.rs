//! Open-path route optimizer: nearest-neighbor construction followed by
//! first-improvement 2-opt.
//!
//! The route always starts at the first waypoint and never returns to it.
//! Both phases work on a precomputed distance matrix indexed by snapshot
//! position, so a route is a permutation of `0..n`.

use crate::error::{Error, Result};
use crate::traits::{Coord, DistanceMetric};

/// Minimum gain for a 2-opt move to be applied. Guards against flipping
/// back and forth between near-equal segments.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Maximum number of 2-opt moves to apply. `None` runs until no
    /// improving move remains.
    pub max_moves: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Visiting order as indices into the solved snapshot.
    pub order: Vec<usize>,
    /// Path length in meters, summed over consecutive stops.
    pub total_meters: f64,
    /// Number of 2-opt moves applied on top of the nearest-neighbor route.
    pub moves: usize,
}

/// Solves a visiting order over `points`.
///
/// Fails with [`Error::InsufficientWaypoints`] for fewer than two points
/// rather than returning a trivial route.
pub fn solve<M>(points: &[Coord], metric: &M, options: &SolveOptions) -> Result<Solution>
where
    M: DistanceMetric + Sync,
{
    if points.len() < 2 {
        return Err(Error::InsufficientWaypoints {
            found: points.len(),
        });
    }

    let matrix = metric.matrix_for(points);

    let initial = nearest_neighbor(&matrix);
    let initial_meters = total_distance(&initial, &matrix);
    tracing::debug!(n = points.len(), total_m = initial_meters, "nearest-neighbor route built");

    let (order, moves) = two_opt(&initial, &matrix, options);
    let total_meters = total_distance(&order, &matrix);

    tracing::info!(
        n = points.len(),
        moves,
        initial_m = initial_meters,
        total_m = total_meters,
        "route solved"
    );

    Ok(Solution {
        order,
        total_meters,
        moves,
    })
}

/// Greedy route from index 0, always extending to the closest unvisited
/// point. Ties go to the lowest index.
pub fn nearest_neighbor(matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = matrix.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut route = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    route.push(current);

    for _ in 1..n {
        let mut best: Option<(usize, f64)> = None;
        for (candidate, &dist) in matrix[current].iter().enumerate() {
            if visited[candidate] {
                continue;
            }
            // Strict comparison keeps the first minimum found.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((candidate, dist));
            }
        }

        let Some((next, _)) = best else {
            break;
        };
        visited[next] = true;
        route.push(next);
        current = next;
    }

    route
}

/// 2-opt: reverse a segment whenever doing so shortens the path, restarting
/// the scan after every applied move. Returns the improved route and the
/// number of moves applied.
///
/// The first stop is fixed and the path is open, so the segment start `i`
/// ranges over interior positions and the segment may run to the last stop.
pub fn two_opt(route: &[usize], matrix: &[Vec<f64>], options: &SolveOptions) -> (Vec<usize>, usize) {
    let mut current = route.to_vec();
    let len = current.len();
    if len <= 2 {
        return (current, 0);
    }

    let mut moves = 0;
    while options.max_moves.is_none_or(|max| moves < max) {
        match find_improving_move(&current, matrix) {
            Some((i, k)) => {
                current[i..=k].reverse();
                moves += 1;
            }
            None => break,
        }
    }

    if options.max_moves == Some(moves) {
        tracing::debug!(moves, "2-opt stopped at move budget");
    }

    (current, moves)
}

/// First `(i, k)` whose segment reversal gains more than the epsilon.
fn find_improving_move(route: &[usize], matrix: &[Vec<f64>]) -> Option<(usize, usize)> {
    let len = route.len();
    let mut i = 1;
    while i + 1 < len - 1 {
        let a = route[i - 1];
        let b = route[i];
        for k in i + 1..len {
            let c = route[k];
            let (before, after) = match route.get(k + 1) {
                Some(&d) => (matrix[a][b] + matrix[c][d], matrix[a][c] + matrix[b][d]),
                None => (matrix[a][b], matrix[a][c]),
            };
            if after < before - IMPROVEMENT_EPSILON {
                return Some((i, k));
            }
        }
        i += 1;
    }
    None
}

/// Sum of consecutive leg lengths; 0 for routes with fewer than two stops.
pub fn total_distance(route: &[usize], matrix: &[Vec<f64>]) -> f64 {
    route
        .windows(2)
        .map(|leg| matrix[leg[0]][leg[1]])
        .sum()
}
