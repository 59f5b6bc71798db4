//! Test utilities and mock types for swarmgrid development.
//!
//! Provides in-memory implementations of the search collaborator traits
//! ([`PickupSource`], [`StatusPort`]) and grid/server fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::{HashSet, VecDeque};

use swarmgrid_core::GridCoord;
use swarmgrid_search::{PickupSource, Point, SearchError, StatusPort};

/// Replays a fixed list of pickup points, then reports none.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPickupSource {
    points: VecDeque<Point>,
    served: usize,
}

impl ScriptedPickupSource {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            served: 0,
        }
    }

    /// Pickups handed out so far.
    pub fn served(&self) -> usize {
        self.served
    }
}

impl PickupSource for ScriptedPickupSource {
    fn next_pickup(&mut self) -> Option<Point> {
        let next = self.points.pop_front()?;
        self.served += 1;
        Some(next)
    }
}

/// In-memory visited set keyed by cell, with the same rounding as
/// [`GridStatusPort`](swarmgrid_search::GridStatusPort).
#[derive(Clone, Debug)]
pub struct MockStatusPort {
    cell_size: f64,
    visited: HashSet<GridCoord>,
    queries: usize,
}

impl MockStatusPort {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            visited: HashSet::new(),
            queries: 0,
        }
    }

    /// Pre-mark a cell as visited.
    pub fn visit_cell(&mut self, cell: GridCoord) {
        self.visited.insert(cell);
    }

    /// Whether `cell` has been marked.
    pub fn is_cell_visited(&self, cell: GridCoord) -> bool {
        self.visited.contains(&cell)
    }

    /// Number of distinct visited cells.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of `is_visited` calls so far.
    pub fn queries(&self) -> usize {
        self.queries
    }

    pub fn cell_of(&self, at: Point) -> Result<GridCoord, SearchError> {
        let axis = |v: f64| {
            let r = (v / self.cell_size).round();
            (r >= i8::MIN as f64 && r <= i8::MAX as f64).then_some(r as i8)
        };
        match (axis(at.x), axis(at.y)) {
            (Some(x), Some(y)) => Ok(GridCoord::new(x, y)),
            _ => Err(SearchError::OffGrid { x: at.x, y: at.y }),
        }
    }
}

impl Default for MockStatusPort {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl StatusPort for MockStatusPort {
    fn is_visited(&mut self, at: Point) -> Result<bool, SearchError> {
        self.queries += 1;
        let cell = self.cell_of(at)?;
        Ok(self.visited.contains(&cell))
    }

    fn mark_visited(&mut self, at: Point) -> Result<(), SearchError> {
        let cell = self.cell_of(at)?;
        self.visited.insert(cell);
        Ok(())
    }
}
