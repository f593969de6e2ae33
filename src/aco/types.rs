//! Tours, per-epoch statistics, and the observer hook.

use super::colony::Colony;
use super::distance::DistanceMatrix;
use std::ops::ControlFlow;

/// A closed tour: every node visited exactly once, then back to the start.
///
/// `cost` includes the closing edge from the last node to the first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    path: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Builds a tour from a visiting order, computing its closed-cycle cost.
    pub fn from_path(path: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let cost = distances.tour_cost(&path);
        Self { path, cost }
    }

    /// Node IDs in visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Total length of the closed cycle.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Edges of the closed cycle, ending with `(last, first)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.path.len();
        (0..n).map(move |i| (self.path[(i + n - 1) % n], self.path[i]))
    }

    /// Consumes the tour, returning its path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}

/// Summary of one completed epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct EpochStats {
    /// 1-based epoch index.
    pub epoch: usize,

    /// Number of ants that built a tour this epoch.
    pub ants: usize,

    /// Lowest tour cost of this epoch, `None` when no ants ran.
    pub epoch_best_cost: Option<f64>,

    /// Mean tour cost of this epoch, `None` when no ants ran.
    pub mean_cost: Option<f64>,

    /// Global best cost after this epoch (`+∞` until a tour exists).
    pub global_best_cost: f64,

    /// Whether this epoch replaced the global best.
    pub improved: bool,
}

/// Receives the colony at every epoch boundary.
///
/// The colony is fully consistent when observed: construction, evaporation
/// and reinforcement for the epoch have all finished. Returning
/// [`ControlFlow::Break`] stops the run after this epoch.
///
/// Any `FnMut(&Colony, &EpochStats) -> ControlFlow<()>` closure is an
/// observer.
pub trait EpochObserver {
    /// Called once after every epoch.
    fn on_epoch(&mut self, colony: &Colony, stats: &EpochStats) -> ControlFlow<()>;
}

impl<F> EpochObserver for F
where
    F: FnMut(&Colony, &EpochStats) -> ControlFlow<()>,
{
    fn on_epoch(&mut self, colony: &Colony, stats: &EpochStats) -> ControlFlow<()> {
        self(colony, stats)
    }
}
