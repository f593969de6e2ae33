//! Ant Colony Optimization (ACO) for closed tours over planar points.
//!
//! A population of ants builds tours by biased random walks. Each step is
//! drawn with probability proportional to
//! `(1 / distance)^alpha + pheromone^beta`. After every epoch the trail
//! evaporates and every tour deposits `scale / cost` on the edges of its
//! open path, so short tours reinforce the edges they share.
//!
//! # Key Types
//!
//! - [`PointSet`]: the node coordinates
//! - [`DistanceMatrix`] / [`PheromoneMatrix`]: the static and evolving
//!   per-edge state
//! - [`Ant`]: builds one [`Tour`] against a frozen pheromone snapshot
//! - [`Colony`]: owns all run state and runs one epoch at a time
//! - [`AcoRunner`]: drives a colony until a limit, a cancellation flag, or
//!   an [`EpochObserver`] stops it
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod colony;
mod config;
mod distance;
mod error;
mod pheromone;
mod points;
mod runner;
mod sampling;
mod types;

pub use ant::Ant;
pub use colony::Colony;
pub use config::AcoConfig;
pub use distance::DistanceMatrix;
pub use error::AcoError;
pub use pheromone::{lerp, PheromoneMatrix, MAX_DEPOSIT};
pub use points::{Bounds, Point, PointSet};
pub use runner::{AcoResult, AcoRunner};
pub use sampling::{edge_weight, sample_index, MAX_WEIGHT};
pub use types::{EpochObserver, EpochStats, Tour};
