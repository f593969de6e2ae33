//! Ant Colony Optimization engine for shortest closed tours.
//!
//! Given N points in the plane, a colony of simulated ants repeatedly
//! builds candidate tours by weighted random walks, reinforces the edges of
//! cheap tours with pheromone, and lets pheromone evaporate so the colony
//! converges on short tours while still exploring.
//!
//! - **[`aco`]**: distance and pheromone matrices, single-ant tour
//!   construction, and the epoch loop with global-best tracking.
//!
//! # Architecture
//!
//! The crate has no rendering or event-loop code. Front ends read the
//! point set, pheromone matrix and best tour through [`aco::Colony`] at
//! each epoch boundary and stop the run through a cancellation flag or an
//! [`aco::EpochObserver`].
//!
//! ```
//! use std::ops::ControlFlow;
//! use u_antcolony::aco::{AcoConfig, AcoRunner, Colony, EpochStats};
//!
//! let config = AcoConfig::default()
//!     .with_num_points(8)
//!     .with_population_size(50)
//!     .with_max_epochs(10)
//!     .with_seed(1);
//! let mut colony = Colony::random(config).unwrap();
//! let mut improvements = 0;
//! let mut observer = |_: &Colony, stats: &EpochStats| {
//!     if stats.improved {
//!         improvements += 1;
//!     }
//!     ControlFlow::Continue(())
//! };
//! let result = AcoRunner::run_colony(&mut colony, None, &mut observer);
//! assert_eq!(result.epochs, 10);
//! assert!(result.best.is_some());
//! assert!(improvements >= 1);
//! ```

pub mod aco;
