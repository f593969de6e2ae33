//! ACO epoch loop execution.
//!
//! [`AcoRunner`] drives a [`Colony`] epoch after epoch until the epoch
//! budget, the time limit, a cancellation flag, or an observer stops it.

use super::colony::Colony;
use super::config::AcoConfig;
use super::error::AcoError;
use super::points::PointSet;
use super::types::{EpochObserver, EpochStats, Tour};
use log::info;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The best tour found, `None` if no ant ever ran.
    pub best: Option<Tour>,

    /// Cost of the best tour (`+∞` when `best` is `None`).
    pub best_cost: f64,

    /// Number of completed epochs.
    pub epochs: usize,

    /// Whether the run was stopped by the cancellation flag or an observer.
    pub cancelled: bool,

    /// Whether the run hit `time_limit_ms`.
    pub timed_out: bool,

    /// `(epoch, cost)` each time the global best improved.
    ///
    /// Grows only on improvement, so open-ended runs stay bounded in
    /// practice.
    pub cost_history: Vec<(usize, f64)>,
}

/// Executes the ACO epoch loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner, Point, PointSet};
///
/// let points = PointSet::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ])
/// .unwrap();
/// let config = AcoConfig::default()
///     .with_population_size(20)
///     .with_max_epochs(20)
///     .with_seed(42);
///
/// let result = AcoRunner::run(points, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-9);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO over `points` for `config.max_epochs` epochs.
    ///
    /// With `max_epochs == 0` and no time limit this never returns; use
    /// [`run_with_cancel`](Self::run_with_cancel) for open-ended runs.
    pub fn run(points: PointSet, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_cancel(points, config, None)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// The flag is checked at every epoch boundary; an epoch in progress
    /// always completes.
    pub fn run_with_cancel(
        points: PointSet,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(points, config, cancel, &mut no_observer)
    }

    /// Runs ACO, calling `observer` after every epoch.
    ///
    /// The observer sees the colony at a consistent epoch boundary and can
    /// stop the run by returning [`ControlFlow::Break`].
    pub fn run_with_observer<O: EpochObserver + ?Sized>(
        points: PointSet,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> Result<AcoResult, AcoError> {
        let mut colony = Colony::new(points, config.clone())?;
        Ok(Self::run_colony(&mut colony, cancel, observer))
    }

    /// Drives an existing colony, calling `observer` after every epoch.
    ///
    /// Epoch limits count from the colony's current epoch, so a colony can
    /// be resumed by calling this again.
    pub fn run_colony<O: EpochObserver + ?Sized>(
        colony: &mut Colony,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> AcoResult {
        let max_epochs = colony.config().max_epochs;
        let time_limit_ms = colony.config().time_limit_ms;
        let start = Instant::now();

        let mut cost_history = Vec::new();
        let mut epochs = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        while max_epochs == 0 || epochs < max_epochs {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            if let Some(limit) = time_limit_ms {
                if start.elapsed().as_millis() >= u128::from(limit) {
                    timed_out = true;
                    break;
                }
            }

            let stats = colony.run_epoch();
            epochs += 1;
            if stats.improved {
                cost_history.push((stats.epoch, stats.global_best_cost));
            }

            if observer.on_epoch(colony, &stats).is_break() {
                cancelled = true;
                break;
            }
        }

        info!(
            "ACO finished after {} epochs: best cost {:.6}{}{}",
            epochs,
            colony.best_cost(),
            if cancelled { " (cancelled)" } else { "" },
            if timed_out { " (time limit)" } else { "" }
        );

        AcoResult {
            best: colony.best().cloned(),
            best_cost: colony.best_cost(),
            epochs,
            cancelled,
            timed_out,
            cost_history,
        }
    }
}

fn no_observer(_: &Colony, _: &EpochStats) -> ControlFlow<()> {
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::points::Point;

    fn unit_square() -> PointSet {
        PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    fn ring(n: usize) -> PointSet {
        let points = (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                Point::new(100.0 * theta.cos(), 100.0 * theta.sin())
            })
            .collect();
        PointSet::new(points).unwrap()
    }

    #[test]
    fn test_run_unit_square() {
        let config = AcoConfig::default()
            .with_alpha(1.0)
            .with_beta(1.0)
            .with_evaporation_rate(0.5)
            .with_population_size(20)
            .with_max_epochs(30)
            .with_seed(42);

        let result = AcoRunner::run(unit_square(), &config).unwrap();

        assert_eq!(result.epochs, 30);
        assert!(!result.cancelled);
        assert!((result.best_cost - 4.0).abs() < 1e-9);
        assert_eq!(result.best.unwrap().len(), 4);
        let &(_, last) = result.cost_history.last().unwrap();
        assert_eq!(last, result.best_cost);
        assert_eq!(result.cost_history[0].0, 1);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let config = AcoConfig::default().with_alpha(f64::NAN).with_max_epochs(1);
        assert!(AcoRunner::run(unit_square(), &config).is_err());
    }

    #[test]
    fn test_ring_finds_good_tour() {
        // The optimal tour walks the polygon. Each out-of-order pair of
        // neighbours costs roughly 15% extra, so this allows two defects.
        let n = 12;
        let points = ring(n);
        let optimum = n as f64 * 2.0 * 100.0 * (std::f64::consts::PI / n as f64).sin();
        let config = AcoConfig::default()
            .with_population_size(100)
            .with_max_epochs(50)
            .with_parallel(false)
            .with_seed(42);

        let result = AcoRunner::run(points, &config).unwrap();

        assert!(
            result.best_cost < optimum * 1.35,
            "expected near {optimum}, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_cost_history_non_increasing() {
        let config = AcoConfig::default()
            .with_population_size(30)
            .with_max_epochs(40)
            .with_parallel(false)
            .with_seed(42);

        let result = AcoRunner::run(ring(10), &config).unwrap();

        assert!(!result.cost_history.is_empty());
        for window in result.cost_history.windows(2) {
            assert!(window[1].0 > window[0].0, "epochs must be increasing");
            assert!(
                window[1].1 < window[0].1,
                "each entry should be a strict improvement: {} >= {}",
                window[1].1,
                window[0].1
            );
        }
    }

    #[test]
    fn test_cancellation() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_seed(42);

        // Set cancel flag before running so the unbounded loop stops at once.
        let cancel = Arc::new(AtomicBool::new(true));

        let result = AcoRunner::run_with_cancel(ring(6), &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.epochs, 0);
        assert!(result.best.is_none());
        assert_eq!(result.best_cost, f64::INFINITY);
    }

    #[test]
    fn test_cancellation_from_another_thread() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_parallel(false)
            .with_seed(42);

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result = AcoRunner::run_with_cancel(ring(8), &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert!(result.epochs > 0 || result.best.is_none());
    }

    #[test]
    fn test_time_limit() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_time_limit_ms(20)
            .with_parallel(false)
            .with_seed(42);

        let result = AcoRunner::run(ring(8), &config).unwrap();
        assert!(result.timed_out);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_observer_sees_each_epoch_and_can_stop() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_parallel(false)
            .with_seed(42);
        let mut colony = Colony::new(ring(6), config).unwrap();

        let mut seen = Vec::new();
        let mut observer = |c: &Colony, stats: &EpochStats| {
            assert_eq!(c.epoch(), stats.epoch);
            assert_eq!(c.best_cost(), stats.global_best_cost);
            seen.push(stats.epoch);
            if stats.epoch == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };

        let result = AcoRunner::run_colony(&mut colony, None, &mut observer);

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert!(result.cancelled);
        assert_eq!(result.epochs, 5);
    }

    #[test]
    fn test_resume_colony() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_max_epochs(3)
            .with_parallel(false)
            .with_seed(42);
        let mut colony = Colony::new(ring(6), config).unwrap();

        AcoRunner::run_colony(&mut colony, None, &mut no_observer);
        let result = AcoRunner::run_colony(&mut colony, None, &mut no_observer);

        assert_eq!(result.epochs, 3);
        assert_eq!(colony.epoch(), 6);
    }

    #[test]
    fn test_run_with_observer_stops_on_break() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_parallel(false)
            .with_seed(42);

        let mut epochs_seen = 0;
        let mut observer = |c: &Colony, stats: &EpochStats| {
            epochs_seen += 1;
            assert_eq!(c.epoch(), stats.epoch);
            if stats.epoch == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };

        let result = AcoRunner::run_with_observer(ring(6), &config, None, &mut observer).unwrap();

        assert_eq!(epochs_seen, 4);
        assert_eq!(result.epochs, 4);
        assert!(result.cancelled);
        assert!(result.best.is_some());
    }

    #[test]
    fn test_run_with_observer_rejects_invalid_config() {
        let config = AcoConfig::default().with_evaporation_rate(2.0);
        let result = AcoRunner::run_with_observer(unit_square(), &config, None, &mut no_observer);
        assert!(matches!(result, Err(AcoError::InvalidEvaporationRate(_))));
    }

    #[test]
    fn test_cost_history_bounded_by_improvements() {
        let config = AcoConfig::default()
            .with_population_size(10)
            .with_max_epochs(200)
            .with_parallel(false)
            .with_seed(7);

        let result = AcoRunner::run(unit_square(), &config).unwrap();

        assert_eq!(result.epochs, 200);
        // a 4-node instance has only two distinct tour lengths
        assert!(result.cost_history.len() <= 2, "{:?}", result.cost_history);
    }
}
