//! ACO configuration.
//!
//! [`AcoConfig`] holds the colony parameters and the run-control limits.

use super::error::AcoError;
use super::points::Bounds;

/// Configuration for the Ant Colony Optimization engine.
///
/// # Defaults
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_points, 20);
/// assert_eq!(config.population_size, 1000);
/// assert!((config.evaporation_rate - 0.1).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_antcolony::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_population_size(200)
///     .with_alpha(1.0)
///     .with_beta(1.0)
///     .with_evaporation_rate(0.5)
///     .with_max_epochs(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of points sampled by [`Colony::random`](super::Colony::random).
    ///
    /// Ignored when the caller supplies its own point set.
    pub num_points: usize,

    /// Sampling area for random point sets.
    pub area: Bounds,

    /// Number of ants spawned per epoch.
    ///
    /// Zero is allowed: the epoch then only evaporates.
    pub population_size: usize,

    /// Fraction of pheromone retained by each evaporation, in `(0, 1]`.
    ///
    /// 0.1 keeps 10% of the trail and loses 90% every epoch.
    pub evaporation_rate: f64,

    /// Numerator of the per-edge deposit `scale / cost`.
    pub deposit_scale: f64,

    /// Exponent on inverse distance in the selection weight.
    pub alpha: f64,

    /// Exponent on pheromone in the selection weight.
    pub beta: f64,

    /// Also reinforce the edge closing the cycle (last node back to first).
    ///
    /// Off by default: the closing edge counts toward tour cost and still
    /// evaporates, but receives no deposit.
    pub reinforce_closing_edge: bool,

    /// Number of epochs to run. 0 = run until cancelled.
    pub max_epochs: usize,

    /// Optional wall-clock limit in milliseconds, checked between epochs.
    pub time_limit_ms: Option<u64>,

    /// Whether to build the epoch's tours in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_points: 20,
            area: Bounds::default(),
            population_size: 1000,
            evaporation_rate: 0.1,
            deposit_scale: 1.0,
            alpha: 1.5,
            beta: 2.5,
            reinforce_closing_edge: false,
            max_epochs: 0,
            time_limit_ms: None,
            parallel: true,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of randomly sampled points.
    pub fn with_num_points(mut self, n: usize) -> Self {
        self.num_points = n;
        self
    }

    /// Sets the sampling area for random points.
    pub fn with_area(mut self, area: Bounds) -> Self {
        self.area = area;
        self
    }

    /// Sets the number of ants per epoch.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the evaporation retention rate.
    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    /// Sets the deposit scale.
    pub fn with_deposit_scale(mut self, scale: f64) -> Self {
        self.deposit_scale = scale;
        self
    }

    /// Sets the distance exponent ALPHA.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the pheromone exponent BETA.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Enables or disables reinforcement of the closing edge.
    pub fn with_reinforce_closing_edge(mut self, enabled: bool) -> Self {
        self.reinforce_closing_edge = enabled;
        self
    }

    /// Sets the number of epochs (0 to run until cancelled).
    pub fn with_max_epochs(mut self, n: usize) -> Self {
        self.max_epochs = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel tour construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the colony parameters.
    ///
    /// `num_points` and `area` are checked when a random point set is
    /// sampled, since they are unused for caller-supplied points.
    pub fn validate(&self) -> Result<(), AcoError> {
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate <= 1.0) {
            return Err(AcoError::InvalidEvaporationRate(self.evaporation_rate));
        }
        if !(self.deposit_scale.is_finite() && self.deposit_scale > 0.0) {
            return Err(AcoError::InvalidDepositScale(self.deposit_scale));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(AcoError::InvalidExponent { name, value });
            }
        }
        Ok(())
    }
}
