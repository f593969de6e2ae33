//! Colony state and the per-epoch update cycle.

use super::ant::Ant;
use super::config::AcoConfig;
use super::distance::DistanceMatrix;
use super::error::AcoError;
use super::pheromone::PheromoneMatrix;
use super::points::PointSet;
use super::types::{EpochStats, Tour};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owner of all run state: points, distances, pheromone and global best.
///
/// The pheromone matrix is only mutated by [`run_epoch`](Self::run_epoch),
/// after every ant of the epoch has finished reading it. Between calls the
/// colony is consistent and can be inspected freely.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, Colony};
///
/// let config = AcoConfig::default()
///     .with_num_points(10)
///     .with_population_size(50)
///     .with_seed(42);
/// let mut colony = Colony::random(config).unwrap();
/// for _ in 0..5 {
///     colony.run_epoch();
/// }
/// assert_eq!(colony.epoch(), 5);
/// assert!(colony.best().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Colony {
    config: AcoConfig,
    points: PointSet,
    distances: DistanceMatrix,
    pheromone: PheromoneMatrix,
    best: Option<Tour>,
    epoch: usize,
    rng: StdRng,
}

impl Colony {
    /// Creates a colony over a caller-supplied point set.
    ///
    /// The configuration is validated here; nothing runs until
    /// [`run_epoch`](Self::run_epoch).
    pub fn new(points: PointSet, config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let rng = seeded_rng(config.seed);
        Ok(Self::with_rng(points, config, rng))
    }

    /// Creates a colony over `config.num_points` points sampled uniformly
    /// inside `config.area`.
    ///
    /// With a seed, the same configuration yields the same points and the
    /// same run.
    pub fn random(config: AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let points = PointSet::random(config.num_points, &config.area, &mut rng)?;
        Ok(Self::with_rng(points, config, rng))
    }

    /// Builds the colony from an already validated configuration.
    /// `PointSet` guarantees at least two points.
    fn with_rng(points: PointSet, config: AcoConfig, rng: StdRng) -> Self {
        let distances = DistanceMatrix::from_points(&points);
        let pheromone = PheromoneMatrix::zeros(points.len());

        info!(
            "colony created: {} points, {} ants/epoch, rate={}, alpha={}, beta={}",
            points.len(),
            config.population_size,
            config.evaporation_rate,
            config.alpha,
            config.beta
        );

        Self {
            config,
            points,
            distances,
            pheromone,
            best: None,
            epoch: 0,
            rng,
        }
    }

    /// The configuration this colony runs with.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// The point set.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The live pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Best tour found so far, if any epoch has produced one.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Cost of the best tour so far, `+∞` before the first tour.
    pub fn best_cost(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, Tour::cost)
    }

    /// Number of completed epochs.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Builds one tour per ant against the current pheromone matrix.
    ///
    /// Does not touch pheromone or the global best. Every ant gets its own
    /// RNG seeded from the colony's, so the result is the same whether the
    /// tours are built sequentially or in parallel.
    pub fn construct_tours(&mut self) -> Vec<Tour> {
        let seeds: Vec<u64> = (0..self.config.population_size)
            .map(|_| self.rng.random())
            .collect();
        build_tours(
            &self.distances,
            &self.pheromone,
            self.config.alpha,
            self.config.beta,
            &seeds,
            self.config.parallel,
        )
    }

    /// Runs one full epoch.
    ///
    /// 1. every ant builds a tour against the same pheromone snapshot;
    /// 2. the global best is replaced if some tour is strictly cheaper;
    /// 3. the pheromone matrix evaporates;
    /// 4. every tour of the epoch deposits `scale / cost` on its edges.
    pub fn run_epoch(&mut self) -> EpochStats {
        let tours = self.construct_tours();
        self.epoch += 1;

        let improved = self.update_best(&tours);

        self.pheromone.evaporate(self.config.evaporation_rate);
        let scale = self.config.deposit_scale;
        for tour in &tours {
            if self.config.reinforce_closing_edge {
                self.pheromone.deposit_cycle(tour.path(), tour.cost(), scale);
            } else {
                self.pheromone.deposit(tour.path(), tour.cost(), scale);
            }
        }

        let epoch_best_cost = tours.iter().map(Tour::cost).min_by(f64::total_cmp);
        let mean_cost = if tours.is_empty() {
            None
        } else {
            Some(tours.iter().map(Tour::cost).sum::<f64>() / tours.len() as f64)
        };

        let stats = EpochStats {
            epoch: self.epoch,
            ants: tours.len(),
            epoch_best_cost,
            mean_cost,
            global_best_cost: self.best_cost(),
            improved,
        };
        trace!("epoch {}: {:?}", self.epoch, stats);
        stats
    }

    /// Replaces the global best with the cheapest tour if it is strictly
    /// better. The first of several equally cheap tours wins.
    fn update_best(&mut self, tours: &[Tour]) -> bool {
        let mut candidate: Option<&Tour> = None;
        for tour in tours {
            if candidate.is_none_or(|c| tour.cost() < c.cost()) {
                candidate = Some(tour);
            }
        }

        match candidate {
            Some(tour) if tour.cost() < self.best_cost() => {
                debug!(
                    "epoch {}: new best {:.6} (was {:.6})",
                    self.epoch,
                    tour.cost(),
                    self.best_cost()
                );
                self.best = Some(tour.clone());
                true
            }
            _ => false,
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}

fn build_sequential(
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
    seeds: &[u64],
) -> Vec<Tour> {
    let mut ant = Ant::new(distances, pheromone, alpha, beta);
    seeds
        .iter()
        .map(|&seed| ant.construct(&mut StdRng::seed_from_u64(seed)))
        .collect()
}

#[cfg(feature = "parallel")]
fn build_tours(
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
    seeds: &[u64],
    parallel: bool,
) -> Vec<Tour> {
    if !parallel {
        return build_sequential(distances, pheromone, alpha, beta, seeds);
    }
    seeds
        .par_iter()
        .map_init(
            || Ant::new(distances, pheromone, alpha, beta),
            |ant, &seed| ant.construct(&mut StdRng::seed_from_u64(seed)),
        )
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_tours(
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
    seeds: &[u64],
    _parallel: bool,
) -> Vec<Tour> {
    build_sequential(distances, pheromone, alpha, beta, seeds)
}
