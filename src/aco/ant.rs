//! Single-ant tour construction.

use super::distance::DistanceMatrix;
use super::pheromone::PheromoneMatrix;
use super::sampling::{edge_weight, sample_index};
use super::types::Tour;
use rand::Rng;

/// One agent building a tour by a biased random walk.
///
/// The ant only reads the distance and pheromone matrices. Its candidate
/// pool and weight buffer are reused between [`construct`](Self::construct)
/// calls, so a single `Ant` can build many tours without reallocating.
#[derive(Debug)]
pub struct Ant<'a> {
    distances: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
    unvisited: Vec<usize>,
    weights: Vec<f64>,
}

impl<'a> Ant<'a> {
    /// Creates an ant over the given matrices.
    ///
    /// # Panics
    /// Panics if the two matrices have different sizes.
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromone: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        assert_eq!(
            distances.len(),
            pheromone.len(),
            "distance and pheromone matrices must have the same size"
        );
        let n = distances.len();
        Self {
            distances,
            pheromone,
            alpha,
            beta,
            unvisited: Vec::with_capacity(n),
            weights: Vec::with_capacity(n),
        }
    }

    /// Builds one complete tour.
    ///
    /// Starts at a uniformly random node. From the current node `c`, every
    /// unvisited node `j` is weighted by
    /// [`edge_weight`]`(D[c][j], F[c][j], alpha, beta)` and the next node is
    /// drawn proportionally to those weights.
    pub fn construct<R: Rng>(&mut self, rng: &mut R) -> Tour {
        let n = self.distances.len();
        let mut path = Vec::with_capacity(n);
        if n == 0 {
            return Tour::from_path(path, self.distances);
        }

        self.unvisited.clear();
        self.unvisited.extend(0..n);

        let start = self.unvisited.swap_remove(rng.random_range(0..n));
        path.push(start);
        let mut current = start;

        while !self.unvisited.is_empty() {
            let dist_row = self.distances.row(current);
            let fero_row = self.pheromone.row(current);

            self.weights.clear();
            self.weights.extend(
                self.unvisited
                    .iter()
                    .map(|&j| edge_weight(dist_row[j], fero_row[j], self.alpha, self.beta)),
            );

            let Some(k) = sample_index(&self.weights, rng) else {
                break;
            };
            current = self.unvisited.swap_remove(k);
            path.push(current);
        }

        Tour::from_path(path, self.distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aco::points::{Bounds, Point, PointSet};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_permutation(path: &[usize], n: usize) -> bool {
        let mut seen = vec![false; n];
        for &v in path {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        path.len() == n
    }

    #[test]
    fn test_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let pts = PointSet::random(30, &Bounds::default(), &mut rng).unwrap();
        let d = DistanceMatrix::from_points(&pts);
        let f = PheromoneMatrix::zeros(30);
        let mut ant = Ant::new(&d, &f, 1.5, 2.5);

        for _ in 0..20 {
            let tour = ant.construct(&mut rng);
            assert!(is_permutation(tour.path(), 30), "bad tour {:?}", tour.path());
            assert!((tour.cost() - d.tour_cost(tour.path())).abs() < 1e-9);
        }
    }

    #[test]
    fn test_two_points_there_and_back() {
        let pts = PointSet::new(vec![Point::new(-3.0, 0.0), Point::new(3.0, 0.0)]).unwrap();
        let d = DistanceMatrix::from_points(&pts);
        let f = PheromoneMatrix::zeros(2);
        let mut ant = Ant::new(&d, &f, 1.5, 2.5);

        for seed in 0..50 {
            let tour = ant.construct(&mut StdRng::seed_from_u64(seed));
            assert!((tour.cost() - 2.0 * d.get(0, 1)).abs() < 1e-12);
            assert!((tour.cost() - 12.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_does_not_touch_pheromone() {
        let mut rng = StdRng::seed_from_u64(3);
        let pts = PointSet::random(8, &Bounds::default(), &mut rng).unwrap();
        let d = DistanceMatrix::from_points(&pts);
        let mut f = PheromoneMatrix::zeros(8);
        f.deposit(&[0, 1, 2, 3, 4, 5, 6, 7], 10.0, 1.0);
        let snapshot = f.clone();

        let mut ant = Ant::new(&d, &f, 1.0, 1.0);
        ant.construct(&mut rng);
        assert_eq!(f, snapshot);
    }

    #[test]
    fn test_strong_trail_is_followed() {
        // A heavy trail along 0-1-2-3-4 should dominate the first step.
        let pts = PointSet::new((0..5).map(|i| Point::new(i as f64, (i * i) as f64)).collect())
            .unwrap();
        let d = DistanceMatrix::from_points(&pts);
        let mut f = PheromoneMatrix::zeros(5);
        f.deposit(&[0, 1, 2, 3, 4], 1e-3, 1.0);

        let mut ant = Ant::new(&d, &f, 1.0, 2.0);
        let mut rng = StdRng::seed_from_u64(9);
        let mut follows = 0;
        for _ in 0..200 {
            let tour = ant.construct(&mut rng);
            if tour.path()[0].abs_diff(tour.path()[1]) == 1 {
                follows += 1;
            }
        }
        assert!(follows >= 195, "trail followed only {follows}/200 times");
    }

    #[test]
    fn test_coincident_points_well_defined() {
        let pts = PointSet::new(vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(4.0, 5.0),
        ])
        .unwrap();
        let d = DistanceMatrix::from_points(&pts);
        let f = PheromoneMatrix::zeros(3);
        let mut ant = Ant::new(&d, &f, 1.5, 2.5);
        let tour = ant.construct(&mut StdRng::seed_from_u64(1));
        assert!(is_permutation(tour.path(), 3));
        assert!((tour.cost() - 10.0).abs() < 1e-9);
    }
}
