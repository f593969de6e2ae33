//! Pairwise Euclidean distance matrix.

use super::points::PointSet;

/// Immutable N×N symmetric matrix of Euclidean distances.
///
/// Stored row-major in a single buffer. `get(i, i)` is exactly 0 and
/// `get(i, j) == get(j, i)` bit for bit.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds the matrix for a point set.
    ///
    /// Uses the expanded form `‖a‖² + ‖b‖² − 2a·b`. Cancellation can push
    /// the squared distance slightly below zero, so it is clamped to 0
    /// before the square root.
    pub fn from_points(points: &PointSet) -> Self {
        let pts = points.as_slice();
        let n = pts.len();
        let sq: Vec<f64> = pts.iter().map(|p| p.norm_squared()).collect();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d2 = sq[i] + sq[j] - 2.0 * pts[i].dot(&pts[j]);
                let d = d2.max(0.0).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { n, data }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between nodes `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "node index out of range");
        self.data[i * self.n + j]
    }

    /// Row `i` of the matrix: distances from node `i` to every node.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Length of the closed cycle through `path`, including the edge from
    /// the last node back to the first.
    pub fn tour_cost(&self, path: &[usize]) -> f64 {
        if path.len() < 2 {
            return 0.0;
        }
        let open: f64 = path.windows(2).map(|w| self.get(w[0], w[1])).sum();
        open + self.get(path[path.len() - 1], path[0])
    }
}
