//! Pheromone trail matrix.
//!
//! The colony's shared memory. Owned and mutated only by
//! [`Colony`](super::Colony); ants receive a shared reference.

/// Largest amount a single tour may add to one edge.
///
/// Reached only by degenerate tours whose cost is zero or vanishingly small.
pub const MAX_DEPOSIT: f64 = 1e12;

/// Mutable N×N symmetric matrix of non-negative trail values.
///
/// Starts at all zeros. Diagonal entries are never written.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// All-zero matrix for `n` nodes.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the matrix has no nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Trail on edge `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "node index out of range");
        self.data[i * self.n + j]
    }

    /// Row `i`: trail from node `i` to every node.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Raw row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Multiplies every entry by `rate`.
    ///
    /// `rate` is the retained fraction: 1.0 leaves the matrix unchanged and
    /// 0.0 clears it.
    pub fn evaporate(&mut self, rate: f64) {
        for v in &mut self.data {
            *v *= rate;
        }
    }

    /// Reinforces the open path: every consecutive pair `(path[i-1], path[i])`
    /// gains `scale / cost` in both directions.
    ///
    /// The edge from the last node back to the first is left alone.
    pub fn deposit(&mut self, path: &[usize], cost: f64, scale: f64) {
        let amount = deposit_amount(cost, scale);
        for w in path.windows(2) {
            self.add_symmetric(w[0], w[1], amount);
        }
    }

    /// Like [`deposit`](Self::deposit), but also reinforces the closing edge.
    pub fn deposit_cycle(&mut self, path: &[usize], cost: f64, scale: f64) {
        self.deposit(path, cost, scale);
        if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
            if path.len() > 1 {
                self.add_symmetric(last, first, deposit_amount(cost, scale));
            }
        }
    }

    fn add_symmetric(&mut self, a: usize, b: usize, amount: f64) {
        debug_assert_ne!(a, b, "self-loops are never reinforced");
        self.data[a * self.n + b] += amount;
        self.data[b * self.n + a] += amount;
    }

    /// Smallest and largest entry currently in the matrix.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Maps the trail on `(i, j)` linearly from the matrix's current
    /// `[min, max]` onto `[lo, hi]`, e.g. a color channel.
    ///
    /// When every entry is equal the midpoint of `[lo, hi]` is returned.
    pub fn intensity(&self, i: usize, j: usize, lo: f64, hi: f64) -> f64 {
        let (min, max) = self.min_max();
        lerp(self.get(i, j), min, max, lo, hi)
    }
}

/// Per-edge deposit for a tour, saturating for non-positive cost.
fn deposit_amount(cost: f64, scale: f64) -> f64 {
    if cost > 0.0 {
        (scale / cost).min(MAX_DEPOSIT)
    } else {
        MAX_DEPOSIT
    }
}

/// Linear interpolation of `x` from `[a, b]` onto `[c, d]`.
///
/// Returns the midpoint of `[c, d]` when `a == b`.
pub fn lerp(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if b == a {
        (c + d) / 2.0
    } else {
        c + (x - a) * (d - c) / (b - a)
    }
}
