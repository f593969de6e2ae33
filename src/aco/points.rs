//! Planar point sets.

use super::error::AcoError;
use rand::Rng;

/// A 2-D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean norm `x² + y²`.
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Dot product with another point.
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle used for random point sampling.
///
/// The default is a 500×500 canvas with a 50-unit margin on every side,
/// i.e. `[50, 450) × [50, 450)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Inclusive lower x.
    pub min_x: f64,
    /// Inclusive lower y.
    pub min_y: f64,
    /// Exclusive upper x.
    pub max_x: f64,
    /// Exclusive upper y.
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::canvas(500.0, 50.0)
    }
}

impl Bounds {
    /// Creates bounds from explicit corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Square canvas of side `size`, shrunk by `margin` on every side.
    pub fn canvas(size: f64, margin: f64) -> Self {
        Self::new(margin, margin, size - margin, size - margin)
    }

    fn validate(&self) -> Result<(), AcoError> {
        let coords = [self.min_x, self.min_y, self.max_x, self.max_y];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(AcoError::InvalidBounds(format!(
                "non-finite corner in {self:?}"
            )));
        }
        if self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(AcoError::InvalidBounds(format!("empty area {self:?}")));
        }
        Ok(())
    }
}

/// Immutable, ordered set of at least two points.
///
/// The index of a point is its node ID everywhere else in the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Wraps caller-supplied points.
    ///
    /// Fails with [`AcoError::TooFewPoints`] for fewer than two points and
    /// [`AcoError::NonFinitePoint`] for NaN or infinite coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self, AcoError> {
        if points.len() < 2 {
            return Err(AcoError::TooFewPoints(points.len()));
        }
        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(AcoError::NonFinitePoint {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { points })
    }

    /// Samples `n` points uniformly inside `bounds`.
    pub fn random<R: Rng>(n: usize, bounds: &Bounds, rng: &mut R) -> Result<Self, AcoError> {
        if n < 2 {
            return Err(AcoError::TooFewPoints(n));
        }
        bounds.validate()?;
        let points = (0..n)
            .map(|_| Point {
                x: rng.random_range(bounds.min_x..bounds.max_x),
                y: rng.random_range(bounds.min_y..bounds.max_y),
            })
            .collect();
        Ok(Self { points })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a point set holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in node-ID order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Point with the given node ID.
    pub fn get(&self, id: usize) -> Option<&Point> {
        self.points.get(id)
    }
}

impl std::ops::Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, id: usize) -> &Point {
        &self.points[id]
    }
}
