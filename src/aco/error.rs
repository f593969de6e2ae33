//! Errors raised while setting up a colony.

use thiserror::Error;

/// Configuration or input rejected before any epoch runs.
///
/// Numeric edge cases that can arise during a run (coincident points,
/// zero-cost tours) are saturated internally and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The point set has fewer than two points.
    #[error("at least 2 points are required, got {0}")]
    TooFewPoints(usize),

    /// The evaporation retention rate is outside `(0, 1]`.
    #[error("evaporation rate must be in (0, 1], got {0}")]
    InvalidEvaporationRate(f64),

    /// ALPHA or BETA is negative or not finite.
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidExponent {
        /// Which exponent was rejected (`"alpha"` or `"beta"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The pheromone deposit scale is not a positive finite number.
    #[error("deposit scale must be finite and positive, got {0}")]
    InvalidDepositScale(f64),

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinitePoint {
        /// Node ID of the point.
        index: usize,
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },

    /// The sampling area for random points is empty or not finite.
    #[error("invalid sampling area: {0}")]
    InvalidBounds(String),
}
