//! Edge weights and roulette-wheel sampling for the ant transition rule.

use rand::Rng;

/// Upper bound on either term of an edge weight.
///
/// Keeps weights finite when two distinct nodes coincide (`1 / 0`) or a
/// trail grows large enough for `powf` to overflow.
pub const MAX_WEIGHT: f64 = 1e12;

/// Selection weight for moving along an edge.
///
/// `w = (1 / distance)^alpha + pheromone^beta`. The two influences are
/// added, not multiplied, so an edge with no trail is still attractive by
/// distance alone. Each term saturates at [`MAX_WEIGHT`].
#[inline]
pub fn edge_weight(distance: f64, pheromone: f64, alpha: f64, beta: f64) -> f64 {
    let visibility = if distance > 0.0 {
        (1.0 / distance).powf(alpha).min(MAX_WEIGHT)
    } else {
        MAX_WEIGHT
    };
    let trail = pheromone.powf(beta).min(MAX_WEIGHT);
    visibility + trail
}

/// Picks an index with probability proportional to `weights[i]`.
///
/// Falls back to a uniform pick when the total is zero or not finite.
/// Returns `None` only for an empty slice.
pub fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    let n = weights.len();
    match n {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }

    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Some(rng.random_range(0..n));
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }

    Some(n - 1) // floating-point fallback
}
