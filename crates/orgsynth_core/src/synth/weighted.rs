//! Weighted random pick over `(candidate, weight)` pairs.
//!
//! # Invariants
//! - Non-positive and non-finite weights make a candidate ineligible.
//! - Returns `None` instead of panicking when nothing is eligible.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Picks one candidate with probability proportional to its weight.
///
/// Returns `None` when `candidates` is empty or no weight is positive.
pub fn pick_weighted<'a, T, R>(rng: &mut R, candidates: &'a [(T, f64)]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let weights = candidates.iter().map(|(_, weight)| eligible_weight(*weight));
    let index = WeightedIndex::new(weights).ok()?;
    candidates.get(index.sample(rng)).map(|(candidate, _)| candidate)
}

fn eligible_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
