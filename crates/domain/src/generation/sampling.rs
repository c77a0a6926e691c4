//! Sampling helpers built on [`RandomSource`].

use crate::value_objects::RandomSource;

/// Weighted draw: pick `w` uniformly in `[0, total)`, walk the cumulative
/// weights, and return the first option whose cumulative weight is `>= w`.
///
/// Zero-weight options are never returned unless every weight is zero, in
/// which case the first option wins. `None` only for an empty slice.
pub fn weighted_draw<T: Copy>(rng: &dyn RandomSource, options: &[(T, u32)]) -> Option<T> {
    let total: u32 = options.iter().map(|(_, weight)| weight).sum();
    if total == 0 {
        return options.first().map(|(option, _)| *option);
    }

    let target = rng.next_unit() * f64::from(total);
    let mut cumulative = 0.0;
    for (option, weight) in options {
        cumulative += f64::from(*weight);
        if *weight > 0 && target <= cumulative {
            return Some(*option);
        }
    }
    options
        .iter()
        .rev()
        .find(|(_, weight)| *weight > 0)
        .map(|(option, _)| *option)
}

/// Uniform draw of one element. `None` for an empty pool.
pub fn choose<T: Clone>(rng: &dyn RandomSource, pool: &[T]) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.index(pool.len())).cloned()
}

/// A fairly shuffled copy of `items`.
pub fn shuffled<T: Clone>(rng: &dyn RandomSource, items: &[T]) -> Vec<T> {
    rng.permutation(items.len())
        .into_iter()
        .filter_map(|i| items.get(i).cloned())
        .collect()
}

/// Draw `count` distinct positions without replacement (shuffle, then take a prefix).
pub fn draw_n<T: Clone>(rng: &dyn RandomSource, items: &[T], count: usize) -> Vec<T> {
    let mut drawn = shuffled(rng, items);
    drawn.truncate(count);
    drawn
}
