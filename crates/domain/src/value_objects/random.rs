//! Randomness port.
//!
//! The generation pipeline never reaches for a global RNG. Every draw goes
//! through a `RandomSource` handed in by the caller, so a run can be replayed
//! from a seed or scripted outright in tests.

/// Source of uniform randomness.
///
/// Implementors only need the two primitive draws; fair permutation and fair
/// index selection are derived from `gen_range` unless overridden.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Uniform real in `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// Uniform integer in the closed range `[low, high]`.
    fn gen_range(&self, low: i32, high: i32) -> i32;

    /// Fair permutation of `0..len` (Fisher-Yates).
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = self.gen_range(0, i as i32).clamp(0, i as i32) as usize;
            order.swap(i, j);
        }
        order
    }

    /// Fair index into a collection of `len` elements. Returns 0 for `len <= 1`.
    fn index(&self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let high = len as i32 - 1;
        self.gen_range(0, high).clamp(0, high) as usize
    }
}
