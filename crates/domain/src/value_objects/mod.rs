//! Value objects: dice, attribute scores, and the randomness port they roll against.

mod attributes;
mod dice;
pub mod random;

pub use attributes::Attributes;
pub use dice::{DiceFormula, DiceRollResult};
pub use random::RandomSource;

#[cfg(test)]
pub use random::MockRandomSource;
