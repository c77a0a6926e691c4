//! Dice rolling value objects
//!
//! Covers single dice ("1d6") and roll-and-keep pools such as the attribute
//! roll "4d6k3" (roll four six-sided dice, keep the three highest).

use serde::{Deserialize, Serialize};

use super::RandomSource;

/// A dice pool like "4d6k3" or "1d8"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Number of highest dice that count toward the total (Z in XdYkZ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_highest: Option<u8>,
}

impl DiceFormula {
    /// A single die of the given size, e.g. `DiceFormula::die(6)` for 1d6.
    pub const fn die(die_size: u8) -> Self {
        Self {
            dice_count: 1,
            die_size,
            keep_highest: None,
        }
    }

    /// The attribute roll: four six-sided dice, best three summed.
    pub const fn attribute_roll() -> Self {
        Self {
            dice_count: 4,
            die_size: 6,
            keep_highest: Some(3),
        }
    }

    /// Roll the dice with the supplied randomness and return the result
    pub fn roll(&self, rng: &dyn RandomSource) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count)
            .map(|_| rng.gen_range(1, self.die_size as i32))
            .collect();

        let mut sorted = individual_rolls.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let kept = self.keep_highest.unwrap_or(self.dice_count) as usize;
        let total: i32 = sorted.iter().take(kept).sum();

        DiceRollResult {
            individual_rolls,
            total,
        }
    }

    /// Roll and return only the total
    pub fn roll_total(&self, rng: &dyn RandomSource) -> i32 {
        self.roll(rng).total
    }
}

/// Result of rolling dice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    /// Individual die results, in the order rolled
    pub individual_rolls: Vec<i32>,
    /// Sum of the kept dice
    pub total: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::random::testing::{ScriptedRandom, SeededTestRandom};

    #[test]
    fn test_keep_highest_drops_lowest_die() {
        let rng = ScriptedRandom::new().with_ints(&[2, 6, 1, 5]);
        let result = DiceFormula::attribute_roll().roll(&rng);
        assert_eq!(result.individual_rolls, vec![2, 6, 1, 5]);
        assert_eq!(result.total, 13);
    }

    #[test]
    fn test_single_die_uses_its_only_roll() {
        let rng = ScriptedRandom::new().with_ints(&[4]);
        assert_eq!(DiceFormula::die(6).roll_total(&rng), 4);
    }

    #[test]
    fn test_attribute_roll_range() {
        let rng = SeededTestRandom::new(42);
        let formula = DiceFormula::attribute_roll();
        for _ in 0..200 {
            let total = formula.roll_total(&rng);
            assert!((3..=18).contains(&total));
        }
    }

    #[test]
    fn test_die_roll_range() {
        let rng = SeededTestRandom::new(7);
        let formula = DiceFormula::die(8);
        for _ in 0..200 {
            let total = formula.roll_total(&rng);
            assert!((1..=8).contains(&total));
        }
    }
}
