//! Attribute rolling and assignment.

use super::sampling::shuffled;
use crate::types::{Age, Attribute, Profession};
use crate::value_objects::{Attributes, DiceFormula, RandomSource};

pub const ATTRIBUTE_ROLLS: usize = 6;

/// Roll six 4d6-keep-3 scores, give the best to the key attribute, shuffle
/// the rest across the other five, then apply the age adjustments once.
pub fn generate_attributes(
    rng: &dyn RandomSource,
    profession: Profession,
    age: Age,
) -> Attributes {
    let formula = DiceFormula::attribute_roll();
    let rolls: Vec<i32> = (0..ATTRIBUTE_ROLLS)
        .map(|_| formula.roll_total(rng))
        .collect();
    assign_rolls(rng, &rolls, profession).with_age_modifiers(age)
}

/// Place already-rolled scores: the first maximum goes to the profession's
/// key attribute, the remainder are shuffled onto the other attributes in
/// canonical order. No age adjustment.
pub fn assign_rolls(rng: &dyn RandomSource, rolls: &[i32], profession: Profession) -> Attributes {
    let key = profession.key_attribute();
    let mut remaining = rolls.to_vec();

    let best = match remaining.iter().copied().max() {
        Some(best) => {
            if let Some(index) = remaining.iter().position(|roll| *roll == best) {
                remaining.remove(index);
            }
            best
        }
        None => 0,
    };

    let mut attributes = Attributes::default();
    attributes.set(key, best);
    let others = Attribute::all().iter().filter(|attribute| **attribute != key);
    for (attribute, score) in others.zip(shuffled(rng, &remaining)) {
        attributes.set(*attribute, score);
    }
    attributes
}
