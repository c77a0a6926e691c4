//! Kin, profession, age and placeholder-name selection.

use super::sampling::{choose, weighted_draw};
use crate::types::{Age, Kin, KinCategory, Profession};
use crate::value_objects::{DiceFormula, RandomSource};

/// Relative weights within the common tier.
const COMMON_KIN_WEIGHTS: &[(Kin, u32)] = &[
    (Kin::Human, 4),
    (Kin::Halfling, 3),
    (Kin::Dwarf, 2),
    (Kin::Elf, 1),
    (Kin::Mallard, 1),
    (Kin::Wolfkin, 1),
];

/// Draws below this value pick a common kin.
const COMMON_KIN_CUTOFF: f64 = 0.97;
/// Draws in `[COMMON_KIN_CUTOFF, NIGHTKIN_CUTOFF)` pick a nightkin; the rest are rare.
const NIGHTKIN_CUTOFF: f64 = 0.99;

const CASTER_CHANCE: f64 = 0.10;

const PLACEHOLDER_NAMES: &[&str] = &[
    "Aragorn", "Baldur", "Celeste", "Darian", "Elora", "Fendrel", "Garen", "Helena", "Ivor", "Jora",
];

pub fn select_kin(rng: &dyn RandomSource) -> Kin {
    let tier = rng.next_unit();
    if tier < COMMON_KIN_CUTOFF {
        weighted_draw(rng, COMMON_KIN_WEIGHTS).unwrap_or(Kin::Human)
    } else if tier < NIGHTKIN_CUTOFF {
        choose(rng, KinCategory::Nightkin.members()).unwrap_or(Kin::Goblin)
    } else {
        choose(rng, KinCategory::Rare.members()).unwrap_or(Kin::CatPeople)
    }
}

pub fn select_profession(rng: &dyn RandomSource) -> Profession {
    if rng.next_unit() < CASTER_CHANCE {
        choose(rng, Profession::casters()).unwrap_or(Profession::Animist)
    } else {
        choose(rng, Profession::non_casters()).unwrap_or(Profession::Fighter)
    }
}

pub fn roll_age(rng: &dyn RandomSource) -> Age {
    Age::from_d6(DiceFormula::die(6).roll_total(rng))
}

/// Stand-in name until narrative enrichment supplies a real one.
pub fn placeholder_name(rng: &dyn RandomSource) -> String {
    choose(rng, PLACEHOLDER_NAMES)
        .unwrap_or("Hero")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::random::testing::{ScriptedRandom, SeededTestRandom};
    use crate::value_objects::MockRandomSource;
    use std::collections::HashMap;

    #[test]
    fn common_tier_uses_weights() {
        // tier draw, then weight draw (total 12)
        let human = ScriptedRandom::new().with_units(&[0.5, 0.0]);
        assert_eq!(select_kin(&human), Kin::Human);
        let halfling = ScriptedRandom::new().with_units(&[0.5, 0.5]);
        assert_eq!(select_kin(&halfling), Kin::Halfling);
        let wolfkin = ScriptedRandom::new().with_units(&[0.96, 0.99]);
        assert_eq!(select_kin(&wolfkin), Kin::Wolfkin);
    }

    #[test]
    fn nightkin_tier_is_uniform_over_four() {
        let rng = ScriptedRandom::new().with_units(&[0.975]).with_ints(&[3]);
        assert_eq!(select_kin(&rng), Kin::Orc);
    }

    #[test]
    fn rare_tier_is_uniform_over_five() {
        let rng = ScriptedRandom::new().with_units(&[0.995]).with_ints(&[4]);
        assert_eq!(select_kin(&rng), Kin::Satyr);
    }

    #[test]
    fn single_rare_kin_often_exhausts_default_budget() {
        let per_draw = (1.0 - NIGHTKIN_CUTOFF) / KinCategory::Rare.members().len() as f64;
        assert!((per_draw - 0.002).abs() < 1e-9);

        let attempts = crate::generation::CharacterGenerator::DEFAULT_MAX_ATTEMPTS;
        let miss_all = (1.0 - per_draw).powi(attempts as i32);
        assert!((0.12..0.15).contains(&miss_all), "miss_all {miss_all}");
    }

    #[test]
    fn kin_distribution_favours_humans() {
        let rng = SeededTestRandom::new(2024);
        let mut counts: HashMap<Kin, u32> = HashMap::new();
        for _ in 0..5000 {
            *counts.entry(select_kin(&rng)).or_default() += 1;
        }
        let humans = counts.get(&Kin::Human).copied().unwrap_or(0);
        let elves = counts.get(&Kin::Elf).copied().unwrap_or(0);
        let common: u32 = KinCategory::Common
            .members()
            .iter()
            .map(|k| counts.get(k).copied().unwrap_or(0))
            .sum();
        assert!(humans > elves * 2, "humans {humans} elves {elves}");
        assert!(common > 4700, "common {common}");
    }

    #[test]
    fn caster_draw_below_ten_percent() {
        let caster = ScriptedRandom::new().with_units(&[0.05]).with_ints(&[1]);
        assert_eq!(select_profession(&caster), Profession::Elementalist);
        let mundane = ScriptedRandom::new().with_units(&[0.10]).with_ints(&[8]);
        assert_eq!(select_profession(&mundane), Profession::Thief);
    }

    #[test]
    fn age_from_a_six() {
        let mut rng = MockRandomSource::new();
        rng.expect_gen_range()
            .withf(|low, high| *low == 1 && *high == 6)
            .times(1)
            .return_const(6);
        assert_eq!(roll_age(&rng), Age::Old);
    }

    #[test]
    fn placeholder_names_come_from_the_list() {
        let rng = SeededTestRandom::new(9);
        for _ in 0..20 {
            assert!(PLACEHOLDER_NAMES.contains(&placeholder_name(&rng).as_str()));
        }
    }
}
