//! Heroic ability and trained skill selection.

use super::sampling::{choose, draw_n};
use crate::types::{Age, HeroicAbility, Kin, Profession, Skill};
use crate::value_objects::RandomSource;

/// Trained skills taken from the profession pool before the age bonus.
pub const REQUIRED_SKILL_COUNT: usize = 6;

/// Kin innate abilities plus one uniform pick from the profession's bonus pool.
pub fn select_heroic_abilities(
    rng: &dyn RandomSource,
    kin: Kin,
    profession: Profession,
) -> Vec<HeroicAbility> {
    let mut abilities = kin.innate_abilities().to_vec();
    if let Some(bonus) = choose(rng, profession.bonus_abilities()) {
        if !abilities.contains(&bonus) {
            abilities.push(bonus);
        }
    }
    abilities
}

/// Six skills from the profession pool, then the age bonus drawn from every
/// skill not already chosen.
pub fn select_trained_skills(rng: &dyn RandomSource, profession: Profession, age: Age) -> Vec<Skill> {
    let required = draw_n(rng, profession.skills(), REQUIRED_SKILL_COUNT);
    let remaining: Vec<Skill> = Skill::all()
        .iter()
        .copied()
        .filter(|skill| !required.contains(skill))
        .collect();
    let bonus = draw_n(rng, &remaining, age.bonus_skill_count());

    required.into_iter().chain(bonus).collect()
}
