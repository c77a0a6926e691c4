//! Starting spells for caster professions.

use super::sampling::draw_n;
use crate::types::{Profession, SpellTier};
use crate::value_objects::RandomSource;

pub const STARTING_TRICKS: usize = 3;
pub const STARTING_RANK_ONE_SPELLS: usize = 3;

/// Three tricks and three rank-one spells, each drawn from the school list
/// unioned with the general list. Non-casters get nothing.
pub fn select_starting_magic(rng: &dyn RandomSource, profession: Profession) -> Vec<String> {
    let Some(school) = profession.magic_school() else {
        return Vec::new();
    };

    let tricks = draw_n(rng, &school.spell_pool(SpellTier::Trick), STARTING_TRICKS);
    let spells = draw_n(
        rng,
        &school.spell_pool(SpellTier::RankOne),
        STARTING_RANK_ONE_SPELLS,
    );
    tricks
        .into_iter()
        .chain(spells)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MagicSchool;
    use crate::value_objects::random::testing::SeededTestRandom;
    use std::collections::HashSet;

    #[test]
    fn non_casters_have_no_magic() {
        let rng = SeededTestRandom::new(0);
        for profession in Profession::non_casters() {
            assert!(select_starting_magic(&rng, *profession).is_empty());
        }
    }

    #[test]
    fn casters_get_three_tricks_and_three_spells() {
        let rng = SeededTestRandom::new(21);
        for profession in Profession::casters() {
            let school = profession.magic_school().unwrap();
            let magic = select_starting_magic(&rng, *profession);
            assert_eq!(magic.len(), 6);
            assert_eq!(magic.iter().collect::<HashSet<_>>().len(), 6);

            let tricks = school.spell_pool(SpellTier::Trick);
            let rank_one = school.spell_pool(SpellTier::RankOne);
            assert!(magic[..3].iter().all(|m| tricks.contains(&m.as_str())));
            assert!(magic[3..].iter().all(|m| rank_one.contains(&m.as_str())));
        }
    }

    #[test]
    fn spells_never_cross_schools() {
        let rng = SeededTestRandom::new(5);
        let fire = MagicSchool::Elementalism.school_spells(SpellTier::RankOne);
        for _ in 0..50 {
            let magic = select_starting_magic(&rng, Profession::Animist);
            assert!(magic.iter().all(|m| !fire.contains(&m.as_str())));
        }
    }
}
