//! Character generation pipeline
//!
//! Kin, profession and age selection, attribute rolling, skill and ability
//! assembly, starting magic, gear, and wordlist flavour are composed by
//! [`CharacterGenerator`]. Everything consumes an injected [`RandomSource`],
//! so the same seed always rebuilds the same character.

mod attributes;
mod gear;
mod magic;
mod sampling;
mod selectors;
mod skills;
mod wordlists;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::types::{Age, Kin, Profession};
use crate::value_objects::RandomSource;

pub use attributes::{assign_rolls, generate_attributes, ATTRIBUTE_ROLLS};
pub use gear::{gear_table, roll_gear, GearItem, GearTable};
pub use magic::{select_starting_magic, STARTING_RANK_ONE_SPELLS, STARTING_TRICKS};
pub use sampling::{choose, draw_n, shuffled, weighted_draw};
pub use selectors::{placeholder_name, roll_age, select_kin, select_profession};
pub use skills::{select_heroic_abilities, select_trained_skills, REQUIRED_SKILL_COUNT};
#[cfg(test)]
pub use wordlists::MockWordlists;
pub use wordlists::{
    select_appearance_seeds, select_memento, select_weakness, Wordlists, MEMENTOS, NO_APPEARANCE,
    NO_MEMENTO, NO_WEAKNESS, WEAKNESSES,
};

/// Constraints for [`CharacterGenerator::generate_matching`]. `None` means any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFilters {
    pub kin: Option<Kin>,
    pub profession: Option<Profession>,
    pub age: Option<Age>,
}

impl GenerationFilters {
    pub fn is_empty(&self) -> bool {
        self.kin.is_none() && self.profession.is_none() && self.age.is_none()
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.kin.map_or(true, |kin| kin == character.kin)
            && self
                .profession
                .map_or(true, |profession| profession == character.profession)
            && self.age.map_or(true, |age| age == character.age)
    }
}

/// Builds complete characters from a random source and a set of wordlists.
#[derive(Clone)]
pub struct CharacterGenerator {
    wordlists: Arc<dyn Wordlists>,
    max_attempts: u32,
}

impl CharacterGenerator {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

    pub fn new(wordlists: Arc<dyn Wordlists>) -> Self {
        Self {
            wordlists,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the filter retry budget. Zero is raised to one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Roll one character.
    ///
    /// Draw order: profession, age, attributes, kin, name, magic, gear,
    /// memento, appearance seeds, heroic abilities, trained skills, weakness.
    pub fn generate(&self, rng: &dyn RandomSource) -> Character {
        let wordlists = self.wordlists.as_ref();

        let profession = select_profession(rng);
        let age = roll_age(rng);
        let attributes = generate_attributes(rng, profession, age);
        let kin = select_kin(rng);
        let name = placeholder_name(rng);
        let magic = select_starting_magic(rng, profession);
        let gear = roll_gear(rng, profession);
        let memento = select_memento(rng, wordlists);
        let appearance_seeds = select_appearance_seeds(rng, wordlists, kin);
        let heroic_abilities = select_heroic_abilities(rng, kin, profession);
        let trained_skills = select_trained_skills(rng, profession, age);
        let weakness = select_weakness(rng, wordlists);

        Character {
            id: CharacterId::new(),
            name,
            kin,
            profession,
            age,
            attributes,
            heroic_abilities,
            trained_skills,
            magic,
            weakness,
            memento,
            gear,
            appearance_seeds,
            appearance: String::new(),
            background: String::new(),
            narrated: false,
        }
    }

    /// Regenerate until a character satisfies every set filter, up to the
    /// attempt budget.
    ///
    /// Filters are met by rejection, so rare combinations can run out of
    /// attempts. Each rare kin turns up on about 0.2% of draws; a filter for
    /// one of them (Satyr, say) fails with
    /// [`DomainError::GenerationExhausted`] roughly 13% of the time under the
    /// default budget of 1000. Raise the budget with
    /// [`with_max_attempts`](Self::with_max_attempts) or retry the call.
    pub fn generate_matching(
        &self,
        rng: &dyn RandomSource,
        filters: &GenerationFilters,
    ) -> Result<Character, DomainError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generate(rng);
            if filters.matches(&candidate) {
                tracing::debug!(
                    attempt,
                    kin = %candidate.kin,
                    profession = %candidate.profession,
                    "Generated matching character"
                );
                return Ok(candidate);
            }
        }

        tracing::debug!(
            attempts = self.max_attempts,
            ?filters,
            "No character matched filters"
        );
        Err(DomainError::generation_exhausted(self.max_attempts))
    }
}

impl std::fmt::Debug for CharacterGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterGenerator")
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HeroicAbility, Skill};
    use crate::value_objects::random::testing::{FixedRandom, SeededTestRandom};
    use std::collections::HashSet;

    fn generator_with_lists() -> CharacterGenerator {
        let mut wordlists = MockWordlists::new();
        wordlists.expect_lines().returning(|resource| match resource {
            WEAKNESSES => vec!["Greedy".to_string(), "Vain".to_string()],
            MEMENTOS => vec!["A broken compass".to_string()],
            _ => vec![
                "Tall".to_string(),
                "Braided hair".to_string(),
                "Missing tooth".to_string(),
            ],
        });
        CharacterGenerator::new(Arc::new(wordlists))
    }

    fn empty_generator() -> CharacterGenerator {
        let mut wordlists = MockWordlists::new();
        wordlists.expect_lines().returning(|_| Vec::new());
        CharacterGenerator::new(Arc::new(wordlists))
    }

    #[test]
    fn generated_characters_hold_their_invariants() {
        let generator = generator_with_lists();
        let rng = SeededTestRandom::new(2025);

        for _ in 0..200 {
            let character = generator.generate(&rng);

            assert_eq!(
                character.trained_skills.len(),
                REQUIRED_SKILL_COUNT + character.age.bonus_skill_count()
            );
            let unique: HashSet<Skill> = character.trained_skills.iter().copied().collect();
            assert_eq!(unique.len(), character.trained_skills.len());

            for innate in character.kin.innate_abilities() {
                assert!(character.has_ability(*innate));
            }
            let bonus = character
                .heroic_abilities
                .iter()
                .filter(|a| character.profession.bonus_abilities().contains(a))
                .count();
            assert!(bonus <= 1);
            let abilities: HashSet<HeroicAbility> =
                character.heroic_abilities.iter().copied().collect();
            assert_eq!(abilities.len(), character.heroic_abilities.len());

            assert_eq!(character.magic.is_empty(), !character.profession.is_caster());
            assert_eq!(character.appearance_seeds.len(), 2);
            assert!(character.gear.last().is_some_and(|g| g.ends_with(" Silver")));
            assert!(character.appearance.is_empty() && character.background.is_empty());
            assert!(!character.narrated);
        }
    }

    #[test]
    fn same_seed_same_character() {
        let generator = generator_with_lists();
        let mut first = generator.generate(&SeededTestRandom::new(99));
        let second = generator.generate(&SeededTestRandom::new(99));
        first.id = second.id;
        assert_eq!(first, second);
    }

    #[test]
    fn missing_wordlists_use_sentinels() {
        let character = empty_generator().generate(&SeededTestRandom::new(1));
        assert_eq!(character.weakness, NO_WEAKNESS);
        assert_eq!(character.memento, NO_MEMENTO);
        assert_eq!(character.appearance_seeds, vec![NO_APPEARANCE.to_string()]);
    }

    #[test]
    fn kin_filter_always_matches() {
        let generator = generator_with_lists();
        let filters = GenerationFilters {
            kin: Some(Kin::Human),
            ..Default::default()
        };
        for seed in 0..25 {
            let character = generator
                .generate_matching(&SeededTestRandom::new(seed), &filters)
                .unwrap();
            assert_eq!(character.kin, Kin::Human);
        }
    }

    #[test]
    fn combined_filters_are_all_honoured() {
        let generator = generator_with_lists();
        let filters = GenerationFilters {
            kin: Some(Kin::Halfling),
            profession: Some(Profession::Thief),
            age: None,
        };
        let character = generator
            .generate_matching(&SeededTestRandom::new(7), &filters)
            .unwrap();
        assert_eq!(character.kin, Kin::Halfling);
        assert_eq!(character.profession, Profession::Thief);
    }

    #[test]
    fn exhausted_budget_is_reported() {
        // FixedRandom::low always rolls a young human animist
        let generator = empty_generator().with_max_attempts(1);
        let filters = GenerationFilters {
            kin: Some(Kin::Satyr),
            ..Default::default()
        };
        let err = generator
            .generate_matching(&FixedRandom::low(), &filters)
            .unwrap_err();
        assert_eq!(err, DomainError::GenerationExhausted { attempts: 1 });
    }

    #[test]
    fn empty_filters_accept_the_first_candidate() {
        let generator = empty_generator().with_max_attempts(1);
        assert!(GenerationFilters::default().is_empty());
        assert!(generator
            .generate_matching(&FixedRandom::low(), &GenerationFilters::default())
            .is_ok());
    }

    #[test]
    fn zero_attempts_is_raised_to_one() {
        assert_eq!(empty_generator().with_max_attempts(0).max_attempts(), 1);
    }
}
