//! Dragonbane character generation and derivation.
//!
//! Pure domain crate: catalogs, the generation pipeline, and the printable
//! sheet projection. No I/O; randomness and wordlists are injected through
//! [`RandomSource`] and [`Wordlists`].

pub mod character_sheet;
pub mod entities;
pub mod error;
pub mod generation;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{Character, CharacterRecord, Narrative};
pub use error::DomainError;
pub use ids::CharacterId;

// Re-export catalogs
pub use types::{
    Age, Attribute, HeroicAbility, Kin, KinCategory, MagicSchool, Profession, Skill, SpellTier,
};

// Re-export value objects
pub use value_objects::{Attributes, DiceFormula, DiceRollResult, RandomSource};

// Re-export the generation entry points
pub use generation::{CharacterGenerator, GenerationFilters, Wordlists};

// Re-export sheet projection
pub use character_sheet::{project_sheet, skill_level, skill_levels, SheetPayload};
