//! Domain entities

pub(crate) mod character;
mod character_record;

pub use character::{Character, Narrative};
pub use character_record::CharacterRecord;
