//! Persisted, string-typed form of a character.
//!
//! Catalog values are stored by display name so the library stays readable
//! in any SQLite browser. Converting back validates every value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Character;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::types::{HeroicAbility, Skill};
use crate::value_objects::Attributes;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub kin: String,
    pub profession: String,
    pub age: String,
    pub strength: i32,
    pub constitution: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub charisma: i32,
    pub heroic_abilities: Vec<String>,
    pub trained_skills: Vec<String>,
    pub magic: Vec<String>,
    pub gear: Vec<String>,
    pub appearance_seeds: Vec<String>,
    pub weakness: String,
    pub memento: String,
    pub appearance: String,
    pub background: String,
    pub narrated: bool,
    pub created_at: DateTime<Utc>,
}

impl CharacterRecord {
    pub fn from_character(character: &Character, created_at: DateTime<Utc>) -> Self {
        Self {
            id: character.id.to_string(),
            name: character.name.clone(),
            kin: character.kin.display_name().to_string(),
            profession: character.profession.display_name().to_string(),
            age: character.age.display_name().to_string(),
            strength: character.attributes.strength,
            constitution: character.attributes.constitution,
            agility: character.attributes.agility,
            intelligence: character.attributes.intelligence,
            willpower: character.attributes.willpower,
            charisma: character.attributes.charisma,
            heroic_abilities: character
                .heroic_abilities
                .iter()
                .map(|a| a.display_name().to_string())
                .collect(),
            trained_skills: character
                .trained_skills
                .iter()
                .map(|s| s.display_name().to_string())
                .collect(),
            magic: character.magic.clone(),
            gear: character.gear.clone(),
            appearance_seeds: character.appearance_seeds.clone(),
            weakness: character.weakness.clone(),
            memento: character.memento.clone(),
            appearance: character.appearance.clone(),
            background: character.background.clone(),
            narrated: character.narrated,
            created_at,
        }
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = DomainError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        let heroic_abilities = record
            .heroic_abilities
            .iter()
            .map(|value| value.parse::<HeroicAbility>())
            .collect::<Result<Vec<_>, _>>()?;
        let trained_skills = record
            .trained_skills
            .iter()
            .map(|value| value.parse::<Skill>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Character {
            id: record.id.parse::<CharacterId>()?,
            name: record.name,
            kin: record.kin.parse()?,
            profession: record.profession.parse()?,
            age: record.age.parse()?,
            attributes: Attributes::new(
                record.strength,
                record.constitution,
                record.agility,
                record.intelligence,
                record.willpower,
                record.charisma,
            ),
            heroic_abilities,
            trained_skills,
            magic: record.magic,
            weakness: record.weakness,
            memento: record.memento,
            gear: record.gear,
            appearance_seeds: record.appearance_seeds,
            appearance: record.appearance,
            background: record.background,
            narrated: record.narrated,
        })
    }
}
