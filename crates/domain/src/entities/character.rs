//! Character aggregate - a fully rolled Dragonbane adventurer
//!
//! A character is created whole by the generation pipeline and is read-only
//! afterwards, except for the narrative fields (name, appearance, background)
//! which enrichment may overwrite exactly once.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::types::{Age, HeroicAbility, Kin, Profession, Skill};
use crate::value_objects::Attributes;

/// A generated player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub kin: Kin,
    pub profession: Profession,
    pub age: Age,
    pub attributes: Attributes,
    /// Innate kin abilities first, then at most one profession ability
    pub heroic_abilities: Vec<HeroicAbility>,
    /// Six profession skills followed by the age-bonus skills
    pub trained_skills: Vec<Skill>,
    /// Starting spells; empty unless the profession is a caster
    pub magic: Vec<String>,
    pub weakness: String,
    pub memento: String,
    pub gear: Vec<String>,
    pub appearance_seeds: Vec<String>,
    pub appearance: String,
    pub background: String,
    /// Set once narrative enrichment has been applied
    #[serde(default)]
    pub narrated: bool,
}

/// Narrative fields produced by enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub name: String,
    pub appearance: String,
    pub background: String,
}

impl Character {
    pub fn is_trained(&self, skill: Skill) -> bool {
        self.trained_skills.contains(&skill)
    }

    pub fn has_ability(&self, ability: HeroicAbility) -> bool {
        self.heroic_abilities.contains(&ability)
    }

    /// Overwrite name, appearance and background with an enrichment result.
    ///
    /// Fails if enrichment already ran or the narrative name is blank. Blank
    /// appearance or background leave the existing text in place.
    pub fn apply_narrative(&mut self, narrative: Narrative) -> Result<(), DomainError> {
        if self.narrated {
            return Err(DomainError::validation(format!(
                "Narrative already applied to character {}",
                self.id
            )));
        }
        let name = narrative.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Narrative name cannot be empty"));
        }

        self.name = name.to_string();
        if !narrative.appearance.trim().is_empty() {
            self.appearance = narrative.appearance.trim().to_string();
        }
        if !narrative.background.trim().is_empty() {
            self.background = narrative.background.trim().to_string();
        }
        self.narrated = true;
        Ok(())
    }

    /// Plain-text character block, used for terminal output and as the
    /// enrichment prompt body.
    pub fn description(&self) -> String {
        let join = |items: Vec<&str>| items.join(", ");
        let indented = |items: &[String]| {
            items
                .iter()
                .map(|item| format!("  {item}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let mut lines = vec![
            "---- Dragonbane Character ----".to_string(),
            format!("Name: {}", self.name),
            format!("Kin: {}", self.kin),
            format!("Profession: {}", self.profession),
            format!("Age: {}", self.age),
            format!(
                "Abilities: {}",
                join(self.heroic_abilities.iter().map(|a| a.display_name()).collect())
            ),
            format!(
                "Trained Skills: {}",
                join(self.trained_skills.iter().map(|s| s.display_name()).collect())
            ),
            format!("Magic: {}", join(self.magic.iter().map(String::as_str).collect())),
            format!("Weakness: {}", self.weakness),
            "Attributes:".to_string(),
        ];
        lines.extend(
            self.attributes
                .iter()
                .map(|(attribute, score)| format!("  {}: {}", attribute.abbreviation(), score)),
        );
        lines.push("Gear:".to_string());
        lines.push(indented(&self.gear));
        lines.push(format!("Memento: {}", self.memento));
        lines.push("Appearance Seeds:".to_string());
        lines.push(indented(&self.appearance_seeds));
        if !self.appearance.is_empty() {
            lines.push(format!("Appearance: {}", self.appearance));
        }
        if !self.background.is_empty() {
            lines.push(format!("Background: {}", self.background));
        }
        lines.join("\n")
    }
}
