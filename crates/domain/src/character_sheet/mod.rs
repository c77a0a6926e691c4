//! Printable Dragonbane character sheet
//!
//! [`SheetPayload`] is the flat, editable form a character is projected onto
//! when it is adopted at the table. It is a best-effort view: gear strings are
//! matched against an equipment catalog by fuzzy rules, and anything that does
//! not match lands in the inventory.
//!
//! - `derived`: skill levels, movement, encumbrance
//! - `equipment`: armour, helmet and weapon presets plus currency parsing
//! - `projection`: [`project_sheet`]

mod derived;
mod equipment;
mod projection;

use serde::{Deserialize, Serialize};

pub use derived::{
    agility_movement_modifier, base_chance, encumbrance_limit, movement, skill_level,
    skill_levels, trained_level,
};
pub use equipment::{
    match_armour, match_helmet, match_weapon, normalize_equipment_string, Currency,
};
pub use projection::project_sheet;

/// Weapon rows on the printed sheet.
pub const WEAPON_SLOTS: usize = 3;
/// Toggle boxes per death-roll track.
pub const DEATH_ROLL_TOGGLES: usize = 3;

// =============================================================================
// Payload
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    pub character_name: String,
    pub player_name: String,
    pub kin: String,
    pub profession: String,
    pub age: String,
    pub weakness: String,
    pub appearance: String,
    pub attributes: AttributeBlock,
    pub conditions: ConditionFlags,
    pub movement: i32,
    pub encumbrance_limit: Option<i32>,
    #[serde(default)]
    pub spells: Vec<SpellEntry>,
    pub abilities_and_spells: Vec<String>,
    pub skills: SkillSections,
    pub inventory: Vec<InventoryItem>,
    pub gold: i32,
    pub silver: i32,
    pub copper: i32,
    pub memento: String,
    pub tiny_items: String,
    pub armour: ArmourBlock,
    pub helmet: HelmetBlock,
    pub weapons: Vec<WeaponEntry>,
    pub rests: RestFlags,
    pub willpower: ResourceTrack,
    pub hit_points: ResourceTrack,
    pub death_rolls: DeathRollTrack,
    pub notes: String,
    pub background: String,
}

impl SheetPayload {
    /// Bring an edited payload back into shape.
    ///
    /// Exactly three weapon rows and three toggles per death-roll track;
    /// trimmed names with blank spells and abilities dropped; inventory slots,
    /// skill levels and the encumbrance limit floored at zero. A missing
    /// encumbrance limit is recomputed from strength.
    pub fn normalize(&mut self) {
        self.weapons.truncate(WEAPON_SLOTS);
        self.weapons.resize_with(WEAPON_SLOTS, WeaponEntry::default);

        normalize_toggles(&mut self.death_rolls.successes);
        normalize_toggles(&mut self.death_rolls.failures);

        for item in &mut self.inventory {
            item.name = item.name.trim().to_string();
            item.details = item.details.trim().to_string();
            item.slots = item.slots.max(0);
        }

        let limit = self
            .encumbrance_limit
            .unwrap_or_else(|| encumbrance_limit(self.attributes.strength));
        self.encumbrance_limit = Some(limit.max(0));

        for spell in &mut self.spells {
            spell.name = spell.name.trim().to_string();
        }
        self.spells.retain(|spell| !spell.name.is_empty());

        self.abilities_and_spells = self
            .abilities_and_spells
            .iter()
            .map(|ability| ability.trim().to_string())
            .filter(|ability| !ability.is_empty())
            .collect();

        for entry in self
            .skills
            .primary
            .iter_mut()
            .chain(self.skills.weapon.iter_mut())
            .chain(self.skills.secondary.iter_mut())
        {
            entry.name = entry.name.trim().to_string();
            entry.level = entry.level.max(0);
        }
    }
}

fn normalize_toggles(toggles: &mut Vec<bool>) {
    toggles.truncate(DEATH_ROLL_TOGGLES);
    toggles.resize(DEATH_ROLL_TOGGLES, false);
}

// =============================================================================
// Blocks
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBlock {
    pub strength: i32,
    pub constitution: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub charisma: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionFlags {
    pub exhausted: bool,
    pub sickly: bool,
    pub dazed: bool,
    pub angry: bool,
    pub scared: bool,
    pub disheartened: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSections {
    pub primary: Vec<SkillEntry>,
    pub weapon: Vec<SkillEntry>,
    /// Magic-school skill for casters; empty otherwise
    pub secondary: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: String,
    pub level: i32,
    pub needs_improvement: bool,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
            needs_improvement: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub name: String,
    pub details: String,
    pub slots: i32,
}

impl InventoryItem {
    /// A single-slot item with no details.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: String::new(),
            slots: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellEntry {
    pub name: String,
    pub in_grimoire: bool,
    pub prepared: bool,
}

impl SpellEntry {
    /// A spell written in the grimoire but not prepared.
    pub fn learned(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            in_grimoire: true,
            prepared: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmourBlock {
    pub armour_type: String,
    pub rating: i32,
    pub banes: ArmourBanes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmourBanes {
    pub sneaking: bool,
    pub evade: bool,
    pub acrobatics: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmetBlock {
    pub helmet_type: String,
    pub rating: i32,
    pub banes: HelmetBanes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmetBanes {
    pub awareness: bool,
    pub ranged_attacks: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponEntry {
    pub name: String,
    /// "R" one-handed, "RL" two-handed, empty for none
    pub grip: String,
    pub range: String,
    pub damage: String,
    pub durability: i32,
    pub features: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestFlags {
    pub round_rest: bool,
    pub stretch_rest: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTrack {
    pub max: i32,
    pub current: i32,
}

impl ResourceTrack {
    pub fn full(max: i32) -> Self {
        Self { max, current: max }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeathRollTrack {
    pub successes: Vec<bool>,
    pub failures: Vec<bool>,
}

impl Default for DeathRollTrack {
    fn default() -> Self {
        Self {
            successes: vec![false; DEATH_ROLL_TOGGLES],
            failures: vec![false; DEATH_ROLL_TOGGLES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::character::fixtures;

    fn sheet() -> SheetPayload {
        project_sheet(&fixtures::fighter(), Some("Robin"))
    }

    #[test]
    fn normalize_pads_and_truncates_fixed_rows() {
        let mut payload = sheet();
        payload.weapons = vec![WeaponEntry::default(); 5];
        payload.death_rolls.successes = vec![true];
        payload.death_rolls.failures = vec![true, true, true, true];
        payload.normalize();

        assert_eq!(payload.weapons.len(), WEAPON_SLOTS);
        assert_eq!(payload.death_rolls.successes, vec![true, false, false]);
        assert_eq!(payload.death_rolls.failures, vec![true, true, true]);

        payload.weapons.clear();
        payload.normalize();
        assert_eq!(payload.weapons, vec![WeaponEntry::default(); WEAPON_SLOTS]);
    }

    #[test]
    fn normalize_trims_and_floors() {
        let mut payload = sheet();
        payload.abilities_and_spells = vec!["  Veteran ".into(), "   ".into()];
        payload.spells = vec![SpellEntry::learned(""), SpellEntry::learned(" FETCH")];
        payload.inventory = vec![InventoryItem {
            name: " Rope ".into(),
            details: "".into(),
            slots: -2,
        }];
        payload.skills.primary = vec![SkillEntry::new(" Evade ", -3)];
        payload.encumbrance_limit = Some(-1);
        payload.normalize();

        assert_eq!(payload.abilities_and_spells, vec!["Veteran".to_string()]);
        assert_eq!(payload.spells.len(), 1);
        assert_eq!(payload.spells[0].name, "FETCH");
        assert_eq!(payload.inventory[0].name, "Rope");
        assert_eq!(payload.inventory[0].slots, 0);
        assert_eq!(payload.skills.primary[0], SkillEntry::new("Evade", 0));
        assert_eq!(payload.encumbrance_limit, Some(0));
    }

    #[test]
    fn missing_encumbrance_is_recomputed() {
        let mut payload = sheet();
        payload.encumbrance_limit = None;
        payload.normalize();
        assert_eq!(payload.encumbrance_limit, Some(8));
    }

    #[test]
    fn payload_serializes_camel_case() {
        let json = serde_json::to_value(sheet()).unwrap();
        assert_eq!(json["characterName"], "Garen");
        assert_eq!(json["playerName"], "Robin");
        assert!(json["hitPoints"]["max"].is_number());
        assert!(json["helmet"]["banes"]["rangedAttacks"].is_boolean());
        assert!(json["skills"]["weapon"][0]["needsImprovement"].is_boolean());
    }
}
