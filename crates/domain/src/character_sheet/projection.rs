//! Character to sheet projection.

use std::collections::HashSet;

use super::derived::{encumbrance_limit, movement, skill_level, trained_level};
use super::equipment::{match_armour, match_helmet, match_weapon, Currency};
use super::{
    AttributeBlock, ConditionFlags, DeathRollTrack, InventoryItem, ResourceTrack, RestFlags,
    SheetPayload, SkillEntry, SkillSections, SpellEntry, WeaponEntry, WEAPON_SLOTS,
};
use crate::entities::Character;
use crate::types::Skill;

/// Build a normalized sheet for a character.
///
/// Gear lines are classified in order: currency, armour, helmet, weapon (first
/// three only), and everything else becomes a one-slot inventory item.
pub fn project_sheet(character: &Character, player_name: Option<&str>) -> SheetPayload {
    let attributes = character.attributes;

    let entries = |weapon: bool| -> Vec<SkillEntry> {
        Skill::all()
            .iter()
            .filter(|skill| skill.is_weapon() == weapon)
            .map(|skill| SkillEntry::new(skill.display_name(), skill_level(*skill, character)))
            .collect()
    };
    let secondary = character
        .profession
        .magic_school()
        .map(|school| {
            vec![SkillEntry::new(
                school.display_name(),
                trained_level(attributes.intelligence),
            )]
        })
        .unwrap_or_default();

    let mut currency = Currency::default();
    let mut armour = Default::default();
    let mut helmet = Default::default();
    let mut weapons: Vec<WeaponEntry> = Vec::with_capacity(WEAPON_SLOTS);
    let mut inventory = Vec::new();

    for line in &character.gear {
        if currency.absorb(line) {
            continue;
        }
        if let Some(block) = match_armour(line) {
            armour = block;
            continue;
        }
        if let Some(block) = match_helmet(line) {
            helmet = block;
            continue;
        }
        if weapons.len() < WEAPON_SLOTS {
            if let Some(entry) = match_weapon(line) {
                weapons.push(entry);
                continue;
            }
        }
        inventory.push(InventoryItem::named(line.as_str()));
    }

    let mut seen = HashSet::new();
    let abilities_and_spells = character
        .heroic_abilities
        .iter()
        .map(|ability| ability.display_name().trim().to_string())
        .filter(|ability| !ability.is_empty() && seen.insert(ability.clone()))
        .collect();

    let mut payload = SheetPayload {
        character_name: character.name.clone(),
        player_name: player_name.unwrap_or_default().to_string(),
        kin: character.kin.display_name().to_string(),
        profession: character.profession.display_name().to_string(),
        age: character.age.display_name().to_string(),
        weakness: character.weakness.clone(),
        appearance: character.appearance.clone(),
        attributes: AttributeBlock {
            strength: attributes.strength,
            constitution: attributes.constitution,
            agility: attributes.agility,
            intelligence: attributes.intelligence,
            willpower: attributes.willpower,
            charisma: attributes.charisma,
        },
        conditions: ConditionFlags::default(),
        movement: movement(character.kin, attributes.agility),
        encumbrance_limit: Some(encumbrance_limit(attributes.strength)),
        spells: character
            .magic
            .iter()
            .map(|spell| SpellEntry::learned(spell))
            .collect(),
        abilities_and_spells,
        skills: SkillSections {
            primary: entries(false),
            weapon: entries(true),
            secondary,
        },
        inventory,
        gold: currency.gold,
        silver: currency.silver,
        copper: currency.copper,
        memento: character.memento.clone(),
        tiny_items: String::new(),
        armour,
        helmet,
        weapons,
        rests: RestFlags::default(),
        willpower: ResourceTrack::full(attributes.willpower),
        hit_points: ResourceTrack::full(attributes.constitution),
        death_rolls: DeathRollTrack::default(),
        notes: String::new(),
        background: character.background.clone(),
    };
    payload.normalize();
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::character::fixtures;
    use crate::types::{Age, HeroicAbility, Kin, Profession};

    #[test]
    fn fighter_gear_is_classified() {
        let sheet = project_sheet(&fixtures::fighter(), None);

        assert_eq!(sheet.armour.armour_type, "Chainmail");
        assert_eq!(sheet.armour.rating, 4);
        assert_eq!(sheet.weapons[0].name, "Broadsword");
        assert_eq!(sheet.weapons[1], WeaponEntry::default());
        assert_eq!(sheet.weapons.len(), WEAPON_SLOTS);
        assert_eq!(sheet.silver, 3);
        assert_eq!(sheet.gold, 0);
        assert_eq!(sheet.helmet.helmet_type, "");

        let names: Vec<&str> = sheet.inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Shield", "Torch", "Flint & Tinder", "4 Field Rations"]);
        assert!(sheet.inventory.iter().all(|i| i.slots == 1));
    }

    #[test]
    fn derived_numbers() {
        let sheet = project_sheet(&fixtures::fighter(), Some("Robin"));
        assert_eq!(sheet.player_name, "Robin");
        assert_eq!(sheet.movement, 8);
        assert_eq!(sheet.encumbrance_limit, Some(8));
        assert_eq!(sheet.hit_points, ResourceTrack::full(12));
        assert_eq!(sheet.willpower, ResourceTrack::full(7));
        assert_eq!(sheet.death_rolls, DeathRollTrack::default());
    }

    #[test]
    fn skills_are_split_into_sections() {
        let sheet = project_sheet(&fixtures::fighter(), None);
        assert_eq!(sheet.skills.primary.len(), 20);
        assert_eq!(sheet.skills.weapon.len(), 10);
        assert!(sheet.skills.secondary.is_empty());

        let swords = sheet
            .skills
            .weapon
            .iter()
            .find(|entry| entry.name == "Swords")
            .unwrap();
        assert_eq!(swords.level, 14);
        assert!(sheet.spells.is_empty());
    }

    #[test]
    fn casters_get_school_skill_and_spells() {
        let mut mage = fixtures::fighter();
        mage.profession = Profession::Mentalist;
        mage.age = Age::Young;
        mage.magic = vec!["FETCH".into(), "LEVITATE".into()];
        mage.attributes.intelligence = 14;
        let sheet = project_sheet(&mage, None);

        assert_eq!(sheet.skills.secondary, vec![SkillEntry::new("Mentalism", 12)]);
        assert_eq!(sheet.spells.len(), 2);
        assert!(sheet.spells.iter().all(|s| s.in_grimoire && !s.prepared));
    }

    #[test]
    fn abilities_are_deduplicated_in_order() {
        let mut character = fixtures::fighter();
        character.kin = Kin::Hobgoblin;
        character.heroic_abilities = vec![
            HeroicAbility::Fearless,
            HeroicAbility::Veteran,
            HeroicAbility::Fearless,
        ];
        let sheet = project_sheet(&character, None);
        assert_eq!(sheet.abilities_and_spells, vec!["Fearless", "Veteran"]);
    }

    #[test]
    fn only_three_weapons_fill_slots() {
        let mut character = fixtures::fighter();
        character.gear = vec![
            "Dagger".into(),
            "Knife".into(),
            "Sling".into(),
            "Longbow".into(),
            "Great Helm".into(),
            "2 Gold".into(),
        ];
        let sheet = project_sheet(&character, None);
        let weapons: Vec<&str> = sheet.weapons.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(weapons, vec!["Dagger", "Knife", "Sling"]);
        assert_eq!(sheet.inventory, vec![InventoryItem::named("Longbow")]);
        assert_eq!(sheet.helmet.helmet_type, "Great Helm");
        assert_eq!(sheet.gold, 2);
    }
}
