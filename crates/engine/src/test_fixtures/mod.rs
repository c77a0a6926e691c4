//! Shared fixtures for engine tests.

use std::collections::HashMap;

use dragonbane_domain::{
    Age, Attributes, Character, CharacterId, HeroicAbility, Kin, Profession, Skill, Wordlists,
};

/// An adult elven mentalist with a full kit and no narrative yet.
pub fn sample_character() -> Character {
    Character {
        id: CharacterId::new(),
        name: "Aelin".to_string(),
        kin: Kin::Elf,
        profession: Profession::Mentalist,
        age: Age::Adult,
        attributes: Attributes::new(8, 11, 13, 15, 14, 10),
        heroic_abilities: vec![HeroicAbility::InnerPeace],
        trained_skills: vec![
            Skill::Awareness,
            Skill::Evade,
            Skill::Healing,
            Skill::Languages,
            Skill::MythsAndLegends,
            Skill::Staves,
            Skill::Persuasion,
            Skill::SpotHidden,
        ],
        magic: vec![
            "FETCH".to_string(),
            "OPEN/CLOSE".to_string(),
            "LIGHT".to_string(),
            "LEVITATE".to_string(),
            "POWER FIST".to_string(),
            "STONE SKIN".to_string(),
        ],
        weakness: "Afraid of heights".to_string(),
        memento: "A cracked hand mirror".to_string(),
        gear: vec![
            "Staff".to_string(),
            "Leather Armour".to_string(),
            "Grimoire".to_string(),
            "Torch".to_string(),
            "3 Field Rations".to_string(),
            "2 Silver".to_string(),
        ],
        appearance_seeds: vec!["Silver eyes".to_string(), "Long braids".to_string()],
        appearance: String::new(),
        background: String::new(),
        narrated: false,
    }
}

/// In-memory wordlists keyed by resource name.
#[derive(Debug, Default)]
pub struct StaticWordlists(pub HashMap<String, Vec<String>>);

impl StaticWordlists {
    /// Two lines for every list the generator asks for.
    pub fn full() -> Self {
        let mut lists = HashMap::new();
        let two = |a: &str, b: &str| vec![a.to_string(), b.to_string()];
        lists.insert("weaknesses".to_string(), two("Greedy", "Boastful"));
        lists.insert("mementos".to_string(), two("A lucky coin", "A wooden flute"));
        for kin in Kin::all() {
            lists.insert(kin.appearance_resource(), two("Scarred chin", "Bright eyes"));
        }
        Self(lists)
    }
}

impl Wordlists for StaticWordlists {
    fn lines(&self, resource: &str) -> Vec<String> {
        self.0.get(resource).cloned().unwrap_or_default()
    }
}
