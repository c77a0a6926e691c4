//! Skills and their governing attributes.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{catalog_key, Attribute};

/// One of the 30 skills: 20 general skills followed by 10 weapon skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Acrobatics,
    Awareness,
    Bartering,
    #[serde(rename = "Beast Lore")]
    BeastLore,
    Bluffing,
    Bushcraft,
    Crafting,
    Evade,
    Healing,
    #[serde(rename = "Hunting & Fishing")]
    HuntingAndFishing,
    #[serde(rename = "Languages", alias = "Language")]
    Languages,
    #[serde(rename = "Myths & Legends")]
    MythsAndLegends,
    Performance,
    Persuasion,
    Riding,
    Seamanship,
    #[serde(rename = "Sleight of Hand", alias = "Slight of Hand")]
    SleightOfHand,
    Sneaking,
    #[serde(rename = "Spot Hidden")]
    SpotHidden,
    Swimming,
    Axes,
    Bows,
    Brawling,
    Crossbows,
    Hammers,
    Knives,
    Slings,
    Spears,
    Staves,
    Swords,
}

impl Skill {
    pub fn all() -> &'static [Skill] {
        &[
            Skill::Acrobatics,
            Skill::Awareness,
            Skill::Bartering,
            Skill::BeastLore,
            Skill::Bluffing,
            Skill::Bushcraft,
            Skill::Crafting,
            Skill::Evade,
            Skill::Healing,
            Skill::HuntingAndFishing,
            Skill::Languages,
            Skill::MythsAndLegends,
            Skill::Performance,
            Skill::Persuasion,
            Skill::Riding,
            Skill::Seamanship,
            Skill::SleightOfHand,
            Skill::Sneaking,
            Skill::SpotHidden,
            Skill::Swimming,
            Skill::Axes,
            Skill::Bows,
            Skill::Brawling,
            Skill::Crossbows,
            Skill::Hammers,
            Skill::Knives,
            Skill::Slings,
            Skill::Spears,
            Skill::Staves,
            Skill::Swords,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Skill::Acrobatics => "Acrobatics",
            Skill::Awareness => "Awareness",
            Skill::Bartering => "Bartering",
            Skill::BeastLore => "Beast Lore",
            Skill::Bluffing => "Bluffing",
            Skill::Bushcraft => "Bushcraft",
            Skill::Crafting => "Crafting",
            Skill::Evade => "Evade",
            Skill::Healing => "Healing",
            Skill::HuntingAndFishing => "Hunting & Fishing",
            Skill::Languages => "Languages",
            Skill::MythsAndLegends => "Myths & Legends",
            Skill::Performance => "Performance",
            Skill::Persuasion => "Persuasion",
            Skill::Riding => "Riding",
            Skill::Seamanship => "Seamanship",
            Skill::SleightOfHand => "Sleight of Hand",
            Skill::Sneaking => "Sneaking",
            Skill::SpotHidden => "Spot Hidden",
            Skill::Swimming => "Swimming",
            Skill::Axes => "Axes",
            Skill::Bows => "Bows",
            Skill::Brawling => "Brawling",
            Skill::Crossbows => "Crossbows",
            Skill::Hammers => "Hammers",
            Skill::Knives => "Knives",
            Skill::Slings => "Slings",
            Skill::Spears => "Spears",
            Skill::Staves => "Staves",
            Skill::Swords => "Swords",
        }
    }

    /// Attribute whose score sets this skill's base chance.
    pub fn attribute(&self) -> Attribute {
        match self {
            Skill::Crafting
            | Skill::Axes
            | Skill::Brawling
            | Skill::Hammers
            | Skill::Spears
            | Skill::Swords => Attribute::Strength,
            Skill::Acrobatics
            | Skill::Evade
            | Skill::HuntingAndFishing
            | Skill::Riding
            | Skill::SleightOfHand
            | Skill::Sneaking
            | Skill::Swimming
            | Skill::Bows
            | Skill::Crossbows
            | Skill::Knives
            | Skill::Slings
            | Skill::Staves => Attribute::Agility,
            Skill::Awareness
            | Skill::BeastLore
            | Skill::Bushcraft
            | Skill::Healing
            | Skill::Languages
            | Skill::MythsAndLegends
            | Skill::Seamanship
            | Skill::SpotHidden => Attribute::Intelligence,
            Skill::Bartering | Skill::Bluffing | Skill::Performance | Skill::Persuasion => {
                Attribute::Charisma
            }
        }
    }

    pub fn is_weapon(&self) -> bool {
        matches!(
            self,
            Skill::Axes
                | Skill::Bows
                | Skill::Brawling
                | Skill::Crossbows
                | Skill::Hammers
                | Skill::Knives
                | Skill::Slings
                | Skill::Spears
                | Skill::Staves
                | Skill::Swords
        )
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        // Older records carry the singular and misspelled forms.
        match key.as_str() {
            "language" => return Ok(Skill::Languages),
            "slightofhand" => return Ok(Skill::SleightOfHand),
            _ => {}
        }
        Skill::all()
            .iter()
            .copied()
            .find(|skill| catalog_key(skill.display_name()) == key)
            .ok_or_else(|| DomainError::invalid_catalog_value("skill", s))
    }
}
