//! Professions: key attribute, skill pool, bonus abilities, and magic school.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{catalog_key, Attribute, HeroicAbility, MagicSchool, Skill};

/// A character profession.
///
/// The three mage professions are the only casters; each studies one school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Artisan,
    Bard,
    Fighter,
    Hunter,
    Knight,
    #[serde(rename = "Mage (Animist)")]
    Animist,
    #[serde(rename = "Mage (Elementalist)")]
    Elementalist,
    #[serde(rename = "Mage (Mentalist)")]
    Mentalist,
    Mariner,
    Merchant,
    Scholar,
    Thief,
}

impl Profession {
    pub fn all() -> &'static [Profession] {
        &[
            Profession::Artisan,
            Profession::Bard,
            Profession::Fighter,
            Profession::Hunter,
            Profession::Knight,
            Profession::Animist,
            Profession::Elementalist,
            Profession::Mentalist,
            Profession::Mariner,
            Profession::Merchant,
            Profession::Scholar,
            Profession::Thief,
        ]
    }

    pub fn casters() -> &'static [Profession] {
        &[
            Profession::Animist,
            Profession::Elementalist,
            Profession::Mentalist,
        ]
    }

    pub fn non_casters() -> &'static [Profession] {
        &[
            Profession::Artisan,
            Profession::Bard,
            Profession::Fighter,
            Profession::Hunter,
            Profession::Knight,
            Profession::Mariner,
            Profession::Merchant,
            Profession::Scholar,
            Profession::Thief,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Profession::Artisan => "Artisan",
            Profession::Bard => "Bard",
            Profession::Fighter => "Fighter",
            Profession::Hunter => "Hunter",
            Profession::Knight => "Knight",
            Profession::Animist => "Mage (Animist)",
            Profession::Elementalist => "Mage (Elementalist)",
            Profession::Mentalist => "Mage (Mentalist)",
            Profession::Mariner => "Mariner",
            Profession::Merchant => "Merchant",
            Profession::Scholar => "Scholar",
            Profession::Thief => "Thief",
        }
    }

    /// Attribute that receives the best of the six rolled scores.
    pub fn key_attribute(&self) -> Attribute {
        match self {
            Profession::Artisan | Profession::Fighter | Profession::Knight => Attribute::Strength,
            Profession::Bard | Profession::Merchant => Attribute::Charisma,
            Profession::Hunter | Profession::Mariner | Profession::Thief => Attribute::Agility,
            Profession::Animist | Profession::Elementalist => Attribute::Willpower,
            Profession::Mentalist | Profession::Scholar => Attribute::Intelligence,
        }
    }

    /// Skills the six required trained skills are drawn from.
    pub fn skills(&self) -> &'static [Skill] {
        use Skill::*;
        match self {
            Profession::Artisan => &[
                Axes,
                Brawling,
                Crafting,
                Hammers,
                Knives,
                SleightOfHand,
                SpotHidden,
                Swords,
            ],
            Profession::Bard => &[
                Acrobatics,
                Bluffing,
                Evade,
                Knives,
                Languages,
                MythsAndLegends,
                Performance,
                Persuasion,
            ],
            Profession::Fighter => &[Axes, Bows, Brawling, Crossbows, Evade, Hammers, Spears, Swords],
            Profession::Hunter => &[
                Acrobatics,
                Awareness,
                Bows,
                Bushcraft,
                HuntingAndFishing,
                Knives,
                Slings,
                Sneaking,
            ],
            Profession::Knight => &[
                BeastLore,
                Hammers,
                MythsAndLegends,
                Performance,
                Persuasion,
                Riding,
                Spears,
                Swords,
            ],
            Profession::Animist => &[
                BeastLore,
                Bushcraft,
                Evade,
                Healing,
                HuntingAndFishing,
                Sneaking,
                Staves,
            ],
            Profession::Elementalist => &[
                Awareness,
                Evade,
                Healing,
                Languages,
                MythsAndLegends,
                SpotHidden,
                Staves,
            ],
            Profession::Mentalist => &[
                Acrobatics,
                Awareness,
                Brawling,
                Evade,
                Healing,
                Languages,
                MythsAndLegends,
            ],
            Profession::Mariner => &[
                Acrobatics,
                Awareness,
                HuntingAndFishing,
                Knives,
                Languages,
                Seamanship,
                Swimming,
                Swords,
            ],
            Profession::Merchant => &[
                Awareness,
                Bartering,
                Bluffing,
                Evade,
                Knives,
                Persuasion,
                SleightOfHand,
                SpotHidden,
            ],
            Profession::Scholar => &[
                Awareness,
                BeastLore,
                Bushcraft,
                Evade,
                Healing,
                Languages,
                MythsAndLegends,
                SpotHidden,
            ],
            Profession::Thief => &[
                Acrobatics,
                Awareness,
                Bluffing,
                Evade,
                Knives,
                SleightOfHand,
                Sneaking,
                SpotHidden,
            ],
        }
    }

    /// Heroic abilities of which one is granted at creation (none for mages).
    pub fn bonus_abilities(&self) -> &'static [HeroicAbility] {
        match self {
            Profession::Artisan => &[
                HeroicAbility::MasterBlacksmith,
                HeroicAbility::MasterCarpenter,
                HeroicAbility::MasterTanner,
            ],
            Profession::Bard => &[HeroicAbility::Musician],
            Profession::Fighter => &[HeroicAbility::Veteran],
            Profession::Hunter => &[HeroicAbility::Companion],
            Profession::Knight => &[HeroicAbility::Guardian],
            Profession::Animist | Profession::Elementalist | Profession::Mentalist => &[],
            Profession::Mariner => &[HeroicAbility::SeaLegs],
            Profession::Merchant => &[HeroicAbility::TreasureHunter],
            Profession::Scholar => &[HeroicAbility::Intuition],
            Profession::Thief => &[HeroicAbility::Backstabbing],
        }
    }

    pub fn magic_school(&self) -> Option<MagicSchool> {
        match self {
            Profession::Animist => Some(MagicSchool::Animism),
            Profession::Elementalist => Some(MagicSchool::Elementalism),
            Profession::Mentalist => Some(MagicSchool::Mentalism),
            _ => None,
        }
    }

    pub fn is_caster(&self) -> bool {
        self.magic_school().is_some()
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Profession {
    type Err = DomainError;

    /// Accepts "Mage (Animist)" as well as the bare school title "animist".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        Profession::all()
            .iter()
            .copied()
            .find(|profession| {
                let name = catalog_key(profession.display_name());
                name == key || (profession.is_caster() && name == format!("mage{key}"))
            })
            .ok_or_else(|| DomainError::invalid_catalog_value("profession", s))
    }
}
