//! Kin (the game's term for a character's people) and their innate traits.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{catalog_key, HeroicAbility};

/// Rarity tier a kin is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KinCategory {
    Common,
    Nightkin,
    Rare,
}

impl KinCategory {
    /// Kin belonging to this tier, in catalog order.
    pub fn members(&self) -> &'static [Kin] {
        match self {
            KinCategory::Common => &[
                Kin::Human,
                Kin::Halfling,
                Kin::Dwarf,
                Kin::Elf,
                Kin::Mallard,
                Kin::Wolfkin,
            ],
            KinCategory::Nightkin => &[Kin::Goblin, Kin::Hobgoblin, Kin::Ogre, Kin::Orc],
            KinCategory::Rare => &[
                Kin::CatPeople,
                Kin::FrogPeople,
                Kin::Karkion,
                Kin::LizardPeople,
                Kin::Satyr,
            ],
        }
    }
}

/// A playable kin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kin {
    Human,
    Halfling,
    Dwarf,
    Elf,
    Mallard,
    Wolfkin,
    Goblin,
    Hobgoblin,
    Ogre,
    Orc,
    #[serde(rename = "Cat People")]
    CatPeople,
    #[serde(rename = "Frog People")]
    FrogPeople,
    Karkion,
    #[serde(rename = "Lizard People")]
    LizardPeople,
    Satyr,
}

impl Kin {
    pub fn all() -> &'static [Kin] {
        &[
            Kin::Human,
            Kin::Halfling,
            Kin::Dwarf,
            Kin::Elf,
            Kin::Mallard,
            Kin::Wolfkin,
            Kin::Goblin,
            Kin::Hobgoblin,
            Kin::Ogre,
            Kin::Orc,
            Kin::CatPeople,
            Kin::FrogPeople,
            Kin::Karkion,
            Kin::LizardPeople,
            Kin::Satyr,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Kin::Human => "Human",
            Kin::Halfling => "Halfling",
            Kin::Dwarf => "Dwarf",
            Kin::Elf => "Elf",
            Kin::Mallard => "Mallard",
            Kin::Wolfkin => "Wolfkin",
            Kin::Goblin => "Goblin",
            Kin::Hobgoblin => "Hobgoblin",
            Kin::Ogre => "Ogre",
            Kin::Orc => "Orc",
            Kin::CatPeople => "Cat People",
            Kin::FrogPeople => "Frog People",
            Kin::Karkion => "Karkion",
            Kin::LizardPeople => "Lizard People",
            Kin::Satyr => "Satyr",
        }
    }

    pub fn category(&self) -> KinCategory {
        match self {
            Kin::Human | Kin::Halfling | Kin::Dwarf | Kin::Elf | Kin::Mallard | Kin::Wolfkin => {
                KinCategory::Common
            }
            Kin::Goblin | Kin::Hobgoblin | Kin::Ogre | Kin::Orc => KinCategory::Nightkin,
            Kin::CatPeople | Kin::FrogPeople | Kin::Karkion | Kin::LizardPeople | Kin::Satyr => {
                KinCategory::Rare
            }
        }
    }

    /// Heroic abilities every member of this kin starts with.
    pub fn innate_abilities(&self) -> &'static [HeroicAbility] {
        match self {
            Kin::Human => &[HeroicAbility::Adaptive],
            Kin::Halfling => &[HeroicAbility::HardToCatch],
            Kin::Dwarf => &[HeroicAbility::Unforgiving],
            Kin::Elf => &[HeroicAbility::InnerPeace],
            Kin::Mallard => &[HeroicAbility::IllTempered, HeroicAbility::WebbedFeet],
            Kin::Wolfkin => &[HeroicAbility::HuntingInstinct],
            Kin::Goblin => &[HeroicAbility::Resilient],
            Kin::Hobgoblin => &[HeroicAbility::Fearless],
            Kin::Ogre => &[HeroicAbility::BodySlam],
            Kin::Orc => &[HeroicAbility::Tough],
            Kin::CatPeople => &[HeroicAbility::NineLives],
            Kin::FrogPeople => &[HeroicAbility::Leaping],
            Kin::Karkion => &[HeroicAbility::Wings],
            Kin::LizardPeople => &[HeroicAbility::Camouflage],
            Kin::Satyr => &[HeroicAbility::RaiseSpirits],
        }
    }

    /// Base movement before the agility adjustment.
    pub fn base_movement(&self) -> i32 {
        match self {
            Kin::Halfling | Kin::Dwarf | Kin::Mallard => 8,
            Kin::Wolfkin => 12,
            _ => 10,
        }
    }

    /// Name of the appearance wordlist for this kin, e.g. `appearance_catpeople`.
    pub fn appearance_resource(&self) -> String {
        format!("appearance_{}", catalog_key(self.display_name()))
    }
}

impl fmt::Display for Kin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Kin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        Kin::all()
            .iter()
            .copied()
            .find(|kin| catalog_key(kin.display_name()) == key)
            .ok_or_else(|| DomainError::invalid_catalog_value("kin", s))
    }
}
