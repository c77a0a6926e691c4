//! Heroic abilities.
//!
//! The catalog holds the 44 abilities a character can learn plus the innate
//! kin abilities. Membership is the only validity rule, so the whole catalog
//! is declared as a single name table.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog_key;

macro_rules! heroic_abilities {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A heroic ability, serialized by its printed name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum HeroicAbility {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl HeroicAbility {
            pub fn all() -> &'static [HeroicAbility] {
                &[$(HeroicAbility::$variant),+]
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $(HeroicAbility::$variant => $name,)+
                }
            }
        }
    };
}

heroic_abilities! {
    Assassin => "Assassin",
    Backstabbing => "Backstabbing",
    BattleCry => "Battle Cry",
    Berserk => "Berserk",
    Catlike => "Catlike",
    Companion => "Companion",
    Contortionist => "Contortionist",
    Defensive => "Defensive",
    DeflectArrow => "Deflect Arrow",
    Disguise => "Disguise",
    DoubleSlash => "Double Slash",
    Dragonslayer => "Dragonslayer",
    DualWield => "Dual Wield",
    EagleEye => "Eagle Eye",
    FastFootwork => "Fast Footwork",
    FastHealer => "Fast Healer",
    Fearless => "Fearless",
    Focused => "Focused",
    Guardian => "Guardian",
    Insight => "Insight",
    Intuition => "Intuition",
    IronFist => "Iron Fist",
    IronGrip => "Iron Grip",
    LightningFast => "Lightning Fast",
    LoneWolf => "Lone Wolf",
    MagicTalent => "Magic Talent",
    MassiveBlow => "Massive Blow",
    MasterBlacksmith => "Master Blacksmith",
    MasterCarpenter => "Master Carpenter",
    MasterChef => "Master Chef",
    MasterSpellcaster => "Master Spellcaster",
    MasterTanner => "Master Tanner",
    MonsterHunter => "Monster Hunter",
    Musician => "Musician",
    Pathfinder => "Pathfinder",
    Quartermaster => "Quartermaster",
    Robust => "Robust",
    SeaLegs => "Sea Legs",
    ShieldBlock => "Shield Block",
    ThrowingArm => "Throwing Arm",
    TreasureHunter => "Treasure Hunter",
    TwinShot => "Twin Shot",
    Veteran => "Veteran",
    Weasel => "Weasel",
    // Innate kin abilities
    Adaptive => "Adaptive",
    HardToCatch => "Hard to Catch",
    Unforgiving => "Unforgiving",
    InnerPeace => "Inner Peace",
    IllTempered => "Ill-Tempered",
    WebbedFeet => "Webbed Feet",
    HuntingInstinct => "Hunting Instinct",
    Resilient => "Resilient",
    BodySlam => "Body Slam",
    Tough => "Tough",
    NineLives => "Nine Lives",
    Leaping => "Leaping",
    Wings => "Wings",
    Camouflage => "Camouflage",
    RaiseSpirits => "Raise Spirits",
}

impl fmt::Display for HeroicAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for HeroicAbility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        HeroicAbility::all()
            .iter()
            .copied()
            .find(|ability| catalog_key(ability.display_name()) == key)
            .ok_or_else(|| DomainError::invalid_catalog_value("heroic ability", s))
    }
}
