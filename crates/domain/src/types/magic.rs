//! Schools of magic and their starting spell catalogs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Power tier of a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpellTier {
    /// Magic tricks, castable without spending much power.
    Trick,
    RankOne,
}

/// The school a caster profession studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagicSchool {
    Animism,
    Elementalism,
    Mentalism,
}

const GENERAL_TRICKS: &[&str] = &[
    "FETCH",
    "FLICK",
    "LIGHT",
    "OPEN/CLOSE",
    "REPAIR CLOTHES",
    "SENSE MAGIC",
];

const GENERAL_RANK_ONE: &[&str] = &["DISPEL", "PROTECTOR"];

impl MagicSchool {
    pub fn all() -> &'static [MagicSchool] {
        &[
            MagicSchool::Animism,
            MagicSchool::Elementalism,
            MagicSchool::Mentalism,
        ]
    }

    /// Name of the school as a secondary skill on the sheet.
    pub fn display_name(&self) -> &'static str {
        match self {
            MagicSchool::Animism => "Animism",
            MagicSchool::Elementalism => "Elementalism",
            MagicSchool::Mentalism => "Mentalism",
        }
    }

    /// Spells open to every caster, regardless of school.
    pub fn general_spells(tier: SpellTier) -> &'static [&'static str] {
        match tier {
            SpellTier::Trick => GENERAL_TRICKS,
            SpellTier::RankOne => GENERAL_RANK_ONE,
        }
    }

    /// Spells specific to this school.
    pub fn school_spells(&self, tier: SpellTier) -> &'static [&'static str] {
        match (self, tier) {
            (MagicSchool::Animism, SpellTier::Trick) => {
                &["BIRDSONG", "CLEAN", "COOK FOOD", "FLORAL TRAIL", "HAIRSTYLE"]
            }
            (MagicSchool::Animism, SpellTier::RankOne) => &[
                "ANIMAL WHISPERER",
                "BANISH",
                "ENSNARING ROOTS",
                "LIGHTNING FLASH",
                "TREAT WOUND",
            ],
            (MagicSchool::Elementalism, SpellTier::Trick) => {
                &["HEAT/CHILL", "IGNITE", "PUFF OF SMOKE"]
            }
            (MagicSchool::Elementalism, SpellTier::RankOne) => {
                &["FIREBALL", "FROST", "GUST OF WIND", "PILLAR", "SHATTER"]
            }
            (MagicSchool::Mentalism, SpellTier::Trick) => {
                &["LOCK/UNLOCK", "MAGIC STOOL", "SLOW FALL"]
            }
            (MagicSchool::Mentalism, SpellTier::RankOne) => {
                &["FARSIGHT", "LEVITATE", "LONGSTRIDER", "POWER FIST", "STONE SKIN"]
            }
        }
    }

    /// School list followed by the general list for the tier.
    pub fn spell_pool(&self, tier: SpellTier) -> Vec<&'static str> {
        self.school_spells(tier)
            .iter()
            .chain(Self::general_spells(tier))
            .copied()
            .collect()
    }
}

impl fmt::Display for MagicSchool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
