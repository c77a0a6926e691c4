//! Character age bracket.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{catalog_key, Attribute};

/// Age bracket rolled at creation.
///
/// Age decides how many extra trained skills a character picks up and nudges
/// a handful of attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Age {
    Young,
    Adult,
    Old,
}

impl Age {
    pub fn all() -> &'static [Age] {
        &[Age::Young, Age::Adult, Age::Old]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Age::Young => "Young",
            Age::Adult => "Adult",
            Age::Old => "Old",
        }
    }

    /// Map a 1d6 result onto an age bracket (1-3 young, 4-5 adult, 6 old).
    pub fn from_d6(roll: i32) -> Self {
        match roll {
            i32::MIN..=3 => Age::Young,
            4..=5 => Age::Adult,
            _ => Age::Old,
        }
    }

    /// Number of trained skills chosen freely on top of the six profession skills.
    pub fn bonus_skill_count(&self) -> usize {
        match self {
            Age::Young => 2,
            Age::Adult => 4,
            Age::Old => 6,
        }
    }

    /// Attribute adjustments, applied once after the rolls are assigned.
    pub fn attribute_modifiers(&self) -> &'static [(Attribute, i32)] {
        match self {
            Age::Young => &[(Attribute::Agility, 1), (Attribute::Constitution, 1)],
            Age::Adult => &[],
            Age::Old => &[
                (Attribute::Strength, -2),
                (Attribute::Agility, -2),
                (Attribute::Constitution, -2),
                (Attribute::Intelligence, 1),
                (Attribute::Willpower, 1),
            ],
        }
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Age {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        Age::all()
            .iter()
            .copied()
            .find(|age| catalog_key(age.display_name()) == key)
            .ok_or_else(|| DomainError::invalid_catalog_value("age", s))
    }
}
