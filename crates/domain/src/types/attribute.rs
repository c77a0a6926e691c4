//! The six core attributes.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog_key;

/// A core attribute, in canonical sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Strength,
    Constitution,
    Agility,
    Intelligence,
    Willpower,
    Charisma,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Constitution,
            Attribute::Agility,
            Attribute::Intelligence,
            Attribute::Willpower,
            Attribute::Charisma,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Constitution => "Constitution",
            Attribute::Agility => "Agility",
            Attribute::Intelligence => "Intelligence",
            Attribute::Willpower => "Willpower",
            Attribute::Charisma => "Charisma",
        }
    }

    /// Three-letter abbreviation used on the printed sheet.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Constitution => "CON",
            Attribute::Agility => "AGL",
            Attribute::Intelligence => "INT",
            Attribute::Willpower => "WIL",
            Attribute::Charisma => "CHA",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = catalog_key(s);
        Attribute::all()
            .iter()
            .copied()
            .find(|a| catalog_key(a.display_name()) == key || catalog_key(a.abbreviation()) == key)
            .ok_or_else(|| DomainError::invalid_catalog_value("attribute", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("Strength".parse::<Attribute>().unwrap(), Attribute::Strength);
        assert_eq!("agl".parse::<Attribute>().unwrap(), Attribute::Agility);
        assert!("luck".parse::<Attribute>().is_err());
    }
}
