//! The six attribute scores of a character.

use serde::{Deserialize, Serialize};

use crate::types::{Age, Attribute};

/// Attribute scores, one integer per [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    pub strength: i32,
    pub constitution: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub willpower: i32,
    pub charisma: i32,
}

impl Attributes {
    pub fn new(
        strength: i32,
        constitution: i32,
        agility: i32,
        intelligence: i32,
        willpower: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            constitution,
            agility,
            intelligence,
            willpower,
            charisma,
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Constitution => self.constitution,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Willpower => self.willpower,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Agility => &mut self.agility,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Willpower => &mut self.willpower,
            Attribute::Charisma => &mut self.charisma,
        };
        *slot = value;
    }

    /// Apply the age bracket's adjustments once. Scores are not clamped.
    pub fn with_age_modifiers(mut self, age: Age) -> Self {
        for (attribute, delta) in age.attribute_modifiers() {
            self.set(*attribute, self.get(*attribute) + delta);
        }
        self
    }

    /// Scores in canonical attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::all().iter().map(move |a| (*a, self.get(*a)))
    }
}
