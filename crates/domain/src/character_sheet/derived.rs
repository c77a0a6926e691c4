//! Values derived from attributes: skill levels, movement, carrying capacity.

use crate::entities::Character;
use crate::types::{Kin, Skill};

/// Base chance for an attribute score.
pub fn base_chance(score: i32) -> i32 {
    match score {
        i32::MIN..=5 => 3,
        6..=8 => 4,
        9..=12 => 5,
        13..=15 => 6,
        _ => 7,
    }
}

/// Level of a trained skill governed by an attribute with this score.
pub fn trained_level(score: i32) -> i32 {
    base_chance(score) * 2
}

/// Skill level: base chance of the governing attribute, doubled when trained.
pub fn skill_level(skill: Skill, character: &Character) -> i32 {
    let score = character.attributes.get(skill.attribute());
    if character.is_trained(skill) {
        trained_level(score)
    } else {
        base_chance(score)
    }
}

/// Level of every skill, in catalog order.
pub fn skill_levels(character: &Character) -> Vec<(Skill, i32)> {
    Skill::all()
        .iter()
        .map(|skill| (*skill, skill_level(*skill, character)))
        .collect()
}

pub fn agility_movement_modifier(agility: i32) -> i32 {
    match agility {
        i32::MIN..=6 => -4,
        7..=9 => -2,
        10..=12 => 0,
        13..=15 => 2,
        _ => 4,
    }
}

/// Kin base movement plus the agility modifier, never below zero.
pub fn movement(kin: Kin, agility: i32) -> i32 {
    (kin.base_movement() + agility_movement_modifier(agility)).max(0)
}

/// Half strength rounded up, never below zero.
pub fn encumbrance_limit(strength: i32) -> i32 {
    ((strength + 1) / 2).max(0)
}
