//! Starting gear packages.
//!
//! Every profession has three packages picked by a d6 (1-2, 3-4, 5-6) plus a
//! rations die and a silver die. Rolling order is package, rations, silver,
//! then any weapon choice inside the package.

use super::sampling::choose;
use crate::types::Profession;
use crate::value_objects::{DiceFormula, RandomSource};

/// One line of a gear package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GearItem {
    Fixed(&'static str),
    /// Uniform choice between alternatives, e.g. a fighter's main weapon.
    OneOf(&'static [&'static str]),
}

/// Dice and packages for one profession.
#[derive(Debug, Clone, Copy)]
pub struct GearTable {
    pub rations_die: u8,
    pub silver_die: u8,
    pub packages: [&'static [GearItem]; 3],
}

use GearItem::{Fixed, OneOf};

const ARTISAN: GearTable = GearTable {
    rations_die: 8,
    silver_die: 8,
    packages: [
        &[
            Fixed("Warhammer, Light"),
            Fixed("Leather Armour"),
            Fixed("Blacksmithing Tools"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Handaxe"),
            Fixed("Leather Armour"),
            Fixed("Carpentry Tools"),
            Fixed("Torch"),
            Fixed("Rope (10 meters)"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Leather Armour"),
            Fixed("Tanning Tools"),
            Fixed("Lantern"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const BARD: GearTable = GearTable {
    rations_die: 6,
    silver_die: 8,
    packages: [
        &[
            Fixed("Lyre"),
            Fixed("Knife"),
            Fixed("Oil Lamp"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Flute"),
            Fixed("Dagger"),
            Fixed("Rope (10 meters)"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Horn"),
            Fixed("Knife"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const FIGHTER: GearTable = GearTable {
    rations_die: 6,
    silver_die: 6,
    packages: [
        &[
            OneOf(&["Broadsword", "Battleaxe", "Morningstar"]),
            Fixed("Shield"),
            Fixed("Chainmail Armour"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            OneOf(&["Short Sword", "Handaxe", "Short Spear"]),
            Fixed("Crossbow, Light"),
            Fixed("Quiver of Arrows, Iron Head"),
            Fixed("Leather Armour"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Long Spear"),
            Fixed("Studded Leather Armour"),
            Fixed("Open Helmet"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const HUNTER: GearTable = GearTable {
    rations_die: 8,
    silver_die: 6,
    packages: [
        &[
            Fixed("Dagger"),
            Fixed("Short Bow"),
            Fixed("Quiver of Arrows, Iron Head"),
            Fixed("Leather Armour"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
            Fixed("Rope (10 meters)"),
            Fixed("Snare"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Longbow"),
            Fixed("Quiver of Arrows, Iron Head"),
            Fixed("Leather Armour"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
            Fixed("Rope (10 meters)"),
            Fixed("Fishing Rod"),
        ],
        &[
            Fixed("Dagger"),
            Fixed("Sling"),
            Fixed("Leather Armour"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
            Fixed("Rope (10 meters)"),
            Fixed("Snare"),
        ],
    ],
};

const KNIGHT: GearTable = GearTable {
    rations_die: 6,
    silver_die: 12,
    packages: [
        &[
            OneOf(&["Broadsword", "Morningstar"]),
            Fixed("Shield, Small"),
            Fixed("Plate Armor"),
            Fixed("Great Helm"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            OneOf(&["Flail", "Warhammer"]),
            Fixed("Shield, Small"),
            Fixed("Chainmail Armour"),
            Fixed("Open Helmet"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Short Sword"),
            Fixed("Lance"),
            Fixed("Shield, Small"),
            Fixed("Chainmail Armour"),
            Fixed("Open Helmet"),
            Fixed("Combat Trained Horse"),
        ],
    ],
};

const MAGE: GearTable = GearTable {
    rations_die: 6,
    silver_die: 8,
    packages: [
        &[
            Fixed("Staff"),
            Fixed("Orbuculum"),
            Fixed("Grimoire"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Wand"),
            Fixed("Grimoire"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Amulet"),
            Fixed("Sleeping Fur"),
            Fixed("Grimoire"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const MARINER: GearTable = GearTable {
    rations_die: 8,
    silver_die: 10,
    packages: [
        &[
            Fixed("Dagger"),
            Fixed("Short Bow"),
            Fixed("Quiver of Arrows, Iron Head"),
            Fixed("Rope (10 meters)"),
            Fixed("Grappling Hook"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Scimitar"),
            Fixed("Leather Armour"),
            Fixed("Rope (10 meters)"),
            Fixed("Grappling Hook"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Trident"),
            Fixed("Spyglass"),
            Fixed("Rope (10 meters)"),
            Fixed("Grappling Hook"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const MERCHANT: GearTable = GearTable {
    rations_die: 6,
    silver_die: 12,
    packages: [
        &[
            Fixed("Dagger"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
            Fixed("Rope (10 meters)"),
            Fixed("Donkey"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Sleeping Fur"),
            Fixed("Lantern"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
            Fixed("Field Kitchen"),
            Fixed("Donkey"),
            Fixed("Cart"),
        ],
        &[
            Fixed("Dagger"),
            Fixed("Sleeping Fur"),
            Fixed("Tent, Large"),
            Fixed("Oil Lamp"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
            Fixed("Backpack"),
        ],
    ],
};

const SCHOLAR: GearTable = GearTable {
    rations_die: 6,
    silver_die: 10,
    packages: [
        &[
            Fixed("Staff"),
            Fixed("Notebook"),
            Fixed("Quill & Ink"),
            Fixed("Sleeping Fur"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Book (any subject)"),
            Fixed("Sleeping Fur"),
            Fixed("Oil Lamp"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Short Sword"),
            Fixed("Bandages (10)"),
            Fixed("Poison, Sleeping (1 dose)"),
            Fixed("Sleeping Fur"),
            Fixed("Lantern"),
            Fixed("Lamp Oil"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

const THIEF: GearTable = GearTable {
    rations_die: 6,
    silver_die: 10,
    packages: [
        &[
            Fixed("Dagger"),
            Fixed("Sling"),
            Fixed("Rope (10 meters)"),
            Fixed("Grappling Hook"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("Knife"),
            Fixed("Lockpicks, Simple"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
        &[
            Fixed("2x Dagger"),
            Fixed("Marbles"),
            Fixed("Rope (10 meters)"),
            Fixed("Torch"),
            Fixed("Flint & Tinder"),
        ],
    ],
};

/// Gear table for a profession. The three mage professions share one.
pub fn gear_table(profession: Profession) -> &'static GearTable {
    match profession {
        Profession::Artisan => &ARTISAN,
        Profession::Bard => &BARD,
        Profession::Fighter => &FIGHTER,
        Profession::Hunter => &HUNTER,
        Profession::Knight => &KNIGHT,
        Profession::Animist | Profession::Elementalist | Profession::Mentalist => &MAGE,
        Profession::Mariner => &MARINER,
        Profession::Merchant => &MERCHANT,
        Profession::Scholar => &SCHOLAR,
        Profession::Thief => &THIEF,
    }
}

/// Package index for a d6 roll: 1-2, 3-4, 5-6.
fn package_index(roll: i32) -> usize {
    match roll {
        i32::MIN..=2 => 0,
        3..=4 => 1,
        _ => 2,
    }
}

/// Roll a starting kit. Rations and silver are always the last two lines,
/// as `"<n> Field Rations"` and `"<n> Silver"`.
pub fn roll_gear(rng: &dyn RandomSource, profession: Profession) -> Vec<String> {
    let table = gear_table(profession);
    let roll = DiceFormula::die(6).roll_total(rng);
    let rations = DiceFormula::die(table.rations_die).roll_total(rng);
    let silver = DiceFormula::die(table.silver_die).roll_total(rng);

    let mut gear: Vec<String> = table.packages[package_index(roll)]
        .iter()
        .filter_map(|item| match item {
            Fixed(name) => Some(name.to_string()),
            OneOf(options) => choose(rng, options).map(str::to_string),
        })
        .collect();
    gear.push(format!("{rations} Field Rations"));
    gear.push(format!("{silver} Silver"));
    gear
}
