//! Equipment catalog lookups for free-text gear lines.
//!
//! Matching is deliberately loose: a gear line is normalized, compared
//! against every preset alias for an exact hit, and only then scanned for an
//! alias it contains. "Leather Armour", "leather-armour" and "LEATHER ARMOUR"
//! all land on the same preset.

use super::{ArmourBanes, ArmourBlock, HelmetBanes, HelmetBlock, WeaponEntry};

/// Lowercase, treat `-`, `,` and other punctuation as spaces, spell "armor"
/// as "armour", and collapse runs of whitespace.
pub fn normalize_equipment_string(value: &str) -> String {
    let lowered = value
        .to_lowercase()
        .replace(['-', ','], " ")
        .replace("armor", "armour");
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() || c == ' ' { c } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn aliases(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| normalize_equipment_string(key)).collect()
}

/// Exact alias match first, then the first preset with an alias contained in
/// the line.
fn lookup<'a, T>(raw: &str, presets: &'a [(&'static [&'static str], T)]) -> Option<&'a T> {
    let normalized = normalize_equipment_string(raw);
    if normalized.is_empty() {
        return None;
    }

    presets
        .iter()
        .find(|(keys, _)| aliases(keys).iter().any(|alias| *alias == normalized))
        .or_else(|| {
            presets.iter().find(|(keys, _)| {
                aliases(keys)
                    .iter()
                    .any(|alias| normalized.contains(alias.as_str()))
            })
        })
        .map(|(_, preset)| preset)
}

// =============================================================================
// Armour and helmets
// =============================================================================

struct ArmourPreset {
    armour_type: &'static str,
    rating: i32,
    banes: ArmourBanes,
}

const fn armour_banes(sneaking: bool, evade: bool, acrobatics: bool) -> ArmourBanes {
    ArmourBanes {
        sneaking,
        evade,
        acrobatics,
    }
}

const ARMOUR: &[(&[&str], ArmourPreset)] = &[
    (
        &["leather armour", "leather"],
        ArmourPreset {
            armour_type: "Leather Armour",
            rating: 1,
            banes: armour_banes(false, false, false),
        },
    ),
    (
        &["studded leather armour", "studded leather"],
        ArmourPreset {
            armour_type: "Studded Leather Armour",
            rating: 2,
            banes: armour_banes(true, false, false),
        },
    ),
    (
        &["chainmail armour", "chainmail"],
        ArmourPreset {
            armour_type: "Chainmail",
            rating: 4,
            banes: armour_banes(true, true, false),
        },
    ),
    (
        &["plate armour", "plate"],
        ArmourPreset {
            armour_type: "Plate Armour",
            rating: 6,
            banes: armour_banes(true, true, true),
        },
    ),
];

struct HelmetPreset {
    helmet_type: &'static str,
    rating: i32,
    banes: HelmetBanes,
}

const HELMETS: &[(&[&str], HelmetPreset)] = &[
    (
        &["open helmet"],
        HelmetPreset {
            helmet_type: "Open Helmet",
            rating: 1,
            banes: HelmetBanes {
                awareness: true,
                ranged_attacks: false,
            },
        },
    ),
    (
        &["great helm", "great helmet"],
        HelmetPreset {
            helmet_type: "Great Helm",
            rating: 2,
            banes: HelmetBanes {
                awareness: true,
                ranged_attacks: true,
            },
        },
    ),
];

pub fn match_armour(raw: &str) -> Option<ArmourBlock> {
    lookup(raw, ARMOUR).map(|preset| ArmourBlock {
        armour_type: preset.armour_type.to_string(),
        rating: preset.rating,
        banes: preset.banes,
    })
}

pub fn match_helmet(raw: &str) -> Option<HelmetBlock> {
    lookup(raw, HELMETS).map(|preset| HelmetBlock {
        helmet_type: preset.helmet_type.to_string(),
        rating: preset.rating,
        banes: preset.banes,
    })
}

// =============================================================================
// Weapons
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grip {
    None,
    OneHanded,
    TwoHanded,
}

impl Grip {
    fn sheet_code(self) -> &'static str {
        match self {
            Grip::None => "",
            Grip::OneHanded => "R",
            Grip::TwoHanded => "RL",
        }
    }
}

struct WeaponPreset {
    name: &'static str,
    grip: Grip,
    range: &'static str,
    damage: &'static str,
    durability: i32,
    features: &'static str,
}

const fn weapon(
    name: &'static str,
    grip: Grip,
    range: &'static str,
    damage: &'static str,
    durability: i32,
    features: &'static str,
) -> WeaponPreset {
    WeaponPreset {
        name,
        grip,
        range,
        damage,
        durability,
        features,
    }
}

use Grip::{OneHanded as H1, TwoHanded as H2};

#[rustfmt::skip]
const WEAPONS: &[(&[&str], WeaponPreset)] = &[
    (&["unarmed"], weapon("Unarmed", Grip::None, "1", "D6", 0, "Bludgeoning")),
    (&["blunt object light", "light blunt"], weapon("Light Blunt Object", H1, "STR", "D8", 3, "Bludgeoning, can be thrown")),
    (&["blunt object heavy", "heavy blunt"], weapon("Heavy Blunt Object", H2, "2", "2D8", 3, "Bludgeoning")),
    (&["knife"], weapon("Knife", H1, "STR", "D8", 6, "Subtle, piercing, can be thrown")),
    (&["dagger"], weapon("Dagger", H1, "STR", "D8", 9, "Subtle, piercing, slashing, can be thrown")),
    (&["parrying dagger"], weapon("Parrying Dagger", H1, "1", "D6", 12, "Subtle, piercing, slashing")),
    (&["short sword"], weapon("Short Sword", H1, "2", "D10", 12, "Piercing, slashing")),
    (&["broadsword"], weapon("Broadsword", H1, "2", "2D6", 15, "Piercing, slashing")),
    (&["longsword"], weapon("Longsword", H1, "2", "2D8", 15, "Piercing, slashing")),
    (&["greatsword"], weapon("Greatsword", H2, "2", "2D10", 15, "Piercing, slashing")),
    (&["scimitar"], weapon("Scimitar", H1, "2", "2D6", 12, "Toppling, slashing")),
    (&["handaxe", "hand axe"], weapon("Handaxe", H1, "STR", "2D6", 9, "Toppling, slashing, can be thrown")),
    (&["battleaxe", "battle axe"], weapon("Battleaxe", H1, "2", "2D8", 9, "Toppling, slashing")),
    (&["two handed axe", "great axe"], weapon("Two-Handed Axe", H2, "2", "2D10", 9, "Toppling, slashing")),
    (&["mace"], weapon("Mace", H1, "2", "2D4", 12, "Bludgeoning")),
    (&["morningstar"], weapon("Morningstar", H1, "2", "2D8", 12, "Bludgeoning")),
    (&["flail"], weapon("Flail", H1, "2", "2D8", 0, "Bludgeoning, toppling, cannot be used for parrying")),
    (&["warhammer light"], weapon("Light Warhammer", H1, "2", "2D6", 12, "Bludgeoning, toppling")),
    (&["warhammer heavy"], weapon("Heavy Warhammer", H2, "2", "2D10", 12, "Bludgeoning, toppling")),
    (&["wooden club small", "small club"], weapon("Small Wooden Club", H1, "2", "D8", 9, "Bludgeoning")),
    (&["wooden club large", "large club"], weapon("Large Wooden Club", H2, "2", "2D8", 12, "Bludgeoning")),
    (&["staff"], weapon("Staff", H2, "2", "D8", 9, "Bludgeoning, toppling")),
    (&["short spear"], weapon("Short Spear", H1, "STR×2", "D10", 9, "Piercing, can be thrown")),
    (&["long spear"], weapon("Long Spear", H2, "4", "2D8", 9, "Long, piercing")),
    (&["lance"], weapon("Lance", H1, "4", "2D10", 12, "Long, piercing, requires combat trained mount")),
    (&["halberd"], weapon("Halberd", H2, "4", "2D8", 12, "Long, toppling, piercing, slashing")),
    (&["trident"], weapon("Trident", H1, "STR", "2D6", 9, "Toppling, piercing, can be thrown")),
    (&["shield small", "small shield"], weapon("Small Shield", H1, "2", "D8", 15, "Bludgeoning")),
    (&["shield large", "large shield"], weapon("Large Shield", H1, "2", "D8", 18, "Bludgeoning")),
    (&["sling"], weapon("Sling", H1, "20", "D8", 0, "Bludgeoning, tiny item")),
    (&["short bow"], weapon("Short Bow", H2, "30", "D10", 3, "Piercing, requires quiver")),
    (&["longbow", "long bow"], weapon("Longbow", H2, "100", "D12", 6, "Piercing, requires quiver")),
    (&["crossbow light", "light crossbow"], weapon("Light Crossbow", H2, "40", "2D6", 6, "Piercing, requires quiver, no damage bonus")),
    (&["crossbow heavy", "heavy crossbow"], weapon("Heavy Crossbow", H2, "60", "2D8", 9, "Piercing, requires quiver, no damage bonus")),
    (&["crossbow hand", "hand crossbow"], weapon("Hand Crossbow", H1, "30", "2D6", 6, "Piercing, requires quiver, no damage bonus")),
];

pub fn match_weapon(raw: &str) -> Option<WeaponEntry> {
    lookup(raw, WEAPONS).map(|preset| WeaponEntry {
        name: preset.name.to_string(),
        grip: preset.grip.sheet_code().to_string(),
        range: preset.range.to_string(),
        damage: preset.damage.to_string(),
        durability: preset.durability.max(0),
        features: preset.features.to_string(),
    })
}

// =============================================================================
// Currency
// =============================================================================

/// Coins collected from gear lines such as `"7 Silver"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Currency {
    pub gold: i32,
    pub silver: i32,
    pub copper: i32,
}

impl Currency {
    /// Add the line to the purse if it reads `<n> gold|silver|copper`.
    /// Returns whether the line was consumed.
    pub fn absorb(&mut self, raw: &str) -> bool {
        let normalized = normalize_equipment_string(raw);
        let tokens: Vec<&str> = normalized.split(' ').collect();
        let Some(position) = tokens
            .iter()
            .position(|token| matches!(*token, "gold" | "silver" | "copper"))
        else {
            return false;
        };
        let Some(amount) = position
            .checked_sub(1)
            .and_then(|i| tokens.get(i))
            .and_then(|token| token.parse::<i32>().ok())
        else {
            return false;
        };

        let purse = match tokens[position] {
            "gold" => &mut self.gold,
            "silver" => &mut self.silver,
            _ => &mut self.copper,
        };
        *purse += amount;
        true
    }
}
