//! Closed catalogs of the Dragonbane ruleset.
//!
//! Every catalog is an exhaustive enum with a canonical `all()` ordering, a
//! display name (the string stored in records and printed on sheets), and a
//! forgiving `FromStr` that ignores case, spacing and punctuation.

mod age;
mod attribute;
mod heroic_ability;
mod kin;
mod magic;
mod profession;
mod skill;

pub use age::Age;
pub use attribute::Attribute;
pub use heroic_ability::HeroicAbility;
pub use kin::{Kin, KinCategory};
pub use magic::{MagicSchool, SpellTier};
pub use profession::Profession;
pub use skill::Skill;

/// Lookup key used when matching free text against catalog display names.
///
/// "Cat People", "catpeople" and "CAT-PEOPLE" all share the key `catpeople`.
pub(crate) fn catalog_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
