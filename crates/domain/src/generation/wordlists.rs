//! Flavour text drawn from line-delimited wordlists.

use super::sampling::{choose, draw_n};
use crate::types::Kin;
use crate::value_objects::RandomSource;

pub const WEAKNESSES: &str = "weaknesses";
pub const MEMENTOS: &str = "mementos";

pub const NO_WEAKNESS: &str = "No weakness specified";
pub const NO_MEMENTO: &str = "No memento specified";
pub const NO_APPEARANCE: &str = "No appearance specified";

const APPEARANCE_SEEDS: usize = 2;

/// Source of named wordlists.
///
/// A missing resource is not an error: implementations return an empty list
/// and the selectors fall back to a sentinel.
#[cfg_attr(test, mockall::automock)]
pub trait Wordlists: Send + Sync {
    fn lines(&self, resource: &str) -> Vec<String>;
}

fn non_blank(wordlists: &dyn Wordlists, resource: &str) -> Vec<String> {
    wordlists
        .lines(resource)
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

fn pick_one(rng: &dyn RandomSource, wordlists: &dyn Wordlists, resource: &str, fallback: &str) -> String {
    choose(rng, &non_blank(wordlists, resource)).unwrap_or_else(|| fallback.to_string())
}

pub fn select_weakness(rng: &dyn RandomSource, wordlists: &dyn Wordlists) -> String {
    pick_one(rng, wordlists, WEAKNESSES, NO_WEAKNESS)
}

pub fn select_memento(rng: &dyn RandomSource, wordlists: &dyn Wordlists) -> String {
    pick_one(rng, wordlists, MEMENTOS, NO_MEMENTO)
}

/// Two distinct lines from the kin's appearance list, or the single sentinel.
pub fn select_appearance_seeds(
    rng: &dyn RandomSource,
    wordlists: &dyn Wordlists,
    kin: Kin,
) -> Vec<String> {
    let lines = non_blank(wordlists, &kin.appearance_resource());
    if lines.is_empty() {
        return vec![NO_APPEARANCE.to_string()];
    }
    draw_n(rng, &lines, APPEARANCE_SEEDS)
}
