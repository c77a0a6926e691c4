//! Repository port for the character library.

use async_trait::async_trait;
use dragonbane_domain::{Character, CharacterId, Kin, Profession};
use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// Page size used when the caller doesn't ask for one.
pub const DEFAULT_LIST_LIMIT: u32 = 50;
/// Largest page the store will return.
pub const MAX_LIST_LIMIT: u32 = 200;

// =============================================================================
// Query Types
// =============================================================================

/// Filter over stored characters.
///
/// Each set is an OR over its members; an empty set places no constraint.
/// The two sets are ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterQuery {
    #[serde(default)]
    pub kin: Vec<Kin>,
    #[serde(default)]
    pub professions: Vec<Profession>,
}

impl CharacterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kin(mut self, kin: impl IntoIterator<Item = Kin>) -> Self {
        for k in kin {
            if !self.kin.contains(&k) {
                self.kin.push(k);
            }
        }
        self
    }

    pub fn with_professions(mut self, professions: impl IntoIterator<Item = Profession>) -> Self {
        for p in professions {
            if !self.professions.contains(&p) {
                self.professions.push(p);
            }
        }
        self
    }
}

/// Clamp a requested page size into `1..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}

// =============================================================================
// Character Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Insert or replace a character.
    async fn save(&self, character: &Character) -> Result<(), StoreError>;
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;
    /// Newest first, at most `limit` rows (already clamped by the caller).
    async fn list(
        &self,
        query: &CharacterQuery,
        limit: u32,
    ) -> Result<Vec<Character>, StoreError>;
    /// One stored character matching the query, chosen uniformly.
    async fn random(&self, query: &CharacterQuery) -> Result<Option<Character>, StoreError>;
    /// Fails with `NotFound` when no row had this id.
    async fn delete(&self, id: CharacterId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_query_has_no_constraints() {
        let query = CharacterQuery::new();
        assert!(query.kin.is_empty());
        assert!(query.professions.is_empty());
    }

    #[test]
    fn builders_drop_duplicates_and_keep_order() {
        let query = CharacterQuery::new()
            .with_kin([Kin::Elf, Kin::Dwarf, Kin::Elf])
            .with_kin([Kin::Dwarf, Kin::Orc])
            .with_professions([Profession::Hunter, Profession::Hunter]);
        assert_eq!(query.kin, vec![Kin::Elf, Kin::Dwarf, Kin::Orc]);
        assert_eq!(query.professions, vec![Profession::Hunter]);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(clamp_limit(None), DEFAULT_LIST_LIMIT);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(10_000)), MAX_LIST_LIMIT);
        assert_eq!(clamp_limit(Some(7)), 7);
    }
}
