//! Character library use cases: browse, draw, fetch and remove stored characters.

mod error;

pub use error::LibraryError;

use std::sync::Arc;

use dragonbane_domain::{Character, CharacterId};

use crate::infrastructure::ports::{clamp_limit, CharacterQuery, CharacterStore};

pub struct LibraryUseCases {
    store: Arc<dyn CharacterStore>,
}

impl LibraryUseCases {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    /// Newest first; `limit` defaults to 50 and is clamped to 1..=200.
    pub async fn list(
        &self,
        query: &CharacterQuery,
        limit: Option<u32>,
    ) -> Result<Vec<Character>, LibraryError> {
        let limit = clamp_limit(limit);
        let characters = self.store.list(query, limit).await?;
        tracing::debug!(limit, found = characters.len(), "Listed characters");
        Ok(characters)
    }

    /// A uniformly chosen stored character, or `None` when nothing matches.
    pub async fn random(&self, query: &CharacterQuery) -> Result<Option<Character>, LibraryError> {
        Ok(self.store.random(query).await?)
    }

    pub async fn get(&self, id: CharacterId) -> Result<Character, LibraryError> {
        self.store
            .get(id)
            .await?
            .ok_or(LibraryError::CharacterNotFound(id))
    }

    pub async fn delete(&self, id: CharacterId) -> Result<(), LibraryError> {
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(character_id = %id, "Deleted character");
                Ok(())
            }
            Err(e) if e.is_not_found() => Err(LibraryError::CharacterNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockCharacterStore, StoreError, MAX_LIST_LIMIT};
    use crate::test_fixtures::sample_character;
    use dragonbane_domain::Kin;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn list_clamps_limit_and_passes_query() {
        let query = CharacterQuery::new().with_kin([Kin::Elf]);
        let expected = query.clone();
        let mut store = MockCharacterStore::new();
        store
            .expect_list()
            .withf(move |q, limit| *q == expected && *limit == MAX_LIST_LIMIT)
            .returning(|_, _| Ok(vec![sample_character()]));

        let library = LibraryUseCases::new(Arc::new(store));
        let found = library.list(&query, Some(5000)).await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn missing_character_is_not_found() {
        let id = CharacterId::new();
        let mut store = MockCharacterStore::new();
        store.expect_get().with(eq(id)).returning(|_| Ok(None));

        let library = LibraryUseCases::new(Arc::new(store));
        let err = library.get(id).await.unwrap_err();
        assert!(matches!(err, LibraryError::CharacterNotFound(found) if found == id));
    }

    #[tokio::test]
    async fn delete_maps_store_not_found() {
        let id = CharacterId::new();
        let mut store = MockCharacterStore::new();
        store
            .expect_delete()
            .returning(|id| Err(StoreError::not_found("Character", id)));

        let library = LibraryUseCases::new(Arc::new(store));
        assert!(matches!(
            library.delete(id).await,
            Err(LibraryError::CharacterNotFound(_))
        ));
    }

    #[tokio::test]
    async fn random_passes_through_empty_library() {
        let mut store = MockCharacterStore::new();
        store.expect_random().returning(|_| Ok(None));

        let library = LibraryUseCases::new(Arc::new(store));
        assert!(library.random(&CharacterQuery::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn database_errors_surface() {
        let mut store = MockCharacterStore::new();
        store
            .expect_delete()
            .returning(|_| Err(StoreError::database("delete", "locked")));

        let library = LibraryUseCases::new(Arc::new(store));
        assert!(matches!(
            library.delete(CharacterId::new()).await,
            Err(LibraryError::Store(_))
        ));
    }
}
