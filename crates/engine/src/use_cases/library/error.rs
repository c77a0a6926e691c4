//! Character library errors.

use crate::infrastructure::ports::StoreError;
use dragonbane_domain::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
