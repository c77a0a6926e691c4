//! Character sheet operation errors.

use crate::infrastructure::ports::StoreError;
use dragonbane_domain::CharacterId;

/// Errors that can occur while adopting a character onto a sheet.
#[derive(Debug, thiserror::Error)]
pub enum CharacterSheetError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
