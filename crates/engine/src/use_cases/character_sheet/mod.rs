//! Character sheet use cases.
//!
//! Adopting a character projects it onto the printable, editable sheet
//! payload. The projection is lossy: gear that matches no catalog entry ends
//! up as plain inventory.

mod error;

pub use error::CharacterSheetError;

use std::sync::Arc;

use dragonbane_domain::{project_sheet, CharacterId, SheetPayload};

use crate::infrastructure::ports::CharacterStore;

/// Container for character sheet use cases.
pub struct CharacterSheetUseCases {
    store: Arc<dyn CharacterStore>,
}

impl CharacterSheetUseCases {
    pub fn new(store: Arc<dyn CharacterStore>) -> Self {
        Self { store }
    }

    /// Load a stored character and project it onto a fresh sheet.
    pub async fn adopt(
        &self,
        character_id: CharacterId,
        player_name: Option<&str>,
    ) -> Result<SheetPayload, CharacterSheetError> {
        let character = self
            .store
            .get(character_id)
            .await?
            .ok_or(CharacterSheetError::CharacterNotFound(character_id))?;

        let sheet = project_sheet(&character, player_name);

        tracing::info!(
            character_id = %character_id,
            inventory = sheet.inventory.len(),
            "Adopted character onto sheet"
        );

        Ok(sheet)
    }
}
