//! Character generation use cases.
//!
//! Rolls characters through the domain generator, optionally asks the
//! narrator for a name, appearance and background, and optionally files the
//! result in the library.

mod error;

pub use error::GenerateError;

use std::sync::Arc;

use dragonbane_domain::{Character, CharacterGenerator, GenerationFilters, RandomSource};

use crate::infrastructure::ports::{CharacterStore, Narrator};

/// Largest batch a single request may ask for.
pub const MAX_BATCH: u32 = 100;

// =============================================================================
// Request / Result Types
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Characters to roll; clamped to `1..=MAX_BATCH`
    pub count: u32,
    pub filters: GenerationFilters,
    pub narrate: bool,
    pub save: bool,
}

/// One character from a batch and what happened to it.
#[derive(Debug, Clone)]
pub struct GeneratedCharacter {
    pub character: Character,
    pub saved: bool,
    /// Set when narration was requested but failed; the character is kept
    /// with its placeholder name.
    pub narration_error: Option<String>,
}

// =============================================================================
// Use Cases
// =============================================================================

pub struct GenerateUseCases {
    generator: Arc<CharacterGenerator>,
    narrator: Arc<dyn Narrator>,
    store: Arc<dyn CharacterStore>,
}

impl GenerateUseCases {
    pub fn new(
        generator: Arc<CharacterGenerator>,
        narrator: Arc<dyn Narrator>,
        store: Arc<dyn CharacterStore>,
    ) -> Self {
        Self {
            generator,
            narrator,
            store,
        }
    }

    /// Roll a batch of characters.
    ///
    /// Filter exhaustion aborts the batch. A narration failure does not: the
    /// character keeps its placeholder name and is still saved if asked.
    pub async fn execute(
        &self,
        rng: &dyn RandomSource,
        request: GenerateRequest,
    ) -> Result<Vec<GeneratedCharacter>, GenerateError> {
        let count = request.count.clamp(1, MAX_BATCH);
        let mut results = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let mut character = self.generator.generate_matching(rng, &request.filters)?;

            let narration_error = if request.narrate {
                self.narrate(&mut character).await.err()
            } else {
                None
            };

            if request.save {
                self.store.save(&character).await?;
            }

            tracing::info!(
                character_id = %character.id,
                kin = %character.kin,
                profession = %character.profession,
                narrated = character.narrated,
                saved = request.save,
                "Generated character"
            );

            results.push(GeneratedCharacter {
                character,
                saved: request.save,
                narration_error,
            });
        }

        Ok(results)
    }

    async fn narrate(&self, character: &mut Character) -> Result<(), String> {
        let summary = self.narrator.describe(character).await.map_err(|e| {
            tracing::warn!(character_id = %character.id, error = %e, "Narration failed");
            e.to_string()
        })?;

        character.apply_narrative(summary.into()).map_err(|e| {
            tracing::warn!(character_id = %character.id, error = %e, "Narrative rejected");
            e.to_string()
        })
    }
}
