//! Application state and composition.

use std::sync::Arc;

use dragonbane_domain::{CharacterGenerator, Wordlists};

use crate::config::AppConfig;
use crate::infrastructure::{
    clock::SystemClock,
    openai::OpenAiNarrator,
    ports::{CharacterStore, ClockPort, Narrator, StoreError},
    resilient::{ResilientNarrator, RetryConfig},
    sqlite::SqliteCharacterStore,
    wordlists::FileWordlists,
};
use crate::use_cases;

/// Main application state.
///
/// Every handle is constructed explicitly and injected; nothing is global.
pub struct App {
    pub use_cases: UseCases,
    pub generator: Arc<CharacterGenerator>,
}

/// Container for all use cases.
pub struct UseCases {
    pub generate: use_cases::GenerateUseCases,
    pub library: use_cases::LibraryUseCases,
    pub character_sheet: use_cases::CharacterSheetUseCases,
}

impl App {
    /// Wire an application from already-built ports.
    pub fn new(
        wordlists: Arc<dyn Wordlists>,
        store: Arc<dyn CharacterStore>,
        narrator: Arc<dyn Narrator>,
        max_attempts: u32,
    ) -> Self {
        let generator =
            Arc::new(CharacterGenerator::new(wordlists).with_max_attempts(max_attempts));

        let use_cases = UseCases {
            generate: use_cases::GenerateUseCases::new(
                generator.clone(),
                narrator,
                store.clone(),
            ),
            library: use_cases::LibraryUseCases::new(store.clone()),
            character_sheet: use_cases::CharacterSheetUseCases::new(store),
        };

        Self {
            use_cases,
            generator,
        }
    }

    /// Build the production adapters described by `config`.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let wordlists = Arc::new(FileWordlists::new(&config.data_dir));
        let store = Arc::new(SqliteCharacterStore::new(&config.database_path, clock).await?);

        let openai = Arc::new(OpenAiNarrator::new(
            &config.openai_server,
            &config.openai_api_key,
            &config.openai_model,
        ));
        let retry_config = RetryConfig::default();
        tracing::debug!(
            server = %config.openai_server,
            model = %config.openai_model,
            max_retries = retry_config.max_retries,
            "Narrator configured"
        );
        let narrator = Arc::new(ResilientNarrator::new(openai, retry_config));

        Ok(Self::new(wordlists, store, narrator, config.max_attempts))
    }
}
