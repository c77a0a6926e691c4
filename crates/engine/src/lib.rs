//! Dragonbane Engine library.
//!
//! Everything around the pure generator in `dragonbane-domain`: wordlists on
//! disk, the SQLite character library, narrative enrichment over an
//! OpenAI-compatible API, and the `dragonbane` CLI.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration (generate, library, character sheet)
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// Shared fixtures for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::AppConfig;
