//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character persistence (SQLite today)
//! - Narrative enrichment (any OpenAI-compatible chat endpoint)
//! - Clock (for testing)
//!
//! Randomness and wordlists are domain ports and are re-exported here so
//! adapters can implement them from one place.

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{clamp_limit, CharacterQuery, CharacterStore, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{NarrativeSummary, Narrator};

// =============================================================================
// Testability Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{NarratorError, StoreError};

// =============================================================================
// Domain Ports
// =============================================================================
pub use dragonbane_domain::{RandomSource, Wordlists};

// =============================================================================
// Mock Exports (test only)
// =============================================================================
#[cfg(test)]
pub use external::MockNarrator;
#[cfg(test)]
pub use repos::MockCharacterStore;
#[cfg(test)]
pub use testing::MockClockPort;
