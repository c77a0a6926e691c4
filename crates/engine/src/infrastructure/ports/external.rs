//! External service ports: narrative enrichment.

use async_trait::async_trait;
use dragonbane_domain::{Character, Narrative};
use serde::{Deserialize, Serialize};

use super::error::NarratorError;

// =============================================================================
// Narrative Types
// =============================================================================

/// What the model returns for a character: a name, a look, and a history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NarrativeSummary {
    pub name: String,
    #[serde(default)]
    pub appearance: String,
    #[serde(default)]
    pub background: String,
}

impl From<NarrativeSummary> for Narrative {
    fn from(summary: NarrativeSummary) -> Self {
        Narrative {
            name: summary.name,
            appearance: summary.appearance,
            background: summary.background,
        }
    }
}

// =============================================================================
// Narrator Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn describe(&self, character: &Character) -> Result<NarrativeSummary, NarratorError>;
}
