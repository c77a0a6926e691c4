//! Character generation errors.

use crate::infrastructure::ports::StoreError;
use dragonbane_domain::DomainError;

/// Errors that can occur while generating a batch of characters.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl GenerateError {
    /// True when the filters were too narrow for the attempt budget.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_generation_exhausted())
    }
}
