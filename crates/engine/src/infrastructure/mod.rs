//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod openai;
pub mod ports;
pub mod resilient;
pub mod sqlite;
pub mod wordlists;
