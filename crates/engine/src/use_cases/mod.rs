//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases orchestrate
//! the domain generator and the infrastructure ports.

pub mod character_sheet;
pub mod generate;
pub mod library;

// Re-export main types
pub use character_sheet::CharacterSheetUseCases;
pub use generate::GenerateUseCases;
pub use library::LibraryUseCases;
