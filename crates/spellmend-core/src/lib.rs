//! Shared types for the spellmend corrector.
//!
//! - [`word`] -- character-indexed words
//! - [`correction`] -- the per-query match result
//! - [`error`] -- the error taxonomy shared by the engine and the CLI tools

pub mod correction;
pub mod error;
pub mod word;

pub use correction::Correction;
pub use error::SpellmendError;
pub use word::Word;

/// Scalar type of every edit cost and accumulated distance.
///
/// Unsigned, so no cost function can produce a negative value.
pub type Cost = u32;
