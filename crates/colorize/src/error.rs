use entities::EntityError;
use thiserror::Error;

/// Errors produced by the colorization engine.
///
/// Configuration errors are fatal: they abort before any document is
/// processed. Entity errors reject one document's input and leave sibling
/// documents untouched.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ColorizeError {
    /// Invalid engine configuration (zero palette, reserved version).
    #[error("invalid colorize config: {0}")]
    InvalidConfig(String),

    /// The document or its entity set failed validation.
    #[error("invalid entity input: {0}")]
    Entity(#[from] EntityError),
}
