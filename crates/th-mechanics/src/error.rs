//! Error types for the mechanics helpers.

/// Errors that can occur when parsing mechanics input strictly.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// A combat action name was not recognised.
    #[error("unknown combat action: {0}")]
    UnknownAction(String),

    /// A puzzle difficulty name was not recognised.
    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
