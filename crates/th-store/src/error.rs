//! Error types for the progress store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by storage backends and snapshot decoding.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No player is logged in.
    #[error("no player is logged in")]
    NotLoggedIn,

    /// The storage backend refused a write because it is full.
    #[error("storage quota exceeded writing '{key}' ({needed} bytes, {available} available)")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Bytes the write needed.
        needed: usize,
        /// Bytes left in the quota.
        available: usize,
    },

    /// A persisted record was written by a newer format version.
    #[error("unsupported save version {found} (newest known is {current})")]
    UnsupportedVersion {
        /// Version found in the record.
        found: u32,
        /// Newest version this build understands.
        current: u32,
    },

    /// Filesystem error from a file-backed storage.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded.
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}
