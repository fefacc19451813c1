//! Error types.

use thiserror::Error;

/// Error returned when persistent storage cannot take a write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No storage exists for this page (disabled, sandboxed, private mode).
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// The storage refused the write, e.g. because its quota is exhausted.
    #[error("storage rejected write to '{key}': {message}")]
    Rejected { key: String, message: String },
}

/// Error returned when strictly parsing a name outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{name}'")]
pub struct UnknownThemeError {
    pub name: String,
}
