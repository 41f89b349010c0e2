//! Fatal naming errors.

use thiserror::Error;

/// Result type for name resolution.
pub type Result<T> = std::result::Result<T, NamingError>;

/// A naming failure caused by malformed reflection data.
///
/// None of these can be recovered from: any output generated past them would
/// be structurally invalid, so the whole run should abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    #[error("node '{path}' has an empty engine name")]
    EmptyEngineName { path: String },

    #[error("node '{path}' resolves to an empty identifier")]
    EmptyName { path: String },

    #[error("failed to find package name for '{path}'")]
    MissingPackage { path: String },

    #[error("delegate name provider returned an empty name for '{path}'")]
    EmptyDelegateName { path: String },
}

impl NamingError {
    /// Path of the node that caused the error.
    pub fn path(&self) -> &str {
        match self {
            NamingError::EmptyEngineName { path }
            | NamingError::EmptyName { path }
            | NamingError::MissingPackage { path }
            | NamingError::EmptyDelegateName { path } => path,
        }
    }
}
