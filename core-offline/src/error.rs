//! # Offline Cache Error Types

use thiserror::Error;

/// Errors that can occur during offline cache operations.
#[derive(Error, Debug)]
pub enum OfflineError {
    /// Worker configuration failed validation.
    #[error("Invalid worker configuration: {0}")]
    InvalidConfig(String),

    /// Cache bucket operation failed.
    #[error("Cache store error: {0}")]
    StoreError(String),

    /// Network fetch failed and no cached fallback exists.
    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    /// Bridge error from the host platform.
    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),

    /// Internal error (should not occur in normal operation).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OfflineError {
    /// Returns `true` if this error is due to network issues.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            OfflineError::ResourceUnavailable(_) | OfflineError::Bridge(_)
        )
    }
}

/// Result type for offline cache operations.
pub type Result<T> = std::result::Result<T, OfflineError>;
