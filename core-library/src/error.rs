use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Manifest fetch failed: {0}")]
    ManifestFetchFailed(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid song entry: {0}")]
    InvalidSong(String),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
