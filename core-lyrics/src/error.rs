use thiserror::Error;

#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("Lyrics load failed: {0}")]
    LoadFailed(String),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

pub type Result<T> = std::result::Result<T, LyricsError>;
