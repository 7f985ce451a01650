//! Song catalog loader.
//!
//! Fetches the live song manifest and deserializes it into [`Song`] records.
//! The manifest endpoint is deliberately excluded from the offline cache, so
//! every load here reflects the latest published song list.

use crate::error::{LibraryError, Result};
use crate::models::Song;
use bridge_traits::http::{HttpClient, HttpRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loader for the dynamic song manifest.
pub struct SongCatalog {
    http_client: Arc<dyn HttpClient>,
    manifest_url: String,
}

impl SongCatalog {
    /// Create a catalog bound to a manifest endpoint.
    pub fn new(http_client: Arc<dyn HttpClient>, manifest_url: impl Into<String>) -> Self {
        Self {
            http_client,
            manifest_url: manifest_url.into(),
        }
    }

    /// The manifest endpoint this catalog reads from.
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// Fetch and parse the song manifest.
    ///
    /// Entries that fail validation are skipped with a warning rather than
    /// failing the whole load; a malformed manifest body is an error.
    pub async fn load(&self) -> Result<Vec<Song>> {
        debug!(url = %self.manifest_url, "Loading song manifest");

        let request = HttpRequest::get(&self.manifest_url);
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(LibraryError::ManifestFetchFailed(format!(
                "HTTP {} from {}",
                response.status, self.manifest_url
            )));
        }

        let songs: Vec<Song> = response
            .json()
            .map_err(|e| LibraryError::InvalidManifest(e.to_string()))?;

        let mut valid = Vec::with_capacity(songs.len());
        for song in songs {
            match song.validate() {
                Ok(()) => valid.push(song),
                Err(reason) => {
                    warn!(song_id = %song.id, %reason, "Skipping invalid manifest entry");
                }
            }
        }

        info!(count = valid.len(), "Song manifest loaded");
        Ok(valid)
    }
}
