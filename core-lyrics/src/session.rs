//! Lyrics session bound to the player's current track.
//!
//! The session owns the loaded timeline for whichever lyrics resource the
//! host points it at. Switching resources discards the previous sequence and
//! resolved index before anything else happens; there is no incremental
//! diffing across resources.

use crate::error::{LyricsError, Result};
use crate::timeline::{CueTimeline, LyricFrame};
use bridge_traits::http::{HttpClient, HttpRequest};
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads lyrics resources and answers playback-clock queries against them.
pub struct LyricsSession {
    http_client: Arc<dyn HttpClient>,
    resource: Option<String>,
    timeline: CueTimeline,
}

impl LyricsSession {
    /// Create a session with no resource loaded.
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            resource: None,
            timeline: CueTimeline::default(),
        }
    }

    /// URL of the currently loaded resource, if any.
    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    /// The loaded timeline.
    pub fn timeline(&self) -> &CueTimeline {
        &self.timeline
    }

    /// Whether any cue lines are loaded.
    pub fn has_lyrics(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Point the session at a different lyrics resource.
    ///
    /// A no-op when the reference is unchanged. Otherwise the old sequence
    /// and resolved index are dropped immediately, then the new resource is
    /// fetched and parsed. Load or parse failure leaves the timeline empty:
    /// the consumer sees a "no lyrics" frame, never an error, and never a
    /// partially populated sequence.
    pub async fn set_resource(&mut self, resource: Option<&str>) {
        if self.resource.as_deref() == resource {
            return;
        }

        self.resource = resource.map(str::to_string);
        self.timeline = CueTimeline::default();

        let Some(url) = resource else {
            debug!("Lyrics resource cleared");
            return;
        };

        match self.load(url).await {
            Ok(timeline) => {
                debug!(%url, lines = timeline.len(), "Lyrics loaded");
                self.timeline = timeline;
            }
            Err(e) => {
                warn!(%url, error = %e, "Failed to load lyrics");
            }
        }
    }

    async fn load(&self, url: &str) -> Result<CueTimeline> {
        let response = self.http_client.execute(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(LyricsError::LoadFailed(format!(
                "HTTP {} from {}",
                response.status, url
            )));
        }

        let text = response.text()?;
        Ok(CueTimeline::from_text(&text))
    }

    /// Feed one playback clock sample.
    ///
    /// Returns `true` only when the active line changed since the previous
    /// sample.
    pub fn tick(&mut self, current_time: f64) -> bool {
        self.timeline.resolve_at(current_time)
    }

    /// Snapshot of the previous/active/next display texts.
    pub fn frame(&self) -> LyricFrame {
        self.timeline.frame()
    }
}
