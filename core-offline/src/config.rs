//! Worker configuration and URL classification rules.

/// Configuration for the asset cache worker.
///
/// Set once at startup and immutable thereafter; the bucket name carries the
/// release version tag and is the value stale buckets are compared against
/// at activation.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Name of the current cache bucket, with embedded version tag
    pub cache_name: String,

    /// Static asset paths pre-warmed into the bucket at install time
    pub precache_manifest: Vec<String>,

    /// URL substrings that must always be served live
    pub never_cache: Vec<String>,

    /// Path segment identifying audio stream URLs
    pub audio_path_segment: String,

    /// File extension identifying audio stream URLs
    pub audio_extension: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_name: "chorus-player-v2".to_string(),
            precache_manifest: vec![
                "/".to_string(),
                "/index.html".to_string(),
                "/manifest.json".to_string(),
                "/logo.png".to_string(),
                "/icon-192.png".to_string(),
                "/icon-512.png".to_string(),
                "/favicon.ico".to_string(),
            ],
            never_cache: vec!["/songs.json".to_string()],
            audio_path_segment: "/audio/".to_string(),
            audio_extension: ".mp3".to_string(),
        }
    }
}

impl WorkerConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache bucket name.
    pub fn with_cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Set the pre-warm manifest.
    pub fn with_precache_manifest(mut self, manifest: Vec<String>) -> Self {
        self.precache_manifest = manifest;
        self
    }

    /// Set the never-cache exclusion list.
    pub fn with_never_cache(mut self, urls: Vec<String>) -> Self {
        self.never_cache = urls;
        self
    }

    /// Set the audio classification rule.
    pub fn with_audio_rule(
        mut self,
        path_segment: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        self.audio_path_segment = path_segment.into();
        self.audio_extension = extension.into();
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_name.trim().is_empty() {
            return Err("cache_name cannot be empty".to_string());
        }

        if self.audio_path_segment.is_empty() {
            return Err("audio_path_segment cannot be empty".to_string());
        }

        if self.audio_extension.is_empty() {
            return Err("audio_extension cannot be empty".to_string());
        }

        Ok(())
    }

    /// Whether a URL qualifies for the audio-stream policy: the path must
    /// contain the audio directory segment AND end with the audio extension.
    pub fn is_audio_stream(&self, url: &str) -> bool {
        url.contains(&self.audio_path_segment) && url.ends_with(&self.audio_extension)
    }

    /// Whether a URL matches the never-cache exclusion list.
    pub fn is_never_cache(&self, url: &str) -> bool {
        self.never_cache.iter().any(|entry| url.contains(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkerConfig::default();
        assert_eq!(config.cache_name, "chorus-player-v2");
        assert!(config.precache_manifest.contains(&"/index.html".to_string()));
        assert!(config.is_never_cache("https://player.example.com/songs.json"));
    }

    #[test]
    fn test_config_builder() {
        let config = WorkerConfig::new()
            .with_cache_name("chorus-player-v3")
            .with_never_cache(vec!["/api/".to_string()])
            .with_audio_rule("/streams/", ".ogg");

        assert_eq!(config.cache_name, "chorus-player-v3");
        assert!(config.is_never_cache("/api/songs"));
        assert!(config.is_audio_stream("/streams/track.ogg"));
        assert!(!config.is_audio_stream("/audio/track.mp3"));
    }

    #[test]
    fn test_config_validation() {
        assert!(WorkerConfig::default().validate().is_ok());

        let empty_name = WorkerConfig::default().with_cache_name("  ");
        assert!(empty_name.validate().is_err());

        let empty_rule = WorkerConfig::default().with_audio_rule("", ".mp3");
        assert!(empty_rule.validate().is_err());
    }

    #[test]
    fn test_audio_rule_requires_both_segment_and_extension() {
        let config = WorkerConfig::default();
        assert!(config.is_audio_stream("/audio/song.mp3"));
        assert!(!config.is_audio_stream("/audio/song.flac"));
        assert!(!config.is_audio_stream("/covers/song.mp3"));
    }
}
