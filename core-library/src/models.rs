//! Core domain models for the song library.

use serde::{Deserialize, Serialize};

/// A single entry in the song manifest.
///
/// Field names mirror the manifest JSON, which uses camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique identifier
    pub id: String,
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Album name
    pub album: String,
    /// Display duration (e.g., "3:42")
    pub duration: String,
    /// Path to the audio stream
    pub audio_file: String,
    /// Path to the album artwork
    pub album_art: String,
    /// Path to the timed-lyrics resource, if one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics_file: Option<String>,
    /// Marks recently published songs
    #[serde(default)]
    pub is_new: bool,
}

impl Song {
    /// Validate song data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Song id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Song title cannot be empty".to_string());
        }

        if self.audio_file.trim().is_empty() {
            return Err("Song audio file cannot be empty".to_string());
        }

        if let Some(lyrics) = &self.lyrics_file {
            if lyrics.trim().is_empty() {
                return Err("Song lyrics file cannot be empty when present".to_string());
            }
        }

        Ok(())
    }

    /// Whether the song carries a timed-lyrics resource.
    pub fn has_lyrics(&self) -> bool {
        self.lyrics_file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_song() -> Song {
        Song {
            id: "song-1".to_string(),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            duration: "3:42".to_string(),
            audio_file: "/audio/test-song.mp3".to_string(),
            album_art: "/covers/test-song.png".to_string(),
            lyrics_file: Some("/lyrics/test-song.vtt".to_string()),
            is_new: false,
        }
    }

    #[test]
    fn test_song_validate() {
        assert!(sample_song().validate().is_ok());

        let mut no_title = sample_song();
        no_title.title = "  ".to_string();
        assert!(no_title.validate().is_err());

        let mut no_audio = sample_song();
        no_audio.audio_file = String::new();
        assert!(no_audio.validate().is_err());

        let mut empty_lyrics = sample_song();
        empty_lyrics.lyrics_file = Some(String::new());
        assert!(empty_lyrics.validate().is_err());
    }

    #[test]
    fn test_song_deserializes_camel_case() {
        let json = r#"{
            "id": "song-1",
            "title": "Test Song",
            "artist": "Test Artist",
            "album": "Test Album",
            "duration": "3:42",
            "audioFile": "/audio/test-song.mp3",
            "albumArt": "/covers/test-song.png",
            "lyricsFile": "/lyrics/test-song.vtt",
            "isNew": true
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.audio_file, "/audio/test-song.mp3");
        assert_eq!(song.lyrics_file.as_deref(), Some("/lyrics/test-song.vtt"));
        assert!(song.is_new);
    }

    #[test]
    fn test_song_optional_fields_default() {
        let json = r#"{
            "id": "song-2",
            "title": "No Lyrics",
            "artist": "Artist",
            "album": "Album",
            "duration": "2:10",
            "audioFile": "/audio/no-lyrics.mp3",
            "albumArt": "/covers/no-lyrics.png"
        }"#;

        let song: Song = serde_json::from_str(json).unwrap();
        assert!(song.lyrics_file.is_none());
        assert!(!song.is_new);
        assert!(!song.has_lyrics());
    }
}
