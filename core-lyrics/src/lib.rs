//! # Lyrics Timeline Module
//!
//! Parses timed-caption lyrics and resolves the active line against an
//! externally supplied playback clock.
//!
//! ## Overview
//!
//! A lyrics resource is a plain-text timed-caption document: blocks of
//! `start --> end` timing lines, each followed by one line of text. The
//! module turns such a document into an ordered cue sequence and answers
//! "which line is active at time T" cheaply and deterministically, emitting
//! a change signal only when the answer differs from the previous sample so
//! consumers driven by a high-frequency clock avoid redundant updates.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use core_lyrics::LyricsSession;
//!
//! # async fn example(mut session: LyricsSession) {
//! session.set_resource(Some("/lyrics/song.vtt")).await;
//!
//! // Driven by the host's playback clock:
//! if session.tick(12.5) {
//!     let frame = session.frame();
//!     println!("{}", frame.active);
//! }
//! # }
//! ```

pub mod cue;
pub mod error;
pub mod session;
pub mod timeline;

pub use cue::CueLine;
pub use error::{LyricsError, Result};
pub use session::LyricsSession;
pub use timeline::{CueTimeline, LyricFrame};
