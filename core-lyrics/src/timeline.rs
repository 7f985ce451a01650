//! Time-synchronized cue resolution.

use crate::cue::{parse_cues, CueLine};

/// Resolved view of the timeline around the active line.
///
/// Text fields are empty at sequence boundaries or when no line is active,
/// so a display can render all three slots unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LyricFrame {
    pub previous: String,
    pub active: String,
    pub next: String,
}

/// An ordered cue sequence plus the currently resolved line index.
///
/// The sequence is built once per lyrics resource and replaced wholesale on
/// resource change; it is never patched incrementally.
#[derive(Debug, Default)]
pub struct CueTimeline {
    cues: Vec<CueLine>,
    active: Option<usize>,
}

impl CueTimeline {
    /// Build a timeline from an already-parsed cue sequence.
    pub fn new(cues: Vec<CueLine>) -> Self {
        Self { cues, active: None }
    }

    /// Parse a timed-caption document into a timeline.
    pub fn from_text(text: &str) -> Self {
        Self::new(parse_cues(text))
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// The parsed cue sequence, in source order.
    pub fn cues(&self) -> &[CueLine] {
        &self.cues
    }

    /// Index of the currently active line, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Resolve the active line for a playback clock sample.
    ///
    /// Linear first-match scan in source order: the earliest-appearing cue
    /// with `start <= t < end` wins, which keeps behavior defined for
    /// unsorted and overlapping sequences. Returns `true` only when the
    /// resolved index differs from the previous sample, so clock ticks that
    /// land inside the same line (or the same gap) are cheap no-ops for the
    /// consumer.
    pub fn resolve_at(&mut self, current_time: f64) -> bool {
        let resolved = self
            .cues
            .iter()
            .position(|cue| current_time >= cue.start_time && current_time < cue.end_time);

        if resolved != self.active {
            self.active = resolved;
            true
        } else {
            false
        }
    }

    /// The currently active line.
    pub fn active_line(&self) -> Option<&CueLine> {
        self.active.and_then(|i| self.cues.get(i))
    }

    /// The line preceding the active one, absent at the start of the
    /// sequence or when no line is active.
    pub fn previous_line(&self) -> Option<&CueLine> {
        match self.active {
            Some(i) if i > 0 => self.cues.get(i - 1),
            _ => None,
        }
    }

    /// The line following the active one, absent at the end of the sequence
    /// or when no line is active.
    pub fn next_line(&self) -> Option<&CueLine> {
        self.active.and_then(|i| self.cues.get(i + 1))
    }

    /// Snapshot of the previous/active/next display texts.
    pub fn frame(&self) -> LyricFrame {
        let text_of = |line: Option<&CueLine>| {
            line.map(|l| l.text.clone()).unwrap_or_default()
        };

        LyricFrame {
            previous: text_of(self.previous_line()),
            active: text_of(self.active_line()),
            next: text_of(self.next_line()),
        }
    }
}
