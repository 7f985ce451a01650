//! Timed-caption parsing.
//!
//! The cue format is a plain-text caption document: a timing line of the
//! form `start --> end`, immediately followed by one line of display text.
//! Timecodes are `HH:MM:SS.mmm` or `MM:SS.mmm`.

/// Token separating the start and end timecodes on a timing line.
const TIMING_SEPARATOR: &str = " --> ";

/// One timed caption entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CueLine {
    /// Start of the line's active window, in seconds
    pub start_time: f64,
    /// End of the line's active window, in seconds (exclusive)
    pub end_time: f64,
    /// Display text
    pub text: String,
}

/// Parse a timed-caption document into an ordered cue sequence.
///
/// Cues are emitted in source order with no sorting or overlap
/// normalization. Only the single line immediately following a timing line
/// is captured; further lines before the next timing line are ignored. A
/// timing line followed by a blank line emits nothing. Parsing never fails:
/// malformed blocks are skipped and a fully unparsable document yields an
/// empty sequence.
pub fn parse_cues(text: &str) -> Vec<CueLine> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut cues = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if let Some((start_str, end_str)) = line.split_once(TIMING_SEPARATOR) {
            let start_time = parse_timecode(start_str);
            let end_time = parse_timecode(end_str);

            // The next line carries the cue text, if any.
            i += 1;
            if i < lines.len() {
                let text = lines[i].trim();
                if !text.is_empty() {
                    cues.push(CueLine {
                        start_time,
                        end_time,
                        text: text.to_string(),
                    });
                }
            }
        }

        i += 1;
    }

    cues
}

/// Parse a `HH:MM:SS.mmm` or `MM:SS.mmm` timecode into seconds.
///
/// Any other shape parses to zero, as does any unparsable numeric
/// component. The digits after the `.` are read as an integer count of
/// milliseconds, so `"1:02.5"` is 62.005 seconds, not 62.5.
pub fn parse_timecode(value: &str) -> f64 {
    let parts: Vec<&str> = value.trim().split(':').collect();

    match parts.as_slice() {
        [hours, minutes, seconds] => {
            parse_component(hours) * 3600.0
                + parse_component(minutes) * 60.0
                + parse_seconds(seconds)
        }
        [minutes, seconds] => parse_component(minutes) * 60.0 + parse_seconds(seconds),
        _ => 0.0,
    }
}

fn parse_seconds(value: &str) -> f64 {
    match value.split_once('.') {
        Some((seconds, millis)) => parse_component(seconds) + parse_component(millis) / 1000.0,
        None => parse_component(value),
    }
}

fn parse_component(value: &str) -> f64 {
    value.parse::<u32>().map(f64::from).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_blocks() {
        let doc = "00:00.000 --> 00:03.000\nHello\n\n00:00:05.250 --> 00:00:07.000\nWorld";
        let cues = parse_cues(doc);

        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0], CueLine {
            start_time: 0.0,
            end_time: 3.0,
            text: "Hello".to_string(),
        });
        assert_eq!(cues[1], CueLine {
            start_time: 5.25,
            end_time: 7.0,
            text: "World".to_string(),
        });
    }

    #[test]
    fn test_timing_line_without_text_is_dropped() {
        let doc = "00:01.000 --> 00:02.000\n\n00:03.000 --> 00:04.000\nKept";
        let cues = parse_cues(doc);

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Kept");
    }

    #[test]
    fn test_only_first_text_line_is_captured() {
        let doc = "00:01.000 --> 00:02.000\nFirst\nSecond\nThird";
        let cues = parse_cues(doc);

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "First");
    }

    #[test]
    fn test_trailing_timing_line_at_end_of_input() {
        let cues = parse_cues("00:01.000 --> 00:02.000");
        assert!(cues.is_empty());
    }

    #[test]
    fn test_unparsable_document_yields_empty_sequence() {
        assert!(parse_cues("").is_empty());
        assert!(parse_cues("just some prose\nwith no timing lines").is_empty());
    }

    #[test]
    fn test_timecode_formats() {
        assert_eq!(parse_timecode("00:00:12.500"), 12.5);
        assert_eq!(parse_timecode("00:12.500"), 12.5);
        assert_eq!(parse_timecode("01:00:00.000"), 3600.0);
        assert_eq!(parse_timecode("02:30"), 150.0);
    }

    #[test]
    fn test_timecode_millisecond_convention() {
        // The digits after the dot are a millisecond count, not a decimal
        // fraction of a second.
        assert!((parse_timecode("1:02.5") - 62.005).abs() < 1e-9);
        assert_eq!(parse_timecode("0:00.250"), 0.25);
        assert_eq!(parse_timecode("0:00.25"), 0.025);
    }

    #[test]
    fn test_timecode_invalid_shapes_default_to_zero() {
        assert_eq!(parse_timecode("12"), 0.0);
        assert_eq!(parse_timecode("1:2:3:4"), 0.0);
        assert_eq!(parse_timecode(""), 0.0);
    }

    #[test]
    fn test_timecode_invalid_components_default_to_zero() {
        assert_eq!(parse_timecode("xx:10.000"), 10.0);
        assert_eq!(parse_timecode("01:yy.000"), 60.0);
        assert_eq!(parse_timecode("00:10.zzz"), 10.0);
    }
}
