//! Window-title parsing.
//!
//! The player's window caption is the only place the artist and track name
//! are exposed, in the form `{n}. {artist} - {track} - Winamp`. The trailing
//! application segment is not always present, track names may legitimately
//! contain the `" - "` delimiter, and some files produce near-empty names.

use super::types::ParsedTitle;

/// Delimiter between the artist, track and application segments.
const SEGMENT_DELIMITER: &str = " - ";

/// Trailing application segment dropped from captions when present.
const APP_SUFFIX: &str = "Winamp";

/// Minimum string length the remote presence API accepts.
pub(crate) const MIN_FIELD_LEN: usize = 2;

/// Split a raw window title into artist and track name.
///
/// `playlist_index` is the zero-based playlist position, used to strip the
/// `"{n}. "` numeral prefix from the artist segment. Titles with no
/// delimiter at all are treated as an unparsed track name with an empty
/// artist. Track names under 2 characters are padded to `"Track: {name}"`
/// because the remote side rejects shorter fields.
pub fn parse_title(raw: &str, playlist_index: u32) -> ParsedTitle {
    let mut segments: Vec<&str> = raw.split(SEGMENT_DELIMITER).collect();

    if segments.len() > 1 && segments.last().copied() == Some(APP_SUFFIX) {
        segments.pop();
    }

    let (artist, track_name) = if segments.len() < 2 {
        (String::new(), segments.join(SEGMENT_DELIMITER))
    } else {
        let numeral_prefix = format!("{}. ", playlist_index + 1);
        let artist = segments[0]
            .strip_prefix(&numeral_prefix)
            .unwrap_or(segments[0])
            .to_owned();
        (artist, segments[1..].join(SEGMENT_DELIMITER))
    };

    ParsedTitle {
        artist,
        track_name: pad_track_name(track_name),
    }
}

fn pad_track_name(name: String) -> String {
    if name.chars().count() < MIN_FIELD_LEN {
        format!("Track: {name}")
    } else {
        name
    }
}
