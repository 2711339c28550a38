//! # Song Documents
//!
//! A song is a chord sheet with optional YAML front matter holding its details:
//!
//! ```text
//! ---
//! title: Amazing Grace
//! artist: John Newton
//! key: G
//! parts:
//!   Bass: Root notes only in verse 1
//! ---
//! G          C        G
//! Amazing grace how sweet the sound
//! ```
//!
//! The front matter must open on the first line. Everything after the closing
//! `---` is the song body, kept byte-for-byte. A song without a `key` is in C.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::key::Key;
use crate::sheet::{render_sheet, Sheet};
use crate::transpose::{get_transposed_content, split_lines};

/// Front matter as written, before the key is validated
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSongMetadata {
    title: Option<String>,
    artist: Option<String>,
    key: Option<String>,
    parts: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub original_key: Key,
    /// Chords and lyrics
    pub content: String,
    /// Free-form notes per instrument, e.g. `"Lead Guitar"`
    pub parts: BTreeMap<String, String>,
}

impl Song {
    /// The body in `target` (defaulting to the song's own key), or in Nashville
    /// numbers relative to the original key.
    pub fn transposed(&self, target: Option<Key>, nashville: bool) -> String {
        get_transposed_content(
            &self.content,
            self.original_key,
            target.unwrap_or(self.original_key),
            nashville,
        )
    }

    pub fn sheet(&self, target: Option<Key>, nashville: bool) -> Sheet {
        render_sheet(
            &self.content,
            self.original_key,
            target.unwrap_or(self.original_key),
            nashville,
        )
    }

    pub fn part(&self, instrument: &str) -> Option<&str> {
        self.parts.get(instrument).map(String::as_str)
    }
}

/// Parse a song document.
///
/// # Examples
/// ```
/// use chordmaster::{parse_song, Key};
///
/// let song = parse_song("---\ntitle: Test\nkey: Bb\n---\nBb  F\nla la\n")?;
/// assert_eq!(song.title.as_deref(), Some("Test"));
/// assert_eq!(song.original_key, Key::BFlat);
/// assert_eq!(song.content, "Bb  F\nla la\n");
/// # Ok::<(), chordmaster::ChordError>(())
/// ```
///
/// # Errors
/// [`ChordError::MetadataError`] for unterminated or invalid front matter, and
/// [`ChordError::UnknownKey`] for a key outside the supported set.
pub fn parse_song(source: &str) -> Result<Song, ChordError> {
    let (front_matter, body) = extract_front_matter(source)?;

    let raw = match front_matter {
        Some(yaml) if !yaml.trim().is_empty() => {
            serde_yaml::from_str::<RawSongMetadata>(yaml).map_err(|e| {
                warn!("rejecting song front matter: {}", e);
                ChordError::MetadataError(e.to_string())
            })?
        }
        _ => RawSongMetadata::default(),
    };

    let original_key = match raw.key {
        Some(ref key) => key.parse()?,
        None => Key::default(),
    };

    Ok(Song {
        title: raw.title,
        artist: raw.artist,
        original_key,
        content: body.to_string(),
        parts: raw.parts.unwrap_or_default(),
    })
}

/// Split the front matter from the body.
///
/// Returns `(yaml, body)`; `yaml` is `None` when the first line is not `---`.
fn extract_front_matter(source: &str) -> Result<(Option<&str>, &str), ChordError> {
    let mut lines = split_lines(source);
    let start = match lines.next() {
        Some((first, ending)) if first.trim() == "---" => first.len() + ending.len(),
        _ => return Ok((None, source)),
    };

    let mut position = start;
    for (line, ending) in lines {
        let next = position + line.len() + ending.len();
        if line.trim() == "---" {
            return Ok((Some(&source[start..position]), &source[next..]));
        }
        position = next;
    }

    warn!("song front matter opened on line 1 but never closed");
    Err(ChordError::MetadataError(
        "front matter is not terminated".to_string(),
    ))
}
