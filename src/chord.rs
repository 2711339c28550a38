//! # Chord Symbols
//!
//! Parses a single chord symbol (`C`, `F#m7`, `Bbmaj7/D`, `Gsus4`) into a
//! [`Chord`].
//!
//! ## Grammar
//! ```text
//! chord      = note quality [ "/" note ]
//! note       = letter [ accidental ]
//! letter     = A | B | C | D | E | F | G
//! accidental = # | b
//! quality    = { component }
//! ```
//!
//! The quality is a run of known components, each matched longest first, so
//! `maj7` reads as `maj` + `7` and `m7b5` as `m` + `7` + `b5`. The quality text
//! is never interpreted musically; it is only checked against the vocabulary
//! and carried through transposition verbatim.
//!
//! A `b` directly after the letter is always the accidental: `Bb5` is B-flat
//! with a `5` quality, not B with a flat fifth.
//!
//! `6/9` is read as a quality, so `C6/9` is a C chord and `C6/9/E` puts it over
//! E. Any other slash introduces the bass note.

use std::fmt;

use crate::pitch::{Note, PitchClass};

/// Recognized quality components, longest first.
pub const QUALITY_COMPONENTS: &[&str] = &[
    "6/9", "maj", "min", "dim", "aug", "sus", "add", "#11", "b13", "13", "11", "b5", "#5", "b9",
    "#9", "°", "ø", "M", "m", "+", "-", "2", "4", "5", "6", "7", "9",
];

/// A parsed chord symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chord {
    pub root: Note,
    /// Suffix after the root, e.g. `m7`, `sus4`, or empty for a major triad.
    pub quality: String,
    /// Bass note of a slash chord
    pub bass: Option<Note>,
}

impl Chord {
    pub fn root_pitch(&self) -> PitchClass {
        self.root.pitch_class()
    }

    pub fn bass_pitch(&self) -> Option<PitchClass> {
        self.bass.map(Note::pitch_class)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Parse `text` as one complete chord symbol.
///
/// Returns `None` unless the whole text matches the grammar.
///
/// # Examples
/// ```
/// use chordmaster::parse_chord;
///
/// let chord = parse_chord("Bbmaj7/D").unwrap();
/// assert_eq!(chord.root.to_string(), "Bb");
/// assert_eq!(chord.quality, "maj7");
/// assert_eq!(chord.bass.unwrap().to_string(), "D");
///
/// assert!(parse_chord("C/H").is_none());
/// assert!(parse_chord("Amazing").is_none());
/// ```
pub fn parse_chord(text: &str) -> Option<Chord> {
    let (root, consumed) = Note::parse_prefix(text)?;
    let rest = &text[consumed..];

    // The slash inside `6/9` belongs to the quality, not to a bass note
    let bass_slash = rest
        .match_indices('/')
        .map(|(index, _)| index)
        .find(|&index| !(rest[..index].ends_with('6') && rest[index + 1..].starts_with('9')));

    let (quality, bass) = match bass_slash {
        Some(slash) => {
            let bass_text = &rest[slash + 1..];
            let (bass, bass_len) = Note::parse_prefix(bass_text)?;
            if bass_len != bass_text.len() {
                return None;
            }
            (&rest[..slash], Some(bass))
        }
        None => (rest, None),
    };

    if !is_known_quality(quality) {
        return None;
    }

    Some(Chord {
        root,
        quality: quality.to_string(),
        bass,
    })
}

/// True when `quality` is empty or splits entirely into known components.
pub fn is_known_quality(quality: &str) -> bool {
    let mut remaining = quality;
    while !remaining.is_empty() {
        match QUALITY_COMPONENTS
            .iter()
            .find(|component| remaining.starts_with(**component))
        {
            Some(component) => remaining = &remaining[component.len()..],
            None => return false,
        }
    }
    true
}
