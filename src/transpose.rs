//! # Transposition
//!
//! Rewrites the chord symbols of a chord sheet into another key, or into
//! Nashville numbers, leaving every other byte of the text alone.
//!
//! ## Pipeline
//! 1. Split the content into lines, keeping each line break (`\n` or `\r\n`)
//! 2. Classify each line; lyric lines are copied as-is
//! 3. Tokenize chord lines and re-render each chord token in place
//! 4. Join everything back in the original order
//!
//! Chords are not re-padded, so a chord that grows (`C` to `C#`) pushes the rest
//! of its line one column to the right.

use log::debug;

use crate::chord::Chord;
use crate::classify::is_chord_line;
use crate::key::{spelling_for, Key};
use crate::lexer::{tokenize, Token};
use crate::nashville::nashville_chord;

/// How a sheet is rewritten: from which key, to which key, and whether chords
/// become Nashville numbers instead of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposition {
    pub original: Key,
    pub target: Key,
    pub nashville: bool,
}

impl Transposition {
    pub fn new(original: Key, target: Key, nashville: bool) -> Self {
        Self {
            original,
            target,
            nashville,
        }
    }

    /// Semitones UP from the original tonic to the target tonic, in `0..=11`.
    pub fn interval(&self) -> i32 {
        self.target.pitch_class().interval_from(self.original.pitch_class()) as i32
    }

    /// True when applying this transposition cannot change any text.
    pub fn is_identity(&self) -> bool {
        self.original == self.target && !self.nashville
    }

    /// Render one chord in the target notation.
    ///
    /// Nashville numbers are always relative to the original key: the song's
    /// degrees do not depend on the key someone chose to play it in.
    pub fn transpose_chord(&self, chord: &Chord) -> String {
        if self.nashville {
            return nashville_chord(self.original.pitch_class(), chord);
        }

        let interval = self.interval();
        let root = chord.root_pitch().shift(interval);
        let mut rendered = String::from(spelling_for(root, self.target));
        rendered.push_str(&chord.quality);
        if let Some(bass) = chord.bass_pitch() {
            rendered.push('/');
            rendered.push_str(spelling_for(bass.shift(interval), self.target));
        }
        rendered
    }

    /// Transpose one line (without its line break).
    ///
    /// Lyric lines are returned unchanged; on chord lines every chord token is
    /// replaced and everything between tokens is copied verbatim.
    pub fn transpose_line(&self, line: &str) -> String {
        if !is_chord_line(line) {
            return line.to_string();
        }

        let mut output = String::with_capacity(line.len() + 8);
        let mut cursor = 0;
        for located in tokenize(line) {
            if let Token::Chord(chord) = &located.token {
                output.push_str(&line[cursor..located.offset]);
                output.push_str(&self.transpose_chord(chord));
                cursor = located.end();
            }
        }
        output.push_str(&line[cursor..]);
        output
    }

    /// Transpose a whole document, preserving line count and line breaks.
    pub fn apply(&self, content: &str) -> String {
        if self.is_identity() {
            return content.to_string();
        }

        debug!(
            "transposing {} -> {} (interval {}, nashville {})",
            self.original,
            self.target,
            self.interval(),
            self.nashville
        );

        let mut output = String::with_capacity(content.len() + content.len() / 8);
        for (line, ending) in split_lines(content) {
            output.push_str(&self.transpose_line(line));
            output.push_str(ending);
        }
        output
    }
}

/// Split text into `(line, line_break)` pairs.
///
/// The break is `"\n"`, `"\r\n"`, or `""` for a final line without one, so
/// concatenating every pair reproduces the input exactly.
pub fn split_lines(content: &str) -> impl Iterator<Item = (&str, &str)> {
    content.split_inclusive('\n').map(|piece| {
        if let Some(line) = piece.strip_suffix("\r\n") {
            (line, "\r\n")
        } else if let Some(line) = piece.strip_suffix('\n') {
            (line, "\n")
        } else {
            (piece, "")
        }
    })
}

/// Transpose a chord sheet from `original_key` to `target_key`.
///
/// With `use_nashville` set, chords are written as Nashville numbers relative to
/// `original_key` and `target_key` is ignored. Text that is not a chord is never
/// altered, and nothing here can fail: unrecognized tokens pass through.
///
/// # Examples
/// ```
/// use chordmaster::{get_transposed_content, Key};
///
/// let sheet = "C       G       Am      F\nAmazing grace how sweet the sound";
/// assert_eq!(
///     get_transposed_content(sheet, Key::C, Key::D, false),
///     "D       A       Bm      G\nAmazing grace how sweet the sound"
/// );
/// assert_eq!(
///     get_transposed_content("C  F/A  G", Key::C, Key::D, true),
///     "1  4/6  5"
/// );
/// ```
pub fn get_transposed_content(
    content: &str,
    original_key: Key,
    target_key: Key,
    use_nashville: bool,
) -> String {
    Transposition::new(original_key, target_key, use_nashville).apply(content)
}
