//! # Line Classification
//!
//! Decides whether a line of a chord sheet is instrument notation (a chord line)
//! or sung words (a lyric line).
//!
//! A line is a chord line when at least half of its whitespace-separated words
//! are chords. The comparison is inclusive: a two-word line with one chord is a
//! chord line, and a one-word line is a chord line only if that word is a chord.
//!
//! Short lyric lines made only of chord-like words (`A B C`) are misread as chord
//! lines. That is a known limitation of the density heuristic.
//!
//! The reverse happens with spaced bar lines: every free-standing `|` counts as
//! a word, so `| C | G | Am | F |` has 4 chords in 9 words and is left as a
//! lyric line. Writing the bars against the chords (`|C |G |Am |F |`) keeps the
//! line a chord line.

use log::trace;

use crate::lexer::{tokenize, Token};

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Chord,
    Lyric,
}

/// A word counts as a chord when its tokens include one, so `(G)` and `|C` do.
fn is_chord_word(word: &str) -> bool {
    tokenize(word)
        .iter()
        .any(|token| matches!(token.token, Token::Chord(_)))
}

/// Check if a line is a chord line.
///
/// # Examples
/// ```
/// use chordmaster::is_chord_line;
///
/// assert!(is_chord_line("C G Am F"));
/// assert!(!is_chord_line("Amazing grace how sweet the sound"));
/// assert!(!is_chord_line("   "));
/// ```
pub fn is_chord_line(line: &str) -> bool {
    classify_line(line) == LineKind::Chord
}

pub fn classify_line(line: &str) -> LineKind {
    let mut words = 0usize;
    let mut chords = 0usize;
    for word in line.split_whitespace() {
        words += 1;
        if is_chord_word(word) {
            chords += 1;
        }
    }

    if words == 0 {
        return LineKind::Lyric;
    }

    let kind = if chords * 2 >= words {
        LineKind::Chord
    } else {
        LineKind::Lyric
    };
    trace!("classified {:?} as {:?} ({}/{} chords)", line, kind, chords, words);
    kind
}
