//! # Pitch Classes and Note Spellings
//!
//! The chromatic circle and the two spelling tables used to write it down.
//!
//! ```text
//! pitch class   0  1   2  3   4  5  6   7  8   9  10  11
//! sharps        C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flats         C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//!
//! Spellings come from these fixed tables rather than interval math: pitch
//! class 1 is `C#` or `Db`, never `B#` or `Dbb`.

use std::fmt;

/// A pitch class in 12-TET, always in `0..=11`. 0 = C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any semitone count, reducing it mod 12.
    pub fn new(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up by `interval` semitones (negative moves down).
    pub fn shift(self, interval: i32) -> Self {
        Self::new(self.0 as i32 + interval)
    }

    /// Semitones from `reference` up to `self`, in `0..=11`.
    pub fn interval_from(self, reference: PitchClass) -> u8 {
        (self.0 as i32 - reference.0 as i32).rem_euclid(12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which accidental a key uses for the five black-key pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccidentalPreference {
    Sharps,
    Flats,
}

const SHARP_SPELLINGS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_SPELLINGS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Letter name for `pitch` under the given preference.
pub fn spell(pitch: PitchClass, preference: AccidentalPreference) -> &'static str {
    let table = match preference {
        AccidentalPreference::Sharps => &SHARP_SPELLINGS,
        AccidentalPreference::Flats => &FLAT_SPELLINGS,
    };
    table[pitch.value() as usize]
}

/// Note letters A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Semitone offset of the natural letter from C
    pub fn semitones(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Accidental written after a chord letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural, // none written
    Sharp,   // #
    Flat,    // b
}

impl Accidental {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    pub fn semitones(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A note as it was written: letter plus optional accidental.
///
/// Keeps the original spelling so `E#` and `F` stay distinguishable even though
/// they share a pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::new(self.letter.semitones() + self.accidental.semitones())
    }

    /// Parse a note at the start of `s`.
    ///
    /// Returns the note and the number of bytes consumed (1 or 2).
    pub fn parse_prefix(s: &str) -> Option<(Note, usize)> {
        let mut chars = s.chars();
        let letter = Letter::from_char(chars.next()?)?;
        match chars.next().and_then(Accidental::from_char) {
            Some(accidental) => Some((Note::new(letter, accidental), 2)),
            None => Some((Note::new(letter, Accidental::Natural), 1)),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter.as_char(), self.accidental.as_str())
    }
}
