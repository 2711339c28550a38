//! # Keys
//!
//! The closed set of 17 key spellings a song can be stored in or transposed to,
//! including the enharmonic pairs (`C#`/`Db`, `D#`/`Eb`, `F#`/`Gb`, `G#`/`Ab`,
//! `A#`/`Bb`).
//!
//! Keys conventionally written with flats (`F Bb Eb Ab Db Gb`) spell derived
//! accidentals with `b`; every other key uses `#`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;
use crate::pitch::{spell, AccidentalPreference, PitchClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Key {
    #[default]
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "Db")]
    DFlat,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "Eb")]
    EFlat,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "Gb")]
    GFlat,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "Ab")]
    AFlat,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "Bb")]
    BFlat,
    #[serde(rename = "B")]
    B,
}

impl Key {
    /// Every key, in the order a key picker lists them.
    pub const ALL: [Key; 17] = [
        Key::C,
        Key::CSharp,
        Key::DFlat,
        Key::D,
        Key::DSharp,
        Key::EFlat,
        Key::E,
        Key::F,
        Key::FSharp,
        Key::GFlat,
        Key::G,
        Key::GSharp,
        Key::AFlat,
        Key::A,
        Key::ASharp,
        Key::BFlat,
        Key::B,
    ];

    /// The tonic of the key.
    pub fn pitch_class(self) -> PitchClass {
        let semitones = match self {
            Key::C => 0,
            Key::CSharp | Key::DFlat => 1,
            Key::D => 2,
            Key::DSharp | Key::EFlat => 3,
            Key::E => 4,
            Key::F => 5,
            Key::FSharp | Key::GFlat => 6,
            Key::G => 7,
            Key::GSharp | Key::AFlat => 8,
            Key::A => 9,
            Key::ASharp | Key::BFlat => 10,
            Key::B => 11,
        };
        PitchClass::new(semitones)
    }

    pub fn accidental_preference(self) -> AccidentalPreference {
        match self {
            Key::F | Key::BFlat | Key::EFlat | Key::AFlat | Key::DFlat | Key::GFlat => {
                AccidentalPreference::Flats
            }
            _ => AccidentalPreference::Sharps,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Key::C => "C",
            Key::CSharp => "C#",
            Key::DFlat => "Db",
            Key::D => "D",
            Key::DSharp => "D#",
            Key::EFlat => "Eb",
            Key::E => "E",
            Key::F => "F",
            Key::FSharp => "F#",
            Key::GFlat => "Gb",
            Key::G => "G",
            Key::GSharp => "G#",
            Key::AFlat => "Ab",
            Key::A => "A",
            Key::ASharp => "A#",
            Key::BFlat => "Bb",
            Key::B => "B",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Key {
    type Err = ChordError;

    /// Parse one of the 17 spellings exactly; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| ChordError::UnknownKey(trimmed.to_string()))
    }
}

/// How `pitch` is written when the surrounding key is `key`.
///
/// ```
/// use chordmaster::{spelling_for, Key, PitchClass};
///
/// assert_eq!(spelling_for(PitchClass::new(1), Key::D), "C#");
/// assert_eq!(spelling_for(PitchClass::new(1), Key::AFlat), "Db");
/// ```
pub fn spelling_for(pitch: PitchClass, key: Key) -> &'static str {
    spell(pitch, key.accidental_preference())
}
