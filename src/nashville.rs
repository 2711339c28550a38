//! Nashville Number System rendering.
//!
//! Chords become scale-degree numerals relative to a reference tonic. Chromatic
//! roots are written as the raised degree below them (`#4`, never `b5`).

use crate::chord::Chord;
use crate::pitch::PitchClass;

/// Label shown in place of a key name while Nashville numbers are displayed
pub const NASHVILLE_KEY_LABEL: &str = "#";

/// Numeral for each semitone offset above the tonic
const DEGREE_NUMERALS: [&str; 12] = [
    "1", "#1", "2", "#2", "3", "4", "#4", "5", "#5", "6", "#6", "7",
];

/// Scale-degree numeral of `pitch` in the major key on `tonic`.
///
/// ```
/// use chordmaster::{nashville_numeral, PitchClass};
///
/// let c = PitchClass::new(0);
/// assert_eq!(nashville_numeral(c, PitchClass::new(7)), "5");
/// assert_eq!(nashville_numeral(c, PitchClass::new(10)), "#6");
/// ```
pub fn nashville_numeral(tonic: PitchClass, pitch: PitchClass) -> &'static str {
    DEGREE_NUMERALS[pitch.interval_from(tonic) as usize]
}

/// Render a whole chord as numerals: root numeral, quality, then `/` bass numeral.
pub fn nashville_chord(tonic: PitchClass, chord: &Chord) -> String {
    let mut rendered = String::from(nashville_numeral(tonic, chord.root_pitch()));
    rendered.push_str(&chord.quality);
    if let Some(bass) = chord.bass_pitch() {
        rendered.push('/');
        rendered.push_str(nashville_numeral(tonic, bass));
    }
    rendered
}
