pub mod chord;
pub mod classify;
pub mod error;
pub mod key;
pub mod lexer;
pub mod nashville;
pub mod pitch;
pub mod sheet;
pub mod song;
pub mod transpose;

pub use chord::{parse_chord, Chord};
pub use classify::{classify_line, is_chord_line, LineKind};
pub use error::*;
pub use key::{spelling_for, Key};
pub use lexer::{LocatedToken, Token};
pub use nashville::{nashville_chord, nashville_numeral, NASHVILLE_KEY_LABEL};
pub use pitch::{Accidental, AccidentalPreference, Letter, Note, PitchClass};
pub use sheet::{display_key, render_sheet, Sheet, SheetLine};
pub use song::{parse_song, Song};
pub use transpose::{get_transposed_content, Transposition};

/// Transpose a song document's body to `target` (or render Nashville numbers).
/// This is the main entry point for whole song files.
pub fn transpose_song(
    source: &str,
    target: Option<Key>,
    nashville: bool,
) -> Result<String, ChordError> {
    let song = parse_song(source)?;
    Ok(song.transposed(target, nashville))
}

/// Parse a song document and render its display sheet.
pub fn render_song(
    source: &str,
    target: Option<Key>,
    nashville: bool,
) -> Result<Sheet, ChordError> {
    let song = parse_song(source)?;
    Ok(song.sheet(target, nashville))
}
