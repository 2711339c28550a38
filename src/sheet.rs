//! Display-ready chord sheets.
//!
//! A [`Sheet`] is what a song view draws: the key label for the header and each
//! line of the transposed text flagged so chord lines can be styled apart from
//! lyrics. The flags are recomputed on the transposed text.

use serde::Serialize;

use crate::classify::is_chord_line;
use crate::key::Key;
use crate::nashville::NASHVILLE_KEY_LABEL;
use crate::transpose::get_transposed_content;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLine {
    pub text: String,
    pub is_chord_line: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    /// Key name for the header, or `#` when showing Nashville numbers
    pub display_key: String,
    pub lines: Vec<SheetLine>,
}

impl Sheet {
    pub fn chord_lines(&self) -> impl Iterator<Item = &SheetLine> {
        self.lines.iter().filter(|line| line.is_chord_line)
    }
}

/// Key label for a song header.
///
/// ```
/// use chordmaster::{display_key, Key};
///
/// assert_eq!(display_key(Key::EFlat, false), "Eb");
/// assert_eq!(display_key(Key::EFlat, true), "#");
/// ```
pub fn display_key(target: Key, nashville: bool) -> String {
    if nashville {
        NASHVILLE_KEY_LABEL.to_string()
    } else {
        target.to_string()
    }
}

/// Transpose `content` and split it into flagged lines.
///
/// Every `\n` starts a new line, so empty content gives one blank line and a
/// trailing break gives a trailing blank line. A `\r` before the break is
/// dropped.
pub fn render_sheet(content: &str, original: Key, target: Key, nashville: bool) -> Sheet {
    let transposed = get_transposed_content(content, original, target, nashville);
    let lines = transposed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| SheetLine {
            text: line.to_string(),
            is_chord_line: is_chord_line(line),
        })
        .collect();

    Sheet {
        display_key: display_key(target, nashville),
        lines,
    }
}
