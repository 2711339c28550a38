//! # Error Types
//!
//! The transposition engine itself never fails: a token that is not a chord is
//! passed through untouched. Errors only exist at the edges where text from the
//! outside world becomes typed data:
//!
//! - `UnknownKey` - a key spelling outside the 17 supported keys
//! - `MetadataError` - a song's YAML front matter is malformed
//!
//! ## Usage
//! ```rust
//! use chordmaster::{parse_song, ChordError};
//!
//! match parse_song("---\nkey: H\n---\nC G") {
//!     Ok(song) => println!("{}", song.original_key),
//!     Err(ChordError::UnknownKey(key)) => eprintln!("no such key: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// A key name that is not one of the supported spellings.
    ///
    /// # Example
    /// ```
    /// # use chordmaster::ChordError;
    /// let err = ChordError::UnknownKey("E#".to_string());
    /// assert_eq!(err.to_string(), "Unknown key: E#");
    /// ```
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// Invalid song front matter.
    ///
    /// Occurs when the `---` block is unterminated or is not valid YAML for a song.
    ///
    /// # Example
    /// ```
    /// # use chordmaster::ChordError;
    /// let err = ChordError::MetadataError("front matter is not terminated".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: front matter is not terminated");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),
}
