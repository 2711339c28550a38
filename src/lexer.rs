use crate::chord::{parse_chord, Chord};

/// Punctuation that may sit directly before a chord, e.g. `(G` or `|C`
const OPENERS: &[char] = &['(', '[', '|'];

/// Token types for a line of a chord sheet
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Chord(Chord),
    PlainText,
}

/// A token with its byte offset in the line and the text it covers
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken<'a> {
    pub token: Token,
    pub offset: usize,
    pub raw: &'a str,
}

impl LocatedToken<'_> {
    pub fn chord(&self) -> Option<&Chord> {
        match &self.token {
            Token::Chord(chord) => Some(chord),
            Token::PlainText => None,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.raw.len()
    }
}

/// Lexer splitting one line into chord and plain-text tokens.
///
/// Whitespace is never part of a token; the gaps between tokens are left for the
/// caller to copy verbatim.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// Consume the next whitespace-delimited word, returning it with its offset.
    fn next_word(&mut self) -> Option<(usize, &'a str)> {
        self.skip_whitespace();
        let input = self.input;
        let rest = &input[self.position..];
        if rest.is_empty() {
            return None;
        }
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let offset = self.position;
        self.position += len;
        Some((offset, &rest[..len]))
    }

    pub fn tokenize(&mut self) -> Vec<LocatedToken<'a>> {
        let mut tokens = Vec::new();
        while let Some((offset, word)) = self.next_word() {
            lex_word(word, offset, &mut tokens);
        }
        tokens
    }
}

/// Tokenize a line in one call.
///
/// ```
/// use chordmaster::lexer::tokenize;
///
/// let tokens = tokenize("(G)  Am");
/// let raw: Vec<&str> = tokens.iter().map(|t| t.raw).collect();
/// assert_eq!(raw, vec!["(", "G", ")", "Am"]);
/// assert_eq!(tokens[3].offset, 5);
/// ```
pub fn tokenize(line: &str) -> Vec<LocatedToken<'_>> {
    Lexer::new(line).tokenize()
}

fn lex_word<'a>(word: &'a str, offset: usize, tokens: &mut Vec<LocatedToken<'a>>) {
    // The whole word wins over any punctuation split
    if let Some(chord) = parse_chord(word) {
        tokens.push(LocatedToken {
            token: Token::Chord(chord),
            offset,
            raw: word,
        });
        return;
    }

    // Otherwise a chord may end early, followed only by punctuation: `G...`,
    // `Am.`, `(C)`, `D:`. Letters, digits and `/` never start the tail, so
    // `C/H` stays whole.
    let core_start = word.len() - word.trim_start_matches(OPENERS).len();
    let body = &word[core_start..];
    let mut ends = vec![body.len()];
    for (index, c) in body.char_indices().rev() {
        if c.is_alphanumeric() || c == '/' {
            break;
        }
        ends.push(index);
    }

    for end in ends {
        if end == 0 {
            break;
        }
        let core = &body[..end];
        if let Some(chord) = parse_chord(core) {
            if core_start > 0 {
                tokens.push(LocatedToken {
                    token: Token::PlainText,
                    offset,
                    raw: &word[..core_start],
                });
            }
            tokens.push(LocatedToken {
                token: Token::Chord(chord),
                offset: offset + core_start,
                raw: core,
            });
            if end < body.len() {
                tokens.push(LocatedToken {
                    token: Token::PlainText,
                    offset: offset + core_start + end,
                    raw: &body[end..],
                });
            }
            return;
        }
    }

    tokens.push(LocatedToken {
        token: Token::PlainText,
        offset,
        raw: word,
    });
}
