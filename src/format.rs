//! Character-definition grammar for location formats.
//!
//! A char definition describes, one position at a time, which characters a
//! segment may hold:
//!
//! | Token | Matches                         |
//! |-------|---------------------------------|
//! | `\a`  | any alphabetic character        |
//! | `\d`  | an ASCII digit                  |
//! | `\p`  | an ASCII punctuation character  |
//! | other | that exact character (literal)  |
//!
//! So `\a\d\d\d` accepts `B001` and `\a@\d\d` accepts `D@99`.

use std::fmt;

use thiserror::Error;

/// Longest char definition (and segment) the schema stores.
pub const MAX_DEFINITION_LEN: usize = 248;

const ESCAPE: char = '\\';

/// Reasons a char definition is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("character definition formats are required")]
    Empty,

    #[error("a character definition cannot contain the segment separator '{separator}'")]
    ContainsSeparator { separator: String },

    #[error("unknown escape '\\{escape}', expected one of \\a, \\d or \\p")]
    UnknownEscape { escape: char },

    #[error("character definition ends with a dangling escape")]
    DanglingEscape,

    #[error("character definition is {length} characters long, the maximum is {max}")]
    TooLong { length: usize, max: usize },
}

/// One position of a char definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Alpha,
    Digit,
    Punctuation,
    Literal(char),
}

impl Token {
    /// Whether `c` may occupy this position.
    pub fn accepts(self, c: char) -> bool {
        match self {
            Token::Alpha => c.is_alphabetic(),
            Token::Digit => c.is_ascii_digit(),
            Token::Punctuation => c.is_ascii_punctuation(),
            Token::Literal(expected) => c == expected,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Alpha => f.write_str("\\a"),
            Token::Digit => f.write_str("\\d"),
            Token::Punctuation => f.write_str("\\p"),
            Token::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// A validated, normalized char definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharDefinition {
    tokens: Vec<Token>,
}

impl CharDefinition {
    /// Parses `raw` against the separator of the owning location default.
    ///
    /// Surrounding whitespace is dropped before parsing. The result must hold
    /// at least one token and must not embed `separator`, since the separator
    /// joins segments into a path.
    pub fn parse(raw: &str, separator: &str) -> Result<Self, GrammarError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(GrammarError::Empty);
        }

        let length = trimmed.chars().count();
        if length > MAX_DEFINITION_LEN {
            return Err(GrammarError::TooLong {
                length,
                max: MAX_DEFINITION_LEN,
            });
        }

        if !separator.is_empty() && trimmed.contains(separator) {
            return Err(GrammarError::ContainsSeparator {
                separator: separator.to_string(),
            });
        }

        let mut tokens = Vec::with_capacity(length);
        let mut chars = trimmed.chars();

        while let Some(c) = chars.next() {
            if c != ESCAPE {
                tokens.push(Token::Literal(c));
                continue;
            }

            let token = match chars.next() {
                Some('a') => Token::Alpha,
                Some('d') => Token::Digit,
                Some('p') => Token::Punctuation,
                Some(escape) => return Err(GrammarError::UnknownEscape { escape }),
                None => return Err(GrammarError::DanglingEscape),
            };
            tokens.push(token);
        }

        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of characters a matching segment holds: the definition with its
    /// escape markers stripped.
    pub fn segment_length(&self) -> usize {
        self.tokens.len()
    }

    /// Checks a segment value position by position.
    pub fn matches(&self, segment: &str) -> bool {
        segment.chars().count() == self.tokens.len()
            && segment
                .chars()
                .zip(&self.tokens)
                .all(|(c, token)| token.accepts(c))
    }
}

impl fmt::Display for CharDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| fmt::Display::fmt(token, f))
    }
}

/// Validates `raw` and returns its normalized text.
pub fn validate_char_definition(raw: &str, separator: &str) -> Result<String, GrammarError> {
    CharDefinition::parse(raw, separator).map(|definition| definition.to_string())
}
