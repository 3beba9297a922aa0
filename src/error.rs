use crate::token::{Span, Token};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Malformed set, non-positive edo, out-of-range index, mismatched lengths.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A brightness difference that cannot be given a sign (NaN or infinite).
    #[error("Arithmetic ambiguity: {0}")]
    ArithmeticAmbiguity(String),
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl AnalyzerError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AnalyzerError::InvalidInput(msg.into())
    }

    /// Byte span in the notation source this error points at, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            AnalyzerError::Lex(e) => Some(e.span()),
            AnalyzerError::Parse(e) => e.span(),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LexError {
    #[error("Unexpected char '{ch}' at pos {pos}")]
    UnexpectedChar { ch: char, pos: usize },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { ch, pos } => Span {
                start: *pos,
                end: *pos + ch.len_utf8(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found:?} at pos {}", .span.start)]
    UnexpectedToken {
        expected: String,
        found: Token,
        span: Span,
    },
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEOF { expected: String },
    #[error("Invalid pitch class '{text}' at pos {}", .span.start)]
    InvalidPitchClass { text: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::InvalidPitchClass { span, .. } => Some(*span),
            ParseError::UnexpectedEOF { .. } => None,
        }
    }
}
