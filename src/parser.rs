use crate::error::ParseError;
use crate::token::{token_to_string, Span, Spanned, Token};

/// One written element of a set, before conversion to a pitch class.
#[derive(Debug, Clone)]
struct Element {
    text: String,
    span: Span,
    negative: bool,
}

pub struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    /// Token streams from [`Lexer::tokenize`](crate::lexer::Lexer::tokenize)
    /// already end in `EOF`; one is appended to any stream that does not,
    /// since the helpers below read the current token unconditionally.
    pub fn new(mut tokens: Vec<Spanned>) -> Self {
        if !matches!(tokens.last(), Some(Spanned { token: Token::EOF, .. })) {
            let end = tokens.last().map_or(0, |s| s.span.end);
            tokens.push(Spanned {
                token: Token::EOF,
                span: Span { start: end, end },
                spaced: false,
            });
        }
        Parser { tokens, pos: 0 }
    }

    // ── Helpers ──────────────────────────────────────────────

    fn peek(&self) -> Token {
        self.tokens[self.pos].token.clone()
    }

    fn current(&self) -> &Spanned {
        &self.tokens[self.pos]
    }

    fn span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) -> Spanned {
        let s = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        s
    }

    fn check(&self, expected: &Token) -> bool {
        self.tokens[self.pos].token == *expected
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Token::EOF => ParseError::UnexpectedEOF {
                expected: expected.into(),
            },
            found => ParseError::UnexpectedToken {
                expected: expected.into(),
                found,
                span: self.span(),
            },
        }
    }

    fn expect(&mut self, expected: &Token) -> Result<Spanned, ParseError> {
        if self.check(expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&format!("'{}'", token_to_string(expected))))
        }
    }

    // ── Set literal ──────────────────────────────────────────

    /// Parse a whole input as a single pitch-class set literal.
    pub fn parse_set(&mut self) -> Result<Vec<i64>, ParseError> {
        let closer = self.peek().closer();
        if closer.is_some() {
            self.advance();
        }
        let end = closer.clone().unwrap_or(Token::EOF);

        let mut elements = Vec::new();
        let mut saw_comma = false;
        while !self.check(&end) {
            if !elements.is_empty() {
                if self.eat(&Token::Comma) {
                    saw_comma = true;
                } else if !self.current().spaced {
                    return Err(self.unexpected("',' or whitespace"));
                }
            }
            elements.push(self.parse_element()?);
        }

        if let Some(closer) = &closer {
            self.expect(closer)?;
        }
        self.expect(&Token::EOF)?;

        match elements.as_slice() {
            [single] if !saw_comma && !single.negative && is_compact(&single.text) => {
                compact_pitch_classes(single)
            }
            _ => elements.iter().map(element_value).collect(),
        }
    }

    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let minus = if self.check(&Token::Minus) {
            Some(self.advance().span)
        } else {
            None
        };
        match self.peek() {
            Token::Word(text) => {
                if minus.is_some() && self.current().spaced {
                    return Err(self.unexpected("number directly after '-'"));
                }
                let word = self.advance();
                Ok(Element {
                    text,
                    span: Span {
                        start: minus.map_or(word.span.start, |m| m.start),
                        end: word.span.end,
                    },
                    negative: minus.is_some(),
                })
            }
            _ => Err(self.unexpected("pitch class")),
        }
    }
}

/// Value of a letter or digit standing for a single pitch class.
fn digit_value(ch: char) -> Option<i64> {
    match ch {
        '0'..='9' => Some(ch as i64 - '0' as i64),
        'T' | 't' | 'A' | 'a' => Some(10),
        'E' | 'e' | 'B' | 'b' => Some(11),
        _ => None,
    }
}

fn element_value(element: &Element) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidPitchClass {
        text: element.text.clone(),
        span: element.span,
    };
    let magnitude = if element.text.chars().all(|c| c.is_ascii_digit()) {
        element.text.parse::<i64>().map_err(|_| invalid())?
    } else {
        let mut chars = element.text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => digit_value(ch).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        }
    };
    Ok(if element.negative { -magnitude } else { magnitude })
}

/// Whether a lone word is compact notation. Two digits read as one number,
/// so `[10]` is ten; a compact dyad needs a letter (`1E`) or separators.
fn is_compact(text: &str) -> bool {
    match text.len() {
        0 | 1 => false,
        2 => !text.chars().all(|c| c.is_ascii_digit()),
        _ => true,
    }
}

/// Compact notation: one pitch class per character (`047TE`).
fn compact_pitch_classes(element: &Element) -> Result<Vec<i64>, ParseError> {
    element
        .text
        .char_indices()
        .map(|(offset, ch)| {
            digit_value(ch).ok_or_else(|| ParseError::InvalidPitchClass {
                text: ch.to_string(),
                span: Span {
                    start: element.span.start + offset,
                    end: element.span.start + offset + ch.len_utf8(),
                },
            })
        })
        .collect()
}
