use crate::error::LexError;
use crate::token::{Span, Spanned, Token};

pub struct Lexer {
    chars: Vec<char>,
    /// Precomputed byte offset for each char index.
    /// `byte_offsets[i]` = byte offset of `chars[i]` in the original `&str`.
    /// `byte_offsets[chars.len()]` = total byte length (sentinel for EOF).
    byte_offsets: Vec<usize>,
    pos: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let mut byte_offsets = Vec::with_capacity(chars.len() + 1);
        let mut offset = 0;
        for ch in &chars {
            byte_offsets.push(offset);
            offset += ch.len_utf8();
        }
        byte_offsets.push(offset); // sentinel for EOF
        Lexer {
            chars,
            byte_offsets,
            pos: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Spanned>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let is_eof = spanned.token == Token::EOF;
            tokens.push(spanned);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }

    /// Skip whitespace, reporting whether any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        self.pos > start
    }

    /// Convert a char index to a byte offset.
    fn byte_pos_of(&self, char_idx: usize) -> usize {
        self.byte_offsets[char_idx.min(self.chars.len())]
    }

    fn spanned(&self, token: Token, start: usize, spaced: bool) -> Spanned {
        Spanned {
            token,
            span: Span {
                start: self.byte_pos_of(start),
                end: self.byte_pos_of(self.pos),
            },
            spaced,
        }
    }

    fn next_token(&mut self) -> Result<Spanned, LexError> {
        let spaced = self.skip_whitespace();
        let start = self.pos;

        let Some(ch) = self.advance() else {
            return Ok(self.spanned(Token::EOF, start, spaced));
        };

        let token = match ch {
            '-' => Token::Minus,
            ',' => Token::Comma,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            c if c.is_ascii_alphanumeric() => {
                while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_alphanumeric() {
                    self.pos += 1;
                }
                Token::Word(self.chars[start..self.pos].iter().collect())
            }
            _ => return Err(LexError::UnexpectedChar { ch, pos: self.byte_pos_of(start) }),
        };
        Ok(self.spanned(token, start, spaced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .filter(|t| !matches!(t, Token::EOF))
            .collect()
    }

    #[test]
    fn test_bracketed_list() {
        let tokens = lex("[0, 4, 7]");
        assert_eq!(
            tokens,
            vec![
                Token::LBracket,
                Token::Word("0".into()),
                Token::Comma,
                Token::Word("4".into()),
                Token::Comma,
                Token::Word("7".into()),
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn test_compact_run_is_one_word() {
        let tokens = lex("(047TE)");
        assert_eq!(
            tokens,
            vec![Token::LParen, Token::Word("047TE".into()), Token::RParen]
        );
    }

    #[test]
    fn test_negative_number() {
        let tokens = lex("{-1 3}");
        assert_eq!(
            tokens,
            vec![
                Token::LBrace,
                Token::Minus,
                Token::Word("1".into()),
                Token::Word("3".into()),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_spacing_is_tracked() {
        let spanned = Lexer::new("0 4,7").tokenize().unwrap();
        let spaced: Vec<bool> = spanned.iter().map(|s| s.spaced).collect();
        // 0, 4, ',', 7, EOF
        assert_eq!(spaced, vec![false, true, false, false, false]);
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let spanned = Lexer::new("[ 10 ]").tokenize().unwrap();
        assert_eq!(spanned[1].span, Span { start: 2, end: 4 });
    }

    #[test]
    fn test_decimal_point_rejected() {
        let err = Lexer::new("[4.5]").tokenize().unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '.', pos: 2 }));
    }
}
