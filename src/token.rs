#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of ASCII letters and digits, e.g. `11`, `T`, `047TE`.
    Word(String),

    // Punctuation
    Minus,    // -
    Comma,    // ,
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Structural
    EOF,
}

impl Token {
    /// The closing delimiter matching an opening one.
    pub fn closer(&self) -> Option<Token> {
        match self {
            Token::LParen => Some(Token::RParen),
            Token::LBracket => Some(Token::RBracket),
            Token::LBrace => Some(Token::RBrace),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
    /// Whether whitespace separated this token from the previous one.
    pub spaced: bool,
}

/// Convert a token back to its source representation.
pub fn token_to_string(token: &Token) -> String {
    match token {
        Token::Word(s) => s.clone(),
        Token::Minus => "-".into(),
        Token::Comma => ",".into(),
        Token::LParen => "(".into(),
        Token::RParen => ")".into(),
        Token::LBracket => "[".into(),
        Token::RBracket => "]".into(),
        Token::LBrace => "{".into(),
        Token::RBrace => "}".into(),
        Token::EOF => "".into(),
    }
}
