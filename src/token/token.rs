use std::fmt;


#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    Atom(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub token: TokenKind,
    /// Byte offset of the token's first char within the scanned text.
    pub col: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            TokenKind::Atom(text) => write!(f, "{} @ {}", text, self.col),
            _ => write!(f, "{:?} @ {}", self.token, self.col),
        }
    }
}
