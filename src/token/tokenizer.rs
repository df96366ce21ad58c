//! Module for breaking Lyper text into tokens.

use log::trace;
use std::iter::FusedIterator;

use super::token::{Token, TokenKind};


/// Lazily scans a line of text into Tokens.
///
/// The only state is the scan position, so a Tokenizer can't be restarted;
/// make a new one instead.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Text that has not been scanned yet.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}


impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = self.remaining();
        let trimmed = rest.trim_start();
        let start = self.pos + (rest.len() - trimmed.len());

        let c = match trimmed.chars().next() {
            Some(c) => c,
            None => {
                self.pos = self.input.len();
                return None;
            }
        };

        let token = match c {
            '(' => {
                self.pos = start + 1;
                TokenKind::LeftParen
            }
            ')' => {
                self.pos = start + 1;
                TokenKind::RightParen
            }
            _ => {
                let len = trimmed.find(is_delimiter).unwrap_or_else(|| trimmed.len());
                self.pos = start + len;
                TokenKind::Atom(trimmed[..len].to_string())
            }
        };

        trace!("Token {:?} @ {}", token, start);
        Some(Token { token, col: start })
    }
}

impl<'a> FusedIterator for Tokenizer<'a> {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
