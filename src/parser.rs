//! Module for parsing Lyper tokens into a Value tree.
//!
//! Parsing is lenient: an unterminated list is closed at end of input, and a
//! close paren with nothing to close is skipped. The only failure is nesting
//! deeper than MAX_DEPTH.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use std::fmt;

use crate::error::{Error, ErrorKind};
use crate::token::{Token, TokenKind};
use crate::value::Value;

use self::ParseErrorReason::*;

pub const MAX_DEPTH: usize = 128;


/// Parses the first expression of tokens.
///
/// Returns None if tokens holds no expression at all.
pub fn parse<I: IntoIterator<Item = Token>>(tokens: I) -> Result<Option<Value>, Error> {
    parse_sexp(&mut tokens.into_iter(), 0)
}

/// Parses one expression, leaving any tokens after it in the iterator.
pub fn parse_sexp<I: Iterator<Item = Token>>(
    tokens: &mut I,
    depth: usize,
) -> Result<Option<Value>, Error> {
    while let Some(token) = tokens.next() {
        match token.token {
            TokenKind::LeftParen => return parse_list(tokens, token, depth).map(Some),
            TokenKind::RightParen => {
                warn!("Skipping unmatched close paren @ {}", token.col);
            }
            TokenKind::Atom(text) => return Ok(Some(classify_atom(text))),
        }
    }
    Ok(None)
}

fn parse_list<I: Iterator<Item = Token>>(
    tokens: &mut I,
    open: Token,
    depth: usize,
) -> Result<Value, Error> {
    if depth >= MAX_DEPTH {
        return err!(ParseError {
            reason: DepthOverflow,
            token: open,
        });
    }

    let mut elements = Vec::new();
    loop {
        let token = match tokens.next() {
            Some(token) => token,
            None => {
                debug!("Implicitly closing list opened @ {}", open.col);
                break;
            }
        };

        match token.token {
            TokenKind::LeftParen => elements.push(parse_list(tokens, token, depth + 1)?),
            TokenKind::RightParen => break,
            TokenKind::Atom(text) => elements.push(classify_atom(text)),
        }
    }
    Ok(Value::List(elements))
}

/// Integer iff text is an optionally negative run of decimal digits that fits
/// in an i64; Symbol otherwise.
pub fn classify_atom(text: String) -> Value {
    lazy_static! {
        static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    }

    if INTEGER.is_match(&text) {
        match text.parse::<i64>() {
            Ok(i) => return Value::Integer(i),
            Err(_) => debug!("Integer literal out of range, keeping as symbol: {}", text),
        }
    }
    Value::Symbol(text)
}


/// Iterator over every top-level expression of a token stream.
pub struct ParseIter<I: Iterator<Item = Token>> {
    tokens: I,
}

impl<I: Iterator<Item = Token>> ParseIter<I> {
    pub fn from_tokens(tokens: I) -> Self {
        Self { tokens }
    }
}

impl<I: Iterator<Item = Token>> Iterator for ParseIter<I> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        parse_sexp(&mut self.tokens, 0).transpose()
    }
}


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorReason {
    DepthOverflow,
}

#[derive(Clone, Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    token: Token,
}

impl ParseError {
    pub fn reason(&self) -> ParseErrorReason {
        self.reason
    }
}

impl ErrorKind for ParseError {
    fn reify(&self) -> Value {
        list!(
            "ParseError",
            format!("{:?}", self.reason),
            self.token.col as i64,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            DepthOverflow => write!(
                f,
                "[Parse Error]: Lists nested deeper than {} @ {}",
                MAX_DEPTH, self.token.col
            ),
        }
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
