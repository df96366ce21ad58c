//! Module for representing S-exps.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use super::fmt_io_adapter::FmtIoAdapter;
use crate::error::Error;
use crate::parser::parse_sexp;
use crate::token::{Token, Tokenizer};


/// Node of an S-exp tree.
///
/// A List exclusively owns its elements, so a tree never shares nodes and
/// never contains cycles.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Integer(i64),
    Symbol(String),
    List(Vec<Value>),
}

#[derive(Debug)]
pub enum FromStrError {
    Empty,
    ParseError(Error),
    TrailingToken(Token),
}


impl Value {
    pub fn list<I, T>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(elements.into_iter().map(Into::into).collect())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(elements) => Some(elements.as_slice()),
            _ => None,
        }
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Value::List(elements) if elements.is_empty())
    }

    /// Writes the Value, deferring atoms and parens to the provided closures.
    ///
    /// write_atom is only ever handed Integers and Symbols. depth is the list
    /// nesting depth at which the atom or paren occurs.
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_atom: &mut F,
        write_paren: &mut P,
    ) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut W, &Value, usize) -> io::Result<()>,
        P: FnMut(&mut W, &str, usize) -> io::Result<()>,
    {
        let elements = match self {
            Value::List(elements) => elements,
            atom => return write_atom(w, atom, depth),
        };

        write_paren(w, "(", depth)?;
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                write!(w, " ")?;
            }
            element.write_list(w, depth + 1, write_atom, write_paren)?;
        }
        write_paren(w, ")", depth)
    }

    pub(crate) fn write_atom<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Value::Integer(i) => write!(w, "{}", i),
            Value::Symbol(s) => write!(w, "{}", s),
            Value::List(_) => write!(w, "{}", self),
        }
    }
}


impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self, f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.write_list(
            &mut FmtIoAdapter::new(f),
            0,
            &mut |writer, atom, _depth| atom.write_atom(writer),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        ) {
            Ok(()) => Ok(()),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::List(Vec::new())
    }
}


impl FromStr for Value {
    type Err = FromStrError;

    /// Parses exactly one expression; anything after it is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokenizer::new(s);
        let value = match parse_sexp(&mut tokens, 0) {
            Ok(Some(value)) => value,
            Ok(None) => return Err(FromStrError::Empty),
            Err(err) => return Err(FromStrError::ParseError(err)),
        };

        match tokens.next() {
            Some(token) => Err(FromStrError::TrailingToken(token)),
            None => Ok(value),
        }
    }
}

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No expression found"),
            Self::ParseError(err) => write!(f, "{}", err),
            Self::TrailingToken(token) => write!(f, "Trailing token: {}", token),
        }
    }
}

impl std::error::Error for FromStrError {}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
