//! Representation of errors which can be reified as Lyper values.
//!
//! General error mechanism that can use any ErrorKind. Reification allows for
//! errors to be printed through the same path as evaluation results.

use dyn_clone::DynClone;
use std::fmt;

use crate::value::Value;


/// Creates an Error wrapped in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::Error::new(Box::new($($kind)+)))
    };
}


#[derive(Clone, Debug)]
pub struct Error {
    kind: Box<dyn ErrorKind>,
}

pub trait ErrorKind: fmt::Display + fmt::Debug + DynClone {
    fn reify(&self) -> Value;
}


impl Error {
    /// Prefer using err! for convenience.
    pub fn new(kind: Box<dyn ErrorKind>) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &dyn ErrorKind {
        &*self.kind
    }
}

impl PartialEq for Error {
    /// Compare kind.
    fn eq(&self, other: &Self) -> bool {
        self.kind().reify() == other.kind().reify()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

impl std::error::Error for Error {}

dyn_clone::clone_trait_object!(ErrorKind);
