use std::fmt;
use std::io;

use crate::error::{Error, ErrorKind};
use crate::value::Value;


/// Encapsulation of errors raised outside of Lyper itself.
#[derive(Clone, Debug)]
pub enum StdError {
    Io(io::ErrorKind, String),
    Readline(String),
}

impl ErrorKind for StdError {
    fn reify(&self) -> Value {
        match self {
            Self::Io(kind, _) => list!("StdError", "Io", format!("{:?}", kind)),
            Self::Readline(_) => list!("StdError", "Readline"),
        }
    }
}

impl fmt::Display for StdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_, msg) => write!(f, "[Io Error]: {}", msg),
            Self::Readline(msg) => write!(f, "[Readline Error]: {}", msg),
        }
    }
}

/// Allow for io::Errors to be used seamlessly with lyper::Errors.
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::new(Box::new(StdError::Io(err.kind(), err.to_string())))
    }
}
