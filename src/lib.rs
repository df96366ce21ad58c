//! Lyper: a minimal integer-arithmetic Lisp.
//!
//! Lines of input are tokenized, parsed into a Value tree and evaluated.
//! Lists headed by a known operator are applied; everything else evaluates
//! to itself.
//!
//! Note that this crate does *not* setup logging, clients should take care of
//! that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod value;
#[macro_use]
pub mod error;

pub mod builtins;
pub mod eval_error;
pub mod interpreter;
pub mod operator;
pub mod parser;
pub mod printer;
pub mod repl;
pub mod std_error;
pub mod stream;
pub mod token;

pub mod prelude {
    pub use crate::error::{Error, ErrorKind};
    pub use crate::eval_error::{EvalError, EvalErrorReason};
    pub use crate::interpreter::{eval, interpret};
    pub use crate::operator::Operator;
    pub use crate::parser::{parse, ParseIter};
    pub use crate::printer::Printer;
    pub use crate::repl::{Repl, ReplConfig};
    pub use crate::std_error::StdError;
    pub use crate::stream::prelude::*;
    pub use crate::token::Tokenizer;
    pub use crate::value::Value;
    // Macros.
    pub use crate::{err, list};
}


pub const VERSION: &str = env!("CARGO_PKG_VERSION");
