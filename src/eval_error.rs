use std::fmt;

use crate::error::ErrorKind;
use crate::value::Value;

use self::EvalErrorReason::*;


/// Arithmetic-domain failure of an application.
///
/// Aborts the top-level expression being evaluated; nothing else.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    reason: EvalErrorReason,
    form: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalErrorReason {
    DivisionByZero,
    Overflow,
    WrongArgumentCount { given: usize, minimum: usize },
}


impl EvalError {
    pub fn new(reason: EvalErrorReason, form: Value) -> Self {
        Self { reason, form }
    }

    pub fn reason(&self) -> EvalErrorReason {
        self.reason
    }

    /// The application whose fold failed.
    pub fn form(&self) -> &Value {
        &self.form
    }
}

impl ErrorKind for EvalError {
    fn reify(&self) -> Value {
        let reason = match self.reason {
            DivisionByZero => Value::from("DivisionByZero"),
            Overflow => Value::from("Overflow"),
            WrongArgumentCount { given, minimum } => list!(
                "WrongArgumentCount",
                list!("given", given as i64),
                list!("minimum", minimum as i64),
            ),
        };
        list!("EvalError", reason, self.form.clone())
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Eval Error] ")?;
        match self.reason {
            DivisionByZero => write!(f, "Division by zero"),
            Overflow => write!(f, "Integer overflow"),
            WrongArgumentCount { given, minimum } => write!(
                f,
                "Wrong argument count: given {}, expected at least {}",
                given, minimum
            ),
        }?;
        write!(f, " in {}", self.form)
    }
}


#[cfg(test)]
#[path = "./eval_error_test.rs"]
mod eval_error_test;
