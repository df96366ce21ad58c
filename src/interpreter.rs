//! Tree-walking evaluation of Values.

use log::debug;
use std::borrow::Cow;
use std::convert::TryFrom;

use crate::builtins::{self, Args};
use crate::error::Error;
use crate::eval_error::EvalError;
use crate::operator::Operator;
use crate::parser::parse;
use crate::token::Tokenizer;
use crate::value::Value;


/// Evaluates form without modifying it.
///
/// Self-evaluating forms come back borrowed; applications come back as a
/// freshly owned Integer.
pub fn eval(form: &Value) -> Result<Cow<'_, Value>, Error> {
    let elements = match form {
        Value::List(elements) => elements,
        _ => return Ok(Cow::Borrowed(form)),
    };

    let op = match elements.first().map(Operator::try_from) {
        Some(Ok(op)) => op,
        // Empty lists and anything not headed by an operator are data.
        _ => return Ok(Cow::Borrowed(form)),
    };

    debug!("Applying {}: {}", op, form);
    let args = evlis(&elements[1..])?;
    match builtins::apply(op, args) {
        Ok(result) => Ok(Cow::Owned(Value::Integer(result))),
        Err(reason) => err!(EvalError::new(reason, form.clone())),
    }
}

/// Evaluates args left to right, keeping only the Integer results.
fn evlis(args: &[Value]) -> Result<Args, Error> {
    let mut res = Args::with_capacity(args.len());
    for arg in args {
        let val = eval(arg)?;
        match i64::try_from(val.as_ref()) {
            Ok(i) => res.push(i),
            Err(other) => debug!("Dropping non-integer argument: {}", other),
        }
    }
    Ok(res)
}

/// Tokenizes, parses and evaluates the first expression in line.
///
/// Returns None if line holds no expression.
pub fn interpret<S: AsRef<str>>(line: S) -> Option<Result<Value, Error>> {
    let form = match parse(Tokenizer::new(line.as_ref())) {
        Ok(Some(form)) => form,
        Ok(None) => return None,
        Err(err) => return Some(Err(err)),
    };

    debug!("Interpreting: {}", form);
    let result = eval(&form).map(Cow::into_owned);
    Some(result)
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
