//! Conversions into and out of Values.

use std::convert::TryFrom;

use super::value::Value;
use crate::operator::Operator;


/// Returns the elements as a Value list.
///
/// Provided elements must implement Into<Value>. Nest by nesting list!.
///
/// Example:
///   list!("+", 1i64, list!("*", 2i64, 3i64))
#[macro_export]
macro_rules! list {
    ($($elem:expr),* $(,)?) => {
        $crate::value::Value::List(vec![$(<$crate::value::Value>::from($elem)),*])
    };
}


impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

/// Always produces a Symbol; no integer classification happens here.
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Symbol(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Symbol(s)
    }
}

impl From<Operator> for Value {
    fn from(op: Operator) -> Self {
        Value::Symbol(op.name().to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        Value::list(vec)
    }
}


impl TryFrom<Value> for i64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if let Value::Integer(i) = value {
            Ok(i)
        } else {
            Err(value)
        }
    }
}

impl<'a> TryFrom<&'a Value> for i64 {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        if let Value::Integer(i) = value {
            Ok(*i)
        } else {
            Err(value)
        }
    }
}


#[cfg(test)]
#[path = "./value_conversion_test.rs"]
mod value_conversion_test;
