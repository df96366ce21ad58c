//! Closed set of operators recognized in application position.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::value::Value;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOperator(pub String);


impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::Pow,
        Operator::Min,
        Operator::Max,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::Pow => "^",
            Operator::Min => "min",
            Operator::Max => "max",
        }
    }

    /// Result of applying the operator to no arguments, for operators that
    /// accept zero arguments.
    pub fn identity(self) -> Option<i64> {
        match self {
            Operator::Add => Some(0),
            Operator::Mul => Some(1),
            _ => None,
        }
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            "%" => Ok(Operator::Rem),
            "^" => Ok(Operator::Pow),
            "min" => Ok(Operator::Min),
            "max" => Ok(Operator::Max),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

impl<'a> TryFrom<&'a Value> for Operator {
    type Error = &'a Value;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Symbol(s) => s.parse().map_err(|_| value),
            _ => Err(value),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operator: \"{}\"", self.0)
    }
}


#[cfg(test)]
#[path = "./operator_test.rs"]
mod operator_test;
