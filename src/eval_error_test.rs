use super::*;

use crate::error::Error;


#[test]
fn reify_division() {
    let err = EvalError::new(DivisionByZero, list!("/", 5i64, 0i64));
    assert_eq!(
        err.reify(),
        "(EvalError DivisionByZero (/ 5 0))".parse::<Value>().unwrap()
    );
}

#[test]
fn reify_arg_count() {
    let err = EvalError::new(
        WrongArgumentCount {
            given: 0,
            minimum: 1,
        },
        list!("min", "x"),
    );
    assert_eq!(
        err.reify().to_string(),
        "(EvalError (WrongArgumentCount (given 0) (minimum 1)) (min x))"
    );
}

#[test]
fn display() {
    let err = EvalError::new(Overflow, list!("*", i64::MAX, 2i64));
    assert_eq!(
        err.to_string(),
        format!("[Eval Error] Integer overflow in (* {} 2)", i64::MAX)
    );
}

#[test]
fn error_eq_by_reification() {
    let a = Error::new(Box::new(EvalError::new(DivisionByZero, list!("%", 1i64, 0i64))));
    let b = a.clone();
    let c = Error::new(Box::new(EvalError::new(Overflow, list!("%", 1i64, 0i64))));
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.to_string(), "[Eval Error] Division by zero in (% 1 0)");
}
