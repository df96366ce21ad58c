mod common;

use lyper::error::Error;
use lyper::eval_error::{EvalError, EvalErrorReason};
use lyper::list;
use lyper::printer::Printer;
use lyper::value::Value;


fn eval_error(reason: EvalErrorReason, form: &str) -> Error {
    Error::new(Box::new(EvalError::new(reason, form.parse().unwrap())))
}

#[test]
fn basic_arithmetic() {
    common::setup();

    let results = common::results("(+ 1 2 3) (+) (*) (- 10 2 3) (- 7)");
    assert_eq!(
        results,
        vec![
            Value::Integer(6),
            Value::Integer(0),
            Value::Integer(1),
            Value::Integer(5),
            Value::Integer(7)
        ]
    );

    let results = common::results("(min 4 2 9 1) (max 4 2 9 1) (/ -7 2) (% -7 2) (^ 3 4)");
    assert_eq!(
        results,
        vec![
            Value::Integer(1),
            Value::Integer(9),
            Value::Integer(-3),
            Value::Integer(-1),
            Value::Integer(81)
        ]
    );
}

#[test]
fn integers_self_evaluate() {
    common::setup();

    for n in [0, 1, -1, 42, -1000, i64::MAX, i64::MIN].iter() {
        let results = common::results(n.to_string());
        assert_eq!(results, vec![Value::Integer(*n)]);
    }
}

#[test]
fn symbols_self_evaluate() {
    common::setup();

    for s in ["foo", "+", "1x", "-", "--5", "3.14", "99999999999999999999"].iter() {
        let results = common::results(s);
        assert_eq!(results, vec![Value::Symbol(s.to_string())]);
    }
}

#[test]
fn inert_lists() {
    common::setup();

    let results = common::results("() (foo 1 2) ((+ 1 2) 3)");
    assert_eq!(
        results,
        vec![
            list!(),
            list!("foo", 1i64, 2i64),
            list!(list!("+", 1i64, 2i64), 3i64)
        ]
    );
}

#[test]
fn error_then_continue() {
    common::setup();

    let results = common::results_with_errors("(/ 5 0) (+ 1 1) (* 9223372036854775807 2) 3");
    assert_eq!(
        results,
        vec![
            Err(eval_error(EvalErrorReason::DivisionByZero, "(/ 5 0)")),
            Ok(Value::Integer(2)),
            Err(eval_error(
                EvalErrorReason::Overflow,
                "(* 9223372036854775807 2)"
            )),
            Ok(Value::Integer(3))
        ]
    );
}

#[test]
fn negative_exponents() {
    common::setup();

    let results = common::results("(^ 2 -1) (^ 1 -5) (^ -1 -3) (^ -1 -4)");
    assert_eq!(
        results,
        vec![
            Value::Integer(0),
            Value::Integer(1),
            Value::Integer(-1),
            Value::Integer(1)
        ]
    );
    let results = common::results_with_errors("(^ 0 -2)");
    assert_eq!(
        results,
        vec![Err(eval_error(EvalErrorReason::DivisionByZero, "(^ 0 -2)"))]
    );
}

#[test]
fn printed_trees_reparse() {
    common::setup();

    let printer = Printer::default();
    for s in [
        "(a (b (c)) () -12 (+ x y))",
        "(((((deep)))))",
        "(min max % ^ / * - +)",
    ]
    .iter()
    {
        let tree: Value = s.parse().unwrap();
        let printed = printer.render(&tree);
        assert_eq!(&printed, s);
        assert_eq!(printed.parse::<Value>().unwrap(), tree);
    }
}

#[test]
fn malformed_input_never_panics() {
    common::setup();

    let inputs = [
        ")",
        ")))(",
        "(+ 1",
        "((((",
        "(+ 1 2))) (- 3",
        "(/ 1 (",
        "(^ 2 99999999999)",
        "(% -9223372036854775808 -1)",
        "(- -9223372036854775808)",
        "(- 0 -9223372036854775808)",
    ];
    for input in inputs.iter() {
        let _ = common::results_with_errors(input);
    }

    let deep = format!("{}1{}", "(+ ".repeat(10_000), ")".repeat(10_000));
    assert!(common::results_with_errors(&deep)
        .iter()
        .any(|res| res.is_err()));
}

#[test]
fn lenient_parsing() {
    common::setup();

    // Unterminated lists close at end of input; stray closers are skipped.
    let results = common::results("(+ 1 (* 2 3");
    assert_eq!(results, vec![Value::Integer(7)]);
    let results = common::results(") 5 )");
    assert_eq!(results, vec![Value::Integer(5)]);
    let results = common::results("   ");
    assert!(results.is_empty());
}
