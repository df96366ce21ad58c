use super::*;


#[test]
fn nested_list_macro() {
    let expected: Value = "(+ 1 (* 2 3) ())".parse().unwrap();
    assert_eq!(
        list!("+", 1i64, list!("*", 2i64, 3i64), list!()),
        expected
    );
}

#[test]
fn str_is_always_symbol() {
    assert_eq!(Value::from("12"), Value::Symbol("12".to_string()));
}

#[test]
fn operator_into_symbol() {
    assert_eq!(Value::from(Operator::Min), Value::Symbol("min".to_string()));
}

#[test]
fn vec_into_list() {
    let v = vec!["test", "ing"];
    assert_eq!(Value::from(v), "(test ing)".parse::<Value>().unwrap());
}

#[test]
fn integer_try_from() {
    let seven = Value::Integer(7);
    assert_eq!(i64::try_from(&seven), Ok(7));
    assert_eq!(i64::try_from(seven), Ok(7));

    let sym = Value::from("seven");
    assert_eq!(i64::try_from(&sym), Err(&sym));
    assert_eq!(i64::try_from(list!()), Err(list!()));
}
