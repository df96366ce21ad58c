mod common;

use std::fs;

use lyper::repl::{Repl, ReplConfig};
use lyper::stream::{FileReader, LineStream, StringReader};
use lyper::value::Value;


#[test]
fn session_transcript() {
    common::setup();

    let out = common::run_repl(
        "(+ 1 2)\n\n(foo 1 2)\n(/ 5 0)\n(* 6 7)\nexit\n(+ 100 1)\n",
        false,
    );
    assert_eq!(
        out,
        "=> 3\n=> (foo 1 2)\n(EvalError DivisionByZero (/ 5 0))\n=> 42\n"
    );
}

#[test]
fn session_banner() {
    common::setup();

    let out = common::run_repl("", true);
    assert_eq!(
        out,
        format!(
            "Lyper {}\nPress Ctrl+C or type 'exit' to quit.\n",
            lyper::VERSION
        )
    );
}

#[test]
fn wrong_argument_count_printed() {
    common::setup();

    let out = common::run_repl("(max a b)", false);
    assert_eq!(
        out,
        "(EvalError (WrongArgumentCount (given 0) (minimum 1)) (max a b))\n"
    );
}

#[test]
fn file_session() {
    common::setup();

    let path = std::env::temp_dir().join(format!("lyper_file_session_{}.lisp", std::process::id()));
    fs::write(&path, "(^ 2 8)\n   \n(min 3 (- 1 5))\n").unwrap();

    let lines = LineStream::new(FileReader::open(&path).unwrap());
    let results: Vec<_> = Repl::new(lines, ReplConfig::default()).collect();
    assert_eq!(results, vec![Ok(Value::Integer(256)), Ok(Value::Integer(-4))]);

    fs::remove_file(&path).unwrap();
}

#[test]
fn custom_marker() {
    common::setup();

    let config = ReplConfig {
        marker: "-> ".to_string(),
        color: false,
        banner: false,
        ..ReplConfig::default()
    };
    let mut out = Vec::new();
    Repl::new(StringReader::new("(% 17 5)"), config)
        .run(&mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "-> 2\n");
}
