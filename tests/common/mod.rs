#![allow(dead_code)]

use std::borrow::Cow;

use lyper::error::Error;
use lyper::interpreter::eval;
use lyper::parser::ParseIter;
use lyper::repl::{Repl, ReplConfig};
use lyper::stream::StringReader;
use lyper::token::Tokenizer;
use lyper::value::Value;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

/// Evaluates every expression in s.
pub fn results_with_errors<S: AsRef<str>>(s: S) -> Vec<Result<Value, Error>> {
    ParseIter::from_tokens(Tokenizer::new(s.as_ref()))
        .map(|form| form.and_then(|form| eval(&form).map(Cow::into_owned)))
        .collect::<Vec<_>>()
}

pub fn results<S: AsRef<str>>(s: S) -> Vec<Value> {
    results_with_errors(s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

/// Runs a full uncolored session over input, returning what it printed.
pub fn run_repl<S: AsRef<str>>(input: S, banner: bool) -> String {
    let config = ReplConfig {
        color: false,
        banner,
        ..ReplConfig::default()
    };
    let mut out = Vec::new();
    Repl::new(StringReader::new(input), config)
        .run(&mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}
