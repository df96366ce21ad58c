use rustyline::completion::{Candidate, Completer};
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hint, Hinter};
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::operator::Operator;


// Rustyline Helper for CliReader.
#[derive(Default)]
pub struct CliHelper {}

pub struct OperatorCandidate {
    name: &'static str,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {}
    }
}

/// Byte offset where the word ending at pos begins.
pub(super) fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace() || *c == '(' || *c == ')')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Operator names starting with prefix, in Operator::ALL order.
pub(super) fn candidates(prefix: &str) -> Vec<&'static str> {
    Operator::ALL
        .iter()
        .map(|op| op.name())
        .filter(|name| name.starts_with(prefix))
        .collect()
}


impl Completer for CliHelper {
    type Candidate = OperatorCandidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let start = word_start(line, pos);
        Ok((
            start,
            candidates(&line[start..pos])
                .into_iter()
                .map(|name| OperatorCandidate { name })
                .collect(),
        ))
    }
}


impl Helper for CliHelper {}
impl Hinter for CliHelper {
    type Hint = OperatorCandidate;
}
impl Highlighter for CliHelper {}
impl Validator for CliHelper {}


impl Candidate for OperatorCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn replacement(&self) -> &str {
        self.name
    }
}

impl Hint for OperatorCandidate {
    fn display(&self) -> &str {
        self.name
    }

    fn completion(&self) -> Option<&str> {
        Some(self.name)
    }
}


#[cfg(test)]
#[path = "./cli_helper_test.rs"]
mod cli_helper_test;
