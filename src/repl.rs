//! Line-at-a-time driver tying input streams to the interpreter.

use log::{debug, info};
use std::io::Write;

use crate::error::Error;
use crate::interpreter::interpret;
use crate::printer::Printer;
use crate::value::Value;


/// Line which ends a session.
pub const EXIT_COMMAND: &str = "exit";


#[derive(Clone, Debug)]
pub struct ReplConfig {
    pub prompt: String,
    pub marker: String,
    pub color: bool,
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "hyper> ".to_string(),
            marker: "=> ".to_string(),
            color: true,
            banner: true,
        }
    }
}


/// Interprets each line of input, yielding one result per non-blank line.
///
/// Input errors are passed through and do not end the session; the exit
/// command or exhausted input does.
pub struct Repl<I> {
    lines: I,
    config: ReplConfig,
    done: bool,
}

impl<I> Repl<I>
where
    I: Iterator<Item = Result<String, Error>>,
{
    pub fn new(lines: I, config: ReplConfig) -> Self {
        Self {
            lines,
            config,
            done: false,
        }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    pub fn banner() -> String {
        format!(
            "Lyper {}\nPress Ctrl+C or type '{}' to quit.",
            crate::VERSION,
            EXIT_COMMAND
        )
    }

    pub fn print_result<W: Write>(
        &self,
        w: &mut W,
        result: &Result<Value, Error>,
    ) -> Result<(), Error> {
        match result {
            Ok(val) => {
                write!(w, "{}", self.config.marker)?;
                Printer::new(self.config.color).write_value(w, val)?;
                writeln!(w)?;
            }
            Err(err) => {
                Printer::new(self.config.color).write_value(w, &err.kind().reify())?;
                writeln!(w)?;
            }
        }
        Ok(())
    }

    /// Drives the session to completion, printing every result to w.
    pub fn run<W: Write>(mut self, w: &mut W) -> Result<(), Error> {
        if self.config.banner {
            writeln!(w, "{}", Self::banner())?;
            w.flush()?;
        }

        while let Some(result) = self.next() {
            self.print_result(w, &result)?;
            w.flush()?;
        }
        info!("Session ended");
        Ok(())
    }
}

impl<I> Iterator for Repl<I>
where
    I: Iterator<Item = Result<String, Error>>,
{
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => return Some(Err(err)),
                None => {
                    self.done = true;
                    return None;
                }
            };

            if line == EXIT_COMMAND {
                debug!("Exit command read");
                self.done = true;
                return None;
            }
            // Blank lines produce no output.
            if let Some(result) = interpret(&line) {
                return Some(result);
            }
        }
    }
}


#[cfg(test)]
#[path = "./repl_test.rs"]
mod repl_test;
