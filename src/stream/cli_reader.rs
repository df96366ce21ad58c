use log::warn;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use crate::error::Error;
use crate::std_error::StdError;


/// Interactive line source backed by rustyline.
///
/// Ctrl-C and Ctrl-D both end input. A failing terminal is reported once,
/// after which the reader is exhausted.
pub struct CliReader {
    editor: Editor<CliHelper>,
    prompt: String,
    done: bool,
}

impl CliReader {
    pub fn new<S: Into<String>>(prompt: S) -> Self {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        Self {
            editor,
            prompt: prompt.into(),
            done: false,
        }
    }
}


impl Iterator for CliReader {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str());
                }
                Some(Ok(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                self.done = true;
                None
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                self.done = true;
                None
            }
            Err(err) => {
                warn!("Readline failed: {:?}", err);
                self.done = true;
                Some(err!(StdError::Readline(err.to_string())))
            }
        }
    }
}
