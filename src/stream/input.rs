use log::{debug, trace};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::std_error::StdError;


/// Yields the lines of a file.
///
/// Read failures name the file and line they happened on.
pub struct FileReader {
    source: PathBuf,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl FileReader {
    pub fn open<P: AsRef<Path>>(source: P) -> Result<Self, Error> {
        let source = source.as_ref().to_path_buf();
        let lines = BufReader::new(File::open(&source)?).lines();
        debug!("Reading {}", source.display());

        Ok(Self {
            source,
            lines,
            line_number: 0,
        })
    }

    /// Number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for FileReader {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_number += 1;
        trace!("{}:{}", self.source.display(), self.line_number);
        Some(line.map_err(|err| {
            let msg = format!("{}:{}: {}", self.source.display(), self.line_number, err);
            Error::new(Box::new(StdError::Io(err.kind(), msg)))
        }))
    }
}


/// Yields the lines of an in-memory string.
pub struct StringReader {
    lines: VecDeque<String>,
}

impl StringReader {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self {
            lines: s.as_ref().lines().map(str::to_owned).collect(),
        }
    }
}

impl Iterator for StringReader {
    type Item = Result<String, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.lines.pop_front().map(Ok)
    }
}


#[cfg(test)]
#[path = "./input_test.rs"]
mod input_test;
