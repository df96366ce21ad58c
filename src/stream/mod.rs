//! Line sources feeding the REPL.

pub mod input;

#[cfg(feature = "cli")]
mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_reader;

pub mod prelude {
    #[cfg(feature = "cli")]
    pub use super::cli_reader::CliReader;
    pub use super::input::{FileReader, StringReader};
    pub use super::LineStream;
}

#[cfg(feature = "cli")]
pub use cli_reader::CliReader;
pub use input::{FileReader, StringReader};

use crate::error::Error;


/// Type-erased line source, for picking a reader at runtime.
pub struct LineStream {
    source: Box<dyn Iterator<Item = Result<String, Error>>>,
}

impl LineStream {
    pub fn new<I>(source: I) -> Self
    where
        I: Iterator<Item = Result<String, Error>> + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }
}

impl Iterator for LineStream {
    type Item = Result<String, Error>;
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }
}
