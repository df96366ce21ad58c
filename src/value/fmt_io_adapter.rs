//! Lets io::Write-generic writers target a fmt::Write.
//!
//! Value rendering is written once against io::Write so that it can go
//! straight to stdout, while fmt::Display hands us a fmt::Formatter.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    inner: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(inner: &'a mut F) -> Self {
        Self { inner }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // Values only ever render valid UTF-8.
        let s = from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.inner
            .write_str(s)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        Ok(s.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
