//! Textual rendering of Values for the REPL.

use colored::*;
use std::io::{self, BufWriter, Write};

use crate::value::Value;


#[derive(Clone, Copy, Debug)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn write_value<W: Write>(&self, w: &mut W, value: &Value) -> io::Result<()> {
        fn paren_color(depth: usize) -> (u8, u8, u8) {
            match depth % 6 {
                0 => (0, 255, 204),
                1 => (204, 51, 0),
                2 => (153, 255, 102),
                3 => (153, 102, 255),
                4 => (255, 255, 102),
                _ => (255, 179, 179),
            }
        }

        let color = self.color;
        value.write_list(
            w,
            0,
            &mut |writer, atom, _depth| atom.write_atom(writer),
            &mut |writer, paren, depth| {
                if color {
                    let (r, g, b) = paren_color(depth);
                    write!(writer, "{}", paren.truecolor(r, g, b))
                } else {
                    write!(writer, "{}", paren)
                }
            },
        )
    }

    pub fn print_value(&self, value: &Value) {
        let mut writer = BufWriter::new(io::stdout());
        if let Err(err) = self
            .write_value(&mut writer, value)
            .and_then(|_| writer.flush())
        {
            println!("print_value error: {:?}", err);
        }
    }

    pub fn render(&self, value: &Value) -> String {
        let mut out = Vec::new();
        // Writing to a Vec can't fail, and Values only render UTF-8.
        let _ = self.write_value(&mut out, value);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(false)
    }
}


#[cfg(test)]
#[path = "./printer_test.rs"]
mod printer_test;
