#[macro_use]
mod value_conversion;

pub mod value;

mod fmt_io_adapter;


pub use value::{FromStrError, Value};
