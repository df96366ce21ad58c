// Public exports.
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

// Public mods.
pub mod token;

// Private mods.
mod tokenizer;
