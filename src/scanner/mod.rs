//! Functionality for converting a character stream into a [`Token`] stream.
mod char_ext;
mod char_source;
mod error;
mod scanner;

pub mod tokens;

pub use error::*;
pub use scanner::*;

#[allow(unused_imports, reason = "Docstring uses this")]
use tokens::Token;
