//! A lexical scanner for arithmetic expressions over unsigned integers.
pub mod error;
pub mod scanner;
pub mod source_map;
