//! Useful character extensions.

/// Decimal digits, indexed by their value.
const DIGITS: &str = "0123456789";

pub trait CharExt {
    /// Whitespace and control codes, i.e. everything below `'!'`.
    fn is_insignificant(&self) -> bool;

    fn is_linebreak(&self) -> bool;

    /// The value of a decimal digit, or [`None`] if this is not one.
    fn digit_value(&self) -> Option<u32>;
}
impl CharExt for char {
    fn is_insignificant(&self) -> bool {
        (*self as u32) < 33
    }

    fn is_linebreak(&self) -> bool {
        *self == '\n'
    }

    fn digit_value(&self) -> Option<u32> {
        DIGITS.find(*self).map(|pos| pos as u32)
    }
}
