/// An error that can be attributed to a single line of the source.
pub trait LineError {
    /// The 1-based line the error occurred on.
    fn line(&self) -> usize;
    fn describe(&self) -> String;
}
