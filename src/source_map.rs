//! Functionality for looking up lines in the source code.

/// Finds the line with the given 1-based line number.
/// Returns [`None`] if the source does not have that many lines.
pub fn find_line(source: &str, line_no: usize) -> Option<LineContext> {
    let index = line_no.checked_sub(1)?;
    inclusive_split_lines(source)
        .into_iter()
        .nth(index)
        .map(|line| LineContext { source: line, line_no })
}

/// Splits on line feeds, the only line break the scanner counts.
/// The line feed stays attached to the line it ends.
fn inclusive_split_lines(source: &str) -> Vec<&str> {
    let mut seen_lines: Vec<&str> = source.split_inclusive('\n').collect();
    if source.is_empty() || source.ends_with('\n') {
        seen_lines.push("");
    }
    seen_lines
}

/// Contains a slice pointing to a single line in the program,
/// together with its line number.
pub struct LineContext<'a> {
    source: &'a str,
    line_no: usize,
}
impl LineContext<'_> {
    pub fn for_display(&self) -> String {
        self.source.replace(['\r', '\n'], "")
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn find_line_of_empty_source() {
        let context = find_line("", 1).unwrap();

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.for_display(), "");
    }

    #[test]
    pub fn find_line_first_line() {
        let context = find_line("1 + 2\n3", 1).unwrap();

        assert_eq!(context.line_no(), 1);
        assert_eq!(context.for_display(), "1 + 2");
    }

    #[test]
    pub fn find_line_next_line() {
        let context = find_line("abc\r\ndef", 2).unwrap();

        assert_eq!(context.line_no(), 2);
        assert_eq!(context.for_display(), "def");
    }

    #[test]
    pub fn find_line_out_of_range() {
        assert!(find_line("abc", 0).is_none());
        assert!(find_line("abc", 2).is_none());
    }

    #[test]
    pub fn find_line_after_trailing_newline() {
        let context = find_line("abc\n", 2).unwrap();

        assert_eq!(context.for_display(), "");
    }

    #[test]
    pub fn inclusive_split_lines_empty_string() {
        let lines = inclusive_split_lines("");

        assert_eq!(lines, vec![""])
    }

    #[test]
    pub fn inclusive_split_lines_no_line_ending() {
        let lines = inclusive_split_lines("abcdef");

        assert_eq!(vec!["abcdef"], lines)
    }

    #[test]
    pub fn inclusive_split_lines_single_lf() {
        let lines = inclusive_split_lines("abc\ndef");

        assert_eq!(vec!["abc\n", "def"], lines)
    }

    #[test]
    pub fn inclusive_split_lines_cr_is_not_a_break() {
        let lines = inclusive_split_lines("abc\rdef");

        assert_eq!(vec!["abc\rdef"], lines)
    }

    #[test]
    pub fn inclusive_split_lines_mixed_endings() {
        let lines = inclusive_split_lines("abc\r\nd\n\ne");

        assert_eq!(vec!["abc\r\n", "d\n", "\n", "e"], lines)
    }
}
