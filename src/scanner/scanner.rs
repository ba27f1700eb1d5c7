//! Scanning functions for producing a token stream.
use std::io::Read;

use log::{debug, trace};

use super::{char_ext::*, char_source::*, error::*, tokens::*};

type ScanResult<T> = Result<T, ScanError>;

/// Converts a character stream into [`Token`]s, one per call to
/// [`Scanner::scan`].
pub struct Scanner<R: Read> {
    chars: CharSource<R>,
}

/// Scans an entire source string, returning every token it contains.
pub fn scan_str(source: &str) -> ScanResult<Vec<Token>> {
    scan_reader(source.as_bytes())
}

/// Scans an entire stream, returning every token it contains.
pub fn scan_reader<R: Read>(reader: R) -> ScanResult<Vec<Token>> {
    Scanner::new(reader).tokens().collect()
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            chars: CharSource::new(reader),
        }
    }

    /// An iterator over the remaining tokens. It stops at the end of the
    /// input or after the first error.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }

    /// The current 1-based line number.
    pub fn line(&self) -> usize {
        self.chars.line()
    }

    /// Scans the next token.
    /// Returns `Ok(None)` once the end of the input has been reached.
    pub fn scan(&mut self) -> ScanResult<Option<Token>> {
        let (ch, line) = match self.skip()? {
            Some(significant) => significant,
            None => {
                debug!("End of input on line {}", self.line());
                return Ok(None);
            }
        };

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            _ => match ch.digit_value() {
                Some(digit) => TokenKind::IntLiteral(self.scan_integer(digit, line)?),
                None => {
                    return Err(LexError::new(line, ErrorType::UnrecognisedCharacter(ch)).into())
                }
            },
        };

        let token = Token::new(kind, line);
        trace!("Scanned {} on line {}", token, line);
        Ok(Some(token))
    }

    /// Skips past whitespace and comments.
    /// Returns the first significant character together with the line it
    /// was read on, or [`None`] at the end of the input.
    fn skip(&mut self) -> ScanResult<Option<(char, usize)>> {
        loop {
            let ch = match self.chars.next()? {
                Some(ch) if ch.is_insignificant() => continue,
                Some(ch) => ch,
                None => return Ok(None),
            };
            let line = self.line();

            if ch != '/' {
                return Ok(Some((ch, line)));
            }

            if self.chars.recognise('/')? {
                self.skip_line_comment()?;
            } else if self.chars.recognise('*')? {
                self.skip_block_comment(line)?;
            } else {
                return Ok(Some(('/', line)));
            }
        }
    }

    /// Consumes a line comment, up to and including the next line break.
    /// Running into the end of the input simply ends the comment.
    fn skip_line_comment(&mut self) -> ScanResult<()> {
        let start = self.line();
        while let Some(ch) = self.chars.next()? {
            if ch.is_linebreak() {
                break;
            }
        }
        debug!("Skipped line comment on line {}", start);
        Ok(())
    }

    /// Consumes a block comment, up to and including the closing `*/`.
    /// `start` is the line of the opening `/*`, reported if the comment is
    /// never closed.
    fn skip_block_comment(&mut self, start: usize) -> ScanResult<()> {
        loop {
            match self.chars.next()? {
                Some('*') => {
                    // Another '*' may itself start the closing sequence.
                    while self.chars.recognise('*')? {}
                    if self.chars.recognise('/')? {
                        debug!("Skipped block comment on lines {}-{}", start, self.line());
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => return Err(LexError::new(start, ErrorType::UnterminatedComment).into()),
            }
        }
    }

    /// Accumulates a run of decimal digits, seeded with `first`.
    /// The first non-digit character is put back.
    fn scan_integer(&mut self, first: u32, line: usize) -> ScanResult<i64> {
        let mut value = Some(i64::from(first));

        while let Some(ch) = self.chars.next()? {
            match ch.digit_value() {
                Some(digit) => {
                    value = value
                        .and_then(|v| v.checked_mul(10))
                        .and_then(|v| v.checked_add(i64::from(digit)));
                }
                None => {
                    self.chars.put_back(ch);
                    break;
                }
            }
        }

        value.ok_or_else(|| LexError::new(line, ErrorType::IntegerOverflow).into())
    }
}

/// Iterator over the tokens of a [`Scanner`], see [`Scanner::tokens`].
pub struct Tokens<'s, R: Read> {
    scanner: &'s mut Scanner<R>,
    finished: bool,
}

impl<R: Read> Iterator for Tokens<'_, R> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.scanner.scan().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.finished = true;
        }
        result
    }
}

impl<R: Read> std::iter::FusedIterator for Tokens<'_, R> {}
