use std::{
    io::{self, BufReader, Bytes, Read},
    iter::Peekable,
};

use super::char_ext::CharExt;

/// Character reader over a UTF-8 byte stream, with a single pushback slot
/// and line tracking. Malformed UTF-8 reads as [`char::REPLACEMENT_CHARACTER`].
///
/// A newline is counted when it is first read from the stream. Replaying
/// a put back newline does not count it a second time.
pub struct CharSource<R: Read> {
    bytes: Peekable<Bytes<BufReader<R>>>,
    pending: Option<char>,
    line: usize,
}

impl<R: Read> CharSource<R> {
    /// Constructs a new [`CharSource`] reading from `reader`,
    /// starting on line `1`.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes().peekable(),
            pending: None,
            line: 1,
        }
    }

    /// Reads the next character.
    /// Returns the pending character if there is one, otherwise reads from
    /// the stream. Returns [`None`] once the stream is exhausted.
    pub fn next(&mut self) -> io::Result<Option<char>> {
        if let Some(ch) = self.pending.take() {
            return Ok(Some(ch));
        }

        let next = self.decode()?;
        if let Some(ch) = next {
            if ch.is_linebreak() {
                self.line += 1;
            }
        }
        Ok(next)
    }

    /// Decodes one character from the stream. A sequence cut short by a
    /// non-continuation byte stops before that byte.
    fn decode(&mut self) -> io::Result<Option<char>> {
        let Some(first) = self.bytes.next().transpose()? else {
            return Ok(None);
        };
        if first.is_ascii() {
            return Ok(Some(char::from(first)));
        }

        let width = match first {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 1,
        };
        let mut encoded = vec![first];
        while encoded.len() < width {
            match self.bytes.peek() {
                Some(Ok(byte)) if (0x80..=0xBF).contains(byte) => {
                    encoded.push(*byte);
                    self.bytes.next();
                }
                _ => break,
            }
        }

        let ch = std::str::from_utf8(&encoded)
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(ch))
    }

    /// Puts back a character, so that the next call to [`CharSource::next`]
    /// returns it again.
    /// Panics if a character is already pending.
    pub fn put_back(&mut self, ch: char) {
        assert!(
            self.pending.is_none(),
            "Cannot put back {:?}: {:?} is already pending",
            ch,
            self.pending
        );
        self.pending = Some(ch);
    }

    /// Reads the next character and consumes it if it matches `character`.
    /// Otherwise it is put back. Returns true if the character was consumed.
    pub fn recognise(&mut self, character: char) -> io::Result<bool> {
        match self.next()? {
            Some(ch) if ch == character => Ok(true),
            Some(ch) => {
                self.put_back(ch);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// The current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
}
