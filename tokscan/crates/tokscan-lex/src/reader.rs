//! Rune reader with a single pushback slot.
//!
//! This module provides [`RuneReader`], which decodes UTF-8 characters from
//! any [`Read`] source through a [`BufReader`] and lets the scanner put back
//! exactly one character. Position tracking lives in the scanner, not here.

use std::io::{BufRead, BufReader, ErrorKind, Read};

use crate::error::{Result, ScanError};

/// Character substituted for malformed UTF-8.
pub const REPLACEMENT: char = '\u{FFFD}';

/// A character source that supports reading one character at a time and
/// unreading at most one.
///
/// # Example
///
/// ```
/// use tokscan_lex::RuneReader;
///
/// let mut reader = RuneReader::new("ab".as_bytes());
/// assert_eq!(reader.read_rune().unwrap(), Some('a'));
/// reader.unread('a').unwrap();
/// assert_eq!(reader.read_rune().unwrap(), Some('a'));
/// assert_eq!(reader.read_rune().unwrap(), Some('b'));
/// assert_eq!(reader.read_rune().unwrap(), None);
/// ```
pub struct RuneReader<R> {
    /// Buffered byte source.
    inner: BufReader<R>,

    /// Character pushed back by [`unread`](Self::unread), if any.
    pending: Option<char>,

    /// Bytes taken from `inner` but not yet decoded.
    ahead: [u8; 4],

    /// Number of valid bytes in `ahead`.
    ahead_len: usize,
}

impl<R: Read> RuneReader<R> {
    /// Wraps a byte reader.
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            pending: None,
            ahead: [0; 4],
            ahead_len: 0,
        }
    }

    /// Reads the next character.
    ///
    /// Returns the pushed-back character first if there is one. `Ok(None)`
    /// means end of stream; any other read failure is returned as
    /// [`ScanError::Io`].
    pub fn read_rune(&mut self) -> Result<Option<char>> {
        if let Some(c) = self.pending.take() {
            return Ok(Some(c));
        }
        self.decode()
    }

    /// Pushes `c` back so the next [`read_rune`](Self::read_rune) returns it.
    ///
    /// Fails with [`ScanError::PushbackOverflow`] if a character is already
    /// waiting.
    pub fn unread(&mut self, c: char) -> Result<()> {
        match self.pending {
            Some(pending) => Err(ScanError::PushbackOverflow {
                pending,
                rejected: c,
            }),
            None => {
                self.pending = Some(c);
                Ok(())
            },
        }
    }

    /// Returns true if a pushed-back character is waiting.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Decodes one scalar from the lookahead.
    ///
    /// A malformed sequence yields [`REPLACEMENT`] and consumes only its
    /// first byte, so every bad byte becomes its own character.
    fn decode(&mut self) -> Result<Option<char>> {
        if self.ahead_len == 0 && !self.buffer_next()? {
            return Ok(None);
        }
        let needed = sequence_len(self.ahead[0]);
        while self.ahead_len < needed && self.buffer_next()? {}

        let bytes = &self.ahead[..self.ahead_len];
        let valid_len = match std::str::from_utf8(bytes) {
            Ok(_) => bytes.len(),
            Err(e) => e.valid_up_to(),
        };
        let decoded = std::str::from_utf8(&bytes[..valid_len])
            .ok()
            .and_then(|s| s.chars().next());
        let (c, used) = match decoded {
            Some(c) => (c, c.len_utf8()),
            None => (REPLACEMENT, 1),
        };

        self.ahead.copy_within(used..self.ahead_len, 0);
        self.ahead_len -= used;
        Ok(Some(c))
    }

    /// Moves one byte from `inner` into the lookahead. Returns false at end
    /// of stream.
    fn buffer_next(&mut self) -> Result<bool> {
        let Some(b) = self.peek_byte()? else {
            return Ok(false);
        };
        self.inner.consume(1);
        self.ahead[self.ahead_len] = b;
        self.ahead_len += 1;
        Ok(true)
    }

    fn peek_byte(&mut self) -> Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ScanError::Io(e)),
            }
        }
    }
}

/// Length of the UTF-8 sequence introduced by `lead`, or 1 if `lead` cannot
/// start one.
fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}
