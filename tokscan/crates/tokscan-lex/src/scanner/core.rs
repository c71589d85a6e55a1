//! Core scanner implementation.
//!
//! This module contains the Scanner struct, the `next_token` dispatch loop
//! and the read/backup primitives the literal lexers build on.

use std::io::Read;

use tracing::{debug, error, trace};

use crate::error::{Result, ScanError};
use crate::reader::RuneReader;
use crate::token::{Position, Token, TokenKind};
use crate::unicode::{is_digit, is_letter, is_whitespace};

/// Scanner over a character stream.
///
/// The scanner pulls characters from a [`RuneReader`] and classifies them
/// into tokens, one token per [`next_token`](Scanner::next_token) call. It
/// tracks the line and column of the cursor as it goes.
///
/// # Example
///
/// ```
/// use tokscan_lex::{Position, Scanner, TokenKind};
///
/// let mut scanner = Scanner::from_str("x = 42;");
///
/// let tok = scanner.next_token().unwrap();
/// assert_eq!(tok.kind(), TokenKind::Ident);
/// assert_eq!(tok.literal(), "x");
/// assert_eq!(tok.pos(), Position::new(1, 1));
///
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Assign);
/// assert_eq!(scanner.next_token().unwrap().literal(), "42");
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Semi);
/// assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Eof);
/// ```
pub struct Scanner<R> {
    /// Character source with one-slot pushback.
    reader: RuneReader<R>,

    /// Cursor position.
    pos: Position,

    /// Set once a fatal error has been returned.
    terminated: bool,

    /// Set once the iterator adapter has yielded its last item.
    exhausted: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader: RuneReader::new(reader),
            pos: Position::START,
            terminated: false,
            exhausted: false,
        }
    }

    /// Returns the next token from the stream.
    ///
    /// Whitespace and newlines are skipped. At end of stream this returns
    /// an `Eof` token, and keeps returning it on every later call without
    /// moving the cursor.
    ///
    /// # Errors
    ///
    /// A read failure other than end-of-stream ends the session: it is
    /// returned as [`ScanError::Io`], and every later call returns
    /// [`ScanError::Terminated`].
    pub fn next_token(&mut self) -> Result<Token> {
        if self.terminated {
            return Err(ScanError::Terminated);
        }

        match self.scan() {
            Ok(token) => {
                trace!(pos = %token.pos(), kind = %token.kind(), literal = token.literal(), "token");
                Ok(token)
            },
            Err(e) => {
                error!(pos = %self.pos, error = %e, "scanner terminated");
                self.terminated = true;
                Err(e)
            },
        }
    }

    /// Returns the current cursor position.
    ///
    /// Before any token is read this is line 1, column 0.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Returns true once a fatal error has ended the session.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    fn scan(&mut self) -> Result<Token> {
        loop {
            let Some(c) = self.read()? else {
                debug!(pos = %self.pos, "end of stream");
                return Ok(Token::new(self.pos, TokenKind::Eof, ""));
            };

            if c == '\n' {
                self.pos.newline();
                continue;
            }

            if is_whitespace(c) {
                continue;
            }

            if let Some(kind) = TokenKind::from_symbol(c) {
                return Ok(Token::new(self.pos, kind, c));
            }

            if is_digit(c) {
                let start = self.pos;
                self.backup(c)?;
                let literal = self.lex_int()?;
                return Ok(Token::new(start, TokenKind::Int, literal));
            }

            if is_letter(c) {
                let start = self.pos;
                self.backup(c)?;
                let literal = self.lex_ident()?;
                return Ok(Token::new(start, TokenKind::Ident, literal));
            }

            debug!(pos = %self.pos, character = ?c, "illegal character");
            return Ok(Token::new(self.pos, TokenKind::Illegal, c));
        }
    }

    /// Reads one character, advancing the column if there was one.
    fn read(&mut self) -> Result<Option<char>> {
        let c = self.reader.read_rune()?;
        if c.is_some() {
            self.pos.advance();
        }
        Ok(c)
    }

    /// Pushes `c` back and steps the column back with it.
    fn backup(&mut self, c: char) -> Result<()> {
        self.reader.unread(c)?;
        self.pos.retreat();
        Ok(())
    }

    /// Consumes the longest run of characters accepted by `accept`.
    ///
    /// The first rejected character is pushed back. End of stream simply
    /// ends the run.
    pub(crate) fn accumulate(&mut self, accept: fn(char) -> bool) -> Result<String> {
        let mut literal = String::new();
        while let Some(c) = self.read()? {
            if accept(c) {
                literal.push(c);
            } else {
                self.backup(c)?;
                break;
            }
        }
        Ok(literal)
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Creates a scanner over an in-memory string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token>;

    /// Yields tokens up to, but not including, `Eof`.
    ///
    /// A fatal error is yielded once, after which the iterator is done.
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.exhausted = true;
                None
            },
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            },
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Scanner<R> {}
