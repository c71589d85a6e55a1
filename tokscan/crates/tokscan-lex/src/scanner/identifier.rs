//! Identifier lexing.

use std::io::Read;

use crate::error::Result;
use crate::unicode::is_letter;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Lexes an identifier.
    ///
    /// Identifiers are runs of letters only. A digit or underscore ends the
    /// identifier and starts the next token. There are no keywords; every
    /// letter run is an identifier.
    pub(crate) fn lex_ident(&mut self) -> Result<String> {
        self.accumulate(is_letter)
    }
}
