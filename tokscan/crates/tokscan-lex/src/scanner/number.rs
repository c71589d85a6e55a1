//! Integer literal lexing.

use std::io::Read;

use crate::error::Result;
use crate::unicode::is_digit;
use crate::Scanner;

impl<R: Read> Scanner<R> {
    /// Lexes an integer literal.
    ///
    /// Expects the cursor to sit just before the first digit. Consumes the
    /// longest run of digits and stops at the first non-digit, which is left
    /// for the next token. Signs, decimal points and exponents are not part
    /// of an integer.
    pub(crate) fn lex_int(&mut self) -> Result<String> {
        self.accumulate(is_digit)
    }
}
