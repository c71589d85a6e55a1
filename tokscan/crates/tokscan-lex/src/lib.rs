//! tokscan-lex - Hand-written lexical scanner
//!
//! This crate converts a stream of characters into a sequence of classified
//! tokens annotated with their source position. It reads from any
//! [`std::io::Read`], one character at a time, with a single character of
//! pushback.
//!
//! # Example Usage
//!
//! ```
//! use tokscan_lex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::from_str("sum = a + 12;");
//!
//! // Pull tokens one at a time until Eof
//! loop {
//!     let token = scanner.next_token().unwrap();
//!     if token.kind() == TokenKind::Eof {
//!         break;
//!     }
//!     println!("{}", token);
//! }
//!
//! // Or iterate (stops before Eof)
//! let count = Scanner::from_str("sum = a + 12;").count();
//! assert_eq!(count, 6);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, positions and the scanned token triple
//! - [`scanner`] - The scanner itself
//! - [`reader`] - UTF-8 rune reader with a one-character pushback slot
//! - [`unicode`] - Character classes
//! - [`error`] - Fatal scanner errors
//!
//! # Token Categories
//!
//! ## Identifiers
//!
//! Runs of letters (Unicode category `L`). Digits and underscores end an
//! identifier, so `abc123` is an identifier followed by an integer.
//!
//! ## Integers
//!
//! Runs of decimal digits (Unicode category `Nd`). No signs, decimals or exponents.
//!
//! ## Symbols
//!
//! `;` `:` `(` `)` `,` `.` `{` `}` `\` `"` `'` `+` `-` `*` `/` `%` `=`,
//! each its own single-character token. Quotes do not start string literals.
//!
//! ## Special
//!
//! - **Eof**: end of stream, returned again on every later call
//! - **Illegal**: any other non-whitespace character, one token per character

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod reader;
pub mod scanner;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use error::{Result, ScanError};
pub use reader::RuneReader;
pub use scanner::Scanner;
pub use token::{Position, Token, TokenKind};
