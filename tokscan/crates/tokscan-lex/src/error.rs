//! Scanner error types.
//!
//! Malformed input is never an error here: unknown characters come back as
//! [`TokenKind::Illegal`](crate::TokenKind::Illegal) tokens. The variants
//! below are the faults that end a scanning session.

use thiserror::Error;

/// Fatal scanner error.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The underlying reader failed with something other than end-of-stream.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// A second character was pushed back before the first was re-read.
    #[error("pushback slot already holds {pending:?}, cannot unread {rejected:?}")]
    PushbackOverflow {
        /// Character already waiting in the slot.
        pending: char,
        /// Character that could not be pushed back.
        rejected: char,
    },

    /// The scanner hit a fatal error earlier and can no longer be used.
    #[error("scanner terminated by an earlier fatal error")]
    Terminated,
}

/// Result type alias using ScanError.
pub type Result<T> = std::result::Result<T, ScanError>;
