//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct, dispatch loop and read/backup primitives
//! - `identifier` - Identifier lexing
//! - `number` - Integer literal lexing

mod core;
mod identifier;
mod number;

pub use self::core::Scanner;
