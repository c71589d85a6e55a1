//! Character classes used by the scanner.
//!
//! Letters and digits are decided by Unicode general category, so the
//! classes are mutually exclusive: a letter (`L*`) is never a digit (`Nd`),
//! and neither is whitespace.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns true if `c` continues (or starts) an identifier.
///
/// Only letters (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`) qualify. Digits, underscores
/// and combining marks end an identifier.
///
/// # Example
///
/// ```
/// use tokscan_lex::unicode::is_letter;
///
/// assert!(is_letter('a'));
/// assert!(is_letter('é'));
/// assert!(!is_letter('_'));
/// assert!(!is_letter('1'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Returns true if `c` continues (or starts) an integer literal.
///
/// Only decimal digits (`Nd`) qualify; superscripts, fractions and letter
/// numerals do not.
#[inline]
pub fn is_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Returns true if `c` is whitespace, newlines included.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}
