//! Token definitions.
//!
//! This module defines [`TokenKind`], the closed set of token classes the
//! scanner produces, along with [`Position`] and the scanned [`Token`]
//! triple returned by [`Scanner::next_token`](crate::Scanner::next_token).

use std::fmt;

/// The class of a scanned token.
///
/// Every fixed symbol the scanner recognizes has its own variant. Anything
/// that is not a symbol, a letter run, a digit run or whitespace becomes
/// [`TokenKind::Illegal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the input stream.
    Eof,
    /// A character that starts no known token.
    Illegal,
    /// A run of letters.
    Ident,
    /// A run of digits.
    Int,

    /// `;`
    Semi,
    /// `:`
    Colon,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `\`
    Backslash,
    /// `"`
    DoubleQuote,
    /// `'`
    SingleQuote,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,

    /// `=`
    Assign,
}

impl TokenKind {
    /// Every fixed single-character symbol kind, in declaration order.
    pub const SYMBOLS: [TokenKind; 17] = [
        TokenKind::Semi,
        TokenKind::Colon,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::Backslash,
        TokenKind::DoubleQuote,
        TokenKind::SingleQuote,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Assign,
    ];

    /// Maps a character to its fixed-symbol kind, if it is one.
    ///
    /// # Example
    ///
    /// ```
    /// use tokscan_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_symbol('%'), Some(TokenKind::Mod));
    /// assert_eq!(TokenKind::from_symbol('@'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        let kind = match c {
            ';' => Self::Semi,
            ':' => Self::Colon,
            '(' => Self::OpenParen,
            ')' => Self::CloseParen,
            ',' => Self::Comma,
            '.' => Self::Dot,
            '{' => Self::OpenBrace,
            '}' => Self::CloseBrace,
            '\\' => Self::Backslash,
            '"' => Self::DoubleQuote,
            '\'' => Self::SingleQuote,
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            '%' => Self::Mod,
            '=' => Self::Assign,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns the source character of a fixed-symbol kind.
    ///
    /// Returns `None` for `Eof`, `Illegal`, `Ident` and `Int`.
    pub fn symbol(self) -> Option<char> {
        let c = match self {
            Self::Eof | Self::Illegal | Self::Ident | Self::Int => return None,
            Self::Semi => ';',
            Self::Colon => ':',
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::Comma => ',',
            Self::Dot => '.',
            Self::OpenBrace => '{',
            Self::CloseBrace => '}',
            Self::Backslash => '\\',
            Self::DoubleQuote => '"',
            Self::SingleQuote => '\'',
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Assign => '=',
        };
        Some(c)
    }

    /// Returns the display name used in diagnostics.
    ///
    /// This is not source text: `OpenBrace` displays as `OPEN BRACE`, not
    /// `{`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Semi => ";",
            Self::Colon => ":",
            Self::OpenParen => "OPEN_BRACKET",
            Self::CloseParen => "CLOSE_BRACKET",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::OpenBrace => "OPEN BRACE",
            Self::CloseBrace => "CLOSE BRACE",
            Self::Backslash => "BACKSLASH",
            Self::DoubleQuote => "DOUBLEQUOTE",
            Self::SingleQuote => "SINGLEQUOTE",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Assign => "=",
        }
    }

    /// Returns true for the fixed single-character symbol kinds.
    pub fn is_symbol(self) -> bool {
        self.symbol().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line/column location in the input.
///
/// Lines are 1-based. The column starts at 0 on each line and is bumped for
/// every character consumed, so the first character of a line sits at
/// column 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number.
    pub column: u32,
}

impl Position {
    /// Creates a position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Position before any character has been read.
    pub const START: Position = Position { line: 1, column: 0 };

    pub(crate) fn advance(&mut self) {
        self.column = self.column.saturating_add(1);
    }

    pub(crate) fn retreat(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub(crate) fn newline(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 0;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A scanned token: where it starts, what it is, and its text.
///
/// The literal holds the accumulated text for identifiers and integers, the
/// symbol character for fixed symbols, the offending character for
/// `Illegal`, and is empty for `Eof`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pos: Position,
    kind: TokenKind,
    literal: String,
}

impl Token {
    /// Creates a token.
    pub fn new(pos: Position, kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            pos,
            kind,
            literal: literal.into(),
        }
    }

    /// Position of the token's first character.
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's literal text.
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns true if this is the end-of-stream token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Splits the token into its `(position, kind, literal)` parts.
    pub fn into_parts(self) -> (Position, TokenKind, String) {
        (self.pos, self.kind, self.literal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "{} {}", self.pos, self.kind)
        } else {
            write!(f, "{} {} {:?}", self.pos, self.kind, self.literal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_roundtrip_for_every_symbol_kind() {
        for kind in TokenKind::SYMBOLS {
            let c = kind.symbol().unwrap();
            assert_eq!(TokenKind::from_symbol(c), Some(kind));
        }
    }

    #[test]
    fn test_non_symbol_kinds() {
        for kind in [
            TokenKind::Eof,
            TokenKind::Illegal,
            TokenKind::Ident,
            TokenKind::Int,
        ] {
            assert!(!kind.is_symbol());
            assert_eq!(kind.symbol(), None);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::OpenBrace.to_string(), "OPEN BRACE");
        assert_eq!(TokenKind::OpenParen.to_string(), "OPEN_BRACKET");
        assert_eq!(TokenKind::Add.to_string(), "+");
    }

    #[test]
    fn test_from_symbol_rejects_others() {
        for c in ['@', '#', 'a', '1', ' ', '[', '<'] {
            assert_eq!(TokenKind::from_symbol(c), None);
        }
    }

    #[test]
    fn test_position_bookkeeping() {
        let mut pos = Position::START;
        pos.advance();
        pos.advance();
        assert_eq!(pos, Position::new(1, 2));
        pos.retreat();
        assert_eq!(pos, Position::new(1, 1));
        pos.newline();
        assert_eq!(pos, Position::new(2, 0));
        assert_eq!(pos.to_string(), "2:0");
    }

    #[test]
    fn test_position_saturates_on_huge_input() {
        let mut pos = Position::new(u32::MAX, u32::MAX);
        pos.advance();
        assert_eq!(pos, Position::new(u32::MAX, u32::MAX));
        pos.newline();
        assert_eq!(pos, Position::new(u32::MAX, 0));
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(Position::new(3, 7), TokenKind::Ident, "abc");
        assert_eq!(tok.to_string(), "3:7 IDENT \"abc\"");

        let eof = Token::new(Position::new(1, 0), TokenKind::Eof, "");
        assert_eq!(eof.to_string(), "1:0 EOF");
        assert!(eof.is_eof());
    }

    #[test]
    fn test_into_parts() {
        let tok = Token::new(Position::new(1, 1), TokenKind::Int, "42");
        let (pos, kind, lit) = tok.into_parts();
        assert_eq!(pos, Position::new(1, 1));
        assert_eq!(kind, TokenKind::Int);
        assert_eq!(lit, "42");
    }
}
