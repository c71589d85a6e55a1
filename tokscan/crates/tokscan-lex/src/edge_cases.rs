//! Edge case tests for tokscan-lex

#[cfg(test)]
mod tests {
    use crate::{Position, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::from_str(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token().unwrap();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t, vec![Token::new(Position::new(1, 1), TokenKind::Ident, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0].literal(), name);
        assert_eq!(t[1].pos(), Position::new(1, 10002));
    }

    #[test]
    fn test_edge_all_symbols_packed() {
        let t = lex_all(";:(),.{}\\\"'+-*/%=");
        let kinds: Vec<TokenKind> = t.iter().map(|t| t.kind()).collect();
        assert_eq!(kinds, TokenKind::SYMBOLS.to_vec());
        for (i, tok) in t.iter().enumerate() {
            assert_eq!(tok.pos(), Position::new(1, i as u32 + 1));
        }
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|x| x.kind() == TokenKind::OpenParen).count(), 3);
    }

    #[test]
    fn test_edge_brackets_are_illegal() {
        let t = lex_all("[]");
        assert!(t.iter().all(|x| x.kind() == TokenKind::Illegal));
        assert_eq!(t[1].literal(), "]");
    }

    #[test]
    fn test_edge_multichar_operators_split() {
        let t = lex_all("==");
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|x| x.kind() == TokenKind::Assign));
    }

    #[test]
    fn test_edge_alternating_classes() {
        let t = lex_all("a1b2");
        let lits: Vec<&str> = t.iter().map(|t| t.literal()).collect();
        assert_eq!(lits, vec!["a", "1", "b", "2"]);
        assert_eq!(t[3].pos(), Position::new(1, 4));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].pos().line, 2);
        assert_eq!(t[1].pos().column, 1);
    }

    #[test]
    fn test_edge_tab_counts_one_column() {
        let t = lex_all("\tx");
        assert_eq!(t[0].pos(), Position::new(1, 2));
    }

    #[test]
    fn test_edge_multibyte_counts_one_column() {
        let t = lex_all("é+1");
        assert_eq!(t[0].literal(), "é");
        assert_eq!(t[1].pos(), Position::new(1, 2));
        assert_eq!(t[2].pos(), Position::new(1, 3));
    }

    #[test]
    fn test_edge_invalid_utf8_is_illegal() {
        let mut scanner = Scanner::new(&[b'a', 0xFF, b'b'][..]);
        assert_eq!(scanner.next_token().unwrap().kind(), TokenKind::Ident);
        let bad = scanner.next_token().unwrap();
        assert_eq!(bad.kind(), TokenKind::Illegal);
        assert_eq!(bad.literal(), "\u{FFFD}");
        assert_eq!(scanner.next_token().unwrap().literal(), "b");
    }

    #[test]
    fn test_edge_each_bad_byte_is_illegal() {
        let tokens: Vec<Token> = Scanner::new(&[0xE2, 0x82, b'x'][..])
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(Position::new(1, 1), TokenKind::Illegal, "\u{FFFD}"),
                Token::new(Position::new(1, 2), TokenKind::Illegal, "\u{FFFD}"),
                Token::new(Position::new(1, 3), TokenKind::Ident, "x"),
            ]
        );
    }

    #[test]
    fn test_edge_surrogate_bytes_are_three_illegals() {
        let tokens: Vec<Token> = Scanner::new(&[0xED, 0xA0, 0x80][..])
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| t.kind() == TokenKind::Illegal));
        assert_eq!(tokens[2].pos(), Position::new(1, 3));
    }

    #[test]
    fn test_edge_superscript_is_illegal() {
        assert_eq!(
            lex_all("x²"),
            vec![
                Token::new(Position::new(1, 1), TokenKind::Ident, "x"),
                Token::new(Position::new(1, 2), TokenKind::Illegal, "²"),
            ]
        );
    }

    #[test]
    fn test_edge_non_decimal_numbers_are_illegal() {
        for source in ["Ⅻ", "½"] {
            let t = lex_all(source);
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].kind(), TokenKind::Illegal);
            assert_eq!(t[0].literal(), source);
        }
    }

    #[test]
    fn test_edge_combining_mark_ends_identifier() {
        assert_eq!(
            lex_all("कि"),
            vec![
                Token::new(Position::new(1, 1), TokenKind::Ident, "क"),
                Token::new(Position::new(1, 2), TokenKind::Illegal, "\u{093F}"),
            ]
        );
    }

    #[test]
    fn test_edge_trailing_newline_eof_position() {
        let mut scanner = Scanner::from_str("x\n");
        scanner.next_token().unwrap();
        let eof = scanner.next_token().unwrap();
        assert_eq!(eof.pos(), Position::new(2, 0));
    }

    #[test]
    fn test_edge_emoji_is_illegal() {
        let t = lex_all("😀");
        assert_eq!(t[0].kind(), TokenKind::Illegal);
        assert_eq!(t[0].literal(), "😀");
    }

    #[test]
    fn test_edge_non_ascii_digits() {
        let t = lex_all("٤٢");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Int);
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_whitespace_only_yields_eof() {
        use proptest::prelude::*;

        proptest!(|(input in "[ \t\r\n]{0,64}")| {
            let mut scanner = Scanner::from_str(&input);
            let eof = scanner.next_token().unwrap();
            prop_assert_eq!(eof.kind(), TokenKind::Eof);
            let newlines = input.matches('\n').count() as u32;
            prop_assert_eq!(eof.pos().line, 1 + newlines);
        });
    }

    #[test]
    fn test_property_eof_is_sticky() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 +;\n]{0,32}", extra in 1usize..8)| {
            let mut scanner = Scanner::from_str(&input);
            let eof = loop {
                let t = scanner.next_token().unwrap();
                if t.is_eof() { break t; }
            };
            for _ in 0..extra {
                prop_assert_eq!(scanner.next_token().unwrap(), eof.clone());
            }
        });
    }

    #[test]
    fn test_property_letters_then_digits() {
        use proptest::prelude::*;

        proptest!(|(letters in "[a-zA-Z]{1,40}", digits in "[0-9]{1,40}")| {
            let source = format!("{}{}", letters, digits);
            let t = lex_all(&source);
            prop_assert_eq!(t.len(), 2);
            prop_assert_eq!(t[0].kind(), TokenKind::Ident);
            prop_assert_eq!(t[0].literal(), letters.as_str());
            prop_assert_eq!(t[0].pos(), Position::new(1, 1));
            prop_assert_eq!(t[1].kind(), TokenKind::Int);
            prop_assert_eq!(t[1].literal(), digits.as_str());
            prop_assert_eq!(t[1].pos(), Position::new(1, letters.len() as u32 + 1));
        });
    }

    #[test]
    fn test_property_positions_increase() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 ;=+@\n]{0,64}")| {
            let t = lex_all(&input);
            for pair in t.windows(2) {
                prop_assert!(pair[0].pos() < pair[1].pos());
            }
        });
    }

    #[test]
    fn test_property_literals_cover_non_whitespace() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-z0-9 ;:=+@#\n\t]{0,64}")| {
            let joined: String = lex_all(&input).iter().map(|t| t.literal()).collect();
            let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(joined, expected);
        });
    }
}
