//! Edge case tests for clexer-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, Token, TokenKind};

    fn pairs(source: &str) -> Vec<(String, TokenKind)> {
        tokenize(source)
            .into_iter()
            .map(|t| (t.lexeme, t.kind))
            .collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_space() {
        assert!(tokenize(" ").is_empty());
    }

    #[test]
    fn test_edge_leading_and_trailing_spaces() {
        assert_eq!(
            pairs("   x   "),
            vec![("x".to_string(), TokenKind::Identifier)]
        );
    }

    #[test]
    fn test_edge_tab_is_not_a_separator() {
        assert_eq!(
            pairs("int\tx"),
            vec![("int\tx".to_string(), TokenKind::Unidentified)]
        );
    }

    #[test]
    fn test_edge_newline_is_not_a_separator() {
        assert_eq!(
            pairs("a\nb"),
            vec![("a\nb".to_string(), TokenKind::Unidentified)]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = tokenize(&format!("int {} = 1;", name));
        assert_eq!(tokens[1], Token::new(name, TokenKind::Identifier));
    }

    #[test]
    fn test_edge_long_integer_is_not_parsed() {
        let digits = "9".repeat(100);
        assert_eq!(tokenize(&digits), vec![Token::new(digits, TokenKind::IntLiteral)]);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            pairs("Int int"),
            vec![
                ("Int".to_string(), TokenKind::Identifier),
                ("int".to_string(), TokenKind::Datatype),
            ]
        );
    }

    #[test]
    fn test_edge_keyword_prefix_is_identifier() {
        assert_eq!(
            pairs("iffy integer"),
            vec![
                ("iffy".to_string(), TokenKind::Identifier),
                ("integer".to_string(), TokenKind::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_float_is_unidentified() {
        assert_eq!(
            pairs("3.14"),
            vec![("3.14".to_string(), TokenKind::Unidentified)]
        );
    }

    #[test]
    fn test_edge_negative_number_splits() {
        assert_eq!(
            pairs("-5"),
            vec![
                ("-".to_string(), TokenKind::MinusOp),
                ("5".to_string(), TokenKind::IntLiteral),
            ]
        );
    }

    #[test]
    fn test_edge_hex_is_unidentified() {
        assert_eq!(
            pairs("0xFF"),
            vec![("0xFF".to_string(), TokenKind::Unidentified)]
        );
    }

    #[test]
    fn test_edge_comment_is_not_skipped() {
        assert_eq!(
            pairs("//c"),
            vec![
                ("/".to_string(), TokenKind::DivideOp),
                ("/".to_string(), TokenKind::DivideOp),
                ("c".to_string(), TokenKind::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_empty_string_literal() {
        assert_eq!(pairs("\"\""), vec![(String::new(), TokenKind::StringLiteral)]);
    }

    #[test]
    fn test_edge_adjacent_string_literals() {
        assert_eq!(
            pairs("\"a\"\"b\""),
            vec![
                ("a".to_string(), TokenKind::StringLiteral),
                ("b".to_string(), TokenKind::StringLiteral),
            ]
        );
    }

    #[test]
    fn test_edge_string_keeps_inner_spaces() {
        assert_eq!(
            pairs("\"  a  b  \""),
            vec![("  a  b  ".to_string(), TokenKind::StringLiteral)]
        );
    }

    #[test]
    fn test_edge_tokens_before_unterminated_string() {
        assert_eq!(
            pairs("x = \"oops ;"),
            vec![
                ("x".to_string(), TokenKind::Identifier),
                ("=".to_string(), TokenKind::EqualSign),
            ]
        );
    }

    #[test]
    fn test_edge_quote_inside_word() {
        assert_eq!(
            pairs("ab\"cd\" e"),
            vec![
                ("ab\"cd\"".to_string(), TokenKind::Unidentified),
                ("e".to_string(), TokenKind::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_non_ascii_word() {
        assert_eq!(
            pairs("naïve=1"),
            vec![
                ("naïve".to_string(), TokenKind::Unidentified),
                ("=".to_string(), TokenKind::EqualSign),
                ("1".to_string(), TokenKind::IntLiteral),
            ]
        );
    }

    #[test]
    fn test_edge_nul_byte_is_a_word_char() {
        assert_eq!(
            pairs("a\0b"),
            vec![("a\0b".to_string(), TokenKind::Unidentified)]
        );
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let tokens = tokenize("((([[{}]])))");
        assert_eq!(tokens.len(), 12);
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::OpenParenthesis).count(),
            3
        );
    }

    #[test]
    fn test_edge_all_operators_packed() {
        let kinds: Vec<TokenKind> = tokenize("+-*/%><=").into_iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::PlusOp,
                TokenKind::MinusOp,
                TokenKind::MultiplyOp,
                TokenKind::DivideOp,
                TokenKind::ModulusOp,
                TokenKind::GreaterThan,
                TokenKind::LessThan,
                TokenKind::EqualSign,
            ]
        );
    }

    // ==================== PROPERTIES ====================

    #[test]
    fn test_property_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,64}")| {
            let tokens = tokenize(&input);
            assert_eq!(tokens.len(), 1);
            assert!(matches!(
                tokens[0].kind,
                TokenKind::Identifier | TokenKind::Keyword | TokenKind::Datatype
            ));
            assert_eq!(&tokens[0].lexeme, &input);
        });
    }

    #[test]
    fn test_property_digit_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,40}")| {
            let tokens = tokenize(&input);
            assert_eq!(tokens, vec![Token::new(input.clone(), TokenKind::IntLiteral)]);
        });
    }

    #[test]
    fn test_property_string_literals() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"]{0,64}")| {
            let tokens = tokenize(&format!("\"{}\"", body));
            assert_eq!(tokens, vec![Token::new(body.clone(), TokenKind::StringLiteral)]);
        });
    }

    #[test]
    fn test_property_unterminated_string_yields_nothing_after() {
        use proptest::prelude::*;

        proptest!(|(body in "[^\"]{0,64}")| {
            let tokens = tokenize(&format!("\"{}", body));
            assert!(tokens.is_empty());
        });
    }

    #[test]
    fn test_property_spaces_partition_input() {
        use proptest::prelude::*;

        // Without quotes every non-space character lands in exactly one
        // lexeme, in order.
        proptest!(|(input in "[a-z0-9_ ,;()\\[\\]{}+*/%<>=.#\t-]{0,80}")| {
            let joined: String = tokenize(&input).into_iter().map(|t| t.lexeme).collect();
            assert_eq!(joined, input.replace(' ', ""));
        });
    }

    #[test]
    fn test_property_spaces_partition_input_with_strings() {
        use proptest::prelude::*;

        // Quotes dropped from string lexemes are put back before comparing.
        // Pieces are space-separated so every literal starts a scan step.
        let piece = prop_oneof![
            "[a-z0-9_,;()+*=]{1,6}",
            "\"[^\"]{0,12}\"",
        ];
        proptest!(|(pieces in proptest::collection::vec(piece, 0..8),
                    gaps in proptest::collection::vec(" {1,2}", 8))| {
            let input: String = pieces
                .iter()
                .zip(&gaps)
                .map(|(piece, gap)| format!("{}{}", piece, gap))
                .collect();

            let joined: String = tokenize(&input)
                .into_iter()
                .map(|t| match t.kind {
                    TokenKind::StringLiteral => format!("\"{}\"", t.lexeme),
                    _ => t.lexeme,
                })
                .collect();
            assert_eq!(joined.replace(' ', ""), input.replace(' ', ""));
        });
    }

    #[test]
    fn test_property_lexemes_never_contain_spaces_outside_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[^\"]{0,80}")| {
            for token in tokenize(&input) {
                assert!(!token.lexeme.contains(' '));
                assert!(!token.lexeme.is_empty());
            }
        });
    }

    #[test]
    fn test_property_deterministic() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,80}")| {
            assert_eq!(tokenize(&input), tokenize(&input));
        });
    }

    #[test]
    fn test_property_cursor_is_monotonic() {
        use proptest::prelude::*;

        proptest!(|(input in "\\PC{0,80}")| {
            let mut lexer = Lexer::new(&input);
            let mut last = lexer.position();
            let mut count = 0;
            while lexer.next_token().is_some() {
                let position = lexer.position();
                assert!(position > last);
                last = position;
                count += 1;
            }
            assert!(lexer.is_at_end());
            assert_eq!(lexer.position(), input.len());
            assert!(count <= input.chars().count());
        });
    }
}
