//! Edge case tests for snc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, LexError, Token, TokenKind};
    use snc_util::Arena;

    fn with_tokens(source: &str, check: impl FnOnce(&[Token<'_>])) {
        let arena = Arena::new();
        let tokens = tokenize(source, "edge.sn", &arena);
        check(&tokens);
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        with_tokens("", |t| {
            assert_eq!(t.len(), 1);
            assert!(t[0].is_eof());
            assert_eq!(t[0].line(), 1);
        });
    }

    #[test]
    fn test_edge_only_newlines() {
        with_tokens("\n\n", |t| {
            let kinds: Vec<_> = t.iter().map(|t| t.kind).collect();
            assert_eq!(kinds, vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Eof]);
        });
    }

    #[test]
    fn test_edge_whitespace_only_line_at_end() {
        with_tokens("x\n    ", |t| {
            let kinds: Vec<_> = t.iter().map(|t| t.kind.name()).collect();
            assert_eq!(kinds, vec!["IDENTIFIER", "NEWLINE", "EOF"]);
        });
    }

    #[test]
    fn test_edge_first_line_indented() {
        with_tokens("  x", |t| {
            let kinds: Vec<_> = t.iter().map(|t| t.kind.name()).collect();
            assert_eq!(kinds, vec!["INDENT", "IDENTIFIER", "DEDENT", "EOF"]);
        });
    }

    #[test]
    fn test_edge_deep_nesting_closes_at_eof() {
        let mut source = String::new();
        for depth in 0..20 {
            source.push_str(&" ".repeat(depth * 2));
            source.push_str("x:\n");
        }
        with_tokens(&source, |t| {
            let indents = t.iter().filter(|t| t.kind == TokenKind::Indent).count();
            let dedents = t.iter().filter(|t| t.kind == TokenKind::Dedent).count();
            assert_eq!(indents, 19);
            assert_eq!(dedents, 19);
            assert!(t.last().unwrap().is_eof());
        });
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        with_tokens(&format!("var {} = 1", name), |t| {
            assert_eq!(t[1].kind, TokenKind::Identifier);
            assert_eq!(t[1].lexeme, name);
        });
    }

    #[test]
    fn test_edge_long_string_grows_buffer() {
        let body = "xyz".repeat(5_000);
        with_tokens(&format!("\"{}\"", body), |t| {
            assert_eq!(t[0].kind, TokenKind::StringLiteral(body.as_str()));
        });
    }

    #[test]
    fn test_edge_unicode_inside_string() {
        with_tokens("\"héllo ✓\" x", |t| {
            assert_eq!(t[0].kind, TokenKind::StringLiteral("héllo ✓"));
            assert_eq!(t[1].lexeme, "x");
            assert_eq!(t[1].span.column, 11);
        });
    }

    #[test]
    fn test_edge_unterminated_interpolation_at_eof() {
        with_tokens("$\"{", |t| {
            assert_eq!(
                t[0].kind,
                TokenKind::Error(LexError::UnterminatedString { line: 1 })
            );
            assert!(t[1].is_eof());
        });
    }

    #[test]
    fn test_edge_backslash_at_eof() {
        with_tokens("\"abc\\", |t| {
            assert!(matches!(
                t[0].kind,
                TokenKind::Error(LexError::UnterminatedString { .. })
            ));
        });
    }

    #[test]
    fn test_edge_char_at_eof() {
        with_tokens("'", |t| {
            assert_eq!(t[0].kind, TokenKind::Error(LexError::UnterminatedCharLiteral));
        });
        with_tokens("'a", |t| {
            assert_eq!(t[0].kind, TokenKind::Error(LexError::UnterminatedCharLiteral));
        });
    }

    #[test]
    fn test_edge_error_then_recovery() {
        with_tokens("x = @ 1", |t| {
            let kinds: Vec<_> = t.iter().map(|t| t.kind.name()).collect();
            assert_eq!(kinds, vec!["IDENTIFIER", "EQUAL", "ERROR", "INT_LITERAL", "EOF"]);
        });
    }

    #[test]
    fn test_edge_number_then_identifier() {
        with_tokens("3abc", |t| {
            assert_eq!(t[0].kind, TokenKind::IntLiteral(3));
            assert_eq!(t[1].lexeme, "abc");
        });
    }

    #[test]
    fn test_edge_zero_literals() {
        with_tokens("0 0l 0.0 0d", |t| {
            assert_eq!(t[0].kind, TokenKind::IntLiteral(0));
            assert_eq!(t[1].kind, TokenKind::LongLiteral(0));
            assert_eq!(t[2].kind, TokenKind::DoubleLiteral(0.0));
            assert_eq!(t[3].kind, TokenKind::DoubleLiteral(0.0));
        });
    }

    #[test]
    fn test_edge_nul_byte_is_unexpected() {
        with_tokens("a\0b", |t| {
            assert_eq!(t[1].kind, TokenKind::Error(LexError::UnexpectedCharacter('\0')));
            assert_eq!(t[2].lexeme, "b");
        });
    }

    #[test]
    fn test_edge_dedent_spans_are_empty() {
        with_tokens("a\n  b\n", |t| {
            for token in t.iter().filter(|t| t.kind == TokenKind::Dedent) {
                assert_eq!(token.lexeme, "");
                assert!(token.span.is_empty());
            }
        });
    }
}
