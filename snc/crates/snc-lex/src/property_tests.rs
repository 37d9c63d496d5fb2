//! Property-based tests for snc-lex

#[cfg(test)]
mod tests {
    use crate::{keyword_from_ident, tokenize, TokenKind, RESERVED_WORDS};
    use proptest::prelude::*;
    use snc_util::Arena;

    /// Small alphabet that hits every layout path quickly.
    fn layout_source() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just(" "),
                Just("  "),
                Just("\t"),
                Just("\n"),
                Just("\r\n"),
                Just("x"),
                Just(":"),
                Just("// c"),
                Just("\"s\""),
                Just("$\"{a}\""),
                Just("1"),
            ],
            0..60,
        )
        .prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_lexing_terminates(source in any::<String>()) {
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            // Every token consumes input except layout tokens, which are
            // bounded by the number of lines.
            prop_assert!(tokens.len() <= 3 * source.len() + 2);
            prop_assert!(tokens.last().map_or(false, |t| t.is_eof()));
        }

        #[test]
        fn prop_indents_balance(source in layout_source()) {
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            let mut open = 0i64;
            for token in &tokens {
                match token.kind {
                    TokenKind::Indent => open += 1,
                    TokenKind::Dedent => {
                        open -= 1;
                        prop_assert!(open >= 0);
                    },
                    _ => {},
                }
            }
            prop_assert_eq!(open, 0);
        }

        #[test]
        fn prop_indents_balance_arbitrary(source in any::<String>()) {
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
            let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
            prop_assert_eq!(indents, dedents);
        }

        #[test]
        fn prop_lexemes_are_in_order(source in layout_source()) {
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            let mut last_end = 0;
            for token in &tokens {
                prop_assert!(token.span.start >= last_end);
                prop_assert_eq!(&source[token.span.start..token.span.end], token.lexeme);
                last_end = token.span.end;
            }
        }

        #[test]
        fn prop_identifiers_classify_totally(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
            let arena = Arena::new();
            let tokens = tokenize(&word, "p.sn", &arena);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].lexeme, word.as_str());
            let reserved = RESERVED_WORDS.iter().find(|(w, _)| *w == word);
            match reserved {
                Some((_, kind)) => prop_assert_eq!(tokens[0].kind, *kind),
                None => prop_assert_eq!(tokens[0].kind, TokenKind::Identifier),
            }
            prop_assert_eq!(keyword_from_ident(&word).is_some(), reserved.is_some());
        }

        #[test]
        fn prop_decimal_numbers(value in 0i64..=i64::MAX) {
            let source = value.to_string();
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            prop_assert_eq!(tokens[0].kind, TokenKind::IntLiteral(value));
            let long = format!("{}l", value);
            let tokens = tokenize(&long, "p.sn", &arena);
            prop_assert_eq!(tokens[0].kind, TokenKind::LongLiteral(value));
        }

        #[test]
        fn prop_plain_strings_roundtrip(body in "[^\"\\\\{\\n]{0,64}") {
            let source = format!("\"{}\"", body);
            let arena = Arena::new();
            let tokens = tokenize(&source, "p.sn", &arena);
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, TokenKind::StringLiteral(body.as_str()));
        }
    }
}
