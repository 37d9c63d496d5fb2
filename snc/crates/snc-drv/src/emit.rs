//! Token dumps.
//!
//! Tokens borrow from a per-file arena that is dropped once the file is
//! lexed, so the dump works on owned [`TokenRecord`]s.

use serde::Serialize;
use snc_lex::{Token, TokenKind};

use crate::config::OutputFormat;
use crate::error::Result;

/// Owned copy of one token.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenRecord {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
    /// Upper-case kind name, e.g. `INT_LITERAL`
    pub kind: &'static str,
    /// Raw source text
    pub lexeme: String,
    /// Literal value rendered as text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Diagnostic code of an error token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Message of an error token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TokenRecord {
    /// Copies `token` out of its arena.
    pub fn from_token(token: &Token<'_>) -> Self {
        let (code, message) = match token.kind {
            TokenKind::Error(err) => (Some(err.code().as_str()), Some(err.to_string())),
            _ => (None, None),
        };
        Self {
            line: token.line(),
            column: token.span.column,
            kind: token.kind.name(),
            lexeme: token.lexeme.to_string(),
            value: token.literal().map(|lit| lit.to_string()),
            code,
            message,
        }
    }
}

/// Every token of one input file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileTokens {
    /// Name the file was opened under
    pub file: String,
    /// Tokens in source order, EOF last
    pub tokens: Vec<TokenRecord>,
}

/// Renders `files` in the requested format.
pub fn render(files: &[FileTokens], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(files)),
        OutputFormat::Json => render_json(files),
    }
}

/// One `LINE KIND 'lexeme' [payload]` line per token.
///
/// With more than one file each block is preceded by `==> name <==`.
pub fn render_text(files: &[FileTokens]) -> String {
    let mut out = String::new();
    for (i, file) in files.iter().enumerate() {
        if files.len() > 1 {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("==> {} <==\n", file.file));
        }
        for token in &file.tokens {
            out.push_str(&format!(
                "{} {} '{}'",
                token.line,
                token.kind,
                token.lexeme.escape_debug()
            ));
            if let Some(value) = &token.value {
                out.push_str(&format!(" {}", value));
            }
            if let (Some(code), Some(message)) = (&token.code, &token.message) {
                out.push_str(&format!(" {}: {}", code, message));
            }
            out.push('\n');
        }
    }
    out
}

/// Pretty-printed JSON array of [`FileTokens`].
pub fn render_json(files: &[FileTokens]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(files)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snc_util::Arena;

    fn records(source: &str) -> Vec<TokenRecord> {
        let arena = Arena::new();
        snc_lex::tokenize(source, "t.sn", &arena)
            .iter()
            .map(TokenRecord::from_token)
            .collect()
    }

    #[test]
    fn test_record_copies_literal() {
        let tokens = records("x = 42");
        assert_eq!(tokens[2].kind, "INT_LITERAL");
        assert_eq!(tokens[2].lexeme, "42");
        assert_eq!(tokens[2].value.as_deref(), Some("42"));
        assert_eq!(tokens[2].column, 5);
        assert!(tokens[2].code.is_none());
    }

    #[test]
    fn test_record_copies_error() {
        let tokens = records("@");
        assert_eq!(tokens[0].kind, "ERROR");
        assert_eq!(tokens[0].code.as_deref(), Some("E1001"));
        assert_eq!(tokens[0].message.as_deref(), Some("Unexpected character '@'"));
    }

    #[test]
    fn test_text_dump() {
        let files = vec![FileTokens {
            file: "t.sn".to_string(),
            tokens: records("var s = \"a\\nb\"\n"),
        }];
        let text = render_text(&files);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "1 VAR 'var'");
        assert_eq!(lines[3], "1 STRING_LITERAL '\\\"a\\\\nb\\\"' \"a\\nb\"");
        assert_eq!(lines[4], "1 NEWLINE '\\n'");
        assert_eq!(lines[5], "2 EOF ''");
    }

    #[test]
    fn test_text_dump_error_line() {
        let files = vec![FileTokens {
            file: "t.sn".to_string(),
            tokens: records("x @"),
        }];
        assert_eq!(
            render_text(&files),
            "1 IDENTIFIER 'x'\n1 ERROR '@' E1001: Unexpected character '@'\n1 EOF ''\n"
        );
    }

    #[test]
    fn test_text_dump_headers_for_many_files() {
        let files = vec![
            FileTokens {
                file: "a.sn".to_string(),
                tokens: records("a"),
            },
            FileTokens {
                file: "b.sn".to_string(),
                tokens: records("b"),
            },
        ];
        let text = render_text(&files);
        assert!(text.starts_with("==> a.sn <==\n1 IDENTIFIER 'a'\n"));
        assert!(text.contains("\n\n==> b.sn <==\n"));
    }

    #[test]
    fn test_json_dump() {
        let files = vec![FileTokens {
            file: "t.sn".to_string(),
            tokens: records("1.5"),
        }];
        let json = render(&files, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["file"], "t.sn");
        assert_eq!(value[0]["tokens"][0]["kind"], "DOUBLE_LITERAL");
        assert_eq!(value[0]["tokens"][0]["value"], "1.5");
        assert!(value[0]["tokens"][0].get("code").is_none());
        assert_eq!(value[0]["tokens"][1]["kind"], "EOF");
    }
}
