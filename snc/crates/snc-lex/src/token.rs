//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the source text and location it
//! was scanned from. Literal kinds carry their value inside the variant, so a
//! payload can only ever be present on the kind it belongs to.

use std::fmt;

use snc_util::{Diagnostic, DiagnosticBuilder, Span};

use crate::error::LexError;

/// The kind of a token, with the literal value for literal kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind<'a> {
    // ===== Structural =====
    /// End of input; returned forever once reached
    Eof,
    /// Entry into a deeper indentation block
    Indent,
    /// Exit from an indentation block
    Dedent,
    /// End of a physical line
    Newline,
    /// A recoverable lexical error
    Error(LexError),

    // ===== Literals =====
    /// `42`
    IntLiteral(i64),
    /// `42l`
    LongLiteral(i64),
    /// `3.14`, `3.14d`
    DoubleLiteral(f64),
    /// `'a'`
    CharLiteral(char),
    /// `"text"` with escapes at depth zero resolved
    StringLiteral(&'a str),
    /// `$"text {expr}"` with `{...}` spans kept verbatim
    InterpolString(&'a str),
    /// `true` / `false`
    BoolLiteral(bool),

    /// Any non-reserved name
    Identifier,

    // ===== Keywords =====
    /// `fn`
    Fn,
    /// `var`
    Var,
    /// `val`
    Val,
    /// `return`
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `in`
    In,
    /// `import`
    Import,
    /// `nil`
    Nil,
    /// `int`
    Int,
    /// `int32`
    Int32,
    /// `uint`
    Uint,
    /// `uint32`
    Uint32,
    /// `long`
    Long,
    /// `double`
    Double,
    /// `float`
    Float,
    /// `char`
    Char,
    /// `str`
    Str,
    /// `bool`
    Bool,
    /// `byte`
    Byte,
    /// `void`
    Void,
    /// `shared`
    Shared,
    /// `private`
    Private,
    /// `as`
    As,
    /// `ref`
    Ref,
    /// `native`
    Native,
    /// `type`
    Type,
    /// `opaque`
    Opaque,

    // ===== Operators =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Modulo,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `&`
    Ampersand,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `->` or `=>`
    Arrow,
    /// `..`
    Range,
    /// `...`
    Spread,

    // ===== Delimiters =====
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // ===== Directives =====
    /// `#pragma` followed by an unknown directive
    Pragma,
    /// `#pragma include`
    PragmaInclude,
    /// `#pragma link`
    PragmaLink,
}

impl TokenKind<'_> {
    /// Stable upper-case name, e.g. `INT_LITERAL` or `EQUAL_EQUAL`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Error(_) => "ERROR",
            TokenKind::IntLiteral(_) => "INT_LITERAL",
            TokenKind::LongLiteral(_) => "LONG_LITERAL",
            TokenKind::DoubleLiteral(_) => "DOUBLE_LITERAL",
            TokenKind::CharLiteral(_) => "CHAR_LITERAL",
            TokenKind::StringLiteral(_) => "STRING_LITERAL",
            TokenKind::InterpolString(_) => "INTERPOL_STRING",
            TokenKind::BoolLiteral(_) => "BOOL_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Fn => "FN",
            TokenKind::Var => "VAR",
            TokenKind::Val => "VAL",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::In => "IN",
            TokenKind::Import => "IMPORT",
            TokenKind::Nil => "NIL",
            TokenKind::Int => "INT",
            TokenKind::Int32 => "INT32",
            TokenKind::Uint => "UINT",
            TokenKind::Uint32 => "UINT32",
            TokenKind::Long => "LONG",
            TokenKind::Double => "DOUBLE",
            TokenKind::Float => "FLOAT",
            TokenKind::Char => "CHAR",
            TokenKind::Str => "STR",
            TokenKind::Bool => "BOOL",
            TokenKind::Byte => "BYTE",
            TokenKind::Void => "VOID",
            TokenKind::Shared => "SHARED",
            TokenKind::Private => "PRIVATE",
            TokenKind::As => "AS",
            TokenKind::Ref => "REF",
            TokenKind::Native => "NATIVE",
            TokenKind::Type => "TYPE",
            TokenKind::Opaque => "OPAQUE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Modulo => "MODULO",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::PlusPlus => "PLUS_PLUS",
            TokenKind::MinusMinus => "MINUS_MINUS",
            TokenKind::Arrow => "ARROW",
            TokenKind::Range => "RANGE",
            TokenKind::Spread => "SPREAD",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Pragma => "PRAGMA",
            TokenKind::PragmaInclude => "PRAGMA_INCLUDE",
            TokenKind::PragmaLink => "PRAGMA_LINK",
        }
    }

    /// Whether this kind is a reserved word.
    ///
    /// `true`/`false` are literals, not keywords.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Fn
                | TokenKind::Var
                | TokenKind::Val
                | TokenKind::Return
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::In
                | TokenKind::Import
                | TokenKind::Nil
                | TokenKind::Int
                | TokenKind::Int32
                | TokenKind::Uint
                | TokenKind::Uint32
                | TokenKind::Long
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Char
                | TokenKind::Str
                | TokenKind::Bool
                | TokenKind::Byte
                | TokenKind::Void
                | TokenKind::Shared
                | TokenKind::Private
                | TokenKind::As
                | TokenKind::Ref
                | TokenKind::Native
                | TokenKind::Type
                | TokenKind::Opaque
        )
    }

    /// Whether this kind is INDENT, DEDENT, NEWLINE or EOF.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Indent | TokenKind::Dedent | TokenKind::Newline | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Borrowed view of a literal token's value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Literal<'a> {
    /// Integer value of an INT or LONG literal
    Int(i64),
    /// Value of a DOUBLE literal
    Double(f64),
    /// Value of a BOOL literal
    Bool(bool),
    /// Value of a CHAR literal
    Char(char),
    /// Content of a STRING or INTERPOL_STRING literal
    Str(&'a str),
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Double(v) => write!(f, "{:?}", v),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Char(c) => write!(f, "{:?}", c),
            Literal::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// A scanned token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token<'a> {
    /// What was scanned
    pub kind: TokenKind<'a>,
    /// Raw source text; empty for INDENT, DEDENT and EOF
    pub lexeme: &'a str,
    /// Location of the lexeme
    pub span: Span,
    /// Name of the file the token came from
    pub file: &'a str,
}

static_assertions::assert_impl_all!(Token<'static>: Send, Sync, Copy);

impl<'a> Token<'a> {
    /// Source line of the token.
    ///
    /// For an unterminated string this is the line of the opening quote.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// The literal value, present exactly for literal kinds.
    pub fn literal(&self) -> Option<Literal<'a>> {
        match self.kind {
            TokenKind::IntLiteral(v) | TokenKind::LongLiteral(v) => Some(Literal::Int(v)),
            TokenKind::DoubleLiteral(v) => Some(Literal::Double(v)),
            TokenKind::BoolLiteral(v) => Some(Literal::Bool(v)),
            TokenKind::CharLiteral(c) => Some(Literal::Char(c)),
            TokenKind::StringLiteral(s) | TokenKind::InterpolString(s) => Some(Literal::Str(s)),
            _ => None,
        }
    }

    /// The error carried by an ERROR token.
    pub fn error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this is the EOF token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Whether this is an ERROR token.
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Diagnostic describing an ERROR token; `None` for every other kind.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        let err = self.error()?;
        let mut builder = DiagnosticBuilder::error(err.to_string())
            .code(err.code())
            .span(self.span);
        if let Some(note) = err.note() {
            builder = builder.note(note);
        }
        if let Some(help) = err.help() {
            builder = builder.help(help);
        }
        Some(builder.build())
    }
}

/// Classifies an identifier-shaped lexeme.
///
/// Returns the keyword kind, a `BoolLiteral` for `true`/`false`, or `None`
/// for an ordinary identifier. The byte-string match is resolved on length
/// before content, which keeps `in`, `int` and `int32` apart.
///
/// # Examples
///
/// ```
/// use snc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("in"), Some(TokenKind::In));
/// assert_eq!(keyword_from_ident("int"), Some(TokenKind::Int));
/// assert_eq!(keyword_from_ident("true"), Some(TokenKind::BoolLiteral(true)));
/// assert_eq!(keyword_from_ident("inx"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind<'static>> {
    let kind = match text.as_bytes() {
        b"as" => TokenKind::As,
        b"bool" => TokenKind::Bool,
        b"break" => TokenKind::Break,
        b"byte" => TokenKind::Byte,
        b"char" => TokenKind::Char,
        b"continue" => TokenKind::Continue,
        b"double" => TokenKind::Double,
        b"else" => TokenKind::Else,
        b"false" => TokenKind::BoolLiteral(false),
        b"float" => TokenKind::Float,
        b"fn" => TokenKind::Fn,
        b"for" => TokenKind::For,
        b"if" => TokenKind::If,
        b"import" => TokenKind::Import,
        b"in" => TokenKind::In,
        b"int" => TokenKind::Int,
        b"int32" => TokenKind::Int32,
        b"long" => TokenKind::Long,
        b"native" => TokenKind::Native,
        b"nil" => TokenKind::Nil,
        b"opaque" => TokenKind::Opaque,
        b"private" => TokenKind::Private,
        b"ref" => TokenKind::Ref,
        b"return" => TokenKind::Return,
        b"shared" => TokenKind::Shared,
        b"str" => TokenKind::Str,
        b"true" => TokenKind::BoolLiteral(true),
        b"type" => TokenKind::Type,
        b"uint" => TokenKind::Uint,
        b"uint32" => TokenKind::Uint32,
        b"val" => TokenKind::Val,
        b"var" => TokenKind::Var,
        b"void" => TokenKind::Void,
        b"while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Every reserved word paired with its kind, in alphabetical order.
pub const RESERVED_WORDS: &[(&str, TokenKind<'static>)] = &[
    ("as", TokenKind::As),
    ("bool", TokenKind::Bool),
    ("break", TokenKind::Break),
    ("byte", TokenKind::Byte),
    ("char", TokenKind::Char),
    ("continue", TokenKind::Continue),
    ("double", TokenKind::Double),
    ("else", TokenKind::Else),
    ("false", TokenKind::BoolLiteral(false)),
    ("float", TokenKind::Float),
    ("fn", TokenKind::Fn),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("int", TokenKind::Int),
    ("int32", TokenKind::Int32),
    ("long", TokenKind::Long),
    ("native", TokenKind::Native),
    ("nil", TokenKind::Nil),
    ("opaque", TokenKind::Opaque),
    ("private", TokenKind::Private),
    ("ref", TokenKind::Ref),
    ("return", TokenKind::Return),
    ("shared", TokenKind::Shared),
    ("str", TokenKind::Str),
    ("true", TokenKind::BoolLiteral(true)),
    ("type", TokenKind::Type),
    ("uint", TokenKind::Uint),
    ("uint32", TokenKind::Uint32),
    ("val", TokenKind::Val),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
];
