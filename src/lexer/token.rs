//! Token model: kinds, positions, parsed literal values, reserved words.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source substring it was
//! matched from (`lexeme`), the position of its first character, and, for
//! numeric literals only, the typed parsed value. Tokens are immutable once
//! emitted.

use std::fmt;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

/// Line/column coordinates of a character in the source.
///
/// Lines are 1-based. Columns are 0-based and reset when a newline is
/// consumed, so diagnostics stay consistent across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural
    Identifier,
    Keyword,
    NumericLiteral,
    StringLiteral,
    InterpolatedStringLiteral,
    CharLiteral,
    EndOfFile,

    // Punctuation
    Semicolon,    // ;
    Comma,        // ,
    Dot,          // .
    DotDot,       // ..
    Colon,        // :
    ColonColon,   // ::
    OpenBrace,    // {
    CloseBrace,   // }
    OpenParen,    // (
    CloseParen,   // )
    OpenBracket,  // [
    CloseBracket, // ]
    Tilde,        // ~

    // Operators
    Equals,                 // =
    EqualsEquals,           // ==
    EqualsGreaterThan,      // =>
    LessThan,               // <
    LessThanEquals,         // <=
    GreaterThan,            // >
    GreaterThanEquals,      // >=
    Plus,                   // +
    PlusPlus,               // ++
    PlusEquals,             // +=
    Minus,                  // -
    MinusMinus,             // --
    MinusEquals,            // -=
    Asterisk,               // *
    AsteriskEquals,         // *=
    Slash,                  // /
    SlashEquals,            // /=
    Percent,                // %
    PercentEquals,          // %=
    Ampersand,              // &
    AmpersandAmpersand,     // &&
    AmpersandEquals,        // &=
    Bar,                    // |
    BarBar,                 // ||
    BarEquals,              // |=
    Caret,                  // ^
    CaretEquals,            // ^=
    Exclamation,            // !
    ExclamationEquals,      // !=
    Question,               // ?
    QuestionQuestion,       // ??
    QuestionQuestionEquals, // ??=
}

impl TokenKind {
    /// The fixed source text of a punctuator kind, if it has one.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Tilde => "~",
            TokenKind::Equals => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::EqualsGreaterThan => "=>",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEquals => "<=",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEquals => ">=",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::PlusEquals => "+=",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::MinusEquals => "-=",
            TokenKind::Asterisk => "*",
            TokenKind::AsteriskEquals => "*=",
            TokenKind::Slash => "/",
            TokenKind::SlashEquals => "/=",
            TokenKind::Percent => "%",
            TokenKind::PercentEquals => "%=",
            TokenKind::Ampersand => "&",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::AmpersandEquals => "&=",
            TokenKind::Bar => "|",
            TokenKind::BarBar => "||",
            TokenKind::BarEquals => "|=",
            TokenKind::Caret => "^",
            TokenKind::CaretEquals => "^=",
            TokenKind::Exclamation => "!",
            TokenKind::ExclamationEquals => "!=",
            TokenKind::Question => "?",
            TokenKind::QuestionQuestion => "??",
            TokenKind::QuestionQuestionEquals => "??=",
            _ => return None,
        };
        Some(symbol)
    }
}

/// The typed result of parsing a numeric literal.
///
/// Integer literals narrow to the smallest of i32, u32, i64, u64 that
/// represents their value; floating forms are typed by their suffix.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i32),
    UInt(u32),
    Long(i64),
    ULong(u64),
    Float(f32),
    Double(f64),
    Decimal(Decimal),
}

impl LiteralValue {
    /// The C#-style name of the value's runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            LiteralValue::Int(_) => "int",
            LiteralValue::UInt(_) => "uint",
            LiteralValue::Long(_) => "long",
            LiteralValue::ULong(_) => "ulong",
            LiteralValue::Float(_) => "float",
            LiteralValue::Double(_) => "double",
            LiteralValue::Decimal(_) => "decimal",
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "{}", v),
            LiteralValue::UInt(v) => write!(f, "{}", v),
            LiteralValue::Long(v) => write!(f, "{}", v),
            LiteralValue::ULong(v) => write!(f, "{}", v),
            LiteralValue::Float(v) => write!(f, "{}", v),
            LiteralValue::Double(v) => write!(f, "{}", v),
            LiteralValue::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// A single token: kind, exact source text, start position, and the parsed
/// value for numeric literals.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub location: SourceLocation,
    pub value: Option<LiteralValue>,
}

impl Token {
    /// A token with no parsed value (every kind except numeric literals).
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
            value: None,
        }
    }

    /// A numeric literal token carrying its parsed value.
    pub fn with_value(
        kind: TokenKind,
        lexeme: impl Into<String>,
        location: SourceLocation,
        value: LiteralValue,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
            value: Some(value),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.lexeme),
            TokenKind::Keyword => write!(f, "'{}'", self.lexeme),
            TokenKind::NumericLiteral => match &self.value {
                Some(value) => {
                    write!(f, "numeric literal {} ({})", value, value.type_name())
                }
                None => write!(f, "numeric literal {}", self.lexeme),
            },
            TokenKind::StringLiteral => write!(f, "string literal {}", self.lexeme),
            TokenKind::InterpolatedStringLiteral => {
                write!(f, "interpolated string literal {}", self.lexeme)
            }
            TokenKind::CharLiteral => write!(f, "char literal {}", self.lexeme),
            TokenKind::EndOfFile => write!(f, "end of file"),
            _ => match self.kind.symbol() {
                Some(symbol) => write!(f, "'{}'", symbol),
                None => write!(f, "{}", self.lexeme),
            },
        }
    }
}

/// The reserved words recognised as [`TokenKind::Keyword`].
static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
        "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
        "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
        "void", "volatile", "while",
    ]
    .into_iter()
    .collect()
});

/// Whether `name` is a reserved word.
///
/// Names escaped with a leading `@` are never passed here; the identifier
/// reader suppresses keyword recognition for them.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(name)
}
