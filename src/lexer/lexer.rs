//! Lexer driver: dispatches on lookahead and emits tokens.
//!
//! [`Lexer::lex`] walks the source strictly left-to-right in a single pass.
//! Whitespace, comments, and preprocessor lines are consumed silently;
//! everything else either emits a token or fails the run. The returned
//! sequence always ends with exactly one [`TokenKind::EndOfFile`] token.

use std::fmt;

use super::cursor::Cursor;
use super::number;
use super::string;
use super::token::{is_keyword, SourceLocation, Token, TokenKind};

/// Errors that abort a lex run.
///
/// All variants are fatal: the lexer does not resynchronise. Each carries
/// the location of the offending lexeme so the caller can report it.
#[derive(Debug, Clone)]
pub enum LexError {
    /// The dispatch found no rule for a character.
    UnrecognizedCharacter {
        character: char,
        /// A few characters either side of the failure point.
        context: String,
        /// How many tokens had been emitted when the failure occurred.
        tokens_lexed: usize,
        location: SourceLocation,
    },

    /// A numeric literal the reader or value parser rejected.
    MalformedNumericLiteral {
        message: String,
        location: SourceLocation,
    },

    /// The character after a `\` is not in the escape table.
    UnknownEscapeSequence {
        escaped: char,
        location: SourceLocation,
    },

    /// End of input inside a string or character literal.
    UnterminatedLiteral {
        what: &'static str,
        location: SourceLocation,
    },

    /// A recognised construct the lexer deliberately does not handle.
    UnsupportedConstruct {
        construct: &'static str,
        location: SourceLocation,
    },
}

impl LexError {
    /// The source location where the error occurred.
    pub fn location(&self) -> SourceLocation {
        match self {
            LexError::UnrecognizedCharacter { location, .. }
            | LexError::MalformedNumericLiteral { location, .. }
            | LexError::UnknownEscapeSequence { location, .. }
            | LexError::UnterminatedLiteral { location, .. }
            | LexError::UnsupportedConstruct { location, .. } => *location,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter {
                character,
                context,
                tokens_lexed,
                location,
            } => write!(
                f,
                "unrecognized character '{}' at {} (near \"{}\", {} tokens lexed)",
                character, location, context, tokens_lexed
            ),
            LexError::MalformedNumericLiteral { message, location } => {
                write!(f, "malformed numeric literal at {}: {}", location, message)
            }
            LexError::UnknownEscapeSequence { escaped, location } => {
                write!(f, "unknown escape sequence '\\{}' at {}", escaped, location)
            }
            LexError::UnterminatedLiteral { what, location } => {
                write!(f, "unterminated {} starting at {}", what, location)
            }
            LexError::UnsupportedConstruct {
                construct,
                location,
            } => write!(f, "{} at {} is not supported", construct, location),
        }
    }
}

impl std::error::Error for LexError {}

/// Single-pass lexer over one source file.
///
/// Construct with the file contents, then call [`lex`](Lexer::lex) to take
/// the token stream. Each instance owns its cursor and output buffer, so
/// callers may lex many files in parallel with one lexer per file.
pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a lexer over `source`.
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire input, transferring the tokens to the caller.
    pub fn lex(mut self) -> Result<Vec<Token>, LexError> {
        while !self.cursor.is_at_end() {
            match self.cursor.peek() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.consume();
                }

                ';' => self.punctuator(TokenKind::Semicolon),
                ',' => self.punctuator(TokenKind::Comma),
                '{' => self.punctuator(TokenKind::OpenBrace),
                '}' => self.punctuator(TokenKind::CloseBrace),
                '(' => self.punctuator(TokenKind::OpenParen),
                ')' => self.punctuator(TokenKind::CloseParen),
                '[' => self.punctuator(TokenKind::OpenBracket),
                ']' => self.punctuator(TokenKind::CloseBracket),
                '~' => self.punctuator(TokenKind::Tilde),

                ':' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if(':') {
                        self.emit(TokenKind::ColonColon, "::", location);
                    } else {
                        self.emit(TokenKind::Colon, ":", location);
                    }
                }

                '/' => self.slash_or_comment(),

                '=' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::EqualsEquals, "==", location);
                    } else if self.cursor.consume_if('>') {
                        self.emit(TokenKind::EqualsGreaterThan, "=>", location);
                    } else {
                        self.emit(TokenKind::Equals, "=", location);
                    }
                }

                '.' => {
                    if self.cursor.peek_at(1).is_ascii_digit() {
                        self.numeric_literal()?;
                    } else {
                        let location = self.cursor.location();
                        self.cursor.consume();
                        if self.cursor.consume_if('.') {
                            self.emit(TokenKind::DotDot, "..", location);
                        } else {
                            self.emit(TokenKind::Dot, ".", location);
                        }
                    }
                }

                '+' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('+') {
                        self.emit(TokenKind::PlusPlus, "++", location);
                    } else if self.cursor.consume_if('=') {
                        self.emit(TokenKind::PlusEquals, "+=", location);
                    } else {
                        self.emit(TokenKind::Plus, "+", location);
                    }
                }
                '-' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('-') {
                        self.emit(TokenKind::MinusMinus, "--", location);
                    } else if self.cursor.consume_if('=') {
                        self.emit(TokenKind::MinusEquals, "-=", location);
                    } else {
                        self.emit(TokenKind::Minus, "-", location);
                    }
                }
                '*' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::AsteriskEquals, "*=", location);
                    } else {
                        self.emit(TokenKind::Asterisk, "*", location);
                    }
                }
                '%' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::PercentEquals, "%=", location);
                    } else {
                        self.emit(TokenKind::Percent, "%", location);
                    }
                }
                '&' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('&') {
                        self.emit(TokenKind::AmpersandAmpersand, "&&", location);
                    } else if self.cursor.consume_if('=') {
                        self.emit(TokenKind::AmpersandEquals, "&=", location);
                    } else {
                        self.emit(TokenKind::Ampersand, "&", location);
                    }
                }
                '|' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('|') {
                        self.emit(TokenKind::BarBar, "||", location);
                    } else if self.cursor.consume_if('=') {
                        self.emit(TokenKind::BarEquals, "|=", location);
                    } else {
                        self.emit(TokenKind::Bar, "|", location);
                    }
                }
                '^' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::CaretEquals, "^=", location);
                    } else {
                        self.emit(TokenKind::Caret, "^", location);
                    }
                }
                '!' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::ExclamationEquals, "!=", location);
                    } else {
                        self.emit(TokenKind::Exclamation, "!", location);
                    }
                }
                '<' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::LessThanEquals, "<=", location);
                    } else {
                        self.emit(TokenKind::LessThan, "<", location);
                    }
                }
                '>' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('=') {
                        self.emit(TokenKind::GreaterThanEquals, ">=", location);
                    } else {
                        self.emit(TokenKind::GreaterThan, ">", location);
                    }
                }
                '?' => {
                    let location = self.cursor.location();
                    self.cursor.consume();
                    if self.cursor.consume_if('?') {
                        if self.cursor.consume_if('=') {
                            self.emit(TokenKind::QuestionQuestionEquals, "??=", location);
                        } else {
                            self.emit(TokenKind::QuestionQuestion, "??", location);
                        }
                    } else {
                        self.emit(TokenKind::Question, "?", location);
                    }
                }

                '"' => {
                    let location = self.cursor.location();
                    if self.cursor.peek_at(1) == '"' && self.cursor.peek_at(2) == '"' {
                        return Err(LexError::UnsupportedConstruct {
                            construct: "raw string literal",
                            location,
                        });
                    }
                    self.string_literal(false, false, String::new(), location)?;
                }
                '$' => self.dollar_string()?,
                '@' => self.at_sign()?,
                '\'' => {
                    let location = self.cursor.location();
                    let lexeme = string::read_char_literal(&mut self.cursor)?;
                    self.tokens
                        .push(Token::new(TokenKind::CharLiteral, lexeme, location));
                }

                '#' => self.skip_to_end_of_line(),

                ch if ch.is_ascii_digit() => self.numeric_literal()?,
                ch if ch.is_ascii_alphabetic() || ch == '_' => self.identifier_or_keyword(),

                ch => {
                    return Err(LexError::UnrecognizedCharacter {
                        character: ch,
                        context: self.cursor.context(5),
                        tokens_lexed: self.tokens.len(),
                        location: self.cursor.location(),
                    });
                }
            }
        }

        let location = self.cursor.location();
        self.tokens
            .push(Token::new(TokenKind::EndOfFile, "", location));
        Ok(self.tokens)
    }

    /// Emit a single-character punctuator.
    fn punctuator(&mut self, kind: TokenKind) {
        let location = self.cursor.location();
        let ch = self.cursor.consume();
        self.tokens.push(Token::new(kind, ch.to_string(), location));
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str, location: SourceLocation) {
        self.tokens.push(Token::new(kind, lexeme, location));
    }

    /// `//` and `/*` comments emit nothing; `/=` and `/` are operators.
    fn slash_or_comment(&mut self) {
        let location = self.cursor.location();
        match self.cursor.peek_at(1) {
            '/' => self.skip_to_end_of_line(),
            '*' => self.skip_block_comment(),
            _ => {
                self.cursor.consume();
                if self.cursor.consume_if('=') {
                    self.emit(TokenKind::SlashEquals, "/=", location);
                } else {
                    self.emit(TokenKind::Slash, "/", location);
                }
            }
        }
    }

    /// Consume through the end of the current line (or input).
    fn skip_to_end_of_line(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.consume() == '\n' {
                break;
            }
        }
    }

    /// Consume a `/* ... */` comment. Comments are only scanned for their
    /// terminator, so one left open simply runs to end of input.
    fn skip_block_comment(&mut self) {
        self.cursor.consume(); // '/'
        self.cursor.consume(); // '*'
        while !self.cursor.is_at_end() {
            if self.cursor.peek() == '*' && self.cursor.peek_at(1) == '/' {
                self.cursor.consume();
                self.cursor.consume();
                return;
            }
            self.cursor.consume();
        }
    }

    /// Read a numeric literal and attach its parsed value.
    fn numeric_literal(&mut self) -> Result<(), LexError> {
        let location = self.cursor.location();
        let lexeme = number::read(&mut self.cursor, location)?;
        let value = number::parse(&lexeme, location)?;
        self.tokens.push(Token::with_value(
            TokenKind::NumericLiteral,
            lexeme,
            location,
            value,
        ));
        Ok(())
    }

    /// Read an identifier or keyword. A leading `@` escapes the name and
    /// suppresses keyword recognition.
    fn identifier_or_keyword(&mut self) {
        let location = self.cursor.location();
        let mut name = String::new();
        if self.cursor.peek() == '@' {
            name.push(self.cursor.consume());
        }
        while self.cursor.peek().is_ascii_alphanumeric() || self.cursor.peek() == '_' {
            name.push(self.cursor.consume());
        }

        let kind = if !name.starts_with('@') && is_keyword(&name) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.tokens.push(Token::new(kind, name, location));
    }

    /// `$"..."` or `$@"..."`: interpolated string forms.
    fn dollar_string(&mut self) -> Result<(), LexError> {
        let location = self.cursor.location();
        let mut sigils = String::new();
        sigils.push(self.cursor.consume()); // '$'
        let verbatim = if self.cursor.peek() == '@' {
            sigils.push(self.cursor.consume());
            true
        } else {
            false
        };
        if self.cursor.peek() != '"' {
            return Err(LexError::UnrecognizedCharacter {
                character: '$',
                context: self.cursor.context(5),
                tokens_lexed: self.tokens.len(),
                location,
            });
        }
        self.string_literal(verbatim, true, sigils, location)
    }

    /// `@` introduces a verbatim string (`@"`, `@$"`) or an escaped
    /// identifier.
    fn at_sign(&mut self) -> Result<(), LexError> {
        let location = self.cursor.location();
        if self.cursor.peek_at(1) == '"' {
            let mut sigils = String::new();
            sigils.push(self.cursor.consume());
            self.string_literal(true, false, sigils, location)
        } else if self.cursor.peek_at(1) == '$' && self.cursor.peek_at(2) == '"' {
            let mut sigils = String::new();
            sigils.push(self.cursor.consume());
            sigils.push(self.cursor.consume());
            self.string_literal(true, true, sigils, location)
        } else {
            self.identifier_or_keyword();
            Ok(())
        }
    }

    /// Read a string body and emit the matching literal token.
    fn string_literal(
        &mut self,
        verbatim: bool,
        interpolated: bool,
        sigils: String,
        location: SourceLocation,
    ) -> Result<(), LexError> {
        let lexeme = string::read_string_body(&mut self.cursor, verbatim, interpolated, sigils)?;
        let kind = if interpolated {
            TokenKind::InterpolatedStringLiteral
        } else {
            TokenKind::StringLiteral
        };
        self.tokens.push(Token::new(kind, lexeme, location));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::LiteralValue;

    fn lex(source: &str) -> Vec<Token> {
        Lexer::new(source).lex().expect("lex failed")
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_declaration() {
        let tokens = lex("int x = 1;");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].lexeme, "int");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[2].kind, TokenKind::Equals);
        assert_eq!(tokens[3].kind, TokenKind::NumericLiteral);
        assert_eq!(tokens[3].value, Some(LiteralValue::Int(1)));
        assert_eq!(tokens[4].kind, TokenKind::Semicolon);
        assert_eq!(tokens[5].kind, TokenKind::EndOfFile);
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(
            kinds("++ -- += -= == != && || ?? ??= => :: .."),
            vec![
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::PlusEquals,
                TokenKind::MinusEquals,
                TokenKind::EqualsEquals,
                TokenKind::ExclamationEquals,
                TokenKind::AmpersandAmpersand,
                TokenKind::BarBar,
                TokenKind::QuestionQuestion,
                TokenKind::QuestionQuestionEquals,
                TokenKind::EqualsGreaterThan,
                TokenKind::ColonColon,
                TokenKind::DotDot,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_maximal_munch_boundaries() {
        assert_eq!(
            kinds("=>="),
            vec![
                TokenKind::EqualsGreaterThan,
                TokenKind::Equals,
                TokenKind::EndOfFile
            ]
        );
        assert_eq!(
            kinds("&&="),
            vec![
                TokenKind::AmpersandAmpersand,
                TokenKind::Equals,
                TokenKind::EndOfFile
            ]
        );
    }

    #[test]
    fn test_range_of_numbers() {
        let tokens = lex("5..10");
        assert_eq!(tokens[0].value, Some(LiteralValue::Int(5)));
        assert_eq!(tokens[1].kind, TokenKind::DotDot);
        assert_eq!(tokens[2].value, Some(LiteralValue::Int(10)));
    }

    #[test]
    fn test_leading_dot_number() {
        let tokens = lex(".5");
        assert_eq!(tokens[0].kind, TokenKind::NumericLiteral);
        assert_eq!(tokens[0].lexeme, ".5");
        assert_eq!(tokens[0].value, Some(LiteralValue::Double(0.5)));
    }

    #[test]
    fn test_escaped_identifier_is_not_keyword() {
        let tokens = lex("@class");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].lexeme, "@class");
    }

    #[test]
    fn test_comments_and_preprocessor_skipped() {
        let tokens = lex("#region A\nint x; // trailing\n/* block\nspans */ int y;");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["int", "x", ";", "int", "y", ";", ""]);
    }

    #[test]
    fn test_unterminated_block_comment_is_silent() {
        assert_eq!(kinds("int /* left open"), vec![TokenKind::Keyword, TokenKind::EndOfFile]);
    }

    #[test]
    fn test_string_forms() {
        let tokens = lex(r#""hi" @"a""b" $"x={1+2}" @$"v{y}""#);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].lexeme, r#""hi""#);
        assert_eq!(tokens[1].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].lexeme, r#"@"a""b""#);
        assert_eq!(tokens[2].kind, TokenKind::InterpolatedStringLiteral);
        assert_eq!(tokens[2].lexeme, r#"$"x={1+2}""#);
        assert_eq!(tokens[3].kind, TokenKind::InterpolatedStringLiteral);
        assert_eq!(tokens[3].lexeme, r#"@$"v{y}""#);
        assert_eq!(tokens[4].kind, TokenKind::EndOfFile);
    }

    #[test]
    fn test_raw_string_is_unsupported() {
        let result = Lexer::new(r#"var s = """raw""";"#).lex();
        assert!(matches!(
            result,
            Err(LexError::UnsupportedConstruct { construct: "raw string literal", .. })
        ));
    }

    #[test]
    fn test_unrecognized_character_context() {
        let result = Lexer::new("int x ` y").lex();
        match result {
            Err(LexError::UnrecognizedCharacter {
                character,
                context,
                tokens_lexed,
                ..
            }) => {
                assert_eq!(character, '`');
                assert!(context.contains('`'));
                assert_eq!(tokens_lexed, 2);
            }
            other => panic!("expected unrecognized character error, got {:?}", other),
        }
    }

    #[test]
    fn test_token_positions() {
        let tokens = lex("a\n  bb");
        assert_eq!(tokens[0].location, SourceLocation::new(1, 0));
        assert_eq!(tokens[1].location, SourceLocation::new(2, 2));
    }

    #[test]
    fn test_single_end_of_file_token() {
        for source in ["", "   ", "// only a comment", "int x;"] {
            let tokens = lex(source);
            let eof_count = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::EndOfFile)
                .count();
            assert_eq!(eof_count, 1, "source {:?}", source);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfFile));
        }
    }

    #[test]
    fn test_lone_at_sign_is_identifier_path() {
        let tokens = lex("@name @");
        assert_eq!(tokens[0].lexeme, "@name");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "@");
    }
}
