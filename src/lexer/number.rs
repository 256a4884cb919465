//! Numeric literal reading and value parsing.
//!
//! Two stages: [`read`] slices the lexeme off the cursor (radix prefix,
//! digits, separators, suffix), and [`parse`] converts the lexeme into a
//! typed [`LiteralValue`]. The lexeme preserves the original source form
//! (underscores, prefix, and suffix included) while the value holds the
//! parsed result.

use rust_decimal::Decimal;

use super::cursor::Cursor;
use super::lexer::LexError;
use super::token::{LiteralValue, SourceLocation};

/// Read a numeric lexeme off the cursor.
///
/// The cursor must be positioned on a decimal digit, or on a `.` that is
/// directly followed by a digit. Suffix characters terminate the literal
/// after consumption; `ul`/`lu` are accepted as two-character suffix pairs.
/// A `.` is consumed only when followed by a letter or digit, so `5..10`
/// reads as `5` and leaves `..10` behind.
pub(crate) fn read(cursor: &mut Cursor, location: SourceLocation) -> Result<String, LexError> {
    let mut text = String::new();

    let hex = cursor.peek() == '0' && matches!(cursor.peek_at(1), 'x' | 'X');
    let binary = cursor.peek() == '0' && cursor.peek_at(1) == 'b';
    if hex || binary {
        text.push(cursor.consume());
        text.push(cursor.consume());
    }

    // Last digit-run character, checked for a trailing underscore below.
    let mut last_body = None;
    loop {
        let ch = cursor.peek();
        match ch {
            '0'..='9' => {
                if binary && ch != '0' && ch != '1' {
                    return Err(LexError::MalformedNumericLiteral {
                        message: format!("digit '{}' is not valid in a binary literal", ch),
                        location,
                    });
                }
                let digit = cursor.consume();
                last_body = Some(digit);
                text.push(digit);
            }
            '_' => {
                let sep = cursor.consume();
                last_body = Some(sep);
                text.push(sep);
            }
            'a'..='f' | 'A'..='F' if hex => {
                let digit = cursor.consume();
                last_body = Some(digit);
                text.push(digit);
            }
            'u' | 'U' => {
                text.push(cursor.consume());
                if matches!(cursor.peek(), 'l' | 'L') {
                    text.push(cursor.consume());
                }
                break;
            }
            'l' | 'L' => {
                text.push(cursor.consume());
                if matches!(cursor.peek(), 'u' | 'U') {
                    text.push(cursor.consume());
                }
                break;
            }
            'f' | 'F' | 'd' | 'D' | 'm' | 'M' => {
                text.push(cursor.consume());
                break;
            }
            '.' => {
                // Consumed only when the dot continues the literal.
                if cursor.peek_at(1).is_ascii_alphanumeric() {
                    let dot = cursor.consume();
                    last_body = Some(dot);
                    text.push(dot);
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    if last_body == Some('_') {
        return Err(LexError::MalformedNumericLiteral {
            message: format!("trailing underscore in numeric literal '{}'", text),
            location,
        });
    }

    Ok(text)
}

/// Parse a numeric lexeme into its typed value.
///
/// Normalises to lowercase with underscores stripped, splits off the
/// alphabetic suffix outside hex/binary modes, and prepends `0` to a
/// leading-dot literal. Integers narrow through i32, u32, i64, u64 in that
/// order; overflow at u64 fails the lex.
pub(crate) fn parse(lexeme: &str, location: SourceLocation) -> Result<LiteralValue, LexError> {
    let normalized: String = lexeme
        .to_ascii_lowercase()
        .chars()
        .filter(|&c| c != '_')
        .collect();

    if let Some(digits) = normalized.strip_prefix("0x") {
        return parse_radix(digits, 16, lexeme, location);
    }
    if let Some(digits) = normalized.strip_prefix("0b") {
        return parse_radix(digits, 2, lexeme, location);
    }

    let suffix_start = normalized
        .char_indices()
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(normalized.len());
    let (body, suffix) = normalized.split_at(suffix_start);

    let mut body = body.to_string();
    if body.starts_with('.') {
        body.insert(0, '0');
    }
    if body.is_empty() {
        return Err(LexError::MalformedNumericLiteral {
            message: format!("numeric literal '{}' has no digits", lexeme),
            location,
        });
    }
    if body.matches('.').count() > 1 {
        return Err(LexError::MalformedNumericLiteral {
            message: format!("multiple decimal points in numeric literal '{}'", lexeme),
            location,
        });
    }

    match suffix {
        "f" => body
            .parse::<f32>()
            .map(LiteralValue::Float)
            .map_err(|_| malformed(lexeme, location)),
        "m" => body
            .parse::<Decimal>()
            .map(LiteralValue::Decimal)
            .map_err(|_| malformed(lexeme, location)),
        "d" => body
            .parse::<f64>()
            .map(LiteralValue::Double)
            .map_err(|_| malformed(lexeme, location)),
        "" if body.contains('.') => body
            .parse::<f64>()
            .map(LiteralValue::Double)
            .map_err(|_| malformed(lexeme, location)),
        "" | "u" | "l" | "ul" | "lu" => parse_radix(&body, 10, lexeme, location),
        _ => Err(LexError::MalformedNumericLiteral {
            message: format!("unknown suffix '{}' on numeric literal '{}'", suffix, lexeme),
            location,
        }),
    }
}

/// Parse integer digits in the given radix, stripping any `u`/`l` suffix
/// first, then narrow to the smallest fitting type.
fn parse_radix(
    digits: &str,
    radix: u32,
    lexeme: &str,
    location: SourceLocation,
) -> Result<LiteralValue, LexError> {
    let digits = digits.trim_end_matches(['u', 'l']);
    if digits.is_empty() {
        return Err(LexError::MalformedNumericLiteral {
            message: format!("numeric literal '{}' has no digits", lexeme),
            location,
        });
    }
    let value = u64::from_str_radix(digits, radix).map_err(|_| LexError::MalformedNumericLiteral {
        message: format!("integer literal '{}' does not fit in 64 bits", lexeme),
        location,
    })?;
    Ok(narrow(value))
}

/// The explicit narrowing chain: i32, u32, i64, u64.
fn narrow(value: u64) -> LiteralValue {
    if value <= i32::MAX as u64 {
        LiteralValue::Int(value as i32)
    } else if value <= u32::MAX as u64 {
        LiteralValue::UInt(value as u32)
    } else if value <= i64::MAX as u64 {
        LiteralValue::Long(value as i64)
    } else {
        LiteralValue::ULong(value)
    }
}

fn malformed(lexeme: &str, location: SourceLocation) -> LexError {
    LexError::MalformedNumericLiteral {
        message: format!("invalid numeric literal '{}'", lexeme),
        location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 0)
    }

    fn read_all(source: &str) -> Result<String, LexError> {
        let mut cursor = Cursor::new(source);
        read(&mut cursor, loc())
    }

    fn value_of(source: &str) -> LiteralValue {
        let lexeme = read_all(source).expect("reader failed");
        parse(&lexeme, loc()).expect("parser failed")
    }

    #[test]
    fn test_narrowing_chain() {
        assert_eq!(value_of("0"), LiteralValue::Int(0));
        assert_eq!(value_of("2147483647"), LiteralValue::Int(2147483647));
        assert_eq!(value_of("2147483648"), LiteralValue::UInt(2147483648));
        assert_eq!(value_of("4294967296"), LiteralValue::Long(4294967296));
        assert_eq!(
            value_of("9223372036854775808"),
            LiteralValue::ULong(9223372036854775808)
        );
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(value_of("1_000_000"), value_of("1000000"));
        assert_eq!(read_all("1_000_000").unwrap(), "1_000_000");
    }

    #[test]
    fn test_radices() {
        assert_eq!(value_of("0xFF"), LiteralValue::Int(255));
        assert_eq!(value_of("0b1010"), LiteralValue::Int(10));
        assert_eq!(value_of("0xFFFFFFFFu"), LiteralValue::UInt(4294967295));
        assert_eq!(value_of("0XfF"), LiteralValue::Int(255));
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(value_of("1.5"), LiteralValue::Double(1.5));
        assert_eq!(value_of(".5"), LiteralValue::Double(0.5));
        assert_eq!(value_of("2f"), LiteralValue::Float(2.0));
        assert_eq!(value_of("2d"), LiteralValue::Double(2.0));
        assert_eq!(
            value_of("3.14m"),
            LiteralValue::Decimal("3.14".parse().unwrap())
        );
    }

    #[test]
    fn test_integer_suffixes_terminate() {
        assert_eq!(read_all("1ul;").unwrap(), "1ul");
        assert_eq!(read_all("1lu;").unwrap(), "1lu");
        assert_eq!(read_all("7L+").unwrap(), "7L");
        assert_eq!(value_of("7L"), LiteralValue::Int(7));
    }

    #[test]
    fn test_dot_requires_following_alphanumeric() {
        let mut cursor = Cursor::new("5..10");
        assert_eq!(read(&mut cursor, loc()).unwrap(), "5");
        assert_eq!(cursor.peek(), '.');
    }

    #[test]
    fn test_trailing_underscore_is_error() {
        assert!(matches!(
            read_all("1_"),
            Err(LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_binary_rejects_other_digits() {
        assert!(matches!(
            read_all("0b102"),
            Err(LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_multiple_dots_rejected() {
        let lexeme = read_all("1.2.3").expect("reader failed");
        assert!(matches!(
            parse(&lexeme, loc()),
            Err(LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_u64_overflow_fails() {
        assert!(matches!(
            parse("18446744073709551616", loc()),
            Err(LexError::MalformedNumericLiteral { .. })
        ));
    }

    #[test]
    fn test_bare_prefix_has_no_digits() {
        assert!(matches!(
            parse("0x", loc()),
            Err(LexError::MalformedNumericLiteral { .. })
        ));
    }
}
