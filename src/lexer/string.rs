//! String and character literal reading.
//!
//! String bodies are read through to the source verbatim: escape sequences
//! are *not* resolved, so the emitted lexeme reproduces the original text,
//! quotes and sigils included. Termination rules vary by mode:
//!
//! - plain: a `"` preceded by an even run of backslashes,
//! - verbatim: a `"` not followed by another `"` (doubled quotes are
//!   literal, backslashes never escape),
//! - interpolated: only at interpolation depth zero; a `"` inside a hole
//!   belongs to the embedded expression and passes through raw.
//!
//! Interpolation depth follows runs of consecutive brace characters: a run
//! is committed when it ends, and an odd-sized run toggles the depth, so
//! `{{` stays literal while `{` opens a hole.

use super::cursor::Cursor;
use super::lexer::LexError;

/// Escape targets the validators accept after a backslash.
///
/// `\x`, `\u` and `\U` are intentionally unhandled: they pass through the
/// lexer without being an error.
const ESCAPES: [char; 11] = ['\\', 'a', 'b', 'f', 'n', 'r', 't', 'v', '\'', '"', '0'];

/// Whether `ch` is a recognised escape target.
pub(crate) fn is_valid_escape(ch: char) -> bool {
    ESCAPES.contains(&ch)
}

/// Read a string body, starting at the opening quote.
///
/// `lexeme` arrives holding any already-consumed sigils (`@`, `$`) and is
/// returned holding the full source text of the literal, closing quote
/// included.
pub(crate) fn read_string_body(
    cursor: &mut Cursor,
    verbatim: bool,
    interpolated: bool,
    mut lexeme: String,
) -> Result<String, LexError> {
    let start = cursor.location();
    lexeme.push(cursor.consume()); // opening quote

    // Consecutive-backslash run; a quote terminates only at even parity.
    let mut backslash_run = 0usize;
    // Interpolation-hole depth and the pending run of identical braces.
    let mut depth = 0usize;
    let mut brace_run: Option<(char, usize)> = None;

    loop {
        if cursor.is_at_end() {
            return Err(LexError::UnterminatedLiteral {
                what: "string literal",
                location: start,
            });
        }
        let ch = cursor.peek();

        if interpolated {
            if ch == '{' || ch == '}' {
                brace_run = Some(match brace_run {
                    Some((brace, run)) if brace == ch => (brace, run + 1),
                    Some((brace, run)) => {
                        commit_brace_run(brace, run, &mut depth);
                        (ch, 1)
                    }
                    None => (ch, 1),
                });
                lexeme.push(cursor.consume());
                backslash_run = 0;
                continue;
            }
            if let Some((brace, run)) = brace_run.take() {
                commit_brace_run(brace, run, &mut depth);
            }
        }

        if ch == '"' {
            if verbatim {
                if cursor.peek_at(1) == '"' {
                    // Doubled quote: a literal quote character.
                    lexeme.push(cursor.consume());
                    lexeme.push(cursor.consume());
                    continue;
                }
                if depth == 0 {
                    lexeme.push(cursor.consume());
                    return Ok(lexeme);
                }
            } else if depth == 0 && backslash_run % 2 == 0 {
                lexeme.push(cursor.consume());
                return Ok(lexeme);
            }
            lexeme.push(cursor.consume());
            backslash_run = 0;
            continue;
        }

        if !verbatim && ch == '\\' {
            backslash_run += 1;
        } else {
            backslash_run = 0;
        }
        lexeme.push(cursor.consume());
    }
}

/// Commit a finished brace run: an odd-sized run toggles the depth.
fn commit_brace_run(brace: char, run: usize, depth: &mut usize) {
    if run % 2 == 1 {
        if brace == '{' {
            *depth += 1;
        } else {
            *depth = depth.saturating_sub(1);
        }
    }
}

/// Read a character literal, starting at the opening quote.
///
/// One character is read (two when the first is `\`, to include the escape
/// target), then the closing quote. The escape target is validated against
/// the escape table, with `x`/`u`/`U` passing through unvalidated.
pub(crate) fn read_char_literal(cursor: &mut Cursor) -> Result<String, LexError> {
    let start = cursor.location();
    let mut lexeme = String::new();
    lexeme.push(cursor.consume()); // opening quote

    if cursor.is_at_end() {
        return Err(LexError::UnterminatedLiteral {
            what: "character literal",
            location: start,
        });
    }
    let ch = cursor.consume();
    lexeme.push(ch);

    if ch == '\\' {
        if cursor.is_at_end() {
            return Err(LexError::UnterminatedLiteral {
                what: "character literal",
                location: start,
            });
        }
        let escaped = cursor.consume();
        lexeme.push(escaped);
        if !is_valid_escape(escaped) && !matches!(escaped, 'x' | 'u' | 'U') {
            return Err(LexError::UnknownEscapeSequence {
                escaped,
                location: start,
            });
        }
    }

    if !cursor.consume_if('\'') {
        return Err(LexError::UnterminatedLiteral {
            what: "character literal",
            location: start,
        });
    }
    lexeme.push('\'');
    Ok(lexeme)
}
