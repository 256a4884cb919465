//! Tokenizer for C#-style source text.
//!
//! This module converts source text into a flat [`token::Token`] stream:
//! - [`cursor`]: buffered character view with line/column tracking
//! - [`token`]: token model, token kinds, and the reserved-word set
//! - [`number`]: numeric literal reading and narrowing value parse
//! - [`string`]: string and character literal reading
//! - [`lexer`]: the dispatch loop that emits tokens
//!
//! Preprocessor directives are consumed to end of line rather than parsed;
//! comments are skipped. Both emit nothing.

pub mod cursor;
pub mod lexer;
pub mod number;
pub mod string;
pub mod token;
