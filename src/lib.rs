//! # Introduction
//!
//! sharplex tokenizes a statically typed, curly-brace language closely
//! resembling C# and models the syntax tree a parser would build on top of
//! the token stream.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → (external parser) → Syntax tree
//! ```
//!
//! 1. [`lexer`] — hand-written single-pass scanner: identifiers and
//!    keywords, ~45 punctuator kinds with multi-character disambiguation,
//!    numeric literals with radix/suffix/fractional forms, character
//!    literals, and plain/verbatim/interpolated string literals.
//! 2. [`ast`] — the closed set of syntax-node variants with uniform child
//!    enumeration for visitors and a single-line rendering for diagnostics.
//!
//! The parser itself is an external collaborator; this crate supplies its
//! input (the token stream) and its output vocabulary (the node schema).

pub mod ast;
pub mod lexer;
