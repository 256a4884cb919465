//! Syntax-tree model for the C#-style language.
//!
//! The tree is a closed vocabulary of node shapes:
//! - [`node`]: the [`node::AstNode`] variants plus operator, modifier, and
//!   accessor tag types
//! - [`children`]: the builder that assembles ordered child lists while
//!   skipping absent optional children
//! - [`display`]: single-line renderings used by diagnostics
//!
//! Nodes are created by the parser (an external collaborator). Their
//! contents may be mutated by later passes, but the set of structural
//! children of each shape is stable, and every node can be asked for its
//! children uniformly, which is what generic visitors walk.

pub mod children;
pub mod display;
pub mod node;
