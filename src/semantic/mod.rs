//! Semantic analysis module.
//!
//! This module performs scoped symbol resolution and type classification on
//! the AST. It walks the tree once, in source order, while:
//!
//! - Installing declared identifiers into a scoped symbol table
//! - Assigning each declaration a unique storage offset
//! - Resolving identifier references innermost-scope-first
//! - Classifying expression types and flagging incompatible operands
//!
//! Unlike the lexer and parser, this phase never stops at the first
//! problem: diagnostics are accumulated and the traversal continues, so a
//! single run surfaces as many independent errors as possible.

pub mod analyzer;
pub mod symbol_table;

pub use analyzer::{analyze, Analysis};
pub use symbol_table::{Symbol, SymbolCategory, SymbolTable};
