//! Diagnostic AST dump.
//!
//! Renders a parsed program as one s-expression string. Purely a display
//! aid for the `-pp` driver flag; no semantic information is consulted.

pub mod printer;

#[cfg(test)]
mod tests;
