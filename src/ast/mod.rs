/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The tree is a closed set of tagged variants: every consumer dispatches
/// with a total `match`, so a missing node kind is a compile error rather
/// than a silent fallthrough.
pub mod ast;
