//! Symbol table with a stack of nested scopes.

use std::collections::HashMap;

use crate::ast::ast::Ty;

/// The kind of entity a symbol names.
///
/// Closed but extensible set; calculadin currently only installs variables,
/// the other categories exist for the subroutine declarations a fuller
/// language front end would add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCategory {
    Variable,
    Parameter,
    Function,
}

/// One declared name.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub category: SymbolCategory,
    pub ty: Ty,
    /// Storage slot, unique across the whole run. Assigned by `install`.
    pub offset: usize,
}

impl Symbol {
    pub fn variable(name: &str, ty: Ty) -> Self {
        Symbol {
            name: name.to_string(),
            category: SymbolCategory::Variable,
            ty,
            offset: 0,
        }
    }
}

/// Scoped name-to-symbol mapping.
///
/// Lookup walks from the innermost scope outwards, so an inner declaration
/// shadows an outer one without error; redeclaring a name inside one scope
/// is the only conflict. Storage offsets come from a single run-global
/// counter that is never reset when scopes close, giving every declaration
/// in the program a distinct slot for a later flat-frame layout.
#[derive(Debug)]
pub struct SymbolTable {
    scopes: Vec<HashMap<String, Symbol>>,
    next_offset: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![HashMap::new()], // Global scope
            next_offset: 0,
        }
    }

    /// Enter a new scope.
    pub fn open_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exit the current scope. The global scope is never popped; closing it
    /// is a no-op rather than an error so unbalanced calls cannot underflow.
    pub fn close_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Installs a symbol in the current scope, assigning its storage offset.
    ///
    /// Fails if the name already exists in the current scope (shadowing an
    /// outer scope is fine). On failure nothing is mutated and the offset
    /// counter does not advance.
    pub fn install(&mut self, mut symbol: Symbol) -> Result<(), String> {
        let scope = self.scopes.last_mut().unwrap();

        if scope.contains_key(&symbol.name) {
            return Err(symbol.name);
        }

        symbol.offset = self.next_offset;
        self.next_offset += 1;
        scope.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    /// Looks up a name, searching scopes from innermost to outermost.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.get(name) {
                return Some(symbol);
            }
        }
        None
    }

    /// Total number of storage slots handed out, for downstream
    /// storage-layout planning.
    pub fn total_allocated(&self) -> usize {
        self.next_offset
    }

    /// Current scope depth (1 = only the global scope).
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
