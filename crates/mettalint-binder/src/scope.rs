//! Definition scopes.
//!
//! A `DefinitionScope` answers "has this variable been bound yet?" and
//! remembers which bound variables were ever used. The checker only talks
//! to the trait, so a nested-scope implementation can replace `FileScope`
//! without touching the reader or the binder.

use indexmap::IndexMap;
use mettalint_common::LineNumber;
use rustc_hash::{FxBuildHasher, FxHashSet};
use tracing::trace;

/// A bound variable that was never used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnusedBinding {
    pub name: String,
    /// Start line of the expression that first bound the variable.
    pub line: LineNumber,
}

pub trait DefinitionScope {
    /// Record a binding. Rebinding an already defined name keeps the first line.
    fn define(&mut self, name: &str, line: LineNumber);

    fn is_defined(&self, name: &str) -> bool;

    /// Record that `name` occurred as a use (not as a binding occurrence).
    fn record_use(&mut self, name: &str);

    /// Defined names never recorded as used, in definition order.
    fn unused(&self) -> Vec<UnusedBinding>;

    fn definition_count(&self) -> usize;
}

/// Flat, flow-insensitive scope covering a whole file.
///
/// Once bound, a name stays visible until the end of the file; there is no
/// nesting, shadowing or scope exit.
#[derive(Debug, Default)]
pub struct FileScope {
    definitions: IndexMap<String, LineNumber, FxBuildHasher>,
    uses: FxHashSet<String>,
}

impl FileScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line of the first binding of `name`.
    #[must_use]
    pub fn definition_line(&self, name: &str) -> Option<LineNumber> {
        self.definitions.get(name).copied()
    }

    #[must_use]
    pub fn is_used(&self, name: &str) -> bool {
        self.uses.contains(name)
    }
}

impl DefinitionScope for FileScope {
    fn define(&mut self, name: &str, line: LineNumber) {
        if !self.definitions.contains_key(name) {
            trace!(name, line, "new definition");
            self.definitions.insert(name.to_string(), line);
        }
    }

    fn is_defined(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    fn record_use(&mut self, name: &str) {
        if !self.uses.contains(name) {
            self.uses.insert(name.to_string());
        }
    }

    fn unused(&self) -> Vec<UnusedBinding> {
        self.definitions
            .iter()
            .filter(|(name, _)| !self.uses.contains(name.as_str()))
            .map(|(name, &line)| UnusedBinding {
                name: name.clone(),
                line,
            })
            .collect()
    }

    fn definition_count(&self) -> usize {
        self.definitions.len()
    }
}
