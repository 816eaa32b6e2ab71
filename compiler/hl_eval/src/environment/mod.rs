//! Flat variable table for one interpreter session.
//!
//! There is a single scope. Entries are inserted by declaration and updated
//! by assignment; nothing is ever removed.

use rustc_hash::FxHashMap;

use crate::value::{Value, VarType};

/// A declared variable.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Variable {
    pub ty: VarType,
    /// `None` until the first successful assignment.
    pub value: Option<Value>,
}

/// Error returned by lookups and writes on the table.
///
/// Typed so each caller can map it to its own diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// Name was never declared.
    Undeclared,
    /// Name was declared but never assigned.
    Unassigned,
}

/// Mapping identifier to [`Variable`].
#[derive(Clone, Debug, Default)]
pub struct VariableTable {
    vars: FxHashMap<String, Variable>,
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable {
            vars: FxHashMap::default(),
        }
    }

    /// Register `name` with `ty` and no value.
    ///
    /// Re-declaring replaces both the type and the value.
    pub fn declare(&mut self, name: &str, ty: VarType) {
        self.vars
            .insert(name.to_string(), Variable { ty, value: None });
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Current value of `name`.
    pub fn value(&self, name: &str) -> Result<Value, LookupError> {
        let var = self.vars.get(name).ok_or(LookupError::Undeclared)?;
        var.value.ok_or(LookupError::Unassigned)
    }

    /// Store `value` into an already declared variable.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), LookupError> {
        let var = self.vars.get_mut(name).ok_or(LookupError::Undeclared)?;
        var.value = Some(value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
