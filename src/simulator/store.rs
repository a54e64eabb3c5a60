//! Flat variable table
//!
//! One [`VariableStore`] lives for exactly one run. There is no scoping: a later
//! assignment overwrites the entry unconditionally, whatever block it came from.

use super::value::Value;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    vars: FxHashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Insert or overwrite `name`
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.vars.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
