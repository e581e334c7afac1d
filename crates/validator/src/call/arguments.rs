//! Positional and named argument values for one call.

use super::Signature;
use indexmap::IndexMap;
use serde_json::Value;

/// The arguments of one call: positional values, then named values in the
/// order they were supplied.
///
/// A name supplied twice keeps its first value in [`named`](Self::named);
/// later values go to [`repeated`](Self::repeated) so they are still
/// validated, and binding rejects the call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
    repeated: Vec<(String, Value)>,
}

impl Arguments {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional value, builder style.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.push(value);
        self
    }

    /// Adds a named value, builder style.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends a positional value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Adds a named value. Returns false if `name` was already supplied.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> bool {
        let name = name.into();
        let value = value.into();
        if self.named.contains_key(&name) {
            self.repeated.push((name, value));
            return false;
        }
        self.named.insert(name, value);
        true
    }

    /// Positional values in call order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named values in the order supplied.
    pub fn named(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Values whose name was already taken, in the order supplied.
    pub fn repeated(&self) -> &[(String, Value)] {
        &self.repeated
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len() + self.repeated.len()
    }

    /// Returns true if no values were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Finds the value bound to parameter `name`, positionally or by name.
    pub fn lookup(&self, signature: &Signature, name: &str) -> Option<&Value> {
        signature
            .position(name)
            .and_then(|index| self.positional.get(index))
            .or_else(|| self.named.get(name))
    }

    /// Splits into positional and named values, dropping repeats.
    pub fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.positional, self.named)
    }
}
