//! Mapping from parameter name to [`Schema`].

use super::Schema;
use indexmap::IndexMap;

/// Schemas keyed by parameter name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ParameterSchemaSet {
    schemas: IndexMap<String, Schema>,
}

impl ParameterSchemaSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a schema, builder style. A repeated name replaces the earlier schema.
    pub fn with(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.insert(name, schema);
        self
    }

    /// Adds a schema, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.schemas.insert(name.into(), schema)
    }

    /// Looks up the schema for `name`.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Returns true if `name` has a schema.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    /// `(name, schema)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Schema)> for ParameterSchemaSet {
    fn from_iter<I: IntoIterator<Item = (S, Schema)>>(iter: I) -> Self {
        Self {
            schemas: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValueKind;

    #[test]
    fn keeps_insertion_order() {
        let set = ParameterSchemaSet::new()
            .with("y", Schema::new())
            .with("x", Schema::new());
        assert_eq!(set.names().collect::<Vec<_>>(), ["y", "x"]);
    }

    #[test]
    fn repeated_name_replaces() {
        let mut set = ParameterSchemaSet::new().with("x", Schema::new());
        let old = set.insert("x", Schema::new().of_type(ValueKind::Integer));
        assert!(old.is_some_and(|s| s.is_unconstrained()));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get("x").and_then(Schema::declared_type),
            Some(ValueKind::Integer)
        );
    }

    #[test]
    fn collects_from_pairs() {
        let set: ParameterSchemaSet = [("a", Schema::new()), ("b", Schema::new())]
            .into_iter()
            .collect();
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }
}
