//! Built-in predicates and a registry for looking them up by name.
//!
//! Schema files refer to predicates by name; the registry resolves those
//! names when a file is compiled.

use crate::foundation::ConstructionError;
use crate::schema::Predicate;
use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static CHROMOSOME_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:chr)?(\d+|X|Y|MT)$").expect("chromosome pattern is valid")
});

// ============================================================================
// BUILT-INS
// ============================================================================

/// Chromosome names such as `1`, `chr22`, `chrX`, `Y`, `chrMT` (any case).
pub fn chromosome_name() -> Predicate {
    Predicate::for_str("chromosome_name", |s| CHROMOSOME_NAME.is_match(s))
}

/// Non-empty strings, arrays and objects.
pub fn non_empty() -> Predicate {
    Predicate::new("non_empty", |value| match value {
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => false,
    })
}

/// Numbers greater than zero.
pub fn positive() -> Predicate {
    Predicate::for_f64("positive", |n| n > 0.0)
}

/// Numbers greater than or equal to zero.
pub fn non_negative() -> Predicate {
    Predicate::for_f64("non_negative", |n| n >= 0.0)
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Predicates by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct PredicateRegistry {
    predicates: IndexMap<String, Predicate>,
}

impl PredicateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in predicate.
    pub fn with_builtins() -> Self {
        let predicates = [chromosome_name(), non_empty(), positive(), non_negative()]
            .into_iter()
            .map(|p| (p.name().to_owned(), p))
            .collect();
        Self { predicates }
    }

    /// Adds a predicate under its own name.
    pub fn register(&mut self, predicate: Predicate) -> Result<(), ConstructionError> {
        if self.predicates.contains_key(predicate.name()) {
            return Err(ConstructionError::DuplicatePredicate(
                predicate.name().to_owned(),
            ));
        }
        tracing::debug!(name = predicate.name(), "registered predicate");
        self.predicates
            .insert(predicate.name().to_owned(), predicate);
        Ok(())
    }

    /// Looks up a predicate.
    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.predicates.get(name)
    }

    /// Looks up a predicate, failing if nobody registered `name`.
    pub fn resolve(&self, name: &str) -> Result<Predicate, ConstructionError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ConstructionError::UnknownPredicate(name.to_owned()))
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.predicates.keys().map(String::as_str)
    }

    /// Number of registered predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
