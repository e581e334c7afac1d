//! Named custom checks.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type CheckFn = dyn Fn(&Value) -> bool + Send + Sync;

/// A named, single-input boolean check.
///
/// The `Fn(&Value) -> bool` bound is the whole arity contract: a predicate
/// takes exactly one value and nothing else. The name identifies the
/// predicate in [`Constraint::Predicate`](crate::foundation::Constraint) errors
/// and in [`PredicateRegistry`](crate::PredicateRegistry) lookups.
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    check: Arc<CheckFn>,
}

impl Predicate {
    /// Wraps a check over any value.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Wraps a check over strings; any other value fails.
    pub fn for_str<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| value.as_str().is_some_and(&check))
    }

    /// Wraps a check over numbers (as `f64`); any other value fails.
    pub fn for_f64<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| value.as_f64().is_some_and(&check))
    }

    /// The predicate's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_cow(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    /// Runs the check.
    pub fn test(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("check", &"<function>")
            .finish()
    }
}
