//! The per-parameter rule object.
//!
//! A [`Schema`] bundles three optional constraints and checks them in a fixed
//! order: declared type, then allowed-value membership, then the custom
//! predicate. A predicate therefore only ever sees values of the declared type.
//!
//! ```rust
//! use argcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let x = Schema::new().of_type(ValueKind::Integer).option(0..10)?;
//! assert!(x.validate(&json!(2)).is_ok());
//! assert!(x.validate(&json!(11)).is_err());
//! # Ok::<(), ConstructionError>(())
//! ```

pub mod options;
pub mod predicate;
pub mod set;

pub use options::{IntRange, OptionSet};
pub use predicate::Predicate;
pub use set::ParameterSchemaSet;

use crate::foundation::{
    Constraint, ConstructionError, ValidationError, ValidationResult, ValueKind,
};
use serde_json::Value;
use std::fmt;

/// Optional type, allowed-value and predicate constraints for one argument.
///
/// Unset constraints are `None`; a default `Schema` accepts everything.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    declared_type: Option<ValueKind>,
    allowed_values: Option<OptionSet>,
    predicate: Option<Predicate>,
}

impl Schema {
    /// Creates a schema with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires values of `kind`.
    pub fn of_type(mut self, kind: ValueKind) -> Self {
        self.declared_type = Some(kind);
        self
    }

    /// Restricts values to a collection.
    ///
    /// Accepts JSON arrays, objects and strings, `Vec<Value>`, `Range<i64>`
    /// and [`IntRange`]. A string admits its substrings. Null, bool and number
    /// fail with [`ConstructionError::NotIterable`].
    pub fn option<O>(mut self, values: O) -> Result<Self, ConstructionError>
    where
        O: TryInto<OptionSet, Error = ConstructionError>,
    {
        self.allowed_values = Some(values.try_into()?);
        Ok(self)
    }

    /// Adds a custom check.
    pub fn predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Adds a custom check built from a closure.
    pub fn predicate_fn<F>(self, name: &'static str, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.predicate(Predicate::new(name, check))
    }

    /// The declared type, if any.
    pub fn declared_type(&self) -> Option<ValueKind> {
        self.declared_type
    }

    /// The allowed-value collection, if any.
    pub fn allowed_values(&self) -> Option<&OptionSet> {
        self.allowed_values.as_ref()
    }

    /// Returns true if no constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.declared_type.is_none() && self.allowed_values.is_none() && self.predicate.is_none()
    }

    /// Checks `value` against type, then options, then predicate.
    ///
    /// Stops at the first failure.
    pub fn validate(&self, value: &Value) -> ValidationResult<()> {
        if let Some(expected) = self.declared_type
            && !expected.accepts(value)
        {
            return Err(ValidationError::TypeMismatch {
                field: None,
                expected,
                actual: ValueKind::of(value),
                value: value.clone(),
            });
        }

        if let Some(set) = &self.allowed_values
            && !set.contains(value)
        {
            return Err(ValidationError::InvalidOption {
                field: None,
                value: value.clone(),
                constraint: Constraint::Options(set.clone()),
            });
        }

        if let Some(predicate) = &self.predicate
            && !predicate.test(value)
        {
            return Err(ValidationError::InvalidOption {
                field: None,
                value: value.clone(),
                constraint: Constraint::Predicate(predicate.name_cow()),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return f.write_str("unchecked");
        }
        let mut parts = Vec::with_capacity(3);
        if let Some(kind) = self.declared_type {
            parts.push(format!("type={kind}"));
        }
        if let Some(set) = &self.allowed_values {
            parts.push(format!("options={set}"));
        }
        if let Some(predicate) = &self.predicate {
            parts.push(format!("predicate={}", predicate.name()));
        }
        f.write_str(&parts.join(", "))
    }
}
