//! Error types for schema construction, argument validation and binding.
//!
//! Construction errors are raised while a [`Schema`](crate::Schema),
//! [`Signature`](crate::Signature) or [`ValidatedCall`](crate::ValidatedCall)
//! is being built and never mid-call. Validation and binding errors are
//! raised per call and always prevent the wrapped function from running.

use crate::foundation::ValueKind;
use crate::schema::OptionSet;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Invalid configuration detected while building a schema or wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// `option(...)` was given a scalar instead of a collection.
    #[error("option requires an iterable value, found {found}")]
    NotIterable {
        /// Kind of the rejected value.
        found: ValueKind,
    },

    /// An integer range was declared with a step of zero.
    #[error("range step must not be zero")]
    ZeroStep,

    /// Both an explicit option list and a range were declared.
    #[error("`options` and `range` are mutually exclusive")]
    ConflictingOptions,

    /// A predicate was referenced by a name nobody registered.
    #[error("unknown predicate `{0}`")]
    UnknownPredicate(String),

    /// A predicate name was registered twice.
    #[error("predicate `{0}` is already registered")]
    DuplicatePredicate(String),

    /// A schema was bound to a name the wrapped function does not declare.
    #[error("schema bound to `{param}`, which is not a parameter of `{function}`")]
    UnknownParameter {
        /// The offending schema key.
        param: String,
        /// Name of the wrapped function.
        function: String,
    },

    /// A signature declared the same parameter name twice.
    #[error("parameter `{param}` declared more than once in `{function}`")]
    DuplicateParameter {
        /// The repeated name.
        param: String,
        /// Name of the function being described.
        function: String,
    },
}

// ============================================================================
// VALIDATION
// ============================================================================

/// The rule that rejected a value in [`ValidationError::InvalidOption`].
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// The value was not a member of the allowed set.
    Options(OptionSet),
    /// The named predicate returned false.
    Predicate(Cow<'static, str>),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(set) => write!(f, "option `{set}`"),
            Self::Predicate(name) => write!(f, "validate function `{name}`"),
        }
    }
}

/// A value failed the schema registered for its parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value does not conform to the declared type.
    #[error("{}expecting type {expected}, found {actual}", field_prefix(.field))]
    TypeMismatch {
        /// Parameter name, attached by the wrapper.
        field: Option<String>,
        /// The declared type.
        expected: ValueKind,
        /// The value's concrete type.
        actual: ValueKind,
        /// The rejected value.
        value: Value,
    },

    /// The value is outside the allowed set or failed the predicate.
    #[error("{}value `{}` is not accepted by {constraint}", field_prefix(.field), display_value(.value))]
    InvalidOption {
        /// Parameter name, attached by the wrapper.
        field: Option<String>,
        /// The rejected value.
        value: Value,
        /// The rule that rejected it.
        constraint: Constraint,
    },
}

impl ValidationError {
    /// Stable error code for programmatic handling.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::InvalidOption { .. } => "invalid_option",
        }
    }

    /// Name of the parameter that failed, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::TypeMismatch { field, .. } | Self::InvalidOption { field, .. } => {
                field.as_deref()
            }
        }
    }

    /// The rejected value.
    pub fn value(&self) -> &Value {
        match self {
            Self::TypeMismatch { value, .. } | Self::InvalidOption { value, .. } => value,
        }
    }

    /// Attaches the parameter name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Self::TypeMismatch { field, .. } | Self::InvalidOption { field, .. } => {
                *field = Some(name.into());
            }
        }
        self
    }
}

fn field_prefix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|name| format!("[{name}] "))
        .unwrap_or_default()
}

/// Strings are shown bare, everything else as compact JSON.
pub(crate) fn display_value(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

// ============================================================================
// BINDING
// ============================================================================

/// The supplied arguments do not fit the wrapped function's signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// More positional values than declared parameters.
    #[error("`{function}` takes {expected} positional argument(s) but {given} were given")]
    TooManyPositional {
        /// Name of the wrapped function.
        function: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied positional count.
        given: usize,
    },

    /// A named argument that is not a declared parameter.
    #[error("`{function}` got an unexpected keyword argument `{name}`")]
    UnexpectedKeyword {
        /// Name of the wrapped function.
        function: String,
        /// The undeclared name.
        name: String,
    },

    /// A parameter supplied both positionally and by name.
    #[error("`{function}` got multiple values for argument `{name}`")]
    MultipleValues {
        /// Name of the wrapped function.
        function: String,
        /// The doubly-supplied parameter.
        name: String,
    },

    /// A named argument supplied more than once.
    #[error("`{function}` got multiple values for keyword argument `{name}`")]
    DuplicateKeyword {
        /// Name of the wrapped function.
        function: String,
        /// The repeated name.
        name: String,
    },

    /// A required parameter supplied neither way.
    #[error("`{function}` missing required argument `{name}`")]
    MissingArgument {
        /// Name of the wrapped function.
        function: String,
        /// The missing parameter.
        name: String,
    },
}

/// Why a [`ValidatedCall`](crate::ValidatedCall) refused to invoke its target.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    /// An argument failed its schema.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The arguments do not fit the signature.
    #[error(transparent)]
    Binding(#[from] BindError),
}

impl CallError {
    /// Returns the validation error, if that is what this is.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Binding(_) => None,
        }
    }

    /// Returns the binding error, if that is what this is.
    pub fn as_binding(&self) -> Option<&BindError> {
        match self {
            Self::Binding(err) => Some(err),
            Self::Validation(_) => None,
        }
    }
}
