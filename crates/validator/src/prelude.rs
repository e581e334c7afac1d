//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use argcheck_validator::prelude::*;
//! ```

pub use crate::call::{
    Arguments, Parameter, Signature, SignatureBuilder, ValidateCallExt, ValidatedCall, wrap,
};
pub use crate::foundation::{
    BindError, CallError, Constraint, ConstructionError, ValidationError, ValidationResult,
    ValueKind,
};
pub use crate::predicates::{
    PredicateRegistry, chromosome_name, non_empty, non_negative, positive,
};
pub use crate::schema::{IntRange, OptionSet, ParameterSchemaSet, Predicate, Schema};
pub use crate::signature;
