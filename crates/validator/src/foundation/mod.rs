//! Value kinds and error types shared by every other module.
//!
//! - **Kinds**: [`ValueKind`], the type tag a schema can require
//! - **Errors**: [`ConstructionError`], [`ValidationError`], [`BindError`], [`CallError`]

pub mod error;
pub mod kind;

pub use error::{BindError, CallError, Constraint, ConstructionError, ValidationError};
pub use kind::ValueKind;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
