//! # argcheck-validator
//!
//! Declarative validation of function arguments.
//!
//! A [`Schema`] describes what one argument may hold: a declared
//! [`ValueKind`], an allowed-value [`OptionSet`], and a named [`Predicate`].
//! A [`ValidatedCall`] wraps a function together with its [`Signature`] and a
//! [`ParameterSchemaSet`], and checks every supplied argument before the
//! function runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use argcheck_validator::prelude::*;
//!
//! let schemas = ParameterSchemaSet::new()
//!     .with("x", Schema::new().of_type(ValueKind::Integer).option(0..10)?)
//!     .with("y", Schema::new().of_type(ValueKind::String).predicate(chromosome_name()));
//!
//! let main = wrap(
//!     |args: Arguments| format!("Accepted: {}, {}", args.positional()[0], args.positional()[1]),
//!     signature!(main(x, y))?,
//!     schemas,
//! )?;
//!
//! assert_eq!(
//!     main.call(Arguments::new().arg(2).arg("chrX")).unwrap(),
//!     r#"Accepted: 2, "chrX""#
//! );
//!
//! let err = main.call(Arguments::new().arg(2).arg("chr1_garbage")).unwrap_err();
//! assert_eq!(err.as_validation().map(ValidationError::code), Some("invalid_option"));
//! # Ok::<(), ConstructionError>(())
//! ```
//!
//! ## Schema files
//!
//! [`SchemaFile`] loads the same information from TOML or JSON, resolving
//! predicate names through a [`PredicateRegistry`].

pub mod call;
pub mod file;
pub mod foundation;
mod macros;
pub mod predicates;
pub mod prelude;
pub mod schema;

pub use call::{
    Arguments, Parameter, Signature, SignatureBuilder, ValidateCallExt, ValidatedCall, wrap,
};
pub use file::{CompiledSchema, LoadError, ParamDef, RangeDef, SchemaFile};
pub use foundation::{
    BindError, CallError, Constraint, ConstructionError, ValidationError, ValueKind,
};
pub use predicates::PredicateRegistry;
pub use schema::{IntRange, OptionSet, ParameterSchemaSet, Predicate, Schema};
