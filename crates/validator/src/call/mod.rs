//! Call interception: validate arguments, then forward.
//!
//! [`ValidatedCall`] owns a target function, its [`Signature`] and a
//! [`ParameterSchemaSet`]. Each call runs through
//! `validate → bind → invoke`; a failure at either of the first two steps
//! returns an error and the target never runs.
//!
//! ```rust
//! use argcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let schemas = ParameterSchemaSet::new()
//!     .with("x", Schema::new().of_type(ValueKind::Integer).option(0..10)?)
//!     .with("y", Schema::new().of_type(ValueKind::String).predicate(chromosome_name()));
//!
//! let main = (|args: Arguments| format!("Accepted: {:?}", args.positional()))
//!     .validated(signature!(main(x, y))?, schemas)?;
//!
//! assert!(main.call(Arguments::new().arg(2).arg("chrX")).is_ok());
//! assert!(main.call(Arguments::new().arg(11).arg("chrX")).is_err());
//! # Ok::<(), ConstructionError>(())
//! ```

pub mod arguments;
pub mod signature;

pub use arguments::Arguments;
pub use signature::{Parameter, Signature, SignatureBuilder};

use crate::foundation::{CallError, ConstructionError, ValidationResult};
use crate::schema::ParameterSchemaSet;
use serde_json::Value;
use std::fmt;

// ============================================================================
// VALIDATED CALL
// ============================================================================

/// A function wrapped with per-parameter schemas.
///
/// Holds no state besides the target, signature and schemas, so one instance
/// can be shared across threads whenever the target is `Sync`.
#[derive(Clone)]
pub struct ValidatedCall<F> {
    target: F,
    signature: Signature,
    schemas: ParameterSchemaSet,
}

impl<F> ValidatedCall<F> {
    /// Wraps `target`.
    ///
    /// Fails with [`ConstructionError::UnknownParameter`] if a schema is bound
    /// to a name the signature does not declare.
    pub fn new(
        target: F,
        signature: Signature,
        schemas: ParameterSchemaSet,
    ) -> Result<Self, ConstructionError> {
        if let Some(param) = schemas.names().find(|name| !signature.contains(name)) {
            return Err(ConstructionError::UnknownParameter {
                param: param.to_owned(),
                function: signature.function().to_owned(),
            });
        }

        tracing::debug!(
            function = signature.function(),
            params = signature.len(),
            schemas = schemas.len(),
            "wrapped function with argument schemas"
        );

        Ok(Self {
            target,
            signature,
            schemas,
        })
    }

    /// The wrapped function's signature.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The registered schemas.
    pub fn schemas(&self) -> &ParameterSchemaSet {
        &self.schemas
    }

    /// Unwraps the target function.
    pub fn into_inner(self) -> F {
        self.target
    }

    /// Validates `args` without calling the target.
    ///
    /// Positional values are zipped with the declared names and checked first,
    /// in declaration order; named values follow in the order supplied, then
    /// any repeated names.
    /// Values beyond the declared parameters and names without a schema pass
    /// unchecked.
    pub fn validate(&self, args: &Arguments) -> ValidationResult<()> {
        for (name, value) in self.signature.names().zip(args.positional()) {
            self.check(name, value)?;
        }
        for (name, value) in args.named() {
            self.check(name, value)?;
        }
        for (name, value) in args.repeated() {
            self.check(name, value)?;
        }
        Ok(())
    }

    fn check(&self, name: &str, value: &Value) -> ValidationResult<()> {
        match self.schemas.get(name) {
            Some(schema) => schema.validate(value).map_err(|err| err.with_field(name)),
            None => Ok(()),
        }
    }

    /// Validates, binds and, if both succeed, invokes the target with `args`
    /// unchanged.
    pub fn call<R>(&self, args: Arguments) -> Result<R, CallError>
    where
        F: Fn(Arguments) -> R,
    {
        let function = self.signature.function();

        if let Err(err) = self.validate(&args) {
            tracing::trace!(function, code = err.code(), field = err.field(), "call rejected");
            return Err(err.into());
        }
        if let Err(err) = self.signature.bind(&args) {
            tracing::trace!(function, %err, "call rejected");
            return Err(err.into());
        }

        tracing::trace!(function, args = args.len(), "invoking");
        Ok((self.target)(args))
    }
}

impl<F> fmt::Debug for ValidatedCall<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCall")
            .field("target", &"<function>")
            .field("signature", &self.signature)
            .field("schemas", &self.schemas)
            .finish()
    }
}

// ============================================================================
// WRAPPING ENTRY POINTS
// ============================================================================

/// Wraps `target`; same as [`ValidatedCall::new`].
pub fn wrap<F, R>(
    target: F,
    signature: Signature,
    schemas: ParameterSchemaSet,
) -> Result<ValidatedCall<F>, ConstructionError>
where
    F: Fn(Arguments) -> R,
{
    ValidatedCall::new(target, signature, schemas)
}

/// Extension trait that turns any `Fn(Arguments) -> R` into a
/// [`ValidatedCall`].
///
/// ```rust
/// use argcheck_validator::prelude::*;
///
/// let double = (|args: Arguments| args.positional()[0].as_i64().map(|n| n * 2))
///     .validated(
///         signature!(double(n))?,
///         ParameterSchemaSet::new().with("n", Schema::new().of_type(ValueKind::Integer)),
///     )?;
/// assert_eq!(double.call(Arguments::new().arg(21)).unwrap(), Some(42));
/// # Ok::<(), ConstructionError>(())
/// ```
pub trait ValidateCallExt<R>: Fn(Arguments) -> R + Sized {
    /// Wraps `self` with `schemas`.
    fn validated(
        self,
        signature: Signature,
        schemas: ParameterSchemaSet,
    ) -> Result<ValidatedCall<Self>, ConstructionError> {
        ValidatedCall::new(self, signature, schemas)
    }
}

impl<F, R> ValidateCallExt<R> for F where F: Fn(Arguments) -> R {}
