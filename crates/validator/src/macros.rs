//! Macros for declaring signatures with minimal boilerplate.

/// Builds a [`Signature`](crate::Signature) whose parameters are all required,
/// taking the function and parameter names from identifiers.
///
/// Expands to a `Result<Signature, ConstructionError>`.
///
/// ```rust
/// use argcheck_validator::signature;
///
/// let sig = signature!(main(x, y)).unwrap();
/// assert_eq!(sig.function(), "main");
/// assert_eq!(sig.names().collect::<Vec<_>>(), ["x", "y"]);
///
/// assert!(signature!(noop()).unwrap().is_empty());
/// assert!(signature!(twice(a, a)).is_err());
/// ```
#[macro_export]
macro_rules! signature {
    ($function:ident ( $($param:ident),* $(,)? )) => {{
        let names: &[&str] = &[$(stringify!($param)),*];
        $crate::Signature::new(stringify!($function), names.iter().copied())
    }};
}
