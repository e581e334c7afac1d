//! Pre-resolved parameter lists.

use super::Arguments;
use crate::foundation::{BindError, ConstructionError};

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    required: bool,
}

impl Parameter {
    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// False if the target supplies a default.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// The ordered parameter names of a wrapped function, captured once at wrap time.
///
/// Positional arguments are matched to parameters by index in this list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    function: String,
    params: Vec<Parameter>,
}

impl Signature {
    /// Declares a function whose parameters are all required.
    pub fn new<I, S>(function: impl Into<String>, names: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .fold(Self::builder(function), |builder, name| builder.required(name))
            .build()
    }

    /// Starts a signature with a mix of required and optional parameters.
    pub fn builder(function: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder {
            function: function.into(),
            params: Vec::new(),
        }
    }

    /// Name of the function.
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(Parameter::name)
    }

    /// Index of `name`, if declared.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    /// Returns true if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if the function takes no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Checks that `args` can be bound to these parameters.
    pub fn bind(&self, args: &Arguments) -> Result<(), BindError> {
        let given = args.positional().len();
        if given > self.params.len() {
            return Err(BindError::TooManyPositional {
                function: self.function.clone(),
                expected: self.params.len(),
                given,
            });
        }

        if let Some((name, _)) = args.repeated().first() {
            return Err(BindError::DuplicateKeyword {
                function: self.function.clone(),
                name: name.clone(),
            });
        }

        for name in args.named().keys() {
            match self.position(name) {
                None => {
                    return Err(BindError::UnexpectedKeyword {
                        function: self.function.clone(),
                        name: name.clone(),
                    });
                }
                Some(index) if index < given => {
                    return Err(BindError::MultipleValues {
                        function: self.function.clone(),
                        name: name.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        if let Some(missing) = self.params[given..]
            .iter()
            .find(|p| p.required && !args.named().contains_key(&p.name))
        {
            return Err(BindError::MissingArgument {
                function: self.function.clone(),
                name: missing.name.clone(),
            });
        }

        Ok(())
    }
}

/// Builder for [`Signature`].
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    function: String,
    params: Vec<Parameter>,
}

impl SignatureBuilder {
    /// Appends a required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            required: true,
        });
        self
    }

    /// Appends a parameter the target has a default for.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            required: false,
        });
        self
    }

    /// Finishes the signature, rejecting repeated names.
    pub fn build(self) -> Result<Signature, ConstructionError> {
        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(ConstructionError::DuplicateParameter {
                    param: param.name.clone(),
                    function: self.function,
                });
            }
        }
        Ok(Signature {
            function: self.function,
            params: self.params,
        })
    }
}
