//! Declarative schema files.
//!
//! A schema file describes one function: its name, its parameters in order,
//! and the constraints on each. TOML and JSON are both accepted.
//!
//! ```toml
//! function = "main"
//!
//! [[params]]
//! name = "x"
//! type = "int"
//! range = { start = 0, end = 10 }
//!
//! [[params]]
//! name = "y"
//! type = "str"
//! predicate = "chromosome_name"
//! ```

use crate::call::{Arguments, Signature, ValidatedCall};
use crate::foundation::{ConstructionError, ValueKind};
use crate::predicates::PredicateRegistry;
use crate::schema::{IntRange, ParameterSchemaSet, Schema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or compiling a schema file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read schema file {}", path.display())]
    Io {
        /// The file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML.
    #[cfg(feature = "toml")]
    #[error("invalid TOML schema")]
    Toml(#[from] toml::de::Error),

    /// The file is not valid JSON.
    #[error("invalid JSON schema")]
    Json(#[from] serde_json::Error),

    /// The extension does not name a supported format.
    #[error("unsupported schema file format `{0}`")]
    UnsupportedFormat(String),

    /// One parameter's constraints are invalid.
    #[error("invalid parameter `{name}`")]
    InvalidParameter {
        /// The parameter.
        name: String,
        /// What was wrong with it.
        #[source]
        source: ConstructionError,
    },

    /// The signature itself is invalid.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

// ============================================================================
// FILE MODEL
// ============================================================================

/// A parsed schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaFile {
    /// Name of the described function.
    pub function: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDef>,
}

/// One parameter entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDef {
    /// Parameter name.
    pub name: String,
    /// True if the target has a default for it.
    #[serde(default)]
    pub optional: bool,
    /// Declared type.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ValueKind>,
    /// Allowed values: an array, an object whose keys are allowed, or a
    /// string whose substrings are allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    /// Allowed integer range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeDef>,
    /// Name of a registered predicate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<String>,
}

/// `range = { start, end, step }`; `step` defaults to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeDef {
    /// First member.
    pub start: i64,
    /// Exclusive bound.
    pub end: i64,
    /// Distance between members.
    #[serde(default = "default_step")]
    pub step: i64,
}

fn default_step() -> i64 {
    1
}

impl ParamDef {
    /// Builds the schema for this parameter, or `None` if it declares no constraints.
    pub fn to_schema(
        &self,
        registry: &PredicateRegistry,
    ) -> Result<Option<Schema>, ConstructionError> {
        let mut schema = Schema::new();
        if let Some(kind) = self.kind {
            schema = schema.of_type(kind);
        }
        match (&self.options, self.range) {
            (Some(_), Some(_)) => return Err(ConstructionError::ConflictingOptions),
            (Some(values), None) => schema = schema.option(values.clone())?,
            (None, Some(r)) => schema = schema.option(IntRange::new(r.start, r.end, r.step)?)?,
            (None, None) => {}
        }
        if let Some(name) = &self.predicate {
            schema = schema.predicate(registry.resolve(name)?);
        }
        Ok((!schema.is_unconstrained()).then_some(schema))
    }
}

/// A schema file compiled against a predicate registry.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    /// The function's signature.
    pub signature: Signature,
    /// Schemas for the constrained parameters.
    pub schemas: ParameterSchemaSet,
}

impl CompiledSchema {
    /// Wraps `target` with the compiled signature and schemas.
    pub fn wrap<F, R>(self, target: F) -> Result<ValidatedCall<F>, ConstructionError>
    where
        F: Fn(Arguments) -> R,
    {
        ValidatedCall::new(target, self.signature, self.schemas)
    }
}

impl SchemaFile {
    /// Parses a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a TOML document.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(input)?)
    }

    /// Reads a file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let read = || {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let file = match extension.as_str() {
            "json" => Self::from_json_str(&read()?)?,
            #[cfg(feature = "toml")]
            "toml" => Self::from_toml_str(&read()?)?,
            other => return Err(LoadError::UnsupportedFormat(other.to_owned())),
        };

        tracing::debug!(
            path = %path.display(),
            function = %file.function,
            params = file.params.len(),
            "loaded schema file"
        );
        Ok(file)
    }

    /// Resolves predicates and builds the signature and schema set.
    pub fn compile(&self, registry: &PredicateRegistry) -> Result<CompiledSchema, LoadError> {
        let signature = self
            .params
            .iter()
            .fold(Signature::builder(&self.function), |builder, param| {
                if param.optional {
                    builder.optional(&param.name)
                } else {
                    builder.required(&param.name)
                }
            })
            .build()?;

        let mut schemas = ParameterSchemaSet::new();
        for param in &self.params {
            let schema = param
                .to_schema(registry)
                .map_err(|source| LoadError::InvalidParameter {
                    name: param.name.clone(),
                    source,
                })?;
            if let Some(schema) = schema {
                schemas.insert(&param.name, schema);
            }
        }

        Ok(CompiledSchema { signature, schemas })
    }
}
