pub mod check;
pub mod inspect;
pub mod predicates;

use std::path::Path;

use anyhow::Context;
use argcheck_validator::{CompiledSchema, PredicateRegistry, SchemaFile};

fn compile(path: &Path, registry: &PredicateRegistry) -> anyhow::Result<CompiledSchema> {
    let file = SchemaFile::load(path)?;
    file.compile(registry)
        .with_context(|| format!("invalid schema file {}", path.display()))
}
