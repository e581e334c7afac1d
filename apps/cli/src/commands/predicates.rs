use std::process::ExitCode;

use argcheck_validator::PredicateRegistry;

#[allow(clippy::unnecessary_wraps)]
pub fn run(registry: &PredicateRegistry) -> anyhow::Result<ExitCode> {
    for name in registry.names() {
        println!("{name}");
    }
    Ok(ExitCode::SUCCESS)
}
