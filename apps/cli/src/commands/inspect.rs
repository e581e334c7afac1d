use std::process::ExitCode;

use argcheck_validator::PredicateRegistry;

use crate::cli::InspectArgs;

pub fn run(args: &InspectArgs, registry: &PredicateRegistry) -> anyhow::Result<ExitCode> {
    let compiled = super::compile(&args.schema, registry)?;
    let signature = &compiled.signature;

    println!("{}", signature.function());
    for param in signature.params() {
        let marker = if param.is_required() { "" } else { "?" };
        match compiled.schemas.get(param.name()) {
            Some(schema) => println!("  {}{marker}: {schema}", param.name()),
            None => println!("  {}{marker}: unchecked", param.name()),
        }
    }
    Ok(ExitCode::SUCCESS)
}
