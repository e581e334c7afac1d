use std::process::ExitCode;

use argcheck_validator::{Arguments, PredicateRegistry, Signature};

use crate::cli::CheckArgs;

pub fn run(args: &CheckArgs, registry: &PredicateRegistry) -> anyhow::Result<ExitCode> {
    let compiled = super::compile(&args.schema, registry)?;
    let signature = compiled.signature.clone();
    let call = compiled.wrap(move |bound: Arguments| accepted(&signature, &bound))?;

    let mut arguments = Arguments::new();
    for value in &args.args {
        arguments.push(value.clone());
    }
    for (name, value) in &args.kwargs {
        arguments.insert(name, value.clone());
    }

    match call.call(arguments) {
        Ok(line) => {
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = ?err, "call rejected");
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Bound values in declaration order; omitted optional parameters are skipped.
fn accepted(signature: &Signature, args: &Arguments) -> String {
    let values: Vec<String> = signature
        .names()
        .filter_map(|name| args.lookup(signature, name))
        .map(ToString::to_string)
        .collect();
    format!("Accepted: {}", values.join(", "))
}
