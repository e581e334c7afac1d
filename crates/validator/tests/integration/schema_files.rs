//! Schema files compiled and used to wrap functions.

use argcheck_validator::prelude::*;
use argcheck_validator::{LoadError, SchemaFile};
use rstest::rstest;
use serde_json::{Value, json};

const MAIN_TOML: &str = r#"
function = "main"

[[params]]
name = "x"
type = "int"
range = { start = 0, end = 10 }

[[params]]
name = "y"
type = "str"
predicate = "chromosome_name"
"#;

fn main_call() -> ValidatedCall<impl Fn(Arguments) -> usize> {
    SchemaFile::from_toml_str(MAIN_TOML)
        .unwrap()
        .compile(&PredicateRegistry::with_builtins())
        .unwrap()
        .wrap(|args: Arguments| args.len())
        .unwrap()
}

#[rstest]
#[case(json!(2), json!("chrX"), None)]
#[case(json!(11), json!("1"), Some("invalid_option"))]
#[case(json!(2), json!(11), Some("type_mismatch"))]
#[case(json!(2), json!("chr1_dafwfif"), Some("invalid_option"))]
fn file_schema_matches_builder_schema(
    #[case] x: Value,
    #[case] y: Value,
    #[case] expected_code: Option<&str>,
) {
    let result = main_call().call(Arguments::new().arg(x).arg(y));
    let code = result
        .err()
        .and_then(|err| err.as_validation().map(ValidationError::code));
    assert_eq!(code, expected_code);
}

#[test]
fn loads_toml_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("main.toml");
    std::fs::write(&path, MAIN_TOML).unwrap();

    let file = SchemaFile::load(&path).unwrap();
    assert_eq!(file.function, "main");
    assert_eq!(file.params.len(), 2);
}

#[test]
fn custom_registry_predicates_are_resolved() {
    let mut registry = PredicateRegistry::new();
    registry
        .register(Predicate::for_str("dna", |s| {
            s.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
        }))
        .unwrap();

    let compiled = SchemaFile::from_json_str(
        r#"{"function": "align", "params": [{"name": "seq", "type": "string", "predicate": "dna"}]}"#,
    )
    .unwrap()
    .compile(&registry)
    .unwrap();
    let call = compiled.wrap(|_: Arguments| ()).unwrap();

    assert!(call.call(Arguments::new().arg("ACGT")).is_ok());
    assert!(call.call(Arguments::new().arg("ACGU")).is_err());
}

#[test]
fn builtin_predicate_missing_from_empty_registry() {
    let err = SchemaFile::from_toml_str(MAIN_TOML)
        .unwrap()
        .compile(&PredicateRegistry::new())
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidParameter {
            source: ConstructionError::UnknownPredicate(_),
            ..
        }
    ));
}
