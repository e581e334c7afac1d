//! End-to-end behaviour of wrapped functions.

use argcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::cell::Cell;

fn accepted(args: &Arguments, sig: &Signature) -> String {
    let shown: Vec<String> = sig
        .names()
        .filter_map(|name| args.lookup(sig, name))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    format!("Accepted: {}", shown.join(", "))
}

fn main_schemas() -> ParameterSchemaSet {
    ParameterSchemaSet::new()
        .with(
            "x",
            Schema::new()
                .of_type(ValueKind::Integer)
                .option(0..10)
                .unwrap(),
        )
        .with(
            "y",
            Schema::new()
                .of_type(ValueKind::String)
                .predicate(chromosome_name()),
        )
}

// ============================================================================
// PASS-THROUGH
// ============================================================================

#[test]
fn passes_through_on_success() {
    let sig = signature!(main(x, y)).unwrap();
    let plain = {
        let sig = sig.clone();
        move |args: Arguments| accepted(&args, &sig)
    };
    let wrapped = wrap(plain.clone(), sig, main_schemas()).unwrap();

    for args in [
        Arguments::new().arg(2).arg("chrX"),
        Arguments::new().arg(0).kwarg("y", "chr22"),
        Arguments::new().kwarg("y", "MT").kwarg("x", 9),
    ] {
        assert_eq!(wrapped.call(args.clone()).unwrap(), plain(args));
    }
    assert_eq!(
        wrapped.call(Arguments::new().arg(2).arg("chrX")).unwrap(),
        "Accepted: 2, chrX"
    );
}

// ============================================================================
// REJECTIONS
// ============================================================================

#[test]
fn type_rejection_never_invokes_target() {
    let invoked = Cell::new(0_u32);
    let wrapped = (|_: Arguments| invoked.set(invoked.get() + 1))
        .validated(signature!(main(x, y)).unwrap(), main_schemas())
        .unwrap();

    let err = wrapped
        .call(Arguments::new().arg("2").arg("chrX"))
        .unwrap_err();

    assert_eq!(
        err,
        CallError::Validation(ValidationError::TypeMismatch {
            field: Some("x".into()),
            expected: ValueKind::Integer,
            actual: ValueKind::String,
            value: json!("2"),
        })
    );
    assert_eq!(invoked.get(), 0);
}

#[test]
fn option_rejection() {
    let wrapped = wrap(
        |_: Arguments| (),
        signature!(main(x, y)).unwrap(),
        main_schemas(),
    )
    .unwrap();
    let err = wrapped
        .call(Arguments::new().arg(11).arg("1"))
        .unwrap_err();
    let err = err.as_validation().unwrap();
    assert_eq!(err.code(), "invalid_option");
    assert_eq!(err.field(), Some("x"));
    assert_eq!(err.value(), &json!(11));
    assert_eq!(err.to_string(), "[x] value `11` is not accepted by option `0..10`");
}

#[test]
fn predicate_rejection() {
    let wrapped = wrap(
        |_: Arguments| (),
        signature!(main(x, y)).unwrap(),
        main_schemas(),
    )
    .unwrap();
    let err = wrapped
        .call(Arguments::new().arg(2).arg("chr1_garbage"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "[y] value `chr1_garbage` is not accepted by validate function `chromosome_name`"
    );
    assert!(wrapped.call(Arguments::new().arg(2).arg("chrX")).is_ok());
}

#[test]
fn repeated_keyword_is_rejected_whichever_value_is_bad() {
    let invoked = Cell::new(0_u32);
    let wrapped = wrap(
        |_: Arguments| invoked.set(invoked.get() + 1),
        signature!(main(x, y)).unwrap(),
        main_schemas(),
    )
    .unwrap();

    let late_bad = Arguments::new().arg(2).kwarg("y", "chrX").kwarg("y", "chr1_garbage");
    let err = wrapped.call(late_bad).unwrap_err();
    assert_eq!(err.as_validation().and_then(ValidationError::field), Some("y"));

    let both_fine = Arguments::new().kwarg("x", 2).kwarg("y", "chrX").kwarg("x", 3);
    assert_eq!(
        wrapped.call(both_fine).unwrap_err(),
        CallError::Binding(BindError::DuplicateKeyword {
            function: "main".into(),
            name: "x".into(),
        })
    );
    assert_eq!(invoked.get(), 0);
}

#[test]
fn wrong_type_reported_before_option_failure() {
    // 2.5 is outside 0..10's members too, but the type check comes first.
    let wrapped = wrap(
        |_: Arguments| (),
        signature!(main(x, y)).unwrap(),
        main_schemas(),
    )
    .unwrap();
    let err = wrapped
        .call(Arguments::new().arg(2.5).arg("chrX"))
        .unwrap_err();
    assert_eq!(err.as_validation().map(ValidationError::code), Some("type_mismatch"));
}

#[test]
fn unregistered_parameter_passes_unchecked() {
    let wrapped = wrap(
        |args: Arguments| args.len(),
        signature!(pair(checked, free)).unwrap(),
        ParameterSchemaSet::new().with("checked", Schema::new().of_type(ValueKind::Bool)),
    )
    .unwrap();

    for free in [json!(null), json!(1), json!("anything"), json!({"k": [1, 2]})] {
        assert_eq!(
            wrapped.call(Arguments::new().arg(true).arg(free)).unwrap(),
            2
        );
    }
}

#[test]
fn unknown_schema_key_fails_construction() {
    let err = wrap(
        |_: Arguments| (),
        signature!(main(x, y)).unwrap(),
        ParameterSchemaSet::new().with("typo", Schema::new()),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "schema bound to `typo`, which is not a parameter of `main`"
    );
}

// ============================================================================
// REUSE
// ============================================================================

#[test]
fn repeated_calls_are_independent() {
    let count = Cell::new(0_u32);
    let wrapped = wrap(
        |_: Arguments| count.set(count.get() + 1),
        signature!(main(x, y)).unwrap(),
        main_schemas(),
    )
    .unwrap();

    assert!(wrapped.call(Arguments::new().arg(11).arg("chrX")).is_err());
    assert!(wrapped.call(Arguments::new().arg(1).arg("chrX")).is_ok());
    assert!(wrapped.call(Arguments::new().arg(2).arg(11)).is_err());
    assert!(wrapped.call(Arguments::new().arg(3).arg("chrY")).is_ok());
    assert_eq!(count.get(), 2);
}

#[test]
fn optional_parameter_may_be_omitted() {
    let sig = Signature::builder("greet")
        .required("name")
        .optional("times")
        .build()
        .unwrap();
    let wrapped = wrap(
        |args: Arguments| args.named().get("times").and_then(Value::as_u64).unwrap_or(1),
        sig,
        ParameterSchemaSet::new()
            .with("name", Schema::new().predicate(non_empty()))
            .with("times", Schema::new().of_type(ValueKind::Integer).predicate(positive())),
    )
    .unwrap();

    assert_eq!(wrapped.call(Arguments::new().arg("ada")).unwrap(), 1);
    assert_eq!(
        wrapped
            .call(Arguments::new().arg("ada").kwarg("times", 3))
            .unwrap(),
        3
    );
    assert!(wrapped.call(Arguments::new().arg("ada").kwarg("times", 0)).is_err());
    assert!(matches!(
        wrapped.call(Arguments::new()).unwrap_err(),
        CallError::Binding(BindError::MissingArgument { .. })
    ));
}
