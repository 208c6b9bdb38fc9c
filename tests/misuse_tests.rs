//! The classic optional misuses and the shapes that replace them.
//!
//! Shapes that must not compile (unchecked `get`, check-then-get, hand-built
//! nesting, serializing an optional field) are covered by `compile_fail`
//! doctests on `Optional`.

use std::cell::Cell;

use presence::{Error, Optional, Presence, Profile};

// ==================== Field storage ====================

#[test]
fn test_aggregate_stores_plain_value() {
    let profile = Profile::named("Avoid");
    assert_eq!(profile.name().or_else_value("unknown"), "Avoid");

    let profile = Profile::anonymous();
    assert_eq!(profile.name().or_else_value("unknown"), "unknown");
}

// ==================== Parameters ====================

#[test]
fn test_caller_decides_before_calling() {
    let rendered = Optional::of("Avoid")
        .map(Profile::describe_name)
        .or_else_compute(Profile::describe_missing_name);
    assert_eq!(rendered, "Avoid");

    let rendered = Optional::<&str>::empty()
        .map(Profile::describe_name)
        .or_else_compute(Profile::describe_missing_name);
    assert_eq!(rendered, "Name is absent");
}

// ==================== Unchecked extraction ====================

#[test]
fn test_extraction_requires_narrowing() {
    let value = Optional::of("Avoid");
    let extracted = match value.into_presence() {
        Presence::Present(v) => v,
        Presence::Absent => "fallback",
    };
    assert_eq!(extracted, "Avoid");
}

// ==================== Present from absent ====================

#[test]
fn test_present_from_absent_is_an_error() {
    let error = Optional::from_value(None::<&str>).unwrap_err();
    assert!(matches!(error, Error::InvalidConstruction { .. }));

    // recovering is a switch to the nullable path
    let recovered = Optional::from_nullable(None::<&str>);
    assert!(recovered.is_absent());
}

// ==================== Nesting ====================

#[test]
fn test_nested_input_is_single_level() {
    let nested = Optional::from_nullable(Some(Optional::of("Nested ref")));
    let mut printed = Vec::new();
    nested.if_present(|v| printed.push(v));
    assert_eq!(printed, ["Nested ref"]);
}

// ==================== Eager defaults ====================

#[test]
fn test_computed_default_goes_through_thunk() {
    let computed = Cell::new(0);
    let expensive = || {
        computed.set(computed.get() + 1);
        "Name".to_owned()
    };

    let name = Optional::of("Avoid".to_owned()).or_else_compute(expensive);
    assert_eq!(name, "Avoid");
    assert_eq!(computed.get(), 0);

    let name = Optional::<String>::empty().or_else_compute(expensive);
    assert_eq!(name, "Name");
    assert_eq!(computed.get(), 1);
}

#[test]
fn test_eager_default_is_evaluated_by_caller() {
    let computed = Cell::new(0);
    let expensive = || {
        computed.set(computed.get() + 1);
        "Name"
    };

    // the argument is evaluated even though it is discarded
    let name = Optional::of("Avoid").or_else_value(expensive());
    assert_eq!(name, "Avoid");
    assert_eq!(computed.get(), 1);

    let name = Optional::<&str>::empty().or_else_value(expensive());
    assert_eq!(name, "Name");
    assert_eq!(computed.get(), 2);
}

// ==================== Check then get ====================

#[test]
fn test_observe_without_check_then_get() {
    let mut printed = Vec::new();
    Optional::of("Avoid").if_present(|v| printed.push(v));
    Optional::<&str>::empty().if_present(|v| printed.push(v));
    assert_eq!(printed, ["Avoid"]);
}
