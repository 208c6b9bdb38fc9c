//! Tests for the Error type

use presence::{Error, Optional};

#[test]
fn test_error_display_invalid_construction() {
    let error = Error::InvalidConstruction {
        input: "core::option::Option<&str>",
    };
    assert_eq!(
        format!("{}", error),
        "cannot construct a present value from an absent `core::option::Option<&str>`; use `from_nullable` instead"
    );
}

#[test]
fn test_error_names_rejected_input_type() {
    let error = Optional::from_value(None::<u32>).unwrap_err();
    let Error::InvalidConstruction { input } = error;
    assert!(input.contains("Option"));
    assert!(input.contains("u32"));
}

#[test]
fn test_error_debug() {
    let error = Optional::from_value(None::<i8>).unwrap_err();
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidConstruction"));
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
}

#[test]
fn test_error_is_deterministic() {
    let first = Optional::from_value(None::<&str>).unwrap_err();
    let second = Optional::from_value(None::<&str>).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_result_type() {
    let ok_result: presence::Result<Optional<i32>> = Optional::from_value(42);
    assert_eq!(ok_result.unwrap(), Optional::of(42));

    let err_result: presence::Result<Optional<i32>> = Optional::from_value(None::<i32>);
    assert!(err_result.is_err());
}

#[test]
fn test_error_boxes_into_dyn_error() {
    fn build(raw: Option<&str>) -> Result<usize, Box<dyn std::error::Error>> {
        let value = Optional::from_value(raw)?;
        Ok(value.map(str::len).or_else_value(0))
    }

    assert_eq!(build(Some("abc")).unwrap(), 3);
    assert!(build(None).is_err());
}
