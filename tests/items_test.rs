//! Coverage for the array item dispatcher: both spec forms, path threading,
//! cause wrapping, and configuration errors.

use fluent_validator::prelude::*;
use pretty_assertions::assert_eq;

fn validation_error(error: Error) -> ValidationError {
    match error {
        Error::Validation(error) => error,
        Error::UnknownPredicate { .. } => panic!("expected a data failure, got {error}"),
    }
}

// ============================================================================
// PATH FORM
// ============================================================================

#[test]
fn path_form_accepts_all_integer_items() {
    let value = Value::from(vec![1, 2, 3]);
    assert!(
        validate(&value)
            .array()
            .unwrap()
            .items("number.integer")
            .is_ok()
    );
}

#[test]
fn path_form_wraps_the_first_failing_item() {
    let value = Value::from(vec![1.0, 2.5, 3.0]);
    let error = validation_error(
        validate(&value)
            .array()
            .unwrap()
            .items("number.integer")
            .unwrap_err(),
    );

    assert_eq!(error.kind, ErrorKind::Items);
    assert!(error.message.contains("index 1"));
    // The array itself is the offending value; the element failure is the
    // cause and keeps its own kind and value.
    assert_eq!(error.value, value);
    let cause = error.cause.as_deref().expect("items error carries a cause");
    assert_eq!(cause.kind, ErrorKind::NumberInteger);
    assert_eq!(cause.value, Value::from(2.5));
}

#[test]
fn path_form_threads_multiple_segments() {
    let value = Value::from(vec![2, 4, 8]);
    let schema = validate(&value).array().unwrap();
    assert!(schema.items("number.integer.positive").is_ok());
    assert!(schema.items("defined.not_null.number").is_ok());
}

#[test]
fn path_form_supports_string_predicates() {
    let value = Value::from(vec!["a", "b"]);
    assert!(
        validate(&value)
            .array()
            .unwrap()
            .items("string.not_empty")
            .is_ok()
    );

    let with_empty = Value::from(vec!["a", ""]);
    let error = validation_error(
        validate(&with_empty)
            .array()
            .unwrap()
            .items("string.not_empty")
            .unwrap_err(),
    );
    assert_eq!(
        error.cause.as_ref().map(|cause| cause.kind),
        Some(ErrorKind::StringNotEmpty)
    );
}

#[test]
fn mixed_arrays_fail_on_the_first_mismatched_type() {
    let value = Value::from(vec![Value::from(1), Value::from("two")]);
    let error = validation_error(
        validate(&value)
            .array()
            .unwrap()
            .items("number")
            .unwrap_err(),
    );
    assert_eq!(error.kind, ErrorKind::Items);
    assert_eq!(
        error.cause.as_ref().map(|cause| cause.kind),
        Some(ErrorKind::Number)
    );
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

#[test]
fn unknown_predicate_names_are_not_data_failures() {
    let value = Value::from(vec![1, 2]);
    let error = validate(&value)
        .array()
        .unwrap()
        .items("number.wibble")
        .unwrap_err();

    let Error::UnknownPredicate {
        path,
        segment,
        schema,
    } = error
    else {
        panic!("expected an unknown-predicate error");
    };
    assert_eq!(path, "number.wibble");
    assert_eq!(segment, "wibble");
    assert_eq!(schema, SchemaType::Number);
}

#[test]
fn a_number_only_predicate_is_unknown_on_the_root() {
    let value = Value::from(vec![1]);
    assert!(matches!(
        validate(&value).array().unwrap().items("integer"),
        Err(Error::UnknownPredicate {
            schema: SchemaType::Root,
            ..
        })
    ));
}

#[test]
fn nested_array_paths_reach_the_array_wrapper() {
    // Elements that are themselves arrays can be narrowed, but the array
    // wrapper exposes no zero-argument predicates beyond that point.
    let value = Value::from(vec![Value::from(vec![1]), Value::from(vec![2])]);
    assert!(validate(&value).array().unwrap().items("array").is_ok());
    assert!(matches!(
        validate(&value).array().unwrap().items("array.items"),
        Err(Error::UnknownPredicate {
            schema: SchemaType::Array,
            ..
        })
    ));
}

// ============================================================================
// CALLBACK FORM
// ============================================================================

#[test]
fn callback_form_passes_when_every_item_passes() {
    let value = Value::from(vec![1, 2, 3]);
    let result = validate(&value)
        .array()
        .unwrap()
        .items(ItemSpec::callback(|item| {
            validate(item).number()?;
            Ok(())
        }));
    assert!(result.is_ok());
}

#[test]
fn callback_errors_become_the_cause() {
    let value = Value::from(vec![1, -2, 3]);
    let error = validation_error(
        validate(&value)
            .array()
            .unwrap()
            .items(ItemSpec::callback(|item| {
                validate(item).number()?.positive()?;
                Ok(())
            }))
            .unwrap_err(),
    );

    assert_eq!(error.kind, ErrorKind::Items);
    assert!(error.message.contains("index 1"));
    assert_eq!(
        error.cause.as_ref().map(|cause| cause.kind),
        Some(ErrorKind::NumberPositive)
    );
}

#[test]
fn callback_can_carry_custom_rules() {
    let value = Value::from(vec![1, -2, 3]);
    let error = validation_error(
        validate(&value)
            .array()
            .unwrap()
            .items(ItemSpec::callback(|item| {
                match item.as_number() {
                    Some(n) if n < 0.0 => Err(ValidationError::new(
                        ErrorKind::NumberPositive,
                        "negative item",
                        item.clone(),
                    )),
                    _ => Ok(()),
                }
            }))
            .unwrap_err(),
    );
    assert_eq!(error.kind, ErrorKind::Items);
    assert_eq!(
        error.cause.as_ref().map(|cause| &*cause.message),
        Some("negative item")
    );
}

#[test]
fn item_spec_conversions_cover_owned_paths() {
    let value = Value::from(vec![1, 2]);
    let path = String::from("number.integer");
    assert!(validate(&value).array().unwrap().items(path).is_ok());
    assert!(
        validate(&value)
            .array()
            .unwrap()
            .items(ItemSpec::path("number"))
            .is_ok()
    );
}
