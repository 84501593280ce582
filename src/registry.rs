//! Predicate registry for the path form of item validation.
//!
//! A path such as `"number.integer"` names a sequence of predicates. The
//! dispatcher re-enters the entry factory on an element and resolves each
//! segment against the wrapper type the previous segment produced, exactly
//! as a caller would chain the methods. The registry is the closed mapping
//! from segment name to predicate per wrapper type: only zero-argument
//! predicates are expressible in a path, and an unknown segment is a
//! configuration error, not a data failure.

use crate::error::Error;
use crate::schema::{ArraySchema, NumberSchema, Schema, SchemaType, StringSchema, validate};
use crate::value::Value;

/// The dispatch state while walking a path: which wrapper the chain is in.
enum AnySchema<'a> {
    Root(Schema<'a>),
    Number(NumberSchema<'a>),
    String(StringSchema<'a>),
    Array(ArraySchema<'a>),
}

impl<'a> AnySchema<'a> {
    const fn schema_type(&self) -> SchemaType {
        match self {
            AnySchema::Root(_) => SchemaType::Root,
            AnySchema::Number(_) => SchemaType::Number,
            AnySchema::String(_) => SchemaType::String,
            AnySchema::Array(_) => SchemaType::Array,
        }
    }

    /// Applies one path segment, transitioning wrapper type on the
    /// narrowing predicates.
    fn step(self, segment: &str, path: &str) -> Result<AnySchema<'a>, Error> {
        let schema_type = self.schema_type();
        match self {
            AnySchema::Root(schema) => match segment {
                "defined" => Ok(AnySchema::Root(schema.defined()?)),
                "undefined_value" => Ok(AnySchema::Root(schema.undefined_value()?)),
                "is_null" => Ok(AnySchema::Root(schema.is_null()?)),
                "not_null" => Ok(AnySchema::Root(schema.not_null()?)),
                "is_function" => Ok(AnySchema::Root(schema.is_function()?)),
                "boolean" => Ok(AnySchema::Root(schema.boolean()?)),
                "object" => Ok(AnySchema::Root(schema.object()?)),
                "number" => Ok(AnySchema::Number(schema.number()?)),
                "string" => Ok(AnySchema::String(schema.string()?)),
                "array" => Ok(AnySchema::Array(schema.array()?)),
                _ => Err(unknown(path, segment, schema_type)),
            },
            AnySchema::Number(schema) => match segment {
                "positive" => Ok(AnySchema::Number(schema.positive()?)),
                "integer" => Ok(AnySchema::Number(schema.integer()?)),
                _ => Err(unknown(path, segment, schema_type)),
            },
            AnySchema::String(schema) => match segment {
                "not_empty" => Ok(AnySchema::String(schema.not_empty()?)),
                _ => Err(unknown(path, segment, schema_type)),
            },
            // The array wrapper has no zero-argument predicates.
            AnySchema::Array(_) => Err(unknown(path, segment, schema_type)),
        }
    }
}

fn unknown(path: &str, segment: &str, schema: SchemaType) -> Error {
    Error::UnknownPredicate {
        path: path.to_string(),
        segment: segment.to_string(),
        schema,
    }
}

/// Runs a full predicate path against one value.
pub(crate) fn run_path(value: &Value, path: &str) -> Result<(), Error> {
    let mut state = AnySchema::Root(validate(value));
    for segment in path.split('.') {
        state = state.step(segment, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn paths_thread_through_narrowing() {
        let value = Value::from(4);
        assert!(run_path(&value, "number.integer.positive").is_ok());
        assert!(run_path(&value, "defined.not_null.number").is_ok());
    }

    #[test]
    fn data_failures_keep_their_kind() {
        let value = Value::from(2.5);
        let Err(Error::Validation(error)) = run_path(&value, "number.integer") else {
            panic!("expected a validation error");
        };
        assert_eq!(error.kind, ErrorKind::NumberInteger);
    }

    #[test]
    fn unknown_segments_are_configuration_errors() {
        let value = Value::from(5);
        let Err(Error::UnknownPredicate { segment, schema, .. }) =
            run_path(&value, "number.frobnicate")
        else {
            panic!("expected an unknown-predicate error");
        };
        assert_eq!(segment, "frobnicate");
        assert_eq!(schema, SchemaType::Number);
    }

    #[test]
    fn predicates_do_not_leak_across_wrapper_types() {
        // `not_empty` exists on strings only; reaching it through a number
        // wrapper is a configuration error, not a data failure.
        let value = Value::from(5);
        assert!(matches!(
            run_path(&value, "number.not_empty"),
            Err(Error::UnknownPredicate { .. })
        ));
    }

    #[test]
    fn argument_taking_predicates_are_not_addressable() {
        let value = Value::from(5);
        assert!(matches!(
            run_path(&value, "number.min"),
            Err(Error::UnknownPredicate { .. })
        ));
    }

    #[test]
    fn empty_segments_do_not_resolve() {
        let value = Value::from(5);
        assert!(matches!(
            run_path(&value, ""),
            Err(Error::UnknownPredicate { .. })
        ));
        assert!(matches!(
            run_path(&value, "number."),
            Err(Error::UnknownPredicate { .. })
        ));
    }
}
