//! Schema wrappers and the entry factory.
//!
//! [`validate`] wraps a value in the root [`Schema`]. Universal predicates
//! return the root wrapper unchanged; the three narrowing predicates
//! (`number`, `string`, `array`) hand back a specialized wrapper exposing the
//! predicates valid for that type and nothing else. Every predicate either
//! succeeds with a wrapper or fails with a [`ValidationError`], so a chain
//! written with `?` aborts at the first violation.

mod array;
mod member;
mod number;
mod string;

use std::fmt;

pub use array::{ArraySchema, ItemSpec};
pub use member::Membership;
pub use number::NumberSchema;
pub use string::StringSchema;

use crate::error::{ErrorKind, ValidationError};
use crate::value::{RawType, Value};

// ============================================================================
// ENTRY FACTORY
// ============================================================================

/// Wraps a value in a root schema. Never fails by itself; only the chained
/// predicates can.
///
/// # Examples
///
/// ```
/// use fluent_validator::prelude::*;
///
/// # fn main() -> Result<(), fluent_validator::Error> {
/// let value = Value::from(5);
/// validate(&value).number()?.min(3.0)?.positive()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub const fn validate(value: &Value) -> Schema<'_> {
    Schema { value }
}

// ============================================================================
// SCHEMA TYPE
// ============================================================================

/// The closed set of wrapper variants a chain can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaType {
    /// The root wrapper returned by [`validate`].
    Root,
    /// The wrapper returned by a successful `number()`.
    Number,
    /// The wrapper returned by a successful `string()`.
    String,
    /// The wrapper returned by a successful `array()`.
    Array,
}

impl SchemaType {
    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemaType::Root => "root",
            SchemaType::Number => "number",
            SchemaType::String => "string",
            SchemaType::Array => "array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ROOT SCHEMA
// ============================================================================

/// The root wrapper around one value under validation.
///
/// Wrappers are `Copy`: they hold a single shared reference and never mutate
/// or retain the value beyond the chain expression.
#[derive(Debug, Clone, Copy)]
pub struct Schema<'a> {
    value: &'a Value,
}

impl<'a> Schema<'a> {
    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// Fails with kind `undefined` if the value is undefined.
    pub fn defined(self) -> Result<Self, ValidationError> {
        if self.value.raw_type() == RawType::Undefined {
            Err(self.fail(ErrorKind::Undefined, "Value is undefined"))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `defined` unless the value is undefined.
    pub fn undefined_value(self) -> Result<Self, ValidationError> {
        if self.value.raw_type() == RawType::Undefined {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::Defined, "Value is defined"))
        }
    }

    /// Fails with kind `null` unless the value is exactly null.
    pub fn is_null(self) -> Result<Self, ValidationError> {
        if matches!(self.value, Value::Null) {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::Null, "Value is not null"))
        }
    }

    /// Fails with kind `notNull` if the value is exactly null.
    pub fn not_null(self) -> Result<Self, ValidationError> {
        if matches!(self.value, Value::Null) {
            Err(self.fail(ErrorKind::NotNull, "Value is null"))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `function` unless the value is callable.
    pub fn is_function(self) -> Result<Self, ValidationError> {
        if self.value.raw_type() == RawType::Function {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::Function, "Value is not a function"))
        }
    }

    /// Fails with kind `boolean` unless the value is exactly true or false.
    pub fn boolean(self) -> Result<Self, ValidationError> {
        if matches!(self.value, Value::Boolean(_)) {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::Boolean, "Value is not a boolean"))
        }
    }

    /// Fails with kind `object` unless the value is a plain object.
    pub fn object(self) -> Result<Self, ValidationError> {
        if self.value.raw_type() == RawType::Object {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::Object, "Value is not an object"))
        }
    }

    /// Narrows to a [`NumberSchema`].
    ///
    /// Fails with kind `number` unless the value is a number; NaN is a
    /// `Number` by raw type but is still rejected here.
    pub fn number(self) -> Result<NumberSchema<'a>, ValidationError> {
        match self.value {
            Value::Number(n) if !n.is_nan() => Ok(NumberSchema::new(self.value, *n)),
            _ => Err(self.fail(ErrorKind::Number, "Value is not a number")),
        }
    }

    /// Narrows to a [`StringSchema`]. Fails with kind `string` otherwise.
    pub fn string(self) -> Result<StringSchema<'a>, ValidationError> {
        match self.value {
            Value::String(s) => Ok(StringSchema::new(self.value, s)),
            _ => Err(self.fail(ErrorKind::String, "Value is not a string")),
        }
    }

    /// Narrows to an [`ArraySchema`]. Fails with kind `array` otherwise.
    pub fn array(self) -> Result<ArraySchema<'a>, ValidationError> {
        match self.value {
            Value::Array(items) => Ok(ArraySchema::new(self.value, items)),
            _ => Err(self.fail(ErrorKind::Array, "Value is not an array")),
        }
    }

    fn fail(&self, kind: ErrorKind, message: &'static str) -> ValidationError {
        ValidationError::new(kind, message, self.value.clone())
    }
}

impl<'a> Membership<'a> for Schema<'a> {
    fn wrapped(&self) -> &'a Value {
        self.value
    }
}

// ============================================================================
// TESTS
// ============================================================================
