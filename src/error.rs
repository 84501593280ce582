//! Error types for validation failures.
//!
//! Every predicate fails with a [`ValidationError`]: the dotted failure kind,
//! a human-readable message, an owned copy of the offending value, and an
//! optional wrapped cause when the failure happened inside a nested
//! validation (array items, a predicate's own argument). [`Error`] is the
//! top-level enum that also covers configuration mistakes, which are not data
//! failures and carry no kind from the taxonomy.

use std::borrow::Cow;
use std::fmt;

use serde_json::json;

use crate::schema::SchemaType;
use crate::value::Value;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The closed taxonomy of failure kinds, one per predicate.
///
/// [`ErrorKind::as_str`] returns the dotted path callers branch on, e.g.
/// `number.min` or `string.notEmpty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// `defined()` failed: the value is undefined.
    Undefined,
    /// `undefined_value()` failed: the value is defined.
    Defined,
    /// `is_null()` failed.
    Null,
    /// `not_null()` failed.
    NotNull,
    /// `is_function()` failed.
    Function,
    /// `number()` failed: not a number, or NaN.
    Number,
    /// `min()` failed.
    NumberMin,
    /// `max()` failed.
    NumberMax,
    /// `positive()` failed.
    NumberPositive,
    /// `integer()` failed.
    NumberInteger,
    /// `string()` failed.
    String,
    /// `not_empty()` failed.
    StringNotEmpty,
    /// `max_length()` failed.
    StringMaxLength,
    /// `boolean()` failed.
    Boolean,
    /// `object()` failed.
    Object,
    /// `array()` failed.
    Array,
    /// `items()` failed on an element; the element's error is the cause.
    Items,
    /// `values()` failed: the value is not among the allowed set.
    Values,
}

impl ErrorKind {
    /// Returns the dotted kind path.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Undefined => "undefined",
            ErrorKind::Defined => "defined",
            ErrorKind::Null => "null",
            ErrorKind::NotNull => "notNull",
            ErrorKind::Function => "function",
            ErrorKind::Number => "number",
            ErrorKind::NumberMin => "number.min",
            ErrorKind::NumberMax => "number.max",
            ErrorKind::NumberPositive => "number.positive",
            ErrorKind::NumberInteger => "number.integer",
            ErrorKind::String => "string",
            ErrorKind::StringNotEmpty => "string.notEmpty",
            ErrorKind::StringMaxLength => "string.maxLength",
            ErrorKind::Boolean => "boolean",
            ErrorKind::Object => "object",
            ErrorKind::Array => "array",
            ErrorKind::Items => "items",
            ErrorKind::Values => "values",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for ErrorKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// Uses `Cow<'static, str>` for the message so the common case of a static
/// message allocates nothing.
///
/// # Examples
///
/// ```
/// use fluent_validator::{ErrorKind, Value, validate};
///
/// let value = Value::from(-1);
/// let error = validate(&value)
///     .number()
///     .and_then(|n| n.positive())
///     .unwrap_err();
/// assert_eq!(error.kind, ErrorKind::NumberPositive);
/// assert_eq!(error.kind.as_str(), "number.positive");
/// assert_eq!(error.value, value);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Which predicate failed.
    pub kind: ErrorKind,
    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,
    /// The value that failed, cloned out of the chain.
    pub value: Value,
    /// The nested failure this one wraps, if any.
    pub cause: Option<Box<ValidationError>>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            kind,
            message: message.into(),
            value,
            cause: None,
        }
    }

    /// Attaches the nested error this failure wraps.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: ValidationError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the innermost error of the cause chain.
    #[must_use]
    pub fn root_cause(&self) -> &ValidationError {
        let mut current = self;
        while let Some(cause) = &current.cause {
            current = cause;
        }
        current
    }

    /// Converts the error to a JSON structure for export.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        json!({
            "kind": self.kind.as_str(),
            "message": self.message,
            "value": self.value.to_json(),
            "cause": self.cause.as_ref().map(|cause| cause.to_json_value()),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (value: {})", self.kind, self.message, self.value)?;
        if let Some(cause) = &self.cause {
            write!(f, "\n  caused by: {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl serde::Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json_value().serialize(serializer)
    }
}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Any failure a chain can surface.
///
/// Data failures carry a [`ValidationError`]; configuration failures (an item
/// path naming a predicate that does not exist) are a separate variant so
/// callers can tell a broken path apart from bad data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A predicate rejected the value under validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An item path referenced a predicate unknown to the wrapper type the
    /// path had reached at that segment.
    #[error("unknown predicate `{segment}` for {schema} schema in item path `{path}`")]
    UnknownPredicate {
        /// The full path as passed to `items`.
        path: String,
        /// The segment that failed to resolve.
        segment: String,
        /// The wrapper type the path had narrowed to.
        schema: SchemaType,
    },
}

impl Error {
    /// Returns the validation error, if this is a data failure.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(error) => Some(error),
            Error::UnknownPredicate { .. } => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
