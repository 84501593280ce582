//! The string wrapper.

use crate::error::{ErrorKind, ValidationError};
use crate::schema::{Membership, validate};
use crate::value::Value;

/// Wrapper returned by a successful `string()` narrowing.
#[derive(Debug, Clone, Copy)]
pub struct StringSchema<'a> {
    value: &'a Value,
    s: &'a str,
}

impl<'a> StringSchema<'a> {
    pub(crate) const fn new(value: &'a Value, s: &'a str) -> Self {
        Self { value, s }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// Returns the wrapped string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.s
    }

    /// Fails with kind `string.notEmpty` if the value is the empty string.
    pub fn not_empty(self) -> Result<Self, ValidationError> {
        if self.s.is_empty() {
            Err(ValidationError::new(
                ErrorKind::StringNotEmpty,
                "Value is an empty string",
                self.value.clone(),
            ))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `string.maxLength` if the string is longer than
    /// `limit`, measured in Unicode scalar values.
    ///
    /// The limit is itself validated as a number first; a NaN limit fails
    /// with that nested validation's error, re-thrown unchanged.
    pub fn max_length(self, limit: f64) -> Result<Self, ValidationError> {
        let limit_value = Value::from(limit);
        validate(&limit_value).number()?;

        let length = self.s.chars().count();
        if length as f64 > limit {
            Err(ValidationError::new(
                ErrorKind::StringMaxLength,
                format!("String length {length} exceeds the maximum {limit}"),
                self.value.clone(),
            ))
        } else {
            Ok(self)
        }
    }
}

impl<'a> Membership<'a> for StringSchema<'a> {
    fn wrapped(&self) -> &'a Value {
        self.value
    }
}
