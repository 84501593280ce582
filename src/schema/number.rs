//! The number wrapper.

use crate::error::{ErrorKind, ValidationError};
use crate::schema::{Membership, validate};
use crate::value::Value;

/// Wrapper returned by a successful `number()` narrowing.
///
/// The numeric payload is captured at narrowing time, so the predicates
/// compare against a plain `f64`.
#[derive(Debug, Clone, Copy)]
pub struct NumberSchema<'a> {
    value: &'a Value,
    n: f64,
}

impl<'a> NumberSchema<'a> {
    pub(crate) const fn new(value: &'a Value, n: f64) -> Self {
        Self { value, n }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// Returns the wrapped number.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.n
    }

    /// Fails with kind `number.min` if the value is less than `limit`.
    ///
    /// The limit is itself validated as a number first; a NaN limit fails
    /// with that nested validation's error, re-thrown unchanged (kind
    /// `number`).
    pub fn min(self, limit: f64) -> Result<Self, ValidationError> {
        self.check_limit(limit)?;
        if self.n < limit {
            Err(self.fail(
                ErrorKind::NumberMin,
                format!("Value {} is less than the minimum {limit}", self.n),
            ))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `number.max` if the value is greater than `limit`.
    ///
    /// The limit is validated as a number first, like [`NumberSchema::min`].
    pub fn max(self, limit: f64) -> Result<Self, ValidationError> {
        self.check_limit(limit)?;
        if self.n > limit {
            Err(self.fail(
                ErrorKind::NumberMax,
                format!("Value {} is more than the maximum {limit}", self.n),
            ))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `number.positive` if the value is zero or below.
    pub fn positive(self) -> Result<Self, ValidationError> {
        if self.n <= 0.0 {
            Err(self.fail(ErrorKind::NumberPositive, "Value is not positive"))
        } else {
            Ok(self)
        }
    }

    /// Fails with kind `number.integer` unless the value is a finite
    /// mathematical integer.
    pub fn integer(self) -> Result<Self, ValidationError> {
        if self.n.is_finite() && self.n.fract() == 0.0 {
            Ok(self)
        } else {
            Err(self.fail(ErrorKind::NumberInteger, "Value is not an integer"))
        }
    }

    // Limit arguments go through the same entry factory as any caller value;
    // the nested error propagates unchanged.
    fn check_limit(&self, limit: f64) -> Result<(), ValidationError> {
        let limit = Value::from(limit);
        validate(&limit).number()?;
        Ok(())
    }

    fn fail(&self, kind: ErrorKind, message: impl Into<std::borrow::Cow<'static, str>>) -> ValidationError {
        ValidationError::new(kind, message, self.value.clone())
    }
}

impl<'a> Membership<'a> for NumberSchema<'a> {
    fn wrapped(&self) -> &'a Value {
        self.value
    }
}
