//! The shared membership predicate.
//!
//! `values` is one capability exposed identically by the root, number, and
//! string wrappers, so it lives in a trait with a provided method instead of
//! being copied onto each wrapper. The implementing wrapper only supplies
//! access to its value; the result type stays `Self`, so narrowing is
//! preserved across the call.

use crate::error::{ErrorKind, ValidationError};
use crate::value::Value;

/// Membership check against an allowed set, shared across wrapper types.
pub trait Membership<'a>: Sized {
    /// Returns the value under validation.
    fn wrapped(&self) -> &'a Value;

    /// Fails with kind `values` unless the wrapped value strictly equals at
    /// least one of `allowed`.
    ///
    /// Equality is strict: no coercion across types, and NaN never matches
    /// anything, including itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_validator::prelude::*;
    ///
    /// let value = Value::from(5);
    /// assert!(validate(&value).values([1, 2, 5]).is_ok());
    /// assert!(validate(&value).values([1, 2]).is_err());
    /// ```
    fn values<I>(self, allowed: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        if allowed.iter().any(|candidate| candidate == self.wrapped()) {
            Ok(self)
        } else {
            let value = self.wrapped().clone();
            Err(ValidationError::new(
                ErrorKind::Values,
                format!(
                    "Value {value} is not one of the {} allowed values",
                    allowed.len()
                ),
                value,
            ))
        }
    }
}
