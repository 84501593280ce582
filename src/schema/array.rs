//! The array wrapper and the per-item validation dispatcher.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, ErrorKind, ValidationError};
use crate::registry;
use crate::value::Value;

// ============================================================================
// ITEM SPEC
// ============================================================================

/// How to validate each element of an array.
///
/// The two forms of the polymorphic `items` argument, as a closed enum:
/// anything else is rejected by the type system before any element is
/// inspected.
pub enum ItemSpec<'f> {
    /// A callback invoked once per element, in index order. Its error
    /// becomes the cause of the `items` failure.
    Callback(Box<dyn Fn(&Value) -> Result<(), ValidationError> + 'f>),
    /// Dot-separated predicate names, threaded through the wrapper types
    /// exactly as a caller would chain them, e.g. `"number.integer"`.
    Path(Cow<'f, str>),
}

impl<'f> ItemSpec<'f> {
    /// Wraps a per-element callback.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<(), ValidationError> + 'f,
    {
        ItemSpec::Callback(Box::new(f))
    }

    /// Wraps a predicate path.
    pub fn path(path: impl Into<Cow<'f, str>>) -> Self {
        ItemSpec::Path(path.into())
    }
}

impl<'f> From<&'f str> for ItemSpec<'f> {
    fn from(path: &'f str) -> Self {
        ItemSpec::Path(Cow::Borrowed(path))
    }
}

impl From<String> for ItemSpec<'_> {
    fn from(path: String) -> Self {
        ItemSpec::Path(Cow::Owned(path))
    }
}

impl fmt::Debug for ItemSpec<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSpec::Callback(_) => f.write_str("Callback(..)"),
            ItemSpec::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

// ============================================================================
// ARRAY SCHEMA
// ============================================================================

/// Wrapper returned by a successful `array()` narrowing.
#[derive(Debug, Clone, Copy)]
pub struct ArraySchema<'a> {
    value: &'a Value,
    items: &'a [Value],
}

impl<'a> ArraySchema<'a> {
    pub(crate) const fn new(value: &'a Value, items: &'a [Value]) -> Self {
        Self { value, items }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &'a Value {
        self.value
    }

    /// Returns the elements of the wrapped array.
    #[must_use]
    pub const fn elements(&self) -> &'a [Value] {
        self.items
    }

    /// Validates every element against `spec`, in index order, stopping at
    /// the first failure.
    ///
    /// A failing element produces an `items`-kind error wrapping the
    /// element's error as its cause; remaining elements are not inspected.
    /// An unknown predicate name in a path is a configuration error
    /// ([`Error::UnknownPredicate`]) and is propagated as-is instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluent_validator::prelude::*;
    ///
    /// # fn main() -> Result<(), fluent_validator::Error> {
    /// let value = Value::from(vec![1, 2, 3]);
    /// validate(&value).array()?.items("number.integer")?;
    /// validate(&value).array()?.items(ItemSpec::callback(|item| {
    ///     validate(item).number()?.positive()?;
    ///     Ok(())
    /// }))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn items<'f>(self, spec: impl Into<ItemSpec<'f>>) -> Result<Self, Error> {
        match spec.into() {
            ItemSpec::Callback(check) => {
                for (index, item) in self.items.iter().enumerate() {
                    check(item).map_err(|cause| self.item_error(index, cause))?;
                }
            }
            ItemSpec::Path(path) => {
                for (index, item) in self.items.iter().enumerate() {
                    match registry::run_path(item, &path) {
                        Ok(()) => {}
                        Err(Error::Validation(cause)) => {
                            return Err(self.item_error(index, cause).into());
                        }
                        Err(config) => return Err(config),
                    }
                }
            }
        }
        Ok(self)
    }

    fn item_error(&self, index: usize, cause: ValidationError) -> ValidationError {
        ValidationError::new(
            ErrorKind::Items,
            format!("Item at index {index} failed validation"),
            self.value.clone(),
        )
        .with_cause(cause)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::schema::validate;

    #[test]
    fn empty_arrays_pass_either_form() {
        let empty = Value::Array(Vec::new());
        assert!(validate(&empty).array().unwrap().items("number").is_ok());
        assert!(
            validate(&empty)
                .array()
                .unwrap()
                .items(ItemSpec::callback(|_| Err(ValidationError::new(
                    ErrorKind::Number,
                    "never called",
                    Value::Null,
                ))))
                .is_ok()
        );
    }

    #[test]
    fn callback_failure_is_wrapped_with_the_element_error_as_cause() {
        let value = Value::from(vec![1, -2, 3]);
        let error = validate(&value)
            .array()
            .unwrap()
            .items(ItemSpec::callback(|item| {
                validate(item).number()?.positive()?;
                Ok(())
            }))
            .unwrap_err();

        let Error::Validation(error) = error else {
            panic!("expected a validation error");
        };
        assert_eq!(error.kind, ErrorKind::Items);
        assert!(error.message.contains("index 1"));
        assert_eq!(
            error.cause.as_ref().map(|cause| cause.kind),
            Some(ErrorKind::NumberPositive)
        );
    }

    #[test]
    fn validation_stops_at_the_first_failing_element() {
        let value = Value::from(vec![1, -2, -3]);
        let inspected = Cell::new(0usize);

        let result = validate(&value)
            .array()
            .unwrap()
            .items(ItemSpec::callback(|item| {
                inspected.set(inspected.get() + 1);
                validate(item).number()?.positive()?;
                Ok(())
            }));

        assert!(result.is_err());
        assert_eq!(inspected.get(), 2);
    }

    #[test]
    fn item_spec_debug_does_not_expose_the_callback() {
        let spec = ItemSpec::callback(|_| Ok(()));
        assert_eq!(format!("{spec:?}"), "Callback(..)");
        assert_eq!(
            format!("{:?}", ItemSpec::from("number.integer")),
            "Path(\"number.integer\")"
        );
    }
}
