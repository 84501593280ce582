//! Dynamic value model and the runtime type inspector.
//!
//! Validation chains operate on [`Value`], a single enum covering every
//! runtime shape the library can classify: the JSON-like data variants plus
//! `Undefined` (an absent value) and `Function` (a callable). [`RawType`] is
//! the closed set of type tags; classification is by enum variant, never by
//! comparing type or constructor names, so hostile or exotic payloads cannot
//! be misclassified.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ValidationError;

/// A callable stored inside [`Value::Function`].
///
/// Reference-counted so function values stay cheap to clone and compare by
/// identity. Any callable classifies as `Function`, regardless of how it
/// schedules its work internally.
pub type NativeFn = Arc<dyn Fn(&Value) -> Result<Value, ValidationError> + Send + Sync>;

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed runtime value.
///
/// # Examples
///
/// ```
/// use fluent_validator::{RawType, Value};
///
/// assert_eq!(Value::from(5).raw_type(), RawType::Number);
/// assert_eq!(Value::from("hi").raw_type(), RawType::String);
/// assert_eq!(Value::Undefined.raw_type(), RawType::Undefined);
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// An absent value.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A number. NaN is representable and still classifies as `Number`.
    Number(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A key-value map with string keys.
    Object(BTreeMap<String, Value>),
    /// A callable value, compared by reference identity.
    Function(NativeFn),
}

impl Value {
    /// Wraps a callable as a function value.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, ValidationError> + Send + Sync + 'static,
    {
        Value::Function(Arc::new(f))
    }

    /// Returns the runtime type tag of this value.
    #[must_use]
    pub const fn raw_type(&self) -> RawType {
        match self {
            Value::Undefined => RawType::Undefined,
            Value::Null => RawType::Null,
            Value::Boolean(_) => RawType::Boolean,
            Value::Number(_) => RawType::Number,
            Value::String(_) => RawType::String,
            Value::Array(_) => RawType::Array,
            Value::Object(_) => RawType::Object,
            Value::Function(_) => RawType::Function,
        }
    }

    /// Returns the numeric payload, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element slice, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Converts to a [`serde_json::Value`].
    ///
    /// `Undefined` maps to JSON null, non-finite numbers map to null, and
    /// function values map to the string `"[function]"` since JSON has no
    /// callable type.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Function(_) => serde_json::Value::String("[function]".to_string()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(entries) => f.debug_tuple("Object").field(entries).finish(),
            Value::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(f, *n),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            }
            Value::Function(_) => f.write_str("[function]"),
        }
    }
}

// Integral f64 values print without the trailing ".0" that Rust's default
// float formatting omits anyway; NaN and infinities get their own tags.
fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

// Strict equality: no cross-variant coercion. Numbers follow IEEE semantics
// (NaN != NaN), functions compare by reference identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

// ============================================================================
// RAW TYPE
// ============================================================================

/// The closed set of runtime type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum RawType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl RawType {
    /// Returns the canonical tag string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RawType::Undefined => "Undefined",
            RawType::Null => "Null",
            RawType::Boolean => "Boolean",
            RawType::Number => "Number",
            RawType::String => "String",
            RawType::Array => "Array",
            RawType::Object => "Object",
            RawType::Function => "Function",
        }
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_lossless)]
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

/// `None` maps to `Undefined`, mirroring an absent value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
