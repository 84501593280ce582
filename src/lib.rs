//! # fluent-validator
//!
//! Fail-fast validation chains for dynamic values.
//!
//! Wrap a [`Value`] with [`validate`] and chain predicate calls. Each
//! predicate either returns a wrapper (the narrowing predicates `number`,
//! `string`, and `array` return a specialized one) or fails with a structured
//! [`ValidationError`] carrying a dotted failure kind, the offending value,
//! and any nested cause. With `?`, the chain aborts at the first violation —
//! there is no multi-error accumulation.
//!
//! ## Quick Start
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! # fn main() -> Result<(), fluent_validator::Error> {
//! let age = Value::from(34);
//! validate(&age).number()?.integer()?.min(18.0)?;
//!
//! let name = Value::from("ada");
//! validate(&name).string()?.not_empty()?.max_length(64.0)?;
//!
//! let scores = Value::from(vec![70, 85, 92]);
//! validate(&scores).array()?.items("number.positive")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Branching on failures
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! let value = Value::from(-3);
//! let error = validate(&value)
//!     .number()
//!     .and_then(|n| n.positive())
//!     .unwrap_err();
//! assert_eq!(error.kind, ErrorKind::NumberPositive);
//! assert_eq!(error.kind.as_str(), "number.positive");
//! ```
//!
//! ## Validating array items
//!
//! [`ArraySchema::items`] accepts either a callback or a dotted predicate
//! path. The path form re-enters the entry factory on every element and
//! threads the chain through the wrapper types segment by segment; unknown
//! segment names are configuration errors
//! ([`Error::UnknownPredicate`](crate::Error::UnknownPredicate)), kept
//! distinct from data failures.

// ValidationError owns a clone of the offending value and is the return
// currency of every predicate — boxing it would add indirection to every
// validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod error;
pub mod prelude;
mod registry;
pub mod schema;
pub mod value;

pub use error::{Error, ErrorKind, ValidationError};
pub use schema::{
    ArraySchema, ItemSpec, Membership, NumberSchema, Schema, SchemaType, StringSchema, validate,
};
pub use value::{NativeFn, RawType, Value};
