//! Prelude module for convenient imports.
//!
//! A single `use fluent_validator::prelude::*;` brings in the entry factory,
//! every wrapper type, the shared membership trait, and the error types.
//!
//! # Examples
//!
//! ```
//! use fluent_validator::prelude::*;
//!
//! # fn main() -> Result<(), fluent_validator::Error> {
//! let value = Value::from("hello");
//! validate(&value).string()?.not_empty()?.max_length(20.0)?;
//! # Ok(())
//! # }
//! ```

pub use crate::error::{Error, ErrorKind, ValidationError};
pub use crate::schema::{
    ArraySchema, ItemSpec, Membership, NumberSchema, Schema, SchemaType, StringSchema, validate,
};
pub use crate::value::{NativeFn, RawType, Value};
