//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for easy glob importing:
//!
//! ```ignore
//! use querystring_core::prelude::*;
//! ```

pub use crate::{
    BoxError, Encoder, Error, FieldDescriptor, NameCase, Record, Result, ToValue, Value, Values,
};
