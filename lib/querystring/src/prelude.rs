//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use querystring::prelude::*;
//! ```

pub use crate::{
    Converter, DirectiveResolver, Encoder, Error, NameCase, Options, Record, Result, ToValue,
    Value, Values, convert_name, to_query_string, values, values_with,
};
