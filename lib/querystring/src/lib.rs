//! Encode maps and structs into URL query / form values.
//!
//! Derive [`Record`] on a struct, then turn it into ordered, multi-valued
//! [`Values`] ready to be sent as a query string or a form body.
//!
//! # Example
//!
//! ```
//! use querystring::Record;
//!
//! #[derive(Record)]
//! pub struct Search {
//!     #[record(url = "q")]
//!     pub query: String,
//!     #[record(url = "page,omitempty")]
//!     pub page: u32,
//!     pub tags: Vec<String>,
//! }
//!
//! let search = Search {
//!     query: "rust".to_string(),
//!     page: 0,
//!     tags: vec!["web".to_string(), "http".to_string()],
//! };
//!
//! let values = querystring::values(&search).expect("encode");
//! assert_eq!(values.to_query_string(), "q=rust&tags=web&tags=http");
//! ```
//!
//! # Field directives
//!
//! A directive is written `#[record(url = "name,option,...")]`:
//! - the name is the key of the field (empty: derived from the field name
//!   with the configured [`NameCase`], `snake_case` by default),
//! - `omitempty` drops the field when its value is empty,
//! - `"-"` skips the field entirely.
//!
//! Only `pub` fields are encoded; `#[record(embed)]` splices the fields of a
//! nested record into its parent. See [`Options`] to change the directive
//! namespace, the skip value or the naming strategy.

// Lets `#[derive(Record)]` refer to `::querystring` inside this crate.
extern crate self as querystring;

mod config;
mod converter;
pub mod prelude;
mod resolver;

pub use config::{DEFAULT_DIRECTIVE_KEY, DEFAULT_SKIP_SENTINEL, Options, OptionsBuilder};
pub use converter::Converter;
pub use resolver::{DirectiveResolver, TagResolver};

// Re-export core types
pub use querystring_core::{
    BoxError, Directive, Encoder, Error, FieldDescriptor, NameCase, Record, Result, TagOptions,
    ToValue, Value, Values, convert_name, format_timestamp, parse_directive, to_camel_case,
    to_pascal_case, to_snake_case,
};

// Re-export crates for downstream use
pub use url;

// Re-export macros
pub use querystring_macro::Record;

/// Encode `input` into values with the default [`Options`].
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// let input = HashMap::from([("hello", "world")]);
/// let values = querystring::values(&input).expect("encode");
/// assert_eq!(values.get("hello"), Some("world"));
/// ```
pub fn values<T: ToValue + ?Sized>(input: &T) -> Result<Values> {
    Converter::<TagResolver>::default().encode(input)
}

/// Encode `input` into values with custom [`Options`].
pub fn values_with<T: ToValue + ?Sized>(input: &T, options: &Options) -> Result<Values> {
    Converter::with_options(options).encode(input)
}

/// Encode `input` and serialize it as an `application/x-www-form-urlencoded`
/// string.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let input = BTreeMap::from([("q", "hello world")]);
/// assert_eq!(querystring::to_query_string(&input).expect("encode"), "q=hello+world");
/// ```
pub fn to_query_string<T: ToValue + ?Sized>(input: &T) -> Result<String> {
    values(input).map(|values| values.to_query_string())
}
