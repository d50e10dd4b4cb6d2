//! Procedural macros for the querystring record encoder.
//!
//! This crate provides `#[derive(Record)]`, which generates the field
//! descriptors and value accessors the encoder walks at runtime.
//!
//! # Example
//!
//! ```ignore
//! use querystring::Record;
//!
//! #[derive(Record)]
//! pub struct Search {
//!     #[record(url = "q")]
//!     pub query: String,
//!     #[record(url = "page,omitempty")]
//!     pub page: u32,
//! }
//!
//! let values = querystring::values(&Search { query: "rust".into(), page: 0 })?;
//! assert_eq!(values.to_query_string(), "q=rust");
//! ```

mod record_derive;

use proc_macro::TokenStream;

/// Derive the `Record` trait (and `ToValue`) for a struct.
///
/// Only structs with named fields are supported. `pub` fields are exported;
/// fields with any other visibility are skipped by the encoder unless they
/// are embedded.
///
/// # Field Attributes
///
/// - `#[record(url = "name,omitempty")]` - Directive for the `url` namespace.
///   Any identifier can be used as a namespace (`form = "..."`, ...); the
///   encoder reads the one it is configured with.
/// - `#[record(embed)]` - Splice the fields of this (record) field into the
///   parent, as if they were declared there.
///
/// # Example
///
/// ```ignore
/// use querystring::Record;
///
/// #[derive(Record)]
/// pub struct Page {
///     #[record(url = "page,omitempty")]
///     pub number: u32,
/// }
///
/// #[derive(Record)]
/// pub struct Search {
///     pub query: String,           // default name: "query"
///     #[record(url = "-")]
///     pub debug: bool,             // never encoded
///     #[record(embed)]
///     pub page: Page,              // adds "page"
///     secret: String,              // not exported, never encoded
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record_derive::expand_record_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
