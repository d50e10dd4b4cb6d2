//! Core types and traits for the querystring record encoder.
//!
//! This crate provides the foundational types used by querystring:
//! - [`Values`] - Ordered multi-valued output collection
//! - [`Value`] and [`ToValue`] - Dynamic view of a value
//! - [`Record`] and [`FieldDescriptor`] - Structured records and their fields
//! - [`Encoder`] - Custom encoding capability
//! - [`Directive`], [`TagOptions`] and [`parse_directive`] - Field directives
//! - [`NameCase`] and [`convert_name`] - Name case conversion
//! - [`Error`] and [`Result`] - Error handling

mod case;
mod directive;
mod error;
pub mod prelude;
mod record;
mod value;
mod values;

pub use case::{NameCase, convert_name, to_camel_case, to_pascal_case, to_snake_case};
pub use directive::{Directive, TagOptions, parse_directive};
pub use error::{BoxError, Error, Result};
pub use record::{Encoder, FieldDescriptor, Record};
pub use value::{ToValue, Value, format_timestamp};
pub use values::Values;
