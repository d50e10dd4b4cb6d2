//! Field descriptors and the record / encoder traits.

use crate::Value;
use crate::error::BoxError;

/// Static description of one field of a record.
///
/// Generated once per type by `#[derive(Record)]`; can also be written by
/// hand for types that cannot use the derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field name as declared.
    pub name: &'static str,
    /// The Rust type name (e.g. `"Option<String>"`).
    pub type_name: &'static str,
    /// Raw directive strings, keyed by namespace (e.g. `("url", "q,omitempty")`).
    pub tags: &'static [(&'static str, &'static str)],
    /// Whether the field is publicly accessible.
    pub exported: bool,
    /// Whether the field's own fields are spliced into the parent record.
    pub embedded: bool,
}

impl FieldDescriptor {
    /// Get the raw directive stored under `namespace`.
    ///
    /// ```
    /// use querystring_core::FieldDescriptor;
    ///
    /// let field = FieldDescriptor {
    ///     name: "query",
    ///     type_name: "String",
    ///     tags: &[("url", "q,omitempty"), ("form", "query")],
    ///     exported: true,
    ///     embedded: false,
    /// };
    /// assert_eq!(field.tag("url"), Some("q,omitempty"));
    /// assert_eq!(field.tag("json"), None);
    /// ```
    #[must_use]
    pub fn tag(&self, namespace: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(key, _)| *key == namespace)
            .map(|(_, raw)| *raw)
    }
}

/// A structured value with named fields.
///
/// Usually implemented through `#[derive(Record)]`.
///
/// # Example
///
/// ```
/// use querystring_core::{FieldDescriptor, Record, ToValue, Value};
///
/// struct Search {
///     query: String,
///     page: u32,
/// }
///
/// impl Record for Search {
///     fn fields(&self) -> &'static [FieldDescriptor] {
///         static FIELDS: &[FieldDescriptor] = &[
///             FieldDescriptor { name: "query", type_name: "String", tags: &[("url", "q")], exported: true, embedded: false },
///             FieldDescriptor { name: "page", type_name: "u32", tags: &[], exported: true, embedded: false },
///         ];
///         FIELDS
///     }
///
///     fn field(&self, index: usize) -> Option<Value<'_>> {
///         match index {
///             0 => Some(self.query.to_value()),
///             1 => Some(self.page.to_value()),
///             _ => None,
///         }
///     }
/// }
///
/// let search = Search { query: "rust".to_string(), page: 2 };
/// assert_eq!(search.fields().len(), 2);
/// assert!(matches!(search.field(1), Some(Value::Uint(2))));
/// ```
pub trait Record {
    /// Descriptors of every field, in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Value of the field at `index` in [`Record::fields`].
    fn field(&self, index: usize) -> Option<Value<'_>>;

    /// Whether this record counts as empty for `omitempty`.
    fn is_zero(&self) -> bool {
        false
    }
}

/// Custom encoding capability.
///
/// A type implementing `Encoder` controls the strings emitted for a field of
/// that type. Expose it to the traversal by returning [`Value::Custom`] from
/// its [`ToValue`](crate::ToValue) implementation.
///
/// # Example
///
/// ```
/// use querystring_core::{BoxError, Encoder, ToValue, Value};
///
/// struct Range(u32, u32);
///
/// impl Encoder for Range {
///     fn encode(&self) -> Result<Vec<String>, BoxError> {
///         Ok(vec![format!("{}-{}", self.0, self.1)])
///     }
/// }
///
/// impl ToValue for Range {
///     fn to_value(&self) -> Value<'_> {
///         Value::Custom(self)
///     }
/// }
///
/// assert_eq!(Range(1, 5).encode().expect("encode"), ["1-5"]);
/// ```
pub trait Encoder {
    /// Produce the encoded strings, in order.
    fn encode(&self) -> Result<Vec<String>, BoxError>;

    /// Whether this value counts as empty for `omitempty`.
    fn is_zero(&self) -> bool {
        false
    }
}
