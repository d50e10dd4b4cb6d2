//! Error types for querystring.

use derive_more::{Display, Error};

/// Boxed error returned by custom [`Encoder`](crate::Encoder) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for encode operations.
///
/// Any error aborts the whole encode call: no partial [`Values`](crate::Values)
/// are returned.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The input is neither a map, a record, nor an optional record.
    #[display("unsupported type: {_0}")]
    UnsupportedType(#[error(not(source))] String),

    /// A map key or value is not a string.
    #[display("type mismatch: {_0}")]
    TypeMismatch(#[error(not(source))] String),

    /// A field's custom encoder failed.
    #[display("failed to encode field '{field}': {source}")]
    Encoder {
        /// Name of the field being encoded.
        field: String,
        /// Error returned by the encoder.
        source: BoxError,
    },
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported type error.
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedType(kind.into())
    }

    /// Create a type mismatch error.
    #[must_use]
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }

    /// Create an encoder failure for `field`.
    #[must_use]
    pub fn encoder(field: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Encoder {
            field: field.into(),
            source: source.into(),
        }
    }

    /// Returns `true` if this is an unsupported type error.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    /// Returns `true` if this is a type mismatch error.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }

    /// Returns `true` if a custom encoder failed.
    #[must_use]
    pub const fn is_encoder(&self) -> bool {
        matches!(self, Self::Encoder { .. })
    }
}
