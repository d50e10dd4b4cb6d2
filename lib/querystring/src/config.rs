//! Encoder configuration types.

use serde::{Deserialize, Serialize};

use crate::NameCase;

/// Default directive namespace.
pub const DEFAULT_DIRECTIVE_KEY: &str = "url";

/// Default directive value excluding a field.
pub const DEFAULT_SKIP_SENTINEL: &str = "-";

/// Configuration for the encoder.
///
/// Can be deserialized from a configuration file; missing keys take their
/// default value.
///
/// ```
/// use querystring::{NameCase, Options};
///
/// let options: Options = serde_json::from_str(r#"{ "naming": "camel" }"#).expect("valid");
/// assert_eq!(options.naming, NameCase::Camel);
/// assert_eq!(options.directive_key, "url");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Naming strategy for fields without an explicit directive name.
    pub naming: NameCase,
    /// Directive value that excludes a field entirely.
    pub skip_sentinel: String,
    /// Namespace of the directives to read (e.g. `url`, `form`).
    pub directive_key: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            naming: NameCase::Snake,
            skip_sentinel: DEFAULT_SKIP_SENTINEL.to_string(),
            directive_key: DEFAULT_DIRECTIVE_KEY.to_string(),
        }
    }
}

impl Options {
    /// Create a new options builder.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

/// Builder for [`Options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    naming: Option<NameCase>,
    skip_sentinel: Option<String>,
    directive_key: Option<String>,
}

impl OptionsBuilder {
    /// Set the naming strategy.
    #[must_use]
    pub fn naming(mut self, naming: impl Into<NameCase>) -> Self {
        self.naming = Some(naming.into());
        self
    }

    /// Set the directive value that skips a field.
    #[must_use]
    pub fn skip_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.skip_sentinel = Some(sentinel.into());
        self
    }

    /// Set the directive namespace to read.
    #[must_use]
    pub fn directive_key(mut self, key: impl Into<String>) -> Self {
        self.directive_key = Some(key.into());
        self
    }

    /// Build the options.
    #[must_use]
    pub fn build(self) -> Options {
        let defaults = Options::default();
        Options {
            naming: self.naming.unwrap_or(defaults.naming),
            skip_sentinel: self.skip_sentinel.unwrap_or(defaults.skip_sentinel),
            directive_key: self.directive_key.unwrap_or(defaults.directive_key),
        }
    }
}
