//! Directive resolution.
//!
//! A [`DirectiveResolver`] decides, for each field, whether it is encoded,
//! under which key, and with which options.

use querystring_core::{Directive, FieldDescriptor, NameCase, parse_directive};

use crate::Options;

/// Resolve per-field directives.
///
/// Implement this trait to read directives from somewhere else than the
/// field tags, or to change how names are derived.
pub trait DirectiveResolver {
    /// Read the raw directive string of `field`; `""` when absent.
    fn raw_directive(&self, field: &FieldDescriptor) -> &'static str;

    /// Directive value that excludes a field.
    fn skip_sentinel(&self) -> &str;

    /// Resolve the raw directive of the field named `field_name`.
    ///
    /// Returns `None` when the field must be skipped.
    fn resolve(&self, field_name: &str, raw: &str) -> Option<Directive>;
}

/// Default resolver, reading directives from the field tags of one
/// namespace.
///
/// ```
/// use querystring::{DirectiveResolver, Options, TagResolver};
///
/// let resolver = TagResolver::new(&Options::default());
///
/// let directive = resolver.resolve("PageSize", ",omitempty").expect("not skipped");
/// assert_eq!(directive.name, "page_size");
/// assert!(directive.options.omit_empty());
///
/// assert!(resolver.resolve("Secret", "-").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResolver {
    directive_key: String,
    skip_sentinel: String,
    naming: NameCase,
}

impl TagResolver {
    /// Create a resolver from the encoder options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            directive_key: options.directive_key.clone(),
            skip_sentinel: options.skip_sentinel.clone(),
            naming: options.naming,
        }
    }

    /// The namespace this resolver reads.
    #[must_use]
    pub fn directive_key(&self) -> &str {
        &self.directive_key
    }

    /// The naming strategy for fields without an explicit name.
    #[must_use]
    pub const fn naming(&self) -> NameCase {
        self.naming
    }
}

impl Default for TagResolver {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl DirectiveResolver for TagResolver {
    fn raw_directive(&self, field: &FieldDescriptor) -> &'static str {
        field.tag(&self.directive_key).unwrap_or_default()
    }

    fn skip_sentinel(&self) -> &str {
        &self.skip_sentinel
    }

    fn resolve(&self, field_name: &str, raw: &str) -> Option<Directive> {
        if raw == self.skip_sentinel {
            return None;
        }

        let mut directive = parse_directive(raw);
        if directive.name.is_empty() && !self.naming.is_none() {
            directive.name = self.naming.convert(field_name);
        }
        Some(directive)
    }
}
