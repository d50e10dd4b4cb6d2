//! Field directive parsing.
//!
//! A directive is the per-field string `name,opt1,opt2`: the first segment is
//! the output name (possibly empty), the remaining segments are options.

/// Options of a directive, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions(Vec<String>);

impl TagOptions {
    /// The option suppressing empty values.
    pub const OMIT_EMPTY: &'static str = "omitempty";

    /// Returns `true` if `option` is present.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.0.iter().any(|o| o == option)
    }

    /// Shorthand for `contains("omitempty")`.
    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.contains(Self::OMIT_EMPTY)
    }

    /// Iterate over the options.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns `true` if there is no option.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagOptions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A resolved field directive: output name and options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    /// Key under which the field's values are emitted.
    pub name: String,
    /// Options such as `omitempty`.
    pub options: TagOptions,
}

impl Directive {
    /// Create a directive without options.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: TagOptions::default(),
        }
    }
}

/// Split a raw directive into its name and options.
///
/// ```
/// use querystring_core::parse_directive;
///
/// let directive = parse_directive("foo,omitempty");
/// assert_eq!(directive.name, "foo");
/// assert!(directive.options.omit_empty());
///
/// let directive = parse_directive(",omitempty");
/// assert_eq!(directive.name, "");
/// ```
#[must_use]
pub fn parse_directive(raw: &str) -> Directive {
    let mut segments = raw.split(',');
    let name = segments.next().unwrap_or_default().to_string();
    Directive {
        name,
        options: segments.collect(),
    }
}
