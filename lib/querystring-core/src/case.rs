//! Name case conversion.
//!
//! Converts identifiers between `camelCase`, `PascalCase` and `snake_case`.
//! Every conversion (except [`NameCase::None`]) first checks the input: it
//! must start with a letter, end with a letter or a digit, and only contain
//! letters, digits and the separators `_`, `-` and `.`. Non-conforming input
//! yields an empty string, which callers treat as "no usable name".

use std::fmt;

use serde::{Deserialize, Serialize};

/// Naming strategy applied to field names that carry no explicit directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NameCase {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    #[default]
    Snake,
    /// Leave the name untouched.
    None,
}

impl NameCase {
    /// Parse a strategy name.
    ///
    /// Unknown names (including the empty string) map to [`NameCase::None`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "camel" => Self::Camel,
            "pascal" => Self::Pascal,
            "snake" => Self::Snake,
            _ => Self::None,
        }
    }

    /// Get the strategy name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::None => "none",
        }
    }

    /// Returns `true` if this strategy leaves names untouched.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Convert `name` using this strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use querystring_core::NameCase;
    ///
    /// assert_eq!(NameCase::Camel.convert("hello_world"), "helloWorld");
    /// assert_eq!(NameCase::Pascal.convert("hello_world"), "HelloWorld");
    /// assert_eq!(NameCase::Snake.convert("HelloWorld"), "hello_world");
    /// assert_eq!(NameCase::None.convert("hello_world"), "hello_world");
    /// ```
    #[must_use]
    pub fn convert(self, name: &str) -> String {
        match self {
            Self::Camel => to_camel_case(name),
            Self::Pascal => to_pascal_case(name),
            Self::Snake => to_snake_case(name),
            Self::None => name.to_string(),
        }
    }
}

impl fmt::Display for NameCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NameCase {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for NameCase {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<NameCase> for String {
    fn from(case: NameCase) -> Self {
        case.as_str().to_string()
    }
}

/// Convert `input` with the given strategy.
///
/// `strategy` is either a [`NameCase`] or its name (`"camel"`, `"pascal"`,
/// `"snake"`); any other name leaves the input unchanged.
///
/// # Example
///
/// ```
/// use querystring_core::convert_name;
///
/// assert_eq!(convert_name("camel", "foo-bar"), "fooBar");
/// assert_eq!(convert_name("camel", "foo-bar-"), "");
/// assert_eq!(convert_name("unknown", "foo-bar-"), "foo-bar-");
/// ```
#[must_use]
pub fn convert_name(strategy: impl Into<NameCase>, input: &str) -> String {
    strategy.into().convert(input)
}

const fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.')
}

fn is_compliant(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || is_separator(c)
}

/// Check the conversion precondition and split off the first character.
fn split_valid(s: &str) -> Option<(char, &str)> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let last = s.chars().next_back()?;
    if !first.is_alphabetic() || !(last.is_alphabetic() || last.is_numeric()) {
        return None;
    }
    let rest = chars.as_str();
    rest.chars().all(is_compliant).then_some((first, rest))
}

fn join_words(first: char, rest: &str, first_upper: bool) -> String {
    let mut result = String::with_capacity(rest.len() + 1);
    if first_upper {
        result.extend(first.to_uppercase());
    } else {
        result.extend(first.to_lowercase());
    }

    let mut capitalize_next = false;
    for c in rest.chars() {
        if is_separator(c) {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to `camelCase`.
///
/// Returns an empty string when the input does not satisfy the naming
/// precondition (see the [module documentation](self)).
///
/// ```
/// use querystring_core::to_camel_case;
///
/// assert_eq!(to_camel_case("foo_bar"), "fooBar");
/// assert_eq!(to_camel_case("foo.bar"), "fooBar");
/// assert_eq!(to_camel_case("1foo-bar"), "");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    split_valid(s).map_or_else(String::new, |(first, rest)| join_words(first, rest, false))
}

/// Convert a string to `PascalCase`.
///
/// ```
/// use querystring_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("foo-bar"), "FooBar");
/// assert_eq!(to_pascal_case("hello_2-bar"), "Hello2Bar");
/// assert_eq!(to_pascal_case("foo-bar-"), "");
/// ```
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    split_valid(s).map_or_else(String::new, |(first, rest)| join_words(first, rest, true))
}

/// Convert a string to `snake_case`.
///
/// Besides separators, word boundaries are detected before an uppercase
/// letter and between letters and digits, so `hello2World` becomes
/// `hello_2_world`.
///
/// ```
/// use querystring_core::to_snake_case;
///
/// assert_eq!(to_snake_case("HelloWorld"), "hello_world");
/// assert_eq!(to_snake_case("hello2World"), "hello_2_world");
/// assert_eq!(to_snake_case("foo-bar-1"), "foo_bar_1");
/// ```
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let Some((first, rest)) = split_valid(s) else {
        return String::new();
    };

    let mut result = String::with_capacity(s.len() + 4);
    result.extend(first.to_lowercase());

    // `boundary` is set right after an `_` has been written
    let mut boundary = false;
    let mut prev = first;
    for c in rest.chars() {
        if is_separator(c) {
            if !boundary {
                result.push('_');
                boundary = true;
            }
            prev = c;
            continue;
        }

        let starts_word = if c.is_alphabetic() {
            c.is_uppercase() || prev.is_numeric()
        } else {
            c.is_numeric() && prev.is_alphabetic()
        };
        if starts_word && !boundary {
            result.push('_');
        }
        result.extend(c.to_lowercase());
        boundary = false;
        prev = c;
    }
    result
}
