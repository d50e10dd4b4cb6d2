//! Record to values conversion.

use querystring_core::{Error, Record, Result, ToValue, Value, Values, format_timestamp};
use tracing::{debug, trace};

use crate::{DirectiveResolver, Options, TagResolver};

/// Converts maps and records into [`Values`].
///
/// A converter is configured once and holds no state between calls, so a
/// single instance can be shared freely.
///
/// # Example
///
/// ```
/// use querystring::{Converter, Options, Record};
///
/// #[derive(Record)]
/// pub struct Login {
///     pub user_name: String,
///     #[record(form = "-")]
///     pub remember: bool,
/// }
///
/// let converter = Converter::with_options(&Options::builder().naming("camel").directive_key("form").build());
/// let values = converter.encode(&Login { user_name: "alice".into(), remember: true }).expect("encode");
/// assert_eq!(values.to_query_string(), "userName=alice");
/// ```
#[derive(Debug, Clone)]
pub struct Converter<R = TagResolver> {
    resolver: R,
}

impl Converter<TagResolver> {
    /// Create a converter using a [`TagResolver`] built from `options`.
    #[must_use]
    pub fn with_options(options: &Options) -> Self {
        Self::new(TagResolver::new(options))
    }
}

impl Default for Converter<TagResolver> {
    fn default() -> Self {
        Self::with_options(&Options::default())
    }
}

impl<R: DirectiveResolver> Converter<R> {
    /// Create a converter with a custom directive resolver.
    #[must_use]
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// The directive resolver.
    #[must_use]
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Encode `input` into values.
    ///
    /// `input` can be:
    /// - already-encoded [`Values`], returned unchanged,
    /// - a map whose keys and values are strings,
    /// - a record, or an optional record (`None` gives empty values).
    ///
    /// Any other input fails with [`Error::UnsupportedType`]. A failure
    /// discards everything encoded so far.
    pub fn encode<T: ToValue + ?Sized>(&self, input: &T) -> Result<Values> {
        let value = input.to_value();
        let kind = value.kind();

        let values = match value {
            Value::Values(values) => values.clone(),
            Value::Optional(None) => Values::new(),
            Value::Map {
                string_keys,
                entries,
            } => encode_map(string_keys, entries)?,
            Value::Optional(Some(inner)) => match *inner {
                Value::Record(record) => self.encode_root(record)?,
                other => return Err(Error::unsupported(format!("optional {}", other.kind()))),
            },
            Value::Record(record) => self.encode_root(record)?,
            other => return Err(Error::unsupported(other.kind())),
        };

        debug!(kind, keys = values.len(), "encoded values");
        Ok(values)
    }

    fn encode_root(&self, record: &dyn Record) -> Result<Values> {
        let mut values = Values::new();
        self.encode_record(&mut values, record)?;
        Ok(values)
    }

    fn encode_record(&self, values: &mut Values, record: &dyn Record) -> Result<()> {
        for (index, field) in record.fields().iter().enumerate() {
            if !field.exported && !field.embedded {
                trace!(field = field.name, "skipping unexported field");
                continue;
            }

            let raw = self.resolver.raw_directive(field);
            let Some(directive) = self.resolver.resolve(field.name, raw) else {
                trace!(field = field.name, "skipping field");
                continue;
            };
            let Some(value) = record.field(index) else {
                continue;
            };

            if field.embedded
                && let Some(inner) = as_record(&value)
            {
                self.encode_record(values, inner)?;
                continue;
            }

            if directive.options.omit_empty() && value.is_empty() {
                trace!(field = field.name, "omitting empty field");
                continue;
            }
            if directive.name.is_empty() {
                debug!(field = field.name, "skipping field without a usable name");
                continue;
            }

            encode_field(values, field.name, &directive.name, value)?;
        }
        Ok(())
    }
}

/// Record behind an embedded field, looking through present optionals.
fn as_record<'v>(value: &Value<'v>) -> Option<&'v dyn Record> {
    match value {
        Value::Record(record) => Some(*record),
        Value::Optional(Some(inner)) => as_record(inner),
        _ => None,
    }
}

fn encode_map(string_keys: bool, entries: Vec<(Value<'_>, Value<'_>)>) -> Result<Values> {
    if !string_keys {
        let message = match entries.first() {
            Some((key, _)) => format!("map key must be a string, found {}", key.kind()),
            None => "map key must be a string".to_string(),
        };
        return Err(Error::type_mismatch(message));
    }

    let mut values = Values::new();
    for (key, value) in entries {
        let Value::String(key) = key else {
            return Err(Error::type_mismatch(format!(
                "map key must be a string, found {}",
                key.kind()
            )));
        };
        let Value::String(value) = value else {
            return Err(Error::type_mismatch(format!(
                "map value must be a string, found {}",
                value.kind()
            )));
        };
        values.add(key, value);
    }
    Ok(values)
}

fn encode_field(values: &mut Values, field: &str, key: &str, value: Value<'_>) -> Result<()> {
    match value {
        Value::Time(time) => values.add(key, format_timestamp(&time)),
        Value::Custom(encoder) => {
            let encoded = encoder.encode().map_err(|source| {
                debug!(field, error = %source, "custom encoder failed");
                Error::encoder(field, source)
            })?;
            for item in encoded {
                values.add(key, item);
            }
        }
        Value::Optional(None) => trace!(field, "absent optional field"),
        Value::Optional(Some(inner)) => return encode_field(values, field, key, *inner),
        Value::Seq(items) => {
            for item in &items {
                values.add(key, item.to_entry());
            }
        }
        Value::String(s) => values.add(key, s),
        Value::Int(n) => values.add(key, n.to_string()),
        Value::Uint(n) => values.add(key, n.to_string()),
        Value::Bool(b) => values.add(key, b.to_string()),
        other => trace!(field, kind = other.kind(), "no entry for this kind"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use assert2::{check, let_assert};
    use querystring_core::{BoxError, Encoder, FieldDescriptor};

    use super::*;
    use crate::NameCase;

    /// Hand-written record, with an unexported and a skipped field.
    struct Manual {
        name: String,
        secret: String,
        ignored: u8,
        count: Option<u32>,
    }

    impl Record for Manual {
        fn fields(&self) -> &'static [FieldDescriptor] {
            static FIELDS: &[FieldDescriptor] = &[
                FieldDescriptor {
                    name: "Name",
                    type_name: "String",
                    tags: &[],
                    exported: true,
                    embedded: false,
                },
                FieldDescriptor {
                    name: "secret",
                    type_name: "String",
                    tags: &[("url", "secret")],
                    exported: false,
                    embedded: false,
                },
                FieldDescriptor {
                    name: "Ignored",
                    type_name: "u8",
                    tags: &[("url", "-")],
                    exported: true,
                    embedded: false,
                },
                FieldDescriptor {
                    name: "Count",
                    type_name: "Option<u32>",
                    tags: &[("url", "count,omitempty")],
                    exported: true,
                    embedded: false,
                },
            ];
            FIELDS
        }

        fn field(&self, index: usize) -> Option<Value<'_>> {
            match index {
                0 => Some(self.name.to_value()),
                1 => Some(self.secret.to_value()),
                2 => Some(self.ignored.to_value()),
                3 => Some(self.count.to_value()),
                _ => None,
            }
        }
    }

    impl ToValue for Manual {
        fn to_value(&self) -> Value<'_> {
            Value::Record(self)
        }
    }

    fn manual(count: Option<u32>) -> Manual {
        Manual {
            name: "alice".to_string(),
            secret: "s3cr3t".to_string(),
            ignored: 7,
            count,
        }
    }

    struct Failing;

    impl Encoder for Failing {
        fn encode(&self) -> std::result::Result<Vec<String>, BoxError> {
            Err("cannot encode".into())
        }
    }

    #[test]
    fn encode_manual_record() {
        let_assert!(Ok(values) = Converter::default().encode(&manual(Some(3))));
        check!(values.keys().collect::<Vec<_>>() == ["name", "count"]);
        check!(values.get("name") == Some("alice"));
        check!(values.get("count") == Some("3"));
        check!(!values.contains_key("secret"));
        check!(!values.contains_key("Ignored"));
    }

    #[test]
    fn omit_absent_optional() {
        let_assert!(Ok(values) = Converter::default().encode(&manual(None)));
        check!(!values.contains_key("count"));
    }

    #[test]
    fn naming_strategy_applies_to_untagged_fields() {
        let converter = Converter::with_options(&Options::builder().naming("pascal").build());
        let_assert!(Ok(values) = converter.encode(&manual(None)));
        check!(values.get("Name") == Some("alice"));

        let converter = Converter::with_options(&Options::builder().naming(NameCase::None).build());
        let_assert!(Ok(values) = converter.encode(&manual(None)));
        check!(values.is_empty());
    }

    #[test]
    fn optional_record_input() {
        let_assert!(Ok(values) = Converter::default().encode(&None::<Manual>));
        check!(values.is_empty());

        let_assert!(Ok(values) = Converter::default().encode(&Some(manual(None))));
        check!(values.get("name") == Some("alice"));
    }

    #[test]
    fn values_pass_through() {
        let input: Values = [("a", "1"), ("a", "2")].into_iter().collect();
        let_assert!(Ok(values) = Converter::default().encode(&input));
        check!(values == input);
    }

    #[test]
    fn map_input() {
        let input = BTreeMap::from([("hello", "world"), ("foo", "bar"), ("empty", "")]);
        let_assert!(Ok(values) = Converter::default().encode(&input));
        check!(values.len() == 3);
        check!(values.get("hello") == Some("world"));
        check!(values.get("empty") == Some(""));
    }

    #[test]
    fn map_type_mismatch() {
        let input = HashMap::from([(1, "one")]);
        let_assert!(Err(error) = Converter::default().encode(&input));
        check!(error.is_type_mismatch());
        check!(error.to_string() == "type mismatch: map key must be a string, found int");

        let input = HashMap::<i32, String>::new();
        let_assert!(Err(error) = Converter::default().encode(&input));
        check!(error.is_type_mismatch());
        check!(error.to_string() == "type mismatch: map key must be a string");

        let input = HashMap::from([("one", 1)]);
        let_assert!(Err(error) = Converter::default().encode(&input));
        check!(error.to_string() == "type mismatch: map value must be a string, found int");
    }

    #[test]
    fn unsupported_inputs() {
        let_assert!(Err(error) = Converter::default().encode(&42));
        check!(error.is_unsupported_type());
        check!(error.to_string() == "unsupported type: int");

        let_assert!(Err(error) = Converter::default().encode(&vec!["a"]));
        check!(error.is_unsupported_type());

        let_assert!(Err(error) = Converter::default().encode(&Some("text")));
        check!(error.to_string() == "unsupported type: optional string");
    }

    #[test]
    fn failing_encoder_aborts() {
        let mut values = Values::new();
        let_assert!(Err(error) = encode_field(&mut values, "Sub", "sub", Value::Custom(&Failing)));
        check!(error.is_encoder());
        check!(error.to_string() == "failed to encode field 'Sub': cannot encode");
    }

    #[test]
    fn scalar_fields() {
        let mut values = Values::new();
        let fields = [
            ("s", Value::String("x".into())),
            ("i", Value::Int(-1)),
            ("u", Value::Uint(1)),
            ("b", Value::Bool(false)),
            ("f", Value::Float(1.5)),
            ("o", Value::Optional(None)),
            ("n", Value::Optional(Some(Box::new(Value::Int(2))))),
            ("x", Value::Other("()")),
        ];
        for (key, value) in fields {
            let_assert!(Ok(()) = encode_field(&mut values, key, key, value));
        }
        check!(values.keys().collect::<Vec<_>>() == ["s", "i", "u", "b", "n"]);
        check!(values.get("b") == Some("false"));
        check!(values.get("n") == Some("2"));
    }
}
