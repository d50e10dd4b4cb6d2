//! Dynamic values.
//!
//! [`Value`] is the runtime view the encoder dispatches on: every field of a
//! [`Record`] is turned into a `Value` through [`ToValue`].

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};

use crate::{Encoder, Record, Values};

/// Borrowed, dynamically typed view of a value.
pub enum Value<'a> {
    /// Text.
    String(Cow<'a, str>),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Timestamp with its offset.
    Time(DateTime<FixedOffset>),
    /// Sequence (vector, slice, array).
    Seq(Vec<Value<'a>>),
    /// Key/value mapping, in the map's iteration order.
    Map {
        /// Whether the map's key type is a string type, known even when the
        /// map is empty.
        string_keys: bool,
        /// Entries of the map.
        entries: Vec<(Value<'a>, Value<'a>)>,
    },
    /// Structured record with named fields.
    Record(&'a dyn Record),
    /// Optional value; `None` is an absent reference.
    Optional(Option<Box<Value<'a>>>),
    /// Value with a custom encoding.
    Custom(&'a dyn Encoder),
    /// Already-encoded values.
    Values(&'a Values),
    /// Any other type, identified by its name.
    Other(&'static str),
}

impl Value<'_> {
    /// Short name of the value kind, used in error messages and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Time(_) => "time",
            Self::Seq(_) => "sequence",
            Self::Map { .. } => "map",
            Self::Record(_) => "record",
            Self::Optional(_) => "optional",
            Self::Custom(_) => "custom",
            Self::Values(_) => "values",
            Self::Other(name) => *name,
        }
    }

    /// Whether this is the empty value of its type, as understood by
    /// `omitempty`.
    ///
    /// Empty strings, sequences and maps, zero numbers, `false` and absent
    /// optionals are empty. Records and custom encoders decide through their
    /// `is_zero` method. A timestamp is empty at the Unix epoch, the default
    /// `DateTime`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Bool(b) => !b,
            Self::Seq(items) => items.is_empty(),
            Self::Map { entries, .. } => entries.is_empty(),
            Self::Values(values) => values.is_empty(),
            Self::Optional(inner) => inner.is_none(),
            Self::Record(record) => record.is_zero(),
            Self::Custom(encoder) => encoder.is_zero(),
            Self::Time(time) => *time == DateTime::<Utc>::UNIX_EPOCH,
            Self::Other(_) => false,
        }
    }

    /// String form of a scalar, as used for sequence elements.
    ///
    /// Present optionals are unwrapped; anything without a scalar form
    /// (absent optionals, nested sequences, maps, records, custom encoders)
    /// becomes an empty string.
    ///
    /// ```
    /// use querystring_core::Value;
    ///
    /// assert_eq!(Value::Int(-3).to_entry(), "-3");
    /// assert_eq!(Value::Float(1.5).to_entry(), "1.500000");
    /// assert_eq!(Value::Bool(true).to_entry(), "true");
    /// assert_eq!(Value::Optional(None).to_entry(), "");
    /// ```
    #[must_use]
    pub fn to_entry(&self) -> String {
        match self {
            Self::Time(time) => format_timestamp(time),
            Self::String(s) => s.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Uint(n) => n.to_string(),
            Self::Float(n) => format_float(*n),
            Self::Bool(b) => b.to_string(),
            Self::Optional(Some(inner)) => inner.to_entry(),
            _ => String::new(),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Time(time) => f.debug_tuple("Time").field(time).finish(),
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Map {
                string_keys,
                entries,
            } => f
                .debug_struct("Map")
                .field("string_keys", string_keys)
                .field("entries", entries)
                .finish(),
            Self::Record(record) => {
                let names: Vec<_> = record.fields().iter().map(|field| field.name).collect();
                f.debug_tuple("Record").field(&names).finish()
            }
            Self::Optional(inner) => f.debug_tuple("Optional").field(inner).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Self::Other(name) => f.debug_tuple("Other").field(name).finish(),
        }
    }
}

/// Format a timestamp as RFC 3339 with nanosecond precision.
///
/// Trailing zeros of the fraction are trimmed (the fraction is omitted when
/// zero) and a zero offset is written `Z`.
///
/// ```
/// use chrono::DateTime;
/// use querystring_core::format_timestamp;
///
/// let time = DateTime::parse_from_rfc3339("2024-03-01T10:20:30.120+02:00").expect("valid");
/// assert_eq!(format_timestamp(&time), "2024-03-01T10:20:30.12+02:00");
/// ```
#[must_use]
pub fn format_timestamp(time: &DateTime<FixedOffset>) -> String {
    let mut result = time.format("%Y-%m-%dT%H:%M:%S").to_string();

    // leap seconds are reported as nanos >= 1_000_000_000
    let nanos = time.nanosecond() % 1_000_000_000;
    if nanos > 0 {
        let fraction = format!("{nanos:09}");
        result.push('.');
        result.push_str(fraction.trim_end_matches('0'));
    }

    if time.offset().local_minus_utc() == 0 {
        result.push('Z');
    } else {
        result.push_str(&time.format("%:z").to_string());
    }
    result
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{n:.6}")
    }
}

/// Conversion into a [`Value`].
///
/// Implemented for the standard scalar, collection and smart-pointer types.
/// `#[derive(Record)]` implements it for records; custom encoders implement it
/// by returning [`Value::Custom`].
pub trait ToValue {
    /// Whether this type converts to [`Value::String`].
    ///
    /// Lets maps report their key type without looking at any entry.
    const IS_STRING: bool = false;

    /// Borrow `self` as a dynamic value.
    fn to_value(&self) -> Value<'_>;
}

impl ToValue for str {
    const IS_STRING: bool = true;

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self))
    }
}

impl ToValue for String {
    const IS_STRING: bool = true;

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_str()))
    }
}

impl ToValue for Cow<'_, str> {
    const IS_STRING: bool = true;

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Borrowed(self.as_ref()))
    }
}

impl ToValue for char {
    const IS_STRING: bool = true;

    fn to_value(&self) -> Value<'_> {
        Value::String(Cow::Owned(self.to_string()))
    }
}

macro_rules! impl_to_value {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::$variant(<$target>::from(*self))
                }
            }
        )+
    };
}

impl_to_value!(Int(i64): i8, i16, i32, i64);
impl_to_value!(Uint(u64): u8, u16, u32, u64);
impl_to_value!(Float(f64): f32, f64);
impl_to_value!(Bool(bool): bool);

impl ToValue for isize {
    fn to_value(&self) -> Value<'_> {
        i64::try_from(*self).map_or(Value::Other("isize"), Value::Int)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value<'_> {
        u64::try_from(*self).map_or(Value::Other("usize"), Value::Uint)
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value<'_> {
        Value::Other("()")
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value<'_> {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Seq(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value<'_> {
        Value::Optional(self.as_ref().map(|value| Box::new(value.to_value())))
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value<'_> {
        Value::Map {
            string_keys: K::IS_STRING,
            entries: self
                .iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        }
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value<'_> {
        Value::Map {
            string_keys: K::IS_STRING,
            entries: self
                .iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        }
    }
}

impl<Tz: TimeZone> ToValue for DateTime<Tz> {
    fn to_value(&self) -> Value<'_> {
        Value::Time(self.fixed_offset())
    }
}

impl ToValue for Values {
    fn to_value(&self) -> Value<'_> {
        Value::Values(self)
    }
}

macro_rules! impl_to_value_deref {
    ($($ty:ty),+) => {
        $(
            impl<T: ToValue + ?Sized> ToValue for $ty {
                const IS_STRING: bool = T::IS_STRING;

                fn to_value(&self) -> Value<'_> {
                    (**self).to_value()
                }
            }
        )+
    };
}

impl_to_value_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
