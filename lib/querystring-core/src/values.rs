//! Ordered multi-valued string collection.

use indexmap::IndexMap;

/// Ordered multi-map from keys to a list of values.
///
/// This is the output of every encode operation. Keys iterate in the order
/// they were first added; a key may hold several values, kept in insertion
/// order (e.g. one per element of a sequence field).
///
/// # Example
///
/// ```
/// use querystring_core::Values;
///
/// let mut values = Values::new();
/// values.add("tag", "a");
/// values.add("q", "rust");
/// values.add("tag", "b");
///
/// assert_eq!(values.get("tag"), Some("a"));
/// assert_eq!(values.get_all("tag"), ["a", "b"]);
/// assert_eq!(values.to_query_string(), "tag=a&tag=b&q=rust");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: IndexMap<String, Vec<String>>,
}

impl Values {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Replace every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Get the first value associated with `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Get every value associated with `key`, or an empty slice.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if `key` has at least one entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, returning its values. Order of the other keys is kept.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is no key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over keys with all their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterate over flattened `(key, value)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    /// Serialize to an `application/x-www-form-urlencoded` string.
    ///
    /// Pairs are written in insertion order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }

    /// Append every pair to the query of `url`.
    ///
    /// ```
    /// use querystring_core::Values;
    ///
    /// let mut url = url::Url::parse("https://example.com/search?page=2").expect("valid URL");
    /// let values: Values = [("q", "hello world")].into_iter().collect();
    /// values.append_to_url(&mut url);
    ///
    /// assert_eq!(url.as_str(), "https://example.com/search?page=2&q=hello+world");
    /// ```
    pub fn append_to_url(&self, url: &mut url::Url) {
        if self.is_empty() {
            return;
        }
        url.query_pairs_mut().extend_pairs(self.pairs());
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl IntoIterator for Values {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Values> for Vec<(String, String)> {
    fn from(values: Values) -> Self {
        values
            .into_iter()
            .flat_map(|(key, values)| {
                values
                    .into_iter()
                    .map(move |value| (key.clone(), value))
            })
            .collect()
    }
}
