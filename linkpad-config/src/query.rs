//! Ordered query-string model.
//!
//! A query string is an ordered list of key/value pairs. Order matters
//! here: the codec re-serializes `language` as the final parameter on every
//! rewrite, so the container must make ordering explicit rather than
//! incidental. Mutation follows the host page's native search-params
//! semantics: `set` replaces the first occurrence in place and drops later
//! duplicates, `append` pushes at the tail, `remove` drops every
//! occurrence.

use std::fmt;

use url::form_urlencoded;

/// An ordered key/value view of a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Pairs are percent-decoded and `+` decodes to a space. Parsing never
    /// fails; empty input yields an empty query.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Value of the first occurrence of `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` occurs at least once.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replace the value of the first occurrence of `key` in place, keeping
    /// its position and dropping any later duplicates; appends the pair
    /// when the key is absent.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value.to_string();
                while let Some(dup) = self
                    .pairs
                    .iter()
                    .skip(index + 1)
                    .position(|(k, _)| k == key)
                {
                    self.pairs.remove(index + 1 + dup);
                }
            }
            None => self.append(key, value),
        }
    }

    /// Push a pair at the end unconditionally.
    pub fn append(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Remove every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the query holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize the pairs in order, percent-encoding keys and values.
    ///
    /// No leading `?`; an empty query serializes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
