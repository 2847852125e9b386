//! Query parameter bags and query-string serialization.
//!
//! The Freesound API groups related query parameters (e.g. geotag bounding
//! boxes, advanced search fields). A [`Params`] bag therefore maps keys to
//! [`ParamValue`]s, where a value may itself be a nested bag. Serialization
//! flattens nested bags *in place*: a group with N entries contributes N
//! `key=value` fragments at the position of the parent key, never collected
//! or reordered. Entries keep insertion order end to end.
//!
//! ```
//! use freesound_api::Params;
//!
//! let params = Params::new()
//!     .with("q", "rain")
//!     .with("page", 2)
//!     .with("geo", Params::new().with("min_lat", 41.3).with("max_lat", 41.5));
//! assert_eq!(
//!     params.to_query_string(),
//!     "q=rain&page=2&min_lat=41.3&max_lat=41.5"
//! );
//! ```
//!
//! Values are percent-encoded with [`urlencoding::encode`] (space → `%20`).

use std::borrow::Cow;

/// A single query parameter value.
///
/// [`Omit`](ParamValue::Omit) drops the entry entirely — it contributes
/// nothing to the query string, not even a bare key. `Option<T>` converts
/// via `From`, so `params.set("filter", maybe_filter)` does the right thing
/// for `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Nested bag, flattened in place during serialization.
    Group(Params),
    /// Skip this entry.
    Omit,
}

impl ParamValue {
    fn encoded(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) => Some(urlencoding::encode(s)),
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(n) => Some(Cow::Owned(n.to_string())),
            Self::Group(_) | Self::Omit => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Params> for ParamValue {
    fn from(v: Params) -> Self {
        Self::Group(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Omit, Into::into)
    }
}

/// An insertion-ordered bag of query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key is replaced *in place* — its position in the bag is
    /// preserved. A new key is appended at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of entries (including `Omit` and group entries).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize the bag to a URL query string (no leading `?`).
    ///
    /// Nested groups flatten in place, `Omit` entries are skipped, and the
    /// result never starts or ends with a separator. An empty bag (or a bag
    /// of only `Omit` entries) yields an empty string.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        write_fragments(&mut out, self);
        // Each emitted fragment ends with `&`; drop the one left trailing.
        // `pop` on an empty accumulation is a no-op.
        out.pop();
        out
    }
}

/// Append `key=value&` fragments for every entry of `params`.
///
/// Recursive for groups; never strips the trailing separator — that is the
/// outermost caller's job, otherwise interior fragments would lose theirs.
fn write_fragments(out: &mut String, params: &Params) {
    for (key, value) in params.iter() {
        match value {
            ParamValue::Group(inner) => write_fragments(out, inner),
            ParamValue::Omit => {}
            scalar => {
                if let Some(encoded) = scalar.encoded() {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(&encoded);
                    out.push('&');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_bag() {
        let params = Params::new().with("param1", 60).with("param2", "string");
        assert_eq!(params.to_query_string(), "param1=60&param2=string");
    }

    #[test]
    fn nested_bags_flatten_in_place() {
        let params = Params::new()
            .with("param1", 60)
            .with("param2", "string")
            .with(
                "group1",
                Params::new().with("param3", 50).with(
                    "group2",
                    Params::new().with("param4", "string").with("param5", 40),
                ),
            );
        assert_eq!(
            params.to_query_string(),
            "param1=60&param2=string&param3=50&param4=string&param5=40"
        );
    }

    #[test]
    fn nested_entries_keep_parent_position() {
        // The group sits between a and z; its entries must be emitted there,
        // not appended after z.
        let params = Params::new()
            .with("a", 1)
            .with("mid", Params::new().with("b", 2).with("c", 3))
            .with("z", 4);
        assert_eq!(params.to_query_string(), "a=1&b=2&c=3&z=4");
    }

    #[test]
    fn empty_bag_yields_empty_string() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn omitted_value_contributes_nothing() {
        let params = Params::new().with("a", ParamValue::Omit);
        assert_eq!(params.to_query_string(), "");

        let none: Option<i64> = None;
        let params = Params::new().with("a", none).with("b", 1);
        assert_eq!(params.to_query_string(), "b=1");
    }

    #[test]
    fn no_leading_or_trailing_separator() {
        let cases = [
            Params::new(),
            Params::new().with("a", 1),
            Params::new().with("a", ParamValue::Omit).with("b", 2),
            Params::new().with("g", Params::new().with("x", "y")),
        ];
        for params in cases {
            let qs = params.to_query_string();
            assert!(!qs.starts_with('&'), "leading separator in {qs:?}");
            assert!(!qs.ends_with('&'), "trailing separator in {qs:?}");
        }
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = Params::new()
            .with("q", "glass break")
            .with("filter", "tag:field-recording type:wav");
        assert_eq!(
            params.to_query_string(),
            "q=glass%20break&filter=tag%3Afield-recording%20type%3Awav"
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2).with("c", 3);
        params.set("b", "two");
        assert_eq!(params.to_query_string(), "a=1&b=two&c=3");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn scalar_bag_round_trips() {
        let params = Params::new()
            .with("q", "rain & thunder")
            .with("page", 3)
            .with("ratio", 0.5)
            .with("odd key", "100% true");
        let qs = params.to_query_string();

        let decoded: Vec<(String, String)> = qs
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').expect("pair has a separator");
                (
                    urlencoding::decode(k).expect("valid encoding").into_owned(),
                    urlencoding::decode(v).expect("valid encoding").into_owned(),
                )
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("q".to_owned(), "rain & thunder".to_owned()),
                ("page".to_owned(), "3".to_owned()),
                ("ratio".to_owned(), "0.5".to_owned()),
                ("odd key".to_owned(), "100% true".to_owned()),
            ]
        );
    }
}
