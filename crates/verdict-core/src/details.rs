use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single detail value: a scalar or a nested detail map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetailValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Nested(ErrorDetails),
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ErrorDetails> for DetailValue {
    fn from(value: ErrorDetails) -> Self {
        Self::Nested(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DetailValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u16, u32, u64, usize);

/// Structured, field-level feedback attached to a failure
///
/// Keys keep insertion order when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorDetails(IndexMap<String, DetailValue>);

impl ErrorDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Details holding a single `error` entry
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with("error", message.into())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<DetailValue>) -> Option<DetailValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&DetailValue> {
        self.0.get(key)
    }

    /// String value stored under `key`, if it is one
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(DetailValue::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorDetails
where
    K: Into<String>,
    V: Into<DetailValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_in_insertion_order() {
        let details = ErrorDetails::new()
            .with("id", "abc")
            .with("expected", "number")
            .with("attempts", 3);

        let json = serde_json::to_string(&details).unwrap();
        assert_eq!(json, r#"{"id":"abc","expected":"number","attempts":3}"#);
    }

    #[test]
    fn nested_details_round_through_json() {
        let details = ErrorDetails::new().with(
            "email",
            ErrorDetails::new().with("required", true).with("max_length", 255),
        );

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "email": { "required": true, "max_length": 255 } })
        );

        let parsed: ErrorDetails = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, details);
    }

    #[test]
    fn error_helper_sets_single_entry() {
        let details = ErrorDetails::error("boom");
        assert_eq!(details.len(), 1);
        assert_eq!(details.get_str("error"), Some("boom"));
    }

    #[test]
    fn collects_from_pairs() {
        let details: ErrorDetails = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(details.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
