//! Form encoding for request parameters
//!
//! Parameter structs are serialized through serde into a JSON value which is
//! then flattened into bracketed keys: nested objects become `parent[child]`,
//! arrays become `parent[0]`, `parent[1]`, ... and `None` fields disappear.

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::Result;

/// Ordered list of form key/value pairs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable params struct into form pairs
    pub fn from_params<P: Serialize + ?Sized>(params: &P) -> Result<Self> {
        let value = serde_json::to_value(params)?;
        let mut values = Self::new();
        values.append_value(String::new(), &value);
        Ok(values)
    }

    fn append_value(&mut self, key: String, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.push_scalar(key, b.to_string()),
            Value::Number(n) => self.push_scalar(key, format_number(n)),
            Value::String(s) => self.push_scalar(key, s.clone()),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    self.append_value(format!("{}[{}]", key, index), item);
                }
            }
            Value::Object(map) => {
                for (name, item) in map {
                    let child = if key.is_empty() {
                        name.clone()
                    } else {
                        format!("{}[{}]", key, name)
                    };
                    self.append_value(child, item);
                }
            }
        }
    }

    fn push_scalar(&mut self, key: String, value: String) {
        // a bare scalar at the top level has no name to go under
        if !key.is_empty() {
            self.pairs.push((key, value));
        }
    }

    /// Append a pair, keeping any existing pairs with the same key
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every pair with this key by a single pair, or append it
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value;
                let mut index = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn extend<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            self.add(k, v);
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode as `application/x-www-form-urlencoded`
    pub fn encode(&self) -> Result<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

fn format_number(n: &Number) -> String {
    if n.is_f64() {
        // Display for f64 drops a trailing ".0"
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    } else {
        n.to_string()
    }
}
