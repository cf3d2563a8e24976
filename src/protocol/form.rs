//! Form-encoded request bodies.
//!
//! Outgoing operation parameters are flat key-value pairs encoded as
//! `application/x-www-form-urlencoded`. List-valued parameters use the
//! server's repeated-key convention: each value is appended under the key
//! with an array suffix (`groups[]=a&groups[]=b`). Insertion order is
//! preserved end to end.

use url::form_urlencoded;

/// An ordered set of form parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single-valued parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append a list-valued parameter as repeated `key[]` entries,
    /// preserving the order of `values`.
    pub fn set_list<I, S>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.pairs.push((format!("{key}[]"), value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode as `application/x-www-form-urlencoded` (spaces as `+`).
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
