use serde_json::{Map, Value};

use super::ConnectorError;

/// The result of a single call against the LTM management API.
pub type CallOutcome = Result<Payload, ConnectorError>;

/// A successfully classified response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A parsed JSON document, or an empty mapping for an empty 200 reply.
    Json(Value),
    /// The raw text of a 200 HTML reply, kept unparsed.
    Text(String),
}

impl Payload {
    pub fn empty() -> Self {
        Self::Json(Value::Object(Map::new()))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Looks up a required top-level field of a JSON object payload.
    pub fn field(&self, key: &str) -> Result<&Value, ConnectorError> {
        self.as_json()
            .and_then(|value| value.get(key))
            .ok_or_else(|| ConnectorError::MissingField(key.to_string()))
    }

    /// Elements of the `items` collection; the LTM omits the key for empty collections.
    pub fn items(&self) -> Vec<Value> {
        self.as_json()
            .and_then(|value| value.get("items"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }
}
