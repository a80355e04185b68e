use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::Parameters;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[default]
    Failed,
}

impl Status {
    pub fn is_success(&self) -> bool {
        *self == Status::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => f.write_str("success"),
            Status::Failed => f.write_str("failed"),
        }
    }
}

/// Accumulates what one action invocation reports back to the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionResult {
    parameter: Parameters,
    data: Vec<Value>,
    summary: Map<String, Value>,
    status: Status,
    message: Option<String>,
    debug_data: Vec<Value>,
}

impl ActionResult {
    pub fn new(parameter: Parameters) -> Self {
        Self {
            parameter,
            ..Default::default()
        }
    }

    pub fn add_data(&mut self, data: Value) {
        self.data.push(data);
    }

    pub fn add_debug_data(&mut self, data: Value) {
        self.debug_data.push(data);
    }

    pub fn update_summary<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) {
        self.summary.insert(key.into(), value.into());
    }

    pub fn set_status(&mut self, status: Status, message: Option<String>) {
        self.status = status;
        self.message = message;
    }

    pub fn parameter(&self) -> &Parameters {
        &self.parameter
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn summary(&self) -> &Map<String, Value> {
        &self.summary
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn debug_data(&self) -> &[Value] {
        &self.debug_data
    }

    /// The message as the host displays it.
    ///
    /// Stored messages are templates: a single substitution pass turns `{{`
    /// and `}}` back into literal braces. Without a stored message the
    /// summary is rendered instead, e.g. `Num nodes: 2, Node names: a,b`.
    pub fn message(&self) -> String {
        match &self.message {
            Some(message) => message.replace("{{", "{").replace("}}", "}"),
            None => self
                .summary
                .iter()
                .map(|(key, value)| format!("{}: {}", humanize(key), render(value)))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Debug data is only carried over for failed results.
    pub fn to_report(&self) -> ActionReport {
        let debug_data = if self.status.is_success() {
            vec![]
        } else {
            self.debug_data.clone()
        };

        ActionReport {
            status: self.status,
            message: self.message(),
            parameter: self.parameter.clone(),
            data: self.data.clone(),
            summary: self.summary.clone(),
            debug_data,
        }
    }
}

/// Serialized form of an [`ActionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionReport {
    pub status: Status,
    pub message: String,
    pub parameter: Parameters,
    pub data: Vec<Value>,
    pub summary: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debug_data: Vec<Value>,
}

fn humanize(key: &str) -> String {
    let text = key.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}
