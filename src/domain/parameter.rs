use serde::{de, de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::ConnectorError;

/// The raw parameter mapping of one action invocation.
pub type Parameters = Map<String, Value>;

/// Deserializes the raw mapping into an action's typed parameters.
pub fn extract<T: DeserializeOwned>(param: &Parameters) -> Result<T, ConnectorError> {
    serde_json::from_value(Value::Object(param.clone()))
        .map_err(|e| ConnectorError::InvalidParameter(e.to_string()))
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NodeParam {
    pub node_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreateNodeParam {
    pub node_name: String,
    pub partition_name: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddNodeParam {
    pub node_name: String,
    pub partition_name: String,
    pub pool_name: String,
    #[serde(deserialize_with = "port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoveNodeParam {
    pub node_name: String,
    pub pool_name: String,
    #[serde(deserialize_with = "port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CreatePoolParam {
    pub pool_name: String,
    pub partition_name: String,
    #[serde(default)]
    pub pool_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PoolParam {
    pub pool_name: String,
    pub partition_name: String,
}

/// Ports arrive either as JSON numbers or as numeric strings.
fn port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u64),
        Float(f64),
        Text(String),
    }

    let value = match Port::deserialize(deserializer)? {
        Port::Number(n) => n,
        Port::Float(f) if f.fract() == 0.0 && f >= 0.0 => f as u64,
        Port::Float(f) => return Err(de::Error::custom(format!("invalid port: {f}"))),
        Port::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid port: {s}")))?,
    };

    u16::try_from(value).map_err(|_| de::Error::custom(format!("invalid port: {value}")))
}
