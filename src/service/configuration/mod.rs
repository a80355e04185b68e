mod telemetry;

pub use telemetry::*;

use envconfig::Envconfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;

/// Connection settings of one BIG-IP LTM asset.
#[derive(Clone, Envconfig, Deserialize, PartialEq, Eq)]
pub struct AssetConfig {
    #[envconfig(from = "LTM_BASE_URL")]
    /// Management URL of the device, e.g. `https://10.1.1.4`
    base_url: String,
    #[envconfig(from = "LTM_USERNAME")]
    username: String,
    #[envconfig(from = "LTM_PASSWORD")]
    password: String,
    #[envconfig(from = "LTM_VERIFY_SERVER_CERT", default = "false")]
    #[serde(default)]
    verify_server_cert: bool,
}

impl Debug for AssetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("verify_server_cert", &self.verify_server_cert)
            .finish()
    }
}

impl AssetConfig {
    pub fn new(base_url: &str, username: &str, password: &str, verify_server_cert: bool) -> Self {
        Self {
            base_url: base_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            verify_server_cert,
        }
    }

    /// The base URL without a trailing slash, ready for endpoint paths to be appended.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn verify_server_cert(&self) -> bool {
        self.verify_server_cert
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        // dotenv().ok() is already called in the main.rs
        AssetConfig::init_from_env()
    }
}

impl From<HashMap<&str, &str>> for AssetConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let base_url = value
            .get("LTM_BASE_URL")
            .unwrap_or(&"https://localhost")
            .to_string();
        let username = value.get("LTM_USERNAME").unwrap_or(&"admin").to_string();
        let password = value.get("LTM_PASSWORD").unwrap_or(&"admin").to_string();
        let verify_server_cert = value
            .get("LTM_VERIFY_SERVER_CERT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(false);

        Self {
            base_url,
            username,
            password,
            verify_server_cert,
        }
    }
}

/// Settings of the local runner that stands in for the host platform.
#[derive(Clone, Envconfig, Debug)]
pub struct RunnerConfig {
    #[envconfig(from = "STATE_PATH", default = "f5bigipltm_state.json")]
    /// Where the connector state blob is kept between runs
    state_path: PathBuf,
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    /// Filter used when `RUST_LOG` is not set
    log_level: String,
}

impl RunnerConfig {
    pub fn state_path(&self) -> &PathBuf {
        &self.state_path
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        RunnerConfig::init_from_env()
    }
}

impl From<HashMap<&str, &str>> for RunnerConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let state_path = value
            .get("STATE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("f5bigipltm_state.json"));
        let log_level = value.get("LOG_LEVEL").unwrap_or(&"info").to_string();

        Self {
            state_path,
            log_level,
        }
    }
}
