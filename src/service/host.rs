use crate::{algebra::Host, domain::ActionResult};
use anyhow::Context;
use serde_json::{Map, Value};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Stand-in for the hosting platform when the connector runs on its own.
///
/// State lives in a JSON file, progress goes to `tracing` and is kept for the
/// run report, and action results are collected in order.
#[derive(Debug, Default)]
pub struct LocalHost {
    state_path: PathBuf,
    progress: Vec<String>,
    results: Vec<ActionResult>,
}

impl LocalHost {
    pub fn new(state_path: impl Into<PathBuf>) -> Self {
        Self {
            state_path: state_path.into(),
            ..Default::default()
        }
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

}

impl Host for LocalHost {
    fn save_progress(&mut self, message: &str) {
        tracing::info!("{}", message);
        self.progress.push(message.to_string());
    }

    fn load_state(&mut self) -> Result<Value, anyhow::Error> {
        match fs::read(&self.state_path) {
            Ok(bytes) => serde_json::from_slice(&bytes).with_context(|| {
                format!("Failed to parse state file {}", self.state_path.display())
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Value::Object(Map::new())),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to read state file {}", self.state_path.display())
            }),
        }
    }

    fn save_state(&mut self, state: &Value) -> Result<(), anyhow::Error> {
        let contents = serde_json::to_vec_pretty(state)?;
        fs::write(&self.state_path, contents)
            .with_context(|| format!("Failed to write state file {}", self.state_path.display()))
    }

    /// Failed results get their recorded replies dumped to the log.
    fn add_action_result(&mut self, result: ActionResult) {
        if !result.status().is_success() {
            tracing::warn!("Action failed: {}", result.message());
            for entry in result.debug_data() {
                tracing::warn!("Debug data: {}", entry);
            }
        }
        self.results.push(result);
    }

    fn take_results(&mut self) -> Vec<ActionResult> {
        std::mem::take(&mut self.results)
    }

    fn progress(&self) -> &[String] {
        &self.progress
    }
}
