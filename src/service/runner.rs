use crate::{
    algebra::{Connector, Host, Metrics},
    domain::{ActionId, ActionReport, ActionResult, Parameters, Status},
    AssetConfig,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One invocation as handed over by the host platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub identifier: String,
    /// Asset configuration; the runner falls back to the environment when absent.
    #[serde(default)]
    pub config: Option<AssetConfig>,
    #[serde(default)]
    pub parameters: Vec<Parameters>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_objects: usize,
    pub total_objects_successful: usize,
}

/// Everything the host would persist about one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub identifier: String,
    pub status: Status,
    pub message: String,
    pub summary: RunSummary,
    pub action_results: Vec<ActionReport>,
    pub progress: Vec<String>,
}

/// Drives `C` through initialize, one action per parameter set, and finalize.
///
/// Lifecycle failures (configuration, state file) are errors; action failures
/// are reported in the returned [`RunReport`].
pub async fn run<C: Connector, H: Host>(
    request: ActionRequest,
    fallback: Option<AssetConfig>,
    host: &mut H,
    metrics: &Metrics,
) -> Result<RunReport, anyhow::Error> {
    let config = request
        .config
        .clone()
        .or(fallback)
        .context("No asset configuration in the request or the environment")?;

    let connector = C::initialize(&config, host)?;

    let parameters = if request.parameters.is_empty() {
        vec![Parameters::new()]
    } else {
        request.parameters.clone()
    };

    for param in parameters {
        let result = match request.identifier.parse::<ActionId>() {
            Ok(action) => connector.handle_action(action, param, host).await,
            Err(e) => {
                warn!("{}", e);
                let mut result = ActionResult::new(param);
                result.set_status(Status::Failed, Some(e.to_string()));
                result
            }
        };
        host.add_action_result(result);
    }

    connector.finalize(host)?;

    let action_results = host
        .take_results()
        .iter()
        .map(ActionResult::to_report)
        .collect::<Vec<_>>();
    let successful = action_results
        .iter()
        .filter(|report| report.status.is_success())
        .count();
    let failed = action_results.len() - successful;
    metrics.add_succeeded(successful as u64);
    metrics.add_failed(failed as u64);
    let status = if successful > 0 {
        Status::Success
    } else {
        Status::Failed
    };

    info!(
        "Action {} finished with {} successful and {} failed results",
        request.identifier, successful, failed
    );

    Ok(RunReport {
        identifier: request.identifier,
        status,
        message: format!("{successful} action succeeded. {failed} action failed"),
        summary: RunSummary {
            total_objects: action_results.len(),
            total_objects_successful: successful,
        },
        action_results,
        progress: host.progress().to_vec(),
    })
}
