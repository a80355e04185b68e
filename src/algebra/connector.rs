use super::LtmClient;
use crate::{
    domain::{ActionId, ActionResult, ConnectorError, Parameters, Status},
    AssetConfig,
};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Services the hosting platform provides to a connector.
pub trait Host: Send {
    fn save_progress(&mut self, message: &str);
    fn load_state(&mut self) -> Result<Value, anyhow::Error>;
    fn save_state(&mut self, state: &Value) -> Result<(), anyhow::Error>;
    fn add_action_result(&mut self, result: ActionResult);
    /// Hands over the results collected so far, leaving none behind.
    fn take_results(&mut self) -> Vec<ActionResult>;
    fn progress(&self) -> &[String];
}

/// Lifecycle the host drives: initialize once, handle actions, finalize once.
#[async_trait]
pub trait Connector: Sized + Send + Sync {
    fn initialize(config: &AssetConfig, host: &mut dyn Host) -> Result<Self, anyhow::Error>;

    async fn handle_action(
        &self,
        action: ActionId,
        param: Parameters,
        host: &mut dyn Host,
    ) -> ActionResult;

    fn finalize(self, host: &mut dyn Host) -> Result<(), anyhow::Error>;
}

/// What a handler reports on success: an optional status message.
pub(crate) type Handled = Result<Option<&'static str>, ConnectorError>;

#[derive(Debug)]
pub struct F5BigipLtmConnector {
    client: LtmClient,
    state: Value,
}

impl F5BigipLtmConnector {
    pub fn client(&self) -> &LtmClient {
        &self.client
    }

    pub fn state(&self) -> &Value {
        &self.state
    }
}

#[async_trait]
impl Connector for F5BigipLtmConnector {
    fn initialize(config: &AssetConfig, host: &mut dyn Host) -> Result<Self, anyhow::Error> {
        let state = host.load_state()?;
        let client = LtmClient::new(config)?;

        info!("Initialized connector for {}", client.base_url());

        Ok(Self { client, state })
    }

    #[tracing::instrument(name = "F5BigipLtmConnector handle_action", skip(self, param, host))]
    async fn handle_action(
        &self,
        action: ActionId,
        param: Parameters,
        host: &mut dyn Host,
    ) -> ActionResult {
        host.save_progress(&format!("In action handler for: {action}"));
        debug!("action_id {}", action);

        let mut result = ActionResult::new(param.clone());

        let handled = match action {
            ActionId::TestConnectivity => self.test_connectivity(&mut result, host).await,
            ActionId::CreatePool => self.create_pool(&param, &mut result).await,
            ActionId::ListPools => self.list_pools(&mut result).await,
            ActionId::ListMembers => self.list_members(&param, &mut result).await,
            ActionId::CreateNode => self.create_node(&param, &mut result).await,
            ActionId::DeleteNode => self.delete_node(&param, &mut result).await,
            ActionId::AddNode => self.add_node(&param, &mut result).await,
            ActionId::RemoveNode => self.remove_node(&param, &mut result).await,
            ActionId::EnableNode => self.enable_node(&param, &mut result).await,
            ActionId::DisableNode => self.disable_node(&param, &mut result).await,
            ActionId::DescribeNode => self.describe_node(&param, &mut result).await,
            ActionId::ListNodes => self.list_nodes(&mut result).await,
        };

        match handled {
            Ok(message) => result.set_status(Status::Success, message.map(str::to_string)),
            Err(e) => {
                info!("Action {} failed: {}", action, e);
                result.set_status(Status::Failed, Some(e.to_string()));
            }
        }

        result
    }

    fn finalize(self, host: &mut dyn Host) -> Result<(), anyhow::Error> {
        host.save_state(&self.state)
    }
}
