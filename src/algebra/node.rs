use super::{F5BigipLtmConnector, Handled, Method, RequestOptions};
use crate::domain::{
    extract, ActionResult, AddNodeParam, CreateNodeParam, Endpoint, NodeParam, Parameters,
    RemoveNodeParam,
};
use serde_json::{json, Value};

const USER_ENABLED: &str = "user-enabled";
const USER_DISABLED: &str = "user-disabled";

impl F5BigipLtmConnector {
    pub(crate) async fn create_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: CreateNodeParam = extract(param)?;
        let body = json!({
            "name": param.node_name,
            "partition": param.partition_name,
            "address": param.ip_address,
        });

        let response = self
            .client()
            .execute(
                &Endpoint::Nodes.to_string(),
                Method::Post,
                RequestOptions::json(body),
                result,
            )
            .await?;

        let name = response.field("name")?.clone();
        result.add_data(response.into_value());
        result.update_summary("node_name", name);

        Ok(Some("Node successfully created"))
    }

    pub(crate) async fn delete_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: NodeParam = extract(param)?;

        self.client()
            .execute(
                &Endpoint::Node(&param.node_name).to_string(),
                Method::Delete,
                RequestOptions::default(),
                result,
            )
            .await?;

        result.add_data(json!({}));
        result.update_summary("node_name", param.node_name);

        Ok(Some("Successfully deleted node"))
    }

    /// Adds `/{partition}/{node}:{port}` as a member of the pool.
    pub(crate) async fn add_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: AddNodeParam = extract(param)?;
        let member = format!(
            "/{}/{}:{}",
            param.partition_name, param.node_name, param.port
        );

        let response = self
            .client()
            .execute(
                &Endpoint::PoolMembers(&param.pool_name).to_string(),
                Method::Post,
                RequestOptions::json(json!({ "name": member })),
                result,
            )
            .await?;

        let name = response.field("name")?.clone();
        result.add_data(response.into_value());
        result.update_summary("node_name", name);
        result.update_summary("port", param.port);
        result.update_summary("pool_name", param.pool_name);

        Ok(Some("Node successfully added to pool"))
    }

    pub(crate) async fn remove_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: RemoveNodeParam = extract(param)?;
        let endpoint = Endpoint::PoolMember {
            pool: &param.pool_name,
            node: &param.node_name,
            port: param.port,
        };

        self.client()
            .execute(
                &endpoint.to_string(),
                Method::Delete,
                RequestOptions::default(),
                result,
            )
            .await?;

        result.add_data(json!({}));
        result.update_summary("node_name", param.node_name);
        result.update_summary("port", param.port);
        result.update_summary("pool_name", param.pool_name);

        Ok(Some("Node successfully removed from pool"))
    }

    pub(crate) async fn enable_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        self.set_session(param, USER_ENABLED, result).await?;
        Ok(Some("Successfully enabled node"))
    }

    pub(crate) async fn disable_node(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        self.set_session(param, USER_DISABLED, result).await?;
        Ok(Some("Successfully disabled node"))
    }

    async fn set_session(
        &self,
        param: &Parameters,
        session: &str,
        result: &mut ActionResult,
    ) -> Handled {
        let param: NodeParam = extract(param)?;

        let response = self
            .client()
            .execute(
                &Endpoint::Node(&param.node_name).to_string(),
                Method::Patch,
                RequestOptions::json(json!({ "session": session })),
                result,
            )
            .await?;

        result.add_data(response.into_value());
        result.update_summary("node_name", param.node_name);

        Ok(None)
    }

    pub(crate) async fn describe_node(
        &self,
        param: &Parameters,
        result: &mut ActionResult,
    ) -> Handled {
        let param: NodeParam = extract(param)?;

        let response = self
            .client()
            .execute(
                &Endpoint::Node(&param.node_name).to_string(),
                Method::Get,
                RequestOptions::default(),
                result,
            )
            .await?;

        let state = response.field("state")?.clone();
        result.add_data(response.into_value());
        result.update_summary("state", state);

        Ok(None)
    }

    pub(crate) async fn list_nodes(&self, result: &mut ActionResult) -> Handled {
        let response = self
            .client()
            .execute(
                &Endpoint::Nodes.to_string(),
                Method::Get,
                RequestOptions::default(),
                result,
            )
            .await?;

        let names = fan_out(response.items(), result);
        result.update_summary("num_nodes", result.data().len());
        result.update_summary("node_names", names.join(","));

        Ok(None)
    }
}

/// Adds every item as its own data fragment and returns the names found along the way.
pub(crate) fn fan_out(items: Vec<Value>, result: &mut ActionResult) -> Vec<String> {
    let mut names = vec![];

    for item in items {
        if let Some(name) = item.get("name").and_then(Value::as_str) {
            names.push(name.to_string());
        }
        result.add_data(item);
    }

    names
}
