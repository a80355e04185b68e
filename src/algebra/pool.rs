use super::{fan_out, F5BigipLtmConnector, Handled, Method, RequestOptions};
use crate::domain::{extract, ActionResult, CreatePoolParam, Endpoint, Parameters, PoolParam};
use serde_json::{json, Value};

impl F5BigipLtmConnector {
    pub(crate) async fn create_pool(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: CreatePoolParam = extract(param)?;
        let description = param.pool_description.filter(|d| !d.is_empty());

        let mut body = json!({
            "name": param.pool_name,
            "partition": param.partition_name,
        });
        if let Some(description) = &description {
            body["description"] = Value::String(description.clone());
        }

        let response = self
            .client()
            .execute(
                &Endpoint::Pools.to_string(),
                Method::Post,
                RequestOptions::json(body),
                result,
            )
            .await?;

        result.add_data(response.into_value());
        result.update_summary("pool_name", param.pool_name);
        result.update_summary("partition", param.partition_name);
        result.update_summary("pool_description", description);

        Ok(Some("Successfully created pool"))
    }

    pub(crate) async fn list_pools(&self, result: &mut ActionResult) -> Handled {
        let response = self
            .client()
            .execute(
                &Endpoint::Pools.to_string(),
                Method::Get,
                RequestOptions::default(),
                result,
            )
            .await?;

        let names = fan_out(response.items(), result);
        result.update_summary("num_pools", result.data().len());
        result.update_summary("pools", names.join(","));

        Ok(None)
    }

    pub(crate) async fn list_members(&self, param: &Parameters, result: &mut ActionResult) -> Handled {
        let param: PoolParam = extract(param)?;
        let endpoint = Endpoint::PartitionPoolMembers {
            partition: &param.partition_name,
            pool: &param.pool_name,
        };

        let response = self
            .client()
            .execute(
                &endpoint.to_string(),
                Method::Get,
                RequestOptions::default(),
                result,
            )
            .await?;

        let members = fan_out(response.items(), result);
        result.update_summary("num_members", result.data().len());
        result.update_summary("members", members.join(","));

        Ok(Some("Successfully listed pool members"))
    }
}
