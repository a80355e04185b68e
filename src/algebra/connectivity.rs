use super::{F5BigipLtmConnector, Handled, Host, Method, RequestOptions};
use crate::domain::{ActionResult, Endpoint};

impl F5BigipLtmConnector {
    pub(crate) async fn test_connectivity(
        &self,
        result: &mut ActionResult,
        host: &mut dyn Host,
    ) -> Handled {
        host.save_progress("Querying info about F5 BIG-IP LTM instance to test connectivity");

        let outcome = self
            .client()
            .execute(
                &Endpoint::Ltm.to_string(),
                Method::Get,
                RequestOptions::default(),
                result,
            )
            .await;

        match outcome {
            Ok(_) => {
                host.save_progress("Test Connectivity Passed");
                Ok(None)
            }
            Err(e) => {
                host.save_progress("Test Connectivity Failed.");
                Err(e)
            }
        }
    }
}
