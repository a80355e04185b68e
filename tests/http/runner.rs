use crate::{StateFile, TestApp, METRICS};
use f5_bigip_ltm_connector::{run, ActionResult, F5BigipLtmConnector, Host, LocalHost, Status};
use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

/// Keeps everything in memory, standing in for a platform other than `LocalHost`.
#[derive(Default)]
struct MemoryHost {
    state: Value,
    saved: Option<Value>,
    progress: Vec<String>,
    results: Vec<ActionResult>,
}

impl Host for MemoryHost {
    fn save_progress(&mut self, message: &str) {
        self.progress.push(message.to_string());
    }

    fn load_state(&mut self) -> Result<Value, anyhow::Error> {
        Ok(self.state.clone())
    }

    fn save_state(&mut self, state: &Value) -> Result<(), anyhow::Error> {
        self.saved = Some(state.clone());
        Ok(())
    }

    fn add_action_result(&mut self, result: ActionResult) {
        self.results.push(result);
    }

    fn take_results(&mut self) -> Vec<ActionResult> {
        std::mem::take(&mut self.results)
    }

    fn progress(&self) -> &[String] {
        &self.progress
    }
}

#[tokio::test]
async fn run_saves_state_unchanged() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(application.server())
        .await;
    let state = json!({ "app_version": "1.0.0", "cursor": { "last": 42 } });
    let state_file = StateFile::new();
    std::fs::write(state_file.path(), state.to_string()).expect("Failed to write state");
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        application.request("list_pools", vec![json!({})]),
        None,
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Success, report.status);
    assert_eq!(1, report.summary.total_objects);
    assert_eq!(1, report.summary.total_objects_successful);
    assert!(report.action_results[0].debug_data.is_empty());
    let saved: Value = serde_json::from_slice(
        &std::fs::read(state_file.path()).expect("Failed to read state"),
    )
    .expect("Failed to parse state");
    assert_eq!(state, saved);
}

#[tokio::test]
async fn run_creates_empty_state_when_missing() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    let state_file = StateFile::new();
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        application.request("reboot_device", vec![]),
        None,
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Failed, report.status);
    assert_eq!("Unsupported action: reboot_device", report.action_results[0].message);
    let saved: Value = serde_json::from_slice(
        &std::fs::read(state_file.path()).expect("Failed to read state"),
    )
    .expect("Failed to parse state");
    assert_eq!(json!({}), saved);
}

#[tokio::test]
async fn run_handles_each_parameter_set() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/node/web1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "state": "up" })))
        .mount(application.server())
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/node/web2"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "code": 404 })))
        .mount(application.server())
        .await;
    let state_file = StateFile::new();
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        application.request(
            "describe_node",
            vec![json!({ "node_name": "web1" }), json!({ "node_name": "web2" })],
        ),
        None,
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Success, report.status);
    assert_eq!("1 action succeeded. 1 action failed", report.message);
    assert_eq!(2, report.summary.total_objects);
    assert_eq!(1, report.summary.total_objects_successful);
    assert_eq!(Status::Success, report.action_results[0].status);
    assert_eq!(
        json!({ "node_name": "web1" }),
        Value::Object(report.action_results[0].parameter.clone())
    );
    assert_eq!(Status::Failed, report.action_results[1].status);
    assert_eq!(
        r#"Error from server. Status Code: 404 Data from server: {"code":404}"#,
        report.action_results[1].message
    );
}

#[tokio::test]
async fn run_dumps_debug_data_for_failed_results() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    let body = r#"{"code":401,"message":"Authorization failed"}"#;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm"))
        .respond_with(ResponseTemplate::new(401).set_body_raw(body, "application/json"))
        .mount(application.server())
        .await;
    let state_file = StateFile::new();
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        application.request("test_connectivity", vec![]),
        None,
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Failed, report.status);
    let debug_data = &report.action_results[0].debug_data;
    assert!(debug_data.contains(&json!({ "r_status_code": 401 })));
    assert!(debug_data.contains(&json!({ "r_text": body })));
    assert!(debug_data
        .iter()
        .any(|entry| entry["r_headers"]["content-type"] == json!("application/json")));
    assert!(host.take_results().is_empty());
}

#[tokio::test]
async fn run_drives_any_host() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(application.server())
        .await;
    let mut host = MemoryHost {
        state: json!({ "token": "opaque" }),
        ..Default::default()
    };
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        application.request("test_connectivity", vec![]),
        None,
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Success, report.status);
    assert_eq!(Some(json!({ "token": "opaque" })), host.saved);
    assert_eq!(
        Some("Test Connectivity Passed"),
        report.progress.last().map(String::as_str)
    );
}

#[tokio::test]
async fn run_uses_fallback_configuration() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(application.server())
        .await;
    let mut request = application.request("test_connectivity", vec![]);
    request.config = None;
    let state_file = StateFile::new();
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(
        request,
        Some(application.configuration().clone()),
        &mut host,
        &METRICS,
    )
    .await
    .expect("Failed to run action");
    // Assert
    assert_eq!(Status::Success, report.status);
    assert!(report
        .progress
        .contains(&"Test Connectivity Passed".to_string()));
}

#[tokio::test]
async fn run_without_configuration_fails() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    let mut request = application.request("test_connectivity", vec![]);
    request.config = None;
    let state_file = StateFile::new();
    let mut host = LocalHost::new(state_file.path());
    // Act
    let report = run::<F5BigipLtmConnector, _>(request, None, &mut host, &METRICS).await;
    // Assert
    assert!(report.is_err());
}
