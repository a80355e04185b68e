use crate::{TestApp, PASSWORD, USERNAME};
use f5_bigip_ltm_connector::{ActionResult, LtmClient, Payload, RequestOptions};
use serde_json::json;
use std::collections::HashMap;
use wiremock::{
    matchers::{basic_auth, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn call_sends_query_parameters() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/node"))
        .and(query_param("expandSubcollections", "true"))
        .and(query_param("$top", "5"))
        .and(basic_auth(USERNAME, PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(application.server())
        .await;
    let client = LtmClient::new(application.configuration()).expect("Failed to build client");
    let options = RequestOptions {
        query: Some(vec![
            ("expandSubcollections".to_string(), "true".to_string()),
            ("$top".to_string(), "5".to_string()),
        ]),
        json: None,
    };
    // Act
    let outcome = client
        .call("/mgmt/tm/ltm/node", "GET", options, &mut ActionResult::default())
        .await;
    // Assert
    assert_eq!(Ok(Payload::Json(json!({ "items": [] }))), outcome);
}

#[tokio::test]
async fn call_without_query_sends_bare_path() {
    // Arrange
    let application = TestApp::spawn(HashMap::new()).await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool"))
        .and(query_param("expandSubcollections", "true"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(application.server())
        .await;
    Mock::given(method("GET"))
        .and(path("/mgmt/tm/ltm/pool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(application.server())
        .await;
    let client = LtmClient::new(application.configuration()).expect("Failed to build client");
    // Act
    let outcome = client
        .call(
            "/mgmt/tm/ltm/pool",
            "GET",
            RequestOptions::default(),
            &mut ActionResult::default(),
        )
        .await;
    // Assert
    assert!(outcome.is_ok());
}
