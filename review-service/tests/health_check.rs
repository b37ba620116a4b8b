mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn version_endpoint_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/version", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn ping_returns_pong() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ping", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.expect("Failed to read body"), "pong");
}

#[tokio::test]
async fn index_returns_greeting() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("consistency checker"), "unexpected greeting: {}", body);
}

#[tokio::test]
async fn supplied_request_id_is_echoed() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ping", app.address))
        .header("x-request-id", "abc123def456")
        .send()
        .await
        .expect("Failed to execute request");

    let echoed = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Invalid header value");
    assert_eq!(echoed, "abc123def456");
}

#[tokio::test]
async fn missing_request_id_is_generated() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ping", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let generated = response
        .headers()
        .get("x-request-id")
        .expect("Missing x-request-id header")
        .to_str()
        .expect("Invalid header value");
    assert_eq!(generated.len(), 12);
    assert!(generated.chars().all(|c| c.is_ascii_hexdigit()));
}
