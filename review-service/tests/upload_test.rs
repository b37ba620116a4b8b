mod common;

use common::TestApp;
use reqwest::Client;
use reqwest::multipart;

#[tokio::test]
async fn upload_extracts_paragraphs() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(b"First paragraph.\n\nSecond paragraph.\n".to_vec())
            .file_name("test.txt")
            .mime_str("text/plain")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        serde_json::json!({ "paragraphs": ["First paragraph.", "Second paragraph."] })
    );
}

#[tokio::test]
async fn upload_without_file_field_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let form = multipart::Form::new().text("other", "not the file field");

    let response = client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn upload_preserves_unicode_unescaped() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes("你好，世界\n\n第二段".as_bytes().to_vec())
            .file_name("unicode.txt")
            .mime_str("text/plain")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    // Raw bytes, not the parsed value: non-ASCII must not be escaped.
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("你好，世界"), "escaped output: {}", body);
    assert!(body.contains("第二段"), "escaped output: {}", body);
}

#[tokio::test]
async fn upload_of_unreadable_document_is_a_client_error() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let form = multipart::Form::new().part(
        "file",
        multipart::Part::bytes(vec![0xff, 0xfe, 0xfd])
            .file_name("corrupt.bin")
            .mime_str("application/octet-stream")
            .unwrap(),
    );

    let response = client
        .post(format!("{}/upload", app.address))
        .multipart(form)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Failed to extract document");
}
