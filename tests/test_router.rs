use std::path::Path;

use outpost::config::Config;
use outpost::http::request::{Method, Request, RequestBuilder};
use outpost::http::response::StatusCode;
use outpost::routes;

fn config_for(dir: &Path) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        files_dir: dir.to_path_buf(),
    }
}

fn get(path: &str) -> Request {
    RequestBuilder::new(Method::GET, path).build()
}

#[tokio::test]
async fn test_root_returns_200_with_empty_body() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_unknown_route_returns_404_with_empty_body() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/nonexistent")).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_echo_returns_segment_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/echo/pineapple")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"pineapple".to_vec());
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
}

#[tokio::test]
async fn test_echo_without_segment_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/echo")).await;

    assert_eq!(response.status, StatusCode::BadRequest);
}

#[tokio::test]
async fn test_user_agent_reflects_header() {
    let dir = tempfile::tempdir().unwrap();
    let req = RequestBuilder::new(Method::GET, "/user-agent")
        .header("User-Agent", "foo/1.0")
        .build();

    let response = routes::dispatch(&config_for(dir.path()), &req).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"foo/1.0".to_vec());
}

#[tokio::test]
async fn test_user_agent_missing_header_is_empty_200() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/user-agent")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_files_get_serves_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("report.txt"), b"hello").unwrap();

    let response = routes::dispatch(&config_for(dir.path()), &get("/files/report.txt")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"hello".to_vec());
    assert_eq!(
        response.header("Content-Type"),
        Some("application/octet-stream")
    );
}

#[tokio::test]
async fn test_files_get_missing_file_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/files/missing.txt")).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_files_without_name_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = routes::dispatch(&config_for(dir.path()), &get("/files")).await;

    assert_eq!(response.status, StatusCode::BadRequest);
}

#[tokio::test]
async fn test_files_post_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let req = RequestBuilder::new(Method::POST, "/files/report.txt")
        .body(b"hello".to_vec())
        .build();

    let response = routes::dispatch(&config_for(dir.path()), &req).await;

    assert_eq!(response.status, StatusCode::Created);
    let stored = std::fs::read(dir.path().join("report.txt")).unwrap();
    assert_eq!(stored, b"hello".to_vec());
}

#[tokio::test]
async fn test_files_post_conflict_keeps_first_body() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(dir.path());

    let first = RequestBuilder::new(Method::POST, "/files/report.txt")
        .body(b"first".to_vec())
        .build();
    let second = RequestBuilder::new(Method::POST, "/files/report.txt")
        .body(b"second".to_vec())
        .build();

    assert_eq!(routes::dispatch(&cfg, &first).await.status, StatusCode::Created);
    assert_eq!(routes::dispatch(&cfg, &second).await.status, StatusCode::Created);

    let stored = std::fs::read(dir.path().join("report.txt")).unwrap();
    assert_eq!(stored, b"first".to_vec());
}

#[tokio::test]
async fn test_files_other_method_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let req = RequestBuilder::new(Method::DELETE, "/files/report.txt").build();

    let response = routes::dispatch(&config_for(dir.path()), &req).await;

    assert_eq!(response.status, StatusCode::NotFound);
}
