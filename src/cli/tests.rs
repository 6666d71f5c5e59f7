//! Tests for the CLI module

use super::*;
use clap::Parser;
use serde_json::json;
use std::io::Write;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users_page(page: u32, total_pages: u32, ids: &[u64]) -> serde_json::Value {
    let data: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "email": format!("user{id}@reqres.in"),
                "first_name": "Emma",
                "last_name": "Wong",
                "avatar": format!("https://reqres.in/img/faces/{id}-image.jpg"),
            })
        })
        .collect();
    json!({
        "page": page,
        "per_page": 2,
        "total": u64::from(total_pages) * 2,
        "total_pages": total_pages,
        "data": data,
    })
}

fn fast_config_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ui:\n  infinite_scroll_delay_ms: 0\n  loading_screen_duration_ms: 0"
    )
    .unwrap();
    file
}

#[test]
fn test_parse_browse() {
    let cli = Cli::try_parse_from([
        "user-directory",
        "browse",
        "--max-pages",
        "3",
        "--retries",
        "2",
        "--no-splash",
    ])
    .unwrap();

    match cli.command {
        Commands::Browse {
            max_pages,
            retries,
            no_splash,
        } => {
            assert_eq!(max_pages, Some(3));
            assert_eq!(retries, 2);
            assert!(no_splash);
        }
        other => panic!("Expected browse, got {other:?}"),
    }
}

#[test]
fn test_parse_fetch_defaults_to_page_one() {
    let cli = Cli::try_parse_from(["user-directory", "fetch"]).unwrap();
    assert!(matches!(cli.command, Commands::Fetch { page: 1 }));
}

#[test]
fn test_global_overrides_apply() {
    let cli = Cli::try_parse_from([
        "user-directory",
        "config",
        "--base-url",
        "http://localhost:9000/api",
        "--timeout-ms",
        "1500",
    ])
    .unwrap();

    let config = Runner::new(cli).load_config().unwrap();
    assert_eq!(config.api.base_url, "http://localhost:9000/api");
    assert_eq!(config.api.timeout_ms, 1500);
}

#[test]
fn test_invalid_override_is_rejected() {
    let cli = Cli::try_parse_from(["user-directory", "config", "--timeout-ms", "0"]).unwrap();
    assert!(Runner::new(cli).load_config().is_err());
}

#[tokio::test]
async fn test_browse_reads_every_page() {
    let mock_server = MockServer::start().await;
    for page in 1..=3 {
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(users_page(page, 3, &[u64::from(page) * 2 - 1, u64::from(page) * 2])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config = fast_config_file();
    let cli = Cli::try_parse_from([
        "user-directory".to_string(),
        "--config".to_string(),
        config.path().display().to_string(),
        "--base-url".to_string(),
        mock_server.uri(),
        "browse".to_string(),
        "--no-splash".to_string(),
    ])
    .unwrap();

    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_browse_respects_page_limit() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(1, 5, &[1, 2])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_page(2, 5, &[3, 4])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = fast_config_file();
    let cli = Cli::try_parse_from([
        "user-directory".to_string(),
        "--config".to_string(),
        config.path().display().to_string(),
        "--base-url".to_string(),
        mock_server.uri(),
        "browse".to_string(),
        "--no-splash".to_string(),
        "--max-pages".to_string(),
        "2".to_string(),
    ])
    .unwrap();

    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_browse_fails_after_retries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let config = fast_config_file();
    let cli = Cli::try_parse_from([
        "user-directory".to_string(),
        "--config".to_string(),
        config.path().display().to_string(),
        "--base-url".to_string(),
        mock_server.uri(),
        "browse".to_string(),
        "--no-splash".to_string(),
        "--retries".to_string(),
        "1".to_string(),
    ])
    .unwrap();

    let err = Runner::new(cli).run().await.unwrap_err();
    assert_eq!(err.to_string(), "API Error: 500 - Internal Server Error");
}
