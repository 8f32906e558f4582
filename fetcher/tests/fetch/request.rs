use fetcher::{
    DataPolicy, ErrorKind, FetchConfig, FetchError, HttpMethod,
    RequestOptions, StatusPolicy,
};
use serde::Deserialize;
use serde_json::{Value, json};

use test_helpers::{assert_error_kind, spawn_app};

#[tokio::test]
async fn error_status_fails_under_strict_policy() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.fetch_api(&app.address("/api/fail"), None).await;

    match result {
        Err(FetchError::Http { status }) => assert_eq!(status, 500),
        other => panic!("Expected Http error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn error_status_is_ignored_under_lenient_policy() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = app.lenient_client();

    let body = client.fetch_api(&app.address("/api/fail"), None).await?;
    assert_eq!(body, json!({ "message": "fail" }));

    let body = client.fetch_api(&app.address("/api/not-found"), None).await?;
    assert_eq!(body, json!({ "message": "not found" }));

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let lenient = app.lenient_client();

    assert_error_kind(
        app.client.fetch_api(&app.address("/api/not-json"), None).await,
        ErrorKind::Parse,
    );
    assert_error_kind(
        lenient.fetch_api(&app.address("/api/not-json"), None).await,
        ErrorKind::Parse,
    );
    assert_error_kind(
        lenient.fetch_api(&app.address("/api/broken"), None).await,
        ErrorKind::Parse,
    );

    Ok(())
}

#[tokio::test]
async fn strict_policy_reports_status_before_parsing() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let result = app.client.fetch_api(&app.address("/api/broken"), None).await;
    assert!(matches!(result, Err(FetchError::Http { status: 500 })));

    Ok(())
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() -> anyhow::Result<()> {
    let app = spawn_app().await;

    // Port 9 (discard) on localhost is not served by the mock.
    let result = app.client.fetch_api("http://127.0.0.1:9/api/user", None).await;
    assert_error_kind(result, ErrorKind::Transport);

    Ok(())
}

#[tokio::test]
async fn options_are_sent_with_the_request() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let options = RequestOptions::new()
        .method(HttpMethod::Post)
        .header("X-Request-Source", "tests")
        .json(&json!({ "name": "alice" }))?;

    let body = app
        .client
        .fetch_api(&app.address("/api/echo"), Some(&options))
        .await?;

    let echoed = &body["data"];
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["headers"]["x-request-source"], "tests");
    assert_eq!(echoed["headers"]["content-type"], "application/json");
    assert_eq!(echoed["body"], r#"{"name":"alice"}"#);

    Ok(())
}

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u32,
}

#[tokio::test]
async fn fetch_data_unwraps_the_envelope() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let user: Option<User> =
        app.client.fetch_data(&app.key("/api/user")).await?;
    assert_eq!(user, Some(User { id: 1 }));

    Ok(())
}

#[tokio::test]
async fn missing_data_depends_on_policy() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let data: Option<Value> =
        app.client.fetch_data(&app.key("/api/no-data")).await?;
    assert_eq!(data, None);

    let strict = app.client_with(FetchConfig {
        status_policy: StatusPolicy::Strict,
        data_policy: DataPolicy::Required,
    });
    assert_error_kind(
        strict.fetch_data::<Value>(&app.key("/api/no-data")).await,
        ErrorKind::Schema,
    );

    Ok(())
}

#[tokio::test]
async fn fetch_data_rejects_wrong_shape() -> anyhow::Result<()> {
    let app = spawn_app().await;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Named {
        name: String,
    }

    assert_error_kind(
        app.client.fetch_data::<Named>(&app.key("/api/user")).await,
        ErrorKind::Parse,
    );

    Ok(())
}
