mod cycle;
mod request;

use test_helpers::spawn_app;

#[tokio::test]
async fn fetches_user_document() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = app.client.fetch_api(&app.address("/api/user"), None).await?;
    assert_eq!(body, serde_json::json!({ "data": { "id": 1 } }));

    Ok(())
}

#[tokio::test]
async fn free_function_uses_strict_defaults() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let body = fetcher::fetch_api(&app.address("/api/user"), None).await?;
    assert_eq!(body["data"]["id"], 1);

    let result = fetcher::fetch_api(&app.address("/api/fail"), None).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "HTTP error! status: 500"
    );

    Ok(())
}

#[tokio::test]
async fn session_reports_current_user() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let key = app.key("/api/session");

    let user: Option<fetcher::CurrentUser> = app.client.fetch_data(&key).await?;
    assert_eq!(user.as_ref(), Some(app.state.user()));
    assert_eq!(
        user.as_ref().and_then(|u| u.primary_email()),
        Some("alice@example.com")
    );

    app.state.set_signed_in(false);
    let user: Option<fetcher::CurrentUser> = app.client.fetch_data(&key).await?;
    assert_eq!(user, None);

    Ok(())
}
