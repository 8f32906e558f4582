use fetcher::{
    FetchClient, FetchCycle, GenerationCounter, Phase, RequestKey,
};
use serde_json::{Value, json};
use tokio::sync::mpsc;

use test_helpers::spawn_app;

/// Run one full cycle the way the UI hook does: begin, await, settle.
async fn run_cycle(
    client: &FetchClient,
    counter: &GenerationCounter,
    cycle: &mut FetchCycle<Value>,
    key: &RequestKey,
) {
    let generation = counter.next();
    cycle.begin(generation);
    assert!(cycle.is_loading());

    let outcome = client.fetch_data(key).await.map_err(|e| e.to_string());
    assert!(cycle.settle(generation, outcome));
    assert!(!cycle.is_loading());
}

#[tokio::test]
async fn successful_cycle_stores_payload() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::new();

    run_cycle(&app.client, &counter, &mut cycle, &app.key("/api/user")).await;

    assert_eq!(cycle.phase(), Phase::Succeeded);
    assert_eq!(cycle.data(), Some(&json!({ "id": 1 })));
    assert_eq!(cycle.error(), None);

    Ok(())
}

#[tokio::test]
async fn error_status_cycle_reports_message() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::new();

    run_cycle(&app.client, &counter, &mut cycle, &app.key("/api/fail")).await;

    assert_eq!(cycle.phase(), Phase::Failed);
    assert_eq!(cycle.data(), None);
    assert_eq!(cycle.error(), Some("HTTP error! status: 500"));

    Ok(())
}

#[tokio::test]
async fn malformed_body_cycle_reports_parse_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::new();

    run_cycle(&app.client, &counter, &mut cycle, &app.key("/api/not-json"))
        .await;

    assert_eq!(cycle.data(), None);
    let error = cycle.error().expect("cycle should have failed");
    assert!(error.contains("Failed to parse response as JSON"));

    Ok(())
}

#[tokio::test]
async fn loading_spans_the_whole_request() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::<Value>::new();

    let generation = counter.next();
    cycle.begin(generation);

    let client = app.client.clone();
    let key = app.key("/api/slow/50");
    let request = tokio::spawn(async move {
        client.fetch_data::<Value>(&key).await.map_err(|e| e.to_string())
    });

    // Still in flight.
    assert!(cycle.is_loading());
    assert_eq!(cycle.phase(), Phase::Loading);

    let outcome = request.await?;
    cycle.settle(generation, outcome);
    assert!(!cycle.is_loading());
    assert_eq!(cycle.data(), Some(&json!({ "delay_ms": 50 })));

    Ok(())
}

#[tokio::test]
async fn refetch_repeats_the_cycle() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::new();
    let key = app.key("/api/counter");

    run_cycle(&app.client, &counter, &mut cycle, &key).await;
    assert_eq!(cycle.data(), Some(&json!({ "count": 1 })));

    run_cycle(&app.client, &counter, &mut cycle, &key).await;
    assert_eq!(cycle.data(), Some(&json!({ "count": 2 })));
    assert_eq!(app.state.counter_hits(), 2);

    Ok(())
}

#[tokio::test]
async fn refetch_can_clear_an_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::new();
    let key = app.key("/api/flaky");

    run_cycle(&app.client, &counter, &mut cycle, &key).await;
    assert_eq!(cycle.error(), Some("HTTP error! status: 503"));
    assert_eq!(cycle.data(), None);

    run_cycle(&app.client, &counter, &mut cycle, &key).await;
    assert_eq!(cycle.error(), None);
    assert_eq!(cycle.data(), Some(&json!({ "call": 2 })));

    Ok(())
}

#[tokio::test]
async fn slow_earlier_request_does_not_overwrite_newer_one() -> anyhow::Result<()>
{
    let app = spawn_app().await;
    let counter = GenerationCounter::default();
    let mut cycle = FetchCycle::<Value>::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    for path in ["/api/slow/300", "/api/slow/10"] {
        let generation = counter.next();
        cycle.begin(generation);

        let client = app.client.clone();
        let key = app.key(path);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome =
                client.fetch_data::<Value>(&key).await.map_err(|e| e.to_string());
            let _ = tx.send((generation, outcome));
        });
    }
    drop(tx);

    // Settle in completion order: the fast, newer request lands first.
    let mut applied = Vec::new();
    while let Some((generation, outcome)) = rx.recv().await {
        applied.push(cycle.settle(generation, outcome));
    }

    assert_eq!(applied, vec![true, false]);
    assert_eq!(cycle.data(), Some(&json!({ "delay_ms": 10 })));
    assert!(!cycle.is_loading());

    Ok(())
}
