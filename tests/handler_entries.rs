mod common;

use chrono::Duration;
use serde_json::{Value, json};

async fn shorten(server: &axum_test::TestServer, url: &str, code: &str) {
    server
        .post("/api/shorten")
        .json(&json!({
            "urls": [{ "url": url, "requested_code": code }]
        }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_entries_empty_registry() {
    let ctx = common::create_test_state().await;
    let server = common::test_server(ctx.state);

    let listing: Value = server.get("/api/entries").await.json();

    assert_eq!(listing["total"], 0);
    assert_eq!(listing["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_entries_sorted_most_recent_first() {
    let ctx = common::create_test_state().await;
    let clock = ctx.clock.clone();
    let server = common::test_server(ctx.state);

    shorten(&server, "https://example.com/1", "first1").await;
    clock.advance(Duration::minutes(1));
    shorten(&server, "https://example.com/2", "second").await;
    clock.advance(Duration::minutes(1));
    shorten(&server, "https://example.com/3", "third1").await;

    let listing: Value = server.get("/api/entries").await.json();

    let codes: Vec<&str> = listing["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["third1", "second", "first1"]);
}

#[tokio::test]
async fn test_entries_carry_metadata_and_short_url() {
    let ctx = common::create_test_state().await;
    let server = common::test_server(ctx.state);

    shorten(&server, "https://example.com/page", "abc123").await;

    let listing: Value = server.get("/api/entries").await.json();
    let entry = &listing["items"][0];

    assert_eq!(entry["code"], "abc123");
    assert_eq!(entry["target"], "https://example.com/page");
    assert_eq!(
        entry["short_url"],
        format!("{}/abc123", common::BASE_URL)
    );
    assert_eq!(entry["validity_minutes"], 30);
    assert_eq!(entry["expired"], false);
    assert_eq!(entry["click_count"], 0);
}

#[tokio::test]
async fn test_entries_expired_within_retention_still_listed() {
    let ctx = common::create_test_state().await;
    let clock = ctx.clock.clone();
    let server = common::test_server(ctx.state);

    shorten(&server, "https://example.com", "abc123").await;

    // One hour past expiry, well inside the 24-hour retention window.
    clock.advance(Duration::minutes(30) + Duration::hours(1));

    let listing: Value = server.get("/api/entries").await.json();
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["items"][0]["expired"], true);
}

#[tokio::test]
async fn test_entries_purged_past_retention_and_code_reusable() {
    let ctx = common::create_test_state().await;
    let clock = ctx.clock.clone();
    let server = common::test_server(ctx.state);

    shorten(&server, "https://example.com", "abc123").await;

    clock.advance(Duration::minutes(30) + Duration::hours(24) + Duration::seconds(1));

    let listing: Value = server.get("/api/entries").await.json();
    assert_eq!(listing["total"], 0);

    // The purged code is free again.
    shorten(&server, "https://example.com/new", "abc123").await;

    let listing: Value = server.get("/api/entries").await.json();
    assert_eq!(listing["total"], 1);
    assert_eq!(listing["items"][0]["target"], "https://example.com/new");
}

#[tokio::test]
async fn test_health_reports_entry_count() {
    let ctx = common::create_test_state().await;
    let server = common::test_server(ctx.state);

    let body: Value = server.get("/api/health").await.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["entries"], 0);

    shorten(&server, "https://example.com", "abc123").await;

    let body: Value = server.get("/api/health").await.json();
    assert_eq!(body["entries"], 1);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
