//! Integration tests for body limits, raw mode, and bundle load failures.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::json;
use uibridge::app::AppHost;
use uibridge::config::ServerConfig;

mod common;

#[tokio::test]
async fn test_body_over_limit_is_rejected() {
    let mut config = ServerConfig::default();
    config.limits.max_json_size = "1kb".to_string();

    let bundle = common::stub_bundle(Default::default());
    let (addr, shutdown) = common::start_server(config, AppHost::preloaded(bundle)).await;

    let oversized = json!({"widget": "echo", "data": "x".repeat(4096)});
    let res = reqwest::Client::new()
        .post(format!("http://{}", addr))
        .json(&oversized)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 413);

    shutdown.trigger();
}

#[tokio::test]
async fn test_body_under_limit_passes() {
    let mut config = ServerConfig::default();
    config.limits.max_json_size = "1kb".to_string();

    let bundle = common::stub_bundle(Default::default());
    let (addr, shutdown) = common::start_server(config, AppHost::preloaded(bundle)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}", addr))
        .json(&json!({"widget": "greeting"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_raw_mode_never_decodes_bodies() {
    let mut config = ServerConfig::default();
    config.limits.raw_body = true;

    let bundle = common::stub_bundle(Default::default());
    let (addr, shutdown) = common::start_server(config, AppHost::preloaded(bundle)).await;

    // A body that would render a widget in JSON mode serves the manifest.
    let res = reqwest::Client::new()
        .post(format!("http://{}", addr))
        .json(&json!({"widget": "greeting"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("\"manifest\""));

    shutdown.trigger();
}

#[tokio::test]
async fn test_raw_mode_applies_raw_limit() {
    let mut config = ServerConfig::default();
    config.limits.raw_body = true;
    config.limits.max_raw_size = "1kb".to_string();
    config.limits.max_json_size = "1mb".to_string();

    let bundle = common::stub_bundle(Default::default());
    let (addr, shutdown) = common::start_server(config, AppHost::preloaded(bundle)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}", addr))
        .body("x".repeat(4096))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 413);

    shutdown.trigger();
}

#[tokio::test]
async fn test_failed_bundle_load_is_500_and_retried() {
    let healthy = Arc::new(AtomicBool::new(false));
    let flag = healthy.clone();
    let host = AppHost::new(move || {
        let flag = flag.clone();
        async move {
            if flag.load(Ordering::SeqCst) {
                Ok(common::stub_bundle(Default::default()))
            } else {
                Err("bundle exploded".into())
            }
        }
    });

    let (addr, shutdown) = common::start_server(ServerConfig::default(), host).await;
    let url = format!("http://{}", addr);
    let client = reqwest::Client::new();

    // Initialization failure surfaces as a 500 on the request that hit it.
    let res = client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), "bundle exploded");

    // The failure is not cached; widget requests hit it too.
    let res = client
        .post(&url)
        .json(&json!({"widget": "greeting"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);

    // Once the loader recovers, the next request initializes and serves.
    healthy.store(true, Ordering::SeqCst);
    let res = client.post(&url).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("\"manifest\""));

    shutdown.trigger();
}
