//! Shared fixtures for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::net::TcpListener;

use uibridge::app::{AppBundle, AppHost, ListenerHandlers, WidgetHandlers};
use uibridge::config::ServerConfig;
use uibridge::http::HttpServer;
use uibridge::lifecycle::Shutdown;

/// Recorded listener invocations: (props, event, api) per call.
pub type ListenerCalls = Arc<Mutex<Vec<(Value, Value, Value)>>>;

/// Stub application bundle: a greeting widget, an echo widget, a
/// recording listener, and deliberately failing handlers of each kind.
#[allow(dead_code)]
pub fn stub_bundle(calls: ListenerCalls) -> AppBundle {
    let mut widgets = WidgetHandlers::new();

    widgets.register("greeting", |_data, props| async move {
        let name = props
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("world")
            .to_string();
        Ok(json!({ "text": format!("Hello, {}", name) }))
    });

    widgets.register("echo", |data, props| async move {
        Ok(json!({ "data": data, "props": props }))
    });

    widgets.register("broken", |_, _| async { Err("widget exploded".into()) });

    let mut listeners = ListenerHandlers::new();

    let record = calls.clone();
    listeners.register("record", move |props, event, api| {
        let record = record.clone();
        async move {
            record.lock().unwrap().push((props, event, api));
            Ok(())
        }
    });

    listeners.register("broken", |_, _, _| async { Err("listener exploded".into()) });

    AppBundle::new(widgets, listeners, "greeting")
}

/// Start a server on an ephemeral port; returns its address and the
/// shutdown handle that stops it.
pub async fn start_server(config: ServerConfig, host: AppHost) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config, Arc::new(host)).unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Start a server around the stub bundle with default configuration.
#[allow(dead_code)]
pub async fn start_stub_server() -> (String, ListenerCalls, Shutdown) {
    let calls: ListenerCalls = Arc::new(Mutex::new(Vec::new()));
    let bundle = stub_bundle(calls.clone());
    let (addr, shutdown) =
        start_server(ServerConfig::default(), AppHost::preloaded(bundle)).await;
    (format!("http://{}", addr), calls, shutdown)
}
