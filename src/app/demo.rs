//! Built-in demo application.
//!
//! Served by the default binary so the server does something useful out
//! of the box; real deployments construct their own bundle and host.

use serde_json::{json, Value};

use crate::app::bundle::AppBundle;
use crate::app::handlers::{ListenerHandlers, WidgetHandlers};

/// Build the demo bundle: a greeting widget, an echo widget, and a
/// logging listener.
pub fn bundle() -> AppBundle {
    let mut widgets = WidgetHandlers::new();

    widgets.register("greeting", |_data, props| async move {
        let name = props
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("world")
            .to_string();
        Ok(json!({ "text": format!("Hello, {}!", name) }))
    });

    widgets.register("echo", |data, props| async move {
        Ok(json!({ "data": data, "props": props }))
    });

    let mut listeners = ListenerHandlers::new();

    listeners.register("log", |props, event, _api| async move {
        tracing::info!(props = %props, event = %event, "Demo listener invoked");
        Ok(())
    });

    AppBundle::new(widgets, listeners, "greeting")
}
