//! Request classification.
//!
//! # Responsibilities
//! - Decide whether a request dispatches at all (POST only)
//! - Decode the body into the explicit request envelope
//! - Apply the fixed field priority: resource > action > widget > manifest
//!
//! # Design Decisions
//! - Classification is a pure function of method and body bytes
//! - The envelope is a sum type, so the dispatcher's match is exhaustive
//! - Bodies are decoded as JSON regardless of declared content type;
//!   undecodable bodies fall through to a manifest query
//! - A field counts as present when its key exists with a non-null value

use axum::http::Method;
use serde_json::Value;

/// A classified request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEnvelope {
    /// `{ "resource": <path> }` — static file fetch.
    Resource { resource: String },

    /// `{ "action": <name>, "props", "event", "api" }` — listener invoke.
    Listener {
        action: String,
        props: Value,
        event: Value,
        api: Value,
    },

    /// `{ "widget": <name>, "data", "props" }` — widget render.
    Widget {
        widget: String,
        data: Value,
        props: Value,
    },

    /// Anything else — manifest fetch.
    Manifest,
}

impl RequestEnvelope {
    /// Classify a request. Returns `None` for non-POST methods, which
    /// bypass dispatch entirely.
    ///
    /// In raw mode the body is never decoded, so every POST resolves to
    /// a manifest query.
    pub fn classify(method: &Method, body: &[u8], raw_body: bool) -> Option<Self> {
        if method != &Method::POST {
            return None;
        }
        if raw_body {
            return Some(Self::Manifest);
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Some(Self::from_value(value)),
            Err(_) => Some(Self::Manifest),
        }
    }

    fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::Manifest;
        };

        if let Some(resource) = take_present(&mut map, "resource") {
            return Self::Resource {
                resource: name_of(&resource),
            };
        }

        if let Some(action) = take_present(&mut map, "action") {
            return Self::Listener {
                action: name_of(&action),
                props: map.remove("props").unwrap_or(Value::Null),
                event: map.remove("event").unwrap_or(Value::Null),
                api: map.remove("api").unwrap_or(Value::Null),
            };
        }

        if let Some(widget) = take_present(&mut map, "widget") {
            return Self::Widget {
                widget: name_of(&widget),
                data: map.remove("data").unwrap_or(Value::Null),
                props: map.remove("props").unwrap_or(Value::Null),
            };
        }

        Self::Manifest
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resource { .. } => "resource",
            Self::Listener { .. } => "listener",
            Self::Widget { .. } => "widget",
            Self::Manifest => "manifest",
        }
    }
}

fn take_present(map: &mut serde_json::Map<String, Value>, key: &str) -> Option<Value> {
    match map.remove(key) {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Render a dispatch-field value to the name used for lookup. Non-string
/// values become their JSON text and fail the lookup downstream, the
/// same not-found path a junk name takes.
fn name_of(value: &Value) -> String {
    match value.as_str() {
        Some(name) => name.to_string(),
        None => value.to_string(),
    }
}
