//! The four-way dispatcher.
//!
//! Exactly one handler map entry is invoked per request. Every failure
//! is isolated to its request: a throwing widget or listener produces a
//! 500 for that caller and nothing else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use crate::app::host::{AppHost, LoadError};
use crate::app::manifest::Manifest;
use crate::config::schema::ResourceConfig;
use crate::dispatch::envelope::RequestEnvelope;
use crate::http::response::{ManifestEnvelope, WidgetEnvelope};
use crate::resource;

/// Dispatch failures, stringified into plain-text response bodies.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No widget found for name {0} in app manifest.")]
    UnknownWidget(String),

    #[error("No listener found for action {0} in app manifest.")]
    UnknownAction(String),

    #[error("No resource found for path {0}.")]
    UnknownResource(String),

    /// A widget or listener function failed.
    #[error("{0}")]
    Handler(String),

    /// The application bundle could not be loaded.
    #[error("{0}")]
    Load(#[from] LoadError),
}

impl DispatchError {
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::UnknownWidget(_)
            | DispatchError::UnknownAction(_)
            | DispatchError::UnknownResource(_) => StatusCode::NOT_FOUND,
            DispatchError::Handler(_) | DispatchError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Route a classified request to its handler and build the response.
pub async fn dispatch(
    host: &AppHost,
    resources: &ResourceConfig,
    envelope: RequestEnvelope,
) -> Response {
    let kind = envelope.kind();
    let result = match envelope {
        RequestEnvelope::Resource { resource: path } => resource::load(resources, &path)
            .await
            .map(|(content_type, bytes)| {
                ([(axum::http::header::CONTENT_TYPE, content_type)], bytes).into_response()
            }),

        RequestEnvelope::Listener {
            action,
            props,
            event,
            api,
        } => invoke_listener(host, &action, props, event, api)
            .await
            .map(|()| StatusCode::OK.into_response()),

        RequestEnvelope::Widget {
            widget,
            data,
            props,
        } => render_widget(host, &widget, data, props)
            .await
            .map(|rendered| Json(WidgetEnvelope { widget: rendered }).into_response()),

        RequestEnvelope::Manifest => fetch_manifest(host)
            .await
            .map(|manifest| Json(ManifestEnvelope { manifest }).into_response()),
    };

    match result {
        Ok(response) => response,
        Err(error) => {
            match error.status() {
                StatusCode::NOT_FOUND => {
                    tracing::warn!(kind, error = %error, "Dispatch target not found")
                }
                _ => tracing::error!(kind, error = %error, "Dispatch failed"),
            }
            error.into_response()
        }
    }
}

/// Render a widget with `(data, props)`.
async fn render_widget(
    host: &AppHost,
    name: &str,
    data: Value,
    props: Value,
) -> Result<Value, DispatchError> {
    let bundle = host.bundle().await?;
    let widget = bundle
        .widgets()
        .get(name)
        .ok_or_else(|| DispatchError::UnknownWidget(name.to_string()))?;

    widget(data, props)
        .await
        .map_err(|e| DispatchError::Handler(e.to_string()))
}

/// Invoke a listener with `(props, event, api)`. Side effects only.
async fn invoke_listener(
    host: &AppHost,
    action: &str,
    props: Value,
    event: Value,
    api: Value,
) -> Result<(), DispatchError> {
    let bundle = host.bundle().await?;
    let listener = bundle
        .listeners()
        .get(action)
        .ok_or_else(|| DispatchError::UnknownAction(action.to_string()))?;

    listener(props, event, api)
        .await
        .map_err(|e| DispatchError::Handler(e.to_string()))
}

async fn fetch_manifest(host: &AppHost) -> Result<Manifest, DispatchError> {
    Ok(host.bundle().await?.manifest().clone())
}
