use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The manifest a server publishes: invocable names plus the root widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub widgets: Vec<String>,
    pub listeners: Vec<String>,
    #[serde(rename = "rootWidget")]
    pub root_widget: String,
}

#[derive(Debug, Deserialize)]
struct ManifestEnvelope {
    manifest: Manifest,
}

#[derive(Debug, Deserialize)]
struct WidgetEnvelope {
    widget: Value,
}

/// Typed client for a uibridge server.
///
/// Every call is a POST to the server root; the body shape selects the
/// handler category.
pub struct AppClient {
    client: Client,
    base_url: String,
}

impl AppClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the application manifest.
    pub async fn manifest(&self) -> Result<Manifest, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(&json!({}))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Server returned error status {}: {}", status, text).into());
        }

        let envelope: ManifestEnvelope = serde_json::from_str(&text)?;
        Ok(envelope.manifest)
    }

    /// Render a widget by name.
    pub async fn render_widget(
        &self,
        name: &str,
        data: Value,
        props: Value,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(&json!({ "widget": name, "data": data, "props": props }))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(format!("Server returned error status {}: {}", status, text).into());
        }

        let envelope: WidgetEnvelope = serde_json::from_str(&text)?;
        Ok(envelope.widget)
    }

    /// Invoke a listener action. Success carries no payload.
    pub async fn invoke_action(
        &self,
        name: &str,
        props: Value,
        event: Value,
        api: Value,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let resp = self
            .client
            .post(&self.base_url)
            .json(&json!({ "action": name, "props": props, "event": event, "api": api }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("Server returned error status {}: {}", status, text).into());
        }
        Ok(())
    }

    /// Fetch a static resource. Returns the raw response so callers can
    /// inspect status, content type, and bytes.
    pub async fn fetch_resource(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client
            .post(&self.base_url)
            .json(&json!({ "resource": path }))
            .send()
            .await
    }
}
