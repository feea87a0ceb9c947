//! Response body envelopes.
//!
//! Success payloads are wrapped under a single key so the remote UI can
//! tell response categories apart without out-of-band state.

use serde::Serialize;
use serde_json::Value;

use crate::app::manifest::Manifest;

/// Manifest fetch response: `{"manifest": {...}}`.
#[derive(Debug, Serialize)]
pub struct ManifestEnvelope {
    pub manifest: Manifest,
}

/// Widget render response: `{"widget": <result>}`.
#[derive(Debug, Serialize)]
pub struct WidgetEnvelope {
    pub widget: Value,
}
