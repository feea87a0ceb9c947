//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::size::{parse_size, SizeError};

/// Root configuration for the dispatch server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Request body handling and limits.
    pub limits: BodyLimitConfig,

    /// Static resource settings.
    pub resources: ResourceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ServerConfig {
    /// The socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listener.host, self.listener.port)
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Host to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Request body handling configuration.
///
/// Size fields accept human-readable literals ("100kb", "2mb") or plain
/// byte counts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyLimitConfig {
    /// Maximum body size when bodies are decoded as JSON.
    pub max_json_size: String,

    /// Maximum body size in raw mode.
    pub max_raw_size: String,

    /// When true, bodies are captured as raw bytes and never decoded.
    pub raw_body: bool,
}

impl Default for BodyLimitConfig {
    fn default() -> Self {
        Self {
            max_json_size: default_body_size(),
            max_raw_size: default_body_size(),
            raw_body: false,
        }
    }
}

impl BodyLimitConfig {
    /// The admission limit in bytes for the active body mode.
    pub fn effective_limit(&self) -> Result<usize, SizeError> {
        if self.raw_body {
            parse_size(&self.max_raw_size)
        } else {
            parse_size(&self.max_json_size)
        }
    }
}

fn default_body_size() -> String {
    "100kb".to_string()
}

/// Static resource configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory resource files are served from.
    pub dir: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            dir: "resources".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
