//! Environment variable overrides.
//!
//! Applied after file loading, so the environment always wins. The
//! variable names are the server's published interface and are matched
//! exactly, including the lowercase `http_port`.

use crate::config::schema::ServerConfig;

/// `http_port` — listener port override.
pub const ENV_HTTP_PORT: &str = "http_port";
/// `MAX_JSON_SIZE` — JSON-mode body limit override.
pub const ENV_MAX_JSON_SIZE: &str = "MAX_JSON_SIZE";
/// `MAX_RAW_SIZE` — raw-mode body limit override.
pub const ENV_MAX_RAW_SIZE: &str = "MAX_RAW_SIZE";
/// `RAW_BODY` — "true" switches to raw body handling.
pub const ENV_RAW_BODY: &str = "RAW_BODY";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut ServerConfig) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

/// Apply overrides from an arbitrary variable source.
///
/// Separated from the process environment so tests can inject values
/// without mutating global state.
pub fn apply_overrides_from<F>(config: &mut ServerConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup(ENV_HTTP_PORT) {
        match port.parse::<u16>() {
            Ok(port) => config.listener.port = port,
            Err(_) => {
                tracing::warn!(value = %port, "Ignoring unparseable {} override", ENV_HTTP_PORT);
            }
        }
    }

    if let Some(size) = lookup(ENV_MAX_JSON_SIZE) {
        config.limits.max_json_size = size;
    }

    if let Some(size) = lookup(ENV_MAX_RAW_SIZE) {
        config.limits.max_raw_size = size;
    }

    if let Some(raw) = lookup(ENV_RAW_BODY) {
        config.limits.raw_body = raw.eq_ignore_ascii_case("true");
    }
}
