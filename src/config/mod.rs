//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → env.rs (environment overrides: http_port, MAX_JSON_SIZE,
//!       MAX_RAW_SIZE, RAW_BODY — applied last, then re-validated)
//!     → ServerConfig (immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults, so running with no file and no environment
//!   yields a working server on port 3000
//! - Environment overrides beat file values

pub mod env;
pub mod loader;
pub mod schema;
pub mod size;
pub mod validation;

pub use env::apply_env_overrides;
pub use loader::{load_config, resolve_config, ConfigError};
pub use schema::{BodyLimitConfig, ListenerConfig, ResourceConfig, ServerConfig};
