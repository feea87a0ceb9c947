//! Application hosting subsystem.
//!
//! # Data Flow
//! ```text
//! application loader (async, supplied at startup)
//!     → host.rs (run once on first demand, cached for process lifetime)
//!     → bundle.rs (handler maps + manifest, computed at construction)
//!     → handlers.rs (name → function lookup at dispatch time)
//!     → manifest.rs (the only part clients ever see)
//! ```
//!
//! # Design Decisions
//! - Handler functions run with full trust; failures are isolated
//!   per-request by the dispatcher, never cached
//! - The bundle is immutable after loading

pub mod bundle;
pub mod demo;
pub mod handlers;
pub mod host;
pub mod manifest;

pub use bundle::AppBundle;
pub use handlers::{BoxError, ListenerFn, ListenerHandlers, WidgetFn, WidgetHandlers};
pub use host::{AppHost, AppLoader, LoadError};
pub use manifest::Manifest;
