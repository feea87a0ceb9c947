//! One-time application loading.
//!
//! # Responsibilities
//! - Own the application loader supplied at startup
//! - Run it at most once, on first demand
//! - Share a single in-flight load between concurrent first requests
//! - Keep the cell empty on failure so later requests retry
//!
//! # Design Decisions
//! - `tokio::sync::OnceCell` serializes first-call initialization; the
//!   duplicate-load race of naive check-then-set memoization cannot occur
//! - A failed load is not cached: the enclosing request sees the error
//!   and the next request runs the loader again

use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::app::bundle::AppBundle;
use crate::app::handlers::BoxError;

/// The external collaborator: an async constructor for the application.
pub type AppLoader = Box<dyn Fn() -> BoxFuture<'static, Result<AppBundle, BoxError>> + Send + Sync>;

/// Application bundle failed to load.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct LoadError(pub String);

/// Holds the application loader and the process-lifetime bundle cache.
pub struct AppHost {
    loader: AppLoader,
    cell: OnceCell<Arc<AppBundle>>,
}

impl AppHost {
    /// Create a host that loads the application lazily on first use.
    pub fn new<F, Fut>(loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<AppBundle, BoxError>> + Send + 'static,
    {
        Self {
            loader: Box::new(move || Box::pin(loader())),
            cell: OnceCell::new(),
        }
    }

    /// Create a host around an already-constructed bundle.
    pub fn preloaded(bundle: AppBundle) -> Self {
        Self {
            // Never invoked: the populated cell short-circuits every call.
            loader: Box::new(|| {
                Box::pin(std::future::ready(Err("application already loaded".into())))
            }),
            cell: OnceCell::new_with(Some(Arc::new(bundle))),
        }
    }

    /// The loaded bundle, loading it first if this is the first call.
    ///
    /// Concurrent callers before the first completion await the same
    /// in-flight load. On failure nothing is cached and the error is
    /// returned to the caller.
    pub async fn bundle(&self) -> Result<Arc<AppBundle>, LoadError> {
        let bundle = self
            .cell
            .get_or_try_init(|| async {
                let bundle = (self.loader)()
                    .await
                    .map_err(|e| LoadError(e.to_string()))?;
                tracing::info!(
                    widgets = bundle.manifest().widgets.len(),
                    listeners = bundle.manifest().listeners.len(),
                    root_widget = %bundle.manifest().root_widget,
                    "Application bundle loaded"
                );
                Ok(Arc::new(bundle))
            })
            .await?;
        Ok(bundle.clone())
    }

    /// Whether the bundle has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
