//! Widget and listener handler registries.
//!
//! # Responsibilities
//! - Hold the name → function maps the dispatcher consults
//! - Erase handler types behind boxed futures so applications can
//!   register plain async fns or closures
//!
//! # Design Decisions
//! - Handlers are trusted application code; nothing is validated or
//!   sandboxed at registration
//! - Maps are never mutated after the bundle is built

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

/// Boxed error type handlers are allowed to fail with.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A widget render function: `(data, props) -> renderable`.
pub type WidgetFn = Arc<dyn Fn(Value, Value) -> BoxFuture<'static, Result<Value, BoxError>> + Send + Sync>;

/// A listener function: `(props, event, api) -> ()`, side effects only.
pub type ListenerFn =
    Arc<dyn Fn(Value, Value, Value) -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync>;

/// Registry of named widget render functions.
#[derive(Clone, Default)]
pub struct WidgetHandlers {
    map: HashMap<String, WidgetFn>,
}

impl WidgetHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget under a name, replacing any previous entry.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Value, Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        self.map
            .insert(name.into(), Arc::new(move |data, props| Box::pin(handler(data, props))));
    }

    /// Look up a widget by exact name.
    pub fn get(&self, name: &str) -> Option<&WidgetFn> {
        self.map.get(name)
    }

    /// Registered names, sorted for deterministic manifests.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl std::fmt::Debug for WidgetHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetHandlers").field("names", &self.names()).finish()
    }
}

/// Registry of named listener functions.
#[derive(Clone, Default)]
pub struct ListenerHandlers {
    map: HashMap<String, ListenerFn>,
}

impl ListenerHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener under an action name, replacing any previous entry.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Value, Value, Value) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.map.insert(
            name.into(),
            Arc::new(move |props, event, api| Box::pin(handler(props, event, api))),
        );
    }

    /// Look up a listener by exact action name.
    pub fn get(&self, name: &str) -> Option<&ListenerFn> {
        self.map.get(name)
    }

    /// Registered names, sorted for deterministic manifests.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl std::fmt::Debug for ListenerHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandlers").field("names", &self.names()).finish()
    }
}
