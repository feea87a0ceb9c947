//! The loaded application bundle.

use crate::app::handlers::{ListenerHandlers, WidgetHandlers};
use crate::app::manifest::Manifest;

/// Everything an application loader returns: the handler maps and the
/// root widget identifier.
///
/// The manifest is computed once here, at construction, so every
/// manifest response for the process lifetime serializes the identical
/// object.
#[derive(Debug, Clone)]
pub struct AppBundle {
    widgets: WidgetHandlers,
    listeners: ListenerHandlers,
    manifest: Manifest,
}

impl AppBundle {
    pub fn new(
        widgets: WidgetHandlers,
        listeners: ListenerHandlers,
        root_widget: impl Into<String>,
    ) -> Self {
        let manifest = Manifest {
            widgets: widgets.names(),
            listeners: listeners.names(),
            root_widget: root_widget.into(),
        };
        Self {
            widgets,
            listeners,
            manifest,
        }
    }

    pub fn widgets(&self) -> &WidgetHandlers {
        &self.widgets
    }

    pub fn listeners(&self) -> &ListenerHandlers {
        &self.listeners
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_manifest_reflects_registrations() {
        let mut widgets = WidgetHandlers::new();
        widgets.register("b", |_, _| async { Ok(Value::Null) });
        widgets.register("a", |_, _| async { Ok(Value::Null) });

        let mut listeners = ListenerHandlers::new();
        listeners.register("save", |_, _, _| async { Ok(()) });

        let bundle = AppBundle::new(widgets, listeners, "a");
        let manifest = bundle.manifest();

        assert_eq!(manifest.widgets, vec!["a", "b"]);
        assert_eq!(manifest.listeners, vec!["save"]);
        assert_eq!(manifest.root_widget, "a");
    }
}
