//! The published application manifest.

use serde::{Deserialize, Serialize};

/// Summary of an application: the names a remote UI may invoke plus the
/// widget it should render first.
///
/// Handler functions themselves are never exposed; only their key sets
/// travel over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Names of renderable widgets.
    pub widgets: Vec<String>,

    /// Names of invocable listener actions.
    pub listeners: Vec<String>,

    /// Opaque identifier of the widget the UI renders at the root.
    #[serde(rename = "rootWidget")]
    pub root_widget: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let manifest = Manifest {
            widgets: vec!["clock".to_string()],
            listeners: vec!["tick".to_string()],
            root_widget: "clock".to_string(),
        };

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "widgets": ["clock"],
                "listeners": ["tick"],
                "rootWidget": "clock",
            })
        );
    }

    #[test]
    fn test_round_trips_root_widget_key() {
        let manifest: Manifest = serde_json::from_str(
            r#"{"widgets": [], "listeners": [], "rootWidget": "home"}"#,
        )
        .unwrap();
        assert_eq!(manifest.root_widget, "home");
    }
}
