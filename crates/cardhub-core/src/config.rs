//! Tuning constants for every interaction component.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "repulsion": { "radius": 300.0 }, "notification": { "hold_ms": 5000 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{HubError, HubResult};

/// Message shown when a disabled card is clicked.
pub const DEFAULT_DISABLED_MESSAGE: &str = "This tool is coming soon! \u{1F680}";

/// Hover repulsion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepulsionConfig {
    /// Cards at or beyond this distance are not pushed.
    pub radius: f64,
    /// Push magnitude at distance zero.
    pub strength: f64,
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self {
            radius: 400.0,
            strength: 5.0,
        }
    }
}

/// Toast lifecycle timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay between insertion and slide-in (one deferred tick).
    pub enter_delay_ms: u64,
    /// Time from insertion until slide-out starts.
    pub hold_ms: u64,
    /// Slide-out transition length; removal happens after it.
    pub exit_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            hold_ms: 3000,
            exit_ms: 500,
        }
    }
}

impl NotificationConfig {
    pub fn enter_delay(&self) -> Duration {
        Duration::from_millis(self.enter_delay_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn exit(&self) -> Duration {
        Duration::from_millis(self.exit_ms)
    }
}

/// Disabled-card feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub shake_ms: u64,
    pub message: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            shake_ms: 500,
            message: DEFAULT_DISABLED_MESSAGE.to_string(),
        }
    }
}

impl FeedbackConfig {
    pub fn shake(&self) -> Duration {
        Duration::from_millis(self.shake_ms)
    }
}

/// Scroll-driven header styling and pointer parallax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// Scroll offsets at or below this leave the header neutral.
    pub scroll_threshold: f64,
    pub translate_divisor: f64,
    pub max_translate: f64,
    pub fade_divisor: f64,
    pub opacity_floor: f64,
    pub parallax_divisor: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            translate_divisor: 10.0,
            max_translate: 20.0,
            fade_divisor: 300.0,
            opacity_floor: 0.5,
            parallax_divisor: 50.0,
        }
    }
}

/// Viewport reveal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Intersection ratio a card must exceed to be revealed.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.1 }
    }
}

/// All interaction tuning, grouped per component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub repulsion: RepulsionConfig,
    pub notification: NotificationConfig,
    pub feedback: FeedbackConfig,
    pub ambient: AmbientConfig,
    pub reveal: RevealConfig,
}

impl InteractionConfig {
    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> HubResult<Self> {
        read_json(path.as_ref())
    }

    /// Load `path` if given, else `fallback` if it exists, else defaults.
    ///
    /// A file that fails to load is logged and replaced by defaults.
    pub fn load_or_default(path: Option<&Path>, fallback: Option<&Path>) -> Self {
        let candidate = match (path, fallback) {
            (Some(explicit), _) => Some(explicit),
            (None, Some(fallback)) if fallback.exists() => Some(fallback),
            _ => None,
        };

        match candidate {
            Some(path) => match Self::load(path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded interaction config");
                    config
                }
                Err(e) => {
                    tracing::warn!("Using default interaction config: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}

/// Read and parse a JSON document from disk.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> HubResult<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| HubError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| HubError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_page_constants() {
        let config = InteractionConfig::default();
        assert_eq!(config.repulsion.radius, 400.0);
        assert_eq!(config.repulsion.strength, 5.0);
        assert_eq!(config.notification.enter_delay(), Duration::from_millis(10));
        assert_eq!(config.notification.hold(), Duration::from_millis(3000));
        assert_eq!(config.notification.exit(), Duration::from_millis(500));
        assert_eq!(config.feedback.shake(), Duration::from_millis(500));
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.ambient.opacity_floor, 0.5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{ "repulsion": { "radius": 250.0 } }"#).unwrap();

        let config = InteractionConfig::load(&path).unwrap();
        assert_eq!(config.repulsion.radius, 250.0);
        assert_eq!(config.repulsion.strength, 5.0);
        assert_eq!(config.notification, NotificationConfig::default());
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = InteractionConfig::load(&path).unwrap_err();
        assert!(matches!(err, HubError::Parse { .. }));
    }

    #[test]
    fn load_or_default_falls_back() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");

        assert_eq!(
            InteractionConfig::load_or_default(Some(&missing), None),
            InteractionConfig::default()
        );
        assert_eq!(
            InteractionConfig::load_or_default(None, Some(&missing)),
            InteractionConfig::default()
        );
    }

    #[test]
    fn load_or_default_uses_existing_fallback() {
        let temp = TempDir::new().unwrap();
        let fallback = temp.path().join("config.json");
        std::fs::write(&fallback, r#"{ "feedback": { "message": "soon" } }"#).unwrap();

        let config = InteractionConfig::load_or_default(None, Some(&fallback));
        assert_eq!(config.feedback.message, "soon");
        assert_eq!(config.feedback.shake_ms, 500);
    }
}
