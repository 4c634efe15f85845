//! Registrar configuration.
//!
//! The defaults reproduce the stock behavior: `touchstart`, `touchmove` and
//! `wheel`, tagged `initPassiveTouchListeners` in log lines. Hosts can pass a
//! JSON object to narrow the event list or change the tag.

use crate::error::ConfigError;
use crate::event::InputEventKind;
use serde::{Deserialize, Serialize};

/// Tag prefixed to every diagnostic line, as `[tag] message`.
pub const DEFAULT_TAG: &str = "initPassiveTouchListeners";

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration for [`PassiveRegistrar`](crate::PassiveRegistrar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Event kinds to attach, in order. Default: **touchstart, touchmove, wheel**.
    pub events: Vec<InputEventKind>,

    /// Diagnostic tag. Default: **`initPassiveTouchListeners`**.
    pub tag: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            events: InputEventKind::ALL.to_vec(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl RegistrarConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] on malformed input or unknown event
    /// names, and [`ConfigError::NoEvents`] when `events` is empty.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would silently register nothing.
    ///
    /// # Errors
    /// Returns [`ConfigError::NoEvents`] when `events` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.events.is_empty() {
            return Err(ConfigError::NoEvents);
        }
        Ok(())
    }

    /// Format a diagnostic line with this config's tag.
    pub fn tagged(&self, message: &str) -> String {
        format!("[{}] {message}", self.tag)
    }
}
