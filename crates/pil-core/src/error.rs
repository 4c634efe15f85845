use crate::event::InputEventKind;
use thiserror::Error;

/// A host refused to attach a listener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListenerError {
    #[error("Failed to attach `{kind}` listener: {reason}")]
    Attach {
        kind: InputEventKind,
        reason: String,
    },
}

/// Invalid `RegistrarConfig` input.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid registrar config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("registrar config lists no events")]
    NoEvents,
}
