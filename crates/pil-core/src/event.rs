//! Input event kinds and the listener-target seam.
//!
//! `ListenerTarget` is the only thing the registrar knows about a canvas.
//! The wasm bridge implements it for DOM `EventTarget`s; `MemoryCanvas`
//! implements it for native hosts and tests.

use crate::error::ListenerError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Event kinds ─────────────────────────────────────────────────────────

/// Input events whose listeners the browser treats as scroll-blocking
/// unless they are declared passive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEventKind {
    #[serde(rename = "touchstart")]
    TouchStart,
    #[serde(rename = "touchmove")]
    TouchMove,
    #[serde(rename = "wheel")]
    Wheel,
}

impl InputEventKind {
    /// Default registration order.
    pub const ALL: [InputEventKind; 3] = [Self::TouchStart, Self::TouchMove, Self::Wheel];

    /// DOM event type name, as passed to `addEventListener`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TouchStart => "touchstart",
            Self::TouchMove => "touchmove",
            Self::Wheel => "wheel",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

impl fmt::Display for InputEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Listener options ────────────────────────────────────────────────────

/// Options attached alongside a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener promises never to call `preventDefault`.
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: ListenerOptions = ListenerOptions { passive: true };
}

// ─── Target seam ─────────────────────────────────────────────────────────

/// Something that accepts event listeners, typically a canvas element.
///
/// Implementations attach a listener with an empty handler body. Only the
/// declaration matters; the handler never runs any logic.
pub trait ListenerTarget {
    /// Attach one no-op listener for `kind` with `options`.
    ///
    /// # Errors
    /// Returns [`ListenerError::Attach`] when the host rejects the listener.
    fn add_passive_listener(
        &self,
        kind: InputEventKind,
        options: ListenerOptions,
    ) -> Result<(), ListenerError>;
}

impl<T: ListenerTarget + ?Sized> ListenerTarget for &T {
    fn add_passive_listener(
        &self,
        kind: InputEventKind,
        options: ListenerOptions,
    ) -> Result<(), ListenerError> {
        (**self).add_passive_listener(kind, options)
    }
}
