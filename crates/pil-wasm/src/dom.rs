//! DOM side of the registrar: listener attachment and console output.

use pil_core::{Diagnostics, InputEventKind, ListenerError, ListenerOptions, ListenerTarget};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A DOM `EventTarget` (usually the canvas) as a [`ListenerTarget`].
pub struct DomTarget<'a>(pub &'a EventTarget);

impl<'a> DomTarget<'a> {
    pub fn new(target: &'a impl AsRef<EventTarget>) -> Self {
        Self(target.as_ref())
    }
}

impl ListenerTarget for DomTarget<'_> {
    fn add_passive_listener(
        &self,
        kind: InputEventKind,
        options: ListenerOptions,
    ) -> Result<(), ListenerError> {
        let dom_options = AddEventListenerOptions::new();
        dom_options.set_passive(options.passive);

        let handler: Closure<dyn FnMut(Event)> = Closure::new(|_event: Event| {});
        self.0
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind.as_str(),
                handler.as_ref().unchecked_ref(),
                &dom_options,
            )
            .map_err(|err| ListenerError::Attach {
                kind,
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })?;

        // The listener lives as long as the canvas; hand the closure to JS.
        handler.forget();
        Ok(())
    }
}

/// Writes to `console.log` / `console.warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn info(&self, message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    fn warn(&self, message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }
}
