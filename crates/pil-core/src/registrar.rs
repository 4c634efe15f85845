//! Passive listener registrar.
//!
//! Browsers warn about `touchstart`, `touchmove` and `wheel` listeners that
//! are not declared passive, because they must wait for such listeners before
//! scrolling. Attaching empty passive listeners to the canvas up front
//! silences those warnings for the rest of the page's lifetime.
//!
//! Registration is best-effort: a missing canvas or a rejected listener is
//! reported through [`Diagnostics`] and never returned to the caller.
//! Repeated calls attach again; there is no duplicate guard.

use crate::config::RegistrarConfig;
use crate::diagnostics::Diagnostics;
use crate::event::{ListenerOptions, ListenerTarget};

const REGISTERED: &str = "Passive touch listeners registered.";
const NO_CANVAS: &str = "No canvas found.";

/// Attaches passive listeners according to a [`RegistrarConfig`].
#[derive(Debug, Clone)]
pub struct PassiveRegistrar<D> {
    config: RegistrarConfig,
    diagnostics: D,
}

impl<D: Diagnostics> PassiveRegistrar<D> {
    /// Registrar with the default configuration.
    pub fn new(diagnostics: D) -> Self {
        Self::with_config(RegistrarConfig::default(), diagnostics)
    }

    pub fn with_config(config: RegistrarConfig, diagnostics: D) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Attach one passive listener per configured event kind to `canvas`.
    ///
    /// With no canvas, emits a single warning and attaches nothing. Each
    /// rejected attachment emits a warning and the remaining kinds are still
    /// attempted; the success line is emitted only when all of them attached.
    pub fn register<T: ListenerTarget + ?Sized>(&self, canvas: Option<&T>) {
        let Some(canvas) = canvas else {
            self.diagnostics.warn(&self.config.tagged(NO_CANVAS));
            return;
        };

        let mut failed = 0usize;
        for &kind in &self.config.events {
            match canvas.add_passive_listener(kind, ListenerOptions::PASSIVE) {
                Ok(()) => {
                    log::debug!(target: "pil::registrar", "attached passive `{kind}` listener");
                }
                Err(e) => {
                    failed += 1;
                    self.diagnostics.warn(&self.config.tagged(&e.to_string()));
                }
            }
        }

        if failed == 0 {
            self.diagnostics.info(&self.config.tagged(REGISTERED));
        }
    }
}

/// Register the default passive listeners on `canvas`.
pub fn init_passive_listeners<T, D>(canvas: Option<&T>, diagnostics: D)
where
    T: ListenerTarget + ?Sized,
    D: Diagnostics,
{
    PassiveRegistrar::new(diagnostics).register(canvas);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InputEventKind;
    use crate::memory::{AttachedListener, MemoryCanvas, MemoryDiagnostics};
    use pretty_assertions::assert_eq;

    fn passive(kind: InputEventKind) -> AttachedListener {
        AttachedListener {
            kind,
            options: ListenerOptions::PASSIVE,
        }
    }

    #[test]
    fn attaches_three_passive_listeners() {
        let canvas = MemoryCanvas::new();
        let diags = MemoryDiagnostics::new();
        init_passive_listeners(Some(&canvas), &diags);

        assert_eq!(
            canvas.listeners(),
            vec![
                passive(InputEventKind::TouchStart),
                passive(InputEventKind::TouchMove),
                passive(InputEventKind::Wheel),
            ]
        );
        assert_eq!(
            diags.infos(),
            vec!["[initPassiveTouchListeners] Passive touch listeners registered.".to_string()]
        );
        assert!(diags.warnings().is_empty());
    }

    #[test]
    fn missing_canvas_warns_once() {
        let diags = MemoryDiagnostics::new();
        init_passive_listeners(None::<&MemoryCanvas>, &diags);

        assert_eq!(
            diags.warnings(),
            vec!["[initPassiveTouchListeners] No canvas found.".to_string()]
        );
        assert!(diags.infos().is_empty());
    }

    #[test]
    fn rejected_kind_does_not_stop_the_rest() {
        let canvas = MemoryCanvas::new().reject(InputEventKind::TouchStart);
        let diags = MemoryDiagnostics::new();
        init_passive_listeners(Some(&canvas), &diags);

        assert_eq!(
            canvas.listeners(),
            vec![
                passive(InputEventKind::TouchMove),
                passive(InputEventKind::Wheel)
            ]
        );
        assert_eq!(diags.warnings().len(), 1);
        assert!(diags.warnings()[0].contains("`touchstart`"));
        assert!(diags.infos().is_empty(), "no success line after a failure");
    }

    #[test]
    fn custom_config_limits_events_and_retags() {
        let config = RegistrarConfig {
            events: vec![InputEventKind::Wheel],
            tag: "viewer".to_string(),
        };
        let canvas = MemoryCanvas::new();
        let diags = MemoryDiagnostics::new();
        let registrar = PassiveRegistrar::with_config(config, &diags);
        registrar.register(Some(&canvas));

        assert_eq!(canvas.listeners(), vec![passive(InputEventKind::Wheel)]);
        assert_eq!(
            diags.infos(),
            vec!["[viewer] Passive touch listeners registered.".to_string()]
        );
        assert_eq!(registrar.config().tag, "viewer");
    }
}
