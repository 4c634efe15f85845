//! Diagnostics sink injected into the registrar.

/// Receives the registrar's info and warning lines.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn info(&self, message: &str) {
        (**self).info(message);
    }

    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Forwards to the `log` facade under the `pil::registrar` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn info(&self, message: &str) {
        log::info!(target: "pil::registrar", "{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!(target: "pil::registrar", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCanvas;
    use crate::registrar::init_passive_listeners;

    #[test]
    fn log_diagnostics_without_a_logger_is_silent() {
        let canvas = MemoryCanvas::new();
        init_passive_listeners(Some(&canvas), LogDiagnostics);
        init_passive_listeners(None::<&MemoryCanvas>, LogDiagnostics);
        assert_eq!(canvas.listener_count(), 3);
    }
}
