//! In-memory host: a canvas that records its listeners and a diagnostics
//! sink that records its lines.
//!
//! Used by native builds, which have no DOM, and by tests.

use crate::diagnostics::Diagnostics;
use crate::error::ListenerError;
use crate::event::{InputEventKind, ListenerOptions, ListenerTarget};
use std::cell::RefCell;
use std::collections::HashSet;

// ─── Canvas ───────────────────────────────────────────────────────────────

/// One attachment made on a [`MemoryCanvas`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachedListener {
    pub kind: InputEventKind,
    pub options: ListenerOptions,
}

/// A listener registry held in memory.
///
/// Every attachment is appended, duplicates included. Kinds passed to
/// [`reject`](Self::reject) fail to attach, like a host whose
/// `addEventListener` throws.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    listeners: RefCell<Vec<AttachedListener>>,
    rejected: HashSet<InputEventKind>,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make attachments of `kind` fail.
    #[must_use]
    pub fn reject(mut self, kind: InputEventKind) -> Self {
        self.rejected.insert(kind);
        self
    }

    /// Snapshot of the attachments so far, in attachment order.
    pub fn listeners(&self) -> Vec<AttachedListener> {
        self.listeners.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ListenerTarget for MemoryCanvas {
    fn add_passive_listener(
        &self,
        kind: InputEventKind,
        options: ListenerOptions,
    ) -> Result<(), ListenerError> {
        if self.rejected.contains(&kind) {
            return Err(ListenerError::Attach {
                kind,
                reason: "rejected by host".to_string(),
            });
        }
        self.listeners
            .borrow_mut()
            .push(AttachedListener { kind, options });
        Ok(())
    }
}

// ─── Diagnostics ──────────────────────────────────────────────────────────

/// Collects diagnostic lines by level.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// True if any line of either level contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.infos
            .borrow()
            .iter()
            .chain(self.warnings.borrow().iter())
            .any(|line| line.contains(needle))
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
