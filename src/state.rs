//! Render state shared between the message dispatcher and the render loop.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::host::Host;

/// Shared repaint flag.
///
/// Image-load completion callbacks hold a clone and mark it without touching
/// the session, so a load finishing mid-dispatch can never re-enter session
/// state. Everything runs on the host's single logical thread, hence
/// `Rc<Cell<_>>` rather than any locking.
#[derive(Debug, Clone, Default)]
pub struct DirtyFlag(Rc<Cell<bool>>);

impl DirtyFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a repaint on the next loop tick.
    pub fn mark(&self) {
        self.0.set(true);
    }

    /// Drop any pending repaint request.
    pub fn clear(&self) {
        self.0.set(false);
    }

    /// Clear the flag, returning whether a repaint was pending.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.0.get()
    }
}

/// Mutable drawing state owned by the session.
pub struct RenderState<H: Host> {
    /// Image currently displayed (or still decoding). Populated with the
    /// placeholder when a node is bound.
    pub image: Option<H::Image>,
    /// Repaint flag: set when a load completes, cleared at the start of a
    /// repaint.
    pub dirty: DirtyFlag,
    /// Drawing context captured from the most recent foreground-hook call.
    /// The render loop repaints through this between hook invocations.
    pub context: Option<H::Context>,
}

impl<H: Host> Default for RenderState<H> {
    fn default() -> Self {
        Self {
            image: None,
            dirty: DirtyFlag::new(),
            context: None,
        }
    }
}

impl<H: Host> RenderState<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
