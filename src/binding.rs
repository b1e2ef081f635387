//! Write-once binding between a session and its host view node.
//!
//! The host's single-instance-per-workflow assumption makes the binding
//! write-once for the life of the session: there is no unbind, and a second
//! bind is an error rather than a replacement.

#[cfg(test)]
#[path = "binding_test.rs"]
mod binding_test;

use crate::error::Error;

/// Holds the one view node a session renders into.
#[derive(Debug)]
pub struct ViewBinding<N> {
    node: Option<N>,
}

impl<N> Default for ViewBinding<N> {
    fn default() -> Self {
        Self { node: None }
    }
}

impl<N> ViewBinding<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the view node.
    ///
    /// # Errors
    ///
    /// [`Error::NullNode`] when `node` is absent, [`Error::AlreadyBound`]
    /// when a node was already stored. Neither error disturbs an existing
    /// binding.
    pub fn bind(&mut self, node: Option<N>) -> Result<(), Error> {
        let node = node.ok_or(Error::NullNode)?;
        if self.node.is_some() {
            return Err(Error::AlreadyBound);
        }
        self.node = Some(node);
        Ok(())
    }

    /// The bound node, if any.
    #[must_use]
    pub fn get(&self) -> Option<&N> {
        self.node.as_ref()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.node.is_some()
    }
}
