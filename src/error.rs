//! Error taxonomy for the controller.
//!
//! Only the binding and envelope errors abort their triggering call. Draw
//! and command failures are surfaced as diagnostics at the failure site and
//! recovered, so the render loop can never be killed by message handling.

use thiserror::Error;

/// Errors surfaced by the controller.
#[derive(Debug, Error)]
pub enum Error {
    /// A view node is already bound; the binding is write-once.
    #[error("view node already bound; the binding is write-once")]
    AlreadyBound,

    /// `bind` was handed a null or absent node.
    #[error("cannot bind an absent view node")]
    NullNode,

    /// The inbound event carried no payload mapping.
    #[error("event detail is missing or not a payload mapping")]
    MissingPayload,

    /// The bound node lacks a property the draw routine requires.
    #[error("view node has no `{0}` property")]
    NodeProperty(&'static str),

    /// Drawing was requested before a node or drawing context is available.
    #[error("draw skipped: {0}")]
    MissingContext(&'static str),

    /// A host-side action or draw call failed.
    #[error("host call failed: {0}")]
    Host(String),
}
