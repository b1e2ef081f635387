//! Shared numeric constants for node layout and host actions.

// ── Node layout ─────────────────────────────────────────────────

/// Shrink factor applied to both the frame insets and the scaled image
/// extent, leaving a small margin inside the node body.
pub const SHRINK_FACTOR: f64 = 0.93;

/// Horizontal inset from the node's left edge to the image frame.
pub const NODE_X_INSET: f64 = 10.0 * SHRINK_FACTOR;

/// Vertical inset from the node's top edge to the image frame. Larger than
/// the x inset so the frame clears the node's title bar and widget strip.
pub const NODE_Y_INSET: f64 = 55.0 * SHRINK_FACTOR;

// ── Host actions ────────────────────────────────────────────────

/// Queue slot passed to the prompt-enqueue action. Slot 0 enqueues the
/// prompt as if triggered from the host UI itself.
pub const ENQUEUE_SLOT: i32 = 0;

/// How many times an enqueued prompt should run.
pub const ENQUEUE_BATCH_COUNT: u32 = 1;
