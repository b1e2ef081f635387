//! Traits describing the host collaborators the session depends on.
//!
//! The host is a node-graph editor: it owns the visual node the session
//! renders into, the 2D context it draws with, and the actions a command can
//! trigger. Everything the session needs from it is expressed here so the
//! core stays testable without a browser. The browser implementations live
//! in [`crate::web`].

use crate::error::Error;
use crate::source::ImageSource;

/// The single graph node this session renders into.
///
/// Node properties come across an untyped host boundary, so each accessor
/// reports absence instead of assuming the host has populated the field.
pub trait ViewNode {
    /// The node's `(x, y)` position on the graph canvas, if present.
    fn pos(&self) -> Option<(f64, f64)>;

    /// The node's `(width, height)`, if present.
    fn size(&self) -> Option<(f64, f64)>;

    /// Whether the node is collapsed. `None` means the host has not
    /// attached its flags object yet.
    fn collapsed(&self) -> Option<bool>;
}

/// A decoded (or still decoding) image owned by the host.
pub trait ImageHandle {
    /// Intrinsic pixel dimensions. `(0, 0)` while decoding is in flight.
    fn natural_size(&self) -> (f64, f64);
}

/// The host's 2D drawing context.
///
/// `Clone` because the session retains the context handed to the foreground
/// hook so the render loop can repaint between hook invocations.
pub trait DrawContext: Clone {
    type Image: ImageHandle;

    /// Push the current context state.
    fn save(&self);

    /// Pop back to the previously saved context state.
    fn restore(&self);

    /// Blit `image` into the axis-aligned region at `(x, y)` with the given
    /// extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] when the underlying context rejects the call.
    fn draw_image(&self, image: &Self::Image, x: f64, y: f64, width: f64, height: f64)
    -> Result<(), Error>;
}

/// Callback invoked when an asynchronous image decode completes.
pub type LoadCallback = Box<dyn FnOnce()>;

/// Factory and action surface of the host.
pub trait Host {
    type Node: ViewNode;
    type Image: ImageHandle;
    type Context: DrawContext<Image = Self::Image>;

    /// Begin decoding `source`. `on_load` fires once decoding completes;
    /// dropping the returned handle abandons the load and its callback.
    fn load_image(&self, source: &ImageSource, on_load: LoadCallback) -> Self::Image;

    /// Enqueue the current workflow prompt.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] when the host action throws.
    fn queue_prompt(&self, slot: i32, batch_count: u32) -> Result<(), Error>;

    /// Ask the host to repaint its graph canvas.
    fn notify_canvas_dirty(&self);
}
