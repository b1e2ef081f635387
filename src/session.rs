//! The session controller: one backend image stream, one bound view node.
//!
//! A [`Session`] reconciles three activation sources into one rendered view:
//! the host's foreground draw hook (supplies the drawing context), the
//! host's frame clock (drives [`Session::tick`]), and the inbound message
//! stream (drives [`Session::handle_event`]). All three run on the host's
//! single logical thread; each entry point runs to completion before the
//! next is dispatched, so the session needs no locking.
//!
//! Image decoding is the one genuinely asynchronous boundary: a load starts
//! during dispatch and its completion callback marks the shared
//! [`DirtyFlag`] later. The next loop tick then repaints. A second image
//! arriving mid-decode simply replaces the pending handle and callback —
//! last write wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::binding::ViewBinding;
use crate::consts::{ENQUEUE_BATCH_COUNT, ENQUEUE_SLOT, NODE_X_INSET, NODE_Y_INSET, SHRINK_FACTOR};
use crate::error::Error;
use crate::geometry::scale_for_container;
use crate::host::{DrawContext, Host, ImageHandle, ViewNode};
use crate::protocol::{self, ControllerCommand, Payload};
use crate::source::{ImageSource, SRC_DIAMOND_GREEN};
use crate::state::{DirtyFlag, RenderState};

/// A foreground draw hook: receives the host drawing context and returns the
/// host's opaque hook value.
pub type DrawHook<C, R> = Box<dyn FnMut(&C) -> R>;

/// Controller session for a single bound view node.
pub struct Session<H: Host> {
    host: H,
    binding: ViewBinding<H::Node>,
    state: RenderState<H>,
}

impl<H: Host> Session<H> {
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            binding: ViewBinding::new(),
            state: RenderState::new(),
        }
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The bound view node, if any.
    #[must_use]
    pub fn node(&self) -> Option<&H::Node> {
        self.binding.get()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// A clone of the shared repaint flag, for callers that need to request
    /// repaints from outside the session (load callbacks, embedder glue).
    #[must_use]
    pub fn dirty_flag(&self) -> DirtyFlag {
        self.state.dirty.clone()
    }

    /// Request a repaint on the next loop tick.
    pub fn mark_dirty(&self) {
        self.state.dirty.mark();
    }

    // --- Binding ---

    /// Bind the view node this session renders into and start loading the
    /// placeholder image.
    ///
    /// # Errors
    ///
    /// [`Error::NullNode`] when `node` is absent, [`Error::AlreadyBound`] on
    /// a second bind. A failed bind leaves existing state untouched.
    pub fn bind(&mut self, node: Option<H::Node>) -> Result<(), Error> {
        self.binding.bind(node)?;
        self.load_into_state(&ImageSource::new(SRC_DIAMOND_GREEN));
        Ok(())
    }

    /// Replace the pending image and restart the asynchronous decode. The
    /// dirty flag stays clear until the new decode completes.
    fn load_into_state(&mut self, source: &ImageSource) {
        let dirty = self.state.dirty.clone();
        self.state.dirty.clear();
        self.state.image = Some(self.host.load_image(source, Box::new(move || dirty.mark())));
    }

    // --- Message dispatch ---

    /// Apply one inbound event detail.
    ///
    /// Recognized entries update the pending image or run a command;
    /// unrecognized entries are logged and skipped without aborting the
    /// rest.
    ///
    /// # Errors
    ///
    /// [`Error::MissingPayload`] when `detail` is absent or not a payload
    /// mapping.
    pub fn handle_event(&mut self, detail: Option<&Value>) -> Result<(), Error> {
        for payload in protocol::decode_detail(detail)? {
            match payload {
                Payload::Picture(source) => self.apply_picture(&source),
                Payload::Command(command) => self.run_command(&command),
            }
        }
        Ok(())
    }

    fn apply_picture(&mut self, source: &ImageSource) {
        self.load_into_state(source);
        self.host.notify_canvas_dirty();
    }

    /// Interpret a controller command.
    ///
    /// Host-action failures are caught and logged here; commands outside the
    /// handled vocabulary log an error and do nothing.
    pub fn run_command(&self, command: &str) {
        log::debug!("controller command {command:?}");
        match ControllerCommand::from_tag(command) {
            Some(ControllerCommand::EnqueuePrompt) => {
                if let Err(err) = self.host.queue_prompt(ENQUEUE_SLOT, ENQUEUE_BATCH_COUNT) {
                    log::error!("prompt enqueue failed: {err}");
                }
            }
            Some(ControllerCommand::AbortWorkflow) => {
                // TODO: wire to the host's workflow-interrupt action once it
                // is exposed to extensions.
            }
            _ => log::error!("unsupported command {command:?}"),
        }
    }

    // --- Rendering ---

    /// Record the drawing context supplied by the host's foreground hook.
    pub fn set_context(&mut self, context: H::Context) {
        self.state.context = Some(context);
    }

    /// One render-loop tick: repaint if a repaint is pending.
    ///
    /// Errors never escape a tick; the loop must survive anything message
    /// handling or the host throws at it.
    pub fn tick(&self) {
        if self.state.dirty.take() {
            if let Err(err) = self.draw() {
                log::error!("repaint failed: {err}");
            }
        }
    }

    /// Draw the current image into the bound node's content region.
    ///
    /// # Errors
    ///
    /// [`Error::MissingContext`] before a node, context, or image is
    /// available; [`Error::NodeProperty`] when the node lacks `pos` or
    /// `size`; [`Error::Host`] when the blit itself fails.
    pub fn draw(&self) -> Result<(), Error> {
        let Some(node) = self.binding.get() else {
            return Err(Error::MissingContext("no view node bound"));
        };
        let Some(context) = self.state.context.as_ref() else {
            return Err(Error::MissingContext("no drawing context"));
        };
        let Some(image) = self.state.image.as_ref() else {
            return Err(Error::MissingContext("no image loaded"));
        };
        if node.pos().is_none() {
            return Err(Error::NodeProperty("pos"));
        }
        let (node_width, node_height) = node.size().ok_or(Error::NodeProperty("size"))?;

        let frame_width = node_width - NODE_X_INSET;
        let frame_height = node_height - NODE_Y_INSET;
        let (image_width, image_height) = image.natural_size();

        // The frame goes in height-first: the node reports its extent in the
        // opposite aspect order from the container convention the fit rule
        // expects.
        let Some((x_scale, y_scale)) =
            scale_for_container(frame_height, frame_width, image_width, image_height)
        else {
            log::debug!("image has no usable dimensions yet; skipping repaint");
            return Ok(());
        };

        let scaled_width = x_scale * SHRINK_FACTOR * image_width;
        let scaled_height = y_scale * SHRINK_FACTOR * image_height;

        context.save();
        let blit = context.draw_image(image, NODE_X_INSET, NODE_Y_INSET, scaled_width, scaled_height);
        context.restore();
        blit
    }

    fn node_collapsed(&self) -> Option<bool> {
        self.binding.get().and_then(ViewNode::collapsed)
    }
}

/// Wrap the host's existing foreground hook.
///
/// The returned hook caches the context for loop-driven repaints, invokes
/// `original` first, paints the current image over its output, and passes
/// the original's return value through unchanged. A collapsed node skips the
/// paint but keeps the pass-through; an unbound session skips everything.
pub fn decorate<H, R>(
    session: Rc<RefCell<Session<H>>>,
    mut original: Option<DrawHook<H::Context, R>>,
) -> DrawHook<H::Context, Option<R>>
where
    H: Host + 'static,
    R: 'static,
{
    Box::new(move |context| {
        {
            let mut session = session.borrow_mut();
            if !session.is_bound() {
                log::debug!("foreground hook invoked before a view node was bound");
                return None;
            }
            session.set_context(context.clone());
        }

        // The session borrow is released while the original hook runs; it is
        // host code and may call back into the controller.
        let passthrough = original.as_mut().map(|hook| hook(context));

        let session = session.borrow();
        match session.node_collapsed() {
            Some(true) => return passthrough,
            Some(false) => {}
            None => log::warn!("view node has no flags; painting anyway"),
        }
        if let Err(err) = session.draw() {
            log::error!("foreground paint failed: {err}");
        }
        passthrough
    })
}
