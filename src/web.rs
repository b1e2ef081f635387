//! Browser glue: `web-sys` implementations of the host traits, the
//! `requestAnimationFrame` render loop, and the `wasm_bindgen` entry points
//! the embedding page wires up.
//!
//! The host hands us untyped graph objects, so node properties are read
//! through `js_sys::Reflect` and absence is reported upward instead of
//! assumed away. Host actions (prompt enqueue, canvas dirtying) are plain JS
//! functions supplied at construction.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsError, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::error::Error;
use crate::host::{DrawContext, Host, ImageHandle, LoadCallback, ViewNode};
use crate::session::{self, DrawHook, Session};
use crate::source::ImageSource;

// ── Host node ───────────────────────────────────────────────────

/// A graph node as handed over by the host page.
pub struct BrowserNode(JsValue);

impl BrowserNode {
    #[must_use]
    pub fn new(node: JsValue) -> Self {
        Self(node)
    }
}

fn get_property(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Read `(value[0], value[1])` as numbers; works for both plain arrays and
/// the typed arrays the host uses for node extents.
fn pair_from(value: &JsValue) -> Option<(f64, f64)> {
    let first = js_sys::Reflect::get_u32(value, 0).map_or(None, |v| v.as_f64())?;
    let second = js_sys::Reflect::get_u32(value, 1).map_or(None, |v| v.as_f64())?;
    Some((first, second))
}

impl ViewNode for BrowserNode {
    fn pos(&self) -> Option<(f64, f64)> {
        pair_from(&get_property(&self.0, "pos")?)
    }

    fn size(&self) -> Option<(f64, f64)> {
        pair_from(&get_property(&self.0, "size")?)
    }

    fn collapsed(&self) -> Option<bool> {
        let flags = get_property(&self.0, "flags")?;
        Some(get_property(&flags, "collapsed").map_or(false, |v| v.is_truthy()))
    }
}

// ── Image handle ────────────────────────────────────────────────

/// An `HtmlImageElement` decoding in the background. Dropping the handle
/// detaches the completion callback, so an abandoned load can never mark
/// the session dirty.
pub struct BrowserImage {
    element: Option<HtmlImageElement>,
    _onload: Option<Closure<dyn FnMut()>>,
}

impl BrowserImage {
    fn load(source: &ImageSource, on_load: LoadCallback) -> Self {
        match HtmlImageElement::new() {
            Ok(element) => {
                let onload = Closure::once(on_load);
                element.set_onload(Some(onload.as_ref().unchecked_ref()));
                element.set_src(source.as_str());
                Self {
                    element: Some(element),
                    _onload: Some(onload),
                }
            }
            Err(err) => {
                log::error!("image element creation failed: {err:?}");
                Self {
                    element: None,
                    _onload: None,
                }
            }
        }
    }
}

impl ImageHandle for BrowserImage {
    fn natural_size(&self) -> (f64, f64) {
        self.element.as_ref().map_or((0.0, 0.0), |element| {
            (
                f64::from(element.natural_width()),
                f64::from(element.natural_height()),
            )
        })
    }
}

impl Drop for BrowserImage {
    fn drop(&mut self) {
        if let Some(element) = &self.element {
            element.set_onload(None);
        }
    }
}

// ── Drawing context ─────────────────────────────────────────────

/// The node canvas's 2D context.
#[derive(Clone)]
pub struct BrowserContext(CanvasRenderingContext2d);

impl BrowserContext {
    #[must_use]
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self(context)
    }

    #[must_use]
    pub fn raw(&self) -> &CanvasRenderingContext2d {
        &self.0
    }
}

impl DrawContext for BrowserContext {
    type Image = BrowserImage;

    fn save(&self) {
        self.0.save();
    }

    fn restore(&self) {
        self.0.restore();
    }

    fn draw_image(
        &self,
        image: &BrowserImage,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Error> {
        let Some(element) = image.element.as_ref() else {
            return Err(Error::Host("image element was never created".to_owned()));
        };
        self.0
            .draw_image_with_html_image_element_and_dw_and_dh(element, x, y, width, height)
            .map_err(|err| Error::Host(format!("{err:?}")))
    }
}

// ── Host actions ────────────────────────────────────────────────

/// Host action surface: JS functions supplied by the embedding page.
pub struct BrowserHost {
    queue_prompt_fn: js_sys::Function,
    canvas_dirty_fn: js_sys::Function,
}

impl BrowserHost {
    #[must_use]
    pub fn new(queue_prompt_fn: js_sys::Function, canvas_dirty_fn: js_sys::Function) -> Self {
        Self {
            queue_prompt_fn,
            canvas_dirty_fn,
        }
    }
}

impl Host for BrowserHost {
    type Node = BrowserNode;
    type Image = BrowserImage;
    type Context = BrowserContext;

    fn load_image(&self, source: &ImageSource, on_load: LoadCallback) -> BrowserImage {
        BrowserImage::load(source, on_load)
    }

    fn queue_prompt(&self, slot: i32, batch_count: u32) -> Result<(), Error> {
        self.queue_prompt_fn
            .call2(
                &JsValue::NULL,
                &JsValue::from(slot),
                &JsValue::from(batch_count),
            )
            .map(|_| ())
            .map_err(|err| Error::Host(format!("{err:?}")))
    }

    fn notify_canvas_dirty(&self) {
        // Dirty both the foreground and background canvases.
        if let Err(err) = self
            .canvas_dirty_fn
            .call2(&JsValue::NULL, &JsValue::TRUE, &JsValue::TRUE)
        {
            log::error!("canvas dirty notification failed: {err:?}");
        }
    }
}

// ── Render loop ─────────────────────────────────────────────────

/// Start the perpetual render loop.
///
/// The tick closure re-submits itself on every invocation, dirty or not, so
/// the loop runs at the host frame rate for the page lifetime. There is no
/// stop condition short of page teardown.
pub fn start_render_loop(session: Rc<RefCell<Session<BrowserHost>>>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_tick = Rc::clone(&holder);
    let tick = Closure::wrap(Box::new(move |_timestamp: f64| {
        session.borrow().tick();
        if let Some(frame) = holder_for_tick.borrow().as_ref() {
            request_frame(frame);
        }
    }) as Box<dyn FnMut(f64)>);
    request_frame(&tick);
    *holder.borrow_mut() = Some(tick);
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    let Some(window) = web_sys::window() else {
        log::error!("no window object; render loop stalled");
        return;
    };
    if let Err(err) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {err:?}");
    }
}

// ── Page entry points ───────────────────────────────────────────

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("logger already installed; reusing it");
    }
}

fn decode_js_detail(detail: &JsValue) -> Option<Value> {
    if detail.is_null() || detail.is_undefined() {
        return None;
    }
    match js_sys::JSON::stringify(detail) {
        Ok(text) => {
            let text = String::from(text);
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(err) => {
                    log::error!("event detail is not valid JSON: {err}");
                    None
                }
            }
        }
        Err(err) => {
            log::error!("event detail cannot be serialized: {err:?}");
            None
        }
    }
}

/// The controller as exposed to the embedding page.
///
/// The page constructs one of these at extension setup, binds the node
/// instance when the graph creates it, installs the decorated foreground
/// hook on the node type, and forwards every `TRANSCEIVER_MSG` event detail
/// into [`handle_event`](Self::handle_event).
#[wasm_bindgen]
pub struct NodecastApp {
    session: Rc<RefCell<Session<BrowserHost>>>,
}

#[wasm_bindgen]
impl NodecastApp {
    /// Create the controller and start its render loop. `queue_prompt` and
    /// `set_canvas_dirty` are the host actions commands may trigger.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(queue_prompt: js_sys::Function, set_canvas_dirty: js_sys::Function) -> Self {
        init_diagnostics();
        let host = BrowserHost::new(queue_prompt, set_canvas_dirty);
        let session = Rc::new(RefCell::new(Session::new(host)));
        start_render_loop(Rc::clone(&session));
        Self { session }
    }

    /// Bind the one view node this page renders into.
    ///
    /// # Errors
    ///
    /// Rejects a null node and any second bind.
    pub fn bind_node(&self, node: JsValue) -> Result<(), JsError> {
        let node = if node.is_null() || node.is_undefined() {
            None
        } else {
            Some(BrowserNode::new(node))
        };
        self.session.borrow_mut().bind(node).map_err(JsError::from)
    }

    /// Feed one inbound event detail from the `TRANSCEIVER_MSG` channel.
    ///
    /// # Errors
    ///
    /// Rejects an absent or non-object detail.
    pub fn handle_event(&self, detail: JsValue) -> Result<(), JsError> {
        let detail = decode_js_detail(&detail);
        self.session
            .borrow_mut()
            .handle_event(detail.as_ref())
            .map_err(JsError::from)
    }

    /// Build the decorated foreground hook wrapping `original` (which may be
    /// absent). Install the returned function as the node type's foreground
    /// hook; it passes the original hook's return value through unchanged.
    #[must_use]
    pub fn decorate_foreground(&self, original: JsValue) -> JsValue {
        let original_hook: Option<DrawHook<BrowserContext, JsValue>> = original
            .dyn_into::<js_sys::Function>()
            .map_or(None, |function| {
                Some(Box::new(move |context: &BrowserContext| {
                    let raw: &JsValue = context.raw().as_ref();
                    function.call1(&JsValue::NULL, raw).unwrap_or_else(|err| {
                        log::error!("original foreground hook threw: {err:?}");
                        JsValue::UNDEFINED
                    })
                }) as DrawHook<BrowserContext, JsValue>)
            });

        let mut hook = session::decorate(Rc::clone(&self.session), original_hook);
        let closure = Closure::wrap(Box::new(move |context: JsValue| -> JsValue {
            match context.dyn_into::<CanvasRenderingContext2d>() {
                Ok(context) => hook(&BrowserContext::new(context)).unwrap_or(JsValue::UNDEFINED),
                Err(other) => {
                    log::error!("foreground hook received a non-2d context: {other:?}");
                    JsValue::UNDEFINED
                }
            }
        }) as Box<dyn FnMut(JsValue) -> JsValue>);
        let hook_fn = closure.as_ref().clone();
        // The hook is installed on the node type and lives for the page
        // lifetime.
        closure.forget();
        hook_fn
    }
}
