use crate::canvas::CanvasSurface;
use crate::constants::canvas_id;
use crate::core::SliderLayout;
use crate::dom;
use crate::events::{wire_pointermove, PointerListener};
use crate::frame::AnimationLoop;
use crate::input::PointerQueue;
use crate::render::{SliderLoop, SliderRenderer};
use std::cell::RefCell;
use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// A mounted slider canvas with its listener and animation loop.
///
/// Dropping (or `free`-ing from JS) stops the loop, detaches the listener
/// and removes the canvas from the page.
#[wasm_bindgen]
pub struct SliderWidget {
    animation: AnimationLoop,
    _pointer: PointerListener,
    canvas: web::HtmlCanvasElement,
}

#[wasm_bindgen]
impl SliderWidget {
    /// Mount a widget under the element with `parent_id` (or `<body>`) and
    /// start animating it.
    #[wasm_bindgen(constructor)]
    pub fn new(parent_id: Option<String>) -> Result<SliderWidget, JsValue> {
        let instance = NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed);
        Self::mount(instance, parent_id.as_deref()).map_err(|e| {
            log::error!("[slider] mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
    }

    pub fn start(&self) {
        self.animation.start();
    }

    pub fn stop(&self) {
        self.animation.stop();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    #[wasm_bindgen(getter, js_name = framesRendered)]
    pub fn frames_rendered(&self) -> f64 {
        self.animation.frames_rendered() as f64
    }
}

impl SliderWidget {
    fn mount(instance: u32, parent_id: Option<&str>) -> anyhow::Result<SliderWidget> {
        let layout = SliderLayout::default();
        let canvas = dom::mount_canvas(&layout, &canvas_id(instance), parent_id)?;
        let ctx = match dom::context_2d(&canvas) {
            Ok(ctx) => ctx,
            Err(e) => {
                dom::unmount(&canvas);
                return Err(e);
            }
        };

        let queue = PointerQueue::new(&layout);
        let pointer = match wire_pointermove(&canvas, queue.clone()) {
            Ok(listener) => listener,
            Err(e) => {
                dom::unmount(&canvas);
                return Err(e);
            }
        };
        let slider_loop = SliderLoop::new(
            SliderRenderer::new(layout),
            CanvasSurface::new(ctx),
            queue,
        );
        let animation = AnimationLoop::new(slider_loop);
        animation.start();
        log::info!(
            "[slider] mounted {}x{} canvas",
            canvas.width(),
            canvas.height()
        );
        Ok(SliderWidget {
            animation,
            _pointer: pointer,
            canvas,
        })
    }
}

impl Drop for SliderWidget {
    fn drop(&mut self) {
        self.animation.stop();
        dom::unmount(&self.canvas);
        log::info!("[slider] torn down");
    }
}

// Instance 0 is reserved for the default widget mounted at start.
static NEXT_INSTANCE: AtomicU32 = AtomicU32::new(1);

thread_local! {
    static DEFAULT_WIDGET: RefCell<Option<SliderWidget>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slider-web starting");

    match SliderWidget::mount(0, None) {
        Ok(widget) => DEFAULT_WIDGET.with(|slot| *slot.borrow_mut() = Some(widget)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Pause the default widget's animation.
#[wasm_bindgen]
pub fn stop() {
    DEFAULT_WIDGET.with(|slot| {
        if let Some(w) = slot.borrow().as_ref() {
            w.stop();
        }
    });
}

/// Resume the default widget's animation.
#[wasm_bindgen]
pub fn resume() {
    DEFAULT_WIDGET.with(|slot| {
        if let Some(w) = slot.borrow().as_ref() {
            w.start();
        }
    });
}

/// Stop the default widget and remove it from the page.
#[wasm_bindgen]
pub fn teardown() {
    let widget = DEFAULT_WIDGET.with(|slot| slot.borrow_mut().take());
    drop(widget);
}
