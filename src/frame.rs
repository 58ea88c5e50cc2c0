use crate::canvas::CanvasSurface;
use crate::input::PointerQueue;
use crate::render::SliderLoop;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebSliderLoop = SliderLoop<CanvasSurface, PointerQueue>;

type TickSlot = RefCell<Option<Closure<dyn FnMut()>>>;

/// Drives a [`WebSliderLoop`] from `requestAnimationFrame`.
///
/// At most one frame request is outstanding. `stop` cancels it; dropping the
/// handle stops the loop and releases the callback.
pub struct AnimationLoop {
    state: Rc<RefCell<WebSliderLoop>>,
    tick: Rc<TickSlot>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn new(slider_loop: WebSliderLoop) -> Self {
        let state = Rc::new(RefCell::new(slider_loop));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<TickSlot> = Rc::new(RefCell::new(None));

        // Weak self-reference so the callback does not keep itself alive.
        let tick_weak: Weak<TickSlot> = Rc::downgrade(&tick);
        let state_tick = state.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            let again = state_tick.borrow_mut().tick();
            if again {
                if let Some(slot) = tick_weak.upgrade() {
                    pending_tick.set(request_frame(&slot));
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            state,
            tick,
            pending,
        }
    }

    pub fn start(&self) {
        self.state.borrow_mut().start();
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn stop(&self) {
        self.state.borrow_mut().stop();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.state.borrow().frames_rendered()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let borrowed = slot.borrow();
    let cb = borrowed.as_ref()?;
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[loop] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
