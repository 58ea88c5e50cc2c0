use crate::constants::POINTER_MOVE_EVENT;
use crate::input::{PointerMove, PointerQueue};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered `mousemove` listener; removed from its target on drop.
pub struct PointerListener {
    target: web::EventTarget,
    closure: Closure<dyn FnMut(web::MouseEvent)>,
}

/// Forward pointer moves over `canvas` into `queue` as canvas offsets.
pub fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    queue: PointerQueue,
) -> anyhow::Result<PointerListener> {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        queue.push(PointerMove::new(ev.offset_x() as f64, ev.offset_y() as f64));
    }) as Box<dyn FnMut(_)>);

    let target: web::EventTarget = canvas.clone().into();
    target
        .add_event_listener_with_callback(POINTER_MOVE_EVENT, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("add {} listener: {:?}", POINTER_MOVE_EVENT, e))?;
    Ok(PointerListener { target, closure })
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(
                POINTER_MOVE_EVENT,
                self.closure.as_ref().unchecked_ref(),
            )
            .is_err()
        {
            log::warn!("[pointer] failed to detach {} listener", POINTER_MOVE_EVENT);
        }
    }
}
