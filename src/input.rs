use crate::core::constants::{INITIAL_POINTER_FRACTION, SLIDER_COUNT};
use crate::core::SliderLayout;
use crate::render::InputSource;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Pointer move in canvas pixels, relative to the canvas origin.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub offset: DVec2,
}

impl PointerMove {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            offset: DVec2::new(x, y),
        }
    }
}

/// Last known pointer X for each slider band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderControls {
    raw_x: [f64; SLIDER_COUNT],
}

impl SliderControls {
    pub fn new(layout: &SliderLayout) -> Self {
        Self {
            raw_x: [layout.width() * INITIAL_POINTER_FRACTION; SLIDER_COUNT],
        }
    }

    /// Store the event's X on the band under its Y; returns that band.
    pub fn on_pointer_move(&mut self, layout: &SliderLayout, ev: PointerMove) -> usize {
        let slider = layout.slider_for_y(ev.offset.y);
        if ev.offset.x.is_finite() {
            self.raw_x[slider] = ev.offset.x;
        }
        slider
    }

    #[inline]
    pub fn raw(&self, slider: usize) -> f64 {
        self.raw_x[slider.min(SLIDER_COUNT - 1)]
    }

    /// Control parameter in `[0, 1]`.
    #[inline]
    pub fn control(&self, layout: &SliderLayout, slider: usize) -> f64 {
        (self.raw(slider) / layout.width()).clamp(0.0, 1.0)
    }

    /// Column the band's thumb sits on.
    #[inline]
    pub fn thumb_column(&self, layout: &SliderLayout, slider: usize) -> usize {
        layout.column_for_x(self.raw(slider))
    }
}

/// Latest pointer move per slider band, shared between event listeners and
/// the frame loop.
///
/// Only the newest move for each band is kept, so a stopped loop under a
/// moving pointer holds at most one pending move per band.
#[derive(Clone, Debug)]
pub struct PointerQueue {
    layout: SliderLayout,
    pending: Rc<RefCell<[Option<PointerMove>; SLIDER_COUNT]>>,
}

impl PointerQueue {
    pub fn new(layout: &SliderLayout) -> Self {
        Self {
            layout: layout.clone(),
            pending: Rc::new(RefCell::new([None; SLIDER_COUNT])),
        }
    }

    /// Record `ev` as the newest move for its band. Non-finite X is dropped.
    #[inline]
    pub fn push(&self, ev: PointerMove) {
        if !ev.offset.x.is_finite() {
            return;
        }
        let slider = self.layout.slider_for_y(ev.offset.y);
        self.pending.borrow_mut()[slider] = Some(ev);
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().iter().filter(|ev| ev.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InputSource for PointerQueue {
    fn poll_pointer(&mut self) -> Option<PointerMove> {
        self.pending
            .borrow_mut()
            .iter_mut()
            .find_map(|slot| slot.take())
    }
}
