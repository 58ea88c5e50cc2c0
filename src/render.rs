//! Per-frame slider renderer and the frame loop that drives it.
//!
//! The renderer only talks to the outside world through [`Surface`] and
//! [`InputSource`], so the same code runs against a browser canvas or a
//! headless recorder.

use crate::core::constants::{
    BACKGROUND_CELL, SLIDER_ACCENTS, SLIDER_COUNT, THUMB_CELL, TIME_STEP,
};
use crate::core::{active_cells, RoundedRect, SliderKind, SliderLayout};
use crate::input::{PointerMove, SliderControls};
use smallvec::SmallVec;

/// CSS colour string accepted by the drawing surface.
pub type CssColor = &'static str;

/// Fill fractions for one slider row; inline for the default column count.
pub type ColumnFills = SmallVec<[f64; 64]>;

/// Minimal 2D drawing target.
pub trait Surface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: CssColor);
}

/// Source of pointer-move events, drained once per frame.
pub trait InputSource {
    fn poll_pointer(&mut self) -> Option<PointerMove>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear(x, y, width, height)
    }
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: CssColor) {
        (**self).fill_rounded_rect(rect, color)
    }
}

#[derive(Clone, Debug)]
pub struct SliderRenderer {
    layout: SliderLayout,
    controls: SliderControls,
    time: f64,
}

impl Default for SliderRenderer {
    fn default() -> Self {
        Self::new(SliderLayout::default())
    }
}

impl SliderRenderer {
    pub fn new(layout: SliderLayout) -> Self {
        let controls = SliderControls::new(&layout);
        Self {
            layout,
            controls,
            time: 0.0,
        }
    }

    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }
    pub fn controls(&self) -> &SliderControls {
        &self.controls
    }
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Normalized control parameter of `slider`.
    pub fn control(&self, slider: usize) -> f64 {
        self.controls.control(&self.layout, slider)
    }

    pub fn handle_pointer_move(&mut self, ev: PointerMove) {
        let slider = self.controls.on_pointer_move(&self.layout, ev);
        log::trace!(
            "[slider] pointer ({:.1},{:.1}) -> slider {} control {:.3}",
            ev.offset.x,
            ev.offset.y,
            slider,
            self.control(slider)
        );
    }

    /// Fill fraction of every column of `slider` at the current time.
    pub fn column_fills(&self, slider: usize) -> ColumnFills {
        let kind = SliderKind::for_index(slider);
        let control = self.control(slider);
        let columns = self.layout.columns();
        (0..columns)
            .map(|i| kind.fill(i, columns, control, self.time))
            .collect()
    }

    /// Clear and repaint every slider, then advance time by one step.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let layout = &self.layout;
        surface.clear(0.0, 0.0, layout.width(), layout.height());
        let rows = layout.rows();

        for slider in 0..SLIDER_COUNT {
            let accent = SLIDER_ACCENTS[slider];
            let thumb = self.controls.thumb_column(layout, slider);
            for (column, fill) in self.column_fills(slider).into_iter().enumerate() {
                let active = active_cells(fill, rows);
                for stack in 0..rows {
                    let color = if column == thumb {
                        THUMB_CELL
                    } else if stack < active {
                        accent
                    } else {
                        BACKGROUND_CELL
                    };
                    surface.fill_rounded_rect(layout.cell_rect(slider, column, stack), color);
                }
            }
        }

        self.time += TIME_STEP;
    }
}

/// Owns a renderer with its surface and input, and renders one frame per
/// [`tick`](SliderLoop::tick) while running.
pub struct SliderLoop<S, I> {
    renderer: SliderRenderer,
    surface: S,
    input: I,
    running: bool,
    frames: u64,
}

impl<S: Surface, I: InputSource> SliderLoop<S, I> {
    /// New loop, initially stopped.
    pub fn new(renderer: SliderRenderer, surface: S, input: I) -> Self {
        Self {
            renderer,
            surface,
            input,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            log::info!("[loop] start at frame {}", self.frames);
        }
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[loop] stop after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn renderer(&self) -> &SliderRenderer {
        &self.renderer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Apply pending pointer moves and, when running, draw one frame.
    /// Returns whether another frame should be scheduled.
    pub fn tick(&mut self) -> bool {
        while let Some(ev) = self.input.poll_pointer() {
            self.renderer.handle_pointer_move(ev);
        }
        if !self.running {
            return false;
        }
        self.renderer.render_frame(&mut self.surface);
        self.frames += 1;
        true
    }
}
