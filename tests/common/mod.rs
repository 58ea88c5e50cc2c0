// Headless doubles for the drawing surface and pointer input.

#![allow(dead_code)]

use slider_web::render::CssColor;
use slider_web::{InputSource, PointerMove, RoundedRect, Surface};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Fill {
        rect: RoundedRect,
        color: CssColor,
    },
}

/// Records every draw call in order.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn fills(&self) -> Vec<(RoundedRect, CssColor)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, color } => Some((*rect, *color)),
                DrawOp::Clear { .. } => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: CssColor) {
        self.ops.push(DrawOp::Fill { rect, color });
    }
}

/// Replays a fixed list of pointer moves.
#[derive(Default, Debug)]
pub struct ScriptedInput {
    pub events: VecDeque<PointerMove>,
}

impl ScriptedInput {
    pub fn new(moves: &[(f64, f64)]) -> Self {
        Self {
            events: moves.iter().map(|&(x, y)| PointerMove::new(x, y)).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_pointer(&mut self) -> Option<PointerMove> {
        self.events.pop_front()
    }
}

/// Index into a single frame's fill list for (slider, column, stack).
pub fn fill_index(columns: usize, rows: usize, slider: usize, column: usize, stack: usize) -> usize {
    (slider * columns + column) * rows + stack
}
