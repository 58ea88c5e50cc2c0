//! Canvas geometry for the stacked slider rows.
//!
//! Every slider band shares the same column grid and cell size. Cells are
//! stacked bottom-up inside their column slot, so stack position `0` is the
//! lowest cell of the band.

use super::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("column count must be at least 1")]
    NoColumns,
    #[error("canvas width and slider height must be positive and finite (got {width} x {slider_height})")]
    NonPositiveSize { width: f64, slider_height: f64 },
    #[error("margin {margin} leaves no room in a {column_width:.2}px column")]
    ColumnTooNarrow { margin: f64, column_width: f64 },
    #[error("slider height {slider_height} fits no {cell_height}px cells")]
    NoRows { slider_height: f64, cell_height: f64 },
    #[error("{cells} cells per frame exceeds the limit of {limit}")]
    TooManyCells { cells: usize, limit: usize },
}

/// Axis-aligned rounded rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderLayout {
    columns: usize,
    width: f64,
    slider_height: f64,
    bottom_pad: f64,
    margin: f64,
    // derived
    column_width: f64,
    cell_width: f64,
    cell_height: f64,
    radius: f64,
    rows: usize,
    inner_top: f64,
}

impl Default for SliderLayout {
    fn default() -> Self {
        // The constants are known to form a valid layout.
        Self::derive(
            COLUMNS,
            CANVAS_WIDTH,
            SLIDER_HEIGHT,
            CANVAS_BOTTOM_PAD,
            CELL_MARGIN,
        )
    }
}

impl SliderLayout {
    /// Build a layout, rejecting sizes that would leave no drawable cells or
    /// more than [`MAX_CELLS_PER_FRAME`] of them.
    pub fn new(
        columns: usize,
        width: f64,
        slider_height: f64,
        bottom_pad: f64,
        margin: f64,
    ) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        let sizes_ok = width.is_finite()
            && slider_height.is_finite()
            && width > 0.0
            && slider_height > 0.0;
        if !sizes_ok {
            return Err(LayoutError::NonPositiveSize {
                width,
                slider_height,
            });
        }
        let layout = Self::derive(columns, width, slider_height, bottom_pad.max(0.0), margin.max(0.0));
        if layout.cell_width <= 0.0 {
            return Err(LayoutError::ColumnTooNarrow {
                margin,
                column_width: layout.column_width,
            });
        }
        if layout.rows == 0 {
            return Err(LayoutError::NoRows {
                slider_height,
                cell_height: layout.cell_height,
            });
        }
        let cells = layout.cells_per_frame();
        if cells > MAX_CELLS_PER_FRAME {
            return Err(LayoutError::TooManyCells {
                cells,
                limit: MAX_CELLS_PER_FRAME,
            });
        }
        Ok(layout)
    }

    fn derive(columns: usize, width: f64, slider_height: f64, bottom_pad: f64, margin: f64) -> Self {
        let column_width = width / columns as f64;
        let cell_width = column_width - 2.0 * margin;
        let radius = cell_width * CORNER_RADIUS_RATIO;
        let cell_height = MIN_CELL_HEIGHT.max(cell_width.floor());
        let rows = ((slider_height - 2.0 * margin) / cell_height).floor().max(0.0) as usize;
        let inner_top = slider_height - rows as f64 * cell_height - margin;
        Self {
            columns,
            width,
            slider_height,
            bottom_pad,
            margin,
            column_width,
            cell_width,
            cell_height,
            radius,
            rows,
            inner_top,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn slider_height(&self) -> f64 {
        self.slider_height
    }
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Cells painted per frame across every slider.
    pub fn cells_per_frame(&self) -> usize {
        self.rows
            .saturating_mul(self.columns)
            .saturating_mul(SLIDER_COUNT)
    }

    /// Full canvas height: every band plus the bottom padding.
    pub fn height(&self) -> f64 {
        SLIDER_COUNT as f64 * self.slider_height + self.bottom_pad
    }

    /// Slider band under a canvas Y offset, clamped to a valid index.
    #[inline]
    pub fn slider_for_y(&self, y: f64) -> usize {
        let band = (y / self.slider_height).floor();
        if band.is_nan() || band <= 0.0 {
            0
        } else {
            (band as usize).min(SLIDER_COUNT - 1)
        }
    }

    /// Column under a canvas X offset, clamped to a valid index.
    #[inline]
    pub fn column_for_x(&self, x: f64) -> usize {
        let col = (x / self.width * self.columns as f64).floor();
        if col.is_nan() || col <= 0.0 {
            0
        } else {
            (col as usize).min(self.columns - 1)
        }
    }

    /// Geometry of the cell at stack position `stack` (0 = bottom) in
    /// `column` of `slider`.
    pub fn cell_rect(&self, slider: usize, column: usize, stack: usize) -> RoundedRect {
        let x = column as f64 * self.column_width + self.margin;
        let bands_below = (SLIDER_COUNT - 1 - slider.min(SLIDER_COUNT - 1)) as f64;
        let y = self.height()
            - self.margin
            - (stack as f64 + 1.0) * self.cell_height
            - (self.inner_top - self.margin)
            - bands_below * self.slider_height;
        RoundedRect {
            x,
            y,
            width: self.cell_width,
            height: self.cell_height - CELL_GAP,
            radius: self.radius,
        }
    }
}
