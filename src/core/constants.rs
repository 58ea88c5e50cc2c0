// Shared layout and animation constants for the slider widget.

// Grid layout
pub const COLUMNS: usize = 64; // columns per slider row
pub const SLIDER_COUNT: usize = 3;
pub const CANVAS_WIDTH: f64 = 600.0; // px
pub const SLIDER_HEIGHT: f64 = 120.0; // px per slider band
pub const CANVAS_BOTTOM_PAD: f64 = 20.0; // extra px below the last band

// Cell sizing
pub const CELL_MARGIN: f64 = 2.0; // px on each side of a column slot
pub const MIN_CELL_HEIGHT: f64 = 6.0;
pub const CORNER_RADIUS_RATIO: f64 = 0.12; // of the cell width
pub const CELL_GAP: f64 = 1.0; // vertical gap between stacked cells

// Upper bound on cells painted per frame, across all sliders
pub const MAX_CELLS_PER_FRAME: usize = 100_000;

// Animation
pub const TIME_STEP: f64 = 0.02; // advance of `t` per rendered frame
pub const INITIAL_POINTER_FRACTION: f64 = 0.3; // starting control X as a fraction of width

// Colours (CSS)
pub const SLIDER_ACCENTS: [&str; SLIDER_COUNT] = [
    "green",     // ramp
    "orangered", // organic histogram
    "#525aff",   // single wave
];
pub const BACKGROUND_CELL: &str = "#333333";
pub const THUMB_CELL: &str = "#ccc";

// Organic slider shaping
pub const ORGANIC_FREQ_SPAN: f64 = 9.0;
pub const ORGANIC_WAVE_WEIGHT: f64 = 0.75;
pub const ORGANIC_NOISE_WEIGHT: f64 = 0.35;
pub const ORGANIC_NOISE_COLUMN_SCALE: f64 = 0.18;
pub const ORGANIC_NOISE_TIME_SCALE: f64 = 0.22;
pub const ORGANIC_SHAPE_EXPONENT: f64 = 0.85;

// Wave slider shaping
pub const WAVE_AMP_BASE: f64 = 0.2;
pub const WAVE_AMP_SPAN: f64 = 0.8;
pub const WAVE_CONTRAST_SPAN: f64 = 3.0;

// Ramp slider shaping
pub const RAMP_EXPONENT_BASE: f64 = 0.5;
pub const RAMP_EXPONENT_SPAN: f64 = 2.0;
