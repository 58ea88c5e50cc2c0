use super::constants::*;
use super::noise::{clamp01, fractal_noise, signed_pow};
use std::f64::consts::TAU;

/// Column-height function assigned to each slider band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderKind {
    /// Power ramp; the control bends the curve. Ignores time.
    Ramp,
    /// Sine plus value noise; the control sets the wave frequency.
    Organic,
    /// One sine cycle; the control sets amplitude and contrast.
    Wave,
}

pub const SLIDER_KINDS: [SliderKind; SLIDER_COUNT] =
    [SliderKind::Ramp, SliderKind::Organic, SliderKind::Wave];

impl SliderKind {
    #[inline]
    pub fn for_index(index: usize) -> SliderKind {
        SLIDER_KINDS[index.min(SLIDER_COUNT - 1)]
    }

    /// Fill fraction in `[0, 1]` for `column` of `columns`.
    ///
    /// `control` is clamped to `[0, 1]` before use; `t` is the shared
    /// animation time.
    pub fn fill(self, column: usize, columns: usize, control: f64, t: f64) -> f64 {
        let x_norm = column as f64 / columns.max(1) as f64;
        let c = clamp01(control);
        match self {
            SliderKind::Ramp => ramp_fill(x_norm, c),
            SliderKind::Organic => organic_fill(column, x_norm, c, t),
            SliderKind::Wave => wave_fill(x_norm, c, t),
        }
    }
}

#[inline]
pub fn ramp_fill(x_norm: f64, control: f64) -> f64 {
    clamp01(x_norm).powf(RAMP_EXPONENT_BASE + control * RAMP_EXPONENT_SPAN)
}

pub fn organic_fill(column: usize, x_norm: f64, control: f64, t: f64) -> f64 {
    let freq = 1.0 + control * ORGANIC_FREQ_SPAN;
    let wave = (x_norm * freq * TAU + t).sin();
    let noise = fractal_noise(
        column as f64 * ORGANIC_NOISE_COLUMN_SCALE + t * ORGANIC_NOISE_TIME_SCALE,
    ) * 2.0
        - 1.0;
    let mix = wave * ORGANIC_WAVE_WEIGHT + noise * ORGANIC_NOISE_WEIGHT;
    let shaped = signed_pow(mix, ORGANIC_SHAPE_EXPONENT);
    clamp01((shaped + 1.0) * 0.5)
}

pub fn wave_fill(x_norm: f64, control: f64, t: f64) -> f64 {
    let amp = WAVE_AMP_BASE + control * WAVE_AMP_SPAN;
    let contrast = 1.0 + control * WAVE_CONTRAST_SPAN;
    let wave = (x_norm * TAU + t).sin();
    let boosted = signed_pow(wave * amp, contrast);
    clamp01((boosted + 1.0) * 0.5)
}

/// Number of cells drawn in the accent colour: `floor(fill * rows)`.
#[inline]
pub fn active_cells(fill: f64, rows: usize) -> usize {
    (clamp01(fill) * rows as f64).floor() as usize
}
