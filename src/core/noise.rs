//! Deterministic 1-D value noise used by the organic slider.
//!
//! The hash is a plain function of its input, so a given lattice point yields
//! the same value on every call and every frame; only the sample coordinate
//! moves the field.

#[inline]
pub fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Sine-based hash of a lattice coordinate, in `[0, 1)`.
#[inline]
pub fn hash(i: f64) -> f64 {
    fract((i * 127.1 + 311.7).sin() * 43758.5453123)
}

/// Smoothstep-interpolated value noise. Equals `hash(x)` at integer `x`.
pub fn noise1d(x: f64) -> f64 {
    let i = x.floor();
    let f = x - i;
    let u = f * f * (3.0 - 2.0 * f);
    let a = hash(i);
    let b = hash(i + 1.0);
    a * (1.0 - u) + b * u
}

/// Two octaves of [`noise1d`] blended 0.7 / 0.3.
pub fn fractal_noise(x: f64) -> f64 {
    let n1 = noise1d(x);
    let n2 = noise1d(x * 2.13 + 17.7);
    n1 * 0.7 + n2 * 0.3
}

/// `sign(v) * |v|^e`, keeping zero at zero.
#[inline]
pub fn signed_pow(v: f64, e: f64) -> f64 {
    if v == 0.0 {
        return 0.0;
    }
    v.signum() * v.abs().powf(e)
}

/// Clamp into `[0, 1]`; NaN maps to 0.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
