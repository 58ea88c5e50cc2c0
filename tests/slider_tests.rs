// Column fill functions for the three slider kinds.

use proptest::prelude::*;
use slider_web::core::{active_cells, organic_fill, ramp_fill, wave_fill, SLIDER_KINDS};
use slider_web::SliderKind;

#[test]
fn kinds_follow_band_order() {
    assert_eq!(SliderKind::for_index(0), SliderKind::Ramp);
    assert_eq!(SliderKind::for_index(1), SliderKind::Organic);
    assert_eq!(SliderKind::for_index(2), SliderKind::Wave);
    assert_eq!(SliderKind::for_index(9), SliderKind::Wave);
    assert_eq!(SLIDER_KINDS.len(), 3);
}

#[test]
fn ramp_is_square_root_at_zero_control() {
    for i in 0..=64 {
        let x = i as f64 / 64.0;
        assert!((ramp_fill(x, 0.0) - x.sqrt()).abs() < 1e-12);
    }
}

#[test]
fn ramp_reaches_one_at_right_edge() {
    for c in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert_eq!(ramp_fill(1.0, c), 1.0);
    }
    assert_eq!(ramp_fill(0.0, 0.5), 0.0);
}

#[test]
fn ramp_ignores_time() {
    let a = SliderKind::Ramp.fill(20, 64, 0.4, 0.0);
    let b = SliderKind::Ramp.fill(20, 64, 0.4, 123.4);
    assert_eq!(a, b);
}

#[test]
fn wave_first_column_is_half_at_time_zero() {
    // x_norm = 0, sin(0) = 0, boosted = 0, fill = (0 + 1) * 0.5
    assert_eq!(SliderKind::Wave.fill(0, 64, 0.5, 0.0), 0.5);
    assert_eq!(wave_fill(0.0, 0.5, 0.0), 0.5);
}

#[test]
fn wave_peak_tracks_amplitude_and_contrast() {
    // Quarter cycle: sin = 1, so fill = (amp^contrast + 1) / 2.
    let c = 0.5;
    let amp: f64 = 0.2 + c * 0.8;
    let contrast = 1.0 + c * 3.0;
    let expected = (amp.powf(contrast) + 1.0) * 0.5;
    assert!((wave_fill(0.25, c, 0.0) - expected).abs() < 1e-12);
    // Full control: amp 1, contrast 4, peak is full height.
    assert!((wave_fill(0.25, 1.0, 0.0) - 1.0).abs() < 1e-12);
}

#[test]
fn organic_matches_reference_values() {
    let cases = [
        (7, 0.3, 0.0, 0.67520425603518963),
        (28, 0.73, 5.1, 0.90555319858757310),
    ];
    for (i, c, t, expected) in cases {
        let h = SliderKind::Organic.fill(i, 64, c, t);
        assert!((h - expected).abs() < 1e-9, "column {i}: {h} != {expected}");
    }
}

#[test]
fn wave_matches_reference_value_off_origin() {
    let h = SliderKind::Wave.fill(14, 64, 0.9, 7.7);
    assert!((h - 0.50702346624161132).abs() < 1e-12, "{h}");
}

#[test]
fn organic_moves_with_time() {
    let a = organic_fill(10, 10.0 / 64.0, 0.3, 0.0);
    let b = organic_fill(10, 10.0 / 64.0, 0.3, 1.0);
    assert_ne!(a, b);
}

#[test]
fn organic_is_stable_for_fixed_inputs() {
    for i in 0..64 {
        let x = i as f64 / 64.0;
        assert_eq!(organic_fill(i, x, 0.7, 3.3), organic_fill(i, x, 0.7, 3.3));
    }
}

#[test]
fn active_cells_floors_fill_times_rows() {
    assert_eq!(active_cells(0.0, 19), 0);
    assert_eq!(active_cells(1.0, 19), 19);
    assert_eq!(active_cells(0.5, 19), 9);
    assert_eq!(active_cells(0.999, 19), 18);
    assert_eq!(active_cells(-0.5, 19), 0);
    assert_eq!(active_cells(1.5, 19), 19);
    assert_eq!(active_cells(f64::NAN, 19), 0);
}

proptest! {
    #[test]
    fn ramp_is_monotonic(c in 0.0..=1.0_f64, a in 0.0..=1.0_f64, b in 0.0..=1.0_f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ramp_fill(lo, c) <= ramp_fill(hi, c));
    }

    #[test]
    fn fills_stay_in_unit_interval(
        column in 0usize..512,
        control in -1.0e6..1.0e6_f64,
        t in -1.0e6..1.0e6_f64,
    ) {
        for kind in SLIDER_KINDS {
            let h = kind.fill(column, 64, control, t);
            prop_assert!((0.0..=1.0).contains(&h), "{:?} gave {}", kind, h);
        }
    }

    #[test]
    fn active_cells_matches_floor(fill in 0.0..=1.0_f64, rows in 1usize..64) {
        prop_assert_eq!(active_cells(fill, rows), (fill * rows as f64).floor() as usize);
    }
}
