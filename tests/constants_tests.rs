// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_valid_ema_coefficients() {
    for &f in &[
        INTENSITY_SMOOTHING,
        FREQ_SMOOTHING,
        CUTOFF_SMOOTHING,
        AMP_SMOOTHING,
    ] {
        assert!(f > 0.0 && f < 1.0, "factor {f} outside (0,1)");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cutoff_windows_are_ordered_and_nested() {
    assert!(CUTOFF_BASE_MIN_HZ < CUTOFF_BASE_MAX_HZ);
    assert!(CUTOFF_SAFE_MIN_HZ < CUTOFF_SAFE_MAX_HZ);
    // base band must sit inside the safety window
    assert!(CUTOFF_SAFE_MIN_HZ <= CUTOFF_BASE_MIN_HZ);
    assert!(CUTOFF_BASE_MAX_HZ <= CUTOFF_SAFE_MAX_HZ);
    assert!(CUTOFF_INTENSITY_GAIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn trigger_and_envelope_shape_are_sane() {
    assert!(TRIGGER_THRESHOLD > 0.0 && TRIGGER_THRESHOLD < 1.0);
    assert!(ENV_ATTACK_SEC > 0.0);
    assert!(ENV_DECAY_SEC > 0.0);
    assert!((0.0..=1.0).contains(&ENV_SUSTAIN_LEVEL));
    // the baseline hum must stay under any plausible trigger peak
    assert!(BASELINE_LEVEL > 0.0 && BASELINE_LEVEL < TRIGGER_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn initial_voice_values_are_inside_their_windows() {
    assert!(INITIAL_FREQ_HZ > 0.0);
    assert!(INITIAL_CUTOFF_HZ >= CUTOFF_SAFE_MIN_HZ);
    assert!(INITIAL_CUTOFF_HZ <= CUTOFF_SAFE_MAX_HZ);
    assert!(FILTER_Q > 0.0);
    assert!(ACCEL_FULL_SCALE > 0.0);
    assert!(SENSITIVITY_EPSILON > 0.0 && SENSITIVITY_EPSILON < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn visual_constants_are_renderable() {
    assert!(INTENSITY_VIS_SCALE > 0.0);
    assert!(CIRCLE_MIN_RADIUS_FRAC > 0.0);
    assert!(CIRCLE_MIN_RADIUS_FRAC < CIRCLE_MAX_RADIUS_FRAC);
    assert!(CIRCLE_MAX_RADIUS_FRAC <= 0.5);
    assert!((0.0..=1.0).contains(&CIRCLE_ALPHA));
    assert!(BAR_WIDTH_PX > 0.0);
    assert!(BAR_MIN_HEIGHT_PX > 0.0);
    assert!(BAR_MAX_HEIGHT_FRAC > 0.0 && BAR_MAX_HEIGHT_FRAC <= 1.0);
    for c in CALM_COLOR.iter().chain(AGITATED_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert!(AMP_RAMP_SEC > 0.0);
}
