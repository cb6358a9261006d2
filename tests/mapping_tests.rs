// Host-side tests for the parameter mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod features {
        include!("../src/core/features.rs");
    }
    pub mod mapping {
        include!("../src/core/mapping.rs");
    }
}

use crate::core::config::*;
use crate::core::constants::*;
use crate::core::features::FeatureSet;
use crate::core::mapping::*;

fn config() -> UserConfig {
    UserConfig::default()
}

#[test]
fn pitch_stays_inside_the_configured_range() {
    let cfg = config();
    let mut drive = 0.0_f32;
    while drive <= 1.0 {
        let f = pitch_target(drive, &cfg);
        assert!(
            f >= cfg.pitch_min_hz && f <= cfg.pitch_max_hz,
            "pitch {f} outside [{}, {}] at drive {drive}",
            cfg.pitch_min_hz,
            cfg.pitch_max_hz
        );
        drive += 0.01;
    }
    // out-of-range drives clamp too
    assert_eq!(pitch_target(-1.0, &cfg), cfg.pitch_min_hz);
    assert_eq!(pitch_target(2.0, &cfg), cfg.pitch_max_hz);
}

#[test]
fn invert_flag_reverses_the_direction_without_leaving_the_range() {
    let mut cfg = config();
    cfg.invert_pitch = true;
    let mut prev = pitch_target(0.0, &cfg);
    assert!((prev - cfg.pitch_max_hz).abs() < 1e-4);
    let mut drive = 0.05_f32;
    while drive <= 1.0 {
        let f = pitch_target(drive, &cfg);
        assert!(f <= prev, "inverted pitch not decreasing at drive {drive}");
        assert!(f >= cfg.pitch_min_hz && f <= cfg.pitch_max_hz);
        prev = f;
        drive += 0.05;
    }
    assert!((pitch_target(1.0, &cfg) - cfg.pitch_min_hz).abs() < 1e-4);
}

#[test]
fn crossed_pitch_sliders_are_reordered() {
    let mut cfg = config();
    cfg.pitch_min_hz = 900.0;
    cfg.pitch_max_hz = 200.0;
    for &drive in &[0.0_f32, 0.3, 1.0] {
        let f = pitch_target(drive, &cfg);
        assert!(f >= 200.0 && f <= 900.0, "pitch {f} escaped the range");
    }
}

#[test]
fn cutoff_respects_the_safety_window() {
    let mut cfg = config();
    let mut brightness = 0.0_f32;
    while brightness <= 1.0 {
        cfg.brightness = brightness;
        for &intensity in &[0.0_f32, 0.5, 2.0, 10.0, 40.0, 1e4] {
            let c = cutoff_target(intensity, &cfg);
            assert!(
                c >= CUTOFF_SAFE_MIN_HZ && c <= CUTOFF_SAFE_MAX_HZ,
                "cutoff {c} outside safety window (brightness {brightness}, intensity {intensity})"
            );
        }
        brightness += 0.05;
    }
}

#[test]
fn cutoff_opens_with_intensity() {
    let cfg = config();
    let quiet = cutoff_target(0.0, &cfg);
    let busy = cutoff_target(10.0, &cfg);
    assert!(busy > quiet);
}

#[test]
fn zero_sensitivity_reads_as_full_intensity_not_nan() {
    assert_eq!(normalized(5.0, 0.0), 1.0);
    assert_eq!(normalized(0.0, 0.0), 1.0);

    let mut cfg = config();
    cfg.sensitivity = 0.0;
    let features = FeatureSet {
        jerk_magnitude: 3.0,
        total_magnitude: 9.8,
    };
    let target = map(&features, 3.0, &cfg);
    assert!(target.frequency_hz.is_finite());
    assert!(target.cutoff_hz.is_finite());
    match target.amplitude {
        AmplitudeCommand::Level(level) => assert_eq!(level, 1.0),
        other => panic!("expected Level, got {other:?}"),
    }
}

#[test]
fn continuous_policy_emits_levels_in_unit_range() {
    let cfg = config();
    for &intensity in &[0.0_f32, 1.0, 20.0, 40.0, 500.0] {
        let features = FeatureSet {
            jerk_magnitude: intensity,
            total_magnitude: intensity,
        };
        match map(&features, intensity, &cfg).amplitude {
            AmplitudeCommand::Level(level) => {
                assert!((0.0..=1.0).contains(&level), "level {level} out of range")
            }
            other => panic!("expected Level, got {other:?}"),
        }
    }
}

#[test]
fn transient_policy_triggers_only_above_the_threshold() {
    let mut cfg = config();
    cfg.policy = AmplitudePolicy::Transient;

    let below = cfg.sensitivity * TRIGGER_THRESHOLD * 0.5;
    let features = FeatureSet {
        jerk_magnitude: below,
        total_magnitude: 10.0,
    };
    assert_eq!(map(&features, below, &cfg).amplitude, AmplitudeCommand::Hold);

    let above = cfg.sensitivity * TRIGGER_THRESHOLD * 2.0;
    let features = FeatureSet {
        jerk_magnitude: above,
        total_magnitude: 10.0,
    };
    match map(&features, above, &cfg).amplitude {
        AmplitudeCommand::Trigger { peak } => {
            assert!((0.0..=1.0).contains(&peak));
            assert!((peak - 0.5).abs() < 1e-6, "peak should track magnitude");
        }
        other => panic!("expected Trigger, got {other:?}"),
    }
}

#[test]
fn pitch_drive_variants_pick_their_source() {
    let features = FeatureSet {
        jerk_magnitude: 0.0,
        total_magnitude: ACCEL_FULL_SCALE, // full tilt, no shake
    };
    let mut cfg = config();

    cfg.pitch_drive = PitchDrive::Shake;
    let shake_only = map(&features, 0.0, &cfg).frequency_hz;
    assert!((shake_only - cfg.pitch_min_hz).abs() < 1e-4);

    cfg.pitch_drive = PitchDrive::Tilt;
    let tilt_only = map(&features, 0.0, &cfg).frequency_hz;
    assert!((tilt_only - cfg.pitch_max_hz).abs() < 1e-4);

    cfg.pitch_drive = PitchDrive::Blend;
    let blended = map(&features, 0.0, &cfg).frequency_hz;
    assert!((blended - tilt_only).abs() < 1e-4, "blend takes the max");
}

#[test]
fn mapped_scalars_are_always_finite() {
    let mut cfg = config();
    for &sens in &[0.0_f32, 1e-6, 1.0, 40.0, 1e6] {
        cfg.sensitivity = sens;
        for &jerk in &[0.0_f32, 1e-3, 20.0, 1e5] {
            let features = FeatureSet {
                jerk_magnitude: jerk,
                total_magnitude: jerk * 0.7,
            };
            let t = map(&features, jerk, &cfg);
            assert!(t.frequency_hz.is_finite());
            assert!(t.cutoff_hz.is_finite());
            assert!(t.resonance.is_finite());
        }
    }
}

#[test]
fn resonance_is_the_fixed_filter_q() {
    let cfg = config();
    let features = FeatureSet::default();
    assert_eq!(map(&features, 0.0, &cfg).resonance, FILTER_Q);
}
