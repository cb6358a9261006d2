// Host-side tests for the exponential smoother.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
}

use crate::core::smoothing::*;

#[test]
fn smooth_converges_monotonically_to_constant_target() {
    for &factor in &[0.05_f32, 0.15, 0.3, 0.5, 0.9] {
        for &start in &[-100.0_f32, 0.0, 42.0, 1e4] {
            let target = 7.5_f32;
            let mut value = start;
            let mut prev_dist = (value - target).abs();
            for _ in 0..2000 {
                value = smooth(value, target, factor);
                let dist = (value - target).abs();
                assert!(
                    dist <= prev_dist,
                    "distance grew: {prev_dist} -> {dist} (factor {factor}, start {start})"
                );
                prev_dist = dist;
            }
            assert!(
                (value - target).abs() < 1e-3,
                "did not converge: {value} (factor {factor}, start {start})"
            );
        }
    }
}

#[test]
fn smooth_never_overshoots_the_target() {
    let target = 10.0_f32;
    for &factor in &[0.1_f32, 0.5, 0.99] {
        let mut below = 0.0_f32;
        let mut above = 20.0_f32;
        for _ in 0..100 {
            below = smooth(below, target, factor);
            above = smooth(above, target, factor);
            assert!(below <= target, "overshot from below: {below}");
            assert!(above >= target, "overshot from above: {above}");
        }
    }
}

#[test]
fn smooth_is_a_convex_combination() {
    // Result always lies between previous and target
    for &factor in &[0.01_f32, 0.3, 0.99] {
        for &(prev, target) in &[(0.0_f32, 1.0_f32), (-5.0, 3.0), (100.0, -100.0)] {
            let out = smooth(prev, target, factor);
            let lo = prev.min(target);
            let hi = prev.max(target);
            assert!(out >= lo && out <= hi, "{out} outside [{lo}, {hi}]");
        }
    }
}

#[test]
fn smooth_vec3_matches_per_axis_smoothing() {
    let prev = glam::Vec3::new(1.0, -2.0, 3.0);
    let target = glam::Vec3::new(-4.0, 5.0, 0.5);
    let factor = 0.3;
    let out = smooth_vec3(prev, target, factor);
    assert!((out.x - smooth(prev.x, target.x, factor)).abs() < 1e-6);
    assert!((out.y - smooth(prev.y, target.y, factor)).abs() < 1e-6);
    assert!((out.z - smooth(prev.z, target.z, factor)).abs() < 1e-6);
}

#[test]
fn larger_factor_responds_faster() {
    let slow = smooth(0.0, 1.0, 0.1);
    let fast = smooth(0.0, 1.0, 0.6);
    assert!(fast > slow);
}

#[test]
fn clamp_factor_keeps_ui_values_usable() {
    assert!(clamp_factor(0.0) > 0.0);
    assert!(clamp_factor(1.0) < 1.0);
    assert!(clamp_factor(-3.0) > 0.0);
    let mid = clamp_factor(0.35);
    assert!((mid - 0.35).abs() < 1e-6);
}
