use super::config::{AmplitudePolicy, PitchDrive, UserConfig};
use super::constants::{
    ACCEL_FULL_SCALE, CUTOFF_BASE_MAX_HZ, CUTOFF_BASE_MIN_HZ, CUTOFF_INTENSITY_GAIN,
    CUTOFF_SAFE_MAX_HZ, CUTOFF_SAFE_MIN_HZ, FILTER_Q, SENSITIVITY_EPSILON, TRIGGER_THRESHOLD,
};
use super::features::FeatureSet;

/// What the voice controller should do with amplitude this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmplitudeCommand {
    /// Continuous policy: smooth toward this level
    Level(f32),
    /// Transient policy: intensity is over the trigger threshold
    Trigger { peak: f32 },
    /// Transient policy: below threshold, let the envelope run out
    Hold,
}

/// Target synthesis parameters for one tick, before output smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthTarget {
    pub frequency_hz: f32,
    pub cutoff_hz: f32,
    pub resonance: f32,
    pub amplitude: AmplitudeCommand,
}

/// Clamped linear normalization of `value` against `full_scale`.
///
/// A zero or near-zero full scale reads as "everything is maximal" rather
/// than dividing by zero, so a sensitivity slider parked at 0 never produces
/// NaN downstream.
#[inline]
pub fn normalized(value: f32, full_scale: f32) -> f32 {
    if full_scale.abs() <= SENSITIVITY_EPSILON {
        1.0
    } else {
        (value / full_scale).clamp(0.0, 1.0)
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Normalized pitch drive in [0,1] per the configured source.
fn pitch_drive(features: &FeatureSet, config: &UserConfig) -> f32 {
    let shake = normalized(features.jerk_magnitude, config.sensitivity);
    let tilt = normalized(features.total_magnitude, ACCEL_FULL_SCALE);
    match config.pitch_drive {
        PitchDrive::Shake => shake,
        PitchDrive::Tilt => tilt,
        PitchDrive::Blend => shake.max(tilt),
    }
}

/// Map the drive into the configured pitch range, honoring the invert flag.
/// The result is always inside [min, max] even when the sliders cross.
pub fn pitch_target(drive: f32, config: &UserConfig) -> f32 {
    let lo = config.pitch_min_hz.min(config.pitch_max_hz);
    let hi = config.pitch_min_hz.max(config.pitch_max_hz);
    let (from, to) = if config.invert_pitch { (hi, lo) } else { (lo, hi) };
    lerp(from, to, drive.clamp(0.0, 1.0)).clamp(lo, hi)
}

/// Brightness picks a base cutoff; intensity opens the filter further.
/// Always lands inside the absolute safety window.
pub fn cutoff_target(intensity: f32, config: &UserConfig) -> f32 {
    let base = lerp(
        CUTOFF_BASE_MIN_HZ,
        CUTOFF_BASE_MAX_HZ,
        config.brightness.clamp(0.0, 1.0),
    );
    let scaled = base * (1.0 + intensity.max(0.0) * CUTOFF_INTENSITY_GAIN);
    scaled.clamp(CUTOFF_SAFE_MIN_HZ, CUTOFF_SAFE_MAX_HZ)
}

/// Map extracted features plus the user config into target synthesis
/// parameters. `intensity` is the smoothed jerk magnitude maintained by the
/// pipeline; the threshold test runs on it rather than the raw jerk so the
/// transient policy does not chatter at the boundary.
///
/// Stateless: trigger latching and the envelope belong to the controller.
pub fn map(features: &FeatureSet, intensity: f32, config: &UserConfig) -> SynthTarget {
    let amplitude = match config.policy {
        AmplitudePolicy::Continuous => {
            AmplitudeCommand::Level(normalized(intensity, config.sensitivity))
        }
        AmplitudePolicy::Transient => {
            if normalized(intensity, config.sensitivity) >= TRIGGER_THRESHOLD {
                AmplitudeCommand::Trigger {
                    peak: normalized(features.total_magnitude, ACCEL_FULL_SCALE),
                }
            } else {
                AmplitudeCommand::Hold
            }
        }
    };
    SynthTarget {
        frequency_hz: pitch_target(pitch_drive(features, config), config),
        cutoff_hz: cutoff_target(intensity, config),
        resonance: FILTER_Q,
        amplitude,
    }
}
