use glam::Vec3;

use super::config::UserConfig;
use super::constants::{
    AMP_SMOOTHING, BASELINE_LEVEL, CUTOFF_SAFE_MAX_HZ, CUTOFF_SAFE_MIN_HZ, CUTOFF_SMOOTHING,
    ENV_ATTACK_SEC, ENV_DECAY_SEC, ENV_SUSTAIN_LEVEL, FILTER_Q, FREQ_SMOOTHING,
    INITIAL_CUTOFF_HZ, INITIAL_FREQ_HZ, INTENSITY_SMOOTHING,
};
use super::features::{extract, FeatureSet};
use super::mapping::{map, AmplitudeCommand};
use super::smoothing::{clamp_factor, smooth, smooth_vec3};
use super::status::SensorStatus;

/// Voice activation state. Arming is one-way: browsers require a user
/// gesture to start audio, and re-arming is out of scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceState {
    Idle,
    Armed,
}

/// The synthesis parameters actually applied to the voice this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthParams {
    pub frequency_hz: f32,
    pub cutoff_hz: f32,
    pub resonance: f32,
    pub amplitude: f32,
}

/// Per-tick output: applied parameters plus the features that produced
/// them, for the visualizer and HUD.
#[derive(Clone, Copy, Debug)]
pub struct TickSnapshot {
    pub params: SynthParams,
    pub features: FeatureSet,
    pub intensity: f32,
}

/// One-shot amplitude envelope: linear attack to the trigger peak, linear
/// decay to the sustain level. No release; arming is one-way and there is
/// no note-off, so the shape ends at sustain (0 makes it percussive).
#[derive(Clone, Copy, Debug, Default)]
struct Envelope {
    peak: f32,
    age_sec: f32,
    active: bool,
}

impl Envelope {
    fn trigger(&mut self, peak: f32) {
        self.peak = peak.clamp(0.0, 1.0);
        self.age_sec = 0.0;
        self.active = true;
    }

    /// Advance by `dt_sec` and return the current level.
    fn step(&mut self, dt_sec: f32) -> f32 {
        if !self.active {
            return 0.0;
        }
        self.age_sec += dt_sec.max(0.0);
        if self.age_sec < ENV_ATTACK_SEC {
            self.peak * (self.age_sec / ENV_ATTACK_SEC)
        } else if self.age_sec < ENV_ATTACK_SEC + ENV_DECAY_SEC {
            let t = (self.age_sec - ENV_ATTACK_SEC) / ENV_DECAY_SEC;
            self.peak * (1.0 - (1.0 - ENV_SUSTAIN_LEVEL) * t)
        } else {
            let level = self.peak * ENV_SUSTAIN_LEVEL;
            self.active = level > 0.0;
            level
        }
    }
}

/// All mutable state of the motion→sound pipeline. One owner, no globals:
/// the frame loop calls `tick` once per animation frame, the gesture
/// handler calls `arm` and `set_sensor_status`.
pub struct PipelineState {
    voice_state: VoiceState,
    sensors: SensorStatus,
    smoothed: Vec3,
    intensity: f32,
    params: SynthParams,
    envelope: Envelope,
    trigger_latched: bool,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineState {
    pub fn new() -> Self {
        Self {
            voice_state: VoiceState::Idle,
            sensors: SensorStatus::Unknown,
            smoothed: Vec3::ZERO,
            intensity: 0.0,
            params: SynthParams {
                frequency_hz: INITIAL_FREQ_HZ,
                cutoff_hz: INITIAL_CUTOFF_HZ,
                resonance: FILTER_Q,
                amplitude: 0.0,
            },
            envelope: Envelope::default(),
            trigger_latched: false,
        }
    }

    /// One-way transition out of Idle; idempotent.
    pub fn arm(&mut self) {
        self.voice_state = VoiceState::Armed;
    }

    pub fn voice_state(&self) -> VoiceState {
        self.voice_state
    }

    pub fn set_sensor_status(&mut self, status: SensorStatus) {
        self.sensors = status;
    }

    pub fn sensor_status(&self) -> SensorStatus {
        self.sensors
    }

    pub fn params(&self) -> SynthParams {
        self.params
    }

    /// Sounding is implicit: armed with any audible output.
    pub fn is_sounding(&self) -> bool {
        self.voice_state == VoiceState::Armed && self.params.amplitude > 0.0
    }

    /// Run one pipeline step: smooth the raw sample, extract features, map
    /// them to targets, and move the applied parameters toward those
    /// targets. Always returns finite, range-clamped parameters; missing
    /// sensors just mean a zero sample.
    pub fn tick(&mut self, sample: Vec3, config: &UserConfig, dt_sec: f32) -> TickSnapshot {
        let previous = self.smoothed;
        self.smoothed = smooth_vec3(previous, sample, clamp_factor(config.smoothing));
        let features = extract(self.smoothed, previous);
        self.intensity = smooth(self.intensity, features.jerk_magnitude, INTENSITY_SMOOTHING);

        let target = map(&features, self.intensity, config);

        let lo = config.pitch_min_hz.min(config.pitch_max_hz);
        let hi = config.pitch_min_hz.max(config.pitch_max_hz);
        self.params.frequency_hz =
            smooth(self.params.frequency_hz, target.frequency_hz, FREQ_SMOOTHING).clamp(lo, hi);
        self.params.cutoff_hz = smooth(self.params.cutoff_hz, target.cutoff_hz, CUTOFF_SMOOTHING)
            .clamp(CUTOFF_SAFE_MIN_HZ, CUTOFF_SAFE_MAX_HZ);
        // resonance is allowed to jump; smoothing it is not wanted
        self.params.resonance = target.resonance;
        self.params.amplitude = self.apply_amplitude(target.amplitude, dt_sec);

        TickSnapshot {
            params: self.params,
            features,
            intensity: self.intensity,
        }
    }

    /// Amplitude policy application. Idle mutes unconditionally; once armed
    /// the level is floored at the baseline so degraded sensors hum instead
    /// of going silent.
    fn apply_amplitude(&mut self, command: AmplitudeCommand, dt_sec: f32) -> f32 {
        if self.voice_state == VoiceState::Idle {
            // muted regardless of the mapper; keep the latch clear so the
            // first armed spike can fire
            self.trigger_latched = false;
            return 0.0;
        }
        let level = match command {
            AmplitudeCommand::Level(target) => {
                self.trigger_latched = false;
                smooth(
                    self.params.amplitude,
                    target.max(BASELINE_LEVEL),
                    AMP_SMOOTHING,
                )
            }
            AmplitudeCommand::Trigger { peak } => {
                // one envelope per excursion above the threshold
                if !self.trigger_latched {
                    self.trigger_latched = true;
                    self.envelope.trigger(peak);
                }
                self.envelope.step(dt_sec).max(BASELINE_LEVEL)
            }
            AmplitudeCommand::Hold => {
                self.trigger_latched = false;
                self.envelope.step(dt_sec).max(BASELINE_LEVEL)
            }
        };
        level.clamp(0.0, 1.0)
    }
}
