/// Mapping and smoothing tuning constants.
///
/// These express intended behavior (full scales, clamp limits, EMA factors)
/// and keep magic numbers out of the pipeline code.
// Accelerometer full scale; phones report roughly ±20 m/s² per axis
pub const ACCEL_FULL_SCALE: f32 = 20.0;

// EMA factors for derived scalars (all in (0,1); larger = snappier)
pub const INTENSITY_SMOOTHING: f32 = 0.3;
pub const FREQ_SMOOTHING: f32 = 0.15;
pub const CUTOFF_SMOOTHING: f32 = 0.25;
pub const AMP_SMOOTHING: f32 = 0.2;

// Brightness maps into this base cutoff band
pub const CUTOFF_BASE_MIN_HZ: f32 = 300.0;
pub const CUTOFF_BASE_MAX_HZ: f32 = 9_000.0;
// Base cutoff is scaled by (1 + intensity * gain) before the safety clamp
pub const CUTOFF_INTENSITY_GAIN: f32 = 0.08;
// Absolute filter safety window
pub const CUTOFF_SAFE_MIN_HZ: f32 = 300.0;
pub const CUTOFF_SAFE_MAX_HZ: f32 = 10_000.0;

// Bandpass resonance, fixed (changes abruptly with config, never smoothed)
pub const FILTER_Q: f32 = 8.0;

// Faint hum once armed; keeps degraded-sensor operation audible
pub const BASELINE_LEVEL: f32 = 0.05;

// Transient policy: normalized intensity at which an envelope fires
pub const TRIGGER_THRESHOLD: f32 = 0.12;

// One-shot envelope shape (seconds); sustain 0 makes it percussive
pub const ENV_ATTACK_SEC: f32 = 0.012;
pub const ENV_DECAY_SEC: f32 = 0.28;
pub const ENV_SUSTAIN_LEVEL: f32 = 0.0;

// Sensitivity at or below this is treated as "everything is full scale"
pub const SENSITIVITY_EPSILON: f32 = 1e-3;

// Defaults for a freshly built voice, before the first tick lands
pub const INITIAL_FREQ_HZ: f32 = 200.0;
pub const INITIAL_CUTOFF_HZ: f32 = 1_000.0;
