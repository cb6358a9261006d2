#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Saw,
    Triangle,
}

/// Which amplitude strategy the voice controller runs.
///
/// `Continuous` tracks motion intensity as a level; `Transient` fires a
/// one-shot envelope on jerk spikes and lets it decay between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmplitudePolicy {
    Continuous,
    Transient,
}

/// What drives pitch: jerk spikes, absolute tilt, or the max of both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchDrive {
    Shake,
    Tilt,
    Blend,
}

/// Snapshot of the user-facing controls, polled once per tick.
///
/// Externally owned (the slider panel); the pipeline only reads it and must
/// cope with any value the UI can produce, including reversed pitch bounds
/// and zero sensitivity.
#[derive(Clone, Copy, Debug)]
pub struct UserConfig {
    /// Jerk full scale in m/s²; smaller = touchier
    pub sensitivity: f32,
    pub pitch_min_hz: f32,
    pub pitch_max_hz: f32,
    /// 0..1, mapped into the base cutoff band
    pub brightness: f32,
    /// EMA factor applied to the raw acceleration axes, (0,1)
    pub smoothing: f32,
    pub invert_pitch: bool,
    pub waveform: Waveform,
    pub policy: AmplitudePolicy,
    pub pitch_drive: PitchDrive,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            sensitivity: 40.0,
            pitch_min_hz: 100.0,
            pitch_max_hz: 800.0,
            brightness: 0.5,
            smoothing: 0.35,
            invert_pitch: false,
            waveform: Waveform::Saw,
            policy: AmplitudePolicy::Continuous,
            pitch_drive: PitchDrive::Blend,
        }
    }
}
