use glam::Vec3;

/// Scalars derived from the smoothed acceleration each tick.
///
/// `jerk_magnitude` is the norm of the change since the previous tick:
/// near zero while the device is still, spiking on sudden motion.
/// `total_magnitude` is the norm of the current vector and stays non-zero
/// at rest (gravity). Both are ≥ 0 by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeatureSet {
    pub jerk_magnitude: f32,
    pub total_magnitude: f32,
}

/// Derive features from the current and previous smoothed vectors.
///
/// All-zero input (no sensor, no permission) yields an all-zero feature set;
/// that is the documented desktop fallback, not an error.
#[inline]
pub fn extract(current: Vec3, previous: Vec3) -> FeatureSet {
    FeatureSet {
        jerk_magnitude: (current - previous).length(),
        total_magnitude: current.length(),
    }
}
