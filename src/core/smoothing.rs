use glam::Vec3;

/// Exponential approach toward `target`.
///
/// Returns `previous + (target - previous) * factor`. With `factor` in (0,1)
/// repeated calls converge monotonically to a constant target and never
/// overshoot it. Factors outside (0,1) are a caller contract violation; the
/// arithmetic still runs but the result is no longer a smoothing step.
#[inline]
pub fn smooth(previous: f32, target: f32, factor: f32) -> f32 {
    previous + (target - previous) * factor
}

/// Component-wise `smooth` over an acceleration vector.
#[inline]
pub fn smooth_vec3(previous: Vec3, target: Vec3, factor: f32) -> Vec3 {
    previous + (target - previous) * factor
}

/// Clamp a UI-supplied factor into the open interval the smoother requires.
#[inline]
pub fn clamp_factor(factor: f32) -> f32 {
    factor.clamp(0.01, 0.99)
}
