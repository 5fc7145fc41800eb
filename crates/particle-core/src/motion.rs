use crate::params::MotionParams;
use glam::Vec3;

/// Idle wobble added after smoothing: x follows a sine, y a cosine, z is left alone.
///
/// The phase mixes wall-clock milliseconds with the particle index, so it is
/// evaluated in `f64`; millisecond timestamps are far beyond `f32` precision.
#[inline]
pub fn jitter(params: &MotionParams, now_ms: f64, index: usize) -> Vec3 {
    if params.jitter_amplitude == 0.0 {
        return Vec3::ZERO;
    }
    let i = index as f64;
    let amp = params.jitter_amplitude;
    Vec3::new(
        ((now_ms * params.jitter_freq_x + i).sin() * amp) as f32,
        ((now_ms * params.jitter_freq_y + i).cos() * amp) as f32,
        0.0,
    )
}

/// Move every particle one frame toward `target * scale`.
///
/// `scale` is the already-smoothed gesture scale for this frame and is
/// applied uniformly about the origin.
pub fn integrate(
    current: &mut [Vec3],
    target: &[Vec3],
    scale: f32,
    params: &MotionParams,
    now_ms: f64,
) {
    debug_assert_eq!(current.len(), target.len());
    let rate = params.position_rate;
    for (i, (pos, tgt)) in current.iter_mut().zip(target).enumerate() {
        let goal = *tgt * scale;
        *pos += (goal - *pos) * rate;
        *pos += jitter(params, now_ms, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_matches_reference_formula() {
        let params = MotionParams::default();
        let now = 1_700_000_000_123.0_f64;
        let j = jitter(&params, now, 7);
        let ex = ((now * 0.001 + 7.0).sin() * 0.01) as f32;
        let ey = ((now * 0.0012 + 7.0).cos() * 0.01) as f32;
        assert_eq!(j, Vec3::new(ex, ey, 0.0));
    }

    #[test]
    fn default_amplitude_is_exactly_one_hundredth() {
        let params = MotionParams::default();
        assert_eq!(params.jitter_amplitude, 0.01);
        // phase 0 on y puts cos at its peak
        let j = jitter(&params, 0.0, 0);
        assert_eq!(j.y, 0.01_f32);
        assert_eq!(j.x, 0.0);
    }

    #[test]
    fn jitter_is_bounded_by_amplitude() {
        let params = MotionParams::default();
        for i in 0..200 {
            let j = jitter(&params, 12_345.6 * i as f64, i);
            assert!(j.x.abs() <= params.jitter_amplitude as f32);
            assert!(j.y.abs() <= params.jitter_amplitude as f32);
            assert_eq!(j.z, 0.0);
        }
    }

    #[test]
    fn integrate_scales_targets_uniformly() {
        let params = MotionParams::quiet();
        let target = [Vec3::new(1.0, -2.0, 3.0)];
        let mut current = [Vec3::ZERO];
        integrate(&mut current, &target, 2.0, &params, 0.0);
        let expected = Vec3::new(2.0, -4.0, 6.0) * params.position_rate;
        assert!((current[0] - expected).length() < 1e-6);
    }
}
