/// Helpers for building frame parameter batches
use std::f64::consts::TAU;

use crate::transform::FrameParams;

impl FrameParams {
    /// Component-wise linear interpolation, `t = 0` gives `self`
    pub fn lerp(&self, other: &FrameParams, t: f64) -> FrameParams {
        let a = self.to_array();
        let b = other.to_array();
        let out: [f64; 6] = std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t);
        FrameParams::from(out)
    }
}

/// Linearly interpolate between consecutive keyframes
///
/// Each segment contributes `steps_per_segment` frames starting at its first
/// key; the last key is appended once at the end.
pub fn interpolate(keys: &[FrameParams], steps_per_segment: usize) -> Vec<FrameParams> {
    let Some(last) = keys.last() else {
        return Vec::new();
    };
    let steps = steps_per_segment.max(1);

    let mut frames = Vec::with_capacity((keys.len() - 1) * steps + 1);
    for pair in keys.windows(2) {
        for step in 0..steps {
            frames.push(pair[0].lerp(&pair[1], step as f64 / steps as f64));
        }
    }
    frames.push(*last);
    frames
}

/// One full turn about the XY and YZ planes, held `distance` in front of the camera
pub fn turntable(n_frames: usize, distance: f64) -> Vec<FrameParams> {
    (0..n_frames)
        .map(|i| {
            let angle = TAU * i as f64 / n_frames as f64;
            FrameParams::new(angle, 0.0, angle * 0.5, 0.0, 0.0, -distance)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints() {
        let a = FrameParams::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0);
        let b = FrameParams::new(1.0, 1.0, 0.0, -3.0, 4.0, 7.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        let mid = a.lerp(&b, 0.5);
        assert_relative_eq!(mid.r1, 0.5);
        assert_relative_eq!(mid.tx, 0.0);
        assert_relative_eq!(mid.tz, 6.0);
    }

    #[test]
    fn test_interpolate_hits_keyframes() {
        let keys = [
            FrameParams::default(),
            FrameParams::new(0.0, 0.0, 0.0, 4.0, 0.0, 0.0),
            FrameParams::new(0.0, 0.0, 0.0, 4.0, 8.0, 0.0),
        ];
        let frames = interpolate(&keys, 4);
        assert_eq!(frames.len(), 9);
        assert_eq!(frames[0], keys[0]);
        assert_eq!(frames[4], keys[1]);
        assert_eq!(frames[8], keys[2]);
        assert_relative_eq!(frames[1].tx, 1.0);
        assert_relative_eq!(frames[6].ty, 4.0);
    }

    #[test]
    fn test_interpolate_edge_cases() {
        assert!(interpolate(&[], 3).is_empty());
        let single = [FrameParams::new(1.0, 0.0, 0.0, 0.0, 0.0, -2.0)];
        assert_eq!(interpolate(&single, 3), single.to_vec());
    }

    #[test]
    fn test_turntable() {
        let frames = turntable(4, 3.0);
        assert_eq!(frames.len(), 4);
        assert!(frames.iter().all(|f| f.tz == -3.0));
        assert_eq!(frames[0].r1, 0.0);
        assert_relative_eq!(frames[2].r1, std::f64::consts::PI);
        assert_relative_eq!(frames[2].r3, std::f64::consts::FRAC_PI_2);
    }
}
