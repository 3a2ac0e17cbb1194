use serde::Serialize;

use crate::classify::{Classification, classify};
use crate::constants::MAX_KEYFRAME_COUNT;
use crate::error::{MorphError, Result};
use crate::trajectory::{Trajectory, TrajectoryPoint};

/// An evenly sampled trajectory point, annotated with its nearest archetype.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Keyframe {
    /// Index into the source trajectory.
    pub index: usize,
    /// Position along the whole trajectory: `index / len`.
    pub progress: f64,
    pub point: TrajectoryPoint,
    pub classification: Classification<'static>,
}

/// Indices `floor(i · len / count)` for `i` in `0..count`.
///
/// `count` need not divide `len`; repeated indices appear when
/// `count > len`. `count` is capped at [`MAX_KEYFRAME_COUNT`].
pub fn keyframe_indices(len: usize, count: usize) -> Result<Vec<usize>> {
    if count == 0 {
        return Err(MorphError::invalid(
            "keyframe_count",
            0.0,
            "must be a positive integer",
        ));
    }
    if count > MAX_KEYFRAME_COUNT {
        return Err(MorphError::invalid(
            "keyframe_count",
            count as f64,
            "exceeds the keyframe limit",
        ));
    }
    if len == 0 {
        return Err(MorphError::invalid(
            "trajectory_length",
            0.0,
            "cannot sample keyframes from an empty trajectory",
        ));
    }
    // Widened so `i · len` cannot overflow; the quotient is below `len`.
    Ok((0..count)
        .map(|i| (i as u128 * len as u128 / count as u128) as usize)
        .collect())
}

pub fn keyframes(trajectory: &Trajectory, count: usize) -> Result<Vec<Keyframe>> {
    let len = trajectory.len();
    keyframe_indices(len, count)?
        .into_iter()
        .map(|index| {
            let point = trajectory.points[index];
            Ok(Keyframe {
                index,
                progress: index as f64 / len as f64,
                point,
                classification: classify(&point.state)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::build_preset;

    #[test]
    fn test_indices_for_uneven_division() {
        assert_eq!(keyframe_indices(22, 4).unwrap(), vec![0, 5, 11, 16]);
        assert_eq!(keyframe_indices(66, 4).unwrap(), vec![0, 16, 33, 49]);
    }

    #[test]
    fn test_indices_repeat_when_count_exceeds_len() {
        assert_eq!(keyframe_indices(3, 6).unwrap(), vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_zero_count_and_empty_trajectory_rejected() {
        assert!(keyframe_indices(10, 0).is_err());
        assert!(keyframe_indices(0, 3).is_err());
    }

    #[test]
    fn test_count_above_limit_rejected() {
        let err = keyframe_indices(70, usize::MAX).unwrap_err();
        assert!(matches!(err, MorphError::InvalidNumeric { .. }), "{err}");
        assert!(keyframe_indices(70, MAX_KEYFRAME_COUNT + 1).is_err());
        assert_eq!(
            keyframe_indices(70, MAX_KEYFRAME_COUNT).unwrap().len(),
            MAX_KEYFRAME_COUNT
        );
    }

    #[test]
    fn test_large_length_does_not_overflow() {
        let indices = keyframe_indices(usize::MAX, 4).unwrap();
        assert_eq!(indices[0], 0);
        assert_eq!(indices[2], usize::MAX / 2);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_keyframes_annotated() {
        let t = build_preset("texture_morph").unwrap();
        let frames = keyframes(&t, 4).unwrap();
        assert_eq!(frames.len(), 4);
        for f in &frames {
            assert_eq!(f.point, t.points[f.index]);
            assert_eq!(f.classification, classify(&f.point.state).unwrap());
            assert!(f.progress < 1.0);
        }
        // Sinusoid starts midway between the two natural states.
        assert_eq!(frames[0].index, 0);
        assert_eq!(frames[0].point.alpha, 0.5);
    }

    #[test]
    fn test_single_keyframe_is_first_point() {
        let t = build_preset("drama_sweep").unwrap();
        let frames = keyframes(&t, 1).unwrap();
        assert_eq!(frames[0].index, 0);
        assert_eq!(frames[0].progress, 0.0);
    }
}
