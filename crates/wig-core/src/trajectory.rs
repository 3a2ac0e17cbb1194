//! Rhythmic trajectories: an oscillator signal driving linear interpolation
//! between two states.

use serde::Serialize;

use crate::constants::MAX_TOTAL_STEPS;
use crate::error::{MorphError, Result};
use crate::interpolate::blend;
use crate::morphospace::{Preset, preset};
use crate::oscillator::{Waveform, generate};
use crate::params::ParamVector;

/// One sample of a trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub step: usize,
    /// Position within the current cycle: `(step mod steps_per_cycle) / steps_per_cycle`.
    pub phase: f64,
    /// Interpolation weight toward state B.
    pub alpha: f64,
    pub state: ParamVector,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trajectory {
    pub steps_per_cycle: usize,
    pub points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    pub fn alphas(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.alpha).collect()
    }
}

/// Number of samples for `num_cycles` cycles of `steps_per_cycle` each.
///
/// The product is rounded to the nearest integer (half away from zero), so
/// fractional cycle counts are accepted. Non-finite or non-positive cycle
/// counts, a zero period, and a product that rounds to zero or exceeds
/// [`MAX_TOTAL_STEPS`] are rejected.
pub fn total_steps(num_cycles: f64, steps_per_cycle: usize) -> Result<usize> {
    if !num_cycles.is_finite() || num_cycles <= 0.0 {
        return Err(MorphError::invalid(
            "num_cycles",
            num_cycles,
            "must be a positive finite number",
        ));
    }
    if steps_per_cycle == 0 {
        return Err(MorphError::invalid(
            "steps_per_cycle",
            0.0,
            "must be a positive integer",
        ));
    }
    let total = (num_cycles * steps_per_cycle as f64).round();
    if total < 1.0 {
        return Err(MorphError::invalid(
            "total_steps",
            total,
            "num_cycles × steps_per_cycle must round to at least one step",
        ));
    }
    if total > MAX_TOTAL_STEPS as f64 {
        return Err(MorphError::invalid(
            "total_steps",
            total,
            "num_cycles × steps_per_cycle exceeds the trajectory size limit",
        ));
    }
    Ok(total as usize)
}

/// Signal rotation for a phase offset: `floor(phase_offset · steps_per_cycle)`.
///
/// Negative offsets yield negative rotations (rightward).
pub fn offset_steps(phase_offset: f64, steps_per_cycle: usize) -> Result<i64> {
    if !phase_offset.is_finite() {
        return Err(MorphError::invalid(
            "phase_offset",
            phase_offset,
            "must be finite",
        ));
    }
    Ok((phase_offset * steps_per_cycle as f64).floor() as i64)
}

/// Cyclic left rotation by `offset` positions; negative offsets rotate right
/// and offsets beyond the length wrap.
pub fn rotate_left<T>(values: &mut [T], offset: i64) {
    if values.is_empty() {
        return;
    }
    let shift = offset.rem_euclid(values.len() as i64) as usize;
    values.rotate_left(shift);
}

/// Build a trajectory from `state_a` toward `state_b`.
///
/// The oscillation signal is generated over the whole trajectory, rotated
/// by [`offset_steps`] so output index 0 starts `phase_offset` cycles into
/// the waveform, then each value drives [`blend`]. The step and phase of each
/// point describe its output position, not its pre-rotation position.
pub fn build(
    state_a: &ParamVector,
    state_b: &ParamVector,
    waveform: Waveform,
    num_cycles: f64,
    steps_per_cycle: usize,
    phase_offset: f64,
) -> Result<Trajectory> {
    let total = total_steps(num_cycles, steps_per_cycle)?;
    let offset = offset_steps(phase_offset, steps_per_cycle)?;

    let mut alphas = generate(total, num_cycles, waveform);
    rotate_left(&mut alphas, offset);

    let points = alphas
        .into_iter()
        .enumerate()
        .map(|(step, alpha)| TrajectoryPoint {
            step,
            phase: (step % steps_per_cycle) as f64 / steps_per_cycle as f64,
            alpha,
            state: blend(state_a, state_b, alpha),
        })
        .collect();

    Ok(Trajectory {
        steps_per_cycle,
        points,
    })
}

/// Build the canonical trajectory of a preset, with zero phase offset.
pub fn build_from(preset: &Preset) -> Result<Trajectory> {
    let (a, b) = preset.states()?;
    build(
        &a.coords,
        &b.coords,
        preset.waveform,
        f64::from(preset.num_cycles),
        preset.steps_per_cycle as usize,
        0.0,
    )
}

/// Look up a preset by identifier and build its trajectory.
pub fn build_preset(id: &str) -> Result<Trajectory> {
    build_from(preset(id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphospace::{PRESETS, state};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn endpoints() -> (ParamVector, ParamVector) {
        (
            state("everyday_natural").unwrap().coords,
            state("textured_natural").unwrap().coords,
        )
    }

    #[test]
    fn test_length_is_cycles_times_period() {
        let (a, b) = endpoints();
        let t = build(&a, &b, Waveform::Sinusoidal, 3.0, 22, 0.0).unwrap();
        assert_eq!(t.len(), 66);
        assert_eq!(t.points[23].step, 23);
        assert_abs_diff_eq!(t.points[23].phase, 1.0 / 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_first_point_matches_signal_start() {
        let (a, b) = endpoints();
        for waveform in Waveform::ALL {
            let t = build(&a, &b, waveform, 2.0, 10, 0.0).unwrap();
            let alpha0 = generate(20, 2.0, waveform)[0];
            assert_eq!(t.points[0].alpha, alpha0);
            assert_eq!(t.points[0].state, blend(&a, &b, alpha0));
        }
    }

    #[test]
    fn test_triangular_starts_exactly_at_state_a() {
        let (a, b) = endpoints();
        let t = build(&a, &b, Waveform::Triangular, 1.0, 8, 0.0).unwrap();
        assert_eq!(t.points[0].state, a);
        assert_eq!(t.points[4].state, b);
    }

    #[test]
    fn test_phase_offset_half_cycle_starts_at_state_b() {
        let (a, b) = endpoints();
        let t = build(&a, &b, Waveform::Triangular, 2.0, 8, 0.5).unwrap();
        assert_eq!(t.points[0].alpha, 1.0);
        assert_eq!(t.points[0].state, b);
        // Phase labels the output position, not the rotated source.
        assert_eq!(t.points[0].phase, 0.0);
    }

    #[test]
    fn test_phase_offset_floors() {
        // 0.3 × 8 = 2.4 → rotate by 2.
        assert_eq!(offset_steps(0.3, 8).unwrap(), 2);
        assert_eq!(offset_steps(-0.1, 8).unwrap(), -1);
        assert_eq!(offset_steps(0.0, 8).unwrap(), 0);
        assert!(offset_steps(f64::NAN, 8).is_err());
    }

    #[test]
    fn test_offset_is_rotation_of_unshifted_signal() {
        let (a, b) = endpoints();
        let base = build(&a, &b, Waveform::Sinusoidal, 3.0, 20, 0.0).unwrap();
        let shifted = build(&a, &b, Waveform::Sinusoidal, 3.0, 20, 0.25).unwrap();
        let mut expected = base.alphas();
        expected.rotate_left(5);
        assert_eq!(shifted.alphas(), expected);
    }

    #[test]
    fn test_negative_and_wrapping_offsets() {
        let mut v = vec![0, 1, 2, 3, 4];
        rotate_left(&mut v, -1);
        assert_eq!(v, vec![4, 0, 1, 2, 3]);

        let mut w = vec![0, 1, 2, 3, 4];
        rotate_left(&mut w, 7);
        assert_eq!(w, vec![2, 3, 4, 0, 1]);

        let mut empty: Vec<u8> = Vec::new();
        rotate_left(&mut empty, 3);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_fractional_cycles_round_total() {
        assert_eq!(total_steps(2.5, 10).unwrap(), 25);
        assert_eq!(total_steps(1.25, 10).unwrap(), 13);
        let err = total_steps(0.04, 10).unwrap_err();
        assert!(err.to_string().contains("total_steps"), "{err}");
    }

    #[test]
    fn test_rejects_non_positive_counts() {
        let (a, b) = endpoints();
        assert!(build(&a, &b, Waveform::Square, 0.0, 10, 0.0).is_err());
        assert!(build(&a, &b, Waveform::Square, -2.0, 10, 0.0).is_err());
        assert!(build(&a, &b, Waveform::Square, f64::INFINITY, 10, 0.0).is_err());
        assert!(build(&a, &b, Waveform::Square, 2.0, 0, 0.0).is_err());
    }

    #[test]
    fn test_oversized_trajectory_rejected() {
        let (a, b) = endpoints();
        let err = total_steps(1e300, 20).unwrap_err();
        assert!(matches!(err, MorphError::InvalidNumeric { .. }), "{err}");
        assert!(build(&a, &b, Waveform::Sinusoidal, 1e300, 20, 0.0).is_err());
        assert!(build(&a, &b, Waveform::Square, 1.0, usize::MAX, 0.0).is_err());

        assert_eq!(total_steps(1.0, MAX_TOTAL_STEPS).unwrap(), MAX_TOTAL_STEPS);
        assert!(total_steps(1.0, MAX_TOTAL_STEPS + 1).is_err());
    }

    #[test]
    fn test_every_preset_builds() {
        for p in &PRESETS {
            let t = build_from(p).unwrap();
            assert_eq!(t.len(), p.total_steps(), "{}", p.id);
            assert_eq!(t.steps_per_cycle, p.steps_per_cycle as usize);
        }
    }

    #[test]
    fn test_preset_equals_explicit_build() {
        let p = preset("drama_sweep").unwrap();
        let (a, b) = p.states().unwrap();
        let explicit = build(&a.coords, &b.coords, Waveform::Triangular, 2.0, 28, 0.0).unwrap();
        assert_eq!(build_preset("drama_sweep").unwrap(), explicit);
    }

    #[test]
    fn test_unknown_preset() {
        let err = build_preset("warp_drive").unwrap_err();
        assert!(matches!(err, MorphError::NotFound { kind: "preset", .. }));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            build_preset("color_pulse").unwrap(),
            build_preset("color_pulse").unwrap()
        );
    }

    proptest! {
        // Rotating by p and then by 1 - p is a rotation by one full period
        // when p · period is whole, which restores a single-cycle signal.
        // Power-of-two periods keep p and 1 - p exact.
        #[test]
        fn prop_complementary_offsets_restore_order(exp in 0u32..7, k in 0usize..64) {
            let period = 1usize << exp;
            let k = k % period;
            let p = k as f64 / period as f64;
            let original: Vec<usize> = (0..period).collect();
            let mut v = original.clone();
            rotate_left(&mut v, offset_steps(p, period).unwrap());
            rotate_left(&mut v, offset_steps(1.0 - p, period).unwrap());
            prop_assert_eq!(v, original);
        }

        #[test]
        fn prop_alpha_zero_and_one_hit_endpoints(period in 2usize..40, cycles in 1u32..6) {
            let (a, b) = endpoints();
            let t = build(&a, &b, Waveform::Square, f64::from(cycles), period * 2, 0.0).unwrap();
            for point in t.iter() {
                if point.alpha == 0.0 {
                    prop_assert_eq!(point.state, a);
                } else {
                    prop_assert_eq!(point.alpha, 1.0);
                    prop_assert_eq!(point.state, b);
                }
            }
        }
    }
}
