use crate::error::Result;
use crate::params::{ParamVector, PartialParams};

/// Linear blend: `a·(1 - alpha) + b·alpha`, per parameter.
///
/// `alpha` is not clamped; values outside [0, 1] extrapolate.
pub fn blend(a: &ParamVector, b: &ParamVector, alpha: f64) -> ParamVector {
    ParamVector::from_fn(|p| a.get(p) * (1.0 - alpha) + b.get(p) * alpha)
}

/// Blend caller-supplied vectors. Both must be complete.
pub fn blend_partial(a: &PartialParams, b: &PartialParams, alpha: f64) -> Result<ParamVector> {
    Ok(blend(&a.complete()?, &b.complete()?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphError;
    use crate::morphospace::state;
    use crate::params::Parameter;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_midpoint_of_natural_states() {
        let a = state("everyday_natural").unwrap().coords;
        let b = state("textured_natural").unwrap().coords;
        let mid = blend(&a, &b, 0.5);
        let expected = ParamVector::new(0.625, 0.50, 0.55, 0.175, 0.275);
        for p in Parameter::ALL {
            assert_abs_diff_eq!(mid.get(p), expected.get(p), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_endpoints_exact() {
        let a = state("medical_comfort").unwrap().coords;
        let b = state("theatrical_volume").unwrap().coords;
        assert_eq!(blend(&a, &b, 0.0), a);
        assert_eq!(blend(&a, &b, 1.0), b);
    }

    #[test]
    fn test_extrapolates_outside_unit_interval() {
        let a = ParamVector::default();
        let b = ParamVector::new(1.0, 1.0, 1.0, 1.0, 1.0);
        let v = blend(&a, &b, 1.5);
        assert_abs_diff_eq!(v.density_volume, 1.5, epsilon = 1e-12);
        let v = blend(&a, &b, -0.5);
        assert_abs_diff_eq!(v.styling_drama, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_requires_complete_vectors() {
        let full = PartialParams::from(ParamVector::default());
        let mut partial = PartialParams::default();
        partial.set(Parameter::DensityVolume, 0.3);

        let err = blend_partial(&full, &partial, 0.5).unwrap_err();
        assert!(matches!(err, MorphError::ShapeMismatch { ref missing } if missing.len() == 4));
        assert!(blend_partial(&full, &full, 0.5).is_ok());
    }
}
