use serde::Serialize;

use crate::classify::{Classification, classify};
use crate::error::Result;
use crate::params::{Parameter, ParamVector, PartialParams};

/// Side-by-side comparison of two morphospace points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub euclidean_distance: f64,
    /// Signed per-parameter differences, `b - a`.
    pub differences: ParamVector,
    /// First parameter, in canonical order, with the largest absolute difference.
    pub max_difference_parameter: Parameter,
    pub nearest_a: Classification<'static>,
    pub nearest_b: Classification<'static>,
}

pub fn compare(a: &ParamVector, b: &ParamVector) -> Result<Comparison> {
    let differences = ParamVector::from_fn(|p| b.get(p) - a.get(p));
    let euclidean_distance = differences.iter().map(|(_, d)| d * d).sum::<f64>().sqrt();

    let mut max_difference_parameter = Parameter::ALL[0];
    let mut max_abs = differences.get(max_difference_parameter).abs();
    for (p, d) in differences.iter().skip(1) {
        if d.abs() > max_abs {
            max_abs = d.abs();
            max_difference_parameter = p;
        }
    }

    Ok(Comparison {
        euclidean_distance,
        differences,
        max_difference_parameter,
        nearest_a: classify(a)?,
        nearest_b: classify(b)?,
    })
}

/// Compare caller-supplied vectors; missing parameters read as 0.0.
pub fn compare_partial(a: &PartialParams, b: &PartialParams) -> Result<Comparison> {
    compare(&a.or_zero(), &b.or_zero())
}
