use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::PARAMETER_COUNT;
use crate::error::{MorphError, Result};

/// One axis of the normalized wig morphospace.
///
/// Values conventionally lie in [0, 1] but nothing clamps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    /// 0 = opaque wefted cap, 1 = invisible lace.
    ConstructionTransparency,
    /// 0 = pin-straight (1A), 1 = tight coily (4C).
    TextureCurlIntensity,
    /// 0 = sparse and scalp-visible, 1 = ultra-dense.
    DensityVolume,
    /// 0 = flat single colour, 1 = multi-technique dimensional colour.
    ColorDimension,
    /// 0 = understated comfort, 1 = extreme theatrical.
    StylingDrama,
}

impl Parameter {
    /// Canonical parameter order. Tie-breaks and output ordering follow it.
    pub const ALL: [Parameter; PARAMETER_COUNT] = [
        Parameter::ConstructionTransparency,
        Parameter::TextureCurlIntensity,
        Parameter::DensityVolume,
        Parameter::ColorDimension,
        Parameter::StylingDrama,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConstructionTransparency => "construction_transparency",
            Self::TextureCurlIntensity => "texture_curl_intensity",
            Self::DensityVolume => "density_volume",
            Self::ColorDimension => "color_dimension",
            Self::StylingDrama => "styling_drama",
        }
    }

    pub fn names() -> [&'static str; PARAMETER_COUNT] {
        Self::ALL.map(Parameter::as_str)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| MorphError::not_found("parameter", s, Self::names().to_vec()))
    }
}

/// A complete point in morphospace: exactly one value per parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamVector {
    pub construction_transparency: f64,
    pub texture_curl_intensity: f64,
    pub density_volume: f64,
    pub color_dimension: f64,
    pub styling_drama: f64,
}

impl ParamVector {
    pub const fn new(
        construction_transparency: f64,
        texture_curl_intensity: f64,
        density_volume: f64,
        color_dimension: f64,
        styling_drama: f64,
    ) -> Self {
        Self {
            construction_transparency,
            texture_curl_intensity,
            density_volume,
            color_dimension,
            styling_drama,
        }
    }

    /// Build a vector by evaluating `f` once per parameter, in canonical order.
    pub fn from_fn(mut f: impl FnMut(Parameter) -> f64) -> Self {
        Self {
            construction_transparency: f(Parameter::ConstructionTransparency),
            texture_curl_intensity: f(Parameter::TextureCurlIntensity),
            density_volume: f(Parameter::DensityVolume),
            color_dimension: f(Parameter::ColorDimension),
            styling_drama: f(Parameter::StylingDrama),
        }
    }

    pub fn get(&self, param: Parameter) -> f64 {
        match param {
            Parameter::ConstructionTransparency => self.construction_transparency,
            Parameter::TextureCurlIntensity => self.texture_curl_intensity,
            Parameter::DensityVolume => self.density_volume,
            Parameter::ColorDimension => self.color_dimension,
            Parameter::StylingDrama => self.styling_drama,
        }
    }

    /// (parameter, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.into_iter().map(|p| (p, self.get(p)))
    }

    /// Apply `f` to every component.
    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|p| f(self.get(p)))
    }

    /// Euclidean distance over all five parameters.
    pub fn distance(&self, other: &Self) -> f64 {
        euclidean_distance(self, other)
    }
}

impl From<[f64; PARAMETER_COUNT]> for ParamVector {
    fn from(values: [f64; PARAMETER_COUNT]) -> Self {
        Self::new(values[0], values[1], values[2], values[3], values[4])
    }
}

/// Euclidean distance between two complete vectors.
pub fn euclidean_distance(a: &ParamVector, b: &ParamVector) -> f64 {
    Parameter::ALL
        .iter()
        .map(|&p| (a.get(p) - b.get(p)).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// A possibly incomplete vector, as supplied by callers.
///
/// Classification and distance read missing parameters as 0.0; interpolation
/// requires [`PartialParams::complete`] to succeed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_transparency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture_curl_intensity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_dimension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling_drama: Option<f64>,
}

impl PartialParams {
    pub fn get(&self, param: Parameter) -> Option<f64> {
        match param {
            Parameter::ConstructionTransparency => self.construction_transparency,
            Parameter::TextureCurlIntensity => self.texture_curl_intensity,
            Parameter::DensityVolume => self.density_volume,
            Parameter::ColorDimension => self.color_dimension,
            Parameter::StylingDrama => self.styling_drama,
        }
    }

    pub fn set(&mut self, param: Parameter, value: f64) {
        let slot = match param {
            Parameter::ConstructionTransparency => &mut self.construction_transparency,
            Parameter::TextureCurlIntensity => &mut self.texture_curl_intensity,
            Parameter::DensityVolume => &mut self.density_volume,
            Parameter::ColorDimension => &mut self.color_dimension,
            Parameter::StylingDrama => &mut self.styling_drama,
        };
        *slot = Some(value);
    }

    /// Parameters without a value, in canonical order.
    pub fn missing(&self) -> Vec<Parameter> {
        Parameter::ALL
            .into_iter()
            .filter(|&p| self.get(p).is_none())
            .collect()
    }

    /// Convert to a complete vector, failing with the missing parameter names.
    pub fn complete(&self) -> Result<ParamVector> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(MorphError::ShapeMismatch { missing });
        }
        Ok(self.or_zero())
    }

    /// Permissive conversion: missing parameters read as 0.0.
    pub fn or_zero(&self) -> ParamVector {
        ParamVector::from_fn(|p| self.get(p).unwrap_or(0.0))
    }
}

impl From<ParamVector> for PartialParams {
    fn from(v: ParamVector) -> Self {
        Self {
            construction_transparency: Some(v.construction_transparency),
            texture_curl_intensity: Some(v.texture_curl_intensity),
            density_volume: Some(v.density_volume),
            color_dimension: Some(v.color_dimension),
            styling_drama: Some(v.styling_drama),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_order_and_names() {
        assert_eq!(
            Parameter::names(),
            [
                "construction_transparency",
                "texture_curl_intensity",
                "density_volume",
                "color_dimension",
                "styling_drama",
            ]
        );
        for p in Parameter::ALL {
            assert_eq!(p.as_str().parse::<Parameter>().unwrap(), p);
        }
        assert!("Density_Volume".parse::<Parameter>().is_err());
    }

    #[test]
    fn test_get_and_iter_agree() {
        let v = ParamVector::new(0.1, 0.2, 0.3, 0.9, 0.5);
        assert_eq!(v.get(Parameter::ColorDimension), 0.9);
        let values: Vec<f64> = v.iter().map(|(_, x)| x).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3, 0.9, 0.5]);
    }

    #[test]
    fn test_distance_zero_to_self() {
        let v = ParamVector::new(0.6, 0.25, 0.5, 0.15, 0.2);
        assert_eq!(v.distance(&v), 0.0);
    }

    #[test]
    fn test_distance_unit_axis() {
        let a = ParamVector::default();
        let b = ParamVector::new(0.0, 0.0, 3.0, 4.0, 0.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_values_propagate() {
        let a = ParamVector::new(-1.0, 2.0, 0.0, 0.0, 0.0);
        let doubled = a.map(|x| x * 2.0);
        assert_eq!(doubled.construction_transparency, -2.0);
        assert_eq!(doubled.texture_curl_intensity, 4.0);
    }

    #[test]
    fn test_partial_complete_reports_missing() {
        let mut p = PartialParams::default();
        p.set(Parameter::ConstructionTransparency, 0.5);
        p.set(Parameter::ColorDimension, 0.2);
        let err = p.complete().unwrap_err();
        assert_eq!(
            err,
            MorphError::ShapeMismatch {
                missing: vec![
                    Parameter::TextureCurlIntensity,
                    Parameter::DensityVolume,
                    Parameter::StylingDrama,
                ]
            }
        );
    }

    #[test]
    fn test_partial_or_zero_fills_missing() {
        let mut p = PartialParams::default();
        p.set(Parameter::StylingDrama, 0.7);
        assert_eq!(p.or_zero(), ParamVector::new(0.0, 0.0, 0.0, 0.0, 0.7));
    }

    #[test]
    fn test_partial_roundtrips_complete_vector() {
        let v = ParamVector::new(0.9, 0.4, 0.7, 0.75, 0.8);
        assert_eq!(PartialParams::from(v).complete().unwrap(), v);
    }

    #[test]
    fn test_partial_deserializes_sparse_json() {
        let p: PartialParams =
            serde_json::from_str(r#"{"density_volume": 0.4, "unrelated": 1}"#).unwrap();
        assert_eq!(p.density_volume, Some(0.4));
        assert_eq!(p.missing().len(), 4);
    }

    #[test]
    fn test_vector_serializes_named_fields() {
        let v = ParamVector::new(0.6, 0.25, 0.5, 0.15, 0.2);
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["texture_curl_intensity"], 0.25);
        assert_eq!(json.as_object().unwrap().len(), PARAMETER_COUNT);
    }
}
