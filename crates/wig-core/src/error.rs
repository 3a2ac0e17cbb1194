use std::fmt;

use crate::params::Parameter;

/// Every failure the engine reports. All are synchronous and carry the
/// offending identifier or value.
#[derive(Debug, Clone, PartialEq)]
pub enum MorphError {
    /// Identifier absent from a static table (state, preset, archetype,
    /// waveform, taxonomy entry).
    NotFound {
        kind: &'static str,
        id: String,
        available: Vec<&'static str>,
    },
    /// A complete vector was required but some parameters are missing.
    ShapeMismatch { missing: Vec<Parameter> },
    /// A count or numeric control is outside its legal range.
    InvalidNumeric {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// The archetype table has no entries. Configuration error.
    EmptyArchetypeTable,
}

impl MorphError {
    pub fn not_found(kind: &'static str, id: &str, available: Vec<&'static str>) -> Self {
        MorphError::NotFound {
            kind,
            id: id.to_string(),
            available,
        }
    }

    pub fn invalid(name: &'static str, value: f64, expected: &'static str) -> Self {
        MorphError::InvalidNumeric {
            name,
            value,
            expected,
        }
    }

    /// Identifiers the caller could have used instead, if any.
    pub fn available(&self) -> &[&'static str] {
        match self {
            MorphError::NotFound { available, .. } => available,
            _ => &[],
        }
    }
}

impl fmt::Display for MorphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphError::NotFound { kind, id, .. } => write!(f, "unknown {kind}: {id}"),
            MorphError::ShapeMismatch { missing } => {
                let names: Vec<&str> = missing.iter().map(|p| p.as_str()).collect();
                write!(f, "incomplete parameter vector, missing: {}", names.join(", "))
            }
            MorphError::InvalidNumeric {
                name,
                value,
                expected,
            } => write!(f, "invalid {name}: {value} ({expected})"),
            MorphError::EmptyArchetypeTable => write!(f, "archetype table is empty"),
        }
    }
}

impl std::error::Error for MorphError {}

pub type Result<T> = std::result::Result<T, MorphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_identifier() {
        let err = MorphError::not_found("preset", "nope", vec!["texture_morph"]);
        assert_eq!(err.to_string(), "unknown preset: nope");
        assert_eq!(err.available(), &["texture_morph"]);
    }

    #[test]
    fn test_shape_mismatch_lists_parameters() {
        let err = MorphError::ShapeMismatch {
            missing: vec![Parameter::DensityVolume, Parameter::StylingDrama],
        };
        assert_eq!(
            err.to_string(),
            "incomplete parameter vector, missing: density_volume, styling_drama"
        );
        assert!(err.available().is_empty());
    }
}
