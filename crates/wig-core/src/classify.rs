use serde::Serialize;

use crate::archetype::{Archetype, VISUAL_TYPES};
use crate::error::{MorphError, Result};
use crate::params::{ParamVector, PartialParams};

/// Nearest archetype to a vector and the Euclidean distance to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Classification<'a> {
    pub archetype: &'a Archetype,
    pub distance: f64,
}

impl<'a> Classification<'a> {
    pub fn id(&self) -> &'a str {
        self.archetype.id
    }
}

/// Linear scan for the nearest archetype in `table`.
///
/// Ties keep the earliest entry in table order. A NaN distance never
/// displaces a candidate.
pub fn classify_in<'a>(table: &'a [Archetype], vector: &ParamVector) -> Result<Classification<'a>> {
    let mut best: Option<Classification<'a>> = None;
    for archetype in table {
        let distance = vector.distance(&archetype.coords);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(Classification {
                archetype,
                distance,
            });
        }
    }
    best.ok_or(MorphError::EmptyArchetypeTable)
}

/// Classify against the built-in visual types.
pub fn classify(vector: &ParamVector) -> Result<Classification<'static>> {
    classify_in(&VISUAL_TYPES, vector)
}

/// Classify a caller-supplied vector; missing parameters read as 0.0.
pub fn classify_partial(vector: &PartialParams) -> Result<Classification<'static>> {
    classify(&vector.or_zero())
}
