use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};

/// Periodic shape driving interpolation between two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sinusoidal,
    Triangular,
    Square,
}

impl Waveform {
    pub const ALL: [Waveform; 3] = [Waveform::Sinusoidal, Waveform::Triangular, Waveform::Square];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sinusoidal => "sinusoidal",
            Self::Triangular => "triangular",
            Self::Square => "square",
        }
    }

    /// Signal value in [0, 1] after `cycles` periods have elapsed.
    ///
    /// The phase angle is `θ = 2π · cycles`; the normalized phase is
    /// `cycles mod 1`, taken directly so half-cycle boundaries stay exact.
    pub fn sample(self, cycles: f64) -> f64 {
        let phase = cycles.rem_euclid(1.0);
        match self {
            Self::Sinusoidal => 0.5 * (1.0 + (TAU * cycles).sin()),
            Self::Triangular => {
                if phase < 0.5 {
                    2.0 * phase
                } else {
                    2.0 * (1.0 - phase)
                }
            }
            Self::Square => {
                if phase < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Waveform {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| {
                MorphError::not_found("waveform", s, Self::ALL.map(Waveform::as_str).to_vec())
            })
    }
}

/// Generate `num_steps` oscillation values in [0, 1].
///
/// Step `i` sits at angle `θ_i = 2π · num_cycles · i / num_steps`, so the
/// signal completes `num_cycles` periods (fractional allowed) over the
/// sequence. `num_steps = 0` yields an empty sequence.
pub fn generate(num_steps: usize, num_cycles: f64, waveform: Waveform) -> Vec<f64> {
    (0..num_steps)
        .map(|i| waveform.sample(num_cycles * i as f64 / num_steps as f64))
        .collect()
}
