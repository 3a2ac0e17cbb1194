//! Canonical states and rhythmic presets of the wig morphospace.
//!
//! Both tables are compile-time constants; iteration order is the canonical
//! order reported to callers.

use serde::Serialize;

use crate::archetype::VISUAL_TYPES;
use crate::error::{MorphError, Result};
use crate::oscillator::Waveform;
use crate::params::ParamVector;
use crate::table::{self, Named};

/// A named fixed point in morphospace.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NamedState {
    pub id: &'static str,
    pub coords: ParamVector,
}

impl Named for NamedState {
    fn id(&self) -> &'static str {
        self.id
    }
}

pub static STATES: [NamedState; 8] = [
    NamedState {
        id: "everyday_natural",
        coords: ParamVector::new(0.60, 0.25, 0.50, 0.15, 0.20),
    },
    NamedState {
        id: "red_carpet_glam",
        coords: ParamVector::new(0.90, 0.40, 0.70, 0.75, 0.80),
    },
    NamedState {
        id: "editorial_sculpt",
        coords: ParamVector::new(0.75, 0.05, 0.65, 0.50, 0.85),
    },
    NamedState {
        id: "theatrical_volume",
        coords: ParamVector::new(0.30, 0.45, 0.90, 0.60, 0.95),
    },
    NamedState {
        id: "protective_crown",
        coords: ParamVector::new(0.55, 0.85, 0.55, 0.10, 0.30),
    },
    NamedState {
        id: "fantasy_extreme",
        coords: ParamVector::new(1.00, 0.50, 1.00, 1.00, 1.00),
    },
    NamedState {
        id: "medical_comfort",
        coords: ParamVector::new(0.45, 0.20, 0.40, 0.05, 0.05),
    },
    NamedState {
        id: "textured_natural",
        coords: ParamVector::new(0.65, 0.75, 0.60, 0.20, 0.35),
    },
];

/// A pre-configured oscillation between two states.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Preset {
    pub id: &'static str,
    pub state_a: &'static str,
    pub state_b: &'static str,
    pub waveform: Waveform,
    pub num_cycles: u32,
    /// Samples per cycle; also reported as the preset's period.
    pub steps_per_cycle: u32,
    pub description: &'static str,
}

impl Named for Preset {
    fn id(&self) -> &'static str {
        self.id
    }
}

impl Preset {
    pub fn total_steps(&self) -> usize {
        self.num_cycles as usize * self.steps_per_cycle as usize
    }

    /// Resolve both endpoint states.
    pub fn states(&self) -> Result<(&'static NamedState, &'static NamedState)> {
        Ok((state(self.state_a)?, state(self.state_b)?))
    }

    /// Human-readable endpoint pair, e.g. `everyday_natural ↔ textured_natural`.
    pub fn states_label(&self) -> String {
        format!("{} ↔ {}", self.state_a, self.state_b)
    }
}

// Periods: 22 and 14 are unique to this domain, 18/20/28 are shared with
// neighbouring aesthetic domains for cross-domain synchronization.
pub static PRESETS: [Preset; 5] = [
    Preset {
        id: "texture_morph",
        state_a: "everyday_natural",
        state_b: "textured_natural",
        waveform: Waveform::Sinusoidal,
        num_cycles: 3,
        steps_per_cycle: 22,
        description: "Smooth oscillation between straight/wavy and curly/coily textures",
    },
    Preset {
        id: "density_breathe",
        state_a: "medical_comfort",
        state_b: "theatrical_volume",
        waveform: Waveform::Sinusoidal,
        num_cycles: 4,
        steps_per_cycle: 18,
        description: "Volume expansion/contraction cycle from sparse comfort to dramatic fullness",
    },
    Preset {
        id: "drama_sweep",
        state_a: "everyday_natural",
        state_b: "red_carpet_glam",
        waveform: Waveform::Triangular,
        num_cycles: 2,
        steps_per_cycle: 28,
        description: "Linear ramp from understated natural to full glamour presentation",
    },
    Preset {
        id: "construction_shift",
        state_a: "theatrical_volume",
        state_b: "editorial_sculpt",
        waveform: Waveform::Sinusoidal,
        num_cycles: 5,
        steps_per_cycle: 14,
        description: "Rapid oscillation between opaque theatrical and transparent editorial construction",
    },
    Preset {
        id: "color_pulse",
        state_a: "protective_crown",
        state_b: "fantasy_extreme",
        waveform: Waveform::Sinusoidal,
        num_cycles: 3,
        steps_per_cycle: 20,
        description: "Color dimensionality cycling from minimal flat tone to complex multi-technique",
    },
];

pub fn state(id: &str) -> Result<&'static NamedState> {
    table::find(&STATES, "state", id)
}

pub fn state_ids() -> Vec<&'static str> {
    table::ids(&STATES)
}

pub fn preset(id: &str) -> Result<&'static Preset> {
    table::find(&PRESETS, "preset", id)
}

pub fn preset_ids() -> Vec<&'static str> {
    table::ids(&PRESETS)
}

/// Distinct preset periods, ascending.
pub fn available_periods() -> Vec<u32> {
    let mut periods: Vec<u32> = PRESETS.iter().map(|p| p.steps_per_cycle).collect();
    periods.sort_unstable();
    periods.dedup();
    periods
}

/// Startup check of the static tables: presets reference existing states
/// with positive counts, and the archetype table is non-empty.
pub fn validate_tables() -> Result<()> {
    if VISUAL_TYPES.is_empty() {
        return Err(MorphError::EmptyArchetypeTable);
    }
    for preset in &PRESETS {
        preset.states()?;
        if preset.num_cycles == 0 {
            return Err(MorphError::invalid(
                "num_cycles",
                0.0,
                "preset cycle count must be positive",
            ));
        }
        if preset.steps_per_cycle == 0 {
            return Err(MorphError::invalid(
                "steps_per_cycle",
                0.0,
                "preset period must be positive",
            ));
        }
    }
    Ok(())
}
