//! Wig aesthetic morphospace engine.
//!
//! Models wig aesthetics as points in a 5-dimensional normalized parameter
//! space. Named states are fixed points; rhythmic presets oscillate between
//! two of them with a sinusoidal, triangular or square signal driving linear
//! interpolation. Any point can be classified against four visual archetypes
//! and turned into image-generation prompt text. A static design taxonomy maps
//! physical wig choices (cap, texture, density, colour) to descriptive
//! vocabulary.
//!
//! Zero I/O. Pure deterministic math with no opinions about transport.

pub mod archetype;
pub mod classify;
pub mod constants;
pub mod distance;
pub mod error;
pub mod interpolate;
pub mod keyframe;
pub mod morphospace;
pub mod oscillator;
pub mod params;
pub mod prompt;
pub mod table;
pub mod taxonomy;
pub mod trajectory;
pub mod vocabulary;

pub use archetype::{Archetype, OpticalProperties, VISUAL_TYPES, archetype, archetype_ids};
pub use classify::{Classification, classify, classify_in, classify_partial};
pub use constants::{DEFAULT_KEYFRAME_COUNT, MAX_KEYFRAME_COUNT, MAX_TOTAL_STEPS, PARAMETER_COUNT};
pub use distance::{Comparison, compare, compare_partial};
pub use error::{MorphError, Result};
pub use interpolate::{blend, blend_partial};
pub use keyframe::{Keyframe, keyframe_indices, keyframes};
pub use morphospace::{
    NamedState, PRESETS, Preset, STATES, available_periods, preset, preset_ids, state, state_ids,
    validate_tables,
};
pub use oscillator::{Waveform, generate};
pub use params::{ParamVector, Parameter, PartialParams, euclidean_distance};
pub use prompt::{
    CompositePrompt, KeyframePrompt, SequencePrompts, VisualVocabulary, composite_prompt,
    prompt_text, sequence_prompts, visual_vocabulary,
};
pub use taxonomy::{TaxonomyIndex, index as taxonomy_index};
pub use trajectory::{Trajectory, TrajectoryPoint, build, build_from, build_preset};
pub use vocabulary::{MappedDesign, StyledDesign, VocabularyComponents, WigDesign, apply_style, map_design};
