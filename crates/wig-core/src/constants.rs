/// Number of morphospace dimensions.
pub const PARAMETER_COUNT: usize = 5;

/// Upper bound on samples in one trajectory.
pub const MAX_TOTAL_STEPS: usize = 1_000_000;

/// Upper bound on keyframes sampled from one trajectory.
pub const MAX_KEYFRAME_COUNT: usize = 10_000;

/// Density multiplier of biological hair.
pub const NATURAL_DENSITY: f64 = 1.0;

/// Minimum keywords kept when vocabulary strength trims the list.
pub const MIN_KEYWORDS: usize = 2;

/// Colour associations appended to every generated prompt.
pub const PROMPT_COLOR_COUNT: usize = 2;

/// Keyframes sampled per sequence when the caller gives no count.
pub const DEFAULT_KEYFRAME_COUNT: usize = 4;

/// Archetype used for composite prompts when no state is supplied.
pub const DEFAULT_PROMPT_ARCHETYPE: &str = "glamour_cascade";
