use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use wig_core::{DEFAULT_KEYFRAME_COUNT, MorphError, PartialParams, Waveform, WigDesign};

use crate::report::{self, SequenceSource, StateInputError};

const DEFAULT_CYCLES: f64 = 3.0;
const DEFAULT_STEPS_PER_CYCLE: usize = 20;

/// Stateless MCP front end: every tool is a pure function of its arguments
/// and the static tables.
#[derive(Clone)]
pub struct WigServer {
    tool_router: ToolRouter<Self>,
}

impl Default for WigServer {
    fn default() -> Self {
        Self::new()
    }
}

impl WigServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

fn engine_error(e: MorphError) -> McpError {
    match &e {
        MorphError::EmptyArchetypeTable => McpError::internal_error(e.to_string(), None),
        MorphError::NotFound { available, .. } => McpError::invalid_params(
            e.to_string(),
            Some(serde_json::json!({ "available": available })),
        ),
        _ => McpError::invalid_params(e.to_string(), None),
    }
}

fn input_error(e: StateInputError) -> McpError {
    match e {
        StateInputError::Unknown(e) => engine_error(e),
        json @ StateInputError::Json(_) => McpError::invalid_params(json.to_string(), None),
    }
}

fn json_result(value: &Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )]))
}

/// Empty strings count as absent, matching how MCP clients fill optional
/// string arguments.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// --- Tool parameter types ---

#[derive(Debug, Deserialize, JsonSchema)]
struct CapConstructionRequest {
    /// One of: lace_front, monofilament, full_lace, wefted, hand_tied,
    /// capless, 360_lace
    construction_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct TexturePatternRequest {
    /// One of: straight, body_wave, deep_wave, loose_curl, tight_curl,
    /// kinky_straight, kinky_curly, coily
    texture_id: String,
}

#[derive(Clone, Debug, Deserialize, JsonSchema)]
struct DesignRequest {
    /// Cap type (lace_front, monofilament, ...)
    cap_construction: String,
    /// Texture (straight, body_wave, deep_wave, ...)
    texture_pattern: String,
    /// Density multiplier, 1.0 = natural (typically 0.5-2.0)
    density_profile: f64,
    /// Primary length in inches
    length_primary: u32,
    /// Base colour description
    base_color: String,
    /// Enable dimensional colouring
    #[serde(default)]
    color_dimensional: bool,
    /// Highlight pattern (ribbon, balayage, ombre, peek_a_boo, full)
    highlight_pattern: Option<String>,
    /// Root shadow depth in inches (0-3)
    #[serde(default)]
    root_shadow_depth: f64,
    /// Edge style (baby_hairs, temple_points, clean, layered); defaults to baby_hairs
    edge_treatment: Option<String>,
    /// Layer lengths in inches, e.g. [12, 14, 16]
    #[serde(default)]
    layers: Vec<u32>,
    /// Volume multiplier per zone, e.g. {"crown": 1.4, "temple": 0.9}
    #[serde(default)]
    volume_distribution: Map<String, Value>,
}

impl DesignRequest {
    fn into_design(self) -> Result<WigDesign, McpError> {
        let mut volume_distribution = Vec::with_capacity(self.volume_distribution.len());
        for (zone, multiplier) in self.volume_distribution {
            let multiplier = multiplier.as_f64().ok_or_else(|| {
                McpError::invalid_params(
                    format!("volume multiplier for {zone} must be a number"),
                    None,
                )
            })?;
            volume_distribution.push((zone, multiplier));
        }

        let mut design = WigDesign::new(
            &self.cap_construction,
            &self.texture_pattern,
            self.density_profile,
            self.length_primary,
            &self.base_color,
        );
        design.color_dimensional = self.color_dimensional;
        design.highlight_pattern = self.highlight_pattern.filter(|h| !h.is_empty());
        design.root_shadow_depth = self.root_shadow_depth;
        if let Some(edge) = self.edge_treatment.filter(|e| !e.is_empty()) {
            design.edge_treatment = edge;
        }
        design.layers = self.layers;
        design.volume_distribution = volume_distribution;
        Ok(design)
    }
}

fn default_style() -> String {
    "natural".to_string()
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StyleRequest {
    /// Output of map_wig_parameters (or just its "parameters" object), as
    /// JSON or a JSON-encoded string
    base_parameters: Value,
    /// Style context (natural, theatrical, editorial, cosplay, medical)
    #[serde(default = "default_style")]
    style: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct StateLookupRequest {
    /// State to look up; omit or leave empty for all states
    state_id: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SequenceRequest {
    /// Curated preset (texture_morph, density_breathe, drama_sweep,
    /// construction_shift, color_pulse)
    preset_name: Option<String>,
    /// Starting state, when not using a preset
    state_a_id: Option<String>,
    /// Alternating state, when not using a preset
    state_b_id: Option<String>,
    /// "sinusoidal", "triangular" or "square" (default sinusoidal)
    oscillation_pattern: Option<String>,
    /// Number of complete A→B→A cycles (default 3)
    num_cycles: Option<f64>,
    /// Samples per cycle, i.e. the period (default 20)
    steps_per_cycle: Option<usize>,
    /// Starting phase in cycles (0.0 = start of cycle, 0.5 = half-way)
    phase_offset: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PresetRequest {
    /// Preset name (texture_morph, density_breathe, drama_sweep,
    /// construction_shift, color_pulse)
    preset_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct VocabularyRequest {
    /// Parameter coordinates as a JSON object (or JSON string), or a state
    /// name. Missing parameters read as 0.0.
    state: Value,
    /// Keyword weight in [0.0, 1.0]; below 1.0 trims the keyword list (default 1.0)
    strength: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PromptRequest {
    /// 5D coordinates for composite mode (JSON object, JSON string or state
    /// name); defaults to the glamour_cascade centre
    attractor_state: Option<Value>,
    /// Rhythmic preset for sequence mode
    preset_name: Option<String>,
    /// "composite" (default) or "sequence"
    mode: Option<String>,
    /// Optional prompt prefix, e.g. "photorealistic portrait"
    style_modifier: Option<String>,
    /// Keyframes in sequence mode (default 4)
    keyframe_count: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DistanceRequest {
    /// First state: name, JSON object or JSON string of coordinates
    state_a_id: Value,
    /// Second state: name, JSON object or JSON string of coordinates
    state_b_id: Value,
}

fn optional_state(value: &Option<Value>) -> Result<Option<PartialParams>, McpError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(v) => report::state_from_value(v).map(Some).map_err(input_error),
    }
}

#[tool_router]
impl WigServer {
    #[tool(
        description = "List every wig design taxonomy category: cap constructions, texture patterns, edge treatments, colour highlight patterns and style contexts. Pure lookup, 0 tokens."
    )]
    async fn list_wig_taxonomy(&self) -> Result<CallToolResult, McpError> {
        json_result(&report::taxonomy())
    }

    #[tool(
        description = "Get the structural properties and visual vocabulary of a cap construction type."
    )]
    async fn get_cap_construction_details(
        &self,
        Parameters(req): Parameters<CapConstructionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = report::cap_construction(&req.construction_id).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(
        description = "Get wave geometry, curl classification and visual vocabulary of a texture pattern."
    )]
    async fn get_texture_pattern_details(
        &self,
        Parameters(req): Parameters<TexturePatternRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = report::texture_pattern(&req.texture_id).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(
        description = "Deterministically map wig design parameters (cap, texture, density, length, colour, edge, layers, volume) to image-generation-ready vocabulary. No inference, 0 tokens."
    )]
    async fn map_wig_parameters(
        &self,
        Parameters(req): Parameters<DesignRequest>,
    ) -> Result<CallToolResult, McpError> {
        let design = req.into_design()?;
        let mapped = wig_core::map_design(&design).map_err(engine_error)?;
        json_result(&report::mapped_json(&mapped))
    }

    #[tool(
        description = "Apply a style context (natural, theatrical, editorial, cosplay, medical) to a design: overrides density, edge treatment and volume distribution, then re-maps the vocabulary."
    )]
    async fn apply_style_context(
        &self,
        Parameters(req): Parameters<StyleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let base = match req.base_parameters {
            Value::String(s) => serde_json::from_str(&s).map_err(|e| {
                McpError::invalid_params(format!("invalid base_parameters JSON: {e}"), None)
            })?,
            other => other,
        };
        let params = match base.get("parameters") {
            Some(inner) => inner.clone(),
            None => base,
        };
        let design: DesignRequest = serde_json::from_value(params).map_err(|e| {
            McpError::invalid_params(format!("invalid base_parameters: {e}"), None)
        })?;

        let styled =
            wig_core::apply_style(&design.into_design()?, &req.style).map_err(engine_error)?;
        tracing::debug!(style = styled.style, "applied style context");
        json_result(&report::styled_json(&styled))
    }

    #[tool(
        description = "List the rhythmic presets of the wig morphospace with their periods, waveforms, endpoint states and descriptions."
    )]
    async fn list_wig_rhythmic_presets(&self) -> Result<CallToolResult, McpError> {
        json_result(&report::presets())
    }

    #[tool(
        description = "Get 5D normalized morphospace coordinates of one named state, or of every state when state_id is empty."
    )]
    async fn get_wig_morphospace_coordinates(
        &self,
        Parameters(req): Parameters<StateLookupRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = report::states(non_empty(&req.state_id)).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(
        description = "Generate a rhythmic oscillation between two wig aesthetic states. Use preset_name for a curated preset, or state_a_id and state_b_id with an oscillation pattern for a custom sequence. Returns every step with its phase, alpha and interpolated state."
    )]
    async fn generate_wig_rhythmic_sequence(
        &self,
        Parameters(req): Parameters<SequenceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let source = match (
            non_empty(&req.preset_name),
            non_empty(&req.state_a_id),
            non_empty(&req.state_b_id),
        ) {
            (Some(preset), _, _) => SequenceSource::Preset(preset.to_string()),
            (None, Some(a), Some(b)) => {
                let waveform = non_empty(&req.oscillation_pattern)
                    .map(str::parse::<Waveform>)
                    .transpose()
                    .map_err(engine_error)?
                    .unwrap_or(Waveform::Sinusoidal);
                SequenceSource::Custom {
                    state_a: a.to_string(),
                    state_b: b.to_string(),
                    waveform,
                    num_cycles: req.num_cycles.unwrap_or(DEFAULT_CYCLES),
                    steps_per_cycle: req.steps_per_cycle.unwrap_or(DEFAULT_STEPS_PER_CYCLE),
                }
            }
            _ => {
                return Err(McpError::invalid_params(
                    "provide preset_name or both state_a_id and state_b_id".to_string(),
                    None,
                ));
            }
        };

        let phase_offset = req.phase_offset.unwrap_or(0.0);
        let result = report::sequence(&source, phase_offset).map_err(engine_error)?;
        tracing::debug!(
            preset = %result["preset"],
            steps = %result["total_steps"],
            "generated rhythmic sequence"
        );
        json_result(&result)
    }

    #[tool(
        description = "Apply a curated wig rhythmic preset and return its full trajectory: texture_morph (period 22), density_breathe (18), drama_sweep (28), construction_shift (14), color_pulse (20)."
    )]
    async fn apply_wig_rhythmic_preset(
        &self,
        Parameters(req): Parameters<PresetRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = report::preset_trajectory(&req.preset_name).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(
        description = "Map a 5D parameter state to the nearest of the four canonical wig visual types and return its image-generation keywords, optical properties and colour associations."
    )]
    async fn extract_wig_visual_vocabulary(
        &self,
        Parameters(req): Parameters<VocabularyRequest>,
    ) -> Result<CallToolResult, McpError> {
        let state = report::state_from_value(&req.state).map_err(input_error)?;
        let result =
            report::vocabulary(&state, req.strength.unwrap_or(1.0)).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(
        description = "Generate image-generation prompts from wig morphospace coordinates. mode=composite gives one prompt for attractor_state; mode=sequence gives keyframe prompts along a rhythmic preset's trajectory."
    )]
    async fn generate_wig_attractor_prompt(
        &self,
        Parameters(req): Parameters<PromptRequest>,
    ) -> Result<CallToolResult, McpError> {
        let style_modifier = non_empty(&req.style_modifier);
        let result = match non_empty(&req.mode).unwrap_or("composite") {
            "composite" => {
                let state = optional_state(&req.attractor_state)?;
                report::composite(state.as_ref(), style_modifier).map_err(engine_error)?
            }
            "sequence" => {
                let Some(preset) = non_empty(&req.preset_name) else {
                    return Err(McpError::invalid_params(
                        "preset_name required for sequence mode".to_string(),
                        Some(serde_json::json!({ "available": wig_core::preset_ids() })),
                    ));
                };
                let count = req.keyframe_count.unwrap_or(DEFAULT_KEYFRAME_COUNT);
                report::keyframe_prompts(preset, count, style_modifier).map_err(engine_error)?
            }
            other => {
                return Err(McpError::invalid_params(
                    format!("unknown mode: {other}"),
                    Some(serde_json::json!({ "available": ["composite", "sequence"] })),
                ));
            }
        };
        json_result(&result)
    }

    #[tool(
        description = "Compute the Euclidean distance between two wig morphospace states (names or coordinate JSON), with per-parameter differences, the most divergent parameter and each state's nearest visual type."
    )]
    async fn compute_wig_morphospace_distance(
        &self,
        Parameters(req): Parameters<DistanceRequest>,
    ) -> Result<CallToolResult, McpError> {
        let a = report::state_from_value(&req.state_a_id).map_err(input_error)?;
        let b = report::state_from_value(&req.state_b_id).map_err(input_error)?;
        let result = report::distance(&a, &b).map_err(engine_error)?;
        json_result(&result)
    }

    #[tool(description = "Get server capabilities, architecture and the recommended workflow.")]
    async fn get_server_info(&self) -> Result<CallToolResult, McpError> {
        json_result(&report::server_info())
    }
}

#[tool_handler]
impl ServerHandler for WigServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Wig aesthetic vocabulary and morphospace tools. Every tool is deterministic and costs 0 tokens.\n\n\
                 WORKFLOW:\n\
                 1. Pick design parameters (cap, texture, density, length, colour). \
                    list_wig_taxonomy shows the valid identifiers.\n\
                 2. map_wig_parameters turns them into composite vocabulary.\n\
                 3. Optional: apply_style_context with the map_wig_parameters output to adjust for \
                    natural, theatrical, editorial, cosplay or medical use.\n\
                 4. Optional: generate_wig_rhythmic_sequence or apply_wig_rhythmic_preset for \
                    oscillations between morphospace states.\n\
                 5. Optional: generate_wig_attractor_prompt for image-generation prompts, either one \
                    composite prompt or keyframes along a preset.\n\n\
                 States can be given by name (see get_wig_morphospace_coordinates) or as a JSON object \
                 of the five parameters; missing parameters read as 0.0 for classification and distance."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
