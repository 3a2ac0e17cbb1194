//! JSON views of engine results shared by the MCP tools and the CLI.
//!
//! All rounding happens here; the engine itself never rounds.

use std::fmt;

use serde_json::{Map, Value, json};
use wig_core::taxonomy::{
    self, CAP_CONSTRUCTIONS, EDGE_TREATMENTS, HIGHLIGHT_PATTERNS, STYLE_CONTEXTS,
    TEXTURE_PATTERNS,
};
use wig_core::{
    MappedDesign, MorphError, PRESETS, ParamVector, Parameter, PartialParams, STATES,
    StyledDesign, VISUAL_TYPES, Waveform, WigDesign, archetype_ids, available_periods, build,
    build_from, compare_partial, composite_prompt, preset, sequence_prompts, state, state_ids,
    visual_vocabulary,
};

type Result<T> = std::result::Result<T, MorphError>;

const DOMAIN: &str = "wig_aesthetic";

/// Round to `places` decimals, half away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

pub fn round4(value: f64) -> f64 {
    round_to(value, 4)
}

pub fn vector_json(v: &ParamVector) -> Value {
    let map: Map<String, Value> = v
        .iter()
        .map(|(p, x)| (p.as_str().to_string(), json!(round4(x))))
        .collect();
    Value::Object(map)
}

/// Only the parameters the caller supplied, rounded.
pub fn partial_json(v: &PartialParams) -> Value {
    let map: Map<String, Value> = Parameter::ALL
        .into_iter()
        .filter_map(|p| v.get(p).map(|x| (p.as_str().to_string(), json!(round4(x)))))
        .collect();
    Value::Object(map)
}

// --- State input ---

/// A caller-supplied state that could not be resolved.
#[derive(Debug)]
pub enum StateInputError {
    Unknown(MorphError),
    Json(serde_json::Error),
}

impl fmt::Display for StateInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateInputError::Unknown(e) => write!(f, "{e}"),
            StateInputError::Json(e) => write!(f, "invalid state JSON: {e}"),
        }
    }
}

impl std::error::Error for StateInputError {}

/// Resolve a state identifier, or a JSON object of parameter values.
pub fn parse_state(input: &str) -> std::result::Result<PartialParams, StateInputError> {
    match state(input) {
        Ok(named) => Ok(named.coords.into()),
        Err(e) if !input.trim_start().starts_with('{') => Err(StateInputError::Unknown(e)),
        Err(_) => serde_json::from_str(input).map_err(StateInputError::Json),
    }
}

/// Like [`parse_state`], but also accepts an already-decoded JSON object.
pub fn state_from_value(value: &Value) -> std::result::Result<PartialParams, StateInputError> {
    match value {
        Value::String(s) => parse_state(s),
        other => serde_json::from_value(other.clone()).map_err(StateInputError::Json),
    }
}

// --- Taxonomy ---

pub fn taxonomy() -> Value {
    json!(taxonomy::index())
}

pub fn cap_construction(id: &str) -> Result<Value> {
    let cap = taxonomy::cap_construction(id)?;
    Ok(json!(cap))
}

pub fn texture_pattern(id: &str) -> Result<Value> {
    let texture = taxonomy::texture_pattern(id)?;
    Ok(json!(texture))
}

pub fn design_json(design: &WigDesign) -> Value {
    let volume: Map<String, Value> = design
        .volume_distribution
        .iter()
        .map(|(zone, m)| (zone.clone(), json!(round4(*m))))
        .collect();
    json!({
        "cap_construction": design.cap_construction,
        "texture_pattern": design.texture_pattern,
        "density_profile": round4(design.density_profile),
        "length_primary": design.length_primary,
        "base_color": design.base_color,
        "color_dimensional": design.color_dimensional,
        "highlight_pattern": design.highlight_pattern,
        "root_shadow_depth": round4(design.root_shadow_depth),
        "edge_treatment": design.edge_treatment,
        "layers": design.layers,
        "volume_distribution": volume,
    })
}

pub fn mapped_json(mapped: &MappedDesign) -> Value {
    json!({
        "parameters": design_json(&mapped.design),
        "vocabulary_components": mapped.components,
        "composite_vocabulary": mapped.composite_vocabulary,
        "cost_profile": {
            "layer_2_tokens": 0,
            "methodology": "deterministic_taxonomy_mapping",
        },
    })
}

pub fn styled_json(styled: &StyledDesign) -> Value {
    let mut out = mapped_json(&styled.mapped);
    out["style_context"] = json!({
        "style": styled.style,
        "focus": styled.context.focus,
    });
    out
}

// --- Morphospace ---

pub fn presets() -> Value {
    let presets: Map<String, Value> = PRESETS
        .iter()
        .map(|p| {
            (
                p.id.to_string(),
                json!({
                    "period": p.steps_per_cycle,
                    "total_steps": p.total_steps(),
                    "pattern": p.waveform,
                    "states": p.states_label(),
                    "description": p.description,
                }),
            )
        })
        .collect();
    json!({
        "domain": DOMAIN,
        "presets": presets,
        "available_periods": available_periods(),
        "available_states": state_ids(),
        "cost_tokens": 0,
    })
}

/// One named state, or every state when `id` is `None`.
pub fn states(id: Option<&str>) -> Result<Value> {
    if let Some(id) = id {
        let s = state(id)?;
        return Ok(json!({
            "state_id": s.id,
            "coordinates": vector_json(&s.coords),
            "parameter_names": Parameter::names(),
        }));
    }
    let all: Map<String, Value> = STATES
        .iter()
        .map(|s| (s.id.to_string(), vector_json(&s.coords)))
        .collect();
    Ok(json!({
        "states": all,
        "parameter_names": Parameter::names(),
        "total_states": STATES.len(),
    }))
}

/// Where a rhythmic sequence gets its endpoints from.
#[derive(Clone, Debug)]
pub enum SequenceSource {
    /// A curated preset; its waveform, cycle count and period win.
    Preset(String),
    Custom {
        state_a: String,
        state_b: String,
        waveform: Waveform,
        num_cycles: f64,
        steps_per_cycle: usize,
    },
}

pub fn sequence(source: &SequenceSource, phase_offset: f64) -> Result<Value> {
    let (label, a, b, waveform, num_cycles, steps_per_cycle) = match source {
        SequenceSource::Preset(id) => {
            let p = preset(id)?;
            let (a, b) = p.states()?;
            (
                p.id,
                a,
                b,
                p.waveform,
                f64::from(p.num_cycles),
                p.steps_per_cycle as usize,
            )
        }
        SequenceSource::Custom {
            state_a,
            state_b,
            waveform,
            num_cycles,
            steps_per_cycle,
        } => (
            "custom",
            state(state_a)?,
            state(state_b)?,
            *waveform,
            *num_cycles,
            *steps_per_cycle,
        ),
    };

    let trajectory = build(
        &a.coords,
        &b.coords,
        waveform,
        num_cycles,
        steps_per_cycle,
        phase_offset,
    )?;

    let points: Vec<Value> = trajectory
        .iter()
        .map(|p| {
            json!({
                "step": p.step,
                "phase": round4(p.phase),
                "alpha": round4(p.alpha),
                "state": vector_json(&p.state),
            })
        })
        .collect();

    Ok(json!({
        "domain": DOMAIN,
        "preset": label,
        "state_a": a.id,
        "state_b": b.id,
        "pattern": waveform,
        "period": steps_per_cycle,
        "num_cycles": num_cycles,
        "phase_offset": phase_offset,
        "total_steps": trajectory.len(),
        "sequence": points,
        "parameter_names": Parameter::names(),
        "cost_tokens": 0,
    }))
}

pub fn preset_trajectory(id: &str) -> Result<Value> {
    let p = preset(id)?;
    let trajectory = build_from(p)?;
    let states: Vec<Value> = trajectory.iter().map(|pt| vector_json(&pt.state)).collect();
    Ok(json!({
        "preset": p.id,
        "description": p.description,
        "period": p.steps_per_cycle,
        "pattern": p.waveform,
        "total_steps": trajectory.len(),
        "trajectory": states,
        "parameter_names": Parameter::names(),
        "cost_tokens": 0,
    }))
}

// --- Attractor vocabulary and prompts ---

pub fn vocabulary(state: &PartialParams, strength: f64) -> Result<Value> {
    let vocab = visual_vocabulary(state, strength)?;
    let archetype = vocab.classification.archetype;
    Ok(json!({
        "nearest_type": archetype.id,
        "distance": round4(vocab.classification.distance),
        "keywords": vocab.keywords,
        "optical_properties": archetype.optical_properties,
        "color_associations": archetype.color_associations,
        "parameter_state": partial_json(state),
        "strength": strength,
        "cost_tokens": 0,
    }))
}

pub fn composite(state: Option<&PartialParams>, style_modifier: Option<&str>) -> Result<Value> {
    let c = composite_prompt(state, style_modifier)?;
    let archetype = c.classification.archetype;
    Ok(json!({
        "mode": "composite",
        "prompt": c.prompt,
        "vocabulary": {
            "nearest_type": archetype.id,
            "distance": round4(c.classification.distance),
            "keywords": archetype.keywords,
            "optical": archetype.optical_properties,
            "colors": archetype.color_associations,
        },
        "state": vector_json(&c.state),
        "style_modifier": c.style_modifier,
        "cost_tokens": 0,
    }))
}

pub fn keyframe_prompts(preset_id: &str, count: usize, style_modifier: Option<&str>) -> Result<Value> {
    let seq = sequence_prompts(preset_id, count, style_modifier)?;
    let keyframes: Vec<Value> = seq
        .keyframes
        .iter()
        .map(|k| {
            json!({
                "step": k.keyframe.index,
                "phase": round_to(k.keyframe.progress, 3),
                "prompt": k.prompt,
                "nearest_type": k.keyframe.classification.id(),
                "distance": round4(k.keyframe.classification.distance),
                "state": vector_json(&k.keyframe.point.state),
            })
        })
        .collect();
    Ok(json!({
        "mode": "sequence",
        "preset": seq.preset.id,
        "description": seq.preset.description,
        "period": seq.preset.steps_per_cycle,
        "keyframe_count": count,
        "keyframes": keyframes,
        "style_modifier": seq.style_modifier,
        "cost_tokens": 0,
    }))
}

pub fn distance(a: &PartialParams, b: &PartialParams) -> Result<Value> {
    let c = compare_partial(a, b)?;
    Ok(json!({
        "euclidean_distance": round4(c.euclidean_distance),
        "parameter_differences": vector_json(&c.differences),
        "max_difference_parameter": c.max_difference_parameter,
        "state_a_visual_type": c.nearest_a.id(),
        "state_b_visual_type": c.nearest_b.id(),
        "cost_tokens": 0,
    }))
}

pub fn server_info() -> Value {
    let presets: Map<String, Value> = PRESETS
        .iter()
        .map(|p| {
            (
                p.id.to_string(),
                json!({
                    "period": p.steps_per_cycle,
                    "pattern": p.waveform,
                    "states": p.states_label(),
                }),
            )
        })
        .collect();
    json!({
        "name": "Wig Aesthetic MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "architecture": "three_layer_categorical_composition",
        "layers": {
            "layer_1": "Pure taxonomy (cap constructions, textures, edges, highlights, styles)",
            "layer_2": "Deterministic parameter→vocabulary mapping (0 tokens)",
            "layer_3": "Creative synthesis by the calling model",
        },
        "taxonomy_coverage": {
            "cap_constructions": CAP_CONSTRUCTIONS.len(),
            "texture_patterns": TEXTURE_PATTERNS.len(),
            "edge_treatments": EDGE_TREATMENTS.len(),
            "color_patterns": HIGHLIGHT_PATTERNS.len(),
            "style_contexts": STYLE_CONTEXTS.len(),
        },
        "rhythmic_composition": {
            "morphospace_parameters": Parameter::names(),
            "canonical_states": state_ids(),
            "presets": presets,
            "available_periods": available_periods(),
        },
        "attractor_visualization": {
            "visual_types": archetype_ids(),
            "prompt_modes": ["composite", "sequence"],
        },
        "workflow": [
            "1. Select parameters (cap, texture, density, length, color)",
            "2. map_wig_parameters → deterministic vocabulary (0 tokens)",
            "3. Optional: apply_style_context for preset adjustments",
            "4. Optional: generate_wig_rhythmic_sequence for temporal composition",
            "5. Optional: generate_wig_attractor_prompt for image generation prompts",
            "6. Use vocabulary in image generation prompt",
        ],
        "domain_integration": {
            "domain_id": DOMAIN,
            "parameter_count": Parameter::ALL.len(),
            "preset_count": PRESETS.len(),
            "visual_type_count": VISUAL_TYPES.len(),
            "periods": available_periods(),
            "compatible_with": [
                "aesthetic-dynamics-core",
                "composition-graph-mcp",
                "catastrophe-morph-mcp",
                "microscopy-aesthetics-mcp",
                "diatom-morphology-mcp",
            ],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
    }

    #[test]
    fn test_parse_state_by_name_and_json() {
        let named = parse_state("medical_comfort").unwrap();
        assert_eq!(named.missing(), vec![]);

        let json = parse_state(r#"{"styling_drama": 0.9}"#).unwrap();
        assert_eq!(json.styling_drama, Some(0.9));
        assert_eq!(json.missing().len(), 4);

        match parse_state("nope").unwrap_err() {
            StateInputError::Unknown(e) => assert_eq!(e.available().len(), STATES.len()),
            other => panic!("unexpected {other}"),
        }
        assert!(matches!(
            parse_state("{not json").unwrap_err(),
            StateInputError::Json(_)
        ));
    }

    #[test]
    fn test_state_from_value_accepts_object() {
        let v = json!({"density_volume": 0.4, "color_dimension": 0.1});
        let p = state_from_value(&v).unwrap();
        assert_eq!(p.density_volume, Some(0.4));
        assert!(state_from_value(&json!(42)).is_err());
        assert!(state_from_value(&json!({"density_volume": "high"})).is_err());
    }

    #[test]
    fn test_partial_json_skips_missing() {
        let mut p = PartialParams::default();
        p.set(Parameter::TextureCurlIntensity, 0.123456);
        assert_eq!(partial_json(&p), json!({"texture_curl_intensity": 0.1235}));
    }

    #[test]
    fn test_presets_keep_canonical_order() {
        let v = presets();
        let names: Vec<&str> = v["presets"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            names,
            vec![
                "texture_morph",
                "density_breathe",
                "drama_sweep",
                "construction_shift",
                "color_pulse"
            ]
        );
        assert_eq!(v["presets"]["drama_sweep"]["pattern"], "triangular");
        assert_eq!(v["presets"]["texture_morph"]["total_steps"], 66);
    }

    #[test]
    fn test_sequence_custom_and_preset() {
        let custom = SequenceSource::Custom {
            state_a: "everyday_natural".into(),
            state_b: "red_carpet_glam".into(),
            waveform: Waveform::Square,
            num_cycles: 2.0,
            steps_per_cycle: 10,
        };
        let v = sequence(&custom, 0.0).unwrap();
        assert_eq!(v["preset"], "custom");
        assert_eq!(v["total_steps"], 20);
        assert_eq!(v["sequence"][0]["alpha"], 0.0);
        assert_eq!(v["sequence"][5]["alpha"], 1.0);
        assert_eq!(v["sequence"][13]["phase"], 0.3);

        let shifted = sequence(&SequenceSource::Preset("color_pulse".into()), 0.5).unwrap();
        assert_eq!(shifted["preset"], "color_pulse");
        assert_eq!(shifted["period"], 20);
        // Half a cycle in: sinusoid sits at its midpoint, heading down.
        assert_eq!(shifted["sequence"][0]["alpha"], 0.5);
    }

    #[test]
    fn test_distance_json() {
        let a = parse_state("everyday_natural").unwrap();
        let b = parse_state("textured_natural").unwrap();
        let v = distance(&a, &b).unwrap();
        assert_eq!(v["max_difference_parameter"], "texture_curl_intensity");
        assert_eq!(v["parameter_differences"]["texture_curl_intensity"], 0.5);
        assert_eq!(v["state_a_visual_type"], "natural_realism");
        assert_eq!(v["cost_tokens"], 0);
    }

    #[test]
    fn test_server_info_counts() {
        let v = server_info();
        assert_eq!(v["taxonomy_coverage"]["cap_constructions"], 7);
        assert_eq!(v["domain_integration"]["preset_count"], 5);
        assert_eq!(v["domain_integration"]["periods"], json!([14, 18, 20, 22, 28]));
    }
}
