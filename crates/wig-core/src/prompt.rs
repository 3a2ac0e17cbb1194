//! Image-generation prompt text assembled from classified morphospace points.

use serde::Serialize;

use crate::archetype::{Archetype, archetype};
use crate::classify::{Classification, classify};
use crate::constants::{DEFAULT_PROMPT_ARCHETYPE, MIN_KEYWORDS, PROMPT_COLOR_COUNT};
use crate::error::Result;
use crate::keyframe::{Keyframe, keyframes};
use crate::morphospace::{Preset, preset};
use crate::params::{ParamVector, PartialParams};
use crate::trajectory::build_from;

/// Keywords of the nearest archetype, trimmed by strength.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VisualVocabulary {
    pub classification: Classification<'static>,
    pub keywords: Vec<&'static str>,
    pub state: ParamVector,
    pub strength: f64,
}

/// Keywords kept out of `total` for a given strength.
///
/// Below 1.0 the list is cut to `trunc(total · strength)` with a floor of
/// [`MIN_KEYWORDS`]; anything else (including NaN) keeps the full list.
pub fn keyword_count(total: usize, strength: f64) -> usize {
    if strength < 1.0 {
        let scaled = (total as f64 * strength).trunc().max(0.0) as usize;
        scaled.max(MIN_KEYWORDS).min(total)
    } else {
        total
    }
}

pub fn visual_vocabulary(state: &PartialParams, strength: f64) -> Result<VisualVocabulary> {
    let state = state.or_zero();
    let classification = classify(&state)?;
    let keywords = classification.archetype.keywords;
    let n = keyword_count(keywords.len(), strength);
    Ok(VisualVocabulary {
        classification,
        keywords: keywords[..n].to_vec(),
        state,
        strength,
    })
}

/// Modifier, every keyword, then the leading colour associations, comma-joined.
/// An empty modifier is treated as absent.
pub fn prompt_text(archetype: &Archetype, style_modifier: Option<&str>) -> String {
    style_modifier
        .filter(|m| !m.is_empty())
        .into_iter()
        .chain(archetype.keywords.iter().copied())
        .chain(
            archetype
                .color_associations
                .iter()
                .take(PROMPT_COLOR_COUNT)
                .copied(),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompositePrompt {
    pub prompt: String,
    pub classification: Classification<'static>,
    pub state: ParamVector,
    pub style_modifier: Option<String>,
}

/// Single prompt for one state; no state means the default archetype's centre.
pub fn composite_prompt(
    state: Option<&PartialParams>,
    style_modifier: Option<&str>,
) -> Result<CompositePrompt> {
    let state = match state {
        Some(partial) => partial.or_zero(),
        None => archetype(DEFAULT_PROMPT_ARCHETYPE)?.coords,
    };
    let classification = classify(&state)?;
    let style_modifier = style_modifier.filter(|m| !m.is_empty());
    Ok(CompositePrompt {
        prompt: prompt_text(classification.archetype, style_modifier),
        classification,
        state,
        style_modifier: style_modifier.map(str::to_string),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyframePrompt {
    pub keyframe: Keyframe,
    pub prompt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SequencePrompts {
    pub preset: &'static Preset,
    pub keyframes: Vec<KeyframePrompt>,
    pub style_modifier: Option<String>,
}

/// One prompt per keyframe of a preset's canonical trajectory.
pub fn sequence_prompts(
    preset_id: &str,
    count: usize,
    style_modifier: Option<&str>,
) -> Result<SequencePrompts> {
    let preset = preset(preset_id)?;
    let trajectory = build_from(preset)?;
    let style_modifier = style_modifier.filter(|m| !m.is_empty());

    let keyframes = keyframes(&trajectory, count)?
        .into_iter()
        .map(|keyframe| KeyframePrompt {
            prompt: prompt_text(keyframe.classification.archetype, style_modifier),
            keyframe,
        })
        .collect();

    Ok(SequencePrompts {
        preset,
        keyframes,
        style_modifier: style_modifier.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphError;
    use crate::params::Parameter;

    #[test]
    fn test_keyword_count() {
        assert_eq!(keyword_count(7, 1.0), 7);
        assert_eq!(keyword_count(7, 2.5), 7);
        assert_eq!(keyword_count(7, 0.5), 3);
        assert_eq!(keyword_count(7, 0.1), 2);
        assert_eq!(keyword_count(7, 0.0), 2);
        assert_eq!(keyword_count(7, -1.0), 2);
        assert_eq!(keyword_count(6, 0.99), 5);
        assert_eq!(keyword_count(7, f64::NAN), 7);
    }

    #[test]
    fn test_visual_vocabulary_trims_from_front() {
        let glam = archetype("glamour_cascade").unwrap();
        let vocab = visual_vocabulary(&glam.coords.into(), 0.5).unwrap();
        assert_eq!(vocab.classification.id(), "glamour_cascade");
        assert_eq!(vocab.classification.distance, 0.0);
        assert_eq!(vocab.keywords, glam.keywords[..3].to_vec());
    }

    #[test]
    fn test_visual_vocabulary_partial_state() {
        let mut partial = PartialParams::default();
        partial.set(Parameter::TextureCurlIntensity, 0.9);
        partial.set(Parameter::ConstructionTransparency, 0.6);
        partial.set(Parameter::DensityVolume, 0.6);
        let vocab = visual_vocabulary(&partial, 1.0).unwrap();
        assert_eq!(vocab.classification.id(), "textured_crown");
        assert_eq!(vocab.state.color_dimension, 0.0);
    }

    #[test]
    fn test_prompt_text_layout() {
        let a = archetype("natural_realism").unwrap();
        let text = prompt_text(a, Some("photorealistic portrait"));
        assert!(text.starts_with("photorealistic portrait, invisible hairline blending into skin"));
        assert!(text.ends_with("believable biological hair texture, warm brunettes, natural blacks"));
        assert_eq!(text.split(", ").count(), 1 + a.keywords.len() + 2);

        assert_eq!(prompt_text(a, Some("")), prompt_text(a, None));
        assert!(prompt_text(a, None).starts_with("invisible hairline"));
    }

    #[test]
    fn test_composite_prompt_defaults_to_glamour() {
        let c = composite_prompt(None, None).unwrap();
        assert_eq!(c.classification.id(), DEFAULT_PROMPT_ARCHETYPE);
        assert_eq!(c.classification.distance, 0.0);
        assert!(c.prompt.ends_with("champagne highlights, rose gold tones"));
        assert_eq!(c.style_modifier, None);
    }

    #[test]
    fn test_composite_prompt_with_state_and_modifier() {
        let editorial = archetype("editorial_sculpture").unwrap().coords;
        let c = composite_prompt(Some(&editorial.into()), Some("fashion photography")).unwrap();
        assert_eq!(c.classification.id(), "editorial_sculpture");
        assert!(c.prompt.starts_with("fashion photography, architectural hair silhouette"));
        assert_eq!(c.style_modifier.as_deref(), Some("fashion photography"));
    }

    #[test]
    fn test_sequence_prompts() {
        let seq = sequence_prompts("drama_sweep", 4, Some("oil painting")).unwrap();
        assert_eq!(seq.preset.id, "drama_sweep");
        let steps: Vec<usize> = seq.keyframes.iter().map(|k| k.keyframe.index).collect();
        assert_eq!(steps, vec![0, 14, 28, 42]);
        for k in &seq.keyframes {
            assert!(k.prompt.starts_with("oil painting, "));
            assert_eq!(
                k.prompt,
                prompt_text(k.keyframe.classification.archetype, Some("oil painting"))
            );
        }
    }

    #[test]
    fn test_sequence_prompts_errors() {
        assert!(matches!(
            sequence_prompts("unknown", 4, None).unwrap_err(),
            MorphError::NotFound { kind: "preset", .. }
        ));
        assert!(matches!(
            sequence_prompts("color_pulse", 0, None).unwrap_err(),
            MorphError::InvalidNumeric { .. }
        ));
    }
}
