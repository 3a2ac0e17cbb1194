//! Deterministic design-parameter → descriptive vocabulary mapping.

use serde::Serialize;

use crate::constants::NATURAL_DENSITY;
use crate::error::Result;
use crate::taxonomy::{
    self, StyleContext, VolumeProfile, cap_construction, edge_treatment, style_context,
    texture_pattern,
};

/// Physical wig design choices, as opposed to morphospace coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WigDesign {
    pub cap_construction: String,
    pub texture_pattern: String,
    /// Density multiplier; 1.0 is natural.
    pub density_profile: f64,
    /// Primary length in inches.
    pub length_primary: u32,
    pub base_color: String,
    pub color_dimensional: bool,
    pub highlight_pattern: Option<String>,
    /// Root shadow depth in inches.
    pub root_shadow_depth: f64,
    pub edge_treatment: String,
    pub layers: Vec<u32>,
    /// (zone, multiplier) pairs in caller order; empty means natural volume
    /// at crown, temple and nape.
    pub volume_distribution: Vec<(String, f64)>,
}

impl WigDesign {
    pub fn new(
        cap_construction: &str,
        texture_pattern: &str,
        density_profile: f64,
        length_primary: u32,
        base_color: &str,
    ) -> Self {
        Self {
            cap_construction: cap_construction.to_string(),
            texture_pattern: texture_pattern.to_string(),
            density_profile,
            length_primary,
            base_color: base_color.to_string(),
            color_dimensional: false,
            highlight_pattern: None,
            root_shadow_depth: 0.0,
            edge_treatment: "baby_hairs".to_string(),
            layers: Vec::new(),
            volume_distribution: Vec::new(),
        }
    }

    fn volume_zones(&self) -> Vec<(String, f64)> {
        if self.volume_distribution.is_empty() {
            VolumeProfile::NATURAL.zones()
        } else {
            self.volume_distribution.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VocabularyComponents {
    pub cap_construction: String,
    pub texture: String,
    pub density: String,
    pub length: String,
    pub color: String,
    pub edge: String,
    pub volume: String,
}

impl VocabularyComponents {
    /// All components joined as cap; texture; density; length; volume; edge; color.
    pub fn composite(&self) -> String {
        [
            self.cap_construction.as_str(),
            &self.texture,
            &self.density,
            &self.length,
            &self.volume,
            &self.edge,
            &self.color,
        ]
        .join("; ")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MappedDesign {
    pub design: WigDesign,
    pub components: VocabularyComponents,
    pub composite_vocabulary: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StyledDesign {
    pub style: &'static str,
    pub context: &'static StyleContext,
    pub mapped: MappedDesign,
}

pub fn density(density: f64) -> String {
    let percent = (density * 100.0) as i64;
    if density < 0.8 {
        format!("{percent}% density, lightweight sparse construction, visible scalp through strands")
    } else if density < NATURAL_DENSITY {
        format!("{percent}% density, natural lightweight fullness, subtle scalp visibility")
    } else if density == NATURAL_DENSITY {
        "100% natural density, realistic fullness matching biological hair".to_string()
    } else if density <= 1.3 {
        format!("{percent}% density, enhanced fullness, voluminous appearance")
    } else if density <= 1.6 {
        format!("{percent}% density, dramatic volume, luxurious thickness")
    } else {
        format!("{percent}% density, maximum theatrical volume, ultra-dense construction")
    }
}

pub fn length(primary: u32, layers: &[u32]) -> String {
    let mut vocab = format!("{primary}-inch primary length");
    if !layers.is_empty() {
        let mut sorted = layers.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        let desc: Vec<String> = sorted.iter().map(|l| format!("{l}-inch")).collect();
        vocab.push_str(&format!(
            ", with graduated layers at {}, creating dimensional movement and reduced weight",
            desc.join(", ")
        ));
    }
    vocab
}

pub fn volume(zones: &[(String, f64)]) -> String {
    zones
        .iter()
        .map(|(zone, m)| {
            if *m > 1.2 {
                format!("dramatic {zone} lift creating {m:.1}x natural height")
            } else if *m > 1.05 {
                format!("enhanced {zone} volume at {m:.1}x natural")
            } else if *m < 0.9 {
                format!("compressed {zone} profile at {m:.1}x natural")
            } else {
                format!("natural {zone} proportion")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn color(
    base_color: &str,
    dimensional: bool,
    highlight_pattern: Option<&str>,
    root_shadow_depth: f64,
) -> String {
    let mut vocab = format!("{base_color} base color");
    if !dimensional {
        vocab.push_str(", solid uniform color throughout");
        return vocab;
    }
    vocab.push_str(", dimensional coloring with");
    if root_shadow_depth > 0.0 {
        vocab.push_str(&format!(
            " {}-inch root shadow fade creating depth,",
            inches(root_shadow_depth)
        ));
    }
    // Unknown highlight patterns contribute nothing.
    if let Some(pattern) = highlight_pattern.and_then(|id| taxonomy::highlight_pattern(id).ok()) {
        vocab.push(' ');
        vocab.push_str(pattern.vocabulary);
    }
    vocab
}

// Whole inches keep one decimal ("2.0"), fractional ones print as-is.
fn inches(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Map a design to its vocabulary. Cap, texture and edge identifiers must exist.
pub fn map_design(design: &WigDesign) -> Result<MappedDesign> {
    let cap = cap_construction(&design.cap_construction)?;
    let texture = texture_pattern(&design.texture_pattern)?;
    let edge = edge_treatment(&design.edge_treatment)?;

    let components = VocabularyComponents {
        cap_construction: cap.vocabulary.to_string(),
        texture: texture.vocabulary.to_string(),
        density: density(design.density_profile),
        length: length(design.length_primary, &design.layers),
        color: color(
            &design.base_color,
            design.color_dimensional,
            design.highlight_pattern.as_deref(),
            design.root_shadow_depth,
        ),
        edge: edge.vocabulary.to_string(),
        volume: volume(&design.volume_zones()),
    };
    let composite_vocabulary = components.composite();

    Ok(MappedDesign {
        design: design.clone(),
        components,
        composite_vocabulary,
    })
}

/// Override density, edge and volume from a style context, then re-map.
pub fn apply_style(design: &WigDesign, style: &str) -> Result<StyledDesign> {
    let context = style_context(style)?;
    let mut styled = design.clone();
    styled.density_profile = context.density_target;
    styled.edge_treatment = context.edge_preference.to_string();
    styled.volume_distribution = context.volume_profile.zones();

    Ok(StyledDesign {
        style: context.id,
        context,
        mapped: map_design(&styled)?,
    })
}
