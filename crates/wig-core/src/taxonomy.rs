//! Static wig design taxonomy: cap constructions, textures, edges, colour
//! highlight patterns and style contexts.

use serde::Serialize;

use crate::error::Result;
use crate::table::{self, Named};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CapConstruction {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub parting_freedom: &'static str,
    pub visibility: &'static str,
    pub vocabulary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TexturePattern {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub curl_type: &'static str,
    pub wave_geometry: &'static str,
    pub vocabulary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeTreatment {
    pub id: &'static str,
    pub vocabulary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightPattern {
    pub id: &'static str,
    pub vocabulary: &'static str,
}

/// Volume multipliers per head zone; 1.0 is natural.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VolumeProfile {
    pub crown: f64,
    pub temple: f64,
    pub nape: f64,
}

impl VolumeProfile {
    pub const NATURAL: VolumeProfile = VolumeProfile {
        crown: 1.0,
        temple: 1.0,
        nape: 1.0,
    };

    /// Zones in canonical crown, temple, nape order.
    pub fn zones(&self) -> Vec<(String, f64)> {
        vec![
            ("crown".to_string(), self.crown),
            ("temple".to_string(), self.temple),
            ("nape".to_string(), self.nape),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StyleContext {
    #[serde(skip)]
    pub id: &'static str,
    pub density_target: f64,
    pub edge_preference: &'static str,
    pub volume_profile: VolumeProfile,
    pub focus: &'static str,
}

macro_rules! named {
    ($($t:ty),*) => {
        $(impl Named for $t {
            fn id(&self) -> &'static str {
                self.id
            }
        })*
    };
}

named!(CapConstruction, TexturePattern, EdgeTreatment, HighlightPattern, StyleContext);

pub static CAP_CONSTRUCTIONS: [CapConstruction; 7] = [
    CapConstruction {
        id: "lace_front",
        name: "Lace Front",
        parting_freedom: "hairline_only",
        visibility: "transparent_hairline",
        vocabulary: "invisible lace hairline transition, individual strand implantation visible at forehead, pre-plucked density graduation",
    },
    CapConstruction {
        id: "monofilament",
        name: "Monofilament Top",
        parting_freedom: "full",
        visibility: "scalp_simulation",
        vocabulary: "monofilament scalp-like top, individual strand knotting visible, natural directional flow from crown, free-form parting capability",
    },
    CapConstruction {
        id: "full_lace",
        name: "Full Lace",
        parting_freedom: "full",
        visibility: "transparent_entire",
        vocabulary: "full lace cap construction, 360-degree transparency, individual hand-tied strands throughout, maximum styling versatility",
    },
    CapConstruction {
        id: "wefted",
        name: "Wefted/Traditional",
        parting_freedom: "constrained",
        visibility: "standard",
        vocabulary: "machine-wefted construction, defined weft lines, structured parting, economical density distribution",
    },
    CapConstruction {
        id: "hand_tied",
        name: "Hand-Tied",
        parting_freedom: "moderate",
        visibility: "natural_movement",
        vocabulary: "hand-tied individual strands, natural movement and flow, reduced bulk, breathable construction",
    },
    CapConstruction {
        id: "capless",
        name: "Capless/Open-Wefted",
        parting_freedom: "constrained",
        visibility: "lightweight",
        vocabulary: "open-wefted ventilated construction, lightweight feel, visible weft structure, maximum airflow",
    },
    CapConstruction {
        id: "360_lace",
        name: "360 Lace",
        parting_freedom: "perimeter",
        visibility: "transparent_perimeter",
        vocabulary: "360-degree lace perimeter, transparent edges all around, center wefted, high ponytail capability",
    },
];

pub static TEXTURE_PATTERNS: [TexturePattern; 8] = [
    TexturePattern {
        id: "straight",
        name: "Straight",
        curl_type: "1A-1C",
        wave_geometry: "none",
        vocabulary: "sleek straight texture, no wave pattern, reflective shaft alignment, smooth uniform direction",
    },
    TexturePattern {
        id: "body_wave",
        name: "Body Wave",
        curl_type: "2A-2B",
        wave_geometry: "loose_S",
        vocabulary: "cascading body waves, loose S-curve pattern, 3-4 inch wavelength, medium spring and bounce",
    },
    TexturePattern {
        id: "deep_wave",
        name: "Deep Wave",
        curl_type: "2C-3A",
        wave_geometry: "tight_S",
        vocabulary: "deep wave texture, tight S-curve waves, 2-3 inch wavelength, pronounced spring, defined wave crests",
    },
    TexturePattern {
        id: "loose_curl",
        name: "Loose Curl",
        curl_type: "3A-3B",
        wave_geometry: "spiral_loose",
        vocabulary: "loose spiral curls, 1-2 inch curl diameter, defined ringlets, bouncy spring pattern",
    },
    TexturePattern {
        id: "tight_curl",
        name: "Tight Curl",
        curl_type: "3C",
        wave_geometry: "spiral_tight",
        vocabulary: "tight corkscrew curls, pencil-width diameter, dense curl definition, high spring coil pattern",
    },
    TexturePattern {
        id: "kinky_straight",
        name: "Kinky Straight",
        curl_type: "4A",
        wave_geometry: "textured_straight",
        vocabulary: "kinky straight texture, subtle bend pattern, coarse texture visibility, natural body without curl",
    },
    TexturePattern {
        id: "kinky_curly",
        name: "Kinky Curly",
        curl_type: "4B",
        wave_geometry: "zigzag",
        vocabulary: "kinky curly texture, tight zigzag pattern, dense coil structure, maximum volume and spring",
    },
    TexturePattern {
        id: "coily",
        name: "Coily",
        curl_type: "4C",
        wave_geometry: "tight_coil",
        vocabulary: "tight coily texture, densely packed coil springs, minimal definition, maximum shrinkage and volume",
    },
];

pub static EDGE_TREATMENTS: [EdgeTreatment; 4] = [
    EdgeTreatment {
        id: "baby_hairs",
        vocabulary: "fine 1-2 inch wispy baby hairs along perimeter, irregular natural distribution, delicate texture",
    },
    EdgeTreatment {
        id: "temple_points",
        vocabulary: "defined temple point detail, natural recession simulation, gradual density fade at temples",
    },
    EdgeTreatment {
        id: "clean",
        vocabulary: "clean finished hairline, uniform density to edge, no wispy detail",
    },
    EdgeTreatment {
        id: "layered",
        vocabulary: "graduated edge layering, soft perimeter transition, dimensional endpoint",
    },
];

pub static HIGHLIGHT_PATTERNS: [HighlightPattern; 5] = [
    HighlightPattern {
        id: "ribbon",
        vocabulary: "vertical highlight ribbons, 1-2 strand width, precise placement, contrasting dimension",
    },
    HighlightPattern {
        id: "balayage",
        vocabulary: "hand-painted balayage highlights, irregular organic placement, graduated intensity toward ends",
    },
    HighlightPattern {
        id: "ombre",
        vocabulary: "ombre gradient transition, horizontal color fade, distinct root-to-tip progression",
    },
    HighlightPattern {
        id: "peek_a_boo",
        vocabulary: "peek-a-boo underlayer highlights, hidden color reveals, dimensional depth underneath",
    },
    HighlightPattern {
        id: "full",
        vocabulary: "full dimensional coloring, integrated highlight distribution throughout, natural sun-kissed effect",
    },
];

pub static STYLE_CONTEXTS: [StyleContext; 5] = [
    StyleContext {
        id: "natural",
        density_target: 1.0,
        edge_preference: "baby_hairs",
        volume_profile: VolumeProfile::NATURAL,
        focus: "realistic scalp simulation, natural movement",
    },
    StyleContext {
        id: "theatrical",
        density_target: 1.5,
        edge_preference: "clean",
        volume_profile: VolumeProfile {
            crown: 1.3,
            temple: 1.1,
            nape: 1.2,
        },
        focus: "dramatic volume, bold silhouette",
    },
    StyleContext {
        id: "editorial",
        density_target: 1.4,
        edge_preference: "layered",
        volume_profile: VolumeProfile {
            crown: 1.4,
            temple: 0.9,
            nape: 1.0,
        },
        focus: "sculptural shape, architectural volume",
    },
    StyleContext {
        id: "cosplay",
        density_target: 1.6,
        edge_preference: "clean",
        volume_profile: VolumeProfile {
            crown: 1.5,
            temple: 1.3,
            nape: 1.4,
        },
        focus: "character accuracy, extreme styling capability",
    },
    StyleContext {
        id: "medical",
        density_target: 0.9,
        edge_preference: "baby_hairs",
        volume_profile: VolumeProfile {
            crown: 0.95,
            temple: 0.95,
            nape: 0.95,
        },
        focus: "comfort, natural appearance, breathability",
    },
];

pub fn cap_construction(id: &str) -> Result<&'static CapConstruction> {
    table::find(&CAP_CONSTRUCTIONS, "cap construction", id)
}

pub fn texture_pattern(id: &str) -> Result<&'static TexturePattern> {
    table::find(&TEXTURE_PATTERNS, "texture pattern", id)
}

pub fn edge_treatment(id: &str) -> Result<&'static EdgeTreatment> {
    table::find(&EDGE_TREATMENTS, "edge treatment", id)
}

pub fn highlight_pattern(id: &str) -> Result<&'static HighlightPattern> {
    table::find(&HIGHLIGHT_PATTERNS, "highlight pattern", id)
}

pub fn style_context(id: &str) -> Result<&'static StyleContext> {
    table::find(&STYLE_CONTEXTS, "style", id)
}

/// Identifiers of every taxonomy table, in canonical order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaxonomyIndex {
    pub cap_constructions: Vec<&'static str>,
    pub texture_patterns: Vec<&'static str>,
    pub edge_treatments: Vec<&'static str>,
    pub color_highlight_patterns: Vec<&'static str>,
    pub style_contexts: Vec<&'static str>,
}

pub fn index() -> TaxonomyIndex {
    TaxonomyIndex {
        cap_constructions: table::ids(&CAP_CONSTRUCTIONS),
        texture_patterns: table::ids(&TEXTURE_PATTERNS),
        edge_treatments: table::ids(&EDGE_TREATMENTS),
        color_highlight_patterns: table::ids(&HIGHLIGHT_PATTERNS),
        style_contexts: table::ids(&STYLE_CONTEXTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        let idx = index();
        assert_eq!(idx.cap_constructions.len(), 7);
        assert_eq!(idx.texture_patterns.len(), 8);
        assert_eq!(idx.edge_treatments.len(), 4);
        assert_eq!(idx.color_highlight_patterns.len(), 5);
        assert_eq!(idx.style_contexts.len(), 5);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(cap_construction("360_lace").unwrap().name, "360 Lace");
        assert_eq!(texture_pattern("coily").unwrap().curl_type, "4C");
        let err = texture_pattern("afro").unwrap_err();
        assert_eq!(err.to_string(), "unknown texture pattern: afro");
        assert_eq!(err.available().len(), 8);
    }

    #[test]
    fn test_style_edges_exist() {
        for style in &STYLE_CONTEXTS {
            assert!(edge_treatment(style.edge_preference).is_ok(), "{}", style.id);
        }
    }

    #[test]
    fn test_cap_serializes_without_id() {
        let json = serde_json::to_value(cap_construction("wefted").unwrap()).unwrap();
        assert_eq!(json["name"], "Wefted/Traditional");
        assert!(json.get("id").is_none());
    }
}
