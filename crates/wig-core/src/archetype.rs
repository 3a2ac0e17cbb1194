//! Visual archetypes: labelled reference points used only for
//! nearest-neighbour classification. Keywords, optical properties and colour
//! associations are inert payload for prompt text.

use serde::Serialize;

use crate::error::Result;
use crate::params::ParamVector;
use crate::table::{self, Named};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OpticalProperties {
    pub finish: &'static str,
    pub light_interaction: &'static str,
    pub sheen_level: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Archetype {
    pub id: &'static str,
    pub coords: ParamVector,
    pub keywords: &'static [&'static str],
    pub optical_properties: OpticalProperties,
    pub color_associations: &'static [&'static str],
}

impl Named for Archetype {
    fn id(&self) -> &'static str {
        self.id
    }
}

/// Canonical iteration order doubles as the classifier's tie-break order.
pub static VISUAL_TYPES: [Archetype; 4] = [
    Archetype {
        id: "natural_realism",
        coords: ParamVector::new(0.60, 0.25, 0.50, 0.15, 0.20),
        keywords: &[
            "invisible hairline blending into skin",
            "natural strand movement with light bounce",
            "realistic scalp visibility through parting",
            "soft body wave catching ambient light",
            "understated everyday hairstyle",
            "believable biological hair texture",
        ],
        optical_properties: OpticalProperties {
            finish: "satin",
            light_interaction: "diffuse_scatter",
            sheen_level: "moderate",
        },
        color_associations: &[
            "warm brunettes",
            "natural blacks",
            "honey blondes",
            "subtle warm undertones",
        ],
    },
    Archetype {
        id: "glamour_cascade",
        coords: ParamVector::new(0.90, 0.40, 0.75, 0.80, 0.80),
        keywords: &[
            "luxurious cascading waves",
            "voluminous body with dimensional highlights",
            "hand-painted balayage color depth",
            "red carpet volumetric silhouette",
            "high-gloss strand reflections",
            "dramatic root shadow fading to bright ends",
            "movement-rich layered flow",
        ],
        optical_properties: OpticalProperties {
            finish: "high_gloss",
            light_interaction: "specular_ribbon",
            sheen_level: "high",
        },
        color_associations: &[
            "champagne highlights",
            "rose gold tones",
            "caramel ribbons",
            "multi-tonal blonde dimension",
            "warm copper accents",
        ],
    },
    Archetype {
        id: "editorial_sculpture",
        coords: ParamVector::new(0.75, 0.05, 0.65, 0.50, 0.85),
        keywords: &[
            "architectural hair silhouette",
            "razor-sharp geometric edges",
            "sculptural volume at crown tapering to points",
            "sleek pin-straight reflective sheets",
            "fashion editorial precision styling",
            "dramatic asymmetric shape",
            "high-contrast structural form",
        ],
        optical_properties: OpticalProperties {
            finish: "mirror_gloss",
            light_interaction: "planar_reflection",
            sheen_level: "extreme",
        },
        color_associations: &[
            "jet black mirror finish",
            "platinum ice blonde",
            "stark monochrome",
            "electric fashion colors",
        ],
    },
    Archetype {
        id: "textured_crown",
        coords: ParamVector::new(0.60, 0.85, 0.60, 0.15, 0.35),
        keywords: &[
            "densely packed coil springs",
            "voluminous natural afro silhouette",
            "tight curl definition with shrinkage",
            "crown of kinky-curly texture",
            "matte coil surface absorbing light",
            "celebrating natural 4B-4C pattern",
            "protective styling versatility",
        ],
        optical_properties: OpticalProperties {
            finish: "matte_velvet",
            light_interaction: "diffuse_absorb",
            sheen_level: "low",
        },
        color_associations: &[
            "deep espresso browns",
            "blue-black depth",
            "warm chestnut undertones",
            "natural dark richness",
        ],
    },
];

pub fn archetype(id: &str) -> Result<&'static Archetype> {
    table::find(&VISUAL_TYPES, "archetype", id)
}

pub fn archetype_ids() -> Vec<&'static str> {
    table::ids(&VISUAL_TYPES)
}
