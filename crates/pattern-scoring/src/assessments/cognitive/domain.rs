use serde::{Deserialize, Serialize};

use crate::assessments::scoring::Category;

/// Axes of the cognitive-style fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveDimension {
    Texture,
    Temperature,
    Ecosystem,
    Temporal,
    Spatial,
}

impl Category for CognitiveDimension {
    const ALL: &'static [Self] = &[
        CognitiveDimension::Texture,
        CognitiveDimension::Temperature,
        CognitiveDimension::Ecosystem,
        CognitiveDimension::Temporal,
        CognitiveDimension::Spatial,
    ];

    const AFFINITIES: &'static [(Self, Self, f64)] = &[
        (CognitiveDimension::Texture, CognitiveDimension::Spatial, 0.8),
        (CognitiveDimension::Texture, CognitiveDimension::Temporal, 0.6),
        (CognitiveDimension::Temperature, CognitiveDimension::Ecosystem, 0.75),
        (CognitiveDimension::Ecosystem, CognitiveDimension::Spatial, 0.65),
        (CognitiveDimension::Temporal, CognitiveDimension::Spatial, 0.7),
    ];

    fn key(self) -> &'static str {
        match self {
            CognitiveDimension::Texture => "texture",
            CognitiveDimension::Temperature => "temperature",
            CognitiveDimension::Ecosystem => "ecosystem",
            CognitiveDimension::Temporal => "temporal",
            CognitiveDimension::Spatial => "spatial",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CognitiveDimension::Texture => "Texture",
            CognitiveDimension::Temperature => "Temperature",
            CognitiveDimension::Ecosystem => "Ecosystem",
            CognitiveDimension::Temporal => "Temporal",
            CognitiveDimension::Spatial => "Spatial",
        }
    }

    fn description(self) -> &'static str {
        match self {
            CognitiveDimension::Texture => "How you prefer information to be shaped and refined",
            CognitiveDimension::Temperature => "The emotional climate in which you think best",
            CognitiveDimension::Ecosystem => "How you relate ideas to one another",
            CognitiveDimension::Temporal => "The rhythm and pacing of your focus",
            CognitiveDimension::Spatial => "How you navigate and organize a problem space",
        }
    }
}

impl CognitiveDimension {
    /// Pattern assumed for scenario keys missing from the mapping table.
    pub fn default_pattern(self) -> CognitivePattern {
        match self {
            CognitiveDimension::Texture => CognitivePattern::Smooth,
            CognitiveDimension::Temperature => CognitivePattern::Balanced,
            CognitiveDimension::Ecosystem => CognitivePattern::Forest,
            CognitiveDimension::Temporal => CognitivePattern::Marathon,
            CognitiveDimension::Spatial => CognitivePattern::Path,
        }
    }

    pub fn patterns(self) -> &'static [CognitivePattern] {
        match self {
            CognitiveDimension::Texture => &[
                CognitivePattern::Smooth,
                CognitivePattern::Rough,
                CognitivePattern::Layered,
            ],
            CognitiveDimension::Temperature => &[
                CognitivePattern::Warm,
                CognitivePattern::Cool,
                CognitivePattern::Balanced,
            ],
            CognitiveDimension::Ecosystem => &[
                CognitivePattern::Forest,
                CognitivePattern::Desert,
                CognitivePattern::Ocean,
            ],
            CognitiveDimension::Temporal => &[
                CognitivePattern::Sprint,
                CognitivePattern::Marathon,
                CognitivePattern::Cyclical,
            ],
            CognitiveDimension::Spatial => &[
                CognitivePattern::Map,
                CognitivePattern::Path,
                CognitivePattern::Landmark,
            ],
        }
    }
}

/// A concrete cognitive pattern within one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitivePattern {
    Smooth,
    Rough,
    Layered,
    Warm,
    Cool,
    Balanced,
    Forest,
    Desert,
    Ocean,
    Sprint,
    Marathon,
    Cyclical,
    Map,
    Path,
    Landmark,
}

impl CognitivePattern {
    pub fn dimension(self) -> CognitiveDimension {
        match self {
            Self::Smooth | Self::Rough | Self::Layered => CognitiveDimension::Texture,
            Self::Warm | Self::Cool | Self::Balanced => CognitiveDimension::Temperature,
            Self::Forest | Self::Desert | Self::Ocean => CognitiveDimension::Ecosystem,
            Self::Sprint | Self::Marathon | Self::Cyclical => CognitiveDimension::Temporal,
            Self::Map | Self::Path | Self::Landmark => CognitiveDimension::Spatial,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Rough => "rough",
            Self::Layered => "layered",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Balanced => "balanced",
            Self::Forest => "forest",
            Self::Desert => "desert",
            Self::Ocean => "ocean",
            Self::Sprint => "sprint",
            Self::Marathon => "marathon",
            Self::Cyclical => "cyclical",
            Self::Map => "map",
            Self::Path => "path",
            Self::Landmark => "landmark",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Smooth => "Prefers polished, well-sequenced material with clear transitions",
            Self::Rough => "Learns by grappling with raw, unfinished problems",
            Self::Layered => "Builds understanding in successive layers of depth",
            Self::Warm => "Thinks best in supportive, emotionally connected settings",
            Self::Cool => "Thinks best with calm, objective distance from the material",
            Self::Balanced => "Adapts comfortably to both supportive and detached settings",
            Self::Forest => "Sees ideas as an interconnected web of relationships",
            Self::Desert => "Focuses on one essential idea at a time",
            Self::Ocean => "Moves fluidly across broad, loosely connected topics",
            Self::Sprint => "Works in short, intense bursts of focus",
            Self::Marathon => "Sustains steady focus over long sessions",
            Self::Cyclical => "Returns to material in recurring cycles",
            Self::Map => "Starts from the big picture before details",
            Self::Path => "Proceeds step by step along a clear sequence",
            Self::Landmark => "Anchors learning to memorable reference points",
        }
    }

    pub fn strength(self) -> &'static str {
        match self {
            Self::Smooth => "Clear, organized communication of ideas",
            Self::Rough => "Resilience when facing messy, open-ended problems",
            Self::Layered => "Deep understanding that holds up under questioning",
            Self::Warm => "Building trust and momentum in teams",
            Self::Cool => "Objective analysis under pressure",
            Self::Balanced => "Flexibility across learning environments",
            Self::Forest => "Connecting ideas across disciplines",
            Self::Desert => "Sustained concentration on essentials",
            Self::Ocean => "Broad curiosity and quick context switching",
            Self::Sprint => "High output in short windows",
            Self::Marathon => "Consistency and stamina on long projects",
            Self::Cyclical => "Durable retention through spaced review",
            Self::Map => "Strategic overview and prioritization",
            Self::Path => "Reliable, methodical execution",
            Self::Landmark => "Strong recall of key facts and examples",
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Smooth => &[
                "Use structured courses with clear progressions",
                "Summarize each session in a clean outline",
            ],
            Self::Rough => &[
                "Start with a hard problem before reading the solution",
                "Keep a scratchpad for half-formed ideas",
            ],
            Self::Layered => &[
                "Revisit topics at increasing depth",
                "Write layered notes from overview to detail",
            ],
            Self::Warm => &[
                "Study with a supportive partner or mentor",
                "Connect material to personal goals",
            ],
            Self::Cool => &[
                "Work through material independently first",
                "Use checklists and objective criteria to evaluate progress",
            ],
            Self::Balanced => &[
                "Alternate solo study with group sessions",
                "Match the setting to the difficulty of the task",
            ],
            Self::Forest => &[
                "Draw concept maps linking related ideas",
                "Look for cross-subject connections",
            ],
            Self::Desert => &[
                "Limit each session to a single core concept",
                "Remove distractions from your study space",
            ],
            Self::Ocean => &[
                "Survey several sources before going deep",
                "Keep a running list of connections between topics",
            ],
            Self::Sprint => &[
                "Use 25-minute focus intervals with short breaks",
                "Schedule demanding work for peak-energy windows",
            ],
            Self::Marathon => &[
                "Block long uninterrupted study sessions",
                "Set milestone checkpoints within long sessions",
            ],
            Self::Cyclical => &[
                "Use spaced repetition to revisit material",
                "Plan weekly review cycles",
            ],
            Self::Map => &[
                "Preview the whole chapter before reading details",
                "Draw concept maps linking related ideas",
            ],
            Self::Path => &[
                "Follow step-by-step tutorials",
                "Break goals into ordered checklists",
            ],
            Self::Landmark => &[
                "Anchor each topic to a vivid example",
                "Create mnemonic landmarks for key facts",
            ],
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        CognitiveDimension::ALL
            .iter()
            .flat_map(|dimension| dimension.patterns().iter().copied())
            .find(|pattern| pattern.key() == normalized)
    }
}
