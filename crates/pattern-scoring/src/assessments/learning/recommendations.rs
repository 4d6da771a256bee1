use serde::Serialize;

use super::domain::LearningStyle;
use crate::assessments::scoring::{assemble_unique, PatternInteraction, RECOMMENDATION_CAP};

/// Recommendation sets attached to advanced results. Every list is
/// de-duplicated and holds at most five entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub study_strategies: Vec<String>,
    pub environment: Vec<String>,
    pub tools: Vec<String>,
    pub interaction_tips: Vec<String>,
}

fn study_strategies(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &[
            "Turn notes into mind maps and flowcharts",
            "Color-code topics and key terms",
            "Watch demonstrations before attempting exercises",
            "Redraw diagrams from memory to test recall",
        ],
        LearningStyle::Auditory => &[
            "Explain new concepts out loud in your own words",
            "Record short summaries and replay them during review",
            "Join or start discussion-based study sessions",
            "Use rhymes and verbal mnemonics for lists",
        ],
        LearningStyle::Kinesthetic => &[
            "Practice with hands-on exercises before reading theory",
            "Build models or prototypes of the concepts",
            "Take short movement breaks between study blocks",
            "Use flashcards you can physically sort and group",
        ],
        LearningStyle::Social => &[
            "Study with a partner and quiz each other",
            "Teach a concept to someone else after learning it",
            "Join a study group with regular meetings",
            "Discuss real-world examples with peers",
        ],
    }
}

fn environment(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &[
            "Keep a clutter-free desk with good lighting",
            "Post charts and summaries where you can see them",
            "Keep a clutter-free workspace",
        ],
        LearningStyle::Auditory => &[
            "Choose a space where you can speak aloud",
            "Use quiet background audio or none at all",
            "Keep a clutter-free workspace",
        ],
        LearningStyle::Kinesthetic => &[
            "Use a standing desk or a space that allows movement",
            "Keep physical materials within reach",
            "Keep a clutter-free workspace",
        ],
        LearningStyle::Social => &[
            "Reserve shared spaces such as library group rooms",
            "Schedule regular online study calls",
            "Keep a clutter-free workspace",
        ],
    }
}

fn tools(style: LearningStyle) -> &'static [&'static str] {
    match style {
        LearningStyle::Visual => &["Mind-mapping software", "Infographic templates", "Video lectures"],
        LearningStyle::Auditory => &["Podcasts", "Text-to-speech readers", "Voice memo apps"],
        LearningStyle::Kinesthetic => &["Lab kits and simulations", "Physical flashcards", "Interactive coding sandboxes"],
        LearningStyle::Social => &["Collaborative whiteboards", "Discussion forums", "Shared note documents"],
    }
}

const UNDETERMINED: &[&str] = &[
    "Answer more questions to reveal a clear learning pattern",
    "Try a mix of visual, auditory, hands-on, and group activities",
];

/// Assemble recommendation lists for the ranked styles. `ranked` is ordered
/// by priority (dominant first); `tips` are interaction recommendations
/// already sorted by relevance.
pub fn assemble(ranked: &[LearningStyle], tips: &[&PatternInteraction]) -> Recommendations {
    if ranked.is_empty() {
        return Recommendations {
            study_strategies: assemble_unique(UNDETERMINED.iter(), RECOMMENDATION_CAP),
            ..Recommendations::default()
        };
    }

    Recommendations {
        study_strategies: assemble_unique(
            ranked.iter().flat_map(|style| study_strategies(*style).iter()),
            RECOMMENDATION_CAP,
        ),
        environment: assemble_unique(
            ranked.iter().flat_map(|style| environment(*style).iter()),
            RECOMMENDATION_CAP,
        ),
        tools: assemble_unique(
            ranked.iter().flat_map(|style| tools(*style).iter()),
            RECOMMENDATION_CAP,
        ),
        interaction_tips: assemble_unique(
            tips.iter().map(|tip| tip.recommendation.as_str()),
            RECOMMENDATION_CAP,
        ),
    }
}
