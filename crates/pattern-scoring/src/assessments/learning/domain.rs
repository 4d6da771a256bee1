use serde::{Deserialize, Serialize};

use crate::assessments::scoring::Category;

/// Sensory/social channel a learner prefers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Social,
}

impl Category for LearningStyle {
    const ALL: &'static [Self] = &[
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
        LearningStyle::Social,
    ];

    const AFFINITIES: &'static [(Self, Self, f64)] = &[
        (LearningStyle::Visual, LearningStyle::Auditory, 0.8),
        (LearningStyle::Visual, LearningStyle::Kinesthetic, 0.7),
        (LearningStyle::Visual, LearningStyle::Social, 0.6),
        (LearningStyle::Auditory, LearningStyle::Social, 0.85),
        (LearningStyle::Kinesthetic, LearningStyle::Social, 0.75),
    ];

    fn key(self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::Social => "social",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LearningStyle::Visual => "Visual",
            LearningStyle::Auditory => "Auditory",
            LearningStyle::Kinesthetic => "Kinesthetic",
            LearningStyle::Social => "Social",
        }
    }

    fn description(self) -> &'static str {
        match self {
            LearningStyle::Visual => {
                "Learns best through images, diagrams, color coding, and spatial layouts"
            }
            LearningStyle::Auditory => {
                "Learns best by listening, discussing, and explaining ideas out loud"
            }
            LearningStyle::Kinesthetic => {
                "Learns best through hands-on practice, movement, and physical experimentation"
            }
            LearningStyle::Social => {
                "Learns best in groups, through collaboration, teaching, and shared problem solving"
            }
        }
    }
}

/// Relative importance of a question by the area it covers. Unknown or missing
/// question categories count as 1.0.
pub fn question_category_weight(question_category: Option<&str>) -> f64 {
    match question_category {
        Some("preference") => 1.0,
        Some("memory") => 1.2,
        Some("problem_solving") => 1.3,
        Some("communication") => 1.1,
        Some("environment") => 0.9,
        _ => 1.0,
    }
}

/// Short profile name for a weighted result.
pub fn profile_label(
    dominant: Option<(LearningStyle, u8)>,
    secondary: Option<LearningStyle>,
) -> String {
    match (dominant, secondary) {
        (None, _) => "Undetermined".to_string(),
        (Some((dominant, score)), _) if score >= 60 => {
            format!("Strong {} Learner", dominant.label())
        }
        (Some((dominant, _)), Some(secondary)) => {
            format!("{}-{} Learner", dominant.label(), secondary.label())
        }
        (Some(_), None) => "Multimodal Learner".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_case_insensitively() {
        for style in LearningStyle::ALL {
            assert_eq!(LearningStyle::from_key(style.key()), Some(*style));
        }
        assert_eq!(
            LearningStyle::from_key("  Kinesthetic "),
            Some(LearningStyle::Kinesthetic)
        );
        assert_eq!(LearningStyle::from_key("reading"), None);
    }

    #[test]
    fn profile_labels() {
        assert_eq!(profile_label(None, None), "Undetermined");
        assert_eq!(
            profile_label(Some((LearningStyle::Visual, 72)), Some(LearningStyle::Social)),
            "Strong Visual Learner"
        );
        assert_eq!(
            profile_label(Some((LearningStyle::Visual, 45)), Some(LearningStyle::Social)),
            "Visual-Social Learner"
        );
        assert_eq!(
            profile_label(Some((LearningStyle::Auditory, 40)), None),
            "Multimodal Learner"
        );
    }

    #[test]
    fn question_weights_default_to_one() {
        assert_eq!(question_category_weight(None), 1.0);
        assert_eq!(question_category_weight(Some("trivia")), 1.0);
        assert_eq!(question_category_weight(Some("problem_solving")), 1.3);
    }
}
