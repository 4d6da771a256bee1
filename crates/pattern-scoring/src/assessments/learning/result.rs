use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::LearningStyle;
use super::recommendations::Recommendations;
use super::Algorithm;
use crate::assessments::scoring::{CategoryScore, PatternInteraction, PatternSlot};

/// JSON document returned to callers and persisted by the result store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStyleResult {
    pub results: BTreeMap<LearningStyle, CategoryScore>,
    pub dominant_pattern: PatternSlot<LearningStyle>,
    pub secondary_pattern: Option<PatternSlot<LearningStyle>>,
    pub algorithm: Algorithm,
    pub timestamp: DateTime<Utc>,
    pub total_questions: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_interactions: Option<BTreeMap<String, PatternInteraction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_efficiency: Option<LearningEfficiency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptability_score: Option<AdaptabilityScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

impl LearningStyleResult {
    pub fn dominant(&self) -> Option<LearningStyle> {
        self.dominant_pattern.pattern
    }

    pub fn score(&self, style: LearningStyle) -> u8 {
        self.results
            .get(&style)
            .map(|entry| entry.score)
            .unwrap_or(0)
    }
}

/// How often the respondent switched categories between consecutive answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptabilityScore {
    pub score: u8,
    pub changes: u32,
    pub level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningEfficiency {
    pub score: u8,
    pub pace: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<LearningStyle>,
}
