//! Cognitive-style assessment over the texture/temperature/ecosystem/temporal/spatial
//! dimensions.
//!
//! Respondents answer scenario questions; each chosen option is remapped to a
//! cognitive pattern before tallying. Dimension scores follow the shared
//! pipeline, and the per-dimension winning patterns form the fingerprint.

mod domain;
mod fingerprint;
mod mapping;

pub use domain::{CognitiveDimension, CognitivePattern};
pub use fingerprint::{CognitiveFingerprint, FingerprintEntry};
pub use mapping::{map_scenario, ScenarioMapping};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use super::scoring::{
    answer_weights, assemble_unique, score_records, AnswerRecord, Category, CategoryScore,
    PatternInteraction, PatternSlot, RawAnswer, ScoringOptions, WeightingRules, RECOMMENDATION_CAP,
};
use fingerprint::ScenarioVote;

pub const ALGORITHM_NAME: &str = "cognitive";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveResult {
    pub results: BTreeMap<CognitiveDimension, CategoryScore>,
    pub dominant_pattern: PatternSlot<CognitiveDimension>,
    pub secondary_pattern: Option<PatternSlot<CognitiveDimension>>,
    pub fingerprint: CognitiveFingerprint,
    pub dimension_interactions: BTreeMap<String, PatternInteraction>,
    pub recommendations: CognitiveRecommendations,
    /// `dimension:scenario` keys that fell back to the dimension default.
    pub defaulted_scenarios: Vec<String>,
    pub algorithm: &'static str,
    pub timestamp: DateTime<Utc>,
    pub total_questions: u32,
}

impl CognitiveResult {
    pub fn dominant(&self) -> Option<CognitiveDimension> {
        self.dominant_pattern.pattern
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveRecommendations {
    pub strategies: Vec<String>,
    pub strengths: Vec<String>,
}

const UNDETERMINED: &[&str] = &["Complete more scenario questions to build your cognitive fingerprint"];

pub fn score_cognitive(answers: &[RawAnswer], options: &ScoringOptions) -> CognitiveResult {
    let mut defaulted_scenarios: Vec<String> = Vec::new();
    let mut votes = Vec::new();

    for raw in answers {
        let Some(scenario) = raw.vote_key() else {
            continue;
        };
        let hint = raw.dimension_hint().and_then(CognitiveDimension::from_key);
        let Some(mapping) = map_scenario(hint, scenario) else {
            continue;
        };

        let pattern = mapping.pattern();
        if let ScenarioMapping::Defaulted(_) = mapping {
            let flagged = format!(
                "{}:{}",
                pattern.dimension().key(),
                scenario.trim().to_ascii_lowercase()
            );
            if !defaulted_scenarios.contains(&flagged) {
                defaulted_scenarios.push(flagged);
            }
        }

        votes.push(ScenarioVote {
            record: AnswerRecord::with_category(pattern.dimension(), raw),
            pattern,
        });
    }

    let records: Vec<AnswerRecord<CognitiveDimension>> =
        votes.iter().map(|vote| vote.record.clone()).collect();
    let rules = WeightingRules::weighted(options.behavior_patterns());
    let core = score_records(&records, &rules, true, options.resolve_timestamp());
    let weights = answer_weights(&records, &rules);

    let fingerprint = fingerprint::assemble(&votes, &weights, &core);

    let ordered_patterns: Vec<CognitivePattern> = core
        .ranked()
        .into_iter()
        .filter_map(|dimension| fingerprint.dimensions.get(&dimension))
        .map(|entry| entry.pattern)
        .collect();
    let recommendations = if ordered_patterns.is_empty() {
        CognitiveRecommendations {
            strategies: assemble_unique(UNDETERMINED.iter(), RECOMMENDATION_CAP),
            strengths: Vec::new(),
        }
    } else {
        CognitiveRecommendations {
            strategies: assemble_unique(
                ordered_patterns
                    .iter()
                    .flat_map(|pattern| pattern.recommendations().iter()),
                RECOMMENDATION_CAP,
            ),
            strengths: assemble_unique(
                ordered_patterns.iter().map(|pattern| pattern.strength()),
                RECOMMENDATION_CAP,
            ),
        }
    };

    debug!(
        submitted = answers.len(),
        scored = records.len(),
        defaulted = defaulted_scenarios.len(),
        signature = %fingerprint.signature,
        "cognitive scenarios scored"
    );

    CognitiveResult {
        results: core.category_scores(),
        dominant_pattern: core.dominant_slot(),
        secondary_pattern: core.secondary_slot(),
        dimension_interactions: core.interactions.clone().unwrap_or_default(),
        fingerprint,
        recommendations,
        defaulted_scenarios,
        algorithm: ALGORITHM_NAME,
        timestamp: core.timestamp,
        total_questions: core.total_answers(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::scoring::BehaviorData;
    use chrono::TimeZone;
    use serde_json::json;

    fn answers(value: serde_json::Value) -> Vec<RawAnswer> {
        crate::assessments::scoring::parse_answers(&value).expect("answers parse")
    }

    fn fixed_options() -> ScoringOptions {
        ScoringOptions::default().at(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn builds_fingerprint_from_remapped_scenarios() {
        let answers = answers(json!([
            { "pattern": "onion", "hidden_dimension": "texture" },
            { "pattern": "sediment", "hidden_dimension": "texture" },
            { "pattern": "tree_bark", "hidden_dimension": "texture" },
            { "pattern": "campfire", "dimension": "temperature" },
            { "pattern": "city_map" }
        ]));

        let result = score_cognitive(&answers, &fixed_options());

        assert_eq!(result.total_questions, 5);
        assert_eq!(result.dominant(), Some(CognitiveDimension::Texture));
        assert_eq!(result.results[&CognitiveDimension::Texture].score, 60);
        let texture = &result.fingerprint.dimensions[&CognitiveDimension::Texture];
        assert_eq!(texture.pattern, CognitivePattern::Layered);
        assert_eq!(texture.share, 67);
        assert_eq!(result.fingerprint.signature, "layered-warm-map");
        assert!(result.defaulted_scenarios.is_empty());
        assert_eq!(result.dimension_interactions.len(), 10);
    }

    #[test]
    fn fingerprint_share_uses_scoring_weights() {
        let answers = answers(json!([
            { "pattern": "onion", "hidden_dimension": "texture", "responseTime": 4000 },
            { "pattern": "tree_bark", "hidden_dimension": "texture", "responseTime": 1000 }
        ]));
        let behavior: BehaviorData = serde_json::from_value(json!({
            "patterns": { "averageResponseTime": 2500, "hesitationIndex": 3, "changeFrequency": 0.5 }
        }))
        .expect("behavior data");

        let plain = score_cognitive(&answers, &fixed_options());
        let adjusted = score_cognitive(&answers, &fixed_options().with_behavior(Some(behavior)));

        for result in [&plain, &adjusted] {
            let texture = &result.fingerprint.dimensions[&CognitiveDimension::Texture];
            assert_eq!(texture.pattern, CognitivePattern::Layered);
            assert_eq!(texture.share, 58);
        }
    }

    #[test]
    fn unmapped_scenarios_are_flagged_and_defaulted() {
        let answers = answers(json!([
            { "pattern": "velvet_curtain", "hidden_dimension": "texture" },
            { "pattern": "velvet_curtain", "hidden_dimension": "texture" },
            { "pattern": "unknown_option" }
        ]));

        let result = score_cognitive(&answers, &fixed_options());

        assert_eq!(result.total_questions, 2);
        assert_eq!(result.defaulted_scenarios, vec!["texture:velvet_curtain"]);
        assert_eq!(
            result.fingerprint.dimensions[&CognitiveDimension::Texture].pattern,
            CognitivePattern::Smooth
        );
    }

    #[test]
    fn empty_input_is_undetermined() {
        let result = score_cognitive(&[], &fixed_options());

        assert_eq!(result.dominant(), None);
        assert!(result.secondary_pattern.is_none());
        assert_eq!(result.fingerprint.signature, "undetermined");
        assert!(result.results.values().all(|entry| entry.score == 0));
        assert_eq!(result.recommendations.strategies.len(), 1);
    }

    #[test]
    fn recommendations_are_unique_and_capped() {
        let answers = answers(json!([
            { "pattern": "rainforest", "hidden_dimension": "ecosystem" },
            { "pattern": "city_map", "hidden_dimension": "spatial" },
            { "pattern": "seasons", "hidden_dimension": "temporal" },
            { "pattern": "snowfield", "hidden_dimension": "temperature" },
            { "pattern": "glass", "hidden_dimension": "texture" }
        ]));

        let result = score_cognitive(&answers, &fixed_options());

        let strategies = &result.recommendations.strategies;
        assert_eq!(strategies.len(), RECOMMENDATION_CAP);
        let mut unique = strategies.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), strategies.len());
        assert!(result.recommendations.strengths.len() <= RECOMMENDATION_CAP);
    }
}
