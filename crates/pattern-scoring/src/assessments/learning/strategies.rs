use super::domain::{profile_label, question_category_weight, LearningStyle};
use super::recommendations;
use super::result::{AdaptabilityScore, LearningEfficiency, LearningStyleResult};
use super::{Algorithm, ScoringStrategy};
use crate::assessments::scoring::tally::mean_response_time;
use crate::assessments::scoring::{
    score_records, AnswerRecord, Category, RawAnswer, ScoringOptions, ScoringResult,
    WeightingRules,
};

/// Count-based percentages: every valid answer is one vote.
pub struct BasicStrategy;

/// Answer weights, question-category weights, timing and behavioral adjustments.
pub struct WeightedStrategy;

/// Weighted scoring plus pairwise interactions, adaptability, efficiency, and
/// recommendation sets.
pub struct AdvancedStrategy;

impl ScoringStrategy for BasicStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Basic
    }

    fn score(&self, answers: &[RawAnswer], options: &ScoringOptions) -> LearningStyleResult {
        let records = AnswerRecord::<LearningStyle>::normalize_all(answers);
        let core = score_records(
            &records,
            &WeightingRules::count_only(),
            false,
            options.resolve_timestamp(),
        );
        base_result(&core, self.algorithm())
    }
}

impl ScoringStrategy for WeightedStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Weighted
    }

    fn score(&self, answers: &[RawAnswer], options: &ScoringOptions) -> LearningStyleResult {
        let records = AnswerRecord::<LearningStyle>::normalize_all(answers);
        let core = weighted_core(&records, options, false);
        let mut result = base_result(&core, self.algorithm());
        result.profile_type = Some(profile_type(&core));
        result
    }
}

impl ScoringStrategy for AdvancedStrategy {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Advanced
    }

    fn score(&self, answers: &[RawAnswer], options: &ScoringOptions) -> LearningStyleResult {
        let records = AnswerRecord::<LearningStyle>::normalize_all(answers);
        let core = weighted_core(&records, options, true);

        let mut result = base_result(&core, self.algorithm());
        result.profile_type = Some(profile_type(&core));
        result.adaptability_score = Some(adaptability(&records));
        result.learning_efficiency = Some(learning_efficiency(&records, &core));
        result.recommendations = Some(advanced_recommendations(&core));
        result.pattern_interactions = core.interactions;
        result
    }
}

fn weighted_core(
    records: &[AnswerRecord<LearningStyle>],
    options: &ScoringOptions,
    include_interactions: bool,
) -> ScoringResult<LearningStyle> {
    let rules = WeightingRules::weighted(options.behavior_patterns())
        .with_question_weights(question_category_weight);
    score_records(
        records,
        &rules,
        include_interactions,
        options.resolve_timestamp(),
    )
}

fn base_result(core: &ScoringResult<LearningStyle>, algorithm: Algorithm) -> LearningStyleResult {
    LearningStyleResult {
        results: core.category_scores(),
        dominant_pattern: core.dominant_slot(),
        secondary_pattern: core.secondary_slot(),
        algorithm,
        timestamp: core.timestamp,
        total_questions: core.total_answers(),
        profile_type: None,
        pattern_interactions: None,
        learning_efficiency: None,
        adaptability_score: None,
        recommendations: None,
    }
}

fn profile_type(core: &ScoringResult<LearningStyle>) -> String {
    let dominant = core
        .dominant
        .map(|style| (style, core.score_of(style)));
    profile_label(dominant, core.secondary)
}

pub(crate) fn adaptability(records: &[AnswerRecord<LearningStyle>]) -> AdaptabilityScore {
    let changes = records
        .windows(2)
        .filter(|pair| pair[0].category != pair[1].category)
        .count() as u32;

    let score = if records.len() < 2 {
        0
    } else {
        (100.0 * f64::from(changes) / (records.len() - 1) as f64)
            .round()
            .clamp(0.0, 100.0) as u8
    };

    let level = match score {
        60..=u8::MAX => "high",
        30..=59 => "moderate",
        _ => "low",
    };

    AdaptabilityScore {
        score,
        changes,
        level,
    }
}

pub(crate) fn learning_efficiency(
    records: &[AnswerRecord<LearningStyle>],
    core: &ScoringResult<LearningStyle>,
) -> LearningEfficiency {
    let average = mean_response_time(records.iter());
    let (pace, pace_factor) = match average {
        None => ("unknown", 70.0),
        Some(ms) if ms < 3_000.0 => ("quick", 80.0),
        Some(ms) if ms <= 15_000.0 => ("steady", 100.0),
        Some(_) => ("deliberate", 60.0),
    };

    let dominant = core.dominant_slot();
    let score = if dominant.pattern.is_some() {
        (0.5 * f64::from(dominant.score) + 0.3 * f64::from(dominant.confidence) + 0.2 * pace_factor)
            .round()
            .clamp(0.0, 100.0) as u8
    } else {
        0
    };

    LearningEfficiency {
        score,
        pace,
        average_response_time_ms: average.map(|ms| ms.round() as u64),
        focus: dominant.pattern,
    }
}

fn advanced_recommendations(
    core: &ScoringResult<LearningStyle>,
) -> recommendations::Recommendations {
    let ranked: Vec<LearningStyle> = core.dominant.into_iter().chain(core.secondary).collect();

    let mut tips = Vec::new();
    if let (Some(dominant), Some(interactions)) = (core.dominant, core.interactions.as_ref()) {
        let mut related: Vec<(&String, _)> = interactions
            .iter()
            .filter(|(key, _)| key.split('_').any(|part| part == dominant.key()))
            .collect();
        related.sort_by(|(key_a, a), (key_b, b)| {
            b.synergy
                .cmp(&a.synergy)
                .then_with(|| key_a.cmp(key_b))
        });
        tips = related.into_iter().map(|(_, interaction)| interaction).collect();
    }

    recommendations::assemble(&ranked, &tips)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: LearningStyle) -> AnswerRecord<LearningStyle> {
        AnswerRecord {
            category,
            weight: 1.0,
            response_time_ms: None,
            question_category: None,
        }
    }

    #[test]
    fn adaptability_counts_category_switches() {
        let records = vec![
            record(LearningStyle::Visual),
            record(LearningStyle::Visual),
            record(LearningStyle::Auditory),
            record(LearningStyle::Visual),
            record(LearningStyle::Visual),
        ];

        let adaptability = adaptability(&records);

        assert_eq!(adaptability.changes, 2);
        assert_eq!(adaptability.score, 50);
        assert_eq!(adaptability.level, "moderate");
    }

    #[test]
    fn adaptability_of_single_answer_is_zero() {
        let adaptability = adaptability(&[record(LearningStyle::Social)]);
        assert_eq!(adaptability.score, 0);
        assert_eq!(adaptability.level, "low");
    }
}
