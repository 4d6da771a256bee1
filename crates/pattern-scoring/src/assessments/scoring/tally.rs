use std::collections::BTreeMap;

use super::input::{AnswerRecord, BehaviorPatterns};
use super::result::CategoryTally;
use super::taxonomy::Category;

/// Which multiplicative adjustments contribute to an answer's effective weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightingRules<'a> {
    /// Use the answer's own weight instead of counting every answer as 1.
    pub base_weights: bool,
    pub response_timing: bool,
    pub behavior: Option<&'a BehaviorPatterns>,
    /// Per-question-category weight table.
    pub question_weights: Option<fn(Option<&str>) -> f64>,
}

impl<'a> WeightingRules<'a> {
    /// Every valid answer counts as exactly one vote.
    pub fn count_only() -> Self {
        Self::default()
    }

    pub fn weighted(behavior: Option<&'a BehaviorPatterns>) -> Self {
        Self {
            base_weights: true,
            response_timing: true,
            behavior,
            question_weights: None,
        }
    }

    pub fn with_question_weights(mut self, table: fn(Option<&str>) -> f64) -> Self {
        self.question_weights = Some(table);
        self
    }
}

/// Multiplier applied for the time taken on a single answer.
pub fn time_adjustment(response_time_ms: Option<u64>) -> f64 {
    match response_time_ms {
        Some(ms) if (3_000..=15_000).contains(&ms) => 1.1,
        Some(ms) if ms < 2_000 => 0.8,
        Some(ms) if ms > 30_000 => 0.7,
        _ => 1.0,
    }
}

/// Per-category multiplier derived from the respondent's timing profile and the
/// externally supplied hesitation and change-frequency signals.
pub fn behavior_adjustments<C: Category>(
    answers: &[AnswerRecord<C>],
    patterns: &BehaviorPatterns,
) -> BTreeMap<C, f64> {
    let mut shared = 1.0;
    if patterns.hesitation_index.is_some_and(|index| index > 2.0) {
        shared *= 0.95;
    }
    if patterns.change_frequency.is_some_and(|frequency| frequency > 0.3) {
        shared *= 0.9;
    }

    let average = patterns
        .average_response_time
        .filter(|avg| avg.is_finite() && *avg > 0.0)
        .or_else(|| mean_response_time(answers.iter()));

    C::ALL
        .iter()
        .map(|category| {
            let mut adjustment = shared;
            let category_mean =
                mean_response_time(answers.iter().filter(|answer| answer.category == *category));
            if let (Some(average), Some(category_mean)) = (average, category_mean) {
                if category_mean < average * 0.7 {
                    adjustment *= 1.2;
                } else if category_mean > average * 1.5 {
                    adjustment *= 0.9;
                }
            }
            (*category, adjustment)
        })
        .collect()
}

pub(crate) fn mean_response_time<'a, C: 'a>(
    answers: impl Iterator<Item = &'a AnswerRecord<C>>,
) -> Option<f64> {
    let (sum, count) = answers
        .filter_map(|answer| answer.response_time_ms)
        .fold((0u64, 0u32), |(sum, count), ms| (sum.saturating_add(ms), count + 1));
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Effective weight of every answer under `rules`, in input order.
pub fn answer_weights<C: Category>(
    answers: &[AnswerRecord<C>],
    rules: &WeightingRules<'_>,
) -> Vec<f64> {
    let behavior = rules
        .behavior
        .map(|patterns| behavior_adjustments(answers, patterns));

    answers
        .iter()
        .map(|answer| {
            let base = if rules.base_weights { answer.weight } else { 1.0 };
            let timing = if rules.response_timing {
                time_adjustment(answer.response_time_ms)
            } else {
                1.0
            };
            let behavioral = behavior
                .as_ref()
                .and_then(|adjustments| adjustments.get(&answer.category).copied())
                .unwrap_or(1.0);
            let question = rules
                .question_weights
                .map(|table| table(answer.question_category.as_deref()))
                .unwrap_or(1.0);
            base * question * behavioral * timing
        })
        .collect()
}

/// Build a fresh tally for every member of the taxonomy. Categories without
/// answers are present with zero counts.
pub fn accumulate<C: Category>(
    answers: &[AnswerRecord<C>],
    rules: &WeightingRules<'_>,
) -> BTreeMap<C, CategoryTally> {
    let mut tallies: BTreeMap<C, CategoryTally> = C::ALL
        .iter()
        .map(|category| (*category, CategoryTally::default()))
        .collect();

    for (answer, weight) in answers.iter().zip(answer_weights(answers, rules)) {
        if let Some(tally) = tallies.get_mut(&answer.category) {
            tally.count += 1;
            tally.accumulated_weight += weight;
        }
    }

    tallies
}
