use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{CognitiveDimension, CognitivePattern};
use crate::assessments::scoring::ranking::percentage;
use crate::assessments::scoring::{strength_label, AnswerRecord, ScoringResult};

/// Answer placed on a dimension together with the pattern it indicates.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScenarioVote {
    pub record: AnswerRecord<CognitiveDimension>,
    pub pattern: CognitivePattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveFingerprint {
    /// Dominant pattern keys of every answered dimension, in dimension order.
    pub signature: String,
    pub dimensions: BTreeMap<CognitiveDimension, FingerprintEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FingerprintEntry {
    pub pattern: CognitivePattern,
    /// Share of the dimension's weight carried by `pattern`.
    pub share: u8,
    pub strength: &'static str,
    pub description: &'static str,
    pub dimension_score: u8,
}

/// `weights` holds the effective weight of each vote, aligned with `votes`, so
/// a pattern's share uses the same weighting as its dimension's score.
pub(crate) fn assemble(
    votes: &[ScenarioVote],
    weights: &[f64],
    core: &ScoringResult<CognitiveDimension>,
) -> CognitiveFingerprint {
    let mut dimensions = BTreeMap::new();

    for (dimension, tally) in &core.categories {
        if tally.count == 0 {
            continue;
        }

        let pattern_weights: Vec<(CognitivePattern, f64)> = dimension
            .patterns()
            .iter()
            .map(|pattern| {
                let weight = votes
                    .iter()
                    .zip(weights)
                    .filter(|(vote, _)| vote.pattern == *pattern)
                    .map(|(_, weight)| *weight)
                    .sum::<f64>();
                (*pattern, weight)
            })
            .collect();
        let total: f64 = pattern_weights.iter().map(|(_, weight)| weight).sum();

        let mut best: Option<(CognitivePattern, f64)> = None;
        for (pattern, weight) in &pattern_weights {
            match best {
                Some((_, best_weight)) if best_weight >= *weight => {}
                _ => best = Some((*pattern, *weight)),
            }
        }

        if let Some((pattern, weight)) = best {
            let share = percentage(weight, total);
            dimensions.insert(
                *dimension,
                FingerprintEntry {
                    pattern,
                    share,
                    strength: strength_label(share),
                    description: pattern.description(),
                    dimension_score: tally.percentage_score,
                },
            );
        }
    }

    let signature = if dimensions.is_empty() {
        "undetermined".to_string()
    } else {
        dimensions
            .values()
            .map(|entry| entry.pattern.key())
            .collect::<Vec<_>>()
            .join("-")
    };

    CognitiveFingerprint {
        signature,
        dimensions,
    }
}
