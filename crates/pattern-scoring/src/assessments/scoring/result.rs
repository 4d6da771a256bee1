use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interactions::PatternInteraction;
use super::ranking::strength_label;
use super::taxonomy::Category;

/// Per-category accumulator for a single scoring run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTally {
    pub count: u32,
    pub accumulated_weight: f64,
    pub percentage_score: u8,
    pub confidence: u8,
}

/// Taxonomy-level output of the scoring pipeline. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult<C: Category> {
    pub categories: BTreeMap<C, CategoryTally>,
    pub dominant: Option<C>,
    pub secondary: Option<C>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactions: Option<BTreeMap<String, PatternInteraction>>,
    pub timestamp: DateTime<Utc>,
}

impl<C: Category> ScoringResult<C> {
    pub fn tally(&self, category: C) -> Option<&CategoryTally> {
        self.categories.get(&category)
    }

    pub fn score_of(&self, category: C) -> u8 {
        self.tally(category)
            .map(|tally| tally.percentage_score)
            .unwrap_or(0)
    }

    pub fn total_answers(&self) -> u32 {
        self.categories.values().map(|tally| tally.count).sum()
    }

    /// Categories ordered by descending score, enumeration order on ties.
    pub fn ranked(&self) -> Vec<C> {
        let mut ranked: Vec<C> = C::ALL.to_vec();
        ranked.sort_by(|a, b| {
            self.score_of(*b)
                .cmp(&self.score_of(*a))
                .then_with(|| a.ordinal().cmp(&b.ordinal()))
        });
        ranked
    }

    /// Wire view of every category's score.
    pub fn category_scores(&self) -> BTreeMap<C, CategoryScore> {
        self.categories
            .iter()
            .map(|(category, tally)| {
                (
                    *category,
                    CategoryScore {
                        score: tally.percentage_score,
                        strength: strength_label(tally.percentage_score),
                        confidence: tally.confidence,
                        description: category.description(),
                        count: tally.count,
                        weight: round_weight(tally.accumulated_weight),
                    },
                )
            })
            .collect()
    }

    /// The dominant slot is always present; its pattern is `null` when nothing was scored.
    pub fn dominant_slot(&self) -> PatternSlot<C> {
        self.slot(self.dominant)
    }

    pub fn secondary_slot(&self) -> Option<PatternSlot<C>> {
        self.secondary.map(|category| self.slot(Some(category)))
    }

    fn slot(&self, category: Option<C>) -> PatternSlot<C> {
        let tally = category.and_then(|category| self.tally(category));
        let score = tally.map(|tally| tally.percentage_score).unwrap_or(0);
        PatternSlot {
            pattern: category,
            score,
            strength: strength_label(score),
            confidence: tally.map(|tally| tally.confidence).unwrap_or(0),
        }
    }
}

fn round_weight(weight: f64) -> f64 {
    (weight * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub score: u8,
    pub strength: &'static str,
    pub confidence: u8,
    pub description: &'static str,
    pub count: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSlot<C> {
    pub pattern: Option<C>,
    pub score: u8,
    pub strength: &'static str,
    pub confidence: u8,
}
