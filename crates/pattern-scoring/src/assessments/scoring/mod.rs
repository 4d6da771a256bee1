//! Taxonomy-agnostic scoring core shared by every assessment variant.
//!
//! The pipeline is tally → percentage → confidence → dominant/secondary →
//! optional pairwise interactions. Nothing here performs I/O or holds state
//! between calls; each invocation builds fresh tallies from its own input.

pub mod input;
pub mod interactions;
pub mod ranking;
pub mod result;
pub mod tally;
pub mod taxonomy;

pub use input::{
    parse_answers, AnswerRecord, BehaviorData, BehaviorPatterns, InputError, RawAnswer,
    MAX_ANSWER_WEIGHT,
};
pub use interactions::{pair_interactions, PatternInteraction};
pub use ranking::{strength_label, Ranking, SECONDARY_THRESHOLD};
pub use result::{CategoryScore, CategoryTally, PatternSlot, ScoringResult};
pub use tally::{accumulate, answer_weights, WeightingRules};
pub use taxonomy::Category;

use chrono::{DateTime, Utc};

/// Maximum number of entries in any assembled recommendation list.
pub const RECOMMENDATION_CAP: usize = 5;

/// Per-call options shared by all strategies.
#[derive(Debug, Clone, Default)]
pub struct ScoringOptions {
    pub behavior: Option<BehaviorData>,
    /// Fixed creation time; `None` stamps the result with the current time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl ScoringOptions {
    pub fn with_behavior(mut self, behavior: Option<BehaviorData>) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub(crate) fn behavior_patterns(&self) -> Option<&BehaviorPatterns> {
        self.behavior.as_ref().and_then(|data| data.patterns.as_ref())
    }

    pub(crate) fn resolve_timestamp(&self) -> DateTime<Utc> {
        self.timestamp.unwrap_or_else(Utc::now)
    }
}

/// Run the shared pipeline over normalized answers.
pub fn score_records<C: Category>(
    answers: &[AnswerRecord<C>],
    rules: &WeightingRules<'_>,
    include_interactions: bool,
    timestamp: DateTime<Utc>,
) -> ScoringResult<C> {
    let mut categories = accumulate(answers, rules);
    let ranking = ranking::rank(&mut categories);
    let interactions = include_interactions.then(|| pair_interactions(&categories));

    ScoringResult {
        categories,
        dominant: ranking.dominant,
        secondary: ranking.secondary,
        interactions,
        timestamp,
    }
}

/// Concatenate suggestion sources in priority order, dropping repeats and
/// stopping at `cap` entries.
pub fn assemble_unique<I, S>(sources: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembled: Vec<String> = Vec::new();
    for item in sources {
        if assembled.len() >= cap {
            break;
        }
        let item = item.as_ref().trim();
        if item.is_empty() || assembled.iter().any(|existing| existing == item) {
            continue;
        }
        assembled.push(item.to_string());
    }
    assembled
}
