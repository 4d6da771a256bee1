use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::result::CategoryTally;
use super::taxonomy::Category;

/// Affinity used when a pair is missing from the taxonomy's table.
pub const DEFAULT_AFFINITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternInteraction {
    pub compatibility: u8,
    pub synergy: u8,
    pub recommendation: String,
}

/// Table lookup tried in both key orders.
pub fn affinity<C: Category>(a: C, b: C) -> f64 {
    C::AFFINITIES
        .iter()
        .find(|(first, second, _)| (*first == a && *second == b) || (*first == b && *second == a))
        .map(|(_, _, value)| *value)
        .unwrap_or(DEFAULT_AFFINITY)
}

/// `first_second` with the pair ordered by enumeration.
pub fn pair_key<C: Category>(a: C, b: C) -> String {
    let (first, second) = if a.ordinal() <= b.ordinal() { (a, b) } else { (b, a) };
    format!("{}_{}", first.key(), second.key())
}

pub fn compatibility(score_a: u8, score_b: u8) -> u8 {
    let gap = f64::from(score_a.abs_diff(score_b));
    (100.0 - 0.5 * gap).clamp(0.0, 100.0).round() as u8
}

pub fn synergy<C: Category>(a: C, score_a: u8, b: C, score_b: u8) -> u8 {
    let combined = f64::from(score_a) + f64::from(score_b);
    (100.0 * affinity(a, b) * combined / 100.0)
        .round()
        .clamp(0.0, 100.0) as u8
}

pub fn interaction_recommendation<C: Category>(a: C, score_a: u8, b: C, score_b: u8) -> String {
    if score_a > 50 && score_b > 50 {
        return format!(
            "Combined approach: blend {} and {} techniques in the same study session",
            a.label(),
            b.label()
        );
    }

    if score_a.abs_diff(score_b) < 20 {
        return format!(
            "Balanced approach: alternate between {} and {} activities",
            a.label(),
            b.label()
        );
    }

    let (primary, support) = if score_a >= score_b { (a, b) } else { (b, a) };
    format!(
        "Complementary approach: lead with {} strategies and use {} techniques for reinforcement",
        primary.label(),
        support.label()
    )
}

pub fn interaction<C: Category>(a: C, score_a: u8, b: C, score_b: u8) -> PatternInteraction {
    PatternInteraction {
        compatibility: compatibility(score_a, score_b),
        synergy: synergy(a, score_a, b, score_b),
        recommendation: interaction_recommendation(a, score_a, b, score_b),
    }
}

/// One entry per unordered pair of categories in the taxonomy.
pub fn pair_interactions<C: Category>(
    tallies: &BTreeMap<C, CategoryTally>,
) -> BTreeMap<String, PatternInteraction> {
    let score_of = |category: C| {
        tallies
            .get(&category)
            .map(|tally| tally.percentage_score)
            .unwrap_or(0)
    };

    let mut interactions = BTreeMap::new();
    for (index, a) in C::ALL.iter().enumerate() {
        for b in &C::ALL[index + 1..] {
            interactions.insert(
                pair_key(*a, *b),
                interaction(*a, score_of(*a), *b, score_of(*b)),
            );
        }
    }
    interactions
}
