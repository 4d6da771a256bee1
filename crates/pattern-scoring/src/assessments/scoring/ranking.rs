use std::collections::BTreeMap;

use super::result::CategoryTally;
use super::taxonomy::Category;

/// Runner-up categories below this score are not reported as secondary.
pub const SECONDARY_THRESHOLD: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranking<C> {
    pub dominant: Option<C>,
    pub secondary: Option<C>,
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        70..=u8::MAX => "very strong",
        50..=69 => "strong",
        30..=49 => "moderate",
        15..=29 => "mild",
        _ => "minimal",
    }
}

/// `round(0.6 × (score − second_highest) + 0.4 × score)`. Only meaningful for
/// the dominant and secondary slots; other categories saturate at zero.
pub fn confidence(score: u8, second_highest: u8) -> u8 {
    let score = f64::from(score);
    let gap = score - f64::from(second_highest);
    (0.6 * gap + 0.4 * score).round().clamp(0.0, 100.0) as u8
}

pub fn percentage(weight: f64, total: f64) -> u8 {
    if total <= 0.0 || !total.is_finite() {
        return 0;
    }
    (100.0 * weight / total).round().clamp(0.0, 100.0) as u8
}

/// Fill in percentage and confidence for every tally and pick the dominant and
/// secondary categories. Ties resolve to the earliest category in `C::ALL`.
pub fn rank<C: Category>(tallies: &mut BTreeMap<C, CategoryTally>) -> Ranking<C> {
    let total: f64 = tallies.values().map(|tally| tally.accumulated_weight).sum();

    for tally in tallies.values_mut() {
        tally.percentage_score = percentage(tally.accumulated_weight, total);
    }

    let mut scores: Vec<u8> = tallies.values().map(|tally| tally.percentage_score).collect();
    scores.sort_unstable_by(|a, b| b.cmp(a));
    let second_highest = scores.get(1).copied().unwrap_or(0);

    for tally in tallies.values_mut() {
        tally.confidence = confidence(tally.percentage_score, second_highest);
    }

    if !(total.is_finite() && total > 0.0) {
        return Ranking {
            dominant: None,
            secondary: None,
        };
    }

    let score_of = |category: &C| {
        tallies
            .get(category)
            .map(|tally| tally.percentage_score)
            .unwrap_or(0)
    };

    let dominant = best_of(C::ALL.iter().copied(), &score_of);
    let secondary = dominant.and_then(|dominant| {
        best_of(
            C::ALL.iter().copied().filter(|category| *category != dominant),
            &score_of,
        )
        .filter(|category| score_of(category) >= SECONDARY_THRESHOLD)
    });

    Ranking {
        dominant,
        secondary,
    }
}

fn best_of<C: Copy>(candidates: impl Iterator<Item = C>, score_of: &impl Fn(&C) -> u8) -> Option<C> {
    let mut best: Option<(C, u8)> = None;
    for candidate in candidates {
        let score = score_of(&candidate);
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(category, _)| category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::learning::LearningStyle;

    fn tallies(weights: &[(LearningStyle, f64)]) -> BTreeMap<LearningStyle, CategoryTally> {
        let mut tallies: BTreeMap<LearningStyle, CategoryTally> = LearningStyle::ALL
            .iter()
            .map(|category| (*category, CategoryTally::default()))
            .collect();
        for (category, weight) in weights {
            let tally = tallies.get_mut(category).expect("category present");
            tally.count += 1;
            tally.accumulated_weight += weight;
        }
        tallies
    }

    #[test]
    fn ties_resolve_in_enumeration_order() {
        let mut tallies = tallies(&[
            (LearningStyle::Social, 1.0),
            (LearningStyle::Auditory, 1.0),
        ]);

        let ranking = rank(&mut tallies);

        assert_eq!(ranking.dominant, Some(LearningStyle::Auditory));
        assert_eq!(ranking.secondary, Some(LearningStyle::Social));
    }

    #[test]
    fn secondary_requires_threshold() {
        let mut tallies = tallies(&[
            (LearningStyle::Visual, 9.0),
            (LearningStyle::Kinesthetic, 1.0),
        ]);

        let ranking = rank(&mut tallies);

        assert_eq!(ranking.dominant, Some(LearningStyle::Visual));
        assert_eq!(tallies[&LearningStyle::Kinesthetic].percentage_score, 10);
        assert_eq!(ranking.secondary, None);
    }

    #[test]
    fn empty_tallies_have_no_dominant() {
        let mut tallies = tallies(&[]);

        let ranking = rank(&mut tallies);

        assert_eq!(ranking.dominant, None);
        assert_eq!(ranking.secondary, None);
        assert!(tallies.values().all(|tally| tally.percentage_score == 0));
        assert!(tallies.values().all(|tally| tally.confidence == 0));
    }

    #[test]
    fn overflowing_totals_have_no_dominant() {
        let mut tallies = tallies(&[
            (LearningStyle::Visual, f64::MAX),
            (LearningStyle::Visual, f64::MAX),
            (LearningStyle::Auditory, 1.0),
        ]);

        let ranking = rank(&mut tallies);

        assert_eq!(ranking.dominant, None);
        assert!(tallies.values().all(|tally| tally.percentage_score == 0));
    }

    #[test]
    fn confidence_rewards_gap_to_runner_up() {
        assert_eq!(confidence(67, 33), 47);
        assert_eq!(confidence(50, 50), 20);
        assert_eq!(confidence(100, 0), 100);
        assert_eq!(confidence(10, 50), 0);
    }

    #[test]
    fn strength_labels_cover_full_range() {
        assert_eq!(strength_label(0), "minimal");
        assert_eq!(strength_label(15), "mild");
        assert_eq!(strength_label(30), "moderate");
        assert_eq!(strength_label(50), "strong");
        assert_eq!(strength_label(70), "very strong");
        assert_eq!(strength_label(100), "very strong");
    }
}
