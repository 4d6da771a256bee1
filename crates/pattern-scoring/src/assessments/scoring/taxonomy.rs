use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

/// A fixed classification taxonomy an answer can vote for.
///
/// `ALL` fixes the enumeration order used for tie-breaking, and the derived
/// `Ord` must agree with it so ordered maps iterate in the same order.
pub trait Category: Copy + Eq + Ord + Hash + Debug + Serialize + 'static {
    const ALL: &'static [Self];

    /// Known pairwise affinities (0.0–1.0). Each unordered pair appears at most once.
    const AFFINITIES: &'static [(Self, Self, f64)];

    /// Lowercase wire key, e.g. `visual`.
    fn key(self) -> &'static str;

    /// Human readable label used in generated text.
    fn label(self) -> &'static str;

    fn description(self) -> &'static str;

    fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key() == normalized)
    }

    /// Position in the enumeration.
    fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|category| *category == self)
            .unwrap_or(usize::MAX)
    }
}
