use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::taxonomy::Category;

/// Upper bound on a single answer's weight so tallies stay finite.
pub const MAX_ANSWER_WEIGHT: f64 = 1_000_000.0;

/// Answer as submitted over the wire. Different questionnaires name the voted
/// bucket `category`, `pattern`, `dimension`, or `hidden_dimension`; all of
/// them are accepted here and resolved once by [`AnswerRecord::from_raw`] or
/// the cognitive scenario mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAnswer {
    pub category: Option<String>,
    pub pattern: Option<String>,
    pub weight: Option<f64>,
    #[serde(alias = "responseTimeMs")]
    pub response_time: Option<f64>,
    pub dimension: Option<String>,
    #[serde(rename = "hidden_dimension", alias = "hiddenDimension")]
    pub hidden_dimension: Option<String>,
    pub question_category: Option<String>,
}

impl RawAnswer {
    /// Key of the bucket this answer votes for in single-taxonomy assessments.
    pub fn vote_key(&self) -> Option<&str> {
        self.category.as_deref().or(self.pattern.as_deref())
    }

    /// Dimension hint for scenario-based answers.
    pub fn dimension_hint(&self) -> Option<&str> {
        self.hidden_dimension
            .as_deref()
            .or(self.dimension.as_deref())
    }

    /// Positive finite weights, capped at [`MAX_ANSWER_WEIGHT`]; anything else counts as 1.0.
    pub fn effective_weight(&self) -> f64 {
        self.weight
            .filter(|weight| weight.is_finite() && *weight > 0.0)
            .map(|weight| weight.min(MAX_ANSWER_WEIGHT))
            .unwrap_or(1.0)
    }

    pub fn response_time_ms(&self) -> Option<u64> {
        self.response_time
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .map(|ms| ms.round() as u64)
    }
}

/// Normalized answer voting for a member of taxonomy `C`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord<C> {
    pub category: C,
    pub weight: f64,
    pub response_time_ms: Option<u64>,
    pub question_category: Option<String>,
}

impl<C: Category> AnswerRecord<C> {
    /// Returns `None` when the answer does not name a member of `C`.
    pub fn from_raw(raw: &RawAnswer) -> Option<Self> {
        let category = raw.vote_key().and_then(C::from_key)?;
        Some(Self::with_category(category, raw))
    }

    pub fn with_category(category: C, raw: &RawAnswer) -> Self {
        Self {
            category,
            weight: raw.effective_weight(),
            response_time_ms: raw.response_time_ms(),
            question_category: raw
                .question_category
                .as_ref()
                .map(|value| value.trim().to_ascii_lowercase()),
        }
    }

    pub fn normalize_all(raw: &[RawAnswer]) -> Vec<Self> {
        raw.iter().filter_map(Self::from_raw).collect()
    }
}

/// Optional behavioral signals captured by the client alongside the answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorData {
    pub patterns: Option<BehaviorPatterns>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorPatterns {
    pub average_response_time: Option<f64>,
    pub hesitation_index: Option<f64>,
    pub change_frequency: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("answers must be an array")]
    NotAnArray,
}

/// Structural check performed at the boundary. Individual entries that are
/// not answer objects are skipped rather than rejected.
pub fn parse_answers(value: &Value) -> Result<Vec<RawAnswer>, InputError> {
    let entries = value.as_array().ok_or(InputError::NotAnArray)?;
    Ok(entries
        .iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| serde_json::from_value::<RawAnswer>(entry.clone()).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_array_payloads() {
        assert_eq!(
            parse_answers(&json!({ "category": "visual" })),
            Err(InputError::NotAnArray)
        );
        assert_eq!(parse_answers(&Value::Null), Err(InputError::NotAnArray));
    }

    #[test]
    fn skips_malformed_entries() {
        let answers = parse_answers(&json!([
            { "category": "visual", "weight": 2 },
            42,
            "auditory",
            { "pattern": "kinesthetic", "responseTime": 4200 },
            { "category": "social", "weight": "heavy" }
        ]))
        .expect("array parses");

        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].vote_key(), Some("visual"));
        assert_eq!(answers[1].vote_key(), Some("kinesthetic"));
        assert_eq!(answers[1].response_time_ms(), Some(4200));
    }

    #[test]
    fn accepts_both_dimension_spellings() {
        let answers = parse_answers(&json!([
            { "pattern": "tree_bark", "hidden_dimension": "texture" },
            { "pattern": "campfire", "dimension": "temperature" }
        ]))
        .expect("array parses");

        assert_eq!(answers[0].dimension_hint(), Some("texture"));
        assert_eq!(answers[1].dimension_hint(), Some("temperature"));
    }

    #[test]
    fn non_positive_weights_fall_back_to_default() {
        let raw = RawAnswer {
            category: Some("visual".to_string()),
            weight: Some(-3.0),
            response_time: Some(-1.0),
            ..RawAnswer::default()
        };
        assert_eq!(raw.effective_weight(), 1.0);
        assert_eq!(raw.response_time_ms(), None);
    }

    #[test]
    fn huge_weights_are_capped() {
        let raw = RawAnswer {
            category: Some("visual".to_string()),
            weight: Some(1.7e308),
            ..RawAnswer::default()
        };
        assert_eq!(raw.effective_weight(), MAX_ANSWER_WEIGHT);
    }
}
