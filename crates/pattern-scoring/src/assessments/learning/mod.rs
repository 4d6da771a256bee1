//! Learning-style assessment over the visual/auditory/kinesthetic/social taxonomy.

mod domain;
mod recommendations;
mod result;
mod strategies;

pub use domain::{profile_label, question_category_weight, LearningStyle};
pub use recommendations::Recommendations;
pub use result::{AdaptabilityScore, LearningEfficiency, LearningStyleResult};
pub use strategies::{AdvancedStrategy, BasicStrategy, WeightedStrategy};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{RawAnswer, ScoringOptions};

/// Interchangeable scoring strategies over the same answer shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Basic,
    #[default]
    Weighted,
    Advanced,
}

impl Algorithm {
    /// Parse a request flag. Unknown flags select the weighted strategy.
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_lowercase().as_str() {
            "basic" => Self::Basic,
            "advanced" => Self::Advanced,
            _ => Self::Weighted,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Weighted => "weighted",
            Self::Advanced => "advanced",
        }
    }

    pub fn strategy(self) -> &'static dyn ScoringStrategy {
        match self {
            Self::Basic => &BasicStrategy,
            Self::Weighted => &WeightedStrategy,
            Self::Advanced => &AdvancedStrategy,
        }
    }
}

/// Common interface of the learning-style strategies.
pub trait ScoringStrategy: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn score(&self, answers: &[RawAnswer], options: &ScoringOptions) -> LearningStyleResult;
}

/// Score a learning-style questionnaire with the selected strategy.
pub fn score_learning_style(
    answers: &[RawAnswer],
    algorithm: Algorithm,
    options: &ScoringOptions,
) -> LearningStyleResult {
    let result = algorithm.strategy().score(answers, options);
    debug!(
        algorithm = algorithm.as_str(),
        submitted = answers.len(),
        scored = result.total_questions,
        dominant = ?result.dominant(),
        "learning-style answers scored"
    );
    result
}
