use super::domain::{CognitiveDimension, CognitivePattern};

use CognitiveDimension::{Ecosystem, Spatial, Temperature, Temporal, Texture};
use CognitivePattern::*;

/// Scenario answer options as presented to respondents, mapped to the
/// cognitive pattern they indicate within their dimension.
const SCENARIO_PATTERNS: &[(CognitiveDimension, &str, CognitivePattern)] = &[
    (Texture, "polished_stone", Smooth),
    (Texture, "silk", Smooth),
    (Texture, "glass", Smooth),
    (Texture, "tree_bark", Rough),
    (Texture, "sandpaper", Rough),
    (Texture, "gravel", Rough),
    (Texture, "onion", Layered),
    (Texture, "puff_pastry", Layered),
    (Texture, "sediment", Layered),
    (Temperature, "campfire", Warm),
    (Temperature, "sunlit_room", Warm),
    (Temperature, "cocoa", Warm),
    (Temperature, "snowfield", Cool),
    (Temperature, "mountain_stream", Cool),
    (Temperature, "autumn_breeze", Balanced),
    (Temperature, "spring_morning", Balanced),
    (Ecosystem, "rainforest", Forest),
    (Ecosystem, "woodland", Forest),
    (Ecosystem, "desert_dunes", Desert),
    (Ecosystem, "cactus", Desert),
    (Ecosystem, "open_sea", Ocean),
    (Ecosystem, "coral_reef", Ocean),
    (Ecosystem, "river_delta", Ocean),
    (Temporal, "hundred_meter_dash", Sprint),
    (Temporal, "thunderstorm", Sprint),
    (Temporal, "long_hike", Marathon),
    (Temporal, "slow_river", Marathon),
    (Temporal, "seasons", Cyclical),
    (Temporal, "tides", Cyclical),
    (Temporal, "moon_phases", Cyclical),
    (Spatial, "city_map", Map),
    (Spatial, "mountain_summit", Map),
    (Spatial, "winding_trail", Path),
    (Spatial, "staircase", Path),
    (Spatial, "lighthouse", Landmark),
    (Spatial, "town_square", Landmark),
];

/// Outcome of resolving a scenario answer to a cognitive pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioMapping {
    Mapped(CognitivePattern),
    /// The key is not in the table for its dimension; the dimension's
    /// documented default pattern is used instead.
    Defaulted(CognitivePattern),
}

impl ScenarioMapping {
    pub fn pattern(self) -> CognitivePattern {
        match self {
            ScenarioMapping::Mapped(pattern) | ScenarioMapping::Defaulted(pattern) => pattern,
        }
    }
}

/// Resolve a scenario key. Pattern keys (`warm`, `map`, ...) resolve to
/// themselves. Without a dimension hint the key must be known, otherwise the
/// answer cannot be placed and `None` is returned.
pub fn map_scenario(dimension: Option<CognitiveDimension>, scenario: &str) -> Option<ScenarioMapping> {
    let key = scenario.trim().to_ascii_lowercase();

    let known = SCENARIO_PATTERNS
        .iter()
        .filter(|(entry_dimension, _, _)| dimension.map_or(true, |d| d == *entry_dimension))
        .find(|(_, entry_key, _)| *entry_key == key)
        .map(|(_, _, pattern)| *pattern)
        .or_else(|| {
            CognitivePattern::from_key(&key)
                .filter(|pattern| dimension.map_or(true, |d| pattern.dimension() == d))
        });

    match (known, dimension) {
        (Some(pattern), _) => Some(ScenarioMapping::Mapped(pattern)),
        (None, Some(dimension)) => Some(ScenarioMapping::Defaulted(dimension.default_pattern())),
        (None, None) => None,
    }
}
