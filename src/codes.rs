//! WMO weather code tables: descriptions and icon categories

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Description shown for codes missing from [`DESCRIPTIONS`]
pub const UNKNOWN_WEATHER: &str = "Unknown weather";

/// Direct map from weather code to description
pub const DESCRIPTIONS: &[(i32, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (80, "Rain showers"),
    (95, "Thunderstorm"),
];

/// Icon category for a weather code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Clear,
    Cloudy,
    Rainy,
    Stormy,
    /// Fallback for anything the rules don't cover
    Windy,
}

/// Ordered classification rules. First match wins; no match means
/// [`IconCategory::Windy`].
pub const ICON_RULES: &[(IconCategory, &[i32])] = &[
    (IconCategory::Clear, &[0, 1]),
    (IconCategory::Cloudy, &[2, 3]),
    (IconCategory::Rainy, &[61, 63, 65, 80]),
    (IconCategory::Stormy, &[95]),
];

/// Human-readable description for a weather code
pub fn describe(code: i32) -> &'static str {
    DESCRIPTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
        .unwrap_or(UNKNOWN_WEATHER)
}

/// Icon category for a weather code
pub fn classify_icon(code: i32) -> IconCategory {
    ICON_RULES
        .iter()
        .find(|(_, codes)| codes.contains(&code))
        .map(|(category, _)| *category)
        .unwrap_or(IconCategory::Windy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_known_codes() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(48), "Rime fog");
        assert_eq!(describe(61), "Slight rain");
        assert_eq!(describe(95), "Thunderstorm");
    }

    #[test]
    fn test_describe_unknown_codes() {
        assert_eq!(describe(999), "Unknown weather");
        assert_eq!(describe(-1), "Unknown weather");
        // Valid WMO codes the table doesn't list still fall through
        assert_eq!(describe(71), "Unknown weather");
    }

    #[test]
    fn test_classify_icon() {
        assert_eq!(classify_icon(0), IconCategory::Clear);
        assert_eq!(classify_icon(1), IconCategory::Clear);
        assert_eq!(classify_icon(3), IconCategory::Cloudy);
        assert_eq!(classify_icon(63), IconCategory::Rainy);
        assert_eq!(classify_icon(80), IconCategory::Rainy);
        assert_eq!(classify_icon(95), IconCategory::Stormy);
        assert_eq!(classify_icon(12), IconCategory::Windy);
    }

    #[test]
    fn test_drizzle_and_fog_fall_back_to_windy() {
        // Described, but not in any icon rule
        for code in [45, 48, 51, 53, 55] {
            assert_ne!(describe(code), UNKNOWN_WEATHER);
            assert_eq!(classify_icon(code), IconCategory::Windy);
        }
    }

    #[test]
    fn test_icon_rules_are_disjoint() {
        for (i, (_, a)) in ICON_RULES.iter().enumerate() {
            for (_, b) in &ICON_RULES[i + 1..] {
                assert!(a.iter().all(|code| !b.contains(code)));
            }
        }
    }
}
