//! Discrete moisture classification.
//!
//! Pure mapping from a moisture percentage to one of five categories.
//! Breakpoints are inclusive upper bounds: a reading of exactly 7.7%
//! is still "Very Dry", 7.701% is "Dry".

use serde::Serialize;

/// Discrete soil-moisture category attached to cycle records when the
/// classifier is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoistureCategory {
    #[serde(rename = "Very Dry")]
    VeryDry,
    #[serde(rename = "Dry")]
    Dry,
    #[serde(rename = "Moist")]
    Moist,
    #[serde(rename = "Wet")]
    Wet,
    #[serde(rename = "Very Wet")]
    VeryWet,
}

impl MoistureCategory {
    /// Human-readable label, as it appears in log lines and JSON.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryDry => "Very Dry",
            Self::Dry => "Dry",
            Self::Moist => "Moist",
            Self::Wet => "Wet",
            Self::VeryWet => "Very Wet",
        }
    }
}

impl core::fmt::Display for MoistureCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a moisture reading (%).
pub fn classify(moisture: f32) -> MoistureCategory {
    if moisture <= 7.7 {
        MoistureCategory::VeryDry
    } else if moisture <= 17.0 {
        MoistureCategory::Dry
    } else if moisture <= 22.6 {
        MoistureCategory::Moist
    } else if moisture <= 27.5 {
        MoistureCategory::Wet
    } else {
        MoistureCategory::VeryWet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_closed_below_open_above() {
        assert_eq!(classify(7.7), MoistureCategory::VeryDry);
        assert_eq!(classify(7.701), MoistureCategory::Dry);
        assert_eq!(classify(17.0), MoistureCategory::Dry);
        assert_eq!(classify(17.001), MoistureCategory::Moist);
        assert_eq!(classify(22.6), MoistureCategory::Moist);
        assert_eq!(classify(27.5), MoistureCategory::Wet);
        assert_eq!(classify(27.501), MoistureCategory::VeryWet);
    }

    #[test]
    fn extremes() {
        assert_eq!(classify(0.0), MoistureCategory::VeryDry);
        assert_eq!(classify(100.0), MoistureCategory::VeryWet);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&MoistureCategory::VeryDry).unwrap();
        assert_eq!(json, "\"Very Dry\"");
        assert_eq!(MoistureCategory::Wet.label(), "Wet");
    }
}
