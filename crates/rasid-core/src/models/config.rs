//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the rasid pipeline.
///
/// Signal weights are fixed in the scoring code; the config exposes the
/// thresholds and bounds that deployments have actually wanted to tune.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Category classifier configuration.
    pub classifier: ClassifierConfig,

    /// Amount extraction configuration.
    pub amounts: AmountConfig,
}

/// Category classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum confidence before a category is reported instead of null.
    pub confidence_floor: f64,

    /// Number of leading characters treated as the receipt header for the
    /// vendor-position bonus.
    pub header_window: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            confidence_floor: 0.55,
            header_window: 300,
        }
    }
}

/// Amount extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountConfig {
    /// Upper sanity bound for a single receipt amount.
    pub max_amount: f64,

    /// Fraction of the line count past which a line counts as the receipt
    /// footer, where totals cluster.
    pub footer_threshold: f64,

    /// Hard cap on extraction confidence.
    pub confidence_cap: f64,
}

impl Default for AmountConfig {
    fn default() -> Self {
        Self {
            max_amount: 10_000_000.0,
            footer_threshold: 0.6,
            confidence_cap: 0.95,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.classifier.confidence_floor, 0.55);
        assert_eq!(config.classifier.header_window, 300);
        assert_eq!(config.amounts.max_amount, 10_000_000.0);
        assert_eq!(config.amounts.confidence_cap, 0.95);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"classifier": {"confidence_floor": 0.7}}"#).unwrap();
        assert_eq!(config.classifier.confidence_floor, 0.7);
        assert_eq!(config.classifier.header_window, 300);
        assert_eq!(config.amounts.footer_threshold, 0.6);
    }
}
