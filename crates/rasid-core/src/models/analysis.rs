//! Analysis result models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Outcome of category classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Winning category, if its confidence cleared the floor.
    pub category: Option<Category>,

    /// Confidence of the winning category (raw score / 100).
    pub confidence: f64,

    /// Raw score for every category, reported even when no category
    /// cleared the floor.
    pub scores: BTreeMap<Category, f64>,
}

impl Classification {
    /// Classification of text with no recognizable signals.
    pub fn empty() -> Self {
        Self {
            category: None,
            confidence: 0.0,
            scores: Category::ALL.iter().map(|c| (*c, 0.0)).collect(),
        }
    }
}

/// A paid amount pulled out of the receipt text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAmount {
    /// The amount, in the receipt's currency.
    pub amount: f64,

    /// Confidence in the extraction, capped at 0.95 - an extraction is
    /// never reported as fully certain.
    pub confidence: f64,
}

/// Combined result of analyzing one receipt transcript.
///
/// This is the record handed to the expense-recording collaborator; field
/// names follow its wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptAnalysis {
    /// Winning category, or `None` when classification was not confident.
    pub category: Option<Category>,

    /// Classification confidence in `[0, 1]`.
    pub category_confidence: f64,

    /// Extracted total, or `None` when no plausible amount survived.
    pub amount: Option<f64>,

    /// Extraction confidence in `[0, 0.95]`; 0 when `amount` is `None`.
    pub amount_confidence: f64,

    /// Raw classification score per category, for diagnostics.
    pub raw_scores: BTreeMap<Category, f64>,

    /// Business-name tokens from the winning category's signature that
    /// were found in the text. Empty when no category was selected.
    pub detected_patterns: Vec<String>,
}

impl ReceiptAnalysis {
    /// Analysis of an empty or unrecognizable transcript.
    pub fn empty() -> Self {
        let classification = Classification::empty();
        Self {
            category: None,
            category_confidence: 0.0,
            amount: None,
            amount_confidence: 0.0,
            raw_scores: classification.scores,
            detected_patterns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_analysis_reports_all_categories() {
        let analysis = ReceiptAnalysis::empty();
        assert_eq!(analysis.raw_scores.len(), Category::ALL.len());
        assert!(analysis.raw_scores.values().all(|s| *s == 0.0));
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let analysis = ReceiptAnalysis::empty();
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("categoryConfidence").is_some());
        assert!(json.get("amountConfidence").is_some());
        assert!(json.get("rawScores").is_some());
        assert!(json.get("detectedPatterns").is_some());
    }
}
