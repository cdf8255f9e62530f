//! Category classification over normalized receipt text.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::knowledge::KnowledgeBase;
use crate::models::analysis::Classification;
use crate::models::category::Category;
use crate::models::config::ClassifierConfig;

/// Score per business-name match.
const BUSINESS_WEIGHT: f64 = 40.0;
/// Score per keyword match, capped at [`KEYWORD_CAP`] matches.
const KEYWORD_WEIGHT: f64 = 30.0;
/// Score per distinct amount pattern that matches.
const PATTERN_WEIGHT: f64 = 20.0;
/// Score per business-name match inside the receipt header.
const POSITION_WEIGHT: f64 = 10.0;
const KEYWORD_CAP: usize = 20;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Scores every category against the text and picks the best one above
/// the confidence floor.
pub struct CategoryClassifier {
    knowledge: &'static KnowledgeBase,
    confidence_floor: f64,
    header_window: usize,
}

impl CategoryClassifier {
    /// Create a classifier over the shared knowledge base.
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::shared(),
            confidence_floor: ClassifierConfig::default().confidence_floor,
            header_window: ClassifierConfig::default().header_window,
        }
    }

    /// Create a classifier with the given configuration.
    pub fn with_config(config: &ClassifierConfig) -> Self {
        Self {
            knowledge: KnowledgeBase::shared(),
            confidence_floor: config.confidence_floor,
            header_window: config.header_window,
        }
    }

    /// Set the minimum confidence for reporting a category.
    pub fn with_confidence_floor(mut self, floor: f64) -> Self {
        self.confidence_floor = floor;
        self
    }

    /// Classify normalized receipt text.
    ///
    /// Four signals per category: business-name matches (40 each),
    /// keyword matches (30 each, at most 20 counted), distinct amount
    /// patterns matched (20 each), and business-name matches inside the
    /// header window (10 each). The raw score is the active-signal sum
    /// divided by the number of active signals, so a category is not
    /// penalized for signals that never fired while multi-signal
    /// agreement still wins out. On a tie the category declared earlier
    /// in [`Category::ALL`] is kept.
    pub fn classify(&self, text: &str) -> Classification {
        let clean = WHITESPACE.replace_all(text, " ").trim().to_lowercase();
        let header: String = clean.chars().take(self.header_window).collect();

        let mut scores: BTreeMap<Category, f64> = BTreeMap::new();
        let mut best_category = None;
        let mut best_score = 0.0_f64;

        for signature in self.knowledge.signatures() {
            let mut score = 0.0;
            let mut factors = 0u32;

            let business = signature.business_matches(&clean);
            if business > 0 {
                score += business as f64 * BUSINESS_WEIGHT;
                factors += 1;
            }

            let keywords = signature.keyword_matches(&clean).min(KEYWORD_CAP);
            if keywords > 0 {
                score += keywords as f64 * KEYWORD_WEIGHT;
                factors += 1;
            }

            let patterns = signature.amount_pattern_hits(&clean);
            if patterns > 0 {
                score += patterns as f64 * PATTERN_WEIGHT;
                factors += 1;
            }

            // Receipts put the vendor name near the top.
            let near_top = signature.business_matches(&header);
            if near_top > 0 {
                score += near_top as f64 * POSITION_WEIGHT;
                factors += 1;
            }

            let raw = if factors > 0 { score / factors as f64 } else { 0.0 };
            scores.insert(signature.category(), raw);

            if raw > best_score {
                best_score = raw;
                best_category = Some(signature.category());
            }
        }

        let confidence = best_score / 100.0;
        let category = best_category.filter(|_| confidence >= self.confidence_floor);

        debug!(
            "Classified as {:?} with confidence {:.2}",
            best_category, confidence
        );

        Classification {
            category,
            confidence,
            scores,
        }
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOOD_RECEIPT: &str = "swiggy order\n\
        paneer butter masala Rs. 250.00\n\
        roti x4 Rs. 60.00\n\
        dal tadka Rs. 180.00\n\
        grand total Rs. 490.00";

    #[test]
    fn test_dense_food_receipt_classifies_as_food() {
        let classifier = CategoryClassifier::new();
        let result = classifier.classify(FOOD_RECEIPT);

        assert_eq!(result.category, Some(Category::Food));
        assert!(result.confidence >= 0.55, "confidence {}", result.confidence);
    }

    #[test]
    fn test_unrelated_prose_scores_zero_everywhere() {
        let classifier = CategoryClassifier::new();
        let result =
            classifier.classify("sunlight wanders across quiet meadows while sparrows gather");

        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.scores.len(), Category::ALL.len());
        assert!(result.scores.values().all(|s| *s == 0.0));
    }

    #[test]
    fn test_scores_are_never_negative_and_confidence_tracks_best() {
        let classifier = CategoryClassifier::new();
        let result = classifier.classify(FOOD_RECEIPT);

        assert!(result.scores.values().all(|s| *s >= 0.0));
        let best = result.scores.values().cloned().fold(0.0, f64::max);
        assert!((result.confidence - best / 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_floor_reports_null_category_but_full_scores() {
        let classifier = CategoryClassifier::new().with_confidence_floor(0.99);
        let result = classifier.classify(FOOD_RECEIPT);

        assert_eq!(result.category, None);
        assert!(result.confidence > 0.0);
        assert_eq!(result.scores.len(), Category::ALL.len());
    }

    #[test]
    fn test_empty_text_is_null() {
        let classifier = CategoryClassifier::new();
        let result = classifier.classify("");
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0.0);
    }
}
