//! Receipt processing pipeline.

use tracing::{debug, info};

use crate::knowledge::KnowledgeBase;
use crate::models::analysis::ReceiptAnalysis;
use crate::models::config::EngineConfig;

use super::amount::AmountExtractor;
use super::classifier::CategoryClassifier;
use super::normalize::normalize;

/// Trait for receipt analysis.
pub trait ReceiptAnalyzer {
    /// Analyze a raw OCR transcript.
    fn process(&self, text: &str) -> ReceiptAnalysis;
}

/// Composes normalization, classification, and amount extraction into a
/// single synchronous pipeline.
///
/// The processor holds no per-call state and performs no I/O; given
/// identical input it produces identical output, so one instance can be
/// shared across threads freely.
pub struct ReceiptProcessor {
    classifier: CategoryClassifier,
    extractor: AmountExtractor,
    knowledge: &'static KnowledgeBase,
}

impl ReceiptProcessor {
    /// Create a processor with default settings.
    pub fn new() -> Self {
        Self {
            classifier: CategoryClassifier::new(),
            extractor: AmountExtractor::new(),
            knowledge: KnowledgeBase::shared(),
        }
    }

    /// Create a processor with the given configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            classifier: CategoryClassifier::with_config(&config.classifier),
            extractor: AmountExtractor::with_config(&config.amounts),
            knowledge: KnowledgeBase::shared(),
        }
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptAnalyzer for ReceiptProcessor {
    fn process(&self, text: &str) -> ReceiptAnalysis {
        if text.trim().is_empty() {
            debug!("Empty transcript, returning null analysis");
            return ReceiptAnalysis::empty();
        }

        info!("Processing receipt transcript of {} characters", text.len());

        let normalized = normalize(text);
        let classification = self.classifier.classify(&normalized);
        let extracted = self.extractor.extract(&normalized);

        // Which signature tokens drove the pick, for the review UI.
        let detected_patterns = match classification.category {
            Some(category) => self
                .knowledge
                .signature(category)
                .map(|s| s.matched_business_names(&normalized.to_lowercase()))
                .unwrap_or_default(),
            None => Vec::new(),
        };

        debug!(
            "Result: category {:?} ({:.2}), amount {:?} ({:.2})",
            classification.category,
            classification.confidence,
            extracted.map(|e| e.amount),
            extracted.map(|e| e.confidence).unwrap_or(0.0)
        );

        ReceiptAnalysis {
            category: classification.category,
            category_confidence: classification.confidence,
            amount: extracted.map(|e| e.amount),
            amount_confidence: extracted.map(|e| e.confidence).unwrap_or(0.0),
            raw_scores: classification.scores,
            detected_patterns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    const SWIGGY_RECEIPT: &str = "Swiggy\n\
        Order #8271\n\
        paneer tikka Rs. 240.00\n\
        butter naan x3 Rs. 90.00\n\
        dal makhani Rs. 210.00\n\
        Grand Total: Rs. 540.00";

    #[test]
    fn test_full_pipeline_on_food_receipt() {
        let processor = ReceiptProcessor::new();
        let analysis = processor.process(SWIGGY_RECEIPT);

        assert_eq!(analysis.category, Some(Category::Food));
        assert!(analysis.category_confidence >= 0.55);
        assert_eq!(analysis.amount, Some(540.00));
        assert!(analysis.amount_confidence >= 0.5);
        assert!(analysis
            .detected_patterns
            .contains(&"swiggy".to_string()));
    }

    #[test]
    fn test_empty_input_yields_null_analysis() {
        let processor = ReceiptProcessor::new();
        for input in ["", "   ", "\n\n"] {
            let analysis = processor.process(input);
            assert_eq!(analysis.category, None);
            assert_eq!(analysis.amount, None);
            assert_eq!(analysis.amount_confidence, 0.0);
            assert_eq!(analysis.raw_scores.len(), Category::ALL.len());
            assert!(analysis.detected_patterns.is_empty());
        }
    }

    #[test]
    fn test_no_patterns_without_confident_category() {
        let processor = ReceiptProcessor::new();
        let analysis = processor.process("completely unrelated prose without signals");
        assert_eq!(analysis.category, None);
        assert!(analysis.detected_patterns.is_empty());
    }

    #[test]
    fn test_ocr_noise_still_resolves() {
        // Pipe noise, bracket noise, split digits, and a rupee sign.
        let noisy = "Swiggy [Order]\npaneer butter masala\nroti basket\nGrand Tota| ₹ 54 0 . 00";
        let processor = ReceiptProcessor::new();
        let analysis = processor.process(noisy);

        assert_eq!(analysis.amount, Some(540.00));
    }

    #[test]
    fn test_deterministic_across_calls() {
        let processor = ReceiptProcessor::new();
        let first = processor.process(SWIGGY_RECEIPT);
        let second = processor.process(SWIGGY_RECEIPT);
        assert_eq!(first.amount, second.amount);
        assert_eq!(first.category, second.category);
        assert_eq!(first.raw_scores, second.raw_scores);
    }
}
