//! Paid-amount extraction from normalized receipt text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::models::analysis::ExtractedAmount;
use crate::models::config::AmountConfig;

/// Line keywords that almost always label the payable total.
const STRONG_KEYWORDS: &[&str] = &[
    "grand total",
    "net amount",
    "net payable",
    "total payable",
    "bill total",
    "to pay",
    "final amount",
    "amount paid",
    "you paid",
    "transaction amount",
];

/// Generic amount vocabulary; weaker evidence than [`STRONG_KEYWORDS`].
const MEDIUM_KEYWORDS: &[&str] = &[
    "total", "sub total", "subtotal", "amount", "fare", "rate", "price", "bill", "premium",
    "fee", "charge",
];

/// Lines carrying identifiers rather than money. Numbers on these lines
/// are skipped unless a strong keyword or currency marker rescues them.
const IGNORE_KEYWORDS: &[&str] = &[
    "pnr",
    "gstin",
    "phone",
    "mobile",
    "date",
    "time",
    "inv no",
    "invoice no",
    "ticket no",
    "order id",
    "txn id",
    "ref no",
    "serial no",
    "item code",
    "qty",
    "train no",
    "flight no",
    "bus no",
    "vehicle no",
    "reg no",
    "cin",
    "uid",
    "pan",
    "aadhaar",
];

const STRONG_BONUS: u32 = 50;
const MEDIUM_BONUS: u32 = 20;
const CURRENCY_BONUS: u32 = 30;
const FOOTER_BONUS: u32 = 15;
const DECIMAL_BONUS: u32 = 25;

/// Divisor turning a candidate score into a confidence.
const CONFIDENCE_DIVISOR: f64 = 80.0;

const MIN_LINE_LEN: usize = 3;

lazy_static! {
    // Digits with optional thousands separators and up to two decimals.
    static ref NUMBER_TOKEN: Regex = Regex::new(r"[\d,]+\.?\d{0,2}").unwrap();
    static ref CURRENCY_HINT: Regex = Regex::new(r"(?i)rs\.?|inr|₹").unwrap();
}

/// A numeric token that survived the plausibility filters.
#[derive(Debug, Clone, Copy)]
struct AmountCandidate {
    value: f64,
    score: u32,
}

/// Scans receipt lines for the most probable paid total.
pub struct AmountExtractor {
    max_amount: f64,
    footer_threshold: f64,
    confidence_cap: f64,
}

impl AmountExtractor {
    /// Create an extractor with default bounds.
    pub fn new() -> Self {
        Self::with_config(&AmountConfig::default())
    }

    /// Create an extractor with the given configuration.
    pub fn with_config(config: &AmountConfig) -> Self {
        Self {
            max_amount: config.max_amount,
            footer_threshold: config.footer_threshold,
            confidence_cap: config.confidence_cap,
        }
    }

    /// Set the upper sanity bound for a single amount.
    pub fn with_max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = max_amount;
        self
    }

    /// Extract the most probable paid amount from normalized text.
    ///
    /// Returns `None` when no plausible candidate survives; that is the
    /// expected outcome for ID-only or amount-free text, not an error.
    pub fn extract(&self, text: &str) -> Option<ExtractedAmount> {
        let lines: Vec<&str> = text.lines().collect();
        let total_lines = lines.len();
        let mut candidates: Vec<AmountCandidate> = Vec::new();

        for (index, raw_line) in lines.iter().enumerate() {
            let line = raw_line.trim().to_lowercase();
            if line.len() < MIN_LINE_LEN {
                continue;
            }

            let ignore = IGNORE_KEYWORDS.iter().any(|k| line.contains(k));
            let strong = STRONG_KEYWORDS.iter().any(|k| line.contains(k));
            let medium = MEDIUM_KEYWORDS.iter().any(|k| line.contains(k));
            let has_currency = CURRENCY_HINT.is_match(&line);

            if ignore && !strong && !has_currency {
                continue;
            }

            for token in NUMBER_TOKEN.find_iter(&line) {
                let raw = token.as_str();
                let mut digits = raw.replace(',', "");
                if let Some(stripped) = digits.strip_suffix('.') {
                    digits = stripped.to_string();
                }

                let value: f64 = match digits.parse() {
                    Ok(v) => v,
                    Err(_) => continue,
                };
                if !value.is_finite() || value <= 0.0 || value > self.max_amount {
                    continue;
                }

                let has_fraction = raw.contains('.');
                let integral = !has_fraction;

                // Long bare integers are invoice numbers, PNRs, and the like.
                if integral && digits.len() >= 5 && !has_currency && !strong {
                    continue;
                }
                // Calendar years.
                if integral && (2018.0..=2030.0).contains(&value) && !has_currency {
                    continue;
                }
                // Item quantities.
                if integral && value < 10.0 && !has_currency && !strong {
                    continue;
                }

                let mut score = 0u32;
                if strong {
                    score += STRONG_BONUS;
                } else if medium {
                    score += MEDIUM_BONUS;
                }
                if has_currency {
                    score += CURRENCY_BONUS;
                }
                // Totals cluster near the bottom of a receipt.
                if index as f64 / total_lines as f64 > self.footer_threshold {
                    score += FOOTER_BONUS;
                }
                if has_fraction {
                    score += DECIMAL_BONUS;
                }

                candidates.push(AmountCandidate { value, score });
            }
        }

        candidates.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.value.total_cmp(&a.value))
        });

        debug!("Collected {} amount candidates", candidates.len());

        candidates.first().map(|best| ExtractedAmount {
            amount: best.value,
            confidence: (best.score as f64 / CONFIDENCE_DIVISOR).min(self.confidence_cap),
        })
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_line_wins() {
        let extractor = AmountExtractor::new();
        let text = "Dominos Pizza\nItem 1 Rs. 250.00\nItem 2 Rs. 984.50\nGrand Total: Rs. 1,234.50";

        let result = extractor.extract(text).unwrap();
        assert_eq!(result.amount, 1234.50);
        assert!(result.confidence >= 0.5);
    }

    #[test]
    fn test_pnr_is_never_an_amount() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract("PNR: 24681357").is_none());

        let text = "PNR: 24681357\nTotal Fare: Rs. 1,250.00";
        let result = extractor.extract(text).unwrap();
        assert_eq!(result.amount, 1250.00);
    }

    #[test]
    fn test_year_is_never_an_amount() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract("Booking Year 2024\nsome more text").is_none());

        let text = "Booking Year 2024\nTotal: Rs. 840.00";
        let result = extractor.extract(text).unwrap();
        assert_eq!(result.amount, 840.00);
    }

    #[test]
    fn test_small_bare_integers_are_quantities() {
        let extractor = AmountExtractor::new();
        // "2" on an item line is a quantity, not a payable amount.
        assert!(extractor.extract("masala dosa x 2\nplain idli x 4").is_none());
    }

    #[test]
    fn test_currency_rescues_small_amounts() {
        let extractor = AmountExtractor::new();
        let result = extractor.extract("chai Rs. 8").unwrap();
        assert_eq!(result.amount, 8.0);
    }

    #[test]
    fn test_ties_prefer_larger_amount() {
        let extractor = AmountExtractor::new();
        // Both lines score identically; the larger value should win.
        let text = "price Rs. 120.00\nprice Rs. 450.00\nfiller\nfiller\nfiller\nfiller\nfiller\nfiller";
        let result = extractor.extract(text).unwrap();
        assert_eq!(result.amount, 450.00);
    }

    #[test]
    fn test_confidence_is_capped() {
        let extractor = AmountExtractor::new();
        let text = "filler\nfiller\nfiller\nGrand Total: Rs. 999.99";
        let result = extractor.extract(text).unwrap();
        // strong + currency + footer + decimal pushes score past the divisor.
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_amount_above_sanity_bound_is_discarded() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract("Grand Total: Rs. 99,000,000.00").is_none());

        let strict = AmountExtractor::new().with_max_amount(500.0);
        assert!(strict.extract("Grand Total: Rs. 999.99").is_none());
    }

    #[test]
    fn test_empty_and_short_lines_are_skipped() {
        let extractor = AmountExtractor::new();
        assert!(extractor.extract("").is_none());
        assert!(extractor.extract("\n\n42\n\n").is_none());
    }
}
