//! Category signature knowledge base.
//!
//! Signatures are compiled once from the static tables in [`data`] and
//! shared read-only for the life of the process; classification never
//! mutates them, so a single instance can serve concurrent calls.

mod data;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::KnowledgeError;
use crate::models::category::Category;

use data::{SignatureData, SIGNATURES};

/// Numeric capture tail appended to every amount-label pattern: optional
/// separator/currency noise, then a number with optional thousands
/// separators and decimals in a single capture group.
const AMOUNT_TAIL: &str = r"[\s:₹Rs.\-]*([\d,]+\.?\d*)";

lazy_static! {
    static ref SHARED: KnowledgeBase =
        KnowledgeBase::builtin().expect("built-in signature tables are well-formed");
}

/// Compiled matchers for one category.
pub struct CategorySignature {
    category: Category,
    business_names: &'static [&'static str],
    business: Regex,
    keywords: Regex,
    amount_patterns: Vec<Regex>,
}

impl CategorySignature {
    fn compile(data: &SignatureData) -> Result<Self, KnowledgeError> {
        let business = compile_word_list(data.category, "business name", data.business_names)?;
        let keywords = compile_word_list(data.category, "keyword", data.keywords)?;

        if data.amount_patterns.is_empty() {
            return Err(KnowledgeError::EmptySignature {
                category: data.category,
                list: "amount pattern",
            });
        }

        let mut amount_patterns = Vec::with_capacity(data.amount_patterns.len());
        for label in data.amount_patterns {
            let pattern = format!("(?i){}{}", label, AMOUNT_TAIL);
            let compiled = Regex::new(&pattern).map_err(|source| KnowledgeError::Pattern {
                category: data.category,
                list: "amount pattern",
                source,
            })?;
            amount_patterns.push(compiled);
        }

        Ok(Self {
            category: data.category,
            business_names: data.business_names,
            business,
            keywords,
            amount_patterns,
        })
    }

    /// Category this signature belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Count business-name matches anywhere in the text.
    pub fn business_matches(&self, text: &str) -> usize {
        self.business.find_iter(text).count()
    }

    /// Count keyword matches anywhere in the text.
    pub fn keyword_matches(&self, text: &str) -> usize {
        self.keywords.find_iter(text).count()
    }

    /// Count how many distinct amount patterns match the text.
    pub fn amount_pattern_hits(&self, text: &str) -> usize {
        self.amount_patterns.iter().filter(|p| p.is_match(text)).count()
    }

    /// The ordered amount-pattern list.
    pub fn amount_patterns(&self) -> &[Regex] {
        &self.amount_patterns
    }

    /// Business names from this signature that occur in the given
    /// lower-cased text. Diagnostic output, not a scoring input.
    pub fn matched_business_names(&self, lower_text: &str) -> Vec<String> {
        self.business_names
            .iter()
            .filter(|name| lower_text.contains(*name))
            .map(|name| (*name).to_string())
            .collect()
    }
}

/// Compile a case-insensitive whole-word alternation over a list of
/// entries. Entries are escaped, so `dr.` matches literally rather than
/// as a wildcard.
fn compile_word_list(
    category: Category,
    list: &'static str,
    entries: &[&str],
) -> Result<Regex, KnowledgeError> {
    if entries.is_empty() {
        return Err(KnowledgeError::EmptySignature { category, list });
    }

    let alternation = entries
        .iter()
        .map(|entry| regex::escape(entry))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).map_err(|source| {
        KnowledgeError::Pattern {
            category,
            list,
            source,
        }
    })
}

/// The read-only signature knowledge base.
pub struct KnowledgeBase {
    signatures: Vec<CategorySignature>,
}

impl KnowledgeBase {
    /// Compile the built-in signature tables.
    ///
    /// Fails fast on an empty list or malformed pattern: that is a
    /// configuration fault and must surface at startup, not during a
    /// classification call.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        let mut signatures = Vec::with_capacity(SIGNATURES.len());
        for data in SIGNATURES {
            signatures.push(CategorySignature::compile(data)?);
        }
        Ok(Self { signatures })
    }

    /// Process-wide shared instance, compiled on first use.
    pub fn shared() -> &'static KnowledgeBase {
        &SHARED
    }

    /// All signatures, in category tie-break priority order.
    pub fn signatures(&self) -> &[CategorySignature] {
        &self.signatures
    }

    /// Signature for a single category.
    pub fn signature(&self, category: Category) -> Option<&CategorySignature> {
        self.signatures.iter().find(|s| s.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_compiles() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.signatures().len(), Category::ALL.len());
    }

    #[test]
    fn test_every_category_has_a_signature() {
        let kb = KnowledgeBase::shared();
        for category in Category::ALL {
            assert!(kb.signature(category).is_some(), "missing {}", category);
        }
    }

    #[test]
    fn test_signatures_follow_priority_order() {
        let kb = KnowledgeBase::shared();
        let order: Vec<Category> = kb.signatures().iter().map(|s| s.category()).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn test_business_matching_is_whole_word() {
        let kb = KnowledgeBase::shared();
        let food = kb.signature(Category::Food).unwrap();
        assert_eq!(food.business_matches("order from swiggy today"), 1);
        assert_eq!(food.business_matches("SWIGGY"), 1);
        // No partial-word hits.
        assert_eq!(food.business_matches("swiggying along"), 0);
    }

    #[test]
    fn test_keyword_matching_counts_occurrences() {
        let kb = KnowledgeBase::shared();
        let food = kb.signature(Category::Food).unwrap();
        assert_eq!(food.keyword_matches("paneer and more paneer"), 2);
    }

    #[test]
    fn test_amount_pattern_captures_number() {
        let kb = KnowledgeBase::shared();
        let food = kb.signature(Category::Food).unwrap();
        let hit = food
            .amount_patterns()
            .iter()
            .find_map(|p| p.captures("grand total: Rs. 1,234.50"));
        let caps = hit.expect("a food pattern should match a grand total line");
        assert_eq!(&caps[1], "1,234.50");
    }

    #[test]
    fn test_matched_business_names_are_diagnostic_substrings() {
        let kb = KnowledgeBase::shared();
        let travel = kb.signature(Category::Travel).unwrap();
        let found = travel.matched_business_names("uber trip to the airport");
        assert!(found.contains(&"uber".to_string()));
    }
}
