//! Spending categories assigned to receipts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category for an expense record.
///
/// The set is closed: adding a variant requires a matching signature table
/// in the knowledge base. Declaration order doubles as the classifier's
/// tie-break priority - when two categories score identically, the variant
/// declared first wins. The ordering carries no semantic weight; it exists
/// so that ties resolve the same way on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Shopping,
    Medical,
    Travel,
    Entertainment,
    Fuel,
    Utilities,
    Education,
    Investments,
    Insurance,
    Subscriptions,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Rent,
}

impl Category {
    /// All categories in tie-break priority order.
    pub const ALL: [Category; 13] = [
        Category::Food,
        Category::Shopping,
        Category::Medical,
        Category::Travel,
        Category::Entertainment,
        Category::Fuel,
        Category::Utilities,
        Category::Education,
        Category::Investments,
        Category::Insurance,
        Category::Subscriptions,
        Category::PersonalCare,
        Category::Rent,
    ];

    /// User-visible label, matching what the expense UI shows.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Medical => "Medical",
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Fuel => "Fuel",
            Category::Utilities => "Utilities",
            Category::Education => "Education",
            Category::Investments => "Investments",
            Category::Insurance => "Insurance",
            Category::Subscriptions => "Subscriptions",
            Category::PersonalCare => "Personal Care",
            Category::Rent => "Rent",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("personal care".parse::<Category>(), Ok(Category::PersonalCare));
        assert_eq!("FOOD".parse::<Category>(), Ok(Category::Food));
        assert!("groceries".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Category::PersonalCare).unwrap();
        assert_eq!(json, "\"Personal Care\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::PersonalCare);
    }
}
