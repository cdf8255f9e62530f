//! Error types for the rasid-core library.

use thiserror::Error;

use crate::models::category::Category;

/// Main error type for the rasid library.
#[derive(Error, Debug)]
pub enum RasidError {
    /// Knowledge base construction error.
    #[error("knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building the category knowledge base.
///
/// These are startup-time configuration faults: the signature tables are
/// fixed data, so a failure here means the build is misconfigured, not that
/// a receipt was malformed.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// A category has no entries for one of its signature lists, which
    /// would compile into a degenerate matcher.
    #[error("category {category} has an empty {list} list")]
    EmptySignature {
        category: Category,
        list: &'static str,
    },

    /// A signature pattern failed to compile.
    #[error("invalid {list} pattern for category {category}: {source}")]
    Pattern {
        category: Category,
        list: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for the rasid library.
pub type Result<T> = std::result::Result<T, RasidError>;
