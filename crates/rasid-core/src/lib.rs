//! Core library for receipt analysis.
//!
//! This crate provides:
//! - OCR artifact cleanup for receipt transcripts
//! - Category classification against a static signature knowledge base
//! - Paid-amount extraction with per-line candidate scoring
//! - Result models consumed by the expense-recording side of the system
//!
//! The library never touches image data: it consumes the plain-text
//! transcript produced by an upstream OCR step and returns a
//! confidence-scored [`ReceiptAnalysis`].

pub mod error;
pub mod knowledge;
pub mod models;
pub mod receipt;

pub use error::{KnowledgeError, RasidError, Result};
pub use knowledge::{CategorySignature, KnowledgeBase};
pub use models::analysis::{Classification, ExtractedAmount, ReceiptAnalysis};
pub use models::category::Category;
pub use models::config::EngineConfig;
pub use receipt::{normalize, AmountExtractor, CategoryClassifier, ReceiptAnalyzer, ReceiptProcessor};
