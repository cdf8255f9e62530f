//! Receipt analysis pipeline.

mod amount;
mod classifier;
mod normalize;
mod processor;

pub use amount::AmountExtractor;
pub use classifier::CategoryClassifier;
pub use normalize::normalize;
pub use processor::{ReceiptAnalyzer, ReceiptProcessor};
