// src/analysis/mod.rs
pub mod document;
pub mod normalize;
pub mod palette;
pub mod period;
pub mod sentiment;

// Re-export commonly used types
pub use document::{AnalysisDocument, CountMap, FeedbackEntry};
pub use normalize::{
    normalize,
    filter_rows,
    CategoryValues,
    FeedbackKind,
    FeedbackRow,
    FeedbackSource,
    FeedbackTable,
    NormalizeOptions,
    NormalizedView,
    TrendSeries,
};
pub use period::Period;
pub use sentiment::{LabelSet, SentimentLabel};

use serde::Serialize;

/// One call to the analysis service. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub url: String,
    pub period: Period,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>, period: Period) -> Self {
        Self { url: url.into(), period }
    }
}
