// src/analysis/normalize.rs
//
// Turns an optional, possibly partial analysis document into fully populated
// view structures. Every label of the configured vocabulary and every default
// category is always present in the output.

use serde::{Serialize, Deserialize};

use super::document::AnalysisDocument;
use super::palette::{category_color, Rgb};
use super::sentiment::{LabelSet, SentimentLabel};

pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "Feature Requests",
    "Bugs",
    "UX/UI",
    "Performance",
    "Others",
];

pub const NAVIGATION_CATEGORY: &str = "Navigation Issues";

/// Placeholder for a missing category or solution in the feedback table.
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of raw reviews folded into a cluster summary.
pub const CLUSTER_SAMPLE_SIZE: usize = 3;

/// How the values in the `categories` map are read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryValues {
    /// Already shares in 0..=100.
    Percentage,
    /// Raw review counts, converted to shares of their sum.
    Counts,
}

/// Which payload shape feeds the feedback table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum FeedbackSource {
    /// Every section the document has: clusters, then sample rows.
    Auto,
    Clusters,
    Rows,
}

impl CategoryValues {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryValues::Percentage => "percentage",
            CategoryValues::Counts => "counts",
        }
    }
}

impl From<CategoryValues> for String {
    fn from(values: CategoryValues) -> Self {
        values.as_str().to_string()
    }
}

impl TryFrom<String> for CategoryValues {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(CategoryValues::Percentage),
            "counts" => Ok(CategoryValues::Counts),
            _ => Err(format!("unknown category values '{name}', expected 'percentage' or 'counts'")),
        }
    }
}

impl FeedbackSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackSource::Auto => "auto",
            FeedbackSource::Clusters => "clusters",
            FeedbackSource::Rows => "rows",
        }
    }
}

impl From<FeedbackSource> for String {
    fn from(source: FeedbackSource) -> Self {
        source.as_str().to_string()
    }
}

impl TryFrom<String> for FeedbackSource {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(FeedbackSource::Auto),
            "clusters" => Ok(FeedbackSource::Clusters),
            "rows" => Ok(FeedbackSource::Rows),
            _ => Err(format!("unknown feedback source '{name}', expected 'auto', 'clusters' or 'rows'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    pub label_set: LabelSet,
    pub category_values: CategoryValues,
    pub include_navigation_issues: bool,
    /// Keep only the most recent N trend buckets; `None` keeps all of them.
    pub trend_bucket_limit: Option<usize>,
    pub feedback_source: FeedbackSource,
    /// Feedback rows with one of these sentiments are left out of the table.
    pub excluded_sentiments: Vec<SentimentLabel>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            label_set: LabelSet::Five,
            category_values: CategoryValues::Percentage,
            include_navigation_issues: false,
            trend_bucket_limit: Some(50),
            feedback_source: FeedbackSource::Auto,
            excluded_sentiments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentCount {
    pub label: SentimentLabel,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDistribution {
    pub entries: Vec<SentimentCount>,
}

impl SentimentDistribution {
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).fold(0, u64::saturating_add)
    }

    pub fn count(&self, label: SentimentLabel) -> u64 {
        self.entries.iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub name: String,
    /// Value as received (percentage or count depending on options).
    pub value: f64,
    /// Share in 0..=100.
    pub percent: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub entries: Vec<CategoryShare>,
    /// True when the document had no usable categories and defaults were used.
    pub defaulted: bool,
}

impl CategoryBreakdown {
    pub fn get(&self, name: &str) -> Option<&CategoryShare> {
        self.entries.iter().find(|c| c.name == name)
    }
}

/// Per-label counts aligned positionally to `dates`, meant to be stacked.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub dates: Vec<String>,
    pub series: Vec<(SentimentLabel, Vec<u64>)>,
}

impl TrendSeries {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        self.series.iter().all(|(_, values)| values.len() == self.dates.len())
    }

    pub fn total(&self) -> u64 {
        self.series.iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(0, u64::saturating_add)
    }

    /// Sum of all labels for the bucket at `index`.
    pub fn bucket_total(&self, index: usize) -> u64 {
        self.series.iter()
            .filter_map(|(_, values)| values.get(index).copied())
            .fold(0, u64::saturating_add)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRow {
    pub category: String,
    pub summary: String,
    pub solution: String,
    pub count: u64,
    pub sentiment: Option<SentimentLabel>,
}

impl FeedbackRow {
    fn matches(&self, needle: &str) -> bool {
        [&self.category, &self.summary, &self.solution]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Which payload section a feedback table was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Clusters,
    Rows,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackTable {
    pub kind: FeedbackKind,
    pub rows: Vec<FeedbackRow>,
}

impl FeedbackTable {
    pub fn title(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Clusters => "Feedback Clusters",
            FeedbackKind::Rows => "Sample Feedback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedView {
    pub sentiment: SentimentDistribution,
    pub categories: CategoryBreakdown,
    pub trend: TrendSeries,
    /// Cluster table first, then sample rows; either may be missing.
    pub feedback: Vec<FeedbackTable>,
    pub total_reviews: u64,
}

impl NormalizedView {
    /// Display color for any category name, including ones not in the breakdown.
    pub fn color_of(&self, category: &str) -> Rgb {
        self.categories.get(category)
            .map(|c| c.color)
            .unwrap_or_else(|| category_color(category))
    }
}

impl Default for NormalizedView {
    fn default() -> Self {
        normalize(None, &NormalizeOptions::default())
    }
}

pub fn normalize(document: Option<&AnalysisDocument>, options: &NormalizeOptions) -> NormalizedView {
    let sentiment = sentiment_distribution(document, options.label_set);
    let total_reviews = sentiment.total();
    let feedback = feedback_tables(document, options);

    NormalizedView {
        categories: category_breakdown(document, options),
        trend: trend_series(document, options),
        sentiment,
        feedback,
        total_reviews,
    }
}

pub fn sentiment_distribution(document: Option<&AnalysisDocument>, label_set: LabelSet) -> SentimentDistribution {
    let counts = document.and_then(|d| d.sentiment.as_ref());
    SentimentDistribution {
        entries: label_set.labels().iter()
            .map(|&label| SentimentCount {
                label,
                count: counts.map(|c| c.count(label)).unwrap_or(0),
            })
            .collect(),
    }
}

pub fn category_breakdown(document: Option<&AnalysisDocument>, options: &NormalizeOptions) -> CategoryBreakdown {
    let Some(categories) = document.and_then(|d| d.categories.as_ref()) else {
        let mut names: Vec<&str> = DEFAULT_CATEGORIES.to_vec();
        if options.include_navigation_issues {
            names.push(NAVIGATION_CATEGORY);
        }
        return CategoryBreakdown {
            entries: names.into_iter()
                .map(|name| CategoryShare {
                    name: name.to_string(),
                    value: 0.0,
                    percent: 0.0,
                    color: category_color(name),
                })
                .collect(),
            defaulted: true,
        };
    };

    let sum: f64 = categories.iter().map(|(_, v)| v).sum();
    let entries = categories.iter()
        .map(|(name, value)| {
            let percent = match options.category_values {
                CategoryValues::Percentage => value.min(100.0),
                CategoryValues::Counts if sum > 0.0 => value / sum * 100.0,
                CategoryValues::Counts => 0.0,
            };
            CategoryShare {
                name: name.to_string(),
                value,
                percent,
                color: category_color(name),
            }
        })
        .collect();

    CategoryBreakdown { entries, defaulted: false }
}

pub fn trend_series(document: Option<&AnalysisDocument>, options: &NormalizeOptions) -> TrendSeries {
    let mut days: Vec<_> = document
        .and_then(|d| d.trends.as_ref())
        .map(|t| t.iter().collect())
        .unwrap_or_default();
    days.sort_by(|(a, _), (b, _)| a.cmp(b));

    let skip = options.trend_bucket_limit
        .map(|limit| days.len().saturating_sub(limit))
        .unwrap_or(0);
    let days = &days[skip..];

    TrendSeries {
        dates: days.iter().map(|(date, _)| date.clone()).collect(),
        series: options.label_set.labels().iter()
            .map(|&label| (label, days.iter().map(|(_, counts)| counts.count(label)).collect()))
            .collect(),
    }
}

/// Feedback tables for the document. `Auto` builds a cluster table and a
/// sample table for whichever of the two sections is present.
pub fn feedback_tables(document: Option<&AnalysisDocument>, options: &NormalizeOptions) -> Vec<FeedbackTable> {
    let Some(document) = document else {
        return Vec::new();
    };

    let (want_clusters, want_rows) = match options.feedback_source {
        FeedbackSource::Auto => (true, true),
        FeedbackSource::Clusters => (true, false),
        FeedbackSource::Rows => (false, true),
    };

    let mut tables = Vec::new();
    if want_clusters {
        if let Some(rows) = cluster_rows(document) {
            tables.push(FeedbackTable { kind: FeedbackKind::Clusters, rows });
        }
    }
    if want_rows {
        if let Some(rows) = sample_rows(document, &options.excluded_sentiments) {
            tables.push(FeedbackTable { kind: FeedbackKind::Rows, rows });
        }
    }
    tables
}

fn cluster_rows(document: &AnalysisDocument) -> Option<Vec<FeedbackRow>> {
    let clusters = document.clusters.as_ref()?;
    let rows = clusters.iter()
        .map(|(category, reviews)| FeedbackRow {
            category: or_not_available(category),
            summary: reviews.iter()
                .take(CLUSTER_SAMPLE_SIZE)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n"),
            solution: document.solutions.as_ref()
                .and_then(|s| s.get(category))
                .map(|s| or_not_available(s))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            count: reviews.len() as u64,
            sentiment: None,
        })
        .collect();
    Some(rows)
}

fn sample_rows(document: &AnalysisDocument, excluded: &[SentimentLabel]) -> Option<Vec<FeedbackRow>> {
    let entries = document.feedback.as_ref()?;
    let rows = entries.iter()
        .filter(|entry| entry.sentiment.map_or(true, |s| !excluded.contains(&s)))
        .map(|entry| FeedbackRow {
            category: or_not_available(&entry.category),
            summary: entry.content.clone(),
            solution: or_not_available(&entry.solution),
            count: entry.count.unwrap_or(1),
            sentiment: entry.sentiment,
        })
        .collect();
    Some(rows)
}

/// Case-insensitive match of `query` against category, summary and solution.
/// An empty or blank query keeps every row.
pub fn filter_rows<'a>(rows: &'a [FeedbackRow], query: &str) -> Vec<&'a FeedbackRow> {
    let needle = query.trim().to_lowercase();
    rows.iter()
        .filter(|row| needle.is_empty() || row.matches(&needle))
        .collect()
}

fn or_not_available(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() { NOT_AVAILABLE.to_string() } else { value.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> AnalysisDocument {
        AnalysisDocument::from_value(&value)
    }

    #[test]
    fn absent_document_is_fully_defaulted() {
        let view = normalize(None, &NormalizeOptions::default());
        assert_eq!(view.sentiment.entries.len(), 5);
        assert!(view.sentiment.entries.iter().all(|e| e.count == 0));
        assert!(view.categories.defaulted);
        let names: Vec<_> = view.categories.entries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
        assert!(view.trend.is_empty());
        assert!(view.trend.is_aligned());
        assert!(view.feedback.is_empty());
        assert_eq!(view.total_reviews, 0);
    }

    #[test]
    fn navigation_issues_is_an_optional_default() {
        let options = NormalizeOptions { include_navigation_issues: true, ..Default::default() };
        let view = normalize(Some(&AnalysisDocument::default()), &options);
        assert_eq!(view.categories.entries.len(), 6);
        assert!(view.categories.get(NAVIGATION_CATEGORY).is_some());
    }

    #[test]
    fn play_store_scenario() {
        let document = doc(json!({
            "sentiment": {"Happy": 10, "Neutral": 2},
            "categories": {"Bugs": 40, "Others": 60}
        }));
        let view = normalize(Some(&document), &NormalizeOptions::default());

        assert_eq!(view.sentiment.count(SentimentLabel::Happy), 10);
        assert_eq!(view.sentiment.count(SentimentLabel::Neutral), 2);
        assert_eq!(view.sentiment.count(SentimentLabel::Delighted), 0);
        assert_eq!(view.sentiment.count(SentimentLabel::Frustrated), 0);
        assert_eq!(view.sentiment.count(SentimentLabel::Angry), 0);

        assert!(!view.categories.defaulted);
        let cats: Vec<_> = view.categories.entries.iter()
            .map(|c| (c.name.as_str(), c.value))
            .collect();
        assert_eq!(cats, [("Bugs", 40.0), ("Others", 60.0)]);

        assert_eq!(view.total_reviews, 12);
    }

    #[test]
    fn reduced_label_set_only_reports_three_labels() {
        let document = doc(json!({"sentiment": {"Delighted": 4, "Happy": 1}}));
        let options = NormalizeOptions { label_set: LabelSet::Three, ..Default::default() };
        let view = normalize(Some(&document), &options);
        assert_eq!(view.sentiment.entries.len(), 3);
        assert_eq!(view.total_reviews, 1);
        assert_eq!(view.trend.series.len(), 3);
    }

    #[test]
    fn category_counts_become_shares() {
        let document = doc(json!({"categories": {"Bugs": 3, "UX/UI": 1}}));
        let options = NormalizeOptions { category_values: CategoryValues::Counts, ..Default::default() };
        let view = normalize(Some(&document), &options);
        assert_eq!(view.categories.get("Bugs").unwrap().percent, 75.0);
        assert_eq!(view.categories.get("UX/UI").unwrap().percent, 25.0);
        assert_eq!(view.categories.get("Bugs").unwrap().value, 3.0);
    }

    #[test]
    fn percentages_are_capped() {
        let document = doc(json!({"categories": {"Bugs": 140}}));
        let view = normalize(Some(&document), &NormalizeOptions::default());
        assert_eq!(view.categories.get("Bugs").unwrap().percent, 100.0);
    }

    #[test]
    fn trend_is_sorted_limited_and_zero_filled() {
        let document = doc(json!({
            "trends": {
                "2024-03-02": {"Happy": 2},
                "2024-03-01": {"Angry": 1, "Happy": 1},
                "2024-02-28": {"Neutral": 5}
            }
        }));
        let options = NormalizeOptions { trend_bucket_limit: Some(2), ..Default::default() };
        let trend = normalize(Some(&document), &options).trend;

        assert_eq!(trend.dates, ["2024-03-01", "2024-03-02"]);
        let happy = &trend.series.iter().find(|(l, _)| *l == SentimentLabel::Happy).unwrap().1;
        assert_eq!(happy, &vec![1, 2]);
        let neutral = &trend.series.iter().find(|(l, _)| *l == SentimentLabel::Neutral).unwrap().1;
        assert_eq!(neutral, &vec![0, 0]);
        assert_eq!(trend.bucket_total(0), 2);
        assert_eq!(trend.total(), 4);
    }

    #[test]
    fn unlimited_trend_keeps_every_bucket() {
        let document = doc(json!({
            "trends": {"2024-01-01": {"Happy": 1}, "2024-01-02": {}, "2024-01-03": {}}
        }));
        let options = NormalizeOptions { trend_bucket_limit: None, ..Default::default() };
        assert_eq!(normalize(Some(&document), &options).trend.dates.len(), 3);
    }

    #[test]
    fn consistent_dataset_totals_agree() {
        let document = doc(json!({
            "sentiment": {"Happy": 3, "Angry": 1},
            "trends": {"2024-01-01": {"Happy": 2}, "2024-01-02": {"Happy": 1, "Angry": 1}}
        }));
        let view = normalize(Some(&document), &NormalizeOptions::default());
        assert_eq!(view.total_reviews, view.trend.total());
    }

    #[test]
    fn clusters_flatten_into_summaries() {
        let document = doc(json!({
            "clusters": {
                "Bugs": ["crash on start", "freezes", "login broken", "slow sync"],
                "Wishlist": ["dark mode"]
            },
            "solutions": {"Bugs": "Investigate and fix the reported issue."}
        }));
        let view = normalize(Some(&document), &NormalizeOptions::default());

        assert_eq!(view.feedback.len(), 1);
        let table = &view.feedback[0];
        assert_eq!(table.kind, FeedbackKind::Clusters);
        assert_eq!(table.title(), "Feedback Clusters");
        assert_eq!(table.rows.len(), 2);
        let bugs = &table.rows[0];
        assert_eq!(bugs.summary, "crash on start\nfreezes\nlogin broken");
        assert_eq!(bugs.count, 4);
        assert_eq!(bugs.solution, "Investigate and fix the reported issue.");
        assert_eq!(table.rows[1].solution, NOT_AVAILABLE);
    }

    #[test]
    fn clusters_and_samples_are_both_shown() {
        let document = doc(json!({
            "clusters": {"Bugs": ["crash on start"]},
            "feedback": [
                {"content": "love it", "category": "Others", "solution": "N/A", "sentiment": "Happy"},
                {"content": "too slow", "category": "Performance", "solution": "Profile", "sentiment": "Angry"}
            ]
        }));
        let options = NormalizeOptions {
            excluded_sentiments: vec![SentimentLabel::Delighted, SentimentLabel::Happy],
            ..Default::default()
        };
        let tables = feedback_tables(Some(&document), &options);

        let kinds: Vec<_> = tables.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [FeedbackKind::Clusters, FeedbackKind::Rows]);
        assert_eq!(tables[0].rows[0].category, "Bugs");
        assert_eq!(tables[1].title(), "Sample Feedback");
        assert_eq!(tables[1].rows.len(), 1);
        assert_eq!(tables[1].rows[0].summary, "too slow");
    }

    #[test]
    fn feedback_rows_skip_excluded_sentiments() {
        let document = doc(json!({
            "feedback": [
                {"content": "love it", "category": "Others", "solution": "N/A", "sentiment": "Delighted"},
                {"content": "crashes", "category": "Bugs", "solution": "Fix", "sentiment": "Angry", "count": 3},
                {"content": "meh", "category": "", "solution": ""}
            ]
        }));
        let options = NormalizeOptions {
            excluded_sentiments: vec![SentimentLabel::Delighted, SentimentLabel::Happy],
            ..Default::default()
        };
        let tables = feedback_tables(Some(&document), &options);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].kind, FeedbackKind::Rows);
        let rows = &tables[0].rows;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].summary, "crashes");
        assert_eq!(rows[0].count, 3);
        assert_eq!(rows[1].category, NOT_AVAILABLE);
        assert_eq!(rows[1].count, 1);

        let all = feedback_tables(Some(&document), &NormalizeOptions::default());
        assert_eq!(all[0].rows.len(), 3);
    }

    #[test]
    fn forced_source_picks_one_table() {
        let document = doc(json!({
            "clusters": {"Bugs": ["crash"]},
            "feedback": [{"content": "x"}]
        }));

        let options = NormalizeOptions { feedback_source: FeedbackSource::Clusters, ..Default::default() };
        let tables = feedback_tables(Some(&document), &options);
        assert_eq!(tables.iter().map(|t| t.kind).collect::<Vec<_>>(), [FeedbackKind::Clusters]);

        let options = NormalizeOptions { feedback_source: FeedbackSource::Rows, ..Default::default() };
        let tables = feedback_tables(Some(&document), &options);
        assert_eq!(tables.iter().map(|t| t.kind).collect::<Vec<_>>(), [FeedbackKind::Rows]);

        assert!(feedback_tables(Some(&AnalysisDocument::default()), &options).is_empty());
    }

    #[test]
    fn huge_counts_saturate_instead_of_overflowing() {
        let document = doc(json!({
            "sentiment": {"Happy": 1e19, "Neutral": 1e19},
            "trends": {"2024-01-01": {"Happy": 1e19, "Angry": 1e19}}
        }));
        let view = normalize(Some(&document), &NormalizeOptions::default());

        assert_eq!(view.total_reviews, u64::MAX);
        assert_eq!(view.trend.total(), u64::MAX);
        assert_eq!(view.trend.bucket_total(0), u64::MAX);
    }

    #[test]
    fn empty_category_map_is_kept_empty() {
        let document = doc(json!({"categories": {}}));
        let view = normalize(Some(&document), &NormalizeOptions::default());
        assert!(!view.categories.defaulted);
        assert!(view.categories.entries.is_empty());
    }

    #[test]
    fn filter_matches_any_text_column() {
        let rows = vec![
            FeedbackRow {
                category: "Bugs".into(),
                summary: "App crashes".into(),
                solution: "Fix".into(),
                count: 1,
                sentiment: None,
            },
            FeedbackRow {
                category: "UX/UI".into(),
                summary: "Ugly".into(),
                solution: "Redesign the interface".into(),
                count: 1,
                sentiment: None,
            },
        ];
        assert_eq!(filter_rows(&rows, "  ").len(), 2);
        assert_eq!(filter_rows(&rows, "CRASH").len(), 1);
        assert_eq!(filter_rows(&rows, "redesign")[0].category, "UX/UI");
        assert!(filter_rows(&rows, "performance").is_empty());
    }

    #[test]
    fn unknown_category_color_falls_back() {
        let document = doc(json!({"categories": {"Billing": 100}}));
        let view = normalize(Some(&document), &NormalizeOptions::default());
        assert_eq!(view.color_of("Billing"), super::super::palette::FALLBACK_COLOR);
        assert_eq!(view.color_of("Bugs"), category_color("Bugs"));
    }

    fn arb_trends() -> impl Strategy<Value = serde_json::Value> {
        proptest::collection::btree_map(
            "20[0-9]{2}-[01][0-9]-[0-3][0-9]",
            proptest::collection::btree_map(
                prop_oneof![
                    Just("Delighted"), Just("Happy"), Just("Neutral"),
                    Just("Frustrated"), Just("Angry"), Just("Bogus")
                ],
                0u32..500,
                0..6,
            ),
            0..40,
        )
        .prop_map(|days| json!({ "trends": days }))
    }

    proptest! {
        #[test]
        fn trend_dates_ascend_and_series_align(
            body in arb_trends(),
            limit in proptest::option::of(0usize..60),
        ) {
            let document = AnalysisDocument::from_value(&body);
            let options = NormalizeOptions { trend_bucket_limit: limit, ..Default::default() };
            let trend = trend_series(Some(&document), &options);

            prop_assert!(trend.dates.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(trend.is_aligned());
            prop_assert_eq!(trend.series.len(), options.label_set.labels().len());
            if let Some(limit) = limit {
                prop_assert!(trend.dates.len() <= limit);
            }
        }

        #[test]
        fn missing_sentiment_is_all_zero(name in "[a-z]{0,12}") {
            let document = AnalysisDocument::from_value(&json!({ "app_name": name }));
            let view = normalize(Some(&document), &NormalizeOptions::default());
            prop_assert!(view.sentiment.entries.iter().all(|e| e.count == 0));
            prop_assert_eq!(view.total_reviews, 0);
        }

        #[test]
        fn every_breakdown_entry_is_colored(
            categories in proptest::collection::btree_map("[A-Za-z/ ]{1,16}", 0u32..100, 0..8),
        ) {
            let document = AnalysisDocument::from_value(&json!({ "categories": categories }));
            let view = normalize(Some(&document), &NormalizeOptions::default());
            for share in &view.categories.entries {
                prop_assert_eq!(share.color, category_color(&share.name));
            }
        }
    }
}
