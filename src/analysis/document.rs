// src/analysis/document.rs
//
// The analysis service's response body. Its shape is not trusted: every field
// may be missing, and a field of the wrong JSON type is read as missing.
// Deserialization therefore goes through `serde_json::Value` and never fails
// on shape, only on malformed JSON.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::sentiment::SentimentLabel;

/// Ordered `name -> number` mapping, kept in the order the service sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountMap {
    entries: Vec<(String, f64)>,
}

impl CountMap {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Count for a sentiment label, 0 when absent.
    pub fn count(&self, label: SentimentLabel) -> u64 {
        self.get(label.as_str()).map(|v| v.round() as u64).unwrap_or(0)
    }

    fn from_object(object: &Map<String, Value>) -> Self {
        let entries = object.iter()
            .filter_map(|(key, value)| lenient_number(value).map(|n| (key.clone(), n)))
            .collect();
        Self { entries }
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CountMap {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter()
                .map(|(name, value)| (name.into(), sanitize(value)))
                .collect(),
        }
    }
}

/// A single row of the service's pre-categorized sample feedback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackEntry {
    pub content: String,
    pub category: String,
    pub solution: String,
    pub sentiment: Option<SentimentLabel>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisDocument {
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub category: Option<String>,
    pub sentiment: Option<CountMap>,
    pub categories: Option<CountMap>,
    /// Date key -> per-label counts, in the order received.
    pub trends: Option<Vec<(String, CountMap)>>,
    pub feedback: Option<Vec<FeedbackEntry>>,
    /// Category -> raw review texts, in the order received.
    pub clusters: Option<Vec<(String, Vec<String>)>>,
    pub solutions: Option<HashMap<String, String>>,
}

impl AnalysisDocument {
    /// Reads whatever is usable out of an arbitrary JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        Self {
            app_name: string_field(root, "app_name"),
            icon: string_field(root, "icon"),
            category: string_field(root, "category"),
            sentiment: root.get("sentiment")
                .and_then(Value::as_object)
                .map(CountMap::from_object),
            categories: root.get("categories")
                .and_then(Value::as_object)
                .and_then(|object| {
                    // Entries with no usable number, e.g. {"Error": "..."}, mean no data
                    let map = CountMap::from_object(object);
                    (object.is_empty() || !map.is_empty()).then_some(map)
                }),
            trends: root.get("trends")
                .and_then(Value::as_object)
                .map(|days| {
                    days.iter()
                        .filter_map(|(date, counts)| {
                            counts.as_object().map(|c| (date.clone(), CountMap::from_object(c)))
                        })
                        .collect()
                }),
            feedback: root.get("feedback")
                .and_then(Value::as_array)
                .map(|rows| rows.iter().filter_map(feedback_entry).collect()),
            clusters: root.get("clusters")
                .and_then(Value::as_object)
                .map(|clusters| {
                    clusters.iter()
                        .filter_map(|(category, reviews)| {
                            let reviews = reviews.as_array()?
                                .iter()
                                .filter_map(|r| r.as_str().map(str::to_string))
                                .collect();
                            Some((category.clone(), reviews))
                        })
                        .collect()
                }),
            solutions: root.get("solutions")
                .and_then(Value::as_object)
                .map(|solutions| {
                    solutions.iter()
                        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                        .collect()
                }),
        }
    }

    /// Parses a response body. Only malformed JSON is an error.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Analysis Results")
    }
}

impl<'de> Deserialize<'de> for AnalysisDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn feedback_entry(value: &Value) -> Option<FeedbackEntry> {
    let row = value.as_object()?;
    let text = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or_default().to_string();

    Some(FeedbackEntry {
        content: text("content"),
        category: text("category"),
        solution: text("solution"),
        sentiment: row.get("sentiment")
            .and_then(Value::as_str)
            .and_then(SentimentLabel::parse),
        count: row.get("count")
            .and_then(lenient_number)
            .map(|n| n.round() as u64),
    })
}

/// Numbers and numeric strings; negative or non-finite values become 0.
fn lenient_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    Some(sanitize(n))
}

fn sanitize(n: f64) -> f64 {
    if n.is_finite() && n > 0.0 { n } else { 0.0 }
}
