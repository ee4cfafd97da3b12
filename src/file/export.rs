// src/file/export.rs
use anyhow::{Result, Context};
use chrono::prelude::*;
use csv::Writer;
use std::path::Path;

use crate::analysis::FeedbackRow;

#[derive(Debug)]
pub struct FeedbackExporter;

impl FeedbackExporter {
    pub fn new() -> Self {
        Self
    }

    /// Suggested file name, e.g. `feedback_whatsapp_20240301_142233.csv`.
    pub fn default_file_name(app_name: Option<&str>, now: DateTime<Local>) -> String {
        let slug: String = app_name
            .unwrap_or("analysis")
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect();
        let slug = slug.trim_matches('_');
        let slug = if slug.is_empty() { "analysis" } else { slug };
        format!("feedback_{}_{}.csv", slug, now.format("%Y%m%d_%H%M%S"))
    }

    pub fn write(&self, rows: &[FeedbackRow], path: &Path) -> Result<()> {
        let mut writer = Writer::from_path(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;

        writer.write_record(["Category", "Feedback", "Solution", "Count", "Sentiment"])?;
        for row in rows {
            let count = row.count.to_string();
            writer.write_record([
                row.category.as_str(),
                row.summary.as_str(),
                row.solution.as_str(),
                count.as_str(),
                row.sentiment.map(|s| s.as_str()).unwrap_or(""),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SentimentLabel;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.csv");
        let rows = vec![
            FeedbackRow {
                category: "Bugs".into(),
                summary: "crash on start\nfreezes".into(),
                solution: "Investigate and fix the reported issue.".into(),
                count: 2,
                sentiment: None,
            },
            FeedbackRow {
                category: "UX/UI".into(),
                summary: "hard to navigate, confusing".into(),
                solution: "N/A".into(),
                count: 1,
                sentiment: Some(SentimentLabel::Frustrated),
            },
        ];

        FeedbackExporter::new().write(&rows, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), ["Category", "Feedback", "Solution", "Count", "Sentiment"]);

        let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][1], "crash on start\nfreezes");
        assert_eq!(&records[1][1], "hard to navigate, confusing");
        assert_eq!(&records[1][4], "Frustrated");
    }

    #[test]
    fn file_name_is_slugged_and_stamped() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 14, 22, 33).unwrap();
        assert_eq!(
            FeedbackExporter::default_file_name(Some("WhatsApp Messenger"), now),
            "feedback_whatsapp_messenger_20240301_142233.csv"
        );
        assert_eq!(
            FeedbackExporter::default_file_name(Some("!!!"), now),
            "feedback_analysis_20240301_142233.csv"
        );
        assert_eq!(
            FeedbackExporter::default_file_name(None, now),
            "feedback_analysis_20240301_142233.csv"
        );
    }
}
