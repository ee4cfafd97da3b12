// src/config/settings.rs
use anyhow::{Context, Result};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analysis::{
    CategoryValues, FeedbackSource, LabelSet, NormalizeOptions, Period, SentimentLabel,
};

pub const ENV_PREFIX: &str = "SNAPPSENSE";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the analysis service; requests go to `{service_url}/analyze`.
    pub service_url: String,
    pub request_timeout_secs: u64,
    pub default_period: Period,
    pub label_set: LabelSet,
    pub category_values: CategoryValues,
    pub include_navigation_issues: bool,
    pub trend_bucket_limit: Option<usize>,
    pub feedback_source: FeedbackSource,
    /// Hide Delighted/Happy rows from the feedback table.
    pub exclude_positive_feedback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 120,
            default_period: Period::OneYear,
            label_set: LabelSet::Five,
            category_values: CategoryValues::Percentage,
            include_navigation_issues: false,
            trend_bucket_limit: Some(50),
            feedback_source: FeedbackSource::Auto,
            exclude_positive_feedback: true,
        }
    }
}

impl Settings {
    /// `<config dir>/snappsense/settings.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snappsense").join("settings.ron"))
    }

    /// Defaults, overlaid by the RON file at `path` when it exists, overlaid
    /// by `SNAPPSENSE_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                config::File::from(path)
                    .format(config::FileFormat::Ron)
                    .required(false),
            );
        }

        let settings: Settings = builder
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")?;

        tracing::debug!(?settings, "Settings loaded");
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            label_set: self.label_set,
            category_values: self.category_values,
            include_navigation_issues: self.include_navigation_issues,
            trend_bucket_limit: self.trend_bucket_limit,
            feedback_source: self.feedback_source,
            excluded_sentiments: if self.exclude_positive_feedback {
                SentimentLabel::ALL.iter().copied().filter(SentimentLabel::is_positive).collect()
            } else {
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_with(Some(&dir.path().join("settings.ron")), no_env()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        std::fs::write(&path, r#"(
            service_url: "http://analysis.local:5001",
            default_period: "1w",
            label_set: "three",
            trend_bucket_limit: 10,
        )"#).unwrap();

        let settings = Settings::load_with(Some(&path), no_env()).unwrap();
        assert_eq!(settings.service_url, "http://analysis.local:5001");
        assert_eq!(settings.default_period, Period::OneWeek);
        assert_eq!(settings.label_set, LabelSet::Three);
        assert_eq!(settings.trend_bucket_limit, Some(10));
        assert_eq!(settings.request_timeout_secs, 120);
    }

    #[test]
    fn environment_overrides_file() {
        let env = config::Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("SNAPPSENSE_SERVICE_URL".to_string(), "http://env:9000".to_string()),
            ("SNAPPSENSE_EXCLUDE_POSITIVE_FEEDBACK".to_string(), "false".to_string()),
        ])));
        let settings = Settings::load_with(None, env).unwrap();
        assert_eq!(settings.service_url, "http://env:9000");
        assert!(!settings.exclude_positive_feedback);
    }

    #[test]
    fn positive_exclusion_maps_to_delighted_and_happy() {
        let options = Settings::default().normalize_options();
        assert_eq!(options.excluded_sentiments, vec![SentimentLabel::Delighted, SentimentLabel::Happy]);

        let options = Settings { exclude_positive_feedback: false, ..Settings::default() }.normalize_options();
        assert!(options.excluded_sentiments.is_empty());
    }
}
