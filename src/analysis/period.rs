// src/analysis/period.rs
use serde::{Serialize, Deserialize};
use std::fmt;

/// Relative time window the service applies to the trend view.
/// Serialized as its wire code ("1w", "1m", ...) in every format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub enum Period {
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Default for Period {
    fn default() -> Self {
        Period::OneYear
    }
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::OneWeek,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
    ];

    /// Wire code sent in the request body.
    pub fn code(&self) -> &'static str {
        match self {
            Period::OneWeek => "1w",
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::SixMonths => "6m",
            Period::OneYear => "1y",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::OneWeek => "Last week",
            Period::OneMonth => "Last month",
            Period::ThreeMonths => "Last 3 months",
            Period::SixMonths => "Last 6 months",
            Period::OneYear => "Last year",
        }
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.code().to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Period::ALL.iter()
            .copied()
            .find(|p| p.code() == code.trim())
            .ok_or_else(|| format!("unknown period '{code}', expected one of 1w, 1m, 3m, 6m, 1y"))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
