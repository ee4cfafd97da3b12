// src/analysis/sentiment.rs
use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SentimentLabel {
    Delighted,
    Happy,
    Neutral,
    Frustrated,
    Angry,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::Delighted,
        SentimentLabel::Happy,
        SentimentLabel::Neutral,
        SentimentLabel::Frustrated,
        SentimentLabel::Angry,
    ];

    /// Key used for this label in the service's JSON maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Delighted => "Delighted",
            SentimentLabel::Happy => "Happy",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Frustrated => "Frustrated",
            SentimentLabel::Angry => "Angry",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|label| label.as_str() == value.trim())
    }

    /// Chart color as RGB.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            SentimentLabel::Delighted => [0x6c, 0x63, 0xff],
            SentimentLabel::Happy => [0x4e, 0xcd, 0xc4],
            SentimentLabel::Neutral => [0xf7, 0xdc, 0x6f],
            SentimentLabel::Frustrated => [0xff, 0x57, 0x33],
            SentimentLabel::Angry => [0xe7, 0x4c, 0x3c],
        }
    }

    pub fn is_positive(&self) -> bool {
        matches!(self, SentimentLabel::Delighted | SentimentLabel::Happy)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sentiment vocabulary the views are rendered with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(into = "String", try_from = "String")]
pub enum LabelSet {
    Five,
    Three,
}

impl Default for LabelSet {
    fn default() -> Self {
        LabelSet::Five
    }
}

impl From<LabelSet> for String {
    fn from(set: LabelSet) -> Self {
        set.as_str().to_string()
    }
}

impl TryFrom<String> for LabelSet {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.trim().to_ascii_lowercase().as_str() {
            "five" => Ok(LabelSet::Five),
            "three" => Ok(LabelSet::Three),
            _ => Err(format!("unknown label set '{name}', expected 'five' or 'three'")),
        }
    }
}

impl LabelSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSet::Five => "five",
            LabelSet::Three => "three",
        }
    }

    pub fn labels(&self) -> &'static [SentimentLabel] {
        match self {
            LabelSet::Five => &SentimentLabel::ALL,
            LabelSet::Three => &[
                SentimentLabel::Happy,
                SentimentLabel::Neutral,
                SentimentLabel::Frustrated,
            ],
        }
    }
}
