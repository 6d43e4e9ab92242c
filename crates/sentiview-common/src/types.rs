//! Domain types shared by the classifiers, the chart emitter and the web layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Display color for positive lines.
pub const POSITIVE_COLOR: &str = "#4CAF50";
/// Display color for negative lines.
pub const NEGATIVE_COLOR: &str = "#F44336";
/// Display color for neutral lines.
pub const NEUTRAL_COLOR: &str = "#2196F3";

/// Three-way sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Positive sentiment.
    Positive,
    /// Negative sentiment.
    Negative,
    /// Neither positive nor negative.
    Neutral,
}

impl SentimentLabel {
    /// All labels in display order.
    pub const ALL: [SentimentLabel; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Hex color used to display this label.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_COLOR,
            Self::Negative => NEGATIVE_COLOR,
            Self::Neutral => NEUTRAL_COLOR,
        }
    }

    /// Emoji used to display this label.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😢",
            Self::Neutral => "😐",
        }
    }

    /// Swaps Positive and Negative; Neutral stays Neutral.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Neutral => Self::Neutral,
        }
    }

    /// Label name as shown to users.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Positive => 0,
            Self::Negative => 1,
            Self::Neutral => 2,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome for one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// The line as submitted (before any translation).
    pub text: String,
    /// Assigned label.
    pub label: SentimentLabel,
    /// Display color as a hex string.
    pub color: String,
    /// Display emoji, when the classifier provides one.
    pub emoji: Option<String>,
    /// Raw score the label was derived from.
    pub score: f64,
}

impl SentimentResult {
    /// Builds a result whose color comes from the label, with an emoji.
    pub fn with_emoji(text: impl Into<String>, label: SentimentLabel, score: f64) -> Self {
        Self {
            text: text.into(),
            label,
            color: label.color().to_string(),
            emoji: Some(label.emoji().to_string()),
            score,
        }
    }

    /// Builds a result whose color comes from the label, without an emoji.
    pub fn without_emoji(text: impl Into<String>, label: SentimentLabel, score: f64) -> Self {
        Self {
            text: text.into(),
            label,
            color: label.color().to_string(),
            emoji: None,
            score,
        }
    }
}

/// Per-label line counts for one submission. All three labels are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    counts: [u64; 3],
}

impl SentimentTally {
    /// Creates an all-zero tally.
    pub const fn new() -> Self {
        Self { counts: [0; 3] }
    }

    /// Adds one line with the given label.
    pub fn record(&mut self, label: SentimentLabel) {
        self.counts[label.index()] += 1;
    }

    /// Count for one label.
    pub const fn count(&self, label: SentimentLabel) -> u64 {
        self.counts[label.index()]
    }

    /// Sum over all labels.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(label, count)` pairs in display order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (SentimentLabel, u64)> + '_ {
        SentimentLabel::ALL.iter().map(|label| (*label, self.count(*label)))
    }
}

impl Serialize for SentimentTally {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(SentimentLabel::ALL.len()))?;
        for (label, count) in self.iter() {
            map.serialize_entry(label.as_str(), &count)?;
        }
        map.end()
    }
}

/// Labels, counts and colors handed to the chart emitter, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Label names.
    pub labels: Vec<String>,
    /// Count per label.
    pub counts: Vec<u64>,
    /// Hex color per label.
    pub colors: Vec<String>,
}

impl ChartSeries {
    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl From<&SentimentTally> for ChartSeries {
    fn from(tally: &SentimentTally) -> Self {
        let mut series = Self {
            labels: Vec::with_capacity(3),
            counts: Vec::with_capacity(3),
            colors: Vec::with_capacity(3),
        };
        for (label, count) in tally.iter() {
            series.labels.push(label.as_str().to_string());
            series.counts.push(count);
            series.colors.push(label.color().to_string());
        }
        series
    }
}

/// Paths of the chart images written for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartArtifacts {
    /// Pie chart image.
    pub pie: PathBuf,
    /// Bar chart image.
    pub bar: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_flip() {
        assert_eq!(SentimentLabel::Positive.flipped(), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::Negative.flipped(), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::Neutral.flipped(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_label_display_attributes() {
        assert_eq!(SentimentLabel::Positive.color(), "#4CAF50");
        assert_eq!(SentimentLabel::Negative.color(), "#F44336");
        assert_eq!(SentimentLabel::Neutral.color(), "#2196F3");
        assert_eq!(SentimentLabel::Positive.emoji(), "😊");
        assert_eq!(SentimentLabel::Negative.emoji(), "😢");
        assert_eq!(SentimentLabel::Neutral.emoji(), "😐");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_result_constructors() {
        let with = SentimentResult::with_emoji("great", SentimentLabel::Positive, 0.6);
        assert_eq!(with.color, "#4CAF50");
        assert_eq!(with.emoji.as_deref(), Some("😊"));

        let without = SentimentResult::without_emoji("awful", SentimentLabel::Negative, -0.4);
        assert_eq!(without.color, "#F44336");
        assert!(without.emoji.is_none());
    }

    #[test]
    fn test_tally_preserves_zero_counts() {
        let mut tally = SentimentTally::new();
        tally.record(SentimentLabel::Negative);
        tally.record(SentimentLabel::Negative);

        let pairs: Vec<_> = tally.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (SentimentLabel::Positive, 0),
                (SentimentLabel::Negative, 2),
                (SentimentLabel::Neutral, 0),
            ]
        );
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_tally_serializes_as_map() {
        let mut tally = SentimentTally::new();
        tally.record(SentimentLabel::Positive);

        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(json, serde_json::json!({"Positive": 1, "Negative": 0, "Neutral": 0}));
    }

    #[test]
    fn test_chart_series_from_tally() {
        let mut tally = SentimentTally::new();
        tally.record(SentimentLabel::Neutral);

        let series = ChartSeries::from(&tally);
        assert_eq!(series.labels, vec!["Positive", "Negative", "Neutral"]);
        assert_eq!(series.counts, vec![0, 0, 1]);
        assert_eq!(series.colors, vec!["#4CAF50", "#F44336", "#2196F3"]);
        assert!(!series.is_empty());
        assert!(ChartSeries::from(&SentimentTally::new()).is_empty());
    }
}
