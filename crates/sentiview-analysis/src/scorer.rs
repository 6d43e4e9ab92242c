//! Scorer trait shared by the rule-based lexicon scorer and the polarity model.

use sentiview_common::Result;

/// Maps a piece of text to a sentiment score in `[-1, 1]`.
///
/// Implementations are constructed once at startup and shared between
/// requests, so they must be immutable after construction.
#[cfg_attr(test, mockall::automock)]
pub trait SentimentScorer: Send + Sync {
    /// Scores `text`. Negative values lean negative, positive values positive.
    fn score(&self, text: &str) -> Result<f64>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}
