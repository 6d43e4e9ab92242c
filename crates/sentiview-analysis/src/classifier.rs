//! Line classifiers for the two engines.
//!
//! [`LexiconClassifier`] translates the line, scores it with a compound
//! lexicon scorer and applies the whole-sentence negation flip.
//! [`PolarityClassifier`] thresholds the polarity model's output at zero.

use crate::negation::contains_negation;
use crate::scorer::SentimentScorer;
use crate::translate::Translator;
use async_trait::async_trait;
use sentiview_common::{truncate_chars, Result, SentimentLabel, SentimentResult};
use std::sync::Arc;
use tracing::{debug, warn};

const LOG_PREVIEW_CHARS: usize = 60;

/// Compound scores above this are Positive, below its negation Negative.
pub const LEXICON_THRESHOLD: f64 = 0.2;

/// Assigns a sentiment label to a single line.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classifies one line. The returned result carries the line as submitted.
    async fn classify(&self, line: &str) -> Result<SentimentResult>;

    /// Name of the engine, as configured.
    fn engine(&self) -> &'static str;
}

/// Label for a compound score, flipped when the sentence contains a negation.
pub fn lexicon_label(score: f64, negated: bool) -> SentimentLabel {
    let label = if score > LEXICON_THRESHOLD {
        SentimentLabel::Positive
    } else if score < -LEXICON_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    if negated {
        label.flipped()
    } else {
        label
    }
}

/// Label for a polarity value: the sign decides.
pub fn polarity_label(score: f64) -> SentimentLabel {
    if score > 0.0 {
        SentimentLabel::Positive
    } else if score < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Translation, compound scoring and negation flip.
pub struct LexiconClassifier {
    scorer: Arc<dyn SentimentScorer>,
    translator: Arc<dyn Translator>,
}

impl LexiconClassifier {
    /// Creates a classifier from an injected scorer and translator.
    pub fn new(scorer: Arc<dyn SentimentScorer>, translator: Arc<dyn Translator>) -> Self {
        Self { scorer, translator }
    }

    /// Best-effort translation. Falls back to `line` on error or empty output.
    async fn canonical_text(&self, line: &str) -> String {
        match self.translator.translate(line).await {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => {
                debug!(translator = self.translator.name(), "empty translation, keeping original");
                line.to_string()
            }
            Err(e) => {
                warn!(
                    translator = self.translator.name(),
                    line = %truncate_chars(line, LOG_PREVIEW_CHARS),
                    error = %e,
                    "translation failed, scoring original text"
                );
                line.to_string()
            }
        }
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, line: &str) -> Result<SentimentResult> {
        let text = self.canonical_text(line).await;
        if text.trim().is_empty() {
            return Ok(SentimentResult::with_emoji(line, SentimentLabel::Neutral, 0.0));
        }

        let score = self.scorer.score(&text)?;
        let negated = contains_negation(&text);
        let label = lexicon_label(score, negated);
        debug!(
            line = %truncate_chars(line, LOG_PREVIEW_CHARS),
            score,
            negated,
            label = %label,
            "line classified"
        );

        Ok(SentimentResult::with_emoji(line, label, score))
    }

    fn engine(&self) -> &'static str {
        "lexicon"
    }
}

/// Zero-threshold classification over a pretrained polarity model.
pub struct PolarityClassifier {
    scorer: Arc<dyn SentimentScorer>,
}

impl PolarityClassifier {
    /// Creates a classifier from an injected polarity scorer.
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }
}

#[async_trait]
impl SentimentClassifier for PolarityClassifier {
    async fn classify(&self, line: &str) -> Result<SentimentResult> {
        let score = self.scorer.score(line)?;
        let label = polarity_label(score);
        debug!(
            line = %truncate_chars(line, LOG_PREVIEW_CHARS),
            score,
            label = %label,
            "line classified"
        );

        Ok(SentimentResult::without_emoji(line, label, score))
    }

    fn engine(&self) -> &'static str {
        "polarity"
    }
}
