//! Pretrained averaged-lexicon polarity model.
//!
//! The model scores a sentence as the mean polarity of the sentiment words it
//! contains. An intensifier scales the next sentiment word, and a negator
//! directly before a sentiment word multiplies it by -0.5.

use crate::lexicon::{parse_rows, read_table};
use crate::scorer::SentimentScorer;
use sentiview_common::{Result, SentiViewError};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

const NEGATORS: &[&str] = &["not", "never", "no", "don't", "doesn't", "isn't", "wasn't", "aren't"];
const NEGATION_FACTOR: f64 = -0.5;

/// Averaged-lexicon polarity model.
#[derive(Debug, Clone, Default)]
pub struct PolarityModel {
    polarities: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl PolarityModel {
    /// The model compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("../data/polarity_model.tsv"))
    }

    /// Loads a model file (`token<TAB>polarity[<TAB>intensity]`) from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let model = Self::parse(&read_table(path)?)?;
        debug!(
            words = model.polarities.len(),
            intensifiers = model.intensifiers.len(),
            path = %path.display(),
            "polarity model loaded"
        );
        Ok(model)
    }

    /// Parses model text.
    pub fn parse(source: &str) -> Result<Self> {
        let mut model = Self::default();

        for entry in parse_rows(source, 1, 2)? {
            let polarity = entry.values[0];
            let intensity = entry.values.get(1).copied().unwrap_or(1.0);
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(SentiViewError::lexicon(format!(
                    "polarity {polarity} for '{}' is outside [-1, 1]",
                    entry.token
                )));
            }

            if polarity == 0.0 && (intensity - 1.0).abs() > f64::EPSILON {
                model.intensifiers.insert(entry.token, intensity);
            } else {
                model.polarities.insert(entry.token, polarity * intensity);
            }
        }

        Ok(model)
    }

    /// Polarity of `text` in `[-1, 1]`; 0.0 when no sentiment word is present.
    pub fn polarity(&self, text: &str) -> f64 {
        let mut assessments = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;

        for word in text.unicode_words() {
            let word = word.to_lowercase();

            if let Some(intensity) = self.intensifiers.get(&word) {
                modifier = Some(modifier.unwrap_or(1.0) * intensity);
                continue;
            }
            if NEGATORS.contains(&word.as_str()) {
                negated = true;
                continue;
            }
            if let Some(polarity) = self.polarities.get(&word) {
                let mut value = polarity * modifier.unwrap_or(1.0);
                if negated {
                    value *= NEGATION_FACTOR;
                }
                assessments.push(value.clamp(-1.0, 1.0));
            }

            modifier = None;
            negated = false;
        }

        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

impl SentimentScorer for PolarityModel {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.polarity(text))
    }

    fn name(&self) -> &'static str {
        "polarity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiview_common::test_utils::assert_approx_eq;

    fn model() -> PolarityModel {
        PolarityModel::builtin().expect("built-in model")
    }

    #[test]
    fn test_reference_sentences() {
        let model = model();
        assert_approx_eq(model.polarity("I love this."), 0.5, 1e-9);
        assert_approx_eq(model.polarity("I hate this."), -0.8, 1e-9);
        assert_eq!(model.polarity("It is a table."), 0.0);
    }

    #[test]
    fn test_mean_of_sentiment_words() {
        assert_approx_eq(model().polarity("good food, bad service"), 0.0, 1e-9);
        assert_approx_eq(model().polarity("great and nice"), 0.7, 1e-9);
    }

    #[test]
    fn test_intensifier_and_negator() {
        let model = model();
        assert_approx_eq(model.polarity("very good"), 0.91, 1e-9);
        assert_approx_eq(model.polarity("not good"), -0.35, 1e-9);
        assert_approx_eq(model.polarity("not very good"), -0.455, 1e-9);
        // Intensified values are clamped per word.
        assert_approx_eq(model.polarity("extremely wonderful"), 1.0, 1e-9);
    }

    #[test]
    fn test_modifiers_reset_on_plain_words() {
        assert_approx_eq(model().polarity("not the food, it was good"), 0.7, 1e-9);
    }

    #[test]
    fn test_custom_model_and_validation() {
        let model = PolarityModel::parse("shiny\t0.4\nsuper\t0.0\t2.0\n").unwrap();
        assert_approx_eq(model.polarity("super shiny"), 0.8, 1e-9);

        let err = PolarityModel::parse("off\t1.5\n").unwrap_err();
        assert!(matches!(err, SentiViewError::Lexicon { .. }));
    }

    #[test]
    fn test_scorer_impl() {
        let model = model();
        assert_eq!(model.name(), "polarity");
        assert_approx_eq(model.score("I love this.").unwrap(), 0.5, 1e-9);
    }
}
