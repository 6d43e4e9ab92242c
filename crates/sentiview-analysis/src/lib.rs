//! # SentiView Analysis
//!
//! Sentence-level sentiment classification.
//!
//! Two engines are available:
//!
//! - the lexicon engine translates each line, scores it with a rule-based
//!   compound scorer and flips the label when the sentence contains a negation;
//! - the polarity engine labels a line by the sign of an averaged lexicon
//!   polarity model.
//!
//! Scorers and translators are built once and injected into the classifiers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod classifier;
pub mod lexicon;
pub mod negation;
pub mod polarity;
pub mod scorer;
pub mod translate;
pub mod vader;

pub use aggregate::tally;
pub use classifier::{
    lexicon_label, polarity_label, LexiconClassifier, PolarityClassifier, SentimentClassifier,
    LEXICON_THRESHOLD,
};
pub use lexicon::Lexicon;
pub use negation::{contains_negation, NEGATION_TOKENS};
pub use polarity::PolarityModel;
pub use scorer::SentimentScorer;
pub use translate::{
    CachedTranslator, GoogleTranslator, GoogleTranslatorConfig, NoopTranslator, Translator,
};
pub use vader::VaderScorer;
