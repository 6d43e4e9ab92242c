//! Rule-based compound scorer in the style of VADER.
//!
//! Each token found in the lexicon contributes its valence, adjusted by
//! booster words in the three preceding positions, ALL-CAPS emphasis and a
//! "but" contrast rule. The summed valence is amplified by trailing
//! punctuation and normalised into `[-1, 1]`.
//!
//! The scorer does not look for negations. Negation is handled once, for the
//! whole sentence, by [`crate::classifier::LexiconClassifier`].

use crate::lexicon::Lexicon;
use crate::scorer::SentimentScorer;
use sentiview_common::Result;

/// Scalar added by an intensifying booster word.
const B_INCR: f64 = 0.293;
/// Scalar added by a dampening booster word.
const B_DECR: f64 = -0.293;
/// Emphasis for ALL-CAPS words when the text is mixed-case.
const C_INCR: f64 = 0.733;
/// Normalisation constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("awfully", B_INCR),
    ("completely", B_INCR),
    ("considerably", B_INCR),
    ("decidedly", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("exceptionally", B_INCR),
    ("extremely", B_INCR),
    ("fabulously", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("hella", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("intensely", B_INCR),
    ("majorly", B_INCR),
    ("more", B_INCR),
    ("most", B_INCR),
    ("particularly", B_INCR),
    ("purely", B_INCR),
    ("quite", B_INCR),
    ("really", B_INCR),
    ("remarkably", B_INCR),
    ("so", B_INCR),
    ("substantially", B_INCR),
    ("thoroughly", B_INCR),
    ("totally", B_INCR),
    ("tremendously", B_INCR),
    ("uber", B_INCR),
    ("unbelievably", B_INCR),
    ("unusually", B_INCR),
    ("utterly", B_INCR),
    ("very", B_INCR),
    ("almost", B_DECR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("occasionally", B_DECR),
    ("partly", B_DECR),
    ("scarcely", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

fn booster(token: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, scalar)| *scalar)
}

/// Python-style `isupper`: at least one cased character and no lowercase ones.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// Strips surrounding punctuation unless that would leave two characters or
/// fewer, which keeps emoticons such as `:)` intact.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Compound scorer backed by a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl VaderScorer {
    /// Creates a scorer over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Creates a scorer over the built-in lexicon.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Lexicon::builtin()?))
    }

    /// Compound score of `text` in `[-1, 1]`; 0.0 when nothing in it carries sentiment.
    pub fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        if tokens.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let upper_count = tokens.iter().filter(|t| is_upper(t)).count();
        let cap_differential = upper_count > 0 && upper_count < tokens.len();

        let mut sentiments: Vec<f64> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.token_valence(i, token, &tokens, &lowered, cap_differential))
            .collect();

        apply_but_rule(&lowered, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        normalize(sum)
    }

    fn token_valence(
        &self,
        i: usize,
        token: &str,
        tokens: &[&str],
        lowered: &[String],
        cap_differential: bool,
    ) -> f64 {
        let lower = lowered[i].as_str();
        if booster(lower).is_some() {
            return 0.0;
        }
        // "kind of" hedges the next word, it carries no valence itself.
        if lower == "kind" && lowered.get(i + 1).map(String::as_str) == Some("of") {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(lower) else {
            return 0.0;
        };

        if cap_differential && is_upper(token) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = i - distance;
            if self.lexicon.contains(&lowered[prev]) {
                continue;
            }
            let mut scalar =
                booster_scalar(tokens[prev], &lowered[prev], valence, cap_differential);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
        }

        valence
    }
}

/// Scalar a booster word adds to the valence of a following sentiment word.
fn booster_scalar(token: &str, lower: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster(lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_upper(token) {
        scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
    }
    scalar
}

/// Words before the first "but" count half, words after it count one and a half.
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_index {
            *sentiment *= 0.5;
        } else if i > but_index {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    exclamations * 0.292 + question_emphasis
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<f64> {
        Ok(self.compound(text))
    }

    fn name(&self) -> &'static str {
        "vader"
    }
}
