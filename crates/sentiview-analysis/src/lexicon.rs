//! Word-valence tables loaded from tab-separated text.
//!
//! Both the rule-based scorer and the polarity model keep their vocabulary in
//! the same shape: one token per line, followed by one or more numeric
//! columns. Blank lines and lines starting with `#` are ignored.

use sentiview_common::{Result, SentiViewError};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A parsed row: the token and its numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub token: String,
    pub values: Vec<f64>,
}

/// Parses tab-separated rows, keeping at most `max_columns` numeric values of
/// each. Later columns are ignored; the VADER file carries a standard
/// deviation and raw ratings after the mean.
pub(crate) fn parse_rows(
    source: &str,
    min_columns: usize,
    max_columns: usize,
) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let mut fields = line.split('\t');
        let token = fields.next().unwrap_or_default().trim();
        if token.is_empty() {
            return Err(SentiViewError::lexicon_at_line("missing token", index + 1));
        }

        let values = fields
            .take(max_columns)
            .map(|field| {
                field.trim().parse::<f64>().map_err(|_| {
                    SentiViewError::lexicon_at_line(
                        format!("'{}' is not a number for token '{token}'", field.trim()),
                        index + 1,
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.len() < min_columns {
            return Err(SentiViewError::lexicon_at_line(
                format!("token '{token}' needs {min_columns} value column(s)"),
                index + 1,
            ));
        }

        entries.push(Entry {
            token: token.to_lowercase(),
            values,
        });
    }

    Ok(entries)
}

/// Reads a table file from disk.
pub(crate) fn read_table(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        SentiViewError::with_source(format!("Failed to read lexicon file {}", path.display()), e)
    })
}

/// Token → valence map used by the rule-based scorer.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The lexicon compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::parse(include_str!("../data/vader_lexicon.tsv"))
    }

    /// Loads a VADER-format lexicon (`token<TAB>mean[<TAB>...]`) from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let lexicon = Self::parse(&read_table(path)?)?;
        debug!(entries = lexicon.len(), path = %path.display(), "lexicon loaded");
        Ok(lexicon)
    }

    /// Parses lexicon text. Tokens are stored lowercased.
    pub fn parse(source: &str) -> Result<Self> {
        let valences = parse_rows(source, 1, 1)?
            .into_iter()
            .map(|entry| (entry.token, entry.values[0]))
            .collect();
        Ok(Self { valences })
    }

    /// Valence of a (lowercased) token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    /// Whether the token carries a valence.
    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// True when the lexicon has no entries.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
