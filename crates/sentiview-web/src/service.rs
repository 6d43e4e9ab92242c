//! Submission pipeline: split, classify, tally, chart.

use sentiview_analysis::{tally, SentimentClassifier};
use sentiview_charts::ChartEmitter;
use sentiview_common::{
    split_lines, ChartArtifacts, ChartSeries, Result, SentiViewError, SentimentLabel,
    SentimentResult, SentimentTally,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// One result per non-empty line, in input order.
    pub results: Vec<SentimentResult>,
    /// Counts per label.
    pub tally: SentimentTally,
    /// Written chart images; `None` when no line was classified.
    pub charts: Option<ChartArtifacts>,
}

/// Runs submissions through a classifier and a chart emitter shared across requests.
#[derive(Clone)]
pub struct SentimentService {
    classifier: Arc<dyn SentimentClassifier>,
    emitter: Arc<dyn ChartEmitter>,
}

impl SentimentService {
    /// Creates a service from already-initialised components.
    pub fn new(classifier: Arc<dyn SentimentClassifier>, emitter: Arc<dyn ChartEmitter>) -> Self {
        Self { classifier, emitter }
    }

    /// Name of the engine behind this service.
    pub fn engine(&self) -> &'static str {
        self.classifier.engine()
    }

    /// Classifies every non-empty line of `text` and renders charts for the tally.
    #[instrument(skip(self, text), fields(engine = self.engine()))]
    pub async fn analyze(&self, text: &str) -> Result<Submission> {
        let lines = split_lines(text);

        let mut results = Vec::with_capacity(lines.len());
        for line in &lines {
            results.push(self.classifier.classify(line).await?);
        }

        let tally = tally(&results);
        let charts = if tally.total() > 0 {
            self.render_charts(&tally).await?
        } else {
            None
        };

        info!(
            lines = results.len(),
            positive = tally.count(SentimentLabel::Positive),
            negative = tally.count(SentimentLabel::Negative),
            neutral = tally.count(SentimentLabel::Neutral),
            "submission analyzed"
        );

        Ok(Submission {
            results,
            tally,
            charts,
        })
    }

    async fn render_charts(&self, tally: &SentimentTally) -> Result<Option<ChartArtifacts>> {
        let series = ChartSeries::from(tally);
        let emitter = Arc::clone(&self.emitter);

        let (pie, bar) = tokio::task::spawn_blocking(move || -> Result<_> {
            Ok((emitter.render_pie(&series)?, emitter.render_bar(&series)?))
        })
        .await
        .map_err(|e| SentiViewError::chart_with_source("chart rendering task failed", e))??;

        Ok(pie.zip(bar).map(|(pie, bar)| ChartArtifacts { pie, bar }))
    }
}
