//! Builds the shared application state from configuration and runs the server.

use crate::error::WebResult;
use crate::pages::ChartLinks;
use crate::routes::create_router;
use crate::service::SentimentService;
use sentiview_analysis::{
    CachedTranslator, GoogleTranslator, GoogleTranslatorConfig, Lexicon, LexiconClassifier,
    NoopTranslator, PolarityClassifier, PolarityModel, SentimentClassifier, Translator,
    VaderScorer,
};
use sentiview_charts::PlottersChartEmitter;
use sentiview_common::Result;
use sentiview_config::{AnalysisConfig, Config, Engine, TranslationConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Shared application state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Submission pipeline
    pub service: Arc<SentimentService>,
    /// Public chart URLs
    pub chart_links: ChartLinks,
    /// Directory served under the static URL prefix
    pub static_dir: PathBuf,
    /// URL prefix of the static directory
    pub static_url_prefix: String,
}

impl AppState {
    /// Wires classifier, translator and chart emitter according to `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let classifier = build_classifier(&config.analysis, &config.translation)?;
        let emitter = PlottersChartEmitter::new(
            config.charts.static_dir.clone(),
            config.charts.pie_file.clone(),
            config.charts.bar_file.clone(),
        );

        Ok(Self::new(
            SentimentService::new(classifier, Arc::new(emitter)),
            config,
        ))
    }

    /// Wraps an existing service with the chart settings from `config`.
    pub fn new(service: SentimentService, config: &Config) -> Self {
        Self {
            service: Arc::new(service),
            chart_links: ChartLinks::new(
                &config.charts.static_url_prefix,
                &config.charts.pie_file,
                &config.charts.bar_file,
            ),
            static_dir: config.charts.static_dir.clone(),
            static_url_prefix: config.charts.static_url_prefix.clone(),
        }
    }
}

/// Loads the configured scorer once and wraps it in the engine's classifier.
pub fn build_classifier(
    analysis: &AnalysisConfig,
    translation: &TranslationConfig,
) -> Result<Arc<dyn SentimentClassifier>> {
    match analysis.engine {
        Engine::Lexicon => {
            let lexicon = match &analysis.lexicon_path {
                Some(path) => Lexicon::from_path(path)?,
                None => Lexicon::builtin()?,
            };
            info!(entries = lexicon.len(), "lexicon engine ready");
            Ok(Arc::new(LexiconClassifier::new(
                Arc::new(VaderScorer::new(lexicon)),
                build_translator(translation)?,
            )))
        }
        Engine::Polarity => {
            let model = match &analysis.polarity_model_path {
                Some(path) => PolarityModel::from_path(path)?,
                None => PolarityModel::builtin()?,
            };
            info!("polarity engine ready");
            Ok(Arc::new(PolarityClassifier::new(Arc::new(model))))
        }
    }
}

/// Translator for the lexicon engine; identity when translation is disabled.
pub fn build_translator(config: &TranslationConfig) -> Result<Arc<dyn Translator>> {
    if !config.enabled {
        info!("translation disabled");
        return Ok(Arc::new(NoopTranslator));
    }

    let google = GoogleTranslator::new(GoogleTranslatorConfig {
        endpoint: config.endpoint.clone(),
        target_language: config.target_language.clone(),
        timeout: Duration::from_secs(config.timeout_seconds),
    })?;
    info!(
        target = %config.target_language,
        cache_capacity = config.cache_capacity,
        "translation enabled"
    );

    if config.cache_capacity == 0 {
        Ok(Arc::new(google))
    } else {
        Ok(Arc::new(CachedTranslator::new(google, config.cache_capacity)))
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: Config) -> WebResult<()> {
    let state = AppState::from_config(&config)?;
    let bind_address = config.server.bind_address.as_str();
    info!(engine = state.service.engine(), "Starting SentiView on {}", bind_address);

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("SentiView listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("SentiView stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
