//! Machine translation used as a best-effort pre-pass before lexicon scoring.

use async_trait::async_trait;
use moka::future::Cache;
use sentiview_common::{Result, SentiViewError};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Translates text into the scorer's language.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text`. An empty string means the service had no translation.
    async fn translate(&self, text: &str) -> Result<String>;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;
}

/// Identity translator used when translation is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Settings for [`GoogleTranslator`].
#[derive(Debug, Clone)]
pub struct GoogleTranslatorConfig {
    /// `translate_a/single` endpoint URL.
    pub endpoint: String,
    /// Target language code.
    pub target_language: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Client for the public Google Translate web endpoint with automatic source detection.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
    target_language: String,
}

impl GoogleTranslator {
    /// Builds the HTTP client.
    pub fn new(config: GoogleTranslatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sentiview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
            target_language: config.target_language,
        })
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    async fn translate(&self, text: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentiViewError::translation_with_status(
                format!("translation service answered {status}"),
                status.as_u16(),
            ));
        }

        let body: Value = response.json().await?;
        let translated = parse_translation(&body)?;
        debug!(translated_chars = translated.chars().count(), "translation received");
        Ok(translated)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The body is a nested array whose first element lists
/// `[translated, original, ...]` per sentence.
pub fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| SentiViewError::translation("unexpected response shape"))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

/// Memoises successful translations of another translator.
pub struct CachedTranslator<T> {
    inner: T,
    cache: Cache<String, String>,
}

impl<T: Translator> CachedTranslator<T> {
    /// Wraps `inner` with a cache holding at most `capacity` translations.
    pub fn new(inner: T, capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::new(capacity),
        }
    }
}

#[async_trait]
impl<T: Translator> Translator for CachedTranslator<T> {
    async fn translate(&self, text: &str) -> Result<String> {
        if let Some(hit) = self.cache.get(text).await {
            return Ok(hit);
        }

        let translated = self.inner.translate(text).await?;
        if !translated.is_empty() {
            self.cache.insert(text.to_string(), translated.clone()).await;
        }
        Ok(translated)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_parse_translation_joins_segments() {
        let body = json!([
            [
                ["Hello. ", "Hola. ", null, null, 10],
                ["How are you?", "¿Cómo estás?", null, null, 10]
            ],
            null,
            "es"
        ]);
        assert_eq!(parse_translation(&body).unwrap(), "Hello. How are you?");
    }

    #[test]
    fn test_parse_translation_rejects_unexpected_shape() {
        let err = parse_translation(&json!({"error": "quota"})).unwrap_err();
        assert!(matches!(err, SentiViewError::Translation { .. }));

        assert_eq!(parse_translation(&json!([[]])).unwrap(), "");
    }

    #[tokio::test]
    async fn test_noop_translator_is_identity() {
        assert_eq!(NoopTranslator.translate("Das ist gut").await.unwrap(), "Das ist gut");
        assert_eq!(NoopTranslator.name(), "noop");
    }

    struct CountingTranslator {
        calls: Arc<AtomicUsize>,
        reply: &'static str,
    }

    #[async_trait]
    impl Translator for CountingTranslator {
        async fn translate(&self, _text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_cache_serves_repeated_text() {
        let calls = Arc::new(AtomicUsize::new(0));
        let translator = CachedTranslator::new(
            CountingTranslator { calls: calls.clone(), reply: "It is wonderful" },
            16,
        );

        assert_eq!(translator.translate("C'est merveilleux").await.unwrap(), "It is wonderful");
        assert_eq!(translator.translate("C'est merveilleux").await.unwrap(), "It is wonderful");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(translator.name(), "counting");
    }

    #[tokio::test]
    async fn test_cache_skips_empty_translations() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counting = CountingTranslator {
            calls: calls.clone(),
            reply: "",
        };
        let translator = CachedTranslator::new(counting, 16);

        translator.translate("???").await.unwrap();
        translator.translate("???").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cache_does_not_store_errors() {
        let mut mock = MockTranslator::new();
        mock.expect_translate()
            .times(2)
            .returning(|_| Err(SentiViewError::translation("offline")));
        mock.expect_name().return_const("mock");

        let translator = CachedTranslator::new(mock, 16);
        assert!(translator.translate("hola").await.is_err());
        assert!(translator.translate("hola").await.is_err());
    }
}
