mod ollama;
mod payload;
mod sanitize;

pub use ollama::{GenerateBackend, OllamaClient};
pub use payload::GeneratePayload;
pub use sanitize::Sanitizer;

use std::sync::Arc;
use tracing::info;

use crate::error::TranslateError;

/// A finished translation, ready to hand back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub korean_text: String,
    pub model_used: String,
}

/// End-to-end translation pipeline: build the payload, call the backend,
/// sanitize the raw output.
pub struct Translator {
    backend: Arc<dyn GenerateBackend>,
    sanitizer: Sanitizer,
    default_model: String,
}

impl Translator {
    pub fn new(backend: Arc<dyn GenerateBackend>, default_model: String) -> Self {
        Self {
            backend,
            sanitizer: Sanitizer::new(),
            default_model,
        }
    }

    pub async fn translate(
        &self,
        japanese_text: &str,
        model: Option<&str>,
    ) -> Result<Translation, TranslateError> {
        let model = model.unwrap_or(&self.default_model);

        let payload = GeneratePayload::new(japanese_text, model);
        info!("Prompt: {}", payload.prompt);

        let raw = self.backend.generate(&payload).await?;

        let cleaned = self.sanitizer.clean(&raw);
        info!("Cleaned translation: {}", cleaned);

        if cleaned.is_empty() {
            return Err(TranslateError::EmptyTranslation);
        }

        Ok(Translation {
            korean_text: cleaned,
            model_used: model.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedBackend(&'static str);

    #[async_trait]
    impl GenerateBackend for FixedBackend {
        async fn generate(&self, _payload: &GeneratePayload) -> Result<String, TranslateError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl GenerateBackend for FailingBackend {
        async fn generate(&self, _payload: &GeneratePayload) -> Result<String, TranslateError> {
            Err(TranslateError::BackendUnavailable(
                "operation timed out".to_string(),
            ))
        }
    }

    fn translator(backend: impl GenerateBackend + 'static) -> Translator {
        Translator::new(Arc::new(backend), "gemma2:9b".to_string())
    }

    #[tokio::test]
    async fn returns_cleaned_text_and_default_model() {
        let t = translator(FixedBackend("한국어: 안녕하세요 감사합니다"));
        let result = t.translate("おはよう、ありがとう", None).await.unwrap();
        assert_eq!(result.korean_text, "안녕하세요 감사합니다");
        assert_eq!(result.model_used, "gemma2:9b");
    }

    #[tokio::test]
    async fn uses_requested_model_over_default() {
        let t = translator(FixedBackend("안녕하세요"));
        let result = t.translate("こんにちは", Some("llama3:8b")).await.unwrap();
        assert_eq!(result.model_used, "llama3:8b");
    }

    #[tokio::test]
    async fn backend_failure_propagates_with_cause() {
        let t = translator(FailingBackend);
        let err = t.translate("こんにちは", None).await.unwrap_err();
        match err {
            TranslateError::BackendUnavailable(cause) => {
                assert!(cause.contains("timed out"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn output_that_cleans_to_nothing_is_an_error() {
        let t = translator(FixedBackend("Sorry, I can only answer in English :)"));
        let err = t.translate("こんにちは", None).await.unwrap_err();
        assert!(matches!(err, TranslateError::EmptyTranslation));
    }
}
