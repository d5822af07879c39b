use thiserror::Error;

/// Failures the translation pipeline can surface. The HTTP handler maps
/// every variant to one uniform service error.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("translation backend returned no usable text")]
    EmptyBackendResponse,

    #[error("translation was empty after cleaning")]
    EmptyTranslation,
}
