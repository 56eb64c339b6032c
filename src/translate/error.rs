use thiserror::Error;

/// Failure modes of a translation request.
///
/// Every variant is logged and swallowed inside the event pipeline; only
/// the on-demand HTTP surface ever shows one to a caller.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Provider settings missing or unusable.
    #[error("translation provider configuration error: {0}")]
    Config(String),

    /// The backend could not be reached.
    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status or an empty result.
    #[error("translation backend error: {0}")]
    Backend(String),

    /// The backend answered with a body we could not decode.
    #[error("failed to decode translation response: {0}")]
    Decode(String),
}

pub type TranslateResult<T> = Result<T, TranslateError>;
