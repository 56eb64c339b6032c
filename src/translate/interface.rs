use async_trait::async_trait;

use super::error::TranslateResult;

/// Contract shared by all translation backends.
///
/// Implementations hold only immutable configuration and an HTTP client,
/// so a single instance is safe to share across concurrent events.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source_language` to `target_language`.
    ///
    /// `source_language` may be the sentinel `"auto"`, in which case the
    /// backend detects the language itself.
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> TranslateResult<String>;

    /// Identifier of this backend, used in logs.
    fn kind(&self) -> &str;
}
