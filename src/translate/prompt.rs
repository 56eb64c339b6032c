use super::languages::{language_clarification, language_name, AUTO_SOURCE};

/// System turn for chat-style models. Keeps the model from narrating.
pub const TRANSLATOR_SYSTEM_INSTRUCTION: &str = "You are a translation system. \
    Output ONLY the translated text without any explanations, notes, or \
    additional commentary.";

/// Build the free-text prompt for completion-style models.
///
/// Deterministic for a given input. When the source is `auto` the "from"
/// clause is omitted entirely so the model detects the language itself.
pub fn build_completion_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    let target_name = language_name(target_language);
    let target_clarification = language_clarification(target_language);

    if source_language == AUTO_SOURCE {
        return format!(
            "Translate to {}{}. Reply with ONLY the translation.\n\n{}",
            target_name, target_clarification, text
        );
    }

    let source_name = language_name(source_language);
    let source_clarification = language_clarification(source_language);
    format!(
        "Translate from {}{} to {}{}. Reply with ONLY the translation.\n\n{}",
        source_name, source_clarification, target_name, target_clarification, text
    )
}

/// Build the user turn for chat-style models. The instruction about
/// answering with the bare translation lives in the system turn instead.
pub fn build_chat_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    let target_name = language_name(target_language);
    let target_clarification = language_clarification(target_language);

    if source_language == AUTO_SOURCE {
        return format!(
            "Translate to {}{}:\n\n{}",
            target_name, target_clarification, text
        );
    }

    let source_name = language_name(source_language);
    let source_clarification = language_clarification(source_language);
    format!(
        "Translate from {}{} to {}{}:\n\n{}",
        source_name, source_clarification, target_name, target_clarification, text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_prompt_names_both_languages() {
        let prompt = build_completion_prompt("Hallo", "de", "fr");
        assert!(prompt.contains("from German"));
        assert!(prompt.contains("to French"));
        assert!(prompt.ends_with("Hallo"));
    }

    #[test]
    fn test_auto_source_omits_from_clause() {
        let prompt = build_completion_prompt("안녕", "auto", "en");
        assert!(!prompt.contains("from"));
        assert!(prompt.starts_with("Translate to English"));
        assert!(prompt.ends_with("안녕"));
    }

    #[test]
    fn test_clarifications_attached_to_both_sides() {
        let prompt = build_completion_prompt("hello", "en", "ko");
        assert!(prompt.contains("English (English)"));
        assert!(prompt.contains("Korean (한국어, using Hangul script, NOT Chinese)"));
    }

    #[test]
    fn test_chat_prompt_has_no_reply_instruction() {
        let prompt = build_chat_prompt("hello", "en", "ja");
        assert!(prompt.contains("Translate from English"));
        assert!(!prompt.contains("ONLY"));
    }

    #[test]
    fn test_chat_prompt_auto_source() {
        let prompt = build_chat_prompt("안녕", "auto", "en");
        assert!(!prompt.contains("from"));
        assert!(prompt.starts_with("Translate to English"));
    }

    #[test]
    fn test_deterministic() {
        let a = build_completion_prompt("hi", "en", "fr");
        let b = build_completion_prompt("hi", "en", "fr");
        assert_eq!(a, b);
    }
}
