/// Leading labels models prepend despite being told not to.
/// Matched case-sensitively against the start of the output.
const UNWANTED_PREFIXES: [&str; 7] = [
    "Translation: ",
    "Translated text: ",
    "Here is the translation: ",
    "The translation is: ",
    "Output: ",
    "Answer: ",
    "Result: ",
];

/// Strip conversational artifacts from raw model output.
///
/// The steps run in a fixed order: trim, strip known leading labels,
/// unwrap one layer of surrounding quotes, cut trailing note blocks,
/// final trim.
pub fn clean_translation_output(raw: &str) -> String {
    let mut text = raw.trim();

    for prefix in UNWANTED_PREFIXES {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest.trim();
        }
    }

    if text.len() >= 2 {
        let double_quoted = text.starts_with('"') && text.ends_with('"');
        let single_quoted = text.starts_with('\'') && text.ends_with('\'');
        if double_quoted || single_quoted {
            text = text[1..text.len() - 1].trim();
        }
    }

    if let Some(idx) = text.find("\n\nNote:") {
        text = &text[..idx];
    }
    if let Some(idx) = text.find("\n\nExplanation:") {
        text = &text[..idx];
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean_translation_output("  Bonjour  \n"), "Bonjour");
    }

    #[test]
    fn test_strips_leading_labels() {
        assert_eq!(clean_translation_output("Translation: Bonjour"), "Bonjour");
        assert_eq!(clean_translation_output("Output: Hallo"), "Hallo");
        assert_eq!(
            clean_translation_output("Here is the translation: Hola"),
            "Hola"
        );
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        assert_eq!(
            clean_translation_output("translation: Bonjour"),
            "translation: Bonjour"
        );
    }

    #[test]
    fn test_unwraps_surrounding_quotes() {
        assert_eq!(clean_translation_output("\"Bonjour\""), "Bonjour");
        assert_eq!(clean_translation_output("'Hallo'"), "Hallo");
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        assert_eq!(clean_translation_output("\"Bonjour'"), "\"Bonjour'");
    }

    #[test]
    fn test_label_then_quotes() {
        assert_eq!(clean_translation_output("Translation: \"Hello\""), "Hello");
    }

    #[test]
    fn test_cuts_trailing_note_blocks() {
        assert_eq!(
            clean_translation_output("Bonjour\n\nNote: informal greeting"),
            "Bonjour"
        );
        assert_eq!(
            clean_translation_output("Hallo\n\nExplanation: German greeting"),
            "Hallo"
        );
    }

    #[test]
    fn test_inline_note_word_untouched() {
        assert_eq!(
            clean_translation_output("Note the difference"),
            "Note the difference"
        );
    }

    #[test]
    fn test_empty_and_quote_only_input() {
        assert_eq!(clean_translation_output(""), "");
        assert_eq!(clean_translation_output("\""), "\"");
        assert_eq!(clean_translation_output("\"\""), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Translation: \"Hello\"",
            "  Output: 'Bonjour'  ",
            "Hallo\n\nNote: greeting",
            "plain text",
            "",
        ];
        for input in inputs {
            let once = clean_translation_output(input);
            assert_eq!(clean_translation_output(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_never_returns_padded_output() {
        let inputs = ["  x  ", "\" padded \"", "Translation:  spaced  "];
        for input in inputs {
            let cleaned = clean_translation_output(input);
            assert_eq!(cleaned, cleaned.trim(), "input: {input:?}");
        }
    }
}
