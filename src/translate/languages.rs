/// Sentinel source language meaning "let the backend detect".
pub const AUTO_SOURCE: &str = "auto";

/// Resolve a language code to its full display name.
/// Unknown codes are returned unchanged so prompts stay usable.
pub fn language_name(code: &str) -> &str {
    match code {
        "auto" => "Auto-detect",
        "af" => "Afrikaans",
        "sq" => "Albanian",
        "am" => "Amharic",
        "ar" => "Arabic",
        "hy" => "Armenian",
        "az" => "Azerbaijani",
        "bn" => "Bengali",
        "bs" => "Bosnian",
        "bg" => "Bulgarian",
        "ca" => "Catalan",
        "zh" => "Chinese (Simplified)",
        "zh-TW" => "Chinese (Traditional)",
        "hr" => "Croatian",
        "cs" => "Czech",
        "da" => "Danish",
        "fa-AF" => "Dari",
        "nl" => "Dutch",
        "en" => "English",
        "et" => "Estonian",
        "fa" => "Farsi (Persian)",
        "tl" => "Filipino, Tagalog",
        "fi" => "Finnish",
        "fr" => "French",
        "fr-CA" => "French (Canada)",
        "ka" => "Georgian",
        "de" => "German",
        "el" => "Greek",
        "gu" => "Gujarati",
        "ht" => "Haitian Creole",
        "ha" => "Hausa",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "hu" => "Hungarian",
        "is" => "Icelandic",
        "id" => "Indonesian",
        "it" => "Italian",
        "ja" => "Japanese",
        "kn" => "Kannada",
        "kk" => "Kazakh",
        "ko" => "Korean",
        "lv" => "Latvian",
        "lt" => "Lithuanian",
        "mk" => "Macedonian",
        "ms" => "Malay",
        "ml" => "Malayalam",
        "mt" => "Maltese",
        "mr" => "Marathi",
        "mn" => "Mongolian",
        "no" => "Norwegian",
        "ps" => "Pashto",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "pa" => "Punjabi",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sr" => "Serbian",
        "si" => "Sinhala",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "so" => "Somali",
        "es" => "Spanish",
        "es-MX" => "Spanish (Mexico)",
        "sw" => "Swahili",
        "sv" => "Swedish",
        "ta" => "Tamil",
        "te" => "Telugu",
        "th" => "Thai",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "ur" => "Urdu",
        "uz" => "Uzbek",
        "vi" => "Vietnamese",
        "cy" => "Welsh",
        _ => code,
    }
}

/// Script hint appended to prompts for languages LLMs commonly confuse.
/// Returns an empty string when no disambiguation is needed.
pub fn language_clarification(code: &str) -> &'static str {
    match code {
        "ko" => " (한국어, using Hangul script, NOT Chinese)",
        "ja" => " (日本語, using Hiragana/Katakana/Kanji, NOT Chinese or Korean)",
        "zh" => " (中文简体, Simplified Chinese characters)",
        "zh-TW" => " (中文繁體, Traditional Chinese characters)",
        "en" => " (English)",
        "ar" => " (العربية, Arabic script)",
        "he" => " (עברית, Hebrew script)",
        "hi" => " (हिन्दी, Devanagari script)",
        "ru" => " (Русский, Cyrillic script)",
        "th" => " (ไทย, Thai script)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_names() {
        assert_eq!(language_name("ko"), "Korean");
        assert_eq!(language_name("en"), "English");
        assert_eq!(language_name("zh-TW"), "Chinese (Traditional)");
        assert_eq!(language_name("auto"), "Auto-detect");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(language_name("xx"), "xx");
        assert_eq!(language_name("tlh"), "tlh");
    }

    #[test]
    fn test_clarification_for_confusable_scripts() {
        assert!(language_clarification("ko").contains("Hangul"));
        assert!(language_clarification("ja").contains("Kanji"));
        assert!(language_clarification("ru").contains("Cyrillic"));
    }

    #[test]
    fn test_no_clarification_for_most_languages() {
        assert_eq!(language_clarification("fr"), "");
        assert_eq!(language_clarification("de"), "");
        assert_eq!(language_clarification("xx"), "");
    }
}
