//! Language detection with an explicit "unknown" fallback.

use annotext::config::AnalysisSettings;
use annotext::provider::UNKNOWN_LANGUAGE;
use whatlang::Lang;

/// Detect the language of `text` as an ISO 639-1 tag where one exists.
///
/// Text shorter than the configured minimum, or text the detector cannot
/// classify reliably, gets the `"unknown"` sentinel rather than an error;
/// analysis proceeds either way.
pub fn detect_language(text: &str, settings: &AnalysisSettings) -> String {
    if text.chars().count() < settings.min_language_detect_chars {
        tracing::debug!(
            len = text.chars().count(),
            min = settings.min_language_detect_chars,
            "text too short for language detection"
        );
        return UNKNOWN_LANGUAGE.to_string();
    }

    match whatlang::detect(text) {
        Some(info) if info.is_reliable() => iso_tag(info.lang()).to_string(),
        Some(_) => {
            tracing::debug!("language detection unreliable, tagging as unknown");
            UNKNOWN_LANGUAGE.to_string()
        }
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}

/// Map whatlang's ISO 639-3 codes to the 639-1 tags used by the rest of the
/// system for the languages we care about; pass the 639-3 code through for
/// everything else.
fn iso_tag(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        Lang::Ara => "ar",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let settings = AnalysisSettings::default();
        let lang = detect_language(
            "The quick brown fox jumps over the lazy dog while the farmer watches from the field.",
            &settings,
        );
        assert_eq!(lang, "en");
    }

    #[test]
    fn test_detects_spanish() {
        let settings = AnalysisSettings::default();
        let lang = detect_language(
            "El rápido zorro marrón salta sobre el perro perezoso mientras el granjero observa desde el campo.",
            &settings,
        );
        assert_eq!(lang, "es");
    }

    #[test]
    fn test_short_text_falls_back_to_unknown() {
        let settings = AnalysisSettings::default();
        assert_eq!(detect_language("hi", &settings), UNKNOWN_LANGUAGE);
        assert_eq!(detect_language("", &settings), UNKNOWN_LANGUAGE);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let settings = AnalysisSettings {
            min_language_detect_chars: 500,
            ..Default::default()
        };
        let lang = detect_language("This sentence is long enough normally.", &settings);
        assert_eq!(lang, UNKNOWN_LANGUAGE);
    }
}
