/*!
 * Tests for the translation service helpers
 */

use mdxlate::app_config::{TranslationConfig, TranslationProvider};
use mdxlate::translation::core::strip_translator_notes;
use mdxlate::translation::{Glossary, TranslationService};

fn service_for(provider: TranslationProvider) -> TranslationService {
    let mut config = TranslationConfig::default();
    config.provider = provider;
    TranslationService::new(config, "en", "zh", Glossary::new()).unwrap()
}

#[test]
fn test_new_withUnknownLanguage_shouldFail() {
    let config = TranslationConfig::default();
    assert!(TranslationService::new(config, "en", "xx", Glossary::new()).is_err());
}

#[test]
fn test_stripTranslatorNotes_withAnnotations_shouldRemoveThem() {
    let text = "这是翻译结果（注：保留原文格式）。";
    assert_eq!(strip_translator_notes(text), "这是翻译结果。");
}

#[test]
fn test_stripTranslatorNotes_withMultilineAnnotation_shouldRemoveAcrossLines() {
    let text = "第一行（注：这个注释\n跨越多行）第二行";
    assert_eq!(strip_translator_notes(text), "第一行第二行");
}

#[test]
fn test_stripTranslatorNotes_withoutAnnotations_shouldReturnUnchanged() {
    let text = "No notes in here (just plain parentheses).";
    assert_eq!(strip_translator_notes(text), text);
}

#[test]
fn test_maxOutputTokens_withFieldInput_shouldCapAtFieldLimit() {
    let service = service_for(TranslationProvider::DeepSeek);
    let tokens = service.max_output_tokens("A short title", true);
    assert!(tokens <= 500);
    assert!(tokens > 0);
}

#[test]
fn test_maxOutputTokens_withSmallBodyInput_shouldUseMinimumFloor() {
    let service = service_for(TranslationProvider::DeepSeek);
    let tokens = service.max_output_tokens("One sentence.", false);
    assert_eq!(tokens, 1_000);
}

#[test]
fn test_maxOutputTokens_withLargeBodyInput_shouldRespectProviderCap() {
    let service = service_for(TranslationProvider::DeepSeek);
    let large_input = "x".repeat(40_000);
    let tokens = service.max_output_tokens(&large_input, false);
    assert!(tokens <= 8_000);

    let service = service_for(TranslationProvider::OpenAI);
    let tokens = service.max_output_tokens(&large_input, false);
    assert!(tokens <= 4_000);
}
