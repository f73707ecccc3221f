use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// mdxlate identifies languages by ISO 639-1 (2-letter) or ISO 639-3
/// (3-letter) codes on the command line and in configuration, and needs
/// their English names when building translation prompts.
/// Look up a language from a 2- or 3-letter code.
fn lookup(code: &str) -> Option<Language> {
    let normalized = code.trim().to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => None,
    }
}

/// Validate that a language code is a known ISO 639 code.
pub fn validate_language_code(code: &str) -> Result<()> {
    lookup(code)
        .map(|_| ())
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Get the English language name for a code, for use in prompts.
pub fn get_language_name(code: &str) -> Result<String> {
    let language = lookup(code)
        .ok_or_else(|| anyhow!("Unsupported language code: {}", code))?;
    Ok(language.to_name().to_string())
}

/// Check if two language codes refer to the same language.
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (lookup(code1), lookup(code2)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
