/*!
 * Common test utilities for the mdxlate test suite
 */

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use tempfile::TempDir;

use mdxlate::errors::{ProviderError, TranslationError};
use mdxlate::translation::UnitTranslator;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Translator that returns every unit unchanged.
pub struct IdentityTranslator;

#[async_trait]
impl UnitTranslator for IdentityTranslator {
    async fn translate_prose(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }

    async fn translate_field(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

/// Translator that prefixes every unit, making translated spans visible.
pub struct MarkingTranslator;

impl MarkingTranslator {
    pub const MARK: &'static str = "[zh]";
}

#[async_trait]
impl UnitTranslator for MarkingTranslator {
    async fn translate_prose(&self, text: &str) -> Result<String, TranslationError> {
        Ok(format!("{}{}", Self::MARK, text))
    }

    async fn translate_field(&self, text: &str) -> Result<String, TranslationError> {
        Ok(format!("{}{}", Self::MARK, text))
    }
}

/// Translator that always fails.
pub struct FailingTranslator;

#[async_trait]
impl UnitTranslator for FailingTranslator {
    async fn translate_prose(&self, _text: &str) -> Result<String, TranslationError> {
        Err(TranslationError::Provider(ProviderError::RequestFailed("always failing".to_string())))
    }

    async fn translate_field(&self, _text: &str) -> Result<String, TranslationError> {
        Err(TranslationError::Provider(ProviderError::RequestFailed("always failing".to_string())))
    }
}

/// Translator that records calls and fails on scripted call indices.
///
/// Successful calls are prefixed like [`MarkingTranslator`].
pub struct ScriptedTranslator {
    calls: Mutex<Vec<String>>,
    fail_on: Vec<usize>,
}

impl ScriptedTranslator {
    /// Create a translator failing on the given 0-based call indices.
    pub fn failing_on(fail_on: Vec<usize>) -> Self {
        Self { calls: Mutex::new(Vec::new()), fail_on }
    }

    /// The unit texts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, text: &str) -> Result<String, TranslationError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(text.to_string());
            calls.len() - 1
        };

        if self.fail_on.contains(&index) {
            return Err(TranslationError::Provider(ProviderError::RequestFailed(format!(
                "scripted failure on call {}",
                index
            ))));
        }
        Ok(format!("{}{}", MarkingTranslator::MARK, text))
    }
}

#[async_trait]
impl UnitTranslator for ScriptedTranslator {
    async fn translate_prose(&self, text: &str) -> Result<String, TranslationError> {
        self.record(text)
    }

    async fn translate_field(&self, text: &str) -> Result<String, TranslationError> {
        self.record(text)
    }
}
