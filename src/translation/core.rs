/*!
 * Core translation service implementation.
 *
 * This module contains the main TranslationService struct, which turns unit
 * translation calls into chat completion requests against the configured
 * provider and post-processes the responses.
 */

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app_config::{TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::TranslationError;
use crate::language_utils;
use crate::providers::openai::{ChatRequest, OpenAI};
use super::glossary::Glossary;
use super::prompts::PromptTemplate;
use super::UnitTranslator;

// @const: Parenthetical translator notes some models append to Chinese output
static TRANSLATOR_NOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)（注：.*?）").unwrap()
});

/// Rough tokens-per-character estimate used for output budgets
const CHARS_PER_TOKEN: usize = 4;

/// Estimated token cost of the system prompt
const SYSTEM_PROMPT_TOKENS: u32 = 200;

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// DeepSeek hosted API (OpenAI-compatible)
    DeepSeek {
        /// Client instance
        client: OpenAI,
    },

    /// OpenAI API service
    OpenAI {
        /// Client instance
        client: OpenAI,
    },
}

/// Main translation service for document translation
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: TranslationConfig,

    /// Target language code, for response post-processing
    target_language: String,

    /// Pre-rendered system prompt for body prose
    body_prompt: String,

    /// Pre-rendered system prompt for frontmatter fields
    field_prompt: String,
}

impl TranslationService {
    /// Create a new translation service.
    ///
    /// Resolves the human-readable language names (failing fast on unknown
    /// codes) and pre-renders both system prompts with the glossary.
    pub fn new(
        config: TranslationConfig,
        source_language: &str,
        target_language: &str,
        glossary: Glossary,
    ) -> Result<Self> {
        let source_name = language_utils::get_language_name(source_language)?;
        let target_name = language_utils::get_language_name(target_language)?;

        let client = OpenAI::new_with_config(
            config.get_api_key(),
            config.get_endpoint(),
            config.get_timeout_secs(),
            config.common.retry_count,
            config.common.retry_backoff_ms,
            config.get_rate_limit(),
        );

        let provider = match config.provider {
            ConfigTranslationProvider::DeepSeek => TranslationProviderImpl::DeepSeek { client },
            ConfigTranslationProvider::OpenAI => TranslationProviderImpl::OpenAI { client },
        };

        let body_prompt =
            PromptTemplate::body_translator().render(&source_name, &target_name, &glossary);
        let field_prompt =
            PromptTemplate::field_translator().render(&source_name, &target_name, &glossary);

        Ok(Self {
            provider,
            config,
            target_language: target_language.to_string(),
            body_prompt,
            field_prompt,
        })
    }

    /// Compute the output token budget for an input.
    ///
    /// Derived from the input length, a 1.2 expansion factor and the active
    /// provider's context window; frontmatter fields get a small fixed cap.
    pub fn max_output_tokens(&self, input: &str, is_field: bool) -> u32 {
        let input_tokens = (input.len() / CHARS_PER_TOKEN) as u32;
        let expected_output = (input_tokens as f32 * 1.2) as u32;

        let (max_context, output_cap): (u32, u32) = match self.config.provider {
            ConfigTranslationProvider::DeepSeek => (32_000, 8_000),
            ConfigTranslationProvider::OpenAI => (16_000, 4_000),
        };

        let headroom = max_context.saturating_sub(SYSTEM_PROMPT_TOKENS + input_tokens);
        let recommended = output_cap.min(headroom);

        if is_field {
            return recommended.min(500);
        }

        expected_output.max(1_000).min(recommended)
    }

    /// Strip translator notes when the target language is Chinese.
    fn postprocess(&self, text: &str) -> String {
        if language_utils::language_codes_match(&self.target_language, "zh") {
            strip_translator_notes(text)
        } else {
            text.to_string()
        }
    }

    /// Send one completion request and extract the response text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<String, TranslationError> {
        let request = ChatRequest::new(self.config.get_model())
            .add_message("system", system_prompt)
            .add_message("user", user_text)
            .temperature(self.config.common.temperature)
            .max_tokens(max_tokens);

        let client = match &self.provider {
            TranslationProviderImpl::DeepSeek { client }
            | TranslationProviderImpl::OpenAI { client } => client,
        };

        let response = client.complete_chat(request).await?;
        let text = OpenAI::extract_text_from_response(&response);

        if text.trim().is_empty() {
            return Err(TranslationError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl UnitTranslator for TranslationService {
    async fn translate_prose(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let user_text = format!(
            "Please translate the following content while preserving all formatting, spacing, and line breaks:\n\n{}",
            text
        );
        let translated = self
            .complete(&self.body_prompt, &user_text, self.max_output_tokens(text, false))
            .await?;

        Ok(self.postprocess(translated.trim()))
    }

    async fn translate_field(&self, text: &str) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let user_text = format!("Please translate: {}", text);
        let translated = self
            .complete(&self.field_prompt, &user_text, self.max_output_tokens(text, true))
            .await?;

        Ok(self.postprocess(translated.trim()))
    }
}

/// Remove parenthetical `（注：…）` translator annotations from a completion.
pub fn strip_translator_notes(text: &str) -> String {
    TRANSLATOR_NOTE_REGEX.replace_all(text, "").to_string()
}
