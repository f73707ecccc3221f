/*!
 * Translation pipeline for Markdown documents.
 *
 * This module contains the functionality for translating document bodies and
 * frontmatter through an AI completion provider. It is split into several
 * submodules:
 *
 * - `core`: Translation service speaking to the configured provider
 * - `body`: Body orchestrator walking segments and units in order
 * - `frontmatter`: Field-by-field frontmatter translation policy
 * - `glossary`: Fixed source-to-target terminology
 * - `prompts`: Prompt templates and rendering
 */

use async_trait::async_trait;

use crate::errors::TranslationError;

// Re-export main types for easier usage
pub use self::body::{BodyOutcome, BodyTranslator};
pub use self::core::TranslationService;
pub use self::frontmatter::{FrontmatterOutcome, FrontmatterTranslator};
pub use self::glossary::Glossary;
pub use self::prompts::PromptTemplate;

// Submodules
pub mod body;
pub mod core;
pub mod frontmatter;
pub mod glossary;
pub mod prompts;

/// The translation collaborator seam.
///
/// Everything above this trait only observes "succeeds with text" or "fails
/// with an error"; transport, retries and rate limiting live behind it.
#[async_trait]
pub trait UnitTranslator: Send + Sync {
    /// Translate a prose unit of body text.
    async fn translate_prose(&self, text: &str) -> Result<String, TranslationError>;

    /// Translate a short frontmatter field value.
    async fn translate_field(&self, text: &str) -> Result<String, TranslationError>;
}

/// A unit whose translation call failed.
///
/// The original text is kept in the output; the failure is only reported so
/// callers can surface it. One failed unit never aborts a document.
#[derive(Debug)]
pub struct UnitFailure {
    /// Start of the unit's original text, for log context
    pub excerpt: String,

    /// The underlying error
    pub error: TranslationError,
}

impl UnitFailure {
    /// Record a failure for a unit, truncating the text to an excerpt.
    pub fn new(text: &str, error: TranslationError) -> Self {
        const EXCERPT_CHARS: usize = 80;
        let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        UnitFailure { excerpt, error }
    }
}
