/*!
 * # mdxlate - Markdown document translation with AI
 *
 * A Rust library for translating Markdown/MDX documentation between
 * languages using AI completion providers, while preserving document
 * structure: frontmatter metadata, headings, lists and fenced code blocks
 * survive untranslated or structurally intact.
 *
 * ## Features
 *
 * - Split document bodies into code and prose segments
 * - Chunk prose under a length budget along paragraph and sentence boundaries
 * - Translate through OpenAI-compatible providers (DeepSeek, OpenAI)
 * - Field-by-field frontmatter translation with a pass-through policy
 * - Glossary-enforced terminology
 * - Directory mirroring with skip lists and per-document error isolation
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Frontmatter parsing and the document model
 * - `segmenter`: Structural splitting into code and prose segments
 * - `chunker`: Prose chunking under a length budget
 * - `translation`: AI-powered translation services:
 *   - `translation::core`: Translation service over the configured provider
 *   - `translation::body`: Body orchestrator
 *   - `translation::frontmatter`: Frontmatter field policy
 *   - `translation::glossary`: Terminology mapping
 *   - `translation::prompts`: Prompt templates
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for LLM providers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod chunker;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod providers;
pub mod segmenter;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use chunker::{Unit, UnitKind};
pub use document::{FieldValue, Frontmatter, MarkdownDocument};
pub use errors::{AppError, ProviderError, TranslationError};
pub use segmenter::{Segment, SegmentKind};
pub use translation::{
    BodyTranslator, FrontmatterTranslator, Glossary, TranslationService, UnitTranslator,
};
