use anyhow::{Context, Result};
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::document::{FieldValue, MarkdownDocument};
use crate::file_utils::FileManager;
use crate::translation::{
    BodyTranslator, FrontmatterTranslator, Glossary, TranslationService, UnitTranslator,
};

// @module: Application controller for document translation

/// Outcome of processing a single document file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The document was translated and written
    Translated {
        /// Units that kept their original text after a failed call
        soft_failures: usize,
    },
    /// An output already existed and overriding is disabled
    SkippedExisting,
}

/// Main application controller for document translation
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Translation service built from the configuration
    service: TranslationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let glossary = Glossary::load(&config.glossary_path);
        let service = TranslationService::new(
            config.translation.clone(),
            &config.source_language,
            &config.target_language,
            glossary,
        )?;

        Ok(Self { config, service })
    }

    /// Run the main workflow for a single input document.
    pub async fn run(&self, input_file: PathBuf, output_file: PathBuf) -> Result<()> {
        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let start_time = Instant::now();
        match self.translate_document_file(&input_file, &output_file).await? {
            FileOutcome::Translated { soft_failures } => {
                if soft_failures > 0 {
                    warn!(
                        "Translation completed with {} unit(s) kept in the source language",
                        soft_failures
                    );
                }
                info!(
                    "Translation completed in {:.1}s, output file: {:?}",
                    start_time.elapsed().as_secs_f64(),
                    output_file
                );
            }
            FileOutcome::SkippedExisting => {
                warn!("Skipping file, translation already exists (enable override to re-translate)");
            }
        }

        Ok(())
    }

    /// Run the main workflow for a whole directory tree.
    ///
    /// The input tree is mirrored into the output directory. Documents are
    /// processed strictly sequentially; one document's failure is logged and
    /// counted, never aborting the batch.
    pub async fn run_folder(&self, input_dir: PathBuf, output_dir: PathBuf) -> Result<()> {
        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }
        FileManager::ensure_dir(&output_dir)?;

        let start_time = Instant::now();

        // Category sidecar files first, as the original docs tree expects
        let category_files = FileManager::find_category_files(&input_dir)?;
        for category_file in &category_files {
            let output_file =
                FileManager::mirrored_output_path(&input_dir, category_file, &output_dir)?;
            if output_file.exists() && !self.config.override_existing {
                debug!("Skipping existing category file: {:?}", category_file);
                continue;
            }
            if let Err(e) = self.translate_category_file(category_file, &output_file).await {
                error!("Failed to process category file {:?}: {}", category_file, e);
                // Fall back to a verbatim copy so the output tree stays complete
                if let Err(copy_err) = FileManager::copy_file(category_file, &output_file) {
                    error!("Failed to copy category file {:?}: {}", category_file, copy_err);
                }
            }
        }

        let documents = FileManager::find_documents(&input_dir)?;
        if documents.is_empty() {
            warn!("No Markdown documents found in directory {:?}", input_dir);
            return Ok(());
        }
        info!("Found {} document(s) to process", documents.len());

        let progress = ProgressBar::new(documents.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );

        let mut translated = 0usize;
        let mut skipped = 0usize;
        let mut copied = 0usize;
        let mut failed = 0usize;
        let mut soft_failures_total = 0usize;

        for document in &documents {
            let relative = document.strip_prefix(&input_dir).unwrap_or(document);
            progress.set_message(relative.display().to_string());

            let output_file =
                FileManager::mirrored_output_path(&input_dir, document, &output_dir)?;

            if FileManager::path_matches_any(relative, &self.config.skip_path_substrings) {
                debug!("Copying verbatim (skip list): {:?}", relative);
                match FileManager::copy_file(document, &output_file) {
                    Ok(()) => copied += 1,
                    Err(e) => {
                        error!("Failed to copy {:?}: {}", document, e);
                        failed += 1;
                    }
                }
                progress.inc(1);
                continue;
            }

            match self.translate_document_file(document, &output_file).await {
                Ok(FileOutcome::Translated { soft_failures }) => {
                    translated += 1;
                    soft_failures_total += soft_failures;
                }
                Ok(FileOutcome::SkippedExisting) => skipped += 1,
                Err(e) => {
                    error!("Failed to translate {:?}: {}", document, e);
                    failed += 1;
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();

        info!(
            "Processed {} document(s) in {:.1}s: {} translated, {} skipped, {} copied, {} failed",
            documents.len(),
            start_time.elapsed().as_secs_f64(),
            translated,
            skipped,
            copied,
            failed
        );
        if soft_failures_total > 0 {
            warn!(
                "{} unit(s) across the batch kept their original text after failed calls",
                soft_failures_total
            );
        }

        Ok(())
    }

    /// Translate one document file to its output path.
    pub async fn translate_document_file(
        &self,
        input_file: &Path,
        output_file: &Path,
    ) -> Result<FileOutcome> {
        if output_file.exists() && !self.config.override_existing {
            debug!("File already translated, skipping: {:?}", input_file);
            return Ok(FileOutcome::SkippedExisting);
        }

        debug!("Translating file: {:?}", input_file);
        let content = FileManager::read_to_string(input_file)?;
        let document = MarkdownDocument::parse(&content);

        let frontmatter_outcome =
            FrontmatterTranslator::new(&self.service).translate(&document.frontmatter).await;

        let body_translator = BodyTranslator::new(
            &self.service,
            self.config.translation.common.max_direct_translation_length,
            self.config.translation.common.max_chunk_length,
        );
        let body_outcome = body_translator.translate_body(&document.body).await;

        let soft_failures = frontmatter_outcome.failures.len() + body_outcome.failures.len();

        let translated = MarkdownDocument {
            frontmatter: frontmatter_outcome.frontmatter,
            body: body_outcome.text,
        };
        FileManager::write_to_file(output_file, &translated.render()?)?;

        Ok(FileOutcome::Translated { soft_failures })
    }

    /// Translate the label of a `_category_` sidecar file.
    pub async fn translate_category_file(
        &self,
        input_file: &Path,
        output_file: &Path,
    ) -> Result<()> {
        let content = FileManager::read_to_string(input_file)?;
        let mut data: IndexMap<String, FieldValue> = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse category file: {:?}", input_file))?;

        let label = match data.get("label") {
            Some(FieldValue::String(label)) if !label.trim().is_empty() => Some(label.clone()),
            _ => None,
        };

        if let Some(label) = label {
            match self.service.translate_field(&label).await {
                Ok(translated) => {
                    info!("Translated category label '{}' -> '{}'", label, translated);
                    data.insert("label".to_string(), FieldValue::String(translated));
                }
                Err(e) => {
                    warn!("Failed to translate category label '{}': {}", label, e);
                }
            }
        }

        let yaml = serde_yaml::to_string(&data)
            .with_context(|| format!("Failed to serialize category file: {:?}", input_file))?;
        FileManager::write_to_file(output_file, &yaml)
    }
}
