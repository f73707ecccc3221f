/*!
 * Body orchestrator: walks a document body in order, sends prose to the
 * translation collaborator and reassembles the result.
 *
 * Code segments are never translated and are reinserted byte-for-byte.
 * Processing is strictly sequential, so reassembly is a plain append in
 * visitation order. A failed unit keeps its original text; failures are
 * collected in the outcome rather than propagated.
 */

use log::{debug, warn};

use crate::chunker;
use crate::segmenter::{self, SegmentKind};
use super::{UnitFailure, UnitTranslator};

/// Result of translating one document body.
#[derive(Debug)]
pub struct BodyOutcome {
    /// The reassembled body text
    pub text: String,

    /// Units whose translation call failed and kept their original text
    pub failures: Vec<UnitFailure>,
}

impl BodyOutcome {
    /// Whether every unit translated successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates body translation over a [`UnitTranslator`] collaborator.
pub struct BodyTranslator<'a> {
    translator: &'a dyn UnitTranslator,
    max_direct_translation_length: usize,
    max_chunk_length: usize,
}

impl<'a> BodyTranslator<'a> {
    /// Create a new body translator.
    pub fn new(
        translator: &'a dyn UnitTranslator,
        max_direct_translation_length: usize,
        max_chunk_length: usize,
    ) -> Self {
        Self { translator, max_direct_translation_length, max_chunk_length }
    }

    /// Translate a whole document body.
    ///
    /// Short bodies go through one structural split. Longer bodies are first
    /// divided along level-2 headings so each translation payload stays
    /// bounded, and the section results rejoin with a blank line.
    pub async fn translate_body(&self, body: &str) -> BodyOutcome {
        if body.trim().is_empty() {
            return BodyOutcome { text: body.to_string(), failures: Vec::new() };
        }

        let mut failures = Vec::new();

        if body.len() < self.max_direct_translation_length {
            debug!("body is short, translating directly");
            let text = self.translate_segments(body, &mut failures).await;
            return BodyOutcome { text, failures };
        }

        let sections = chunker::split_sections(body);
        debug!("translating {} section chunk(s)", sections.len());

        let mut translated = Vec::with_capacity(sections.len());
        for section in &sections {
            translated.push(self.translate_segments(section, &mut failures).await);
        }

        BodyOutcome { text: translated.join("\n\n"), failures }
    }

    /// Split a span structurally and translate its prose segments in order.
    async fn translate_segments(&self, text: &str, failures: &mut Vec<UnitFailure>) -> String {
        let segments = segmenter::split(text);
        let mut output = String::with_capacity(text.len());

        for segment in &segments {
            match segment.kind {
                SegmentKind::Code => output.push_str(&segment.text),
                SegmentKind::Prose => {
                    output.push_str(&self.translate_prose_segment(&segment.text, failures).await);
                }
            }
        }

        output
    }

    /// Translate one prose segment, fine-chunking it when over budget.
    async fn translate_prose_segment(
        &self,
        text: &str,
        failures: &mut Vec<UnitFailure>,
    ) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        if text.len() <= self.max_chunk_length {
            // Send the trimmed span; its edge whitespace is reapplied from
            // the original on reassembly.
            let translated = self.translate_unit(text.trim(), failures).await;
            return restore_edge_whitespace(text, &translated);
        }

        let units = chunker::split_units(text, self.max_chunk_length);
        let mut parts = Vec::with_capacity(units.len());
        for unit in &units {
            if unit.is_translatable() {
                parts.push(self.translate_unit(&unit.text, failures).await);
            } else {
                parts.push(unit.text.clone());
            }
        }

        restore_edge_whitespace(text, &parts.join("\n"))
    }

    /// Translate a single unit, keeping the original text on failure.
    async fn translate_unit(&self, text: &str, failures: &mut Vec<UnitFailure>) -> String {
        match self.translator.translate_prose(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed for a unit, keeping original text: {}", e);
                failures.push(UnitFailure::new(text, e));
                text.to_string()
            }
        }
    }
}

/// Re-apply the original span's leading and trailing whitespace to a
/// translated replacement.
///
/// Models routinely trim their output; the whitespace at segment edges is
/// what keeps prose from colliding with adjacent code fences on reassembly.
fn restore_edge_whitespace(original: &str, translated: &str) -> String {
    if original.trim().is_empty() {
        return original.to_string();
    }

    let leading_len = original.len() - original.trim_start().len();
    let trailing_len = original.len() - original.trim_end().len();
    let leading = &original[..leading_len];
    let trailing = &original[original.len() - trailing_len..];

    format!("{}{}{}", leading, translated.trim(), trailing)
}
