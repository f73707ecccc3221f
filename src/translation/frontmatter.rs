/*!
 * Field-by-field frontmatter translation.
 *
 * Every field falls into exactly one of three disjoint sets: display fields
 * whose string value is translated, metadata fields passed through verbatim,
 * and container fields (sequences, nested mappings) processed recursively.
 * Fields not matching any known name default to pass-through. A field whose
 * translation call fails keeps its original value.
 */

use std::future::Future;
use std::pin::Pin;

use indexmap::IndexMap;
use log::warn;

use crate::document::{FieldValue, Frontmatter};
use super::{UnitFailure, UnitTranslator};

// @const: String-valued display fields that get translated
const TRANSLATABLE_FIELDS: [&str; 8] = [
    "title",
    "description",
    "sidebar_label",
    "sidebar_position_name",
    "summary",
    "abstract",
    "excerpt",
    "meta_description",
];

// @const: Identifier and structured-metadata fields that never get translated
const PRESERVED_FIELDS: [&str; 15] = [
    "id",
    "slug",
    "sidebar_position",
    "hide_title",
    "hide_table_of_contents",
    "draft",
    "unlisted",
    "date",
    "authors",
    "tags",
    "keywords",
    "image",
    "custom_edit_url",
    "pagination_prev",
    "pagination_next",
];

/// Result of translating one frontmatter mapping.
#[derive(Debug)]
pub struct FrontmatterOutcome {
    /// The translated frontmatter, original key order preserved
    pub frontmatter: Frontmatter,

    /// Fields whose translation call failed and kept their original value
    pub failures: Vec<UnitFailure>,
}

/// Orchestrates frontmatter translation over a [`UnitTranslator`] collaborator.
pub struct FrontmatterTranslator<'a> {
    translator: &'a dyn UnitTranslator,
}

impl<'a> FrontmatterTranslator<'a> {
    /// Create a new frontmatter translator.
    pub fn new(translator: &'a dyn UnitTranslator) -> Self {
        Self { translator }
    }

    /// True for a known display field whose string value is translated.
    pub fn is_translatable_field(name: &str) -> bool {
        TRANSLATABLE_FIELDS.contains(&name)
    }

    /// True for a known metadata field that is always passed through.
    pub fn is_preserved_field(name: &str) -> bool {
        PRESERVED_FIELDS.contains(&name)
    }

    /// Translate a frontmatter mapping field by field.
    pub async fn translate(&self, frontmatter: &Frontmatter) -> FrontmatterOutcome {
        let mut failures = Vec::new();
        let mut translated = Frontmatter::new();

        for (key, value) in frontmatter {
            let new_value = self.translate_entry(key, value, &mut failures).await;
            translated.insert(key.clone(), new_value);
        }

        FrontmatterOutcome { frontmatter: translated, failures }
    }

    /// Apply the top-level field policy to one entry.
    async fn translate_entry(
        &self,
        key: &str,
        value: &FieldValue,
        failures: &mut Vec<UnitFailure>,
    ) -> FieldValue {
        if Self::is_preserved_field(key) {
            return value.clone();
        }

        match value {
            FieldValue::String(text)
                if Self::is_translatable_field(key) && !text.trim().is_empty() =>
            {
                FieldValue::String(self.translate_scalar(text, failures).await)
            }
            FieldValue::Sequence(items) => {
                FieldValue::Sequence(self.translate_sequence(items, failures).await)
            }
            FieldValue::Mapping(map) => {
                FieldValue::Mapping(self.translate_mapping(map, failures).await)
            }
            other => other.clone(),
        }
    }

    /// Translate each element of a sequence.
    async fn translate_sequence(
        &self,
        items: &[FieldValue],
        failures: &mut Vec<UnitFailure>,
    ) -> Vec<FieldValue> {
        let mut result = Vec::with_capacity(items.len());
        for item in items {
            result.push(self.translate_value(item, failures).await);
        }
        result
    }

    /// Translate each value of a nested mapping.
    async fn translate_mapping(
        &self,
        map: &IndexMap<String, FieldValue>,
        failures: &mut Vec<UnitFailure>,
    ) -> IndexMap<String, FieldValue> {
        let mut result = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            result.insert(key.clone(), self.translate_value(value, failures).await);
        }
        result
    }

    /// Recursion rule set for values inside containers: every non-empty
    /// string is translated, containers recurse, scalars pass through.
    ///
    /// Boxed because the sum type is recursive.
    fn translate_value<'s>(
        &'s self,
        value: &'s FieldValue,
        failures: &'s mut Vec<UnitFailure>,
    ) -> Pin<Box<dyn Future<Output = FieldValue> + Send + 's>> {
        Box::pin(async move {
            match value {
                FieldValue::String(text) if !text.trim().is_empty() => {
                    FieldValue::String(self.translate_scalar(text, failures).await)
                }
                FieldValue::Sequence(items) => {
                    FieldValue::Sequence(self.translate_sequence(items, failures).await)
                }
                FieldValue::Mapping(map) => {
                    FieldValue::Mapping(self.translate_mapping(map, failures).await)
                }
                other => other.clone(),
            }
        })
    }

    /// Translate a single string value, keeping the original on failure.
    async fn translate_scalar(&self, text: &str, failures: &mut Vec<UnitFailure>) -> String {
        match self.translator.translate_field(text).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation failed for a frontmatter field, keeping original value: {}", e);
                failures.push(UnitFailure::new(text, e));
                text.to_string()
            }
        }
    }
}
