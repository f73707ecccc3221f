/*!
 * Fixed source-to-target terminology enforced during translation.
 *
 * The glossary file is JSON, grouped by category:
 *
 * ```json
 * { "kubernetes": { "Pod": "Pod", "Deployment": "部署" } }
 * ```
 *
 * Categories are flattened into one mapping before use. The glossary is
 * immutable once loaded and only ever read when building prompts.
 */

use indexmap::IndexMap;
use log::{error, info, warn};
use std::path::Path;

/// Read-only source-term to target-term mapping.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    terms: IndexMap<String, String>,
}

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a glossary from term pairs, later duplicates winning.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Glossary { terms: terms.into_iter().collect() }
    }

    /// Load a glossary file, flattening all categories.
    ///
    /// A missing file is a non-fatal condition: translation proceeds with an
    /// empty glossary. A malformed file is logged and likewise yields an
    /// empty glossary.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!("Glossary file does not exist: {:?}", path);
            return Self::new();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                error!("Failed to read glossary file {:?}: {}", path, e);
                return Self::new();
            }
        };

        match serde_json::from_str::<IndexMap<String, IndexMap<String, String>>>(&content) {
            Ok(categories) => {
                let mut terms = IndexMap::new();
                for (_category, category_terms) in categories {
                    terms.extend(category_terms);
                }
                info!("Loaded {} glossary term(s)", terms.len());
                Glossary { terms }
            }
            Err(e) => {
                error!("Failed to parse glossary file {:?}: {}", path, e);
                Self::new()
            }
        }
    }

    /// Whether the glossary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Iterate term pairs in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(source, target)| (source.as_str(), target.as_str()))
    }

    /// Render the glossary as `source -> target` prompt lines.
    pub fn prompt_lines(&self) -> String {
        self.terms
            .iter()
            .map(|(source, target)| format!("- {} -> {}", source, target))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
