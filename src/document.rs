use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

// @module: Markdown document model with frontmatter metadata

/// A frontmatter value.
///
/// Closed recursive sum type covering everything the YAML metadata block can
/// hold; no reflection, every variant handled exhaustively where it matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null
    Null,
    /// Boolean flag
    Bool(bool),
    /// Integer or float
    Number(serde_yaml::Number),
    /// Text value
    String(String),
    /// Ordered list of values
    Sequence(Vec<FieldValue>),
    /// Nested mapping, key order preserved
    Mapping(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// Borrow the inner string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Ordered frontmatter mapping.
pub type Frontmatter = IndexMap<String, FieldValue>;

/// A parsed Markdown/MDX document: frontmatter metadata plus prose body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownDocument {
    /// Frontmatter key/value pairs in source order; empty when absent
    pub frontmatter: Frontmatter,

    /// Document body following the frontmatter block
    pub body: String,
}

impl MarkdownDocument {
    /// Wrap raw text as a body-only document.
    fn body_only(raw: &str) -> Self {
        MarkdownDocument { frontmatter: Frontmatter::new(), body: raw.to_string() }
    }

    /// Parse raw document text.
    ///
    /// The frontmatter block is delimited by a leading `---` line and the
    /// next `---` line. Malformed or unparsable frontmatter recovers to
    /// "no frontmatter": the full input becomes the body and processing
    /// continues.
    pub fn parse(raw: &str) -> Self {
        let Some(after) = raw.strip_prefix("---") else {
            return Self::body_only(raw);
        };

        let Some(end) = after.find("\n---\n") else {
            return Self::body_only(raw);
        };

        let block = &after[..end];
        let body = &after[end + "\n---\n".len()..];

        if block.trim().is_empty() {
            return MarkdownDocument { frontmatter: Frontmatter::new(), body: body.to_string() };
        }

        match serde_yaml::from_str::<Frontmatter>(block) {
            Ok(frontmatter) => MarkdownDocument { frontmatter, body: body.to_string() },
            Err(e) => {
                warn!("Failed to parse frontmatter, treating document as plain body: {}", e);
                Self::body_only(raw)
            }
        }
    }

    /// Whether the document carries a frontmatter block.
    pub fn has_frontmatter(&self) -> bool {
        !self.frontmatter.is_empty()
    }

    /// Render the document back to text, frontmatter first and in the
    /// original key order.
    pub fn render(&self) -> Result<String> {
        if self.frontmatter.is_empty() {
            return Ok(self.body.clone());
        }

        let yaml = serde_yaml::to_string(&self.frontmatter)
            .context("Failed to serialize frontmatter")?;
        Ok(format!("---\n{}---\n{}", yaml, self.body))
    }
}
