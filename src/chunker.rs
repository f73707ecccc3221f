use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

use crate::segmenter::{self, SegmentKind};

// @module: Prose chunking under a length budget

// @const: Level-2 heading line ("## " exactly, deeper headings excluded)
static SECTION_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^## .+$").unwrap()
});

// @const: Sentence-ending punctuation followed by whitespace or end-of-text
static SENTENCE_BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+(\s+|$)").unwrap()
});

// @const: Ordered list item prefix ("1. ", "42. ")
static ORDERED_ITEM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\s").unwrap()
});

/// Classification of a chunked unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Translatable prose
    Prose,
    /// A fenced code block, passed through verbatim
    Code,
    /// A blank line kept to preserve vertical spacing
    Blank,
}

/// A translation-sized subdivision of a prose segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    // @field: Unit classification
    pub kind: UnitKind,

    // @field: Unit text
    pub text: String,
}

impl Unit {
    /// Create a prose unit.
    pub fn prose(text: impl Into<String>) -> Self {
        Unit { kind: UnitKind::Prose, text: text.into() }
    }

    /// Create a code unit.
    pub fn code(text: impl Into<String>) -> Self {
        Unit { kind: UnitKind::Code, text: text.into() }
    }

    /// Create a blank unit.
    pub fn blank() -> Self {
        Unit { kind: UnitKind::Blank, text: String::new() }
    }

    /// Whether this unit should be sent to the translation backend.
    ///
    /// Code blocks and blank spacers are passed through verbatim.
    pub fn is_translatable(&self) -> bool {
        self.kind == UnitKind::Prose && !self.text.trim().is_empty()
    }
}

/// True for a level-2 section heading line.
pub fn is_section_heading(line: &str) -> bool {
    SECTION_HEADING_REGEX.is_match(line)
}

/// True for any heading line.
pub fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

/// True for a bulleted or numbered list item line.
pub fn is_list_item(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('*') || ORDERED_ITEM_REGEX.is_match(line)
}

/// True for a block quote line.
pub fn is_block_quote(line: &str) -> bool {
    line.starts_with('>')
}

/// True for a table row line.
pub fn is_table_row(line: &str) -> bool {
    line.starts_with('|')
}

/// True for a line that must stay an atomic unit: headings, list items,
/// block quotes and table rows are never merged into a surrounding sentence.
pub fn is_structural_line(line: &str) -> bool {
    is_heading(line) || is_list_item(line) || is_block_quote(line) || is_table_row(line)
}

/// True when a span is a complete fenced code block.
pub fn is_fenced_block(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.len() >= 6 && trimmed.starts_with("```") && trimmed.ends_with("```")
}

/// Split text into sentences at punctuation boundaries.
///
/// Boundaries are purely lexical: `.`, `!` or `?` followed by whitespace or
/// the end of the text. No grammar is involved, so abbreviations split too.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for m in SENTENCE_BOUNDARY_REGEX.find_iter(text) {
        let piece = text[last_end..m.end()].trim();
        if !piece.is_empty() {
            sentences.push(piece.to_string());
        }
        last_end = m.end();
    }

    let rest = text[last_end..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }

    sentences
}

/// Split a document body into section chunks along level-2 headings.
///
/// Each heading line starts a new chunk that includes the heading; text
/// before the first heading forms its own chunk. Used to bound per-call
/// payload size for large documents before finer splitting.
pub fn split_sections(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return vec![body.to_string()];
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in body.lines() {
        if is_section_heading(line) && !current.is_empty() {
            chunks.push(current.join("\n"));
            current.clear();
        }
        current.push(line);
    }

    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    if chunks.is_empty() {
        return vec![body.to_string()];
    }

    debug!("body split into {} section chunk(s)", chunks.len());
    chunks
}

/// Split prose into budget-sized chunks along paragraph, then sentence
/// boundaries.
///
/// Blank-line separated paragraphs are greedily packed up to `max_length`.
/// A paragraph over budget is split into sentences and the sentences packed
/// the same way. A single sentence with no boundary under the budget is
/// returned as one oversized chunk rather than failing.
pub fn split_paragraphs(text: &str, max_length: usize) -> Vec<String> {
    if text.len() <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for paragraph in text.split("\n\n") {
        if paragraph.len() > max_length {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current).trim().to_string());
            }

            let mut sentence_chunk = String::new();
            for sentence in split_sentences(paragraph) {
                let joined_len =
                    sentence_chunk.len() + sentence.len() + usize::from(!sentence_chunk.is_empty());
                if joined_len <= max_length {
                    if !sentence_chunk.is_empty() {
                        sentence_chunk.push(' ');
                    }
                    sentence_chunk.push_str(&sentence);
                } else {
                    if !sentence_chunk.is_empty() {
                        chunks.push(sentence_chunk.trim().to_string());
                    }
                    sentence_chunk = sentence;
                }
            }
            if !sentence_chunk.is_empty() {
                chunks.push(sentence_chunk.trim().to_string());
            }
        } else {
            let joined_len =
                current.len() + paragraph.len() + if current.is_empty() { 0 } else { 2 };
            if joined_len <= max_length {
                if !current.is_empty() {
                    current.push_str("\n\n");
                }
                current.push_str(paragraph);
            } else {
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current).trim().to_string());
                }
                current = paragraph.to_string();
            }
        }
    }

    if !current.is_empty() {
        chunks.push(current.trim().to_string());
    }

    chunks.retain(|chunk| !chunk.trim().is_empty());
    debug!("prose split into {} paragraph chunk(s)", chunks.len());
    chunks
}

/// Split a chunk into translation units, keeping structure atomic.
///
/// Fenced code blocks become single untranslatable units even when they
/// exceed the budget. Structural lines stay atomic. Blank lines become
/// explicit empty units so vertical spacing survives reassembly. Remaining
/// prose is split into sentences and greedily packed up to `max_length`; a
/// sentence with no boundary under the budget is emitted oversized.
///
/// Units rejoin with a single newline (see [`rejoin_units`]).
pub fn split_units(text: &str, max_length: usize) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    let mut group = String::new();

    let flush = |units: &mut Vec<Unit>, group: &mut String| {
        if !group.is_empty() {
            units.push(Unit::prose(std::mem::take(group)));
        }
    };

    for segment in segmenter::split(text) {
        match segment.kind {
            SegmentKind::Code => {
                flush(&mut units, &mut group);
                // The newline after the closing fence belongs to the join,
                // not to the block.
                let block = segment.text.strip_suffix('\n').unwrap_or(&segment.text);
                units.push(Unit::code(block));
            }
            SegmentKind::Prose => {
                for element in parse_prose_elements(&segment.text) {
                    match element.kind {
                        UnitKind::Blank => {
                            flush(&mut units, &mut group);
                            units.push(Unit::blank());
                        }
                        _ => {
                            if element.text.len() > max_length {
                                flush(&mut units, &mut group);
                                units.push(element);
                                continue;
                            }
                            let joined_len = group.len()
                                + element.text.len()
                                + usize::from(!group.is_empty());
                            if joined_len <= max_length {
                                if !group.is_empty() {
                                    group.push('\n');
                                }
                                group.push_str(&element.text);
                            } else {
                                flush(&mut units, &mut group);
                                group = element.text;
                            }
                        }
                    }
                }
            }
        }
    }

    flush(&mut units, &mut group);
    debug!("chunk split into {} unit(s)", units.len());
    units
}

/// Rejoin units produced by [`split_units`].
pub fn rejoin_units(units: &[Unit]) -> String {
    units
        .iter()
        .map(|u| u.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Break a prose span into atomic elements: structural lines, blank lines
/// and complete sentences, in document order.
fn parse_prose_elements(text: &str) -> Vec<Unit> {
    let mut elements: Vec<Unit> = Vec::new();
    let mut current = String::new();

    let flush_current = |elements: &mut Vec<Unit>, current: &mut String| {
        let pending = current.trim();
        if !pending.is_empty() {
            elements.push(Unit::prose(pending));
        }
        current.clear();
    };

    for raw_line in text.lines() {
        let line = raw_line.trim();

        if line.is_empty() {
            flush_current(&mut elements, &mut current);
            elements.push(Unit::blank());
            continue;
        }

        if is_structural_line(line) {
            flush_current(&mut elements, &mut current);
            elements.push(Unit::prose(line));
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(line);

        // Drain complete sentences, keeping any trailing fragment for the
        // next line.
        let ends: Vec<usize> = SENTENCE_BOUNDARY_REGEX
            .find_iter(&current)
            .map(|m| m.end())
            .collect();
        let mut last_end = 0;
        for end in ends {
            let piece = current[last_end..end].trim();
            if !piece.is_empty() {
                elements.push(Unit::prose(piece));
            }
            last_end = end;
        }
        current = current[last_end..].trim_start().to_string();
    }

    flush_current(&mut elements, &mut current);
    elements
}
