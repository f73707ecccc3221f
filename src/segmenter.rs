use log::debug;

// @module: Structural splitting of document bodies into code and prose segments

/// Classification of a body segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A fenced code block, opaque to translation
    Code,
    /// Translatable prose between code blocks
    Prose,
}

/// A maximal contiguous span of a document body.
///
/// Segments partition the body losslessly: concatenating their `text` in
/// order reproduces the original input byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    // @field: Segment classification
    pub kind: SegmentKind,

    // @field: Verbatim text, fence markers included for code
    pub text: String,
}

impl Segment {
    /// Create a code segment.
    pub fn code(text: impl Into<String>) -> Self {
        Segment { kind: SegmentKind::Code, text: text.into() }
    }

    /// Create a prose segment.
    pub fn prose(text: impl Into<String>) -> Self {
        Segment { kind: SegmentKind::Prose, text: text.into() }
    }

    /// Whether this segment is a fenced code block.
    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }
}

/// True when a line opens or closes a fenced code block.
///
/// Leading indentation is tolerated, matching fences indented inside lists.
pub fn is_fence_marker(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Split a text blob into an ordered sequence of code and prose segments.
///
/// The scan is line oriented: a fence marker line opens a code segment that
/// runs up to and including the next fence marker line. A fence that never
/// closes is demoted back to prose, so unbalanced input degrades gracefully
/// instead of swallowing the rest of the document. Empty input yields an
/// empty sequence.
pub fn split(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments: Vec<Segment> = Vec::new();
    let mut prose = String::new();
    let mut code: Option<String> = None;

    for line in text.split_inclusive('\n') {
        match code.take() {
            Some(mut buffer) => {
                buffer.push_str(line);
                if is_fence_marker(line) {
                    segments.push(Segment::code(buffer));
                } else {
                    code = Some(buffer);
                }
            }
            None => {
                if is_fence_marker(line) {
                    if !prose.is_empty() {
                        segments.push(Segment::prose(std::mem::take(&mut prose)));
                    }
                    code = Some(line.to_string());
                } else {
                    prose.push_str(line);
                }
            }
        }
    }

    // A dangling fence is ordinary prose.
    if let Some(dangling) = code.take() {
        prose.push_str(&dangling);
    }

    if !prose.is_empty() {
        // Keep segments maximal: merge trailing prose into a preceding
        // prose segment when the dangling-fence path created one.
        match segments.last_mut() {
            Some(last) if !last.is_code() => last.text.push_str(&prose),
            _ => segments.push(Segment::prose(prose)),
        }
    }

    debug!("split body into {} segment(s)", segments.len());
    segments
}

/// Reassemble segments into a single blob, inverse of [`split`].
pub fn reassemble(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
