/*!
 * Tests for prose chunking under a length budget
 */

use mdxlate::chunker::{
    rejoin_units, split_paragraphs, split_sections, split_sentences, split_units, UnitKind,
};

#[test]
fn test_splitSections_withTwoHeadings_shouldYieldOneChunkPerSection() {
    let body = "## Install\n\nFirst paragraph.\n\n## Configure\n\nSecond paragraph.";
    let sections = split_sections(body);

    assert_eq!(sections.len(), 2);
    assert!(sections[0].starts_with("## Install"));
    assert!(sections[1].starts_with("## Configure"));
    assert!(sections[0].contains("First paragraph."));
    assert!(sections[1].contains("Second paragraph."));
}

#[test]
fn test_splitSections_withPreamble_shouldKeepPreambleAsOwnChunk() {
    let body = "Intro text before any heading.\n\n## First\n\nContent.";
    let sections = split_sections(body);

    assert_eq!(sections.len(), 2);
    assert!(sections[0].starts_with("Intro text"));
    assert!(sections[1].starts_with("## First"));
}

#[test]
fn test_splitSections_withoutHeadings_shouldReturnSingleChunk() {
    let body = "Only a paragraph.\n\nAnd another.";
    let sections = split_sections(body);
    assert_eq!(sections.len(), 1);
}

#[test]
fn test_splitSections_withDeeperHeadings_shouldNotSplitOnThem() {
    let body = "## Top\n\n### Nested\n\ntext\n\n#### Deeper";
    let sections = split_sections(body);
    assert_eq!(sections.len(), 1);
}

#[test]
fn test_splitSentences_withMarkdownInline_shouldIgnoreInlineMarkup() {
    let sentences = split_sentences("Use **bold** text. Then `code` spans.");
    assert_eq!(sentences, vec!["Use **bold** text.", "Then `code` spans."]);
}

#[test]
fn test_splitParagraphs_withShortText_shouldReturnInputUnchanged() {
    let chunks = split_paragraphs("Short enough.", 100);
    assert_eq!(chunks, vec!["Short enough."]);
}

#[test]
fn test_splitParagraphs_withManyParagraphs_shouldRespectBudget() {
    let paragraph = "This paragraph has a moderate length for packing.";
    let text = vec![paragraph; 8].join("\n\n");
    let max_length = 120;

    let chunks = split_paragraphs(&text, max_length);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.len() <= max_length, "chunk over budget: {} chars", chunk.len());
    }
    // Nothing dropped
    let total: usize = chunks.iter().map(|c| c.matches("moderate length").count()).sum();
    assert_eq!(total, 8);
}

#[test]
fn test_splitParagraphs_withLongParagraph_shouldFallBackToSentences() {
    let sentence = "Every sentence here is reasonably short and ends cleanly.";
    let paragraph = vec![sentence; 10].join(" ");
    let max_length = 150;

    let chunks = split_paragraphs(&paragraph, max_length);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.len() <= max_length);
    }
}

#[test]
fn test_splitParagraphs_withUnsplittableRun_shouldEmitOversizedChunk() {
    // 5000 chars with no sentence punctuation at all
    let run = "word ".repeat(1000);
    let chunks = split_paragraphs(run.trim(), 1000);

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].len() > 1000);
}

#[test]
fn test_splitUnits_withBlankLines_shouldPreserveVerticalSpacing() {
    let text = "First paragraph.\n\nSecond paragraph.";
    let units = split_units(text, 1000);

    assert_eq!(units.len(), 3);
    assert_eq!(units[1].kind, UnitKind::Blank);
    assert_eq!(rejoin_units(&units), text);
}

#[test]
fn test_splitUnits_withEmbeddedCodeBlock_shouldKeepBlockAtomicAndUntranslatable() {
    let code = "```js\nconsole.log(1)\nconsole.log(2)\nconsole.log(3)\n```";
    let text = format!("Lead in.\n\n{}\n\nWrap up.", code);

    // Budget far below the code block size
    let units = split_units(&text, 20);

    let code_units: Vec<_> = units.iter().filter(|u| u.kind == UnitKind::Code).collect();
    assert_eq!(code_units.len(), 1);
    assert_eq!(code_units[0].text, code);
    assert!(code_units[0].text.len() > 20);
    assert!(!code_units[0].is_translatable());
}

#[test]
fn test_splitUnits_withOnlyCodeFence_shouldYieldSingleUntranslatableUnit() {
    let code = "```\nopaque\n```";
    let units = split_units(code, 1000);

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].kind, UnitKind::Code);
    assert!(!units[0].is_translatable());
    assert_eq!(units[0].text, code);
}

#[test]
fn test_splitUnits_withStructuralLines_shouldKeepThemAtomic() {
    let text = "# Title\nSome sentence. Another one.\n- first item\n- second item\n> quoted line\n| a | b |";
    let units = split_units(text, 15);

    let texts: Vec<&str> = units.iter().map(|u| u.text.as_str()).collect();
    assert!(texts.contains(&"# Title"));
    assert!(texts.contains(&"- first item"));
    assert!(texts.contains(&"- second item"));
    assert!(texts.contains(&"> quoted line"));
    assert!(texts.contains(&"| a | b |"));
}

#[test]
fn test_splitUnits_withProseOverBudget_shouldPackSentencesUnderBudget() {
    let text = "One short sentence. Two short sentence. Three short sentence. Four short sentence.";
    let max_length = 45;

    let units = split_units(text, max_length);

    assert!(units.len() > 1);
    for unit in &units {
        if unit.kind == UnitKind::Prose {
            assert!(unit.text.len() <= max_length, "prose unit over budget: {:?}", unit.text);
        }
    }
}

#[test]
fn test_splitUnits_withOversizedSentence_shouldEmitItAsSingleUnit() {
    let run = "x".repeat(500);
    let units = split_units(&run, 100);

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].kind, UnitKind::Prose);
    assert!(units[0].text.len() > 100);
}

#[test]
fn test_splitUnits_withMixedDocument_shouldPreserveContentOrder() {
    let text = "Alpha sentence.\n\n```\ncode body\n```\n\nOmega sentence.";
    let units = split_units(text, 1000);

    let alpha = units.iter().position(|u| u.text.contains("Alpha")).unwrap();
    let code = units.iter().position(|u| u.kind == UnitKind::Code).unwrap();
    let omega = units.iter().position(|u| u.text.contains("Omega")).unwrap();
    assert!(alpha < code && code < omega);
    assert_eq!(rejoin_units(&units), text);
}
