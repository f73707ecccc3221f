/*!
 * Tests for the document model and frontmatter parsing
 */

use mdxlate::document::{FieldValue, MarkdownDocument};

#[test]
fn test_parse_withTypicalFrontmatter_shouldTypeEveryValue() {
    let raw = r#"---
title: Getting Started
sidebar_position: 3
draft: false
tags:
  - setup
  - intro
hero:
  heading: Welcome
---
Body.
"#;
    let doc = MarkdownDocument::parse(raw);

    assert_eq!(doc.frontmatter["title"], FieldValue::String("Getting Started".to_string()));
    assert!(matches!(doc.frontmatter["sidebar_position"], FieldValue::Number(_)));
    assert_eq!(doc.frontmatter["draft"], FieldValue::Bool(false));
    assert_eq!(
        doc.frontmatter["tags"],
        FieldValue::Sequence(vec![
            FieldValue::String("setup".to_string()),
            FieldValue::String("intro".to_string()),
        ])
    );
    match &doc.frontmatter["hero"] {
        FieldValue::Mapping(hero) => {
            assert_eq!(hero["heading"], FieldValue::String("Welcome".to_string()));
        }
        other => panic!("expected mapping, got {:?}", other),
    }
    assert_eq!(doc.body, "Body.\n");
}

#[test]
fn test_parse_withEmptyFrontmatterBlock_shouldConsumeDelimiters() {
    let doc = MarkdownDocument::parse("---\n---\nBody only.\n");
    assert!(!doc.has_frontmatter());
    assert_eq!(doc.body, "Body only.\n");
}

#[test]
fn test_parse_withDashesInsideBody_shouldNotTreatThemAsFrontmatter() {
    let raw = "Intro paragraph.\n\n---\n\nA thematic break, not metadata.\n";
    let doc = MarkdownDocument::parse(raw);
    assert!(!doc.has_frontmatter());
    assert_eq!(doc.body, raw);
}

#[test]
fn test_renderAfterParse_withNoChanges_shouldKeepMetadataAndBody() {
    let raw = "---\ntitle: Intro\nid: x1\n---\n# Heading\n\nText.\n";
    let doc = MarkdownDocument::parse(raw);
    let rendered = doc.render().unwrap();

    assert!(rendered.starts_with("---\n"));
    assert!(rendered.contains("title: Intro"));
    assert!(rendered.contains("id: x1"));
    assert!(rendered.ends_with("# Heading\n\nText.\n"));

    // A second parse of the rendered output yields the same document
    let reparsed = MarkdownDocument::parse(&rendered);
    assert_eq!(reparsed, doc);
}

#[test]
fn test_fieldValue_asStr_shouldOnlyMatchStrings() {
    assert_eq!(FieldValue::String("x".to_string()).as_str(), Some("x"));
    assert_eq!(FieldValue::Bool(true).as_str(), None);
    assert_eq!(FieldValue::Null.as_str(), None);
}
