/*!
 * Tests for the frontmatter field translation policy
 */

use mdxlate::document::{FieldValue, MarkdownDocument};
use mdxlate::translation::FrontmatterTranslator;

use crate::common::{FailingTranslator, IdentityTranslator, MarkingTranslator};

fn parse_frontmatter(raw: &str) -> mdxlate::document::Frontmatter {
    MarkdownDocument::parse(raw).frontmatter
}

/// Scenario: identifiers and tag lists stay, display fields translate.
#[tokio::test]
async fn test_translate_withMixedFields_shouldOnlyTranslateDisplayFields() {
    let frontmatter = parse_frontmatter(
        "---\nid: x1\ntitle: Intro\ntags:\n  - a\n  - b\n---\nbody",
    );
    let translator = MarkingTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    assert!(outcome.failures.is_empty());
    assert_eq!(outcome.frontmatter["id"], FieldValue::String("x1".to_string()));
    assert_eq!(outcome.frontmatter["title"], FieldValue::String("[zh]Intro".to_string()));
    assert_eq!(
        outcome.frontmatter["tags"],
        FieldValue::Sequence(vec![
            FieldValue::String("a".to_string()),
            FieldValue::String("b".to_string()),
        ])
    );
}

#[tokio::test]
async fn test_translate_withUnknownFields_shouldPassThroughUnchanged() {
    let frontmatter = parse_frontmatter(
        "---\ncustom_flag: true\ncustom_text: keep me\nweight: 7\n---\nbody",
    );
    let translator = MarkingTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    assert_eq!(outcome.frontmatter["custom_flag"], FieldValue::Bool(true));
    assert_eq!(outcome.frontmatter["custom_text"], FieldValue::String("keep me".to_string()));
    assert!(matches!(outcome.frontmatter["weight"], FieldValue::Number(_)));
}

#[tokio::test]
async fn test_translate_withNestedMapping_shouldRecurseIntoStrings() {
    let frontmatter = parse_frontmatter(
        "---\nhero:\n  heading: Welcome\n  weight: 3\n  cta:\n    label: Click here\n---\nbody",
    );
    let translator = MarkingTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    let FieldValue::Mapping(hero) = &outcome.frontmatter["hero"] else {
        panic!("hero should stay a mapping");
    };
    assert_eq!(hero["heading"], FieldValue::String("[zh]Welcome".to_string()));
    assert!(matches!(hero["weight"], FieldValue::Number(_)));
    let FieldValue::Mapping(cta) = &hero["cta"] else {
        panic!("cta should stay a mapping");
    };
    assert_eq!(cta["label"], FieldValue::String("[zh]Click here".to_string()));
}

#[tokio::test]
async fn test_translate_withStringSequence_shouldTranslateEachElement() {
    let frontmatter = parse_frontmatter(
        "---\nhighlights:\n  - Fast setup\n  - Safe defaults\n---\nbody",
    );
    let translator = MarkingTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    assert_eq!(
        outcome.frontmatter["highlights"],
        FieldValue::Sequence(vec![
            FieldValue::String("[zh]Fast setup".to_string()),
            FieldValue::String("[zh]Safe defaults".to_string()),
        ])
    );
}

#[tokio::test]
async fn test_translate_withFailingTranslator_shouldKeepOriginalValues() {
    let frontmatter = parse_frontmatter("---\ntitle: Intro\ndescription: Summary\n---\nbody");
    let translator = FailingTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    assert_eq!(outcome.failures.len(), 2);
    assert_eq!(outcome.frontmatter["title"], FieldValue::String("Intro".to_string()));
    assert_eq!(outcome.frontmatter["description"], FieldValue::String("Summary".to_string()));
}

#[tokio::test]
async fn test_translate_withIdentityTranslator_shouldPreserveKeyOrder() {
    let frontmatter = parse_frontmatter(
        "---\nzeta: one\ntitle: Two\nalpha: three\ndate: 2024-01-01\n---\nbody",
    );
    let translator = IdentityTranslator;

    let outcome = FrontmatterTranslator::new(&translator).translate(&frontmatter).await;

    let keys: Vec<&str> = outcome.frontmatter.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "title", "alpha", "date"]);
}

#[test]
fn test_fieldClassification_shouldBeDisjoint() {
    for field in ["title", "description", "summary", "sidebar_label"] {
        assert!(FrontmatterTranslator::is_translatable_field(field));
        assert!(!FrontmatterTranslator::is_preserved_field(field));
    }
    for field in ["id", "slug", "tags", "keywords", "date", "authors"] {
        assert!(FrontmatterTranslator::is_preserved_field(field));
        assert!(!FrontmatterTranslator::is_translatable_field(field));
    }
    // Unknown names belong to neither set and default to pass-through
    assert!(!FrontmatterTranslator::is_translatable_field("custom_text"));
    assert!(!FrontmatterTranslator::is_preserved_field("custom_text"));
}
