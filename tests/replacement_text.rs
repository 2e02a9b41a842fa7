//! End-to-end behavior of the "Create link to Bible" command.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use pretty_assertions::assert_eq;
use rstest::rstest;
use verselink::bible::BibleLanguage;
use verselink::{produce_replacement_text, Settings};

const GATEWAY: &str = "https://www.biblegateway.com/passage/?search={{verse}}&version={{version}}";
const OLIVE_TREE: &str = "https://www.olivetree.com/bible/{{version}}/{{book}}/{{chapter}}/{{verse}}";

fn settings(link_template: &str) -> Settings {
    Settings {
        default_version: "ESV".to_string(),
        link_template: link_template.to_string(),
        ..Settings::default()
    }
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("just some prose")]
#[case("John")]
#[case("16")]
fn text_without_reference_clears_selection(#[case] selection: &str) {
    assert_eq!(produce_replacement_text(selection, &settings(GATEWAY)), "");
}

#[test]
fn single_verse_has_no_range_suffix() {
    assert_eq!(
        produce_replacement_text("John 3:16", &settings(GATEWAY)),
        "[John 3:16](https://www.biblegateway.com/passage/?search=John+3.16&version=ESV)"
    );
}

#[test]
fn dashed_range() {
    assert_eq!(
        produce_replacement_text("John 3:16-18", &settings(GATEWAY)),
        "[John 3:16-18](https://www.biblegateway.com/passage/?search=John+3.16-18&version=ESV)"
    );
}

#[test]
fn multiple_ranges_share_book_and_version() {
    let links = produce_replacement_text("John 3:16-18, 4:1 NIV", &settings(GATEWAY));
    let parts: Vec<&str> = links.split(", [").collect();

    assert_eq!(parts.len(), 2);
    assert_eq!(
        parts[0],
        "[John 3:16-18](https://www.biblegateway.com/passage/?search=John+3.16-18&version=NIV)"
    );
    assert_eq!(
        parts[1],
        "4:1 NIV](https://www.biblegateway.com/passage/?search=John+4.1&version=NIV)"
    );
}

#[test]
fn trailing_default_version_adds_no_suffix() {
    assert_eq!(
        produce_replacement_text("John 3:16-18, 4:1 ESV", &settings("{{verse}}")),
        "[John 3:16-18](John+3.16-18), [4:1](John+4.1)"
    );
}

#[test]
fn space_encoding_changes_only_the_uri() {
    let mut plus = settings(GATEWAY);
    plus.encode_spaces_to_plus = true;
    let mut percent = settings(GATEWAY);
    percent.encode_spaces_to_plus = false;

    let with_plus = produce_replacement_text("1 John 4:7-8", &plus);
    let with_percent = produce_replacement_text("1 John 4:7-8", &percent);

    assert_eq!(
        with_plus,
        "[1 John 4:7-8](https://www.biblegateway.com/passage/?search=1+John+4.7-8&version=ESV)"
    );
    assert_eq!(
        with_percent,
        "[1 John 4:7-8](https://www.biblegateway.com/passage/?search=1%20John%204.7-8&version=ESV)"
    );

    let label = |link: &str| link.split("](").next().unwrap().to_string();
    assert_eq!(label(&with_plus), label(&with_percent));
}

#[rstest]
#[case("https://example.com/{{book}}/{{chapter}}/{{verse}}")]
#[case("https://example.com/{{verse}}?c={{chapter}}&b={{book}}")]
#[case("verse chapter book")]
fn templates_with_all_markers_use_separate_placeholders(#[case] link_template: &str) {
    let links = produce_replacement_text("John 3:16-18", &settings(link_template));
    assert!(links.starts_with("[John 3:16-18]("), "{links}");
    assert!(!links.contains("John+3.16"), "{links}");
}

#[test]
fn multi_token_template_links_opening_verse() {
    assert_eq!(
        produce_replacement_text("Song of Solomon 2:4-7 KJV", &settings(OLIVE_TREE)),
        "[Song of Solomon 2:4-7 KJV](https://www.olivetree.com/bible/KJV/Song+of+Solomon/2/4)"
    );
}

#[test]
fn unknown_book_with_validation_equals_unparseable() {
    let mut validating = settings(GATEWAY);
    validating.validate_book_name = true;

    assert_eq!(
        produce_replacement_text("Xyzzy 2:5", &validating),
        produce_replacement_text("no reference", &validating)
    );
    assert_eq!(produce_replacement_text("Xyzzy 2:5", &validating), "");
}

#[test]
fn unknown_book_without_validation_is_linked() {
    assert_eq!(
        produce_replacement_text("Xyzzy 2:5", &settings("{{verse}}")),
        "[Xyzzy 2:5](Xyzzy+2.5)"
    );
}

#[test]
fn validation_canonicalizes_abbreviations() {
    let mut validating = settings("{{verse}}");
    validating.validate_book_name = true;

    assert_eq!(
        produce_replacement_text("1 cor 13:4-7", &validating),
        "[1 Corinthians 13:4-7](1+Corinthians+13.4-7)"
    );
}

#[test]
fn spanish_lexicon() {
    let settings = Settings {
        bible_language: BibleLanguage::Sp,
        default_version: "NVI".to_string(),
        link_template: "{{verse}}&v={{version}}".to_string(),
        validate_book_name: true,
        ..Settings::default()
    };

    assert_eq!(
        produce_replacement_text("Juan 3:16 RVR1960", &settings),
        "[Juan 3:16 RVR1960](Juan+3.16&v=RVR1960)"
    );
    assert_eq!(produce_replacement_text("John 3:16", &settings), "");
}

#[test]
fn chapter_only_reference_links_first_verse() {
    assert_eq!(
        produce_replacement_text("Psalm 23", &settings("{{verse}}")),
        "[Psalm 23:1](Psalm+23.1)"
    );
}

#[rstest]
#[case("John 3-4")]
#[case("John 3:16-4:2")]
fn ranges_across_chapters_clear_selection(#[case] selection: &str) {
    assert_eq!(produce_replacement_text(selection, &settings("{{verse}}")), "");
}

#[test]
fn ordinal_book_prefix_stays_intact() {
    assert_eq!(
        produce_replacement_text("1st Samuel 3:1", &settings("{{verse}}")),
        "[1st Samuel 3:1](1st+Samuel+3.1)"
    );

    let mut validating = settings("{{verse}}");
    validating.validate_book_name = true;
    assert_eq!(
        produce_replacement_text("1st Samuel 3:1", &validating),
        "[1 Samuel 3:1](1+Samuel+3.1)"
    );
}

#[test]
fn prose_word_is_not_taken_as_version() {
    assert_eq!(
        produce_replacement_text("John 3:16 and 17", &settings("{{verse}}&v={{version}}")),
        "[John 3:16](John+3.16&v=ESV)"
    );
}

#[test]
fn empty_template_still_produces_labels() {
    assert_eq!(produce_replacement_text("John 3:16", &settings("")), "[John 3:16]()");
}
