//! Scripture reference parsing.
//!
//! Turns a loosely written selection such as `1 Cor 13:4-7, 14:1 NIV` into a
//! [`ParsedReference`]: one book, the verse ranges in input order and the
//! version tokens. Parsing never fails loudly; text without a recognizable
//! chapter yields [`ParsedReference::empty`].

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::bible::{self, BibleLanguage};

/// Verse used for a segment that names only a chapter (`John 3`).
pub const CHAPTER_ONLY_VERSE: u32 = 1;

/// Leading book token followed by one or more comma-separated segments.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?:(?P<numeral>\d+)(?P<gap>\s*))?
        (?P<book>\p{L}[\p{L}\s.]*?)
        \s*
        (?P<segments>
            \d+ (?:\s*[:.]\s*\d+)? (?:\s*-\s*\d+ (?:[:.]\d+)? )? (?:\s+\p{L}[\w-]*)?
            (?: \s*[,;]\s*
                \d+ (?:\s*[:.]\s*\d+)? (?:\s*-\s*\d+ (?:[:.]\d+)? )? (?:\s+\p{L}[\w-]*)?
            )*
        )",
    )
    .expect("valid regex: RE_REFERENCE")
});

/// One `chapter[:verse][-verse] [VERSION]` segment.
#[allow(clippy::expect_used)]
static RE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?P<chapter>\d+)
        (?: \s*[:.]\s* (?P<from>\d+) )?
        (?: \s*-\s* (?P<to>\d+) (?P<cross>[:.]\d+)? )?
        (?: \s+ (?P<version>\p{L}[\w-]*) )?",
    )
    .expect("valid regex: RE_SEGMENT")
});

/// A chapter with an inclusive span of verses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    chapter: u32,
    from_verse: u32,
    to_verse: u32,
}

impl VerseRange {
    /// Create a range; reversed bounds are swapped.
    pub fn new(chapter: u32, from_verse: u32, to_verse: u32) -> Self {
        Self {
            chapter,
            from_verse: from_verse.min(to_verse),
            to_verse: from_verse.max(to_verse),
        }
    }

    /// Create a range covering one verse.
    pub fn single(chapter: u32, verse: u32) -> Self {
        Self::new(chapter, verse, verse)
    }

    /// Chapter number.
    pub const fn chapter(&self) -> u32 {
        self.chapter
    }

    /// First verse of the range.
    pub const fn from_verse(&self) -> u32 {
        self.from_verse
    }

    /// Last verse of the range (equal to `from_verse` for a single verse).
    pub const fn to_verse(&self) -> u32 {
        self.to_verse
    }

    /// Whether the range covers exactly one verse.
    pub const fn is_single_verse(&self) -> bool {
        self.from_verse == self.to_verse
    }
}

/// A parsed scripture reference: one book, its ranges and version tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    book_name: String,
    ranges: Vec<VerseRange>,
    versions: Vec<String>,
}

impl ParsedReference {
    /// Build a reference. An empty `versions` list falls back to `default_version`.
    pub fn new(
        book_name: impl Into<String>,
        ranges: Vec<VerseRange>,
        versions: Vec<String>,
        default_version: &str,
    ) -> Self {
        let versions = if versions.is_empty() {
            vec![default_version.to_string()]
        } else {
            versions
        };
        Self {
            book_name: book_name.into(),
            ranges,
            versions,
        }
    }

    /// The "nothing recognized" result.
    pub fn empty(default_version: &str) -> Self {
        Self::new(String::new(), Vec::new(), Vec::new(), default_version)
    }

    /// Whether parsing recognized nothing to link.
    pub fn is_empty(&self) -> bool {
        self.book_name.is_empty() || self.ranges.is_empty()
    }

    /// Display name of the book, e.g. "1 John".
    pub fn book_name(&self) -> &str {
        &self.book_name
    }

    /// Verse ranges in input order.
    pub fn ranges(&self) -> &[VerseRange] {
        &self.ranges
    }

    /// Version tokens in input order; never empty.
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// The version that represents the whole reference (the first one).
    pub fn version(&self) -> &str {
        self.versions.first().map_or("", String::as_str)
    }
}

/// Parse a selection into a [`ParsedReference`].
///
/// With `validate_book_name` the book must be known in `language` and is
/// replaced by its canonical name; otherwise the text before the first chapter
/// is taken as the book name verbatim (whitespace collapsed).
pub fn parse_reference(
    text: &str,
    language: BibleLanguage,
    default_version: &str,
    validate_book_name: bool,
) -> ParsedReference {
    let Some(caps) = RE_REFERENCE.captures(text) else {
        tracing::debug!("No scripture reference found in {text:?}");
        return ParsedReference::empty(default_version);
    };

    let raw_book = book_token(&caps);
    let book_name = if validate_book_name {
        match bible::canonical_book_name(language, &raw_book) {
            Some(canonical) => canonical.to_string(),
            None => {
                match bible::suggest_book(language, &raw_book) {
                    Some(suggestion) => tracing::debug!(
                        "Unknown {language} book {raw_book:?} (did you mean {suggestion:?}?)"
                    ),
                    None => tracing::debug!("Unknown {language} book {raw_book:?}"),
                }
                return ParsedReference::empty(default_version);
            }
        }
    } else {
        raw_book
    };

    let Some(segments) = caps.name("segments") else {
        return ParsedReference::empty(default_version);
    };
    let tail = &text[segments.end()..];
    let mut ranges = Vec::new();
    let mut versions = Vec::new();

    for segment in RE_SEGMENT.captures_iter(segments.as_str()) {
        let Some(range) = segment_range(&segment) else {
            tracing::debug!("Rejected segment {:?}", &segment[0]);
            return ParsedReference::empty(default_version);
        };
        ranges.push(range);
        if let Some(version) = segment.name("version") {
            // The last version token must end the reference (`John 3:16 and 17` has none).
            if version.end() < segments.as_str().len() || ends_reference(tail) {
                versions.push(version.as_str().to_string());
            } else {
                tracing::debug!("Ignoring {:?}: prose, not a version", version.as_str());
            }
        }
    }

    ParsedReference::new(book_name, ranges, versions, default_version)
}

/// Book display name with inner whitespace collapsed. The numeral keeps the
/// separation it had in the input (`1 John`, `1st Samuel`).
fn book_token(caps: &Captures<'_>) -> String {
    let book = caps
        .name("book")
        .map_or("", |m| m.as_str())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    match caps.name("numeral") {
        Some(numeral) if caps.name("gap").is_some_and(|gap| !gap.as_str().is_empty()) => {
            format!("{} {book}", numeral.as_str())
        }
        Some(numeral) => format!("{}{book}", numeral.as_str()),
        None => book,
    }
}

/// Whether the text after the last segment closes the reference: nothing, or
/// punctuation such as `(` or `.`, but not another word or number.
fn ends_reference(tail: &str) -> bool {
    !tail.trim_start().starts_with(char::is_alphanumeric)
}

/// Chapter and verses of one segment.
///
/// `None` for zero or overflowing numbers, and for ranges spanning chapters
/// (`3-4`, `3:16-4:2`), which a single-chapter range cannot express.
fn segment_range(segment: &Captures<'_>) -> Option<VerseRange> {
    let number = |name: &str| -> Option<Option<u32>> {
        match segment.name(name) {
            Some(m) => m.as_str().parse::<u32>().ok().filter(|n| *n > 0).map(Some),
            None => Some(None),
        }
    };

    let chapter = number("chapter")??;
    let from = number("from")?;
    let to = number("to")?;

    if segment.name("cross").is_some() || (from.is_none() && to.is_some()) {
        return None;
    }

    let from = from.unwrap_or(CHAPTER_ONLY_VERSE);
    let to = to.unwrap_or(from);

    Some(VerseRange::new(chapter, from, to))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(text: &str) -> ParsedReference {
        parse_reference(text, BibleLanguage::En, "ESV", false)
    }

    #[test]
    fn parses_single_verse() {
        let r = parse("John 3:16");
        assert_eq!(r.book_name(), "John");
        assert_eq!(r.ranges(), &[VerseRange::single(3, 16)]);
        assert_eq!(r.versions(), &["ESV".to_string()]);
        assert!(r.ranges()[0].is_single_verse());
    }

    #[test]
    fn parses_verse_range() {
        let r = parse("John 3:16-18");
        assert_eq!(r.ranges(), &[VerseRange::new(3, 16, 18)]);
    }

    #[test]
    fn parses_numbered_book() {
        let r = parse("1 John 3:1-3");
        assert_eq!(r.book_name(), "1 John");
        assert_eq!(r.ranges(), &[VerseRange::new(3, 1, 3)]);
    }

    #[rstest]
    #[case("1 John 3:1", "1 John")]
    #[case("1   John 3:1", "1 John")]
    #[case("2Cor 5:17", "2Cor")]
    #[case("1st Samuel 3:1", "1st Samuel")]
    #[case("2nd Kings 2:11", "2nd Kings")]
    fn numeral_keeps_its_spacing(#[case] text: &str, #[case] book: &str) {
        assert_eq!(parse(text).book_name(), book);
    }

    #[rstest]
    #[case("2Cor 5:17", "2 Corinthians")]
    #[case("1st Samuel 3:1", "1 Samuel")]
    fn validation_canonicalizes_attached_numerals(#[case] text: &str, #[case] book: &str) {
        let r = parse_reference(text, BibleLanguage::En, "ESV", true);
        assert_eq!(r.book_name(), book);
    }

    #[test]
    fn collapses_whitespace_in_book() {
        assert_eq!(parse("Song   of\tSolomon 2:4").book_name(), "Song of Solomon");
    }

    #[rstest]
    #[case("John 3:16")]
    #[case("John 3.16")]
    #[case("John 3 : 16")]
    #[case("John3:16")]
    fn accepts_verse_separators(#[case] text: &str) {
        assert_eq!(parse(text).ranges(), &[VerseRange::single(3, 16)]);
    }

    #[test]
    fn parses_multiple_ranges_with_shared_version() {
        let r = parse("John 3:16-18, 4:1 NIV");
        assert_eq!(r.book_name(), "John");
        assert_eq!(r.ranges(), &[VerseRange::new(3, 16, 18), VerseRange::single(4, 1)]);
        assert_eq!(r.versions(), &["NIV".to_string()]);
        assert_eq!(r.version(), "NIV");
    }

    #[test]
    fn collects_per_range_versions() {
        let r = parse("John 3:16 NIV, 4:1 KJV");
        assert_eq!(r.ranges().len(), 2);
        assert_eq!(r.versions(), &["NIV".to_string(), "KJV".to_string()]);
        assert_eq!(r.version(), "NIV");
    }

    #[test]
    fn accepts_semicolon_between_ranges() {
        let r = parse("Romans 8:28; 12:2");
        assert_eq!(r.ranges(), &[VerseRange::single(8, 28), VerseRange::single(12, 2)]);
    }

    #[test]
    fn chapter_only_uses_first_verse() {
        let r = parse("Psalm 23");
        assert_eq!(r.ranges(), &[VerseRange::single(23, CHAPTER_ONLY_VERSE)]);
    }

    #[test]
    fn reversed_range_is_normalized() {
        let range = parse("John 3:18-16").ranges()[0];
        assert_eq!(range.from_verse(), 16);
        assert_eq!(range.to_verse(), 18);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("hello world")]
    #[case("3:16")]
    #[case("John")]
    #[case("John 0:16")]
    #[case("John 3:0")]
    #[case("John 99999999999:1")]
    #[case("John 3-4")]
    #[case("John 3:16-4:2")]
    #[case("John 3:16, 5-6")]
    fn unparseable_text_is_empty(#[case] text: &str) {
        let r = parse(text);
        assert!(r.is_empty());
        assert_eq!(r.book_name(), "");
        assert!(r.ranges().is_empty());
        assert_eq!(r.version(), "ESV");
    }

    #[test]
    fn trailing_text_after_segments_is_ignored() {
        let r = parse("see John 3:16 NIV (study notes)");
        assert_eq!(r.book_name(), "see John");
        assert_eq!(r.ranges(), &[VerseRange::single(3, 16)]);
        assert_eq!(r.version(), "NIV");

        let r = parse("John 3:16 NIV.");
        assert_eq!(r.version(), "NIV");
    }

    #[rstest]
    #[case("John 3:16 and 17")]
    #[case("John 3:16 is where it starts")]
    #[case("Psalm 23 says 4 things")]
    fn prose_after_reference_is_not_a_version(#[case] text: &str) {
        let r = parse(text);
        assert_eq!(r.ranges().len(), 1);
        assert_eq!(r.versions(), &["ESV".to_string()]);
    }

    #[test]
    fn version_before_comma_is_kept() {
        let r = parse("John 3:16 NIV, and more");
        assert_eq!(r.ranges(), &[VerseRange::single(3, 16)]);
        assert_eq!(r.versions(), &["NIV".to_string()]);
    }

    #[test]
    fn validation_canonicalizes_known_books() {
        let r = parse_reference("jn 3:16", BibleLanguage::En, "ESV", true);
        assert_eq!(r.book_name(), "John");

        let r = parse_reference("1 cor 13:4-7", BibleLanguage::En, "ESV", true);
        assert_eq!(r.book_name(), "1 Corinthians");
    }

    #[test]
    fn validation_rejects_unknown_books() {
        let r = parse_reference("Xyzzy 2:5", BibleLanguage::En, "ESV", true);
        assert_eq!(r, ParsedReference::empty("ESV"));
    }

    #[test]
    fn without_validation_any_book_is_accepted() {
        let r = parse_reference("Xyzzy 2:5", BibleLanguage::En, "ESV", false);
        assert_eq!(r.book_name(), "Xyzzy");
        assert_eq!(r.ranges(), &[VerseRange::single(2, 5)]);
    }

    #[test]
    fn validation_uses_selected_language() {
        let r = parse_reference("Juan 3:16 RVR1960", BibleLanguage::Sp, "NVI", true);
        assert_eq!(r.book_name(), "Juan");
        assert_eq!(r.version(), "RVR1960");

        let r = parse_reference("Juan 3:16", BibleLanguage::En, "NVI", true);
        assert!(r.is_empty());
    }

    #[test]
    fn accented_books_parse_without_validation() {
        let r = parse_reference("Génesis 1:1", BibleLanguage::Sp, "", false);
        assert_eq!(r.book_name(), "Génesis");
    }
}
