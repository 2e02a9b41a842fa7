//! Markdown link rendering for parsed references.
//!
//! Each verse range becomes `[label](uri)`. The URI comes from the user's link
//! template, in one of two placeholder dialects:
//!
//! - [`TemplateDialect::Default`]: `{{verse}}` receives book, chapter and verses
//!   together (`John+3.16-18`), e.g.
//!   `https://www.biblegateway.com/passage/?search={{verse}}&version={{version}}`.
//! - [`TemplateDialect::MultiToken`]: `{{book}}`, `{{chapter}}` and `{{verse}}`
//!   are filled separately; only the opening verse reaches the URI.
//!
//! Placeholders the template lacks are simply not filled, and unknown tokens
//! pass through untouched.

use crate::constants::{link, template};
use crate::reference::{ParsedReference, VerseRange};

/// Placeholder scheme of a link template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateDialect {
    /// Single `{{verse}}` placeholder carrying book, chapter and verses.
    #[default]
    Default,
    /// Separate `{{book}}`, `{{chapter}}` and `{{verse}}` placeholders.
    MultiToken,
}

impl TemplateDialect {
    /// Select the dialect from the template text.
    ///
    /// Templates mentioning `book`, `chapter` and `verse` anywhere, in any
    /// order, are multi-token.
    pub fn detect(link_template: &str) -> Self {
        if template::MULTI_TOKEN_MARKERS
            .iter()
            .all(|marker| link_template.contains(marker))
        {
            Self::MultiToken
        } else {
            Self::Default
        }
    }
}

/// Options shared by every range of one reference.
#[derive(Debug, Clone, Copy)]
pub struct LinkOptions<'a> {
    /// Version that needs no suffix in labels.
    pub default_version: &'a str,
    /// URL template with placeholders.
    pub link_template: &'a str,
    /// Encode spaces as `+` instead of `%20`.
    pub encode_spaces_to_plus: bool,
}

impl LinkOptions<'_> {
    const fn space(&self) -> &'static str {
        if self.encode_spaces_to_plus {
            link::PLUS_SPACE
        } else {
            link::PERCENT_SPACE
        }
    }
}

/// Render one range of `reference` as a markdown link.
///
/// `index` is the range's position in `reference.ranges()`: the book name
/// only labels the first link and the version suffix only the last.
pub fn format_verse_range(
    reference: &ParsedReference,
    range: &VerseRange,
    index: usize,
    default_version: &str,
    link_template: &str,
    encode_spaces_to_plus: bool,
) -> String {
    let options = LinkOptions {
        default_version,
        link_template,
        encode_spaces_to_plus,
    };
    render(reference, range, index, TemplateDialect::detect(link_template), &options)
}

/// Render every range of `reference` and join the links with `", "`.
///
/// Returns an empty string when the reference is empty.
pub fn format_reference(
    reference: &ParsedReference,
    default_version: &str,
    link_template: &str,
    encode_spaces_to_plus: bool,
) -> String {
    if reference.is_empty() {
        return String::new();
    }

    let options = LinkOptions {
        default_version,
        link_template,
        encode_spaces_to_plus,
    };
    let dialect = TemplateDialect::detect(link_template);
    tracing::debug!("Rendering {} range(s) with {dialect:?} template", reference.ranges().len());

    reference
        .ranges()
        .iter()
        .enumerate()
        .map(|(index, range)| render(reference, range, index, dialect, &options))
        .collect::<Vec<_>>()
        .join(link::LINK_JOIN)
}

fn render(
    reference: &ParsedReference,
    range: &VerseRange,
    index: usize,
    dialect: TemplateDialect,
    options: &LinkOptions<'_>,
) -> String {
    let version = reference.version();
    let space = options.space();
    let book_uri = encode_spaces(reference.book_name(), space);

    let uri = match dialect {
        TemplateDialect::Default => {
            let verse = format!(
                "{book_uri}{space}{}{}{}",
                range.chapter(),
                link::URI_VERSE_SEPARATOR,
                verse_span(range)
            );
            fill(
                options.link_template,
                &[
                    (template::VERSE_PLACEHOLDER, verse.as_str()),
                    (template::VERSION_PLACEHOLDER, version),
                ],
            )
        }
        TemplateDialect::MultiToken => {
            let chapter = range.chapter().to_string();
            let verse = range.from_verse().to_string();
            fill(
                options.link_template,
                &[
                    (template::BOOK_PLACEHOLDER, book_uri.as_str()),
                    (template::CHAPTER_PLACEHOLDER, chapter.as_str()),
                    (template::VERSE_PLACEHOLDER, verse.as_str()),
                    (template::VERSION_PLACEHOLDER, version),
                ],
            )
        }
    };

    let mut label = String::new();
    if index == 0 {
        label.push_str(reference.book_name());
        label.push(' ');
    }
    label.push_str(&format!(
        "{}{}{}",
        range.chapter(),
        link::LABEL_VERSE_SEPARATOR,
        verse_span(range)
    ));
    if index + 1 == reference.ranges().len() && version != options.default_version {
        label.push(' ');
        label.push_str(version);
    }

    format!("[{label}]({uri})")
}

/// `from` or `from-to`.
fn verse_span(range: &VerseRange) -> String {
    if range.is_single_verse() {
        range.from_verse().to_string()
    } else {
        format!("{}-{}", range.from_verse(), range.to_verse())
    }
}

/// Replace every whitespace run with `space`.
fn encode_spaces(book: &str, space: &str) -> String {
    book.split_whitespace().collect::<Vec<_>>().join(space)
}

/// Substitute the first occurrence of each placeholder.
fn fill(link_template: &str, substitutions: &[(&str, &str)]) -> String {
    substitutions
        .iter()
        .fold(link_template.to_string(), |uri, &(placeholder, value)| {
            uri.replacen(placeholder, value, 1)
        })
}
