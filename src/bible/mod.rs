//! Bible book-name lexicons and language selection.
//!
//! Each [`BibleLanguage`] owns a static lookup table from normalized aliases to
//! canonical display names. Lookups ignore case, accents, whitespace and
//! abbreviation dots, so "1 cor.", "1Cor" and "1 Corinthians" all resolve alike.

mod books;

use std::collections::HashMap;
use std::fmt;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Language of the book-name vocabulary used by the reference parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BibleLanguage {
    /// English book names.
    #[default]
    En,
    /// Spanish book names.
    Sp,
}

impl BibleLanguage {
    /// Short code as stored in settings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Sp => "sp",
        }
    }

    /// Resolve a settings code. Anything other than `sp` falls back to English.
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("sp") {
            Self::Sp
        } else {
            Self::En
        }
    }
}

impl fmt::Display for BibleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for BibleLanguage {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<BibleLanguage> for String {
    fn from(language: BibleLanguage) -> Self {
        language.code().to_string()
    }
}

/// Book-name vocabulary for one language.
pub struct Lexicon {
    books: &'static [(&'static str, &'static [&'static str])],
    aliases: HashMap<String, &'static str>,
}

impl Lexicon {
    fn new(books: &'static [(&'static str, &'static [&'static str])]) -> Self {
        let mut aliases = HashMap::new();
        for &(canonical, abbreviations) in books {
            aliases.insert(lookup_key(canonical), canonical);
            for alias in abbreviations {
                aliases.insert(lookup_key(alias), canonical);
            }
        }
        Self { books, aliases }
    }

    /// Canonical display name for a book token, if it is a known book or alias.
    pub fn canonical(&self, name: &str) -> Option<&'static str> {
        self.aliases.get(&lookup_key(name)).copied()
    }

    /// Canonical book names in canon order.
    pub fn book_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.books.iter().map(|&(canonical, _)| canonical)
    }

    /// Closest canonical name to an unknown token, for diagnostics.
    pub fn suggest(&self, name: &str) -> Option<&'static str> {
        let matcher = SkimMatcherV2::default();
        let query = fold_accents(&name.to_lowercase());

        self.book_names()
            .filter_map(|canonical| {
                let score = matcher.fuzzy_match(&fold_accents(&canonical.to_lowercase()), &query)?;
                Some((score, canonical))
            })
            .max_by_key(|&(score, _)| score)
            .map(|(_, canonical)| canonical)
    }
}

lazy_static! {
    static ref ENGLISH: Lexicon = Lexicon::new(books::ENGLISH);
    static ref SPANISH: Lexicon = Lexicon::new(books::SPANISH);
}

/// Lexicon for the given language.
pub fn lexicon(language: BibleLanguage) -> &'static Lexicon {
    match language {
        BibleLanguage::En => &*ENGLISH,
        BibleLanguage::Sp => &*SPANISH,
    }
}

/// Normalize a book token to its canonical display name in `language`.
pub fn canonical_book_name(language: BibleLanguage, name: &str) -> Option<&'static str> {
    lexicon(language).canonical(name)
}

/// Suggest the closest known book for a rejected token.
pub fn suggest_book(language: BibleLanguage, name: &str) -> Option<&'static str> {
    lexicon(language).suggest(name)
}

/// Lowercased, accent-folded key with whitespace and dots removed.
fn lookup_key(name: &str) -> String {
    fold_accents(&name.to_lowercase())
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect()
}

fn fold_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
