//! Application constants.
//!
//! Centralizes template tokens, separators and configuration names.

/// Link template placeholders and dialect markers.
pub mod template {
    /// Placeholder for the combined book/chapter/verse segment, or the start verse
    /// in the multi-token dialect.
    pub const VERSE_PLACEHOLDER: &str = "{{verse}}";

    /// Placeholder for the version (translation) token.
    pub const VERSION_PLACEHOLDER: &str = "{{version}}";

    /// Placeholder for the book name in the multi-token dialect.
    pub const BOOK_PLACEHOLDER: &str = "{{book}}";

    /// Placeholder for the chapter number in the multi-token dialect.
    pub const CHAPTER_PLACEHOLDER: &str = "{{chapter}}";

    /// Markers that must all appear for the multi-token dialect to be selected.
    pub const MULTI_TOKEN_MARKERS: [&str; 3] = ["book", "chapter", "verse"];
}

/// Separators used when rendering links.
pub mod link {
    /// Space encoding when spaces are encoded as plus signs.
    pub const PLUS_SPACE: &str = "+";

    /// Percent-encoded space.
    pub const PERCENT_SPACE: &str = "%20";

    /// Separator between the chapter and verse in the URI.
    pub const URI_VERSE_SEPARATOR: char = '.';

    /// Separator between the chapter and verse in the label.
    pub const LABEL_VERSE_SEPARATOR: char = ':';

    /// Joins the links of a multi-range reference.
    pub const LINK_JOIN: &str = ", ";
}

/// Host command identity.
pub mod command {
    /// Stable command identifier.
    pub const ID: &str = "create-link-to-bible";

    /// Human-readable command name.
    pub const NAME: &str = "Create link to Bible";
}

/// Settings persistence and environment configuration.
pub mod settings {
    /// Directory name under the user config directory.
    pub const CONFIG_DIR_NAME: &str = "verselink";

    /// Settings file name.
    pub const FILE_NAME: &str = "settings.json";

    /// Environment variable overriding the Bible language.
    pub const ENV_LANGUAGE: &str = "VERSELINK_LANGUAGE";

    /// Environment variable overriding the default version.
    pub const ENV_DEFAULT_VERSION: &str = "VERSELINK_DEFAULT_VERSION";

    /// Environment variable overriding the space encoding.
    pub const ENV_ENCODE_SPACES_TO_PLUS: &str = "VERSELINK_ENCODE_SPACES_TO_PLUS";

    /// Environment variable overriding the link template.
    pub const ENV_LINK_TEMPLATE: &str = "VERSELINK_LINK_TEMPLATE";

    /// Environment variable overriding book name validation.
    pub const ENV_VALIDATE_BOOK_NAME: &str = "VERSELINK_VALIDATE_BOOK_NAME";
}
