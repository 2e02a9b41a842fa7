//! The "Create link to Bible" command.
//!
//! Glues the parser and the formatter together behind the single operation the
//! host calls with its current selection and settings snapshot.

use crate::config::Settings;
use crate::link::format_reference;
use crate::reference::{parse_reference, ParsedReference};

/// Parse `selected_text` with the language and validation rules in `settings`.
pub fn parse_selection(selected_text: &str, settings: &Settings) -> ParsedReference {
    parse_reference(
        selected_text,
        settings.bible_language,
        &settings.default_version,
        settings.validate_book_name,
    )
}

/// Text to substitute for the selection: the joined links, or `""` when no
/// reference was recognized.
pub fn produce_replacement_text(selected_text: &str, settings: &Settings) -> String {
    let reference = parse_selection(selected_text, settings);
    if reference.is_empty() {
        return String::new();
    }

    format_reference(
        &reference,
        &settings.default_version,
        &settings.link_template,
        settings.encode_spaces_to_plus,
    )
}
