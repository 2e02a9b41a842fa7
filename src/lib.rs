//! `VerseLink` - turn selected scripture references into Bible links.
//!
//! A selection such as `John 3:16-18, 4:1 NIV` is parsed into a book, verse
//! ranges and a version, then rendered as markdown links through a
//! user-supplied URL template.

pub mod bible;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod link;
pub mod reference;

pub use command::produce_replacement_text;
pub use config::Settings;
