//! `VerseLink` - run the "Create link to Bible" command from the terminal.
//!
//! Reads the selection from arguments, stdin or the clipboard, prints the
//! replacement text (or puts it back on the clipboard).

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verselink::bible::BibleLanguage;
use verselink::constants;
use verselink::{clipboard, produce_replacement_text, Settings};

#[derive(Parser)]
#[command(name = "verselink")]
#[command(
    about = constants::command::NAME,
    long_about = "Turn a scripture reference such as \"John 3:16-18, 4:1 NIV\" \
                  into markdown links built from a URL template."
)]
#[command(version)]
struct Args {
    /// Reference text; read from stdin when omitted
    selection: Vec<String>,

    /// Take the selection from the clipboard and write the links back to it
    #[arg(long, conflicts_with = "selection")]
    clipboard: bool,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    settings: Option<String>,

    /// Book name language: en or sp
    #[arg(long, value_name = "CODE")]
    language: Option<String>,

    /// Version used when the reference names none
    #[arg(long, value_name = "VERSION")]
    default_version: Option<String>,

    /// URL template with {{verse}} and {{version}} placeholders, or
    /// {{book}}, {{chapter}}, {{verse}} and {{version}}
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<String>,

    /// Encode spaces as %20
    #[arg(long, conflicts_with = "plus_spaces")]
    percent_spaces: bool,

    /// Encode spaces as +
    #[arg(long)]
    plus_spaces: bool,

    /// Only accept known book names
    #[arg(long, conflicts_with = "no_validate")]
    validate: bool,

    /// Accept any book name
    #[arg(long)]
    no_validate: bool,

    /// Persist the effective settings to the settings file
    #[arg(long)]
    save: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn settings_path(&self) -> Result<PathBuf> {
        match &self.settings {
            Some(path) => Ok(Settings::expand_path(path)),
            None => Ok(Settings::settings_path()?),
        }
    }

    /// Settings file and environment, before flags.
    fn stored_settings(&self) -> Result<Settings> {
        let Some(path) = &self.settings else {
            return Settings::load().context("Failed to load settings");
        };
        let path = Settings::expand_path(path);
        let mut settings = Settings::load_from_path(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?;
        settings.apply_env();
        Ok(settings)
    }

    /// Settings file, then environment, then flags.
    fn effective_settings(&self) -> Result<Settings> {
        let mut settings = self.stored_settings()?;

        if let Some(code) = &self.language {
            settings.bible_language = BibleLanguage::from_code(code);
        }
        if let Some(version) = &self.default_version {
            settings.default_version.clone_from(version);
        }
        if let Some(link_template) = &self.template {
            settings.link_template.clone_from(link_template);
        }
        if self.percent_spaces {
            settings.encode_spaces_to_plus = false;
        } else if self.plus_spaces {
            settings.encode_spaces_to_plus = true;
        }
        if self.validate {
            settings.validate_book_name = true;
        } else if self.no_validate {
            settings.validate_book_name = false;
        }

        Ok(settings)
    }

    fn read_selection(&self) -> Result<String> {
        if self.clipboard {
            return Ok(clipboard::read_selection()?);
        }
        if !self.selection.is_empty() {
            return Ok(self.selection.join(" "));
        }

        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read selection from stdin")?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = args.effective_settings()?;

    if args.save {
        let path = args.settings_path()?;
        settings
            .save_to_path(&path)
            .with_context(|| format!("Failed to save settings to {}", path.display()))?;
    }

    let selection = args.read_selection()?;
    let replacement = produce_replacement_text(&selection, &settings);
    tracing::debug!(command = constants::command::ID, "{selection:?} -> {replacement:?}");

    if args.clipboard {
        clipboard::write_replacement(&replacement)?;
    } else {
        println!("{replacement}");
    }

    Ok(())
}
