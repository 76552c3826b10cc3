//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap
//!

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Compatibility table filter - hide and show rows of an HTML game table
#[derive(Parser, Debug)]
#[command(
    name = "compat-filter",
    about = "Compatibility table filter - hide and show rows of an HTML game table",
    long_about = "Compatibility table filter - filters the rows of an HTML compatibility table
by space-separated terms. Every term must appear in a game row for it to stay visible;
year headers without a visible game are hidden, engine and footnote rows always stay.

    EXAMPLES:
        compat-filter compat.html -p \"unreal 2004\"   # Print matching rows
        compat-filter compat.html -u \"https://host/compat.html?deus+ex\"
        compat-filter compat.html -p bioshock -o filtered.html
        compat-filter compat.html -i                 # Live filter in the terminal

    USAGE TIP:
        In interactive mode type to filter, Enter to re-apply, Ctrl-U to clear, Esc to quit
    "
)]
#[command(version)]
pub struct Cli {
    /// HTML document containing the table
    #[arg(help = "HTML document containing the compatibility table")]
    pub file: PathBuf,

    /// Filter phrase
    #[arg(short, long, help = "Filter phrase (space-separated terms, all must match)")]
    pub phrase: Option<String>,

    /// Page URL whose query string seeds the phrase
    #[arg(
        short,
        long,
        help = "Page URL or query string to seed the phrase from (ignored when --phrase is given)"
    )]
    pub url: Option<String>,

    /// Id of the table to filter
    #[arg(short, long, help = "Id attribute of the table (default: compat)")]
    pub table_id: Option<String>,

    /// Write the filtered document here
    #[arg(short, long, help = "Write the filtered HTML document to this path")]
    pub output: Option<PathBuf>,

    /// Interactive mode
    #[arg(short, long, help = "Filter live in a terminal UI")]
    pub interactive: bool,

    /// Config file path
    #[arg(short, long, help = "Config file (default: $COMPAT_FILTER_CONFIG or the user config dir)")]
    pub config: Option<PathBuf>,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to a temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate_with_limit(&self, max_phrase_length: usize) -> bool {
        if !self.file.exists() {
            eprintln!("Error: Input file does not exist: {}", self.file.display());
            return false;
        }
        if !self.file.is_file() {
            eprintln!("Error: Input path must be a file");
            return false;
        }

        if let Some(id) = &self.table_id {
            if id.trim().is_empty() {
                eprintln!("Error: Table id cannot be empty");
                return false;
            }
        }

        if let Some(phrase) = &self.phrase {
            if phrase.chars().count() > max_phrase_length {
                eprintln!(
                    "Error: Phrase cannot be longer than {} characters",
                    max_phrase_length
                );
                return false;
            }
        }

        true
    }

    /// Table id from the flag, falling back to the config
    pub fn table_id(&self, config: &Config) -> String {
        match &self.table_id {
            Some(id) => id.clone(),
            None => config.table.id.clone(),
        }
    }

    /// Where the initial phrase comes from
    pub fn phrase_source(&self) -> PhraseSource {
        match (&self.phrase, &self.url) {
            (Some(phrase), _) => PhraseSource::Phrase(phrase.clone()),
            (None, Some(url)) => PhraseSource::Url(url.clone()),
            (None, None) => PhraseSource::Empty,
        }
    }
}

/// Origin of the initial filter phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSource {
    Phrase(String),
    Url(String),
    Empty,
}

impl PhraseSource {
    pub fn name(&self) -> &'static str {
        match self {
            PhraseSource::Phrase(_) => "phrase",
            PhraseSource::Url(_) => "url",
            PhraseSource::Empty => "empty",
        }
    }
}
