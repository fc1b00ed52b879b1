use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

use prefix_trie::config::TrieConfig;
use prefix_trie::wordlist::{FileFormat, Wordlist};

/// Insert a word into a prefix tree, then report whether the word is found
/// and whether any stored word starts with the prefix.
#[derive(StructOpt)]
#[structopt(name = "prefix-trie")]
struct Cli {
    /// Word to insert and search for
    #[structopt(long, default_value = "apple")]
    word: String,
    /// Prefix to test
    #[structopt(long, default_value = "app")]
    prefix: String,
    /// Word list to load before inserting the word
    #[structopt(long, parse(from_os_str))]
    words: Option<PathBuf>,
    /// Column separator in the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word
    #[structopt(long, default_value = "0")]
    column: usize,
    /// JSON config file
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Alphabet spec such as `a-z'`; overrides the config file
    #[structopt(long)]
    alphabet: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::from_args();
    let stdout = io::stdout();
    run(&args, &mut stdout.lock())
}

fn run<W: Write>(args: &Cli, out: &mut W) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => TrieConfig::from_file(path)
            .with_context(|| format!("loading config {:?}", path))?,
        None => TrieConfig::default(),
    };
    if let Some(spec) = &args.alphabet {
        config.alphabet = spec.parse()?;
    }

    let mut wordlist = Wordlist::with_config(config);

    if let Some(path) = &args.words {
        let format = match args.delimiter {
            Some(delimiter) => FileFormat::builder().delimiter(delimiter).word_column(args.column).build(),
            None => FileFormat::builder().word_column(args.column).build(),
        };
        let report = wordlist.load_file(path, &format)
            .with_context(|| format!("loading words from {:?}", path))?;
        info!("{} words loaded, {} rejected", report.loaded, report.rejected);
    }

    wordlist.insert(&args.word)?;
    writeln!(out, "{}", wordlist.search(&args.word)?)?;
    writeln!(out, "{}", wordlist.starts_with(&args.prefix)?)?;
    Ok(())
}
