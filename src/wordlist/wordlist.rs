use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use log::{info, warn};
use typed_builder::TypedBuilder;

use crate::config::TrieConfig;
use crate::error::{Result, TrieError};
use crate::trie::Trie;

/// A trie filled from a word list file, one word per line.
#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    /// Column separator; without one the whole line is the word.
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: usize,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line.trim()),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column)
                .map(str::trim),
        }
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub rejected: usize,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn with_config(config: TrieConfig) -> Wordlist {
        Wordlist { trie: Trie::with_config(config) }
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str) -> Result<()>;
            pub fn search(&self, word: &str) -> Result<bool>;
            pub fn starts_with(&self, prefix: &str) -> Result<bool>;
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn into_trie(self) -> Trie {
        self.trie
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadReport> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);
        let file = File::open(path)?;
        self.load(BufReader::new(file), format)
    }

    /// Inserts every non-blank word. Words the alphabet rejects and lines
    /// missing the word column are skipped and counted; I/O errors abort.
    pub fn load<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadReport> {
        let start = Instant::now();
        let mut report = LoadReport::new(0, 0);

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let word = match format.parse_line(&line) {
                Some(word) if !word.is_empty() => word,
                _ => {
                    warn!("line {}: no word in column {}", number + 1, format.word_column);
                    report.rejected += 1;
                    continue;
                }
            };
            match self.trie.insert(word) {
                Ok(()) => report.loaded += 1,
                Err(e @ TrieError::InvalidSymbol { .. }) => {
                    warn!("line {}: skipping {:?}: {}", number + 1, word, e);
                    report.rejected += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!("Read {} words in {:.3}s [{} rejected]",
              report.loaded, start.elapsed().as_secs_f64(), report.rejected);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use maplit::hashset;

    use crate::wordlist::{FileFormat, LoadReport, Wordlist};

    #[test]
    fn loads_one_word_per_line() {
        let mut wordlist = Wordlist::new();
        let input = "hello\nhelp\n\ngoodbye\n  good  \n";
        let report = wordlist.load(Cursor::new(input), &FileFormat::default()).unwrap();
        assert_eq!(report, LoadReport::new(4, 0));
        for word in hashset! {"hello", "help", "goodbye", "good"} {
            assert!(wordlist.search(word).unwrap(), "{} missing", word);
        }
        assert!(!wordlist.search("").unwrap());
    }

    #[test]
    fn skips_words_outside_alphabet() {
        let mut wordlist = Wordlist::new();
        let input = "apple\nDon't\nbanana\ncafé\n";
        let report = wordlist.load(Cursor::new(input), &FileFormat::default()).unwrap();
        assert_eq!(report, LoadReport::new(2, 2));
        assert!(wordlist.search("apple").unwrap());
        assert!(wordlist.search("banana").unwrap());
        assert!(!wordlist.starts_with("c").unwrap());
    }

    #[test]
    fn reads_delimited_column() {
        let mut wordlist = Wordlist::new();
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let input = "12\tcherry\n7\tchess\n3\n";
        let report = wordlist.load(Cursor::new(input), &format).unwrap();
        assert_eq!(report, LoadReport::new(2, 1));
        assert!(wordlist.search("chess").unwrap());
        assert!(wordlist.starts_with("che").unwrap());
        assert!(!wordlist.search("che").unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut wordlist = Wordlist::new();
        assert!(wordlist.load_file("/nonexistent/words.txt", &FileFormat::default()).is_err());
    }
}
