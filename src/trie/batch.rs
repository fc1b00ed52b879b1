use rayon::prelude::*;

use crate::error::Result;
use crate::trie::trie::Trie;

impl Trie {
    /// Inserts every word, or none of them if any word fails validation.
    pub fn insert_all(&mut self, words: &[&str]) -> Result<()> {
        let alphabet = &self.alphabet;
        words.par_iter().try_for_each(|word| alphabet.validate(word))?;
        words.iter().try_for_each(|word| self.insert(word))
    }

    /// Runs [`Trie::search`] for each word in parallel, keeping input order.
    pub fn search_all(&self, words: &[&str]) -> Vec<Result<bool>> {
        words.par_iter()
            .map(|word| self.search(word))
            .collect()
    }

    pub fn starts_with_all(&self, prefixes: &[&str]) -> Vec<Result<bool>> {
        prefixes.par_iter()
            .map(|prefix| self.starts_with(prefix))
            .collect()
    }
}
