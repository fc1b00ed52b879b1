#[cfg(loom)]
use loom::sync::{Arc, RwLock};
#[cfg(not(loom))]
use std::sync::{Arc, RwLock};
use std::sync::PoisonError;

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::trie::trie::Trie;

/// A [`Trie`] behind a reader-writer lock, shareable across threads.
///
/// Inserts take the lock exclusively; searches share it. Operations are
/// linearizable: a reader sees a word either completely or not at all.
#[derive(Clone)]
pub struct SharedTrie {
    inner: Arc<RwLock<Trie>>,
}

impl SharedTrie {
    pub fn new(trie: Trie) -> SharedTrie {
        SharedTrie { inner: Arc::new(RwLock::new(trie)) }
    }

    // Poisoning is ignored. Insert validates before it mutates, so the tree
    // behind a poisoned lock is still well formed.
    pub fn insert(&self, word: &str) -> Result<()> {
        self.inner.write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(word)
    }

    pub fn search(&self, word: &str) -> Result<bool> {
        self.inner.read()
            .unwrap_or_else(PoisonError::into_inner)
            .search(word)
    }

    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        self.inner.read()
            .unwrap_or_else(PoisonError::into_inner)
            .starts_with(prefix)
    }

    pub fn alphabet(&self) -> Alphabet {
        self.inner.read()
            .unwrap_or_else(PoisonError::into_inner)
            .alphabet()
            .clone()
    }
}

impl Default for SharedTrie {
    fn default() -> Self {
        SharedTrie::new(Trie::new())
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        SharedTrie::new(trie)
    }
}
