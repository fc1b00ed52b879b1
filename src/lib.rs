//! A prefix tree (trie) supporting insert, exact search and prefix tests over
//! a configurable alphabet (`a`-`z` by default).
//!
//! ```
//! use prefix_trie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("apple").unwrap();
//! assert!(trie.search("apple").unwrap());
//! assert!(!trie.search("app").unwrap());
//! assert!(trie.starts_with("app").unwrap());
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod trie;
pub mod wordlist;

pub use alphabet::{Alphabet, Symbol};
pub use config::TrieConfig;
pub use error::{Result, TrieError};
pub use trie::{SharedTrie, Trie, TrieNode};
