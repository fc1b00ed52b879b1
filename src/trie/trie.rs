use std::fmt::{Debug, Formatter};

use log::trace;
use metrics::increment_counter;

use crate::alphabet::Alphabet;
use crate::config::TrieConfig;
use crate::error::Result;
use crate::trie::node::TrieNode;

/// A prefix tree over a configurable alphabet.
///
/// Words are only ever added; nodes are never removed or moved once created.
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) alphabet: Alphabet,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::with_config(TrieConfig::default())
    }

    pub fn with_config(config: TrieConfig) -> Trie {
        Trie {
            root: TrieNode::new(config.alphabet.len()),
            alphabet: config.alphabet,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Adds `word`. The whole word is validated first, so a word with an
    /// out-of-alphabet character leaves the tree untouched.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        self.alphabet.validate(word)?;

        let mut current = &mut self.root;
        for symbol in self.alphabet.symbols(word) {
            current = current.get_or_create_child(symbol?)?;
        }
        current.set_terminal(true);

        trace!("inserted {:?}", word);
        increment_counter!("trie_words_inserted");
        Ok(())
    }

    /// True iff `word` itself was inserted; a bare prefix of other words is not enough.
    pub fn search(&self, word: &str) -> Result<bool> {
        Ok(self.get_node(word)?
            .map(TrieNode::is_terminal)
            .unwrap_or(false))
    }

    /// True iff some inserted word starts with `prefix`. The empty prefix always matches.
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        Ok(self.get_node(prefix)?.is_some())
    }

    fn get_node(&self, word: &str) -> Result<Option<&TrieNode>> {
        self.alphabet.validate(word)?;

        let mut current = &self.root;
        for symbol in self.alphabet.symbols(word) {
            match current.get_child(symbol?) {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

/// Nodes deeper than this print as `{..}` in `Debug` output.
const MAX_DEBUG_DEPTH: usize = 64;

struct NodeView<'a> {
    node: &'a TrieNode,
    alphabet: &'a Alphabet,
    depth: usize,
}

impl Debug for NodeView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.depth >= MAX_DEBUG_DEPTH {
            return f.write_str("{..}");
        }
        let mut map = f.debug_map();
        if self.node.is_terminal() {
            map.entry(&"$", &true);
        }
        for (symbol, child) in self.node.children() {
            let letter = self.alphabet.char_of(symbol).unwrap_or('?');
            map.entry(&letter, &NodeView { node: child, alphabet: self.alphabet, depth: self.depth + 1 });
        }
        map.finish()
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("alphabet", &self.alphabet)
            .field("root", &NodeView { node: &self.root, alphabet: &self.alphabet, depth: 0 })
            .finish()
    }
}
