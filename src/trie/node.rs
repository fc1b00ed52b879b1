use std::fmt::{Debug, Formatter};
use std::iter::repeat_with;

use metrics::increment_counter;

use crate::alphabet::Symbol;
use crate::error::{Result, TrieError};

/// One branching point: a child slot per alphabet symbol plus the terminal flag.
///
/// Every child is owned by exactly one slot, so the nodes always form a tree.
pub struct TrieNode {
    children: Box<[Option<Box<TrieNode>>]>,
    is_terminal: bool,
}

impl TrieNode {
    /// Creates an empty, non-terminal node with `width` child slots.
    pub fn new(width: usize) -> TrieNode {
        increment_counter!("trie_nodes_created");
        TrieNode {
            children: repeat_with(|| None).take(width).collect(),
            is_terminal: false,
        }
    }

    pub fn width(&self) -> usize {
        self.children.len()
    }

    /// `None` when the slot is empty or `symbol` is wider than this node.
    pub fn get_child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children.get(symbol.index())
            .and_then(|slot| slot.as_deref())
    }

    pub fn get_child_mut(&mut self, symbol: Symbol) -> Option<&mut TrieNode> {
        self.children.get_mut(symbol.index())
            .and_then(|slot| slot.as_deref_mut())
    }

    fn slot_mut(&mut self, symbol: Symbol) -> Result<&mut Option<Box<TrieNode>>> {
        let width = self.width();
        self.children.get_mut(symbol.index())
            .ok_or(TrieError::SymbolOutOfRange { index: symbol.index(), width })
    }

    /// Installs `node` under `symbol`, dropping whatever subtree was there.
    ///
    /// Fails with [`TrieError::SymbolOutOfRange`] if `symbol` came from an
    /// alphabet wider than this node.
    pub fn set_child(&mut self, symbol: Symbol, node: TrieNode) -> Result<()> {
        *self.slot_mut(symbol)? = Some(Box::new(node));
        Ok(())
    }

    pub fn get_or_create_child(&mut self, symbol: Symbol) -> Result<&mut TrieNode> {
        let width = self.width();
        let child = self.slot_mut(symbol)?
            .get_or_insert_with(|| Box::new(TrieNode::new(width)));
        Ok(&mut **child)
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn set_terminal(&mut self, is_terminal: bool) {
        self.is_terminal = is_terminal;
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    pub(crate) fn children(&self) -> impl Iterator<Item=(Symbol, &TrieNode)> {
        self.children.iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|child| (Symbol::at(i), child)))
    }
}

// Iterative: a chain is as deep as the longest word inserted.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> = self.children.iter_mut()
            .filter_map(Option::take)
            .collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children()
                .map(|(symbol, _)| symbol.index())
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
