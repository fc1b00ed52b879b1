pub mod node;
pub mod trie;
pub mod shared;

mod batch;

pub use node::TrieNode;
pub use shared::SharedTrie;
pub use trie::Trie;
