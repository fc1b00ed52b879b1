use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrieError {
    /// A character outside the trie's alphabet. `position` counts chars, not bytes.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// A [`Symbol`](crate::alphabet::Symbol) from an alphabet wider than the node it was used on.
    #[error("symbol index {index} out of range for node of width {width}")]
    SymbolOutOfRange { index: usize, width: usize },

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrieError>;
