use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::alphabet::Alphabet;
use crate::error::Result;

/// Construction-time settings for a [`Trie`](crate::trie::Trie).
///
/// ```json
/// { "alphabet": "a-z'" }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct TrieConfig {
    #[builder(default)]
    #[serde(default)]
    pub alphabet: Alphabet,
}

impl TrieConfig {
    pub fn from_json(json: &str) -> Result<TrieConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TrieConfig> {
        let path = path.as_ref();
        debug!("Reading config from {:?}", path);
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        TrieConfig::builder().build()
    }
}
