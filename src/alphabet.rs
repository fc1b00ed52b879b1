use std::collections::{HashMap, HashSet};
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::str::FromStr;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{anychar, none_of};
use nom::combinator::{all_consuming, map, map_opt};
use nom::multi::many1;
use nom::sequence::{preceded, separated_pair};
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrieError};

/// Index of a child slot, resolved from a character by an [`Alphabet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(usize);

impl Symbol {
    pub(crate) fn at(index: usize) -> Symbol {
        Symbol(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// The ordered set of characters a trie can branch on.
///
/// Serialized as its spec string, e.g. `"a-z"` or `"0-9a-f"`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    // Set when the symbols form one unbroken run of code points.
    contiguous_from: Option<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// `a` through `z`.
    pub fn lowercase() -> Alphabet {
        Alphabet::build(('a'..='z').collect())
    }

    pub fn from_symbols(symbols: Vec<char>) -> Result<Alphabet> {
        if symbols.is_empty() {
            return Err(TrieError::InvalidAlphabet("alphabet is empty".to_string()));
        }
        let alphabet = Alphabet::build(symbols);
        if alphabet.index.len() != alphabet.symbols.len() {
            let mut seen = HashSet::new();
            let duplicate = alphabet.symbols.iter()
                .find(|&&c| !seen.insert(c))
                .copied()
                .unwrap_or_default();
            return Err(TrieError::InvalidAlphabet(format!("duplicate symbol {:?}", duplicate)));
        }
        Ok(alphabet)
    }

    fn build(symbols: Vec<char>) -> Alphabet {
        let contiguous = symbols.windows(2)
            .all(|pair| pair[1] as u32 == pair[0] as u32 + 1);
        let contiguous_from = if contiguous { symbols.first().copied() } else { None };
        let index = symbols.iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();
        Alphabet { symbols, contiguous_from, index }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol_of(&self, c: char) -> Option<Symbol> {
        match self.contiguous_from {
            Some(first) => (c as u32).checked_sub(first as u32)
                .map(|offset| offset as usize)
                .filter(|&offset| offset < self.symbols.len())
                .map(Symbol),
            None => self.index.get(&c).copied().map(Symbol),
        }
    }

    pub fn char_of(&self, symbol: Symbol) -> Option<char> {
        self.symbols.get(symbol.0).copied()
    }

    /// Resolves every character of `word`, failing on the first one outside the alphabet.
    pub fn symbols<'a>(&'a self, word: &'a str) -> impl Iterator<Item=Result<Symbol>> + 'a {
        word.chars()
            .enumerate()
            .map(move |(position, symbol)| {
                self.symbol_of(symbol)
                    .ok_or(TrieError::InvalidSymbol { symbol, position })
            })
    }

    pub fn validate(&self, word: &str) -> Result<()> {
        self.symbols(word).try_for_each(|symbol| symbol.map(|_| ()))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::lowercase()
    }
}

fn spec_symbol(input: &str) -> IResult<&str, char> {
    alt((
        preceded(tag("\\"), anychar),
        none_of("-\\")
    ))(input)
}

fn spec_range(input: &str) -> IResult<&str, Vec<char>> {
    map_opt(separated_pair(spec_symbol, tag("-"), spec_symbol),
            |(lo, hi)| if lo <= hi { Some((lo..=hi).collect()) } else { None })(input)
}

fn spec_item(input: &str) -> IResult<&str, Vec<char>> {
    alt((spec_range, map(spec_symbol, |c| vec![c])))(input)
}

fn alphabet_spec(input: &str) -> IResult<&str, Vec<char>> {
    map(many1(spec_item),
        |groups| groups.into_iter().flatten().collect())(input)
}

impl FromStr for Alphabet {
    type Err = TrieError;

    fn from_str(s: &str) -> Result<Alphabet> {
        let (_, symbols) = all_consuming(alphabet_spec)(s)
            .map_err(|e| TrieError::InvalidAlphabet(format!("cannot parse {:?}: {}", s, e)))?;
        Alphabet::from_symbols(symbols)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = TrieError;

    fn try_from(value: String) -> Result<Alphabet> {
        value.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> String {
        alphabet.to_string()
    }
}

fn write_spec_symbol(f: &mut Formatter<'_>, c: char) -> fmt::Result {
    if c == '-' || c == '\\' {
        f.write_char('\\')?;
    }
    f.write_char(c)
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let symbols = &self.symbols;
        let mut start = 0;
        while start < symbols.len() {
            let mut end = start;
            while end + 1 < symbols.len() && symbols[end + 1] as u32 == symbols[end] as u32 + 1 {
                end += 1;
            }
            if end - start >= 2 {
                write_spec_symbol(f, symbols[start])?;
                f.write_char('-')?;
                write_spec_symbol(f, symbols[end])?;
            } else {
                for &c in &symbols[start..=end] {
                    write_spec_symbol(f, c)?;
                }
            }
            start = end + 1;
        }
        Ok(())
    }
}

impl Debug for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::alphabet::Alphabet;
    use crate::error::TrieError;

    #[test]
    fn lowercase_indexes_by_offset() {
        let alphabet = Alphabet::lowercase();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.symbol_of('a').map(|s| s.index()), Some(0));
        assert_eq!(alphabet.symbol_of('z').map(|s| s.index()), Some(25));
        assert_eq!(alphabet.symbol_of('A'), None);
        assert_eq!(alphabet.symbol_of('{'), None);
        assert_eq!(alphabet.symbol_of('`'), None);
    }

    #[test]
    fn validate_reports_first_bad_char() {
        let alphabet = Alphabet::lowercase();
        assert!(alphabet.validate("apple").is_ok());
        assert!(alphabet.validate("").is_ok());
        match alphabet.validate("héllo1") {
            Err(TrieError::InvalidSymbol { symbol, position }) => {
                assert_eq!(symbol, 'é');
                assert_eq!(position, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_ranges_and_singles() {
        let alphabet: Alphabet = "0-9a-f'".parse().unwrap();
        assert_eq!(alphabet.len(), 17);
        assert_eq!(alphabet.symbol_of('0').map(|s| s.index()), Some(0));
        assert_eq!(alphabet.symbol_of('a').map(|s| s.index()), Some(10));
        assert_eq!(alphabet.symbol_of('\'').map(|s| s.index()), Some(16));
        assert_eq!(alphabet.symbol_of('g'), None);
    }

    #[test]
    fn parses_escaped_dash() {
        let alphabet: Alphabet = r"a-c\-\\".parse().unwrap();
        assert_eq!(alphabet.len(), 5);
        assert!(alphabet.symbol_of('-').is_some());
        assert!(alphabet.symbol_of('\\').is_some());
        assert_eq!(alphabet.to_string(), r"a-c\-\\");
    }

    #[test]
    fn rejects_bad_specs() {
        for spec in ["", "z-a", "a-", "-a", "aba", "a-cb"] {
            assert!(matches!(spec.parse::<Alphabet>(), Err(TrieError::InvalidAlphabet(_))),
                    "{:?} should be rejected", spec);
        }
    }

    #[test]
    fn display_collapses_runs() {
        let alphabet = Alphabet::from_symbols(vec!['a', 'b', 'x', 'y', 'z', '_']).unwrap();
        assert_eq!(alphabet.to_string(), "abx-z_");
        assert_eq!(alphabet.to_string().parse::<Alphabet>().unwrap(), alphabet);
        assert_eq!(Alphabet::lowercase().to_string(), "a-z");
    }

    #[test]
    fn serializes_as_spec_string() {
        let json = serde_json::to_string(&Alphabet::lowercase()).unwrap();
        assert_eq!(json, "\"a-z\"");
        let parsed: Alphabet = serde_json::from_str("\"0-9\"").unwrap();
        assert_eq!(parsed.len(), 10);
        assert!(serde_json::from_str::<Alphabet>("\"9-0\"").is_err());
    }
}
