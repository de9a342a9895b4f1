//! # Character Vocabulary Index

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{GraphonemeError, Result};
use crate::vocab::Sentinel;

/// How a registered sequence is split into symbols.
///
/// Fixed at [`CharMap`] construction; a map never changes its
/// tokenization over its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenization {
    /// One symbol per character.
    Characters,

    /// Space-delimited symbols.
    ///
    /// Used for multi-character phoneme inventories, where a symbol
    /// like `"ae"` is an indivisible unit.
    Whitespace,
}

impl Tokenization {
    /// Split a sequence into symbols under this tokenization.
    pub fn split(
        self,
        sequence: &str,
    ) -> Vec<String> {
        match self {
            Tokenization::Characters => sequence.chars().map(String::from).collect(),
            Tokenization::Whitespace => sequence
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Bidirectional symbol <-> index vocabulary for one language side.
///
/// A `CharMap` is created empty (holding only the four reserved
/// [`Sentinel`] entries), then populated by registering sequences from
/// a training corpus. Indices are dense and stable: once a symbol is
/// assigned an index it is never re-assigned, so index `0..=3` always
/// belong to the sentinels and `index_to_symbol` can be stored as an
/// index-ordered vector.
///
/// After training the map is immutable in practice; every encode,
/// decode, and training call site receives it by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharMap {
    name: String,
    tokenization: Tokenization,
    symbol_to_index: HashMap<String, usize>,
    index_to_symbol: Vec<String>,
    symbol_counts: HashMap<String, u64>,
    max_length: usize,
}

impl CharMap {
    /// Create an empty map seeded with the four reserved sentinels.
    ///
    /// ## Arguments
    /// * `name` - identifier for the language side.
    /// * `tokenization` - how registered sequences are split.
    ///
    /// ## Returns
    /// A new `CharMap` with `vocab_size == 4` and `max_length == 0`.
    pub fn new<S: Into<String>>(
        name: S,
        tokenization: Tokenization,
    ) -> Self {
        let index_to_symbol: Vec<String> =
            Sentinel::ALL.iter().map(|s| s.symbol().to_owned()).collect();
        let symbol_to_index = index_to_symbol
            .iter()
            .enumerate()
            .map(|(i, sym)| (sym.clone(), i))
            .collect();

        Self {
            name: name.into(),
            tokenization,
            symbol_to_index,
            index_to_symbol,
            symbol_counts: HashMap::new(),
            max_length: 0,
        }
    }

    /// The identifier for this language side.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tokenization fixed at construction.
    pub fn tokenization(&self) -> Tokenization {
        self.tokenization
    }

    /// Count of distinct symbols, including the 4 reserved sentinels.
    pub fn vocab_size(&self) -> usize {
        self.index_to_symbol.len()
    }

    /// Length in symbols of the longest sequence ever registered.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Split a sequence into symbols under this map's tokenization.
    pub fn tokenize(
        &self,
        sequence: &str,
    ) -> Vec<String> {
        self.tokenization.split(sequence)
    }

    /// Register a sequence from the training corpus.
    ///
    /// Each unseen symbol is assigned the next dense index; seen
    /// symbols (other than the `Start`/`End` control sentinels) have
    /// their frequency count incremented. `max_length` is raised to the
    /// sequence's symbol count if it is the longest seen so far.
    ///
    /// Re-registering a sequence only changes counts and `max_length`;
    /// it never re-assigns an index.
    pub fn register(
        &mut self,
        sequence: &str,
    ) {
        let symbols = self.tokenize(sequence);
        self.max_length = self.max_length.max(symbols.len());
        for symbol in symbols {
            self.register_symbol(symbol);
        }
    }

    fn register_symbol(
        &mut self,
        symbol: String,
    ) {
        if self.symbol_to_index.contains_key(&symbol) {
            let is_control = Sentinel::ALL
                .iter()
                .any(|s| s.is_control() && s.symbol() == symbol);
            if !is_control {
                *self.symbol_counts.entry(symbol).or_insert(0) += 1;
            }
        } else {
            let index = self.vocab_size();
            self.index_to_symbol.push(symbol.clone());
            self.symbol_counts.insert(symbol.clone(), 1);
            self.symbol_to_index.insert(symbol, index);
        }
    }

    /// The assigned index for a symbol, or the `Unknown` sentinel's
    /// index if the symbol was never registered. Never fails.
    pub fn index_of(
        &self,
        symbol: &str,
    ) -> usize {
        self.symbol_to_index
            .get(symbol)
            .copied()
            .unwrap_or(Sentinel::Unknown.index())
    }

    /// The symbol assigned to an index.
    ///
    /// ## Returns
    /// The symbol, or [`GraphonemeError::SymbolIndexOutOfRange`] if the
    /// index was never assigned. That can only happen when decode logic
    /// is handed a tensor mismatched to this vocabulary.
    pub fn symbol_of(
        &self,
        index: usize,
    ) -> Result<&str> {
        self.index_to_symbol
            .get(index)
            .map(String::as_str)
            .ok_or(GraphonemeError::SymbolIndexOutOfRange {
                index,
                vocab_size: self.vocab_size(),
            })
    }

    /// Observed frequency for a symbol; 0 if never counted.
    pub fn count_of(
        &self,
        symbol: &str,
    ) -> u64 {
        self.symbol_counts.get(symbol).copied().unwrap_or(0)
    }

    /// Returns true if the symbol has an assigned index.
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.symbol_to_index.contains_key(symbol)
    }

    /// Check the internal invariants of a (possibly deserialized) map.
    ///
    /// Verifies the sentinel seats and that `symbol_to_index` is the
    /// exact inverse of `index_to_symbol`.
    pub fn validate(&self) -> Result<()> {
        for sentinel in Sentinel::ALL {
            if self.index_to_symbol.get(sentinel.index()).map(String::as_str)
                != Some(sentinel.symbol())
            {
                return Err(GraphonemeError::VocabConflict(format!(
                    "map {:?}: sentinel seat {} is not reserved",
                    self.name,
                    sentinel.index(),
                )));
            }
        }

        if self.symbol_to_index.len() != self.index_to_symbol.len() {
            return Err(GraphonemeError::VocabConflict(format!(
                "map {:?}: {} symbols but {} indices",
                self.name,
                self.symbol_to_index.len(),
                self.index_to_symbol.len(),
            )));
        }
        for (index, symbol) in self.index_to_symbol.iter().enumerate() {
            if self.symbol_to_index.get(symbol) != Some(&index) {
                return Err(GraphonemeError::VocabConflict(format!(
                    "map {:?}: symbol {:?} does not invert to index {}",
                    self.name, symbol, index,
                )));
            }
        }
        Ok(())
    }
}
