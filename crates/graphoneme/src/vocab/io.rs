//! # Vocabulary IO

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::vocab::{CharMap, Tokenization};

/// The two vocabularies of one trained model, serialized as one unit.
///
/// The input side is always character-tokenized; the output side is
/// character- or phoneme-tokenized depending on configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabPair {
    /// Vocabulary for the spelling (encoder) side.
    pub input: CharMap,

    /// Vocabulary for the transcription (decoder) side.
    pub output: CharMap,
}

impl VocabPair {
    /// Build both vocabularies from a pair corpus.
    ///
    /// The output sequences are expected to already be wrapped with the
    /// `Start`/`End` sentinel markers by the corpus stage.
    ///
    /// ## Arguments
    /// * `input_name` - identifier for the input (spelling) side.
    /// * `output_name` - identifier for the output (transcription) side.
    /// * `output_tokenization` - how the output side splits symbols.
    /// * `pairs` - (spelling, transcription) training pairs.
    pub fn from_pairs<I, A, B>(
        input_name: &str,
        output_name: &str,
        output_tokenization: Tokenization,
        pairs: I,
    ) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut input = CharMap::new(input_name, Tokenization::Characters);
        let mut output = CharMap::new(output_name, output_tokenization);

        for (spelling, transcription) in pairs {
            input.register(spelling.as_ref());
            output.register(transcription.as_ref());
        }

        Self { input, output }
    }

    /// Check the invariants of both maps.
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        self.output.validate()
    }
}

/// Save a [`VocabPair`] to a JSON file.
///
/// # Arguments
/// * `pair` - the vocabularies to save.
/// * `path` - the path to save them to.
pub fn save_vocab_pair_path<P: AsRef<Path>>(
    pair: &VocabPair,
    path: P,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_vocab_pair(pair, &mut writer)
}

/// Save a [`VocabPair`] to a [`Write`] writer.
pub fn write_vocab_pair<W: Write>(
    pair: &VocabPair,
    writer: &mut W,
) -> Result<()> {
    serde_json::to_writer_pretty(writer, pair)?;
    Ok(())
}

/// Load a [`VocabPair`] from a JSON file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_pair_path<P: AsRef<Path>>(path: P) -> Result<VocabPair> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_vocab_pair(reader)
}

/// Load a [`VocabPair`] from a [`Read`] stream, validating invariants.
pub fn read_vocab_pair<R: Read>(reader: R) -> Result<VocabPair> {
    let pair: VocabPair = serde_json::from_reader(reader)?;
    pair.validate()?;
    log::debug!(
        "loaded vocab pair: {} ({} symbols) -> {} ({} symbols)",
        pair.input.name(),
        pair.input.vocab_size(),
        pair.output.name(),
        pair.output.vocab_size(),
    );
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_builds_both_sides() {
        let pairs = [("cat", "\t k ae t \n"), ("car", "\t k aa r \n")];
        let vocabs =
            VocabPair::from_pairs("english", "phonemes", Tokenization::Whitespace, pairs);

        assert_eq!(vocabs.input.vocab_size(), 4 + 4); // c, a, t, r
        assert_eq!(vocabs.input.max_length(), 3);
        assert_eq!(vocabs.output.vocab_size(), 4 + 5); // k, ae, t, aa, r
        assert_eq!(vocabs.output.max_length(), 5);
        vocabs.validate().unwrap();
    }

    #[test]
    fn test_save_load_vocab_pair() {
        let pairs = [("cat", "\tkat\n"), ("dog", "\tdag\n")];
        let vocabs =
            VocabPair::from_pairs("english", "phonemes", Tokenization::Characters, pairs);

        tempdir::TempDir::new("vocab_test")
            .map(|dir| {
                let path = dir.path().join("vocab.json");

                save_vocab_pair_path(&vocabs, &path).expect("failed to save vocab");

                let loaded = load_vocab_pair_path(&path).expect("failed to load vocab");
                assert_eq!(loaded, vocabs);
            })
            .expect("failed to create temp dir");
    }
}
