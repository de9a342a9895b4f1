//! # Corpus Preparation
//!
//! Cleaning and partitioning of (spelling, pronunciation) pairs before
//! they reach the vocabulary stage. Scraping and downloading of raw
//! sources stays outside this crate; the input here is a
//! dictionary-style stream of entry lines.

pub mod sphinx_dict;
pub mod splits;

use serde::{Deserialize, Serialize};

use crate::vocab::{Sentinel, Tokenization};

#[doc(inline)]
pub use sphinx_dict::{load_sphinx_dict_path, read_sphinx_dict};
#[doc(inline)]
pub use splits::{CorpusSplits, homophone_split, random_split};

/// One cleaned (spelling, pronunciation) training pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationPair {
    /// The orthographic word.
    pub spelling: String,

    /// The phonemic transcription, space-delimited.
    pub transcription: String,
}

impl PronunciationPair {
    /// The pair with its transcription wrapped for the target
    /// tokenization (see [`wrap_sentinels`]).
    pub fn wrapped(
        &self,
        tokenization: Tokenization,
    ) -> PronunciationPair {
        PronunciationPair {
            spelling: self.spelling.clone(),
            transcription: wrap_sentinels(&self.transcription, tokenization),
        }
    }
}

/// Wrap a transcription with the `Start`/`End` sentinel markers.
///
/// In `Whitespace` mode the markers are standalone tokens
/// (`"\t p eh r \n"`); in `Characters` mode the phoneme symbols are
/// joined and the markers attach directly (`"\tpehr\n"`).
pub fn wrap_sentinels(
    transcription: &str,
    tokenization: Tokenization,
) -> String {
    let start = Sentinel::Start.symbol();
    let end = Sentinel::End.symbol();
    match tokenization {
        Tokenization::Whitespace => {
            format!("{start} {} {end}", transcription.trim())
        }
        Tokenization::Characters => {
            let joined: String = transcription.split_whitespace().collect();
            format!("{start}{joined}{end}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_sentinels_whitespace() {
        assert_eq!(
            wrap_sentinels("p eh r", Tokenization::Whitespace),
            "\t p eh r \n",
        );
    }

    #[test]
    fn test_wrap_sentinels_characters() {
        assert_eq!(
            wrap_sentinels("p eh r", Tokenization::Characters),
            "\tpehr\n",
        );
    }

    #[test]
    fn test_wrapped_pair_keeps_spelling() {
        let pair = PronunciationPair {
            spelling: "pear".to_owned(),
            transcription: "p eh r".to_owned(),
        };
        let wrapped = pair.wrapped(Tokenization::Whitespace);
        assert_eq!(wrapped.spelling, "pear");
        assert_eq!(wrapped.transcription, "\t p eh r \n");
    }
}
