//! # SPHINX Dictionary Parsing

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::corpus::PronunciationPair;
use crate::errors::{GraphonemeError, Result};

/// Load pronunciation pairs from a SPHINX-format dictionary file.
///
/// # Arguments
/// * `path` - the path to the dictionary file.
pub fn load_sphinx_dict_path<P: AsRef<Path>>(path: P) -> Result<Vec<PronunciationPair>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    read_sphinx_dict(reader)
}

/// Read pronunciation pairs from a SPHINX-format dictionary stream.
///
/// Each entry line is `SPELLING<TAB>PH ON EM ES`. Lines without a tab
/// (the file preamble) are skipped, as is any entry whose headword
/// contains an ASCII digit, which also removes `WORD(2)`
/// alternate-pronunciation entries. Surviving pairs are lowercased.
pub fn read_sphinx_dict<R: BufRead>(reader: R) -> Result<Vec<PronunciationPair>> {
    let mut pairs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let Some((spelling, transcription)) = line.split_once('\t') else {
            continue;
        };

        if spelling.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }
        if spelling.is_empty() || transcription.trim().is_empty() {
            return Err(GraphonemeError::MalformedEntry(line.clone()));
        }

        pairs.push(PronunciationPair {
            spelling: spelling.to_lowercase(),
            transcription: transcription.trim().to_lowercase(),
        });
    }

    log::debug!("read {} dictionary pairs", pairs.len());
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; SPHINX dictionary preamble
CAT\tK AE T
CAT(2)\tK AH T
DOG\tD AO G
B52\tB IY F IH F T IY T UW
";

    #[test]
    fn test_read_sphinx_dict() {
        let pairs = read_sphinx_dict(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            pairs,
            vec![
                PronunciationPair {
                    spelling: "cat".to_owned(),
                    transcription: "k ae t".to_owned(),
                },
                PronunciationPair {
                    spelling: "dog".to_owned(),
                    transcription: "d ao g".to_owned(),
                },
            ],
        );
    }

    #[test]
    fn test_empty_transcription_is_malformed() {
        let result = read_sphinx_dict("CAT\t \n".as_bytes());
        assert!(matches!(result, Err(GraphonemeError::MalformedEntry(_))));
    }
}
