//! # Train/Dev/Test Partitioning

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::corpus::PronunciationPair;

/// A three-way corpus partition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusSplits {
    /// Training pairs.
    pub train: Vec<PronunciationPair>,

    /// Development pairs.
    pub dev: Vec<PronunciationPair>,

    /// Held-out test pairs.
    pub test: Vec<PronunciationPair>,
}

impl CorpusSplits {
    /// Total number of pairs across the three splits.
    pub fn len(&self) -> usize {
        self.train.len() + self.dev.len() + self.test.len()
    }

    /// Returns true if all three splits are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition a corpus so repeated pronunciations never leak.
///
/// Transcriptions that occur more than once are collected, shuffled
/// with a seeded RNG, and the first `dev_fraction`/`test_fraction`
/// slices are held out; every pair whose transcription landed in a
/// held-out slice is routed to that split only. The result is always an
/// exact partition of the input.
///
/// ## Arguments
/// * `pairs` - the corpus to partition.
/// * `dev_fraction` - fraction of repeated transcriptions held out for dev.
/// * `test_fraction` - fraction held out for test.
/// * `seed` - RNG seed; identical seeds give identical partitions.
pub fn homophone_split(
    pairs: &[PronunciationPair],
    dev_fraction: f64,
    test_fraction: f64,
    seed: u64,
) -> CorpusSplits {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for pair in pairs {
        *counts.entry(pair.transcription.as_str()).or_insert(0) += 1;
    }

    // First-seen order, so the shuffle is the only source of variation.
    let mut repeated: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for pair in pairs {
        let transcription = pair.transcription.as_str();
        if counts[transcription] > 1 && seen.insert(transcription) {
            repeated.push(transcription);
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    repeated.shuffle(&mut rng);

    let n_dev = ((dev_fraction * repeated.len() as f64).floor() as usize).min(repeated.len());
    let n_test =
        ((test_fraction * repeated.len() as f64).floor() as usize).min(repeated.len() - n_dev);
    let dev_set: HashSet<&str> = repeated[..n_dev].iter().copied().collect();
    let test_set: HashSet<&str> = repeated[n_dev..n_dev + n_test].iter().copied().collect();

    let mut splits = CorpusSplits::default();
    for pair in pairs {
        let transcription = pair.transcription.as_str();
        if dev_set.contains(transcription) {
            splits.dev.push(pair.clone());
        } else if test_set.contains(transcription) {
            splits.test.push(pair.clone());
        } else {
            splits.train.push(pair.clone());
        }
    }

    log::info!(
        "homophone split: {} train, {} dev, {} test",
        splits.train.len(),
        splits.dev.len(),
        splits.test.len(),
    );
    splits
}

/// Shuffle a corpus and slice off fixed-size dev/test sets.
///
/// ## Arguments
/// * `pairs` - the corpus to partition.
/// * `n_dev` - number of pairs in dev.
/// * `n_test` - number of pairs in test.
/// * `seed` - RNG seed; identical seeds give identical partitions.
pub fn random_split(
    pairs: &[PronunciationPair],
    n_dev: usize,
    n_test: usize,
    seed: u64,
) -> CorpusSplits {
    let mut shuffled = pairs.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let n_train = shuffled.len().saturating_sub(n_dev + n_test);
    let test = shuffled.split_off(shuffled.len().saturating_sub(n_test));
    let dev = shuffled.split_off(n_train.min(shuffled.len()));

    CorpusSplits {
        train: shuffled,
        dev,
        test,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(
        spelling: &str,
        transcription: &str,
    ) -> PronunciationPair {
        PronunciationPair {
            spelling: spelling.to_owned(),
            transcription: transcription.to_owned(),
        }
    }

    fn homophone_corpus() -> Vec<PronunciationPair> {
        vec![
            pair("pair", "p eh r"),
            pair("pear", "p eh r"),
            pair("pare", "p eh r"),
            pair("cat", "k ae t"),
            pair("knight", "n ay t"),
            pair("night", "n ay t"),
            pair("dog", "d ao g"),
            pair("sun", "s ah n"),
            pair("son", "s ah n"),
        ]
    }

    #[test]
    fn test_homophone_split_is_an_exact_partition() {
        let pairs = homophone_corpus();
        let splits = homophone_split(&pairs, 0.4, 0.4, 297);
        assert_eq!(splits.len(), pairs.len());

        // Every input pair lands in exactly one split.
        let mut all: Vec<_> = splits
            .train
            .iter()
            .chain(&splits.dev)
            .chain(&splits.test)
            .cloned()
            .collect();
        all.sort_by(|a, b| a.spelling.cmp(&b.spelling));
        let mut expected = pairs.clone();
        expected.sort_by(|a, b| a.spelling.cmp(&b.spelling));
        assert_eq!(all, expected);
    }

    #[test]
    fn test_held_out_transcriptions_never_leak_into_train() {
        let pairs = homophone_corpus();
        let splits = homophone_split(&pairs, 0.4, 0.4, 297);

        let train: HashSet<&str> = splits
            .train
            .iter()
            .map(|p| p.transcription.as_str())
            .collect();
        for held_out in splits.dev.iter().chain(&splits.test) {
            assert!(!train.contains(held_out.transcription.as_str()));
        }
    }

    #[test]
    fn test_homophone_split_is_seed_deterministic() {
        let pairs = homophone_corpus();
        assert_eq!(
            homophone_split(&pairs, 0.4, 0.4, 297),
            homophone_split(&pairs, 0.4, 0.4, 297),
        );
    }

    #[test]
    fn test_random_split_sizes() {
        let pairs = homophone_corpus();
        let splits = random_split(&pairs, 2, 3, 4712);
        assert_eq!(splits.train.len(), pairs.len() - 5);
        assert_eq!(splits.dev.len(), 2);
        assert_eq!(splits.test.len(), 3);
        assert_eq!(splits.len(), pairs.len());
    }
}
