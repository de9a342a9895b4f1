//! # Training Tensor Triple

use ndarray::Array3;

use crate::codec::encoder::{one_hot_batch, shifted_target_batch};
use crate::vocab::VocabPair;

/// The three one-hot tensors for a batch of N sequence pairs.
///
/// `decoder_target` is `decoder_input` advanced by one timestep (the
/// teacher-forcing target). Positions beyond a sequence's true length
/// are all-zero rows in all three tensors.
#[derive(Debug, Clone)]
pub struct TrainingBatch {
    /// `(N, max_len_in, vocab_size_in)` spelling tensor.
    pub encoder_input: Array3<f32>,

    /// `(N, max_len_out, vocab_size_out)` transcription tensor.
    pub decoder_input: Array3<f32>,

    /// `decoder_input` shifted one step left along the time axis.
    pub decoder_target: Array3<f32>,
}

impl TrainingBatch {
    /// Encode a pair corpus against its vocabularies.
    pub fn from_pairs<A, B>(
        pairs: &[(A, B)],
        vocabs: &VocabPair,
    ) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let spellings: Vec<&str> = pairs.iter().map(|(s, _)| s.as_ref()).collect();
        let transcriptions: Vec<&str> = pairs.iter().map(|(_, t)| t.as_ref()).collect();

        Self {
            encoder_input: one_hot_batch(&spellings, &vocabs.input),
            decoder_input: one_hot_batch(&transcriptions, &vocabs.output),
            decoder_target: shifted_target_batch(&transcriptions, &vocabs.output),
        }
    }

    /// The number of sequence pairs in the batch.
    pub fn len(&self) -> usize {
        self.encoder_input.shape()[0]
    }

    /// Returns true if the batch holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decoder::{decode_batch, strip_sentinels};
    use crate::vocab::Tokenization;

    #[test]
    fn test_batch_shapes_and_alignment() {
        let pairs = [("cat", "\tkat\n"), ("car", "\tkar\n")];
        let vocabs =
            VocabPair::from_pairs("english", "phonemes", Tokenization::Characters, pairs);

        let batch = TrainingBatch::from_pairs(&pairs, &vocabs);
        assert_eq!(batch.len(), 2);
        assert!(!batch.is_empty());

        assert_eq!(
            batch.encoder_input.shape(),
            &[2, vocabs.input.max_length(), vocabs.input.vocab_size()],
        );
        assert_eq!(batch.decoder_input.shape(), batch.decoder_target.shape());

        // The decoded target equals the decoded input minus its first symbol.
        let inputs = decode_batch(&batch.decoder_input, &vocabs.output).unwrap();
        let targets = decode_batch(&batch.decoder_target, &vocabs.output).unwrap();
        for (input, target) in inputs.iter().zip(&targets) {
            assert_eq!(&input[1..], target.as_str());
        }

        let spellings = decode_batch(&batch.encoder_input, &vocabs.input).unwrap();
        assert_eq!(spellings, vec!["cat", "car"]);
        assert_eq!(strip_sentinels(&inputs[0]), "kat");
    }
}
