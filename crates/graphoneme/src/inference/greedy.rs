//! # Greedy Autoregressive Decode Loop

use ndarray::ArrayView2;

use crate::codec::{argmax, one_hot_index};
use crate::errors::{GraphonemeError, Result};
use crate::model::SequenceModel;
use crate::vocab::{CharMap, Sentinel};

/// The phase of one decode run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodePhase {
    Running,
    Done,
}

/// Single-sequence greedy decoder over a [`SequenceModel`].
///
/// Encodes the input once, seeds the decoder with the `Start`
/// sentinel, and emits the argmax symbol at each step, feeding it back
/// as the next input. The run ends on an `End` prediction or when the
/// emitted symbol count exceeds the output vocabulary's `max_length`;
/// the length bound is the loop's only liveness guarantee.
///
/// Every decode is fully deterministic given identical model weights:
/// no batching, no beam search, no sampling temperature. The loop
/// mutates only its own local state, so concurrent decodes are safe
/// whenever the model's step functions are.
pub struct GreedyDecoder<'a, M: SequenceModel + ?Sized> {
    model: &'a M,
    output_map: &'a CharMap,
}

impl<'a, M: SequenceModel + ?Sized> GreedyDecoder<'a, M> {
    /// Create a decoder over a model and its output vocabulary.
    pub fn new(
        model: &'a M,
        output_map: &'a CharMap,
    ) -> Self {
        Self { model, output_map }
    }

    /// Decode one encoded sequence into a transcription.
    ///
    /// ## Arguments
    /// * `encoder_input` - a `(timesteps, vocab_size_in)` one-hot view
    ///   of the single input sequence.
    ///
    /// ## Returns
    /// The emitted symbols, with a trailing `End` marker stripped. A
    /// failing model step propagates as a fatal inference error; there
    /// is no partial-result recovery.
    pub fn decode(
        &self,
        encoder_input: ArrayView2<'_, f32>,
    ) -> Result<String> {
        let vocab_size = self.output_map.vocab_size();
        let max_length = self.output_map.max_length();

        let mut state = self.model.encode_sequence(encoder_input)?;
        let mut current = one_hot_index(vocab_size, Sentinel::Start.index());

        let mut transcript = String::new();
        let mut emitted = 0;
        let mut phase = DecodePhase::Running;

        while phase == DecodePhase::Running {
            let step = self.model.decode_step(current.view(), &state)?;
            if step.distribution.len() != vocab_size {
                return Err(GraphonemeError::ShapeMismatch {
                    expected: vocab_size,
                    actual: step.distribution.len(),
                });
            }

            let index = argmax(step.distribution.view());
            transcript.push_str(self.output_map.symbol_of(index)?);
            emitted += 1;

            if index == Sentinel::End.index() || emitted > max_length {
                phase = DecodePhase::Done;
            } else {
                current = one_hot_index(vocab_size, index);
                state = step.state;
            }
        }

        if let Some(stripped) = transcript.strip_suffix(Sentinel::End.symbol()) {
            transcript.truncate(stripped.len());
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::one_hot_batch;
    use crate::model::testing::{ConstantModel, ScriptedModel};
    use crate::vocab::Tokenization;

    fn phoneme_map() -> CharMap {
        let mut map = CharMap::new("phonemes", Tokenization::Whitespace);
        map.register("\t k ae t \n");
        map.register("\t d ao g \n");
        map
    }

    #[test]
    fn test_scripted_decode() {
        let map = phoneme_map();
        let script = vec![
            map.index_of("k"),
            map.index_of("ae"),
            map.index_of("t"),
            Sentinel::End.index(),
        ];
        let model = ScriptedModel::new(map.vocab_size(), script);

        let mut input_map = CharMap::new("english", Tokenization::Characters);
        input_map.register("cat");
        let encoded = one_hot_batch(&["cat"], &input_map);

        let decoder = GreedyDecoder::new(&model, &map);
        let transcript = decoder
            .decode(encoded.index_axis(ndarray::Axis(0), 0))
            .unwrap();
        assert_eq!(transcript, "kaet");
    }

    #[test]
    fn test_decode_terminates_without_end_symbol() {
        let map = phoneme_map();
        let model = ConstantModel::new(map.vocab_size(), map.index_of("k"));

        let mut input_map = CharMap::new("english", Tokenization::Characters);
        input_map.register("cat");
        let encoded = one_hot_batch(&["cat"], &input_map);

        let decoder = GreedyDecoder::new(&model, &map);
        let transcript = decoder
            .decode(encoded.index_axis(ndarray::Axis(0), 0))
            .unwrap();

        // One emission per step, capped at max_length + 1 steps.
        assert_eq!(transcript, "k".repeat(map.max_length() + 1));
    }

    #[test]
    fn test_decode_rejects_mismatched_distribution() {
        let map = phoneme_map();
        let model = ConstantModel::new(map.vocab_size() + 3, 0);

        let mut input_map = CharMap::new("english", Tokenization::Characters);
        input_map.register("cat");
        let encoded = one_hot_batch(&["cat"], &input_map);

        let decoder = GreedyDecoder::new(&model, &map);
        assert!(matches!(
            decoder.decode(encoded.index_axis(ndarray::Axis(0), 0)),
            Err(GraphonemeError::ShapeMismatch { .. })
        ));
    }
}
