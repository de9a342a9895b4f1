//! # One-Hot Tensor Encoder

use ndarray::{Array1, Array3};

use crate::vocab::CharMap;

/// Encode a batch of sequences as a one-hot tensor.
///
/// ## Arguments
/// * `sequences` - N strings/token-sequences.
/// * `mapping` - the vocabulary for this language side.
///
/// ## Returns
/// A zero-initialized tensor of shape
/// `(N, mapping.max_length(), mapping.vocab_size())` with the one-hot
/// for the token at position `p` written at row `p`. Positions beyond a
/// sequence's true length stay all-zero; the all-zero row is the
/// padding representation, and the reserved `PAD` code is never
/// written.
///
/// Out-of-vocabulary tokens encode at the `Unknown` sentinel's index.
pub fn one_hot_batch<S: AsRef<str>>(
    sequences: &[S],
    mapping: &CharMap,
) -> Array3<f32> {
    encode_batch(sequences, mapping, false)
}

/// Encode a batch of sequences as a teacher-forcing target tensor.
///
/// Same shape as [`one_hot_batch`], advanced by one timestep: the
/// one-hot for the token at position `p` lands at row `p - 1`, position
/// 0 is dropped, and a trailing all-zero row is retained. The target
/// represents what the decoder should predict after consuming its input
/// up to each position.
pub fn shifted_target_batch<S: AsRef<str>>(
    sequences: &[S],
    mapping: &CharMap,
) -> Array3<f32> {
    encode_batch(sequences, mapping, true)
}

fn encode_batch<S: AsRef<str>>(
    sequences: &[S],
    mapping: &CharMap,
    shift: bool,
) -> Array3<f32> {
    let max_length = mapping.max_length();
    let mut tensor = Array3::zeros((sequences.len(), max_length, mapping.vocab_size()));

    for (n, sequence) in sequences.iter().enumerate() {
        for (position, symbol) in mapping.tokenize(sequence.as_ref()).iter().enumerate() {
            let row = match (shift, position) {
                (true, 0) => continue,
                (true, p) => p - 1,
                (false, p) => p,
            };
            // Registered sequences never exceed max_length.
            if row < max_length {
                tensor[[n, row, mapping.index_of(symbol)]] = 1.0;
            }
        }
    }

    tensor
}

/// A one-hot vector with a single coordinate set.
pub fn one_hot_index(
    vocab_size: usize,
    index: usize,
) -> Array1<f32> {
    let mut row = Array1::zeros(vocab_size);
    row[index] = 1.0;
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Tokenization;

    fn cat_car_map() -> CharMap {
        let mut map = CharMap::new("english", Tokenization::Characters);
        map.register("cat");
        map.register("car");
        map
    }

    #[test]
    fn test_one_hot_batch_cat() {
        let map = cat_car_map();
        let tensor = one_hot_batch(&["cat"], &map);
        assert_eq!(tensor.shape(), &[1, 3, 8]);

        assert_eq!(tensor[[0, 0, map.index_of("c")]], 1.0);
        assert_eq!(tensor[[0, 1, map.index_of("a")]], 1.0);
        assert_eq!(tensor[[0, 2, map.index_of("t")]], 1.0);

        // Exactly one coordinate per row.
        for row in tensor.index_axis(ndarray::Axis(0), 0).rows() {
            assert_eq!(row.sum(), 1.0);
        }
    }

    #[test]
    fn test_shifted_target_batch_cat() {
        let map = cat_car_map();
        let tensor = shifted_target_batch(&["cat"], &map);
        assert_eq!(tensor.shape(), &[1, 3, 8]);

        assert_eq!(tensor[[0, 0, map.index_of("a")]], 1.0);
        assert_eq!(tensor[[0, 1, map.index_of("t")]], 1.0);
        // The trailing row stays all-zero.
        assert_eq!(tensor.index_axis(ndarray::Axis(0), 0).row(2).sum(), 0.0);
    }

    #[test]
    fn test_shift_rows_align() {
        let map = cat_car_map();
        let plain = one_hot_batch(&["car"], &map);
        let shifted = shifted_target_batch(&["car"], &map);

        for p in 1..3 {
            assert_eq!(
                shifted.index_axis(ndarray::Axis(0), 0).row(p - 1),
                plain.index_axis(ndarray::Axis(0), 0).row(p),
            );
        }
    }

    #[test]
    fn test_short_sequences_pad_with_zero_rows() {
        let map = cat_car_map();
        let tensor = one_hot_batch(&["at"], &map);
        assert_eq!(tensor.shape(), &[1, 3, 8]);
        assert_eq!(tensor.index_axis(ndarray::Axis(0), 0).row(2).sum(), 0.0);
    }

    #[test]
    fn test_unknown_symbols_encode_at_unk() {
        use crate::vocab::Sentinel;

        let map = cat_car_map();
        let tensor = one_hot_batch(&["cab"], &map);
        assert_eq!(tensor[[0, 2, Sentinel::Unknown.index()]], 1.0);
    }
}
