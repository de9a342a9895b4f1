//! # One-Hot Tensor Decoder

use ndarray::{Array3, ArrayView1, ArrayView2};

use crate::errors::{GraphonemeError, Result};
use crate::vocab::CharMap;

/// Index of the maximum coordinate; ties resolve to the lowest index.
pub fn argmax(row: ArrayView1<'_, f32>) -> usize {
    let mut best = 0;
    let mut best_value = f32::NEG_INFINITY;
    for (index, &value) in row.iter().enumerate() {
        if value > best_value {
            best = index;
            best_value = value;
        }
    }
    best
}

/// Decode one sequence of timestep rows back into a string.
///
/// All-zero rows are padding and contribute nothing; every other row
/// decodes by argmax over the vocabulary axis. The caller is
/// responsible for stripping sentinel markers if desired
/// (see [`strip_sentinels`]).
///
/// ## Arguments
/// * `rows` - a `(timesteps, vocab_size)` view.
/// * `mapping` - the vocabulary for this language side.
pub fn decode_rows(
    rows: ArrayView2<'_, f32>,
    mapping: &CharMap,
) -> Result<String> {
    if rows.ncols() != mapping.vocab_size() {
        return Err(GraphonemeError::ShapeMismatch {
            expected: mapping.vocab_size(),
            actual: rows.ncols(),
        });
    }

    let mut decoded = String::new();
    for row in rows.rows() {
        if row.iter().all(|&v| v == 0.0) {
            continue;
        }
        decoded.push_str(mapping.symbol_of(argmax(row))?);
    }
    Ok(decoded)
}

/// Decode every sequence in a batch tensor.
pub fn decode_batch(
    tensor: &Array3<f32>,
    mapping: &CharMap,
) -> Result<Vec<String>> {
    tensor
        .outer_iter()
        .map(|rows| decode_rows(rows, mapping))
        .collect()
}

/// Strip a leading `Start` and trailing `End` marker from a decoded
/// string.
pub fn strip_sentinels(decoded: &str) -> &str {
    decoded.trim_start_matches('\t').trim_end_matches('\n')
}
