//! # Trainable Sequence Model Interface
//!
//! The neural network itself lives in an external differentiable-model
//! library; this crate reaches it only through the [`SequenceModel`]
//! trait. The contract is deliberately narrow: a blocking training
//! entry point over the three-tensor batch, a state-producing encode
//! step, a state-consuming single-step decode, and weight persistence
//! hooks for the four-artifact model save/load.
//!
//! Inference code must use these named accessors; reaching into a
//! model's internal layer list positionally is not supported.

#[cfg(any(test, feature = "testing"))]
pub mod testing;

use std::path::Path;

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::codec::TrainingBatch;
use crate::errors::Result;

/// The recurrent state threaded through decode steps.
///
/// A pair of vectors (hidden and cell components of a recurrent cell).
/// With a bidirectional encoder both are doubled in width; the widths
/// are opaque to this crate and only round-tripped between
/// [`SequenceModel::encode_sequence`] and [`SequenceModel::decode_step`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrentState {
    /// The hidden state vector.
    pub hidden: Array1<f32>,

    /// The cell state vector.
    pub cell: Array1<f32>,
}

/// One step of autoregressive decoding.
#[derive(Debug, Clone)]
pub struct DecodeStep {
    /// Probability distribution over the output vocabulary.
    pub distribution: Array1<f32>,

    /// The updated recurrent state.
    pub state: RecurrentState,
}

/// Training hyperparameters, persisted alongside the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of hidden units in the recurrent cell.
    pub hidden_dim: usize,

    /// Mini-batch size.
    pub batch_size: usize,

    /// Number of training epochs.
    pub epochs: usize,

    /// Fraction of the batch held out for validation.
    pub validation_split: f32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            hidden_dim: 64,
            batch_size: 64,
            epochs: 10,
            validation_split: 0.05,
        }
    }
}

/// Per-epoch loss history returned by training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// Training loss per epoch.
    pub loss: Vec<f32>,

    /// Validation loss per epoch.
    pub val_loss: Vec<f32>,
}

/// The external trainable encoder/decoder collaborator.
pub trait SequenceModel {
    /// Train on a three-tensor batch.
    ///
    /// One blocking call; any internal hardware parallelism is opaque
    /// to the caller.
    ///
    /// ## Arguments
    /// * `batch` - the (encoder input, decoder input, decoder target)
    ///   tensor triple.
    /// * `config` - batch size, epoch count, validation split.
    ///
    /// ## Returns
    /// The per-epoch loss history.
    fn fit(
        &mut self,
        batch: &TrainingBatch,
        config: &TrainingConfig,
    ) -> Result<TrainingHistory>;

    /// Encode a single sequence tensor into the initial recurrent state.
    ///
    /// ## Arguments
    /// * `encoder_input` - a `(timesteps, vocab_size_in)` one-hot view.
    fn encode_sequence(
        &self,
        encoder_input: ArrayView2<'_, f32>,
    ) -> Result<RecurrentState>;

    /// Run one decode step.
    ///
    /// ## Arguments
    /// * `previous` - the one-hot encoding of the previously emitted
    ///   symbol (or the `Start` sentinel for the first step).
    /// * `state` - the current recurrent state.
    ///
    /// ## Returns
    /// The output distribution and the updated state.
    fn decode_step(
        &self,
        previous: ArrayView1<'_, f32>,
        state: &RecurrentState,
    ) -> Result<DecodeStep>;

    /// Persist the learned weights.
    fn save_weights(
        &self,
        path: &Path,
    ) -> Result<()>;

    /// Restore previously persisted weights.
    fn load_weights(
        &mut self,
        path: &Path,
    ) -> Result<()>;
}
