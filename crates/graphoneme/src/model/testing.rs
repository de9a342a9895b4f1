//! # Deterministic Stub Models
//!
//! [`SequenceModel`] implementations with no learned behavior, for
//! exercising the decode loop and the model lifecycle without an
//! external differentiable-model library. Enabled for downstream users
//! via the `testing` feature.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::codec::{TrainingBatch, one_hot_index};
use crate::errors::Result;
use crate::model::{DecodeStep, RecurrentState, SequenceModel, TrainingConfig, TrainingHistory};
use crate::vocab::Sentinel;

/// The step counter stubs thread through [`RecurrentState::hidden`].
fn step_of(state: &RecurrentState) -> usize {
    state.hidden[0] as usize
}

fn state_at(step: usize) -> RecurrentState {
    RecurrentState {
        hidden: ndarray::arr1(&[step as f32]),
        cell: Array1::zeros(1),
    }
}

/// A stub model that replays a fixed index script, then emits `End`.
///
/// The decode-step counter travels inside the recurrent state, so the
/// stub also exercises state propagation through the loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedModel {
    /// The output vocabulary width of emitted distributions.
    pub vocab_size: usize,

    /// Symbol indices to emit, in order.
    pub script: Vec<usize>,
}

impl ScriptedModel {
    /// Create a stub replaying `script` against a vocabulary width.
    pub fn new(
        vocab_size: usize,
        script: Vec<usize>,
    ) -> Self {
        Self { vocab_size, script }
    }
}

impl SequenceModel for ScriptedModel {
    fn fit(
        &mut self,
        _batch: &TrainingBatch,
        config: &TrainingConfig,
    ) -> Result<TrainingHistory> {
        // A fabricated, monotonically decreasing loss curve.
        let mut history = TrainingHistory::default();
        for epoch in 0..config.epochs {
            history.loss.push(1.0 / (epoch + 1) as f32);
            history.val_loss.push(1.2 / (epoch + 1) as f32);
        }
        Ok(history)
    }

    fn encode_sequence(
        &self,
        _encoder_input: ArrayView2<'_, f32>,
    ) -> Result<RecurrentState> {
        Ok(state_at(0))
    }

    fn decode_step(
        &self,
        _previous: ArrayView1<'_, f32>,
        state: &RecurrentState,
    ) -> Result<DecodeStep> {
        let step = step_of(state);
        let index = self
            .script
            .get(step)
            .copied()
            .unwrap_or(Sentinel::End.index());

        Ok(DecodeStep {
            distribution: one_hot_index(self.vocab_size, index),
            state: state_at(step + 1),
        })
    }

    fn save_weights(
        &self,
        path: &Path,
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        Ok(())
    }

    fn load_weights(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        let reader = BufReader::new(File::open(path)?);
        *self = serde_json::from_reader(reader)?;
        Ok(())
    }
}

/// A stub model that emits the same symbol forever.
///
/// Useful for verifying the decode loop's length bound: the loop must
/// terminate even when `End` is never predicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantModel {
    /// The output vocabulary width of emitted distributions.
    pub vocab_size: usize,

    /// The symbol index emitted at every step.
    pub index: usize,
}

impl ConstantModel {
    /// Create a stub that always emits `index`.
    pub fn new(
        vocab_size: usize,
        index: usize,
    ) -> Self {
        Self { vocab_size, index }
    }
}

impl SequenceModel for ConstantModel {
    fn fit(
        &mut self,
        _batch: &TrainingBatch,
        config: &TrainingConfig,
    ) -> Result<TrainingHistory> {
        let mut history = TrainingHistory::default();
        for _ in 0..config.epochs {
            history.loss.push(1.0);
            history.val_loss.push(1.0);
        }
        Ok(history)
    }

    fn encode_sequence(
        &self,
        _encoder_input: ArrayView2<'_, f32>,
    ) -> Result<RecurrentState> {
        Ok(state_at(0))
    }

    fn decode_step(
        &self,
        _previous: ArrayView1<'_, f32>,
        state: &RecurrentState,
    ) -> Result<DecodeStep> {
        Ok(DecodeStep {
            distribution: one_hot_index(self.vocab_size, self.index),
            state: state.clone(),
        })
    }

    fn save_weights(
        &self,
        path: &Path,
    ) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        Ok(())
    }

    fn load_weights(
        &mut self,
        path: &Path,
    ) -> Result<()> {
        let reader = BufReader::new(File::open(path)?);
        *self = serde_json::from_reader(reader)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_model_threads_its_step_counter() {
        let model = ScriptedModel::new(6, vec![4, 5]);
        let state = model.encode_sequence(ndarray::Array2::zeros((2, 6)).view()).unwrap();

        let step = model.decode_step(one_hot_index(6, 2).view(), &state).unwrap();
        assert_eq!(step_of(&step.state), 1);
        assert_eq!(step.distribution[4], 1.0);

        let step = model.decode_step(step.distribution.view(), &step.state).unwrap();
        assert_eq!(step.distribution[5], 1.0);

        // Past the end of the script, End is emitted.
        let step = model.decode_step(step.distribution.view(), &step.state).unwrap();
        assert_eq!(step.distribution[Sentinel::End.index()], 1.0);
    }

    #[test]
    fn test_scripted_model_weight_round_trip() {
        let model = ScriptedModel::new(8, vec![4, 6, 5]);

        tempdir::TempDir::new("stub_weights")
            .map(|dir| {
                let path = dir.path().join("model.weights");
                model.save_weights(&path).expect("failed to save weights");

                let mut restored = ScriptedModel::new(0, vec![]);
                restored.load_weights(&path).expect("failed to load weights");
                assert_eq!(restored, model);
            })
            .expect("failed to create temp dir");
    }
}
