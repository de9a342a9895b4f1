//! # Model Lifecycle
//!
//! Orchestration around the external
//! [`SequenceModel`](crate::model::SequenceModel): vocabulary
//! construction from a pair corpus, training-batch production,
//! blocking training, greedy prediction, and the four-artifact
//! persistence unit (weights, vocabularies, configuration, history).

pub mod artifacts;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::Axis;

use crate::codec::{TrainingBatch, one_hot_batch, strip_sentinels};
use crate::errors::{GraphonemeError, Result};
use crate::inference::GreedyDecoder;
use crate::model::{SequenceModel, TrainingConfig, TrainingHistory};
use crate::vocab::{Tokenization, VocabPair, load_vocab_pair_path, save_vocab_pair_path};

#[doc(inline)]
pub use artifacts::ArtifactPaths;

/// A grapheme-to-phoneme model through its whole lifecycle.
///
/// Owns the model, the vocabulary pair, the training configuration,
/// and (once trained) the loss history: the four artifacts that
/// persist together.
pub struct Transcriber<M: SequenceModel> {
    model: M,
    vocabs: VocabPair,
    config: TrainingConfig,
    history: Option<TrainingHistory>,
}

impl<M: SequenceModel> Transcriber<M> {
    /// Assemble a transcriber from already-built vocabularies.
    pub fn new(
        model: M,
        vocabs: VocabPair,
        config: TrainingConfig,
    ) -> Self {
        Self {
            model,
            vocabs,
            config,
            history: None,
        }
    }

    /// Build both vocabularies from a pair corpus and assemble a
    /// transcriber around them.
    ///
    /// The transcription side of `pairs` must already carry the
    /// `Start`/`End` sentinel wrapping
    /// (see [`crate::corpus::wrap_sentinels`]).
    pub fn from_pairs<A, B>(
        model: M,
        config: TrainingConfig,
        output_tokenization: Tokenization,
        pairs: &[(A, B)],
    ) -> Self
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let vocabs = VocabPair::from_pairs(
            "spelling",
            "transcription",
            output_tokenization,
            pairs.iter().map(|(a, b)| (a.as_ref(), b.as_ref())),
        );
        Self::new(model, vocabs, config)
    }

    /// The vocabulary pair.
    pub fn vocabs(&self) -> &VocabPair {
        &self.vocabs
    }

    /// The training configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// The loss history, if the model has been trained (or loaded).
    pub fn history(&self) -> Option<&TrainingHistory> {
        self.history.as_ref()
    }

    /// Encode a pair corpus into the three-tensor training batch.
    pub fn training_batch<A, B>(
        &self,
        pairs: &[(A, B)],
    ) -> TrainingBatch
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        TrainingBatch::from_pairs(pairs, &self.vocabs)
    }

    /// Train the model on a pair corpus.
    ///
    /// One blocking call into the model; the returned history is
    /// retained for persistence.
    pub fn fit<A, B>(
        &mut self,
        pairs: &[(A, B)],
    ) -> Result<&TrainingHistory>
    where
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let batch = self.training_batch(pairs);
        log::info!(
            "training on {} pairs: {} epochs, batch size {}, validation split {}",
            batch.len(),
            self.config.epochs,
            self.config.batch_size,
            self.config.validation_split,
        );

        let history = self.model.fit(&batch, &self.config)?;
        if let Some(loss) = history.loss.last() {
            log::info!("final epoch loss: {loss}");
        }
        Ok(&*self.history.insert(history))
    }

    /// Predict the transcription of a single spelling.
    ///
    /// Encodes the spelling, runs the greedy decode loop, and strips
    /// the sentinel markers from the result.
    pub fn predict(
        &self,
        spelling: &str,
    ) -> Result<String> {
        let encoded = one_hot_batch(&[spelling], &self.vocabs.input);
        let decoder = GreedyDecoder::new(&self.model, &self.vocabs.output);
        let transcript = decoder.decode(encoded.index_axis(Axis(0), 0))?;
        Ok(strip_sentinels(&transcript).to_owned())
    }

    /// Persist the four model artifacts at a common base path.
    ///
    /// Fails with [`GraphonemeError::NotTrained`] before the first
    /// `fit`; there is no meaningful partial artifact set to write.
    pub fn save<P: AsRef<Path>>(
        &self,
        base: P,
    ) -> Result<()> {
        let history = self.history.as_ref().ok_or(GraphonemeError::NotTrained)?;
        let paths = ArtifactPaths::for_base(base.as_ref());

        self.model.save_weights(&paths.weights)?;
        save_vocab_pair_path(&self.vocabs, &paths.vocabs)?;
        serde_json::to_writer_pretty(
            &mut BufWriter::new(File::create(&paths.config)?),
            &self.config,
        )?;
        serde_json::to_writer_pretty(
            &mut BufWriter::new(File::create(&paths.history)?),
            history,
        )?;

        log::info!("saved model artifacts: {}", base.as_ref().display());
        Ok(())
    }

    /// Restore a transcriber from the four artifacts at a base path.
    ///
    /// All-or-nothing: fails with
    /// [`GraphonemeError::MissingArtifact`] if any artifact is absent,
    /// before anything is read.
    pub fn load<P: AsRef<Path>>(
        mut model: M,
        base: P,
    ) -> Result<Self> {
        let paths = ArtifactPaths::for_base(base.as_ref());
        paths.verify_all_present()?;

        model.load_weights(&paths.weights)?;
        let vocabs = load_vocab_pair_path(&paths.vocabs)?;
        let config: TrainingConfig =
            serde_json::from_reader(BufReader::new(File::open(&paths.config)?))?;
        let history: TrainingHistory =
            serde_json::from_reader(BufReader::new(File::open(&paths.history)?))?;

        log::info!("loaded model artifacts: {}", base.as_ref().display());
        Ok(Self {
            model,
            vocabs,
            config,
            history: Some(history),
        })
    }
}
