//! # `graphoneme` Grapheme-to-Phoneme Pipeline
//!
//! Character-level sequence-to-sequence data pipeline for mapping word
//! spellings to phonemic transcriptions.
//!
//! The trainable network itself lives in an external
//! differentiable-model library behind the
//! [`model::SequenceModel`] trait; this crate owns everything around
//! it:
//!
//! See:
//! * [`vocab`] for the per-side symbol vocabularies and their io.
//! * [`codec`] to encode pairs into one-hot tensor triples and back.
//! * [`inference`] for the greedy autoregressive decode loop.
//! * [`pipeline`] for the model lifecycle and four-artifact persistence.
//! * [`corpus`] to clean and partition dictionary pairs.
//!
//! ## Crate Features
//!
//! #### feature: ``testing``
//!
//! Exposes the deterministic stub models in [`model::testing`] to
//! downstream users.
//!
//! ## Predicting with a trained model
//!
//! ```rust,ignore
//! use graphoneme::model::SequenceModel;
//! use graphoneme::pipeline::Transcriber;
//!
//! let model: MyLstm = MyLstm::default();
//! let transcriber = Transcriber::load(model, "models/cmudict")?;
//! println!("{}", transcriber.predict("pronounce")?);
//! ```
#![warn(missing_docs, unused)]

pub mod codec;
pub mod corpus;
pub mod errors;
pub mod inference;
pub mod model;
pub mod pipeline;
pub mod vocab;

#[doc(inline)]
pub use errors::{GraphonemeError, Result};
#[doc(inline)]
pub use pipeline::Transcriber;
#[doc(inline)]
pub use vocab::{CharMap, Tokenization, VocabPair};
