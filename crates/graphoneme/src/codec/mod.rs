//! # One-Hot Tensor Codec
//!
//! Converts strings (or space-delimited symbol sequences) into
//! fixed-width one-hot tensors per a [`CharMap`](crate::vocab::CharMap)
//! and back.
//!
//! The representation contract every consumer relies on:
//! * each timestep row is one-hot at the active symbol's index;
//! * positions beyond a sequence's true length are all-zero rows,
//!   which decode skips; the reserved `PAD` code is never written;
//! * the teacher-forcing target is the input tensor advanced by one
//!   timestep ([`shifted_target_batch`]).

pub mod batch;
pub mod decoder;
pub mod encoder;

#[doc(inline)]
pub use batch::TrainingBatch;
#[doc(inline)]
pub use decoder::{argmax, decode_batch, decode_rows, strip_sentinels};
#[doc(inline)]
pub use encoder::{one_hot_batch, one_hot_index, shifted_target_batch};
