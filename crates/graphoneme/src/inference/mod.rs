//! # Inference
//!
//! The prediction-time decode loop: a strictly single-threaded,
//! single-sequence state machine driving a
//! [`SequenceModel`](crate::model::SequenceModel) one step at a time.

pub mod greedy;

#[doc(inline)]
pub use greedy::GreedyDecoder;
