//! # Error Types

use std::path::PathBuf;

/// Errors from graphoneme operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphonemeError {
    /// A tensor index has no assigned symbol in the vocabulary.
    ///
    /// This can only happen when decode logic is handed a tensor whose
    /// symbol axis is mismatched to the vocabulary; it is a contract
    /// violation, not a recoverable condition.
    #[error("symbol index ({index}) out of range for vocab size ({vocab_size})")]
    SymbolIndexOutOfRange {
        /// The index with no assigned symbol.
        index: usize,

        /// The size of the vocabulary that was probed.
        vocab_size: usize,
    },

    /// A tensor axis does not match the vocabulary or sequence bound.
    #[error("tensor shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// The expected axis length.
        expected: usize,

        /// The axis length that was observed.
        actual: usize,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// One of the co-located model artifacts is missing on load.
    #[error("missing model artifact: {path}")]
    MissingArtifact {
        /// The path that was probed.
        path: PathBuf,
    },

    /// The model has no training history to persist.
    #[error("model has not been trained")]
    NotTrained,

    /// A corpus line could not be parsed.
    #[error("malformed dictionary entry: {0}")]
    MalformedEntry(String),

    /// Error reported by the trainable sequence model.
    #[error("sequence model error: {0}")]
    Model(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization error from a persisted artifact.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for graphoneme operations.
pub type Result<T> = core::result::Result<T, GraphonemeError>;
