use thiserror::Error;

use crate::scalar::ScalarKind;

/// Errors returned by index operations.
///
/// `Engine` and `Unsupported` carry the engine's diagnostic text verbatim.
/// The remaining variants are raised locally, before anything crosses the
/// FFI boundary.
#[derive(Error, Debug)]
pub enum UsearchError {
    #[error("usearch: {0}")]
    Engine(String),

    #[error("usearch: unsupported operation: {0}")]
    Unsupported(String),

    #[error("usearch: invalid dimensions: {0}")]
    InvalidDimensions(usize),

    #[error("usearch: unsupported scalar kind {0:?}")]
    UnsupportedScalar(ScalarKind),

    #[error("usearch: dimension mismatch: got {got}, want {want}")]
    DimensionMismatch { got: usize, want: usize },

    #[error("usearch: batch length mismatch: {keys} keys, {vectors} vectors")]
    BatchLengthMismatch { keys: usize, vectors: usize },

    #[error("usearch: path is not a valid C string: {0}")]
    InvalidPath(String),
}
