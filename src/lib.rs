//! Rust bindings for the USearch vector search engine C API.
//!
//! USearch is a compact HNSW implementation for approximate
//! nearest-neighbor search. This crate wraps its C API with safe Rust
//! types: an owned [`Index`] handle released exactly once, typed vector
//! buffers in three precisions (`f16`, `f32`, `f64`), and error
//! propagation that carries the engine's own diagnostics.
//!
//! # Usage
//!
//! ```ignore
//! use usearch_rs::{Index, IndexOptions, MetricKind};
//!
//! let mut index = Index::new(&IndexOptions {
//!     metric_kind: MetricKind::Cos,
//!     ..IndexOptions::new(4)
//! })?;
//!
//! index.reserve(2)?;
//! index.add(1, &[1.0f32, 0.0, 0.0, 0.0])?;
//! index.add(2, &[0.0f32, 1.0, 0.0, 0.0])?;
//!
//! for m in index.search(&[1.0f32, 0.0, 0.0, 0.0], 2)? {
//!     println!("{}: {}", m.key, m.distance);
//! }
//! ```
//!
//! # Linking
//!
//! The engine library (`libusearch`) is linked by the embedding build
//! system; this crate only declares the entry points it consumes. Unit
//! tests link against an in-process stub engine instead, so `cargo test`
//! needs no native library.

mod error;
pub mod ffi;
mod index;
mod options;
mod scalar;


pub use error::UsearchError;
pub use index::{Index, Match};
pub use options::{IndexOptions, MetricFn, MetricKind};
pub use scalar::{ScalarKind, VectorScalar};
