//! Index creation options.

use std::os::raw::c_int;

use serde::{Deserialize, Serialize};

use crate::ffi;
use crate::scalar::ScalarKind;

/// Distance metric used by the proximity graph.
///
/// The set is shared with the engine; [`MetricKind::from_raw`] maps any
/// unrecognized tag to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Unknown,
    /// Cosine distance: `1 - cos(a, b)`.
    Cos,
    /// Inner-product distance: `1 - dot(a, b)`. Intended for
    /// pre-normalized vectors.
    Ip,
    /// Squared Euclidean distance.
    L2sq,
    Haversine,
    Pearson,
    Jaccard,
    Hamming,
    Tanimoto,
    Sorensen,
}

impl MetricKind {
    /// Raw tag passed across the FFI boundary.
    pub fn to_raw(self) -> c_int {
        match self {
            MetricKind::Unknown => 0,
            MetricKind::Cos => 1,
            MetricKind::Ip => 2,
            MetricKind::L2sq => 3,
            MetricKind::Haversine => 4,
            MetricKind::Pearson => 5,
            MetricKind::Jaccard => 6,
            MetricKind::Hamming => 7,
            MetricKind::Tanimoto => 8,
            MetricKind::Sorensen => 9,
        }
    }

    /// Decodes a raw tag, failing closed to `Unknown`.
    pub fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => MetricKind::Cos,
            2 => MetricKind::Ip,
            3 => MetricKind::L2sq,
            4 => MetricKind::Haversine,
            5 => MetricKind::Pearson,
            6 => MetricKind::Jaccard,
            7 => MetricKind::Hamming,
            8 => MetricKind::Tanimoto,
            9 => MetricKind::Sorensen,
            _ => MetricKind::Unknown,
        }
    }
}

/// Custom distance function plugged into the engine in place of
/// `metric_kind`. Both addresses point at vectors in the index's
/// quantization kind.
pub type MetricFn = ffi::UsearchMetricT;

/// Configuration snapshot passed to [`Index::new`](crate::Index::new).
///
/// Immutable once the index is created. Afterwards the engine is the
/// source of truth: [`Index`](crate::Index) introspection re-reads live
/// values instead of trusting this snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Distance metric. Default: cosine.
    pub metric_kind: MetricKind,
    /// Storage precision inside the engine. Default: f32.
    pub quantization: ScalarKind,
    /// Vector dimensionality. Required; must be positive.
    pub dimensions: usize,
    /// Graph fan-out per node.
    pub connectivity: usize,
    /// Candidate-list breadth while inserting. Larger is slower and
    /// higher recall.
    pub expansion_add: usize,
    /// Candidate-list breadth while querying.
    pub expansion_search: usize,
    /// Optional custom metric, overriding `metric_kind`.
    #[serde(skip)]
    pub metric: Option<MetricFn>,
}

impl IndexOptions {
    /// Options for a `dimensions`-dimensional index, everything else at
    /// defaults.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            ..Self::default()
        }
    }

    pub(crate) fn to_ffi(&self) -> ffi::UsearchInitOptionsT {
        ffi::UsearchInitOptionsT {
            metric_kind: self.metric_kind.to_raw(),
            metric: self.metric,
            quantization: self.quantization.to_raw(),
            dimensions: self.dimensions,
            connectivity: self.connectivity,
            expansion_add: self.expansion_add,
            expansion_search: self.expansion_search,
        }
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            metric_kind: MetricKind::Cos,
            quantization: ScalarKind::F32,
            dimensions: 0,
            connectivity: 2,
            expansion_add: 64,
            expansion_search: 16,
            metric: None,
        }
    }
}
