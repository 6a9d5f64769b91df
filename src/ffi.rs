//! Raw FFI bindings for the USearch C API.
//!
//! These declarations match `usearch.h`. We hand-write them for the
//! entry points we consume, avoiding bindgen complexity.
//!
//! Every fallible call takes a trailing error out-parameter. A null
//! error means success; a non-null error points at engine-owned static
//! text that must not be freed by the caller.

use std::os::raw::{c_char, c_int, c_void};

/// Opaque index handle.
pub type UsearchIndexT = *mut c_void;
/// Key identifying one stored vector.
pub type UsearchKeyT = u64;
/// Distance between two vectors, always single precision.
pub type UsearchDistanceT = f32;
/// Engine diagnostic string, null on success.
pub type UsearchErrorT = *const c_char;
/// Raw metric-kind tag. Decoded by [`MetricKind`](crate::MetricKind).
pub type UsearchMetricKindT = c_int;
/// Raw scalar-kind tag. Decoded by [`ScalarKind`](crate::ScalarKind).
pub type UsearchScalarKindT = c_int;
/// Custom distance function. Receives two raw vector addresses in the
/// index's quantization kind.
pub type UsearchMetricT =
    unsafe extern "C" fn(a: *const c_void, b: *const c_void) -> UsearchDistanceT;

/// Mirrors `usearch_init_options_t`.
#[repr(C)]
pub struct UsearchInitOptionsT {
    pub metric_kind: UsearchMetricKindT,
    pub metric: Option<UsearchMetricT>,
    pub quantization: UsearchScalarKindT,
    pub dimensions: usize,
    pub connectivity: usize,
    pub expansion_add: usize,
    pub expansion_search: usize,
}

unsafe extern "C" {
    // Lifecycle
    pub fn usearch_init(
        options: *const UsearchInitOptionsT,
        error: *mut UsearchErrorT,
    ) -> UsearchIndexT;
    pub fn usearch_free(index: UsearchIndexT, error: *mut UsearchErrorT);

    // Persistence
    pub fn usearch_save(index: UsearchIndexT, path: *const c_char, error: *mut UsearchErrorT);
    pub fn usearch_load(index: UsearchIndexT, path: *const c_char, error: *mut UsearchErrorT);
    pub fn usearch_view(index: UsearchIndexT, path: *const c_char, error: *mut UsearchErrorT);

    // Introspection
    pub fn usearch_size(index: UsearchIndexT, error: *mut UsearchErrorT) -> usize;
    pub fn usearch_capacity(index: UsearchIndexT, error: *mut UsearchErrorT) -> usize;
    pub fn usearch_dimensions(index: UsearchIndexT, error: *mut UsearchErrorT) -> usize;
    pub fn usearch_connectivity(index: UsearchIndexT, error: *mut UsearchErrorT) -> usize;

    // Capacity
    pub fn usearch_reserve(index: UsearchIndexT, capacity: usize, error: *mut UsearchErrorT);

    // Vectors. These calls carry no element count: the engine reads or
    // writes exactly `usearch_dimensions` elements of `kind` at the given
    // address, so buffers must be sized before the call.
    pub fn usearch_add(
        index: UsearchIndexT,
        key: UsearchKeyT,
        vector: *const c_void,
        kind: UsearchScalarKindT,
        error: *mut UsearchErrorT,
    );
    pub fn usearch_contains(
        index: UsearchIndexT,
        key: UsearchKeyT,
        error: *mut UsearchErrorT,
    ) -> bool;
    pub fn usearch_get(
        index: UsearchIndexT,
        key: UsearchKeyT,
        vector: *mut c_void,
        kind: UsearchScalarKindT,
        error: *mut UsearchErrorT,
    ) -> bool;
    pub fn usearch_remove(index: UsearchIndexT, key: UsearchKeyT, error: *mut UsearchErrorT);
    pub fn usearch_search(
        index: UsearchIndexT,
        query: *const c_void,
        kind: UsearchScalarKindT,
        limit: usize,
        keys: *mut UsearchKeyT,
        distances: *mut UsearchDistanceT,
        error: *mut UsearchErrorT,
    ) -> usize;
}
