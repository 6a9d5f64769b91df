//! Scalar kinds and the closed set of vector element types.

use std::os::raw::c_int;

use half::f16;
use serde::{Deserialize, Serialize};

/// Numeric precision of vector elements, as understood by the engine.
///
/// The engine knows a wider set than this binding exposes for vector
/// buffers: `I8` and `B1` are valid storage quantizations but have no
/// [`VectorScalar`] implementation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Unknown,
    F32,
    F64,
    F16,
    I8,
    B1,
}

impl ScalarKind {
    /// Raw tag passed across the FFI boundary.
    pub fn to_raw(self) -> c_int {
        match self {
            ScalarKind::Unknown => 0,
            ScalarKind::F32 => 1,
            ScalarKind::F64 => 2,
            ScalarKind::F16 => 3,
            ScalarKind::I8 => 4,
            ScalarKind::B1 => 5,
        }
    }

    /// Decodes a raw tag. Values outside the shared closed set map to
    /// `Unknown`, which no operation accepts, rather than ever reaching
    /// the engine.
    pub fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => ScalarKind::F32,
            2 => ScalarKind::F64,
            3 => ScalarKind::F16,
            4 => ScalarKind::I8,
            5 => ScalarKind::B1,
            _ => ScalarKind::Unknown,
        }
    }

    /// Bytes per element in engine storage. `B1` packs eight elements
    /// per byte and reports 1; `Unknown` reports 0.
    pub fn bytes_per_element(self) -> usize {
        match self {
            ScalarKind::Unknown => 0,
            ScalarKind::F32 => 4,
            ScalarKind::F64 => 8,
            ScalarKind::F16 => 2,
            ScalarKind::I8 => 1,
            ScalarKind::B1 => 1,
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for half::f16 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element types that can cross the FFI boundary as vector buffers.
///
/// The set is closed: exactly `f16`, `f32`, and `f64`. Each type maps to
/// the engine tag sent alongside the raw buffer address, so one generic
/// call shape covers all three precisions. `half::f16` has no primitive
/// counterpart in Rust, but it is `repr(transparent)` over `u16` with
/// IEEE 754 binary16 layout, which makes by-address transport of its
/// slices equivalent to the native-precision kinds.
pub trait VectorScalar: sealed::Sealed + Copy + Default {
    /// Engine tag for buffers of this type.
    const KIND: ScalarKind;
}

impl VectorScalar for f16 {
    const KIND: ScalarKind = ScalarKind::F16;
}

impl VectorScalar for f32 {
    const KIND: ScalarKind = ScalarKind::F32;
}

impl VectorScalar for f64 {
    const KIND: ScalarKind = ScalarKind::F64;
}
