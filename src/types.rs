// src/types.rs
#![allow(dead_code)]

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

/// Basis-blade bitmask: bit `i` set means basis vector `i` is a factor.
/// One machine word, so dimensions up to 64 are representable.
pub type Mask = u64;
