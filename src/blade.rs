//! Basis blades: a coefficient times a product of distinct basis vectors.

use crate::types::{Mask, Scalar};
use std::fmt;

/// A single term of a multivector: `coefficient * e(mask)`.
///
/// The mask is a bitmask over basis-vector indices; bit `i` set means basis
/// vector `i` participates in the blade. Blades are plain immutable values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blade {
    pub coefficient: Scalar,
    pub mask: Mask,
}

impl Blade {
    pub fn new(coefficient: Scalar, mask: Mask) -> Self {
        Self { coefficient, mask }
    }

    /// Grade = number of basis vectors in the blade (popcount of the mask).
    pub fn grade(&self) -> u32 {
        self.mask.count_ones()
    }
}

impl fmt::Display for Blade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} * e({})", self.coefficient, self.mask)
    }
}
