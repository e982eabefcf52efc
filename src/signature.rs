//! Metric signatures as zero-sized policy types.
//!
//! A signature answers one question: what does basis vector `i` square to?
//! `Multivector` is generic over a `Signature`, so the metric is fixed at
//! compile time and costs nothing at run time.

use crate::types::Scalar;

/// Metric policy: the square of each basis vector, and how many basis
/// vectors exist.
///
/// `square_of` may return any value: `+1` (Euclidean), `-1` (anti-Euclidean
/// directions of a pseudo-Euclidean metric), or `0` (a degenerate basis
/// vector, which annihilates any product containing its square).
pub trait Signature {
    /// Square of basis vector `index`.
    ///
    /// # Panics
    /// If `index >= Self::max_dimension()`. Calling out of range is a
    /// caller bug, not a runtime condition.
    fn square_of(index: u32) -> Scalar;

    /// Number of basis vectors this signature supports.
    fn max_dimension() -> u32;
}

/// All basis vectors square to `+1`; dimension is the const parameter
/// (at most 64, the width of a blade mask).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Euclidean<const N: u32>;

impl<const N: u32> Signature for Euclidean<N> {
    fn square_of(index: u32) -> Scalar {
        assert!(index < N, "basis index {} outside signature bounds {}", index, N);
        1.0
    }

    fn max_dimension() -> u32 {
        N
    }
}

/// Four basis vectors with the (+,-,-,-) spacetime metric: e0 squares to
/// `+1`, e1..e3 square to `-1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Spacetime;

impl Spacetime {
    const SQUARES: [Scalar; 4] = [1.0, -1.0, -1.0, -1.0];
}

impl Signature for Spacetime {
    fn square_of(index: u32) -> Scalar {
        assert!(index < 4, "basis index {} outside signature bounds 4", index);
        Self::SQUARES[index as usize]
    }

    fn max_dimension() -> u32 {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_squares_are_one() {
        for i in 0..8 {
            assert_eq!(Euclidean::<8>::square_of(i), 1.0);
        }
        assert_eq!(Euclidean::<8>::max_dimension(), 8);
    }

    #[test]
    fn spacetime_metric_values() {
        assert_eq!(Spacetime::square_of(0), 1.0);
        assert_eq!(Spacetime::square_of(1), -1.0);
        assert_eq!(Spacetime::square_of(2), -1.0);
        assert_eq!(Spacetime::square_of(3), -1.0);
    }

    #[test]
    #[should_panic(expected = "outside signature bounds")]
    fn spacetime_index_out_of_range_panics() {
        Spacetime::square_of(4);
    }

    #[test]
    #[should_panic(expected = "outside signature bounds")]
    fn euclidean_index_out_of_range_panics() {
        Euclidean::<4>::square_of(4);
    }
}
