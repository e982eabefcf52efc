//! Parity and sign helpers for the geometric product and reversion.
//!
//! Pure bit-twiddling over blade masks; no state. Grade and transposition
//! counts come straight from `count_ones`/`trailing_zeros`.

use crate::signature::Signature;
use crate::types::{Mask, Scalar};

/// Parity (0 or 1) of the number of basis-vector transpositions needed to
/// interleave the factors of `b` past the factors of `a` into canonical
/// ascending order.
///
/// For each set bit of `b`, from least to most significant, every set bit
/// of `a` strictly below it must be swapped past once.
pub fn reorder_parity(a: Mask, mut b: Mask) -> u32 {
    let mut parity = 0u32;
    while b != 0 {
        let i = b.trailing_zeros();
        let below = a & ((1u64 << i) - 1);
        parity ^= below.count_ones() & 1;
        b &= b - 1;
    }
    parity
}

/// The sign for a parity bit: `+1` if even, `-1` if odd.
pub fn parity_sign(parity: u32) -> Scalar {
    if parity & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Metric contribution of the basis vectors common to both masks: the
/// product of their squares under `S`. A `0` square correctly annihilates
/// the term; a `-1` square flips its sign.
pub fn metric_factor<S: Signature>(a: Mask, b: Mask) -> Scalar {
    let mut repeated = a & b;
    let mut factor = 1.0;
    while repeated != 0 {
        let i = repeated.trailing_zeros();
        factor *= S::square_of(i);
        repeated &= repeated - 1;
    }
    factor
}

/// Reversion sign for a blade of grade `k`: `(-1)^(k(k-1)/2)`.
pub fn reversion_sign(grade: u32) -> Scalar {
    parity_sign((grade * grade.wrapping_sub(1) / 2) & 1)
}
