//! Sparse multivectors: linear combinations of basis blades with unique
//! masks, generic over a metric [`Signature`].
//!
//! A multivector stores only the blades that are actually present, in
//! insertion order. Every arithmetic operation builds and returns a fresh
//! value; operands are never mutated.

use crate::blade::Blade;
use crate::sign::{metric_factor, parity_sign, reorder_parity, reversion_sign};
use crate::signature::Signature;
use crate::types::{Mask, Scalar};
use std::fmt;
use std::marker::PhantomData;

/// Sparse multivector over the metric signature `S`.
///
/// Invariant: no two stored blades share a mask. Inserting a blade whose
/// mask is already present sums the coefficients into the existing entry;
/// inserting an exactly-zero coefficient is a no-op. A stored coefficient
/// that later cancels to zero through merging is kept, matching the
/// insertion-time-only zero check.
#[derive(Clone, Debug, PartialEq)]
pub struct Multivector<S: Signature> {
    blades: Vec<Blade>,
    _signature: PhantomData<S>,
}

impl<S: Signature> Multivector<S> {
    fn empty() -> Self {
        Self {
            blades: Vec::new(),
            _signature: PhantomData,
        }
    }

    /// Build a multivector by merging the given blades one at a time.
    ///
    /// The final mask-to-coefficient mapping is independent of input order;
    /// the iteration order of the stored blades follows first insertion.
    pub fn from_blades<I>(blades: I) -> Self
    where
        I: IntoIterator<Item = Blade>,
    {
        let mut v = Self::empty();
        for b in blades {
            v.add_blade(b.coefficient, b.mask);
        }
        v
    }

    /// The basis vector `e_i`: a single blade `1 * e(1 << i)`.
    ///
    /// # Panics
    /// If `i >= S::max_dimension()`.
    pub fn basis_vector(i: u32) -> Self {
        assert!(
            i < S::max_dimension(),
            "basis vector index {} exceeds maximum dimension {}",
            i,
            S::max_dimension()
        );
        let mut v = Self::empty();
        v.add_blade(1.0, 1u64 << i);
        v
    }

    /// The stored blades, in insertion order.
    pub fn blades(&self) -> &[Blade] {
        &self.blades
    }

    /// Coefficient of the blade with the given mask, or `0` if absent.
    pub fn coefficient(&self, mask: Mask) -> Scalar {
        self.blades
            .iter()
            .find(|b| b.mask == mask)
            .map_or(0.0, |b| b.coefficient)
    }

    /// Sum: every blade of both operands, coefficient-merged by mask.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = Self::empty();
        for b in &self.blades {
            result.add_blade(b.coefficient, b.mask);
        }
        for b in &other.blades {
            result.add_blade(b.coefficient, b.mask);
        }
        result
    }

    /// Difference: `self + (-1) * other`, merged by mask.
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = Self::empty();
        for b in &self.blades {
            result.add_blade(b.coefficient, b.mask);
        }
        for b in &other.blades {
            result.add_blade(-b.coefficient, b.mask);
        }
        result
    }

    /// Every coefficient multiplied by `scalar`. Scaling by zero drops all
    /// blades at insertion time, yielding the empty multivector.
    pub fn scale(&self, scalar: Scalar) -> Self {
        let mut result = Self::empty();
        for b in &self.blades {
            result.add_blade(scalar * b.coefficient, b.mask);
        }
        result
    }

    /// Geometric product, blade-pair-wise over the full cross product of
    /// the operands' stored blades.
    ///
    /// For each pair the result mask is the XOR of the operand masks
    /// (shared basis vectors cancel out of the mask and contribute their
    /// metric square instead), and the coefficient picks up the
    /// anticommuting-reordering sign.
    pub fn geometric_product(&self, other: &Self) -> Self {
        let mut result = Self::empty();
        for a in &self.blades {
            for b in &other.blades {
                let new_mask = a.mask ^ b.mask;
                let sign = parity_sign(reorder_parity(a.mask, b.mask));
                let metric = metric_factor::<S>(a.mask, b.mask);
                result.add_blade(a.coefficient * b.coefficient * sign * metric, new_mask);
            }
        }
        result
    }

    /// Reversion: each blade of grade `k` picks up `(-1)^(k(k-1)/2)`.
    pub fn reverse(&self) -> Self {
        let mut result = Self::empty();
        for b in &self.blades {
            result.add_blade(b.coefficient * reversion_sign(b.grade()), b.mask);
        }
        result
    }

    /// Commutator `AB - BA`.
    pub fn commutator(a: &Self, b: &Self) -> Self {
        a.geometric_product(b).sub(&b.geometric_product(a))
    }

    /// Anticommutator `AB + BA`.
    pub fn anticommutator(a: &Self, b: &Self) -> Self {
        a.geometric_product(b).add(&b.geometric_product(a))
    }

    /// Merge rule: skip exact zeros, sum into an existing entry with the
    /// same mask, otherwise append. Linear scan; fine at demonstration
    /// scale, a mask-keyed map would be the upgrade for large blade counts.
    fn add_blade(&mut self, coefficient: Scalar, mask: Mask) {
        if coefficient == 0.0 {
            return;
        }
        for b in &mut self.blades {
            if b.mask == mask {
                b.coefficient += coefficient;
                return;
            }
        }
        self.blades.push(Blade { coefficient, mask });
    }
}

impl<S: Signature> fmt::Display for Multivector<S> {
    /// One line per stored blade, `"<coefficient> * e(<mask>)"`, no
    /// trailing newline; the empty multivector formats as nothing.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, b) in self.blades.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

impl<S: Signature> std::ops::Add for &Multivector<S> {
    type Output = Multivector<S>;
    fn add(self, rhs: Self) -> Multivector<S> {
        Multivector::add(self, rhs)
    }
}

impl<S: Signature> std::ops::Sub for &Multivector<S> {
    type Output = Multivector<S>;
    fn sub(self, rhs: Self) -> Multivector<S> {
        Multivector::sub(self, rhs)
    }
}

impl<S: Signature> std::ops::Mul for &Multivector<S> {
    type Output = Multivector<S>;
    fn mul(self, rhs: Self) -> Multivector<S> {
        self.geometric_product(rhs)
    }
}

impl<S: Signature> std::ops::Mul<Scalar> for &Multivector<S> {
    type Output = Multivector<S>;
    fn mul(self, scalar: Scalar) -> Multivector<S> {
        self.scale(scalar)
    }
}

impl<S: Signature> std::ops::Mul<&Multivector<S>> for Scalar {
    type Output = Multivector<S>;
    fn mul(self, v: &Multivector<S>) -> Multivector<S> {
        v.scale(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Euclidean;

    type Mv = Multivector<Euclidean<8>>;

    #[test]
    fn from_blades_merges_duplicate_masks() {
        let v = Mv::from_blades([
            Blade::new(1.0, 3),
            Blade::new(2.0, 5),
            Blade::new(4.0, 3),
        ]);
        assert_eq!(v.blades().len(), 2);
        assert_eq!(v.coefficient(3), 5.0);
        assert_eq!(v.coefficient(5), 2.0);
    }

    #[test]
    fn zero_coefficient_insert_is_a_no_op() {
        let v = Mv::from_blades([Blade::new(0.0, 1), Blade::new(2.0, 2)]);
        assert_eq!(v.blades().len(), 1);
        assert_eq!(v.coefficient(1), 0.0);
    }

    #[test]
    fn cancellation_after_storage_is_not_purged() {
        // The zero check happens only at insertion; a merge that lands on
        // exactly zero keeps the entry.
        let a = Mv::from_blades([Blade::new(1.0, 1)]);
        let b = Mv::from_blades([Blade::new(1.0, 1)]);
        let diff = a.sub(&b);
        assert_eq!(diff.blades().len(), 1);
        assert_eq!(diff.to_string(), "0 * e(1)");
    }

    #[test]
    fn scale_by_zero_empties() {
        let v = Mv::from_blades([Blade::new(1.0, 1), Blade::new(2.0, 2)]);
        assert!(v.scale(0.0).blades().is_empty());
        assert_eq!(v.scale(0.0).to_string(), "");
    }

    #[test]
    fn empty_operand_absorbs_product() {
        let v = Mv::basis_vector(0);
        let empty = Mv::from_blades(std::iter::empty());
        assert!(v.geometric_product(&empty).blades().is_empty());
        assert!(empty.geometric_product(&v).blades().is_empty());
    }

    #[test]
    #[should_panic(expected = "exceeds maximum dimension")]
    fn basis_vector_out_of_range_panics() {
        let _ = Mv::basis_vector(8);
    }

    #[test]
    fn operator_impls_match_named_methods() {
        let a = Mv::from_blades([Blade::new(2.0, 1)]);
        let b = Mv::from_blades([Blade::new(3.0, 2)]);
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.sub(&b));
        assert_eq!(&a * &b, a.geometric_product(&b));
        assert_eq!(&a * 2.0, a.scale(2.0));
        assert_eq!(2.0 * &a, a.scale(2.0));
    }
}
