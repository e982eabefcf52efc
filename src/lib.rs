//! # ga_sparse Quickstart
//!
//! ```rust
//! use ga_sparse::EuclideanMultivector;
//!
//! // e1 * e2 anticommutes into the e12 bivector (mask 0b11 = 3)
//! let e1 = EuclideanMultivector::basis_vector(0);
//! let e2 = EuclideanMultivector::basis_vector(1);
//! let b = e1.geometric_product(&e2);
//! assert_eq!(b.to_string(), "-1 * e(3)");
//!
//! // and a basis vector squares to the metric: e1 * e1 = 1
//! assert_eq!(e1.geometric_product(&e1).to_string(), "1 * e(0)");
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod blade;
pub mod multivector;
pub mod sign;
pub mod signature;
pub mod types;

// --- Public API exports ---

pub use blade::Blade;
pub use multivector::Multivector;
pub use signature::{Euclidean, Signature, Spacetime};
pub use types::{Mask, Scalar};

/// Full 64-dimensional Euclidean algebra (every mask bit usable).
pub type CliffordMultivector = Multivector<Euclidean<64>>;
/// 4-dimensional Euclidean algebra.
pub type EuclideanMultivector = Multivector<Euclidean<4>>;
/// 4-dimensional algebra with the (+,-,-,-) spacetime metric.
pub type SpacetimeMultivector = Multivector<Spacetime>;
