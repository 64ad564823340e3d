//! Pairwise comparison matrices.
//!
//! A comparison matrix records, for every pair of items, how much more
//! important item `i` is than item `j`. A well-formed matrix is positive
//! and reciprocal: `a[i][i] = 1` and `a[j][i] = 1 / a[i][j]`.
//!
//! Construction checks shape and positivity. Reciprocity is reported by
//! [`ComparisonMatrix::check_reciprocal`] but never enforced here, so
//! callers decide how strict to be.
//!
//! # References
//!
//! Saaty (1980), "The Analytic Hierarchy Process"

mod comparison;

pub use comparison::ComparisonMatrix;
