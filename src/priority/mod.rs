//! Priority vectors and consistency diagnostics.
//!
//! Turns one pairwise comparison matrix into a normalized weight vector
//! using the column-normalization approximation of the principal
//! eigenvector, then measures how consistent the judgments are:
//!
//! - **CI** (consistency index): `(lambda_max - n) / (n - 1)`
//! - **RI** (random index): average CI of random reciprocal matrices of
//!   the same order, looked up in a [`RandomIndexTable`]
//! - **CR** (consistency ratio): `CI / RI`; below 0.10 is conventionally
//!   acceptable
//!
//! # References
//!
//! - Saaty (1980), "The Analytic Hierarchy Process"
//! - Saaty (1990), "How to make a decision: The Analytic Hierarchy Process"

mod config;
mod engine;
mod random_index;
mod types;

pub use config::{PriorityConfig, DEFAULT_CONSISTENCY_THRESHOLD};
pub use engine::PriorityEngine;
pub use random_index::{RandomIndexTable, SAATY_RANDOM_INDEX};
pub use types::{Consistency, PriorityResult};
