//! Analytic Hierarchy Process (AHP) engine.
//!
//! Turns pairwise subjective comparisons into weights, consistency
//! diagnostics, and a ranked choice among alternatives:
//!
//! - **Matrix**: validated pairwise comparison matrices, built from full
//!   rows, upper-triangle judgments, or a weight vector.
//! - **Priority**: column-normalization approximation of the principal
//!   eigenvector, with the consistency index, random index, and
//!   consistency ratio.
//! - **Hierarchy**: runs the priority engine over a criteria matrix and one
//!   alternatives matrix per criterion, synthesizes weighted scores, and
//!   assigns competition ranks.
//!
//! # Architecture
//!
//! Every computation is a pure function of its inputs. Lookup tables and
//! thresholds are passed in through configuration structs rather than read
//! from global state. Rendering results is left to the caller.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for inputs and results.
//! - `parallel`: evaluate per-criterion matrices with rayon.

pub mod error;
pub mod hierarchy;
pub mod matrix;
pub mod priority;

pub use error::{AhpError, Result};
