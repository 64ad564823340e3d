//! Hierarchy synthesis and ranking.
//!
//! Combines the priority engine's outputs across a two-level hierarchy:
//!
//! 1. The criteria matrix yields the criteria weight vector.
//! 2. Each criterion's alternatives matrix yields local priorities.
//! 3. Each alternative's final score is the weighted sum of its local
//!    priorities, and alternatives are ranked by descending score with
//!    competition ("1224") ranks.
//!
//! # Examples
//!
//! ```
//! use u_ahp::hierarchy::{Hierarchy, HierarchyConfig, HierarchyRunner};
//! use u_ahp::matrix::ComparisonMatrix;
//!
//! let criteria = ComparisonMatrix::from_upper_triangle(2, &[3.0]).unwrap();
//! let price = ComparisonMatrix::from_upper_triangle(2, &[1.0 / 2.0]).unwrap();
//! let comfort = ComparisonMatrix::from_upper_triangle(2, &[4.0]).unwrap();
//!
//! let hierarchy = Hierarchy::new(["price", "comfort"], ["sedan", "hatchback"], criteria)
//!     .with_alternative_matrix(price)
//!     .with_alternative_matrix(comfort);
//!
//! let result = HierarchyRunner::run(&hierarchy, &HierarchyConfig::default()).unwrap();
//! assert_eq!(result.ranking[0].rank, 1);
//! assert!((result.scores().iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! Saaty (1980), "The Analytic Hierarchy Process", ch. 2–3

mod config;
mod ranking;
mod runner;
mod types;

pub use config::HierarchyConfig;
pub use ranking::rank_scores;
pub use runner::HierarchyRunner;
pub use types::{Hierarchy, HierarchyResult, RankedAlternative};
