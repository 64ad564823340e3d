//! Random consistency index table.

use super::engine::approximate;
use crate::error::{AhpError, Result};
use crate::matrix::ComparisonMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Saaty's tabulated random index for matrix orders 1 through 10.
pub const SAATY_RANDOM_INDEX: [f64; 10] = [0.00, 0.00, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// The 17-point Saaty judgment scale: 1/9, 1/8, ..., 1/2, 1, 2, ..., 9.
const SAATY_SCALE: [f64; 17] = [
    1.0 / 9.0,
    1.0 / 8.0,
    1.0 / 7.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
    6.0,
    7.0,
    8.0,
    9.0,
];

/// Maps matrix order `n` to the average consistency index of random
/// reciprocal matrices, RI(n).
///
/// Index 0 of the stored values corresponds to `n = 1`. Orders beyond the
/// table have no random index, so their consistency ratio is undefined.
///
/// # Examples
///
/// ```
/// use u_ahp::priority::RandomIndexTable;
///
/// let table = RandomIndexTable::saaty();
/// assert_eq!(table.lookup(4), Some(0.90));
/// assert_eq!(table.lookup(11), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomIndexTable {
    values: Vec<f64>,
}

impl Default for RandomIndexTable {
    fn default() -> Self {
        Self::saaty()
    }
}

impl RandomIndexTable {
    /// Saaty's standard table, n = 1..=10.
    pub fn saaty() -> Self {
        Self {
            values: SAATY_RANDOM_INDEX.to_vec(),
        }
    }

    /// Builds a custom table. `values[0]` is RI(1).
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(AhpError::InvalidConfig(
                "random index table must not be empty".into(),
            ));
        }
        if let Some((i, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(AhpError::InvalidConfig(format!(
                "random index for n={} must be finite and non-negative, got {v}",
                i + 1
            )));
        }
        Ok(Self { values })
    }

    /// Returns RI(n), or `None` when `n` is 0 or beyond the table.
    pub fn lookup(&self, n: usize) -> Option<f64> {
        n.checked_sub(1).and_then(|i| self.values.get(i).copied())
    }

    /// Largest order covered by the table.
    pub fn max_order(&self) -> usize {
        self.values.len()
    }

    /// Tabulated values, starting at n = 1.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Estimates a table by Monte-Carlo simulation.
    ///
    /// For each order `n` in `1..=max_order`, draws `samples` random
    /// reciprocal matrices whose upper-triangle judgments are uniform over
    /// the 17-point Saaty scale and averages their consistency index.
    /// Orders 1 and 2 are always consistent and get 0.
    ///
    /// The same `seed` always yields the same table. Values differ slightly
    /// from Saaty's because the principal eigenvalue is approximated by
    /// column normalization.
    ///
    /// # References
    ///
    /// Saaty (1980); Alonso & Lamata (2006), "Consistency in the Analytic
    /// Hierarchy Process: a new approach"
    pub fn estimate(max_order: usize, samples: usize, seed: u64) -> Result<Self> {
        if max_order == 0 {
            return Err(AhpError::InvalidConfig("max_order must be at least 1".into()));
        }
        if samples == 0 {
            return Err(AhpError::InvalidConfig("samples must be at least 1".into()));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut values = Vec::with_capacity(max_order);

        for n in 1..=max_order {
            if n <= 2 {
                values.push(0.0);
                continue;
            }

            let judgments = n * (n - 1) / 2;
            let mut upper = vec![1.0; judgments];
            let mut total = 0.0;
            for _ in 0..samples {
                for slot in upper.iter_mut() {
                    *slot = SAATY_SCALE[rng.random_range(0..SAATY_SCALE.len())];
                }
                let matrix = ComparisonMatrix::from_upper_triangle(n, &upper)?;
                let lambda_max = approximate(&matrix)?.lambda_max;
                total += (lambda_max - n as f64) / (n as f64 - 1.0);
            }

            let ri = total / samples as f64;
            debug!(n, samples, ri, "estimated random index");
            values.push(ri);
        }

        Ok(Self { values })
    }
}
