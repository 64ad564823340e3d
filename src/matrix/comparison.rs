//! Validated square matrix of positive pairwise judgments.

use crate::error::{AhpError, Result};
use std::ops::Index;

/// An n×n matrix of positive, finite pairwise comparisons.
///
/// Entry `(i, j)` expresses the importance of item `i` relative to item `j`.
/// Stored row-major.
///
/// # Examples
///
/// ```
/// use u_ahp::matrix::ComparisonMatrix;
///
/// let m = ComparisonMatrix::from_rows(&[
///     [1.0, 3.0],
///     [1.0 / 3.0, 1.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert!((m[(0, 1)] - 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct ComparisonMatrix {
    n: usize,
    data: Vec<f64>,
}

impl ComparisonMatrix {
    /// Builds a matrix from full rows.
    ///
    /// Fails with [`AhpError::InvalidMatrix`] when the input is empty, not
    /// square, or holds a non-finite or non-positive entry.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::InvalidMatrix("matrix is empty".into()));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(AhpError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                check_entry(i, j, value)?;
                data.push(value);
            }
        }

        Ok(Self { n, data })
    }

    /// Builds a reciprocal matrix from the judgments above the diagonal.
    ///
    /// `upper` lists `a[0][1], a[0][2], ..., a[0][n-1], a[1][2], ...` in
    /// row-major order, `n(n-1)/2` values in total. The diagonal is set to
    /// 1 and the lower triangle to the reciprocals.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_ahp::matrix::ComparisonMatrix;
    ///
    /// let m = ComparisonMatrix::from_upper_triangle(3, &[3.0, 5.0, 2.0]).unwrap();
    /// assert!((m[(2, 0)] - 0.2).abs() < 1e-12);
    /// assert!(m.is_reciprocal(1e-12));
    /// ```
    pub fn from_upper_triangle(n: usize, upper: &[f64]) -> Result<Self> {
        if n == 0 {
            return Err(AhpError::InvalidMatrix("matrix is empty".into()));
        }
        let expected = n * (n - 1) / 2;
        if upper.len() != expected {
            return Err(AhpError::InvalidMatrix(format!(
                "expected {expected} upper-triangle judgments for n={n}, got {}",
                upper.len()
            )));
        }

        let mut data = vec![1.0; n * n];
        let mut values = upper.iter();
        for i in 0..n {
            for j in (i + 1)..n {
                // Length checked above.
                let value = *values.next().unwrap_or(&1.0);
                let reciprocal = 1.0 / value;
                check_entry(i, j, value)?;
                check_entry(j, i, reciprocal)?;
                data[i * n + j] = value;
                data[j * n + i] = reciprocal;
            }
        }

        Ok(Self { n, data })
    }

    /// Builds the perfectly consistent matrix `a[i][j] = w[i] / w[j]`.
    ///
    /// Its priority vector is `w` normalized to unit sum and its principal
    /// eigenvalue equals `n`.
    pub fn from_weights(weights: &[f64]) -> Result<Self> {
        let n = weights.len();
        if n == 0 {
            return Err(AhpError::InvalidMatrix("weight vector is empty".into()));
        }
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w <= 0.0 {
                return Err(AhpError::InvalidMatrix(format!(
                    "weight {i} must be positive and finite, got {w}"
                )));
            }
        }

        // Wide weight spreads can overflow or underflow the ratios.
        let mut data = Vec::with_capacity(n * n);
        for (i, wi) in weights.iter().enumerate() {
            for (j, wj) in weights.iter().enumerate() {
                let ratio = wi / wj;
                check_entry(i, j, ratio)?;
                data.push(ratio);
            }
        }
        Ok(Self { n, data })
    }

    /// Matrix order `n`.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns entry `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }

    /// Verifies the diagonal is 1 and `a[j][i] * a[i][j] = 1` within `tolerance`.
    ///
    /// Returns the first offending entry as [`AhpError::NotReciprocal`].
    pub fn check_reciprocal(&self, tolerance: f64) -> Result<()> {
        let n = self.n;
        for i in 0..n {
            let diagonal = self.data[i * n + i];
            if (diagonal - 1.0).abs() > tolerance {
                return Err(AhpError::NotReciprocal {
                    row: i,
                    col: i,
                    expected: 1.0,
                    actual: diagonal,
                });
            }
            for j in (i + 1)..n {
                let upper = self.data[i * n + j];
                let lower = self.data[j * n + i];
                if (upper * lower - 1.0).abs() > tolerance {
                    return Err(AhpError::NotReciprocal {
                        row: j,
                        col: i,
                        expected: 1.0 / upper,
                        actual: lower,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if [`check_reciprocal`](Self::check_reciprocal) passes.
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        self.check_reciprocal(tolerance).is_ok()
    }

    /// Converts into nested rows.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.n).map(<[f64]>::to_vec).collect()
    }
}

fn check_entry(i: usize, j: usize, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AhpError::InvalidMatrix(format!(
            "entry ({i}, {j}) is not finite: {value}"
        )));
    }
    if value <= 0.0 {
        return Err(AhpError::InvalidMatrix(format!(
            "entry ({i}, {j}) must be positive, got {value}"
        )));
    }
    Ok(())
}

impl Index<(usize, usize)> for ComparisonMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        &self.data[i * self.n + j]
    }
}

impl TryFrom<Vec<Vec<f64>>> for ComparisonMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<ComparisonMatrix> for Vec<Vec<f64>> {
    fn from(matrix: ComparisonMatrix) -> Self {
        matrix.into_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ComparisonMatrix {
        ComparisonMatrix::from_rows(&[
            [1.0, 3.0, 5.0, 7.0],
            [1.0 / 3.0, 1.0, 3.0, 5.0],
            [1.0 / 5.0, 1.0 / 3.0, 1.0, 3.0],
            [1.0 / 7.0, 1.0 / 5.0, 1.0 / 3.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_ok() {
        let m = reference();
        assert_eq!(m.size(), 4);
        assert!((m[(0, 3)] - 7.0).abs() < 1e-12);
        assert_eq!(m.row(1).len(), 4);
        assert_eq!(m.rows().count(), 4);
    }

    #[test]
    fn test_empty_rejected() {
        let rows: Vec<Vec<f64>> = vec![];
        let err = ComparisonMatrix::from_rows(&rows).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(_)));
    }

    #[test]
    fn test_non_square_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![0.5]];
        let err = ComparisonMatrix::from_rows(&rows).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(ref msg) if msg.contains("row 1")));
    }

    #[test]
    fn test_zero_entry_rejected() {
        let err = ComparisonMatrix::from_rows(&[[1.0, 0.0], [1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(ref msg) if msg.contains("positive")));
    }

    #[test]
    fn test_negative_entry_rejected() {
        let err = ComparisonMatrix::from_rows(&[[1.0, -2.0], [0.5, 1.0]]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ComparisonMatrix::from_rows(&[[1.0, f64::NAN], [1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(ref msg) if msg.contains("finite")));

        let err =
            ComparisonMatrix::from_rows(&[[1.0, f64::INFINITY], [1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_upper_triangle_matches_full() {
        let m = ComparisonMatrix::from_upper_triangle(4, &[3.0, 5.0, 7.0, 3.0, 5.0, 3.0])
            .unwrap();
        let r = reference();
        for i in 0..4 {
            for j in 0..4 {
                assert!((m[(i, j)] - r[(i, j)]).abs() < 1e-12, "mismatch at ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_from_upper_triangle_wrong_count() {
        let err = ComparisonMatrix::from_upper_triangle(3, &[2.0, 3.0]).unwrap_err();
        assert!(matches!(err, AhpError::InvalidMatrix(_)));
    }

    #[test]
    fn test_from_upper_triangle_single() {
        let m = ComparisonMatrix::from_upper_triangle(1, &[]).unwrap();
        assert_eq!(m.size(), 1);
        assert!((m[(0, 0)] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_weights_is_consistent() {
        let m = ComparisonMatrix::from_weights(&[4.0, 2.0, 1.0]).unwrap();
        assert!((m[(0, 2)] - 4.0).abs() < 1e-12);
        assert!((m[(2, 1)] - 0.5).abs() < 1e-12);
        assert!(m.is_reciprocal(1e-12));
    }

    #[test]
    fn test_from_weights_rejects_zero() {
        assert!(ComparisonMatrix::from_weights(&[1.0, 0.0]).is_err());
        assert!(ComparisonMatrix::from_weights(&[]).is_err());
    }

    #[test]
    fn test_from_upper_triangle_rejects_overflowing_reciprocal() {
        // 1 / 1e-310 overflows to infinity.
        let err = ComparisonMatrix::from_upper_triangle(2, &[1e-310]).unwrap_err();
        assert!(
            matches!(err, AhpError::InvalidMatrix(ref msg) if msg.contains("(1, 0)")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_from_weights_rejects_overflowing_ratio() {
        let err = ComparisonMatrix::from_weights(&[1e300, 1e-300, 1.0]).unwrap_err();
        assert!(
            matches!(err, AhpError::InvalidMatrix(ref msg) if msg.contains("(0, 1)")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_reciprocity_check() {
        assert!(reference().is_reciprocal(1e-9));

        let skewed = ComparisonMatrix::from_rows(&[[1.0, 3.0], [0.5, 1.0]]).unwrap();
        match skewed.check_reciprocal(1e-9) {
            Err(AhpError::NotReciprocal {
                row,
                col,
                expected,
                actual,
            }) => {
                assert_eq!((row, col), (1, 0));
                assert!((expected - 1.0 / 3.0).abs() < 1e-12);
                assert!((actual - 0.5).abs() < 1e-12);
            }
            other => panic!("expected NotReciprocal, got {other:?}"),
        }
    }

    #[test]
    fn test_reciprocity_checks_diagonal() {
        let m = ComparisonMatrix::from_rows(&[[2.0, 1.0], [1.0, 1.0]]).unwrap();
        assert!(matches!(
            m.check_reciprocal(1e-9),
            Err(AhpError::NotReciprocal { row: 0, col: 0, .. })
        ));
    }

    #[test]
    fn test_get_out_of_range() {
        let m = reference();
        assert!(m.get(4, 0).is_none());
        assert!(m.get(0, 0).is_some());
    }

    #[test]
    fn test_into_rows_roundtrip_via_try_from() {
        let m = reference();
        let rows: Vec<Vec<f64>> = m.clone().into();
        let back = ComparisonMatrix::try_from(rows).unwrap();
        assert_eq!(m, back);
    }
}
