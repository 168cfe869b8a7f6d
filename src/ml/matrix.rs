//! Dense feature matrix.
//!
//! One row per example, one column per feature, stored row-major so that a
//! training step can borrow a whole example as a contiguous `&[f64]`.
//!
//! ```
//! use polarity::ml::matrix::FeatureMatrix;
//!
//! let m = FeatureMatrix::from_rows(&[vec![1.0, 0.0], vec![0.5, 2.0]]).unwrap();
//! assert_eq!(m.shape(), (2, 2));
//! assert_eq!(m.row(1), &[0.5, 2.0]);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};

/// An n×p matrix of reals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl FeatureMatrix {
    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(PolarityError::dimension(format!(
                "{} values cannot fill a {rows}x{cols} matrix",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix from equally sized rows.
    ///
    /// An empty slice gives a 0×0 matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(PolarityError::dimension(format!(
                    "row {i} has {} columns, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of examples.
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of features.
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Borrow one example.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Mutably borrow one example.
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over examples in storage order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, and a 0-column matrix still has `rows` rows
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Gets element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying row-major data.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

/// Dot product of two equally long slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec_checks_length() {
        assert!(FeatureMatrix::from_vec(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            FeatureMatrix::from_vec(2, 2, vec![1.0; 3]),
            Err(PolarityError::Dimension(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let result = FeatureMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(PolarityError::Dimension(_))));
    }

    #[test]
    fn test_rows_and_elements() {
        let mut m = FeatureMatrix::zeros(2, 3);
        m.set(1, 2, 4.0);
        m.row_mut(0)[1] = 1.5;

        assert_eq!(m.get(1, 2), 4.0);
        assert_eq!(m.row(0), &[0.0, 1.5, 0.0]);
        assert_eq!(m.rows().count(), 2);
        assert_eq!(m.as_slice().len(), 6);
    }

    #[test]
    fn test_zero_width_rows() {
        let m = FeatureMatrix::zeros(3, 0);
        assert_eq!(m.rows().count(), 3);
        assert!(m.row(2).is_empty());
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
        assert_eq!(dot(&[], &[]), 0.0);
    }
}
