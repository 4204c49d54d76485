use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use rand::Rng;
use rayon::prelude::*;
use std::ops;
use std::ops::Range;

/// Row-major matrix of `f64`. Always rectangular with at least one row and
/// one column when built through `from_list`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReal {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<f64>,
}

impl Matrix<f64> for MatrixReal {
    fn from_cells(rows: usize, cols: usize, cells: Vec<f64>) -> Self {
        assert_eq!(cells.len(), rows * cols, "cell count does not match shape");
        MatrixReal { rows, cols, cells }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.cells[row * self.cols + col]
    }
}

impl MatrixReal {
    pub fn row(&self, r: usize) -> &[f64] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.cols)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.cells[row * self.cols + col] = value;
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn scale_row(&mut self, r: usize, divisor: f64) {
        self.cells[r * self.cols..(r + 1) * self.cols]
            .iter_mut()
            .for_each(|x| *x /= divisor);
    }

    /// `row[target] -= factor * row[source]` across every column
    pub fn subtract_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        for k in 0..self.cols {
            let v = self.cells[source * self.cols + k];
            self.cells[target * self.cols + k] -= factor * v;
        }
    }

    /// `[A | I]` for a square `A`
    pub fn augment_identity(&self) -> MatrixReal {
        let n = self.rows;
        let width = self.cols + n;
        let mut aug = MatrixReal::zeros(n, width);
        for r in 0..n {
            aug.cells[r * width..r * width + self.cols].copy_from_slice(self.row(r));
            aug.cells[r * width + self.cols + r] = 1.0;
        }
        aug
    }

    /// Copy of the column block `range`
    pub fn columns(&self, range: Range<usize>) -> MatrixReal {
        let width = range.len();
        MatrixReal {
            rows: self.rows,
            cols: width,
            cells: self
                .row_slices()
                .flat_map(|row| row[range.clone()].iter().copied())
                .collect(),
        }
    }

    pub fn approx_eq(&self, other: &MatrixReal, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Uniform entries in `[-10, 10)`
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> MatrixReal {
        MatrixReal {
            rows,
            cols,
            cells: (0..rows * cols).map(|_| rng.gen_range(-10.0..10.0)).collect(),
        }
    }
}

impl ops::Mul<&MatrixReal> for &MatrixReal {
    type Output = Result<MatrixReal, MatrixError>;

    fn mul(self, rhs: &MatrixReal) -> Result<MatrixReal, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut result = MatrixReal::zeros(self.rows, rhs.cols);
        let rot = rhs.transpose();

        result
            .cells
            .par_chunks_mut(rhs.cols)
            .enumerate()
            .for_each(|(r, row)| {
                let lhs_row = self.row(r);
                for (c, cell) in row.iter_mut().enumerate() {
                    *cell = lhs_row.iter().zip(rot.row(c)).map(|(a, b)| a * b).sum();
                }
            });

        Ok(result)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
