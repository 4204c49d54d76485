use num_traits::{One, Signed, Zero};

use crate::error::MatrixError;

pub trait Element: Copy + Zero + One + Signed + PartialOrd + std::fmt::Debug {}

impl<T> Element for T where T: Copy + Zero + One + Signed + PartialOrd + std::fmt::Debug {}

/// Dense rectangular matrix. Implementors only provide storage access, the
/// shape-level operations come for free.
pub trait Matrix<T: Element>
where
    Self: Sized,
{
    /// Build from row-major cells, `cells.len()` must be `rows * cols`
    fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Self;
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;
    fn at(&self, row: usize, col: usize) -> T;

    fn from_list(lines: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MatrixError::Ragged {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Ok(Self::from_cells(rows, cols, lines.into_iter().flatten().collect()))
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.at(r, c)).collect())
            .collect()
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_cells(rows, cols, vec![T::zero(); rows * cols])
    }

    fn identity(n: usize) -> Self {
        Self::from_cells(
            n,
            n,
            (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        )
    }

    fn transpose(&self) -> Self {
        Self::from_cells(
            self.cols(),
            self.rows(),
            (0..self.cols())
                .flat_map(|c| (0..self.rows()).map(move |r| self.at(r, c)))
                .collect(),
        )
    }

    fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Leading entries are 1, their columns are otherwise zero, pivot columns
    /// strictly increase and zero rows come last.
    fn is_rref(&self, tolerance: T) -> bool {
        let nonzero = |x: T| x.abs() > tolerance;
        let mut lead = None;

        for i in 0..self.rows() {
            let pivot_col_opt = (0..self.cols()).find(|&c| nonzero(self.at(i, c)));

            match pivot_col_opt {
                None => {
                    let rest_nonzero = (i + 1..self.rows())
                        .any(|r| (0..self.cols()).any(|c| nonzero(self.at(r, c))));
                    return !rest_nonzero;
                }
                Some(pivot_col) => {
                    if let Some(prev_lead) = lead {
                        if pivot_col <= prev_lead {
                            return false;
                        }
                    }
                    lead = Some(pivot_col);

                    if nonzero(self.at(i, pivot_col) - T::one()) {
                        return false;
                    }

                    if (0..self.rows()).any(|r| r != i && nonzero(self.at(r, pivot_col))) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
