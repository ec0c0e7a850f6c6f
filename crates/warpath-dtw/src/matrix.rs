//! Dense accumulated-cost storage.
//!
//! [`CostGrid`] is the working buffer of the recurrence: `(n_rows + 1) x (n_cols + 1)`
//! with a sentinel row and column at index 0. Once filled it is trimmed into
//! the public [`CostMatrix`], which holds exactly one cell per point pair.

use std::ops::Index;

/// Working grid with a sentinel border.
///
/// Every cell starts at `+inf` except the origin `(0, 0)`, which is `0`. Cell
/// `(i + 1, j + 1)` holds the accumulated cost of aligning the first `i + 1`
/// points of one sequence with the first `j + 1` points of the other.
#[derive(Debug, Clone)]
pub(crate) struct CostGrid {
    n_rows: usize,
    n_cols: usize,
    width: usize,
    data: Vec<f64>,
}

impl CostGrid {
    /// Allocate a grid for an `n_rows x n_cols` alignment.
    pub(crate) fn new(n_rows: usize, n_cols: usize) -> Self {
        let width = n_cols + 1;
        let mut data = vec![f64::INFINITY; (n_rows + 1) * width];
        data[0] = 0.0;
        Self {
            n_rows,
            n_cols,
            width,
            data,
        }
    }

    /// Accumulate the local cost of point pair `(i, j)` into cell `(i + 1, j + 1)`.
    ///
    /// Reads the three causal neighbors `(i, j)`, `(i, j + 1)`, `(i + 1, j)`,
    /// which must already hold accumulated values.
    #[inline]
    pub(crate) fn accumulate(&mut self, i: usize, j: usize, local: f64) -> f64 {
        let up = i * self.width + j + 1;
        let here = up + self.width;
        let best = self.data[up - 1].min(self.data[up]).min(self.data[here - 1]);
        let value = local + best;
        self.data[here] = value;
        value
    }

    /// Drop the sentinel border.
    pub(crate) fn trim(self) -> CostMatrix {
        let mut data = Vec::with_capacity(self.n_rows * self.n_cols);
        for row in self.data.chunks_exact(self.width).skip(1) {
            data.extend_from_slice(&row[1..]);
        }
        CostMatrix::from_raw(self.n_rows, self.n_cols, data)
    }
}

/// Accumulated-cost matrix of an alignment, `n_rows x n_cols`, row-major.
///
/// Cell `(i, j)` is the minimal cumulative cost of aligning points `0..=i` of
/// the first sequence with points `0..=j` of the second. Cells outside a
/// Sakoe-Chiba band are `+inf`. The terminal cell is not normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Create a matrix from row-major data of length `n_rows * n_cols`.
    pub(crate) fn from_raw(n_rows: usize, n_cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n_rows * n_cols);
        Self {
            n_rows,
            n_cols,
            data,
        }
    }

    /// Return the number of rows (points in the first sequence).
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Return the number of columns (points in the second sequence).
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Return `(n_rows, n_cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Return the accumulated cost at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows` or `j >= n_cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n_rows, "row index {i} out of bounds for {} rows", self.n_rows);
        assert!(j < self.n_cols, "column index {j} out of bounds for {} columns", self.n_cols);
        self.data[i * self.n_cols + j]
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_cols;
        &self.data[start..start + self.n_cols]
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_cols)
    }

    /// Return the un-normalized cost of the full alignment, cell `(n_rows - 1, n_cols - 1)`.
    #[must_use]
    pub fn terminal(&self) -> f64 {
        self.data[self.data.len() - 1]
    }

    /// Return the row-major cell buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.n_rows && j < self.n_cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.n_cols + j]
    }
}
