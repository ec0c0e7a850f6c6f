//! Band constraint types for DTW computation.

use std::ops::Range;

/// Constraint on the DTW warping window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandConstraint {
    /// No constraint: every cell of the cost grid is computed.
    #[default]
    Unconstrained,

    /// Sakoe-Chiba band: cell (i,j) is valid only if |i - j| <= radius.
    ///
    /// The radius is widened to `|n_rows - n_cols|` when the sequences differ in
    /// length, so the terminal cell always stays reachable.
    SakoeChibaRadius(usize),
}

impl BandConstraint {
    /// Resolve the constraint for an `n_rows x n_cols` problem.
    ///
    /// Returns `None` for unconstrained DTW, otherwise the effective radius
    /// `max(radius, |n_rows - n_cols|)`.
    #[must_use]
    pub fn effective_radius(&self, n_rows: usize, n_cols: usize) -> Option<usize> {
        match self {
            Self::Unconstrained => None,
            Self::SakoeChibaRadius(r) => Some((*r).max(n_rows.abs_diff(n_cols))),
        }
    }

    /// Return the valid column range for a given row of an `n_rows x n_cols` cost grid.
    ///
    /// For unconstrained DTW, returns `0..n_cols`.
    /// For Sakoe-Chiba, returns the intersection of `[row - w, row + w]` with
    /// `[0, n_cols)`, where `w` is the [effective radius][Self::effective_radius].
    #[must_use]
    pub fn column_range(&self, row: usize, n_rows: usize, n_cols: usize) -> Range<usize> {
        match self.effective_radius(n_rows, n_cols) {
            None => 0..n_cols,
            Some(w) => {
                let start = row.saturating_sub(w);
                let end = row.saturating_add(w).saturating_add(1).min(n_cols);
                start..end.max(start)
            }
        }
    }

    /// Return true if cell `(row, col)` lies inside the band.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize, n_rows: usize, n_cols: usize) -> bool {
        self.column_range(row, n_rows, n_cols).contains(&col)
    }
}
