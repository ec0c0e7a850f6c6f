//! Result of a full DTW alignment.

use crate::distance::DtwDistance;
use crate::matrix::CostMatrix;
use crate::path::WarpingPath;

/// Distance, accumulated-cost matrix, and warping path of one alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Terminal accumulated cost divided by the combined point count.
    pub distance: DtwDistance,
    /// Accumulated-cost matrix, one cell per point pair, sentinel border removed.
    pub cost: CostMatrix,
    /// Optimal warping path from `(0, 0)` to `(n_rows - 1, n_cols - 1)`.
    pub path: WarpingPath,
}

impl Alignment {
    /// Return the un-normalized terminal accumulated cost.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.cost.terminal()
    }

    /// Return the `(p, q)` index sequences of the warping path.
    #[must_use]
    pub fn path_indices(&self) -> (Vec<usize>, Vec<usize>) {
        self.path.indices()
    }
}
