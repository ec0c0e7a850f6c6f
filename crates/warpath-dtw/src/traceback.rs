//! Backward reconstruction of the optimal warping path.

use tracing::{debug, instrument};

use crate::matrix::CostMatrix;
use crate::path::{WarpingPath, WarpingStep};

/// Reconstruct an optimal warping path from a trimmed accumulated-cost matrix.
///
/// Starts at the terminal cell and repeatedly moves to the cheapest of the
/// three causal predecessors, scanned in the order diagonal, up (`i - 1`),
/// left (`j - 1`); ties keep the first one seen. Once either index reaches 0
/// the only predecessor is the neighbor along that border, so the walk
/// follows the border to `(0, 0)`. The origin appears exactly once.
///
/// Runs in O(n_rows + n_cols).
#[must_use]
#[instrument(skip(cost), fields(shape = ?cost.shape()))]
pub fn traceback(cost: &CostMatrix) -> WarpingPath {
    let (n_rows, n_cols) = cost.shape();
    let mut i = n_rows - 1;
    let mut j = n_cols - 1;
    let mut steps = Vec::with_capacity(n_rows + n_cols - 1);
    steps.push(WarpingStep { a: i, b: j });

    while i > 0 && j > 0 {
        let diag = cost.get(i - 1, j - 1);
        let up = cost.get(i - 1, j);
        let left = cost.get(i, j - 1);

        if diag <= up && diag <= left {
            i -= 1;
            j -= 1;
        } else if up <= left {
            i -= 1;
        } else {
            j -= 1;
        }
        steps.push(WarpingStep { a: i, b: j });
    }

    while i > 0 {
        i -= 1;
        steps.push(WarpingStep { a: i, b: j });
    }
    while j > 0 {
        j -= 1;
        steps.push(WarpingStep { a: i, b: j });
    }

    steps.reverse();
    debug!(len = steps.len(), "warping path traced");
    WarpingPath::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> CostMatrix {
        let n_cols = rows[0].len();
        let data = rows.iter().flat_map(|r| r.iter().copied()).collect();
        CostMatrix::from_raw(rows.len(), n_cols, data)
    }

    fn pairs(path: &WarpingPath) -> Vec<(usize, usize)> {
        path.steps().iter().map(|s| (s.a, s.b)).collect()
    }

    #[test]
    fn single_cell() {
        let path = traceback(&matrix(&[&[0.0]]));
        assert_eq!(pairs(&path), vec![(0, 0)]);
    }

    #[test]
    fn diagonal_path_has_single_origin() {
        let path = traceback(&matrix(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 1.0], &[2.0, 1.0, 0.0]]));
        assert_eq!(pairs(&path), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn ties_prefer_diagonal_then_up() {
        // All predecessors equal: diagonal wins.
        let path = traceback(&matrix(&[&[1.0, 1.0], &[1.0, 5.0]]));
        assert_eq!(pairs(&path), vec![(0, 0), (1, 1)]);

        // Up and left tie below the diagonal: up wins.
        let path = traceback(&matrix(&[&[9.0, 2.0], &[2.0, 7.0]]));
        assert_eq!(pairs(&path), vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn walks_border_instead_of_jumping_to_origin() {
        // A tall single column: every step moves up by one.
        let path = traceback(&matrix(&[&[1.0], &[2.0], &[3.0], &[4.0]]));
        assert_eq!(pairs(&path), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);

        // Path reaches column 0 at row 2, then walks up the border.
        let path = traceback(&matrix(&[
            &[1.0, 9.0, 9.0],
            &[1.0, 9.0, 9.0],
            &[1.0, 9.0, 9.0],
            &[9.0, 1.0, 1.0],
        ]));
        assert_eq!(pairs(&path), vec![(0, 0), (1, 0), (2, 0), (3, 1), (3, 2)]);
    }

    #[test]
    fn skips_infinite_out_of_band_cells() {
        let inf = f64::INFINITY;
        let path = traceback(&matrix(&[&[1.0, inf, inf], &[inf, 2.0, inf], &[inf, inf, 3.0]]));
        assert_eq!(pairs(&path), vec![(0, 0), (1, 1), (2, 2)]);
    }
}
