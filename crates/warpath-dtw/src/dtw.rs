//! DTW alignment and distance computation.

use tracing::{debug, instrument};

use crate::alignment::Alignment;
use crate::constraint::BandConstraint;
use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::matrix::CostGrid;
use crate::metric::{Manhattan, PointDistance};
use crate::sequence::SequenceView;
use crate::traceback::traceback;

/// Immutable DTW configuration: a band constraint and a point metric.
///
/// Thread-safe and copyable whenever the metric is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dtw<M = Manhattan> {
    constraint: BandConstraint,
    metric: M,
}

impl Dtw {
    /// Create an unconstrained DTW calculator with the Manhattan (L1) metric.
    #[must_use]
    pub fn new() -> Self {
        Self::from_constraint(BandConstraint::Unconstrained)
    }

    /// Create a DTW calculator with a Sakoe-Chiba band of the given radius.
    ///
    /// The radius is widened to the length difference of the two sequences
    /// at alignment time. A radius of 0 on equal-length sequences restricts
    /// the alignment to the main diagonal.
    #[must_use]
    pub fn with_sakoe_chiba(radius: usize) -> Self {
        Self::from_constraint(BandConstraint::SakoeChibaRadius(radius))
    }

    /// Create a DTW calculator from an existing [`BandConstraint`].
    #[must_use]
    pub fn from_constraint(constraint: BandConstraint) -> Self {
        Self {
            constraint,
            metric: Manhattan,
        }
    }
}

impl Default for Dtw {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PointDistance> Dtw<M> {
    /// Replace the point metric.
    #[must_use]
    pub fn with_metric<N: PointDistance>(self, metric: N) -> Dtw<N> {
        Dtw {
            constraint: self.constraint,
            metric,
        }
    }

    /// Replace the band constraint.
    #[must_use]
    pub fn with_constraint(mut self, constraint: BandConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Return the band constraint configuration.
    #[must_use]
    pub fn constraint(&self) -> BandConstraint {
        self.constraint
    }

    /// Return the point metric.
    #[must_use]
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Align two sequences: normalized distance, accumulated-cost matrix, and warping path.
    ///
    /// Fills an `(n+1) x (m+1)` grid with a sentinel border in one pass. Each
    /// visited cell gets its local cost plus the minimum of its three causal
    /// neighbors; cells outside the band stay `+inf`. The border is then
    /// dropped and the path is traced back from the terminal cell.
    ///
    /// Runs in O(n * m) time and space unconstrained, O(n * w) time with a band.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::DimensionMismatch`] | The metric cannot compare a pair of points |
    /// | [`DtwError::InvalidCost`] | The metric returned a negative or NaN cost |
    /// | any other | Propagated unchanged from a custom metric |
    #[instrument(skip(self, x, y), fields(n_rows = x.len(), n_cols = y.len(), constraint = ?self.constraint))]
    pub fn align(&self, x: SequenceView<'_>, y: SequenceView<'_>) -> Result<Alignment, DtwError> {
        let n = x.len();
        let m = y.len();
        let mut grid = CostGrid::new(n, m);

        for i in 0..n {
            let xi = x.point(i);
            for j in self.constraint.column_range(i, n, m) {
                let local = self.local_cost(xi, y.point(j), i, j)?;
                grid.accumulate(i, j, local);
            }
        }

        let cost = grid.trim();
        let distance = DtwDistance::normalized(cost.terminal(), n, m);
        debug!(total_cost = cost.terminal(), distance = distance.value(), "cost matrix accumulated");

        let path = traceback(&cost);
        Ok(Alignment {
            distance,
            cost,
            path,
        })
    }

    /// Compute only the normalized DTW distance between two sequences.
    ///
    /// Uses a rolling two-row buffer instead of the full grid: O(m) memory,
    /// same time as [`align`][Dtw::align], and the same value as
    /// `align(x, y)?.distance`.
    ///
    /// # Errors
    ///
    /// Same as [`align`][Dtw::align].
    #[instrument(skip(self, x, y), fields(n_rows = x.len(), n_cols = y.len()))]
    pub fn distance(&self, x: SequenceView<'_>, y: SequenceView<'_>) -> Result<DtwDistance, DtwError> {
        let n = x.len();
        let m = y.len();

        // Slot 0 is the sentinel column; slot j + 1 holds column j.
        let mut prev = vec![f64::INFINITY; m + 1];
        let mut curr = vec![f64::INFINITY; m + 1];
        prev[0] = 0.0;

        for i in 0..n {
            curr.fill(f64::INFINITY);
            let xi = x.point(i);
            for j in self.constraint.column_range(i, n, m) {
                let local = self.local_cost(xi, y.point(j), i, j)?;
                curr[j + 1] = local + prev[j].min(prev[j + 1]).min(curr[j]);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        Ok(DtwDistance::normalized(prev[m], n, m))
    }

    #[inline]
    fn local_cost(&self, a: &[f64], b: &[f64], row: usize, col: usize) -> Result<f64, DtwError> {
        let value = self.metric.distance(a, b)?;
        if value.is_nan() || value < 0.0 {
            return Err(DtwError::InvalidCost { row, col, value });
        }
        Ok(value)
    }
}
