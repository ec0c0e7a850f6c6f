//! Warping path types for DTW alignment.

/// A single step in a DTW warping path, mapping index `a` in the first sequence
/// to index `b` in the second sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarpingStep {
    /// Index in the first sequence.
    pub a: usize,
    /// Index in the second sequence.
    pub b: usize,
}

/// An ordered sequence of warping steps from `(0, 0)` to `(n-1, m-1)`.
///
/// Consecutive steps advance by exactly one of `(1, 1)`, `(1, 0)`, `(0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarpingPath(Vec<WarpingStep>);

impl WarpingPath {
    /// Create a new warping path from a vector of steps.
    pub(crate) fn new(steps: Vec<WarpingStep>) -> Self {
        Self(steps)
    }

    /// Return the warping steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[WarpingStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split the path into its two coordinate sequences `(p, q)`.
    ///
    /// `p[k]` and `q[k]` are the matched indices of step `k` in the first and
    /// second sequence respectively. Both are non-decreasing.
    #[must_use]
    pub fn indices(&self) -> (Vec<usize>, Vec<usize>) {
        self.0.iter().map(|s| (s.a, s.b)).unzip()
    }

    /// Swap the roles of the two sequences.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self(self.0.iter().map(|s| WarpingStep { a: s.b, b: s.a }).collect())
    }
}

impl<'a> IntoIterator for &'a WarpingPath {
    type Item = &'a WarpingStep;
    type IntoIter = std::slice::Iter<'a, WarpingStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
