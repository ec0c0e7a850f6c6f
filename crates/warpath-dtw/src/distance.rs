//! Normalized DTW distance newtype.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative DTW distance, normalized by the combined point count.
///
/// Equal to the terminal accumulated cost divided by `n_rows + n_cols`, which
/// keeps scores comparable across sequence-length pairs.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwDistance(f64);

impl DtwDistance {
    /// Normalize a terminal accumulated cost for an `n_rows x n_cols` alignment.
    pub(crate) fn normalized(terminal: f64, n_rows: usize, n_cols: usize) -> Self {
        Self(terminal / (n_rows + n_cols) as f64)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let d = DtwDistance(1.234567);
        assert_eq!(format!("{d}"), "1.234567");
    }

    #[test]
    fn normalizes_by_combined_length() {
        let d = DtwDistance::normalized(3.0, 3, 3);
        assert_eq!(d.value(), 0.5);
        let d = DtwDistance::normalized(0.0, 1, 1);
        assert_eq!(d.value(), 0.0);
    }

    #[test]
    fn total_cmp_ordering() {
        let a = DtwDistance(1.0);
        let b = DtwDistance(2.0);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);
    }
}
