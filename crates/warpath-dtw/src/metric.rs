//! Point metrics used as the local cost of a DTW cell.

use crate::error::DtwError;

/// Local cost between two points of the aligned sequences.
///
/// Implementations must return a non-negative value. The DTW kernel never
/// checks dimensionality itself; a metric that cannot compare the two points
/// reports [`DtwError::DimensionMismatch`] and the alignment fails with it.
pub trait PointDistance {
    /// Compute the cost of matching point `a` with point `b`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; built-in metrics return
    /// [`DtwError::DimensionMismatch`] when `a.len() != b.len()`.
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError>;
}

impl<M: PointDistance + ?Sized> PointDistance for &M {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        (**self).distance(a, b)
    }
}

#[inline]
fn check_dims(a: &[f64], b: &[f64]) -> Result<(), DtwError> {
    if a.len() != b.len() {
        return Err(DtwError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Manhattan / L1 distance: the sum of absolute coordinate differences.
///
/// The default metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl PointDistance for Manhattan {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum())
    }
}

/// Euclidean / L2 distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl PointDistance for Euclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        SquaredEuclidean.distance(a, b).map(f64::sqrt)
    }
}

/// Squared Euclidean distance. Cheaper than [`Euclidean`], same ordering per cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredEuclidean;

impl PointDistance for SquaredEuclidean {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum())
    }
}

/// Chebyshev / L-infinity distance: the largest absolute coordinate difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl PointDistance for Chebyshev {
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        check_dims(a, b)?;
        Ok(a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max))
    }
}

/// A caller-supplied metric wrapping a closure. Build with [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnDistance<F>(F);

impl<F> std::fmt::Debug for FnDistance<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnDistance")
    }
}

impl<F> PointDistance for FnDistance<F>
where
    F: Fn(&[f64], &[f64]) -> Result<f64, DtwError>,
{
    #[inline]
    fn distance(&self, a: &[f64], b: &[f64]) -> Result<f64, DtwError> {
        (self.0)(a, b)
    }
}

/// Wrap a closure as a [`PointDistance`].
///
/// ```
/// use warpath_dtw::{metric, Dtw, Sequence};
///
/// let hinge = metric::from_fn(|a: &[f64], b: &[f64]| Ok((a[0] - b[0]).max(0.0)));
/// let x = Sequence::from_scalars(vec![1.0, 2.0]).unwrap();
/// let y = Sequence::from_scalars(vec![0.0, 3.0]).unwrap();
/// let alignment = Dtw::new().with_metric(hinge).align(x.as_view(), y.as_view()).unwrap();
/// assert!(alignment.distance.value() >= 0.0);
/// ```
pub fn from_fn<F>(f: F) -> FnDistance<F>
where
    F: Fn(&[f64], &[f64]) -> Result<f64, DtwError>,
{
    FnDistance(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_absolute_differences() {
        assert_eq!(Manhattan.distance(&[0.0, 0.0], &[1.0, -2.0]), Ok(3.0));
        assert_eq!(Manhattan.distance(&[4.0], &[1.5]), Ok(2.5));
    }

    #[test]
    fn euclidean_and_squared() {
        assert_eq!(SquaredEuclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), Ok(25.0));
        assert_eq!(Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]), Ok(5.0));
    }

    #[test]
    fn chebyshev_takes_largest_difference() {
        assert_eq!(Chebyshev.distance(&[0.0, 0.0, 0.0], &[1.0, -7.0, 3.0]), Ok(7.0));
    }

    #[test]
    fn builtins_report_dimension_mismatch() {
        let expected = Err(DtwError::DimensionMismatch { left: 2, right: 3 });
        let (a, b) = ([1.0, 2.0], [1.0, 2.0, 3.0]);
        assert_eq!(Manhattan.distance(&a, &b), expected);
        assert_eq!(Euclidean.distance(&a, &b), expected);
        assert_eq!(SquaredEuclidean.distance(&a, &b), expected);
        assert_eq!(Chebyshev.distance(&a, &b), expected);
    }

    #[test]
    fn closure_metric_is_called() {
        let m = from_fn(|a: &[f64], b: &[f64]| Ok(a.len() as f64 + b.len() as f64));
        assert_eq!(m.distance(&[0.0], &[0.0, 0.0]), Ok(3.0));
    }

    #[test]
    fn reference_forwards() {
        let m = &Manhattan;
        assert_eq!(m.distance(&[1.0], &[3.0]), Ok(2.0));
    }
}
