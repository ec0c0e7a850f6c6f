//! Sequence types with validation guarantees.
//!
//! A sequence is `N` points of `M` dimensions stored row-major in a single
//! buffer. A flat list of scalars is treated as `N` points of one dimension.

use std::ops::Index;
use std::slice::ChunksExact;

use crate::error::DtwError;

/// Owned, validated sequence. Guaranteed non-empty, rectangular, and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    data: Vec<f64>,
    dims: usize,
}

impl Sequence {
    /// Create a one-dimensional sequence from a flat list of scalars.
    ///
    /// `N` scalars become `N` points of dimension 1.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `values` is empty |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn from_scalars(values: Vec<f64>) -> Result<Self, DtwError> {
        Self::from_flat(values, 1)
    }

    /// Create a sequence from a list of points.
    ///
    /// Every point must have the same length as the first one.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `points` is empty |
    /// | [`DtwError::Shape`] | A point is empty or its length differs from the first point |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn from_points(points: Vec<Vec<f64>>) -> Result<Self, DtwError> {
        let Some(first) = points.first() else {
            return Err(DtwError::EmptySequence);
        };
        let dims = first.len();
        if dims == 0 {
            return Err(DtwError::Shape {
                point: 0,
                expected: 1,
                got: 0,
            });
        }
        if let Some(point) = points.iter().position(|p| p.len() != dims) {
            return Err(DtwError::Shape {
                point,
                expected: dims,
                got: points[point].len(),
            });
        }
        let data: Vec<f64> = points.into_iter().flatten().collect();
        Self::from_flat(data, dims)
    }

    /// Create a sequence from row-major storage with `dims` values per point.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `data` is empty |
    /// | [`DtwError::Shape`] | `dims` is zero or does not divide `data.len()` |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn from_flat(data: Vec<f64>, dims: usize) -> Result<Self, DtwError> {
        if data.is_empty() {
            return Err(DtwError::EmptySequence);
        }
        if dims == 0 {
            return Err(DtwError::Shape {
                point: 0,
                expected: 1,
                got: 0,
            });
        }
        if data.len() % dims != 0 {
            return Err(DtwError::Shape {
                point: data.len() / dims,
                expected: dims,
                got: data.len() % dims,
            });
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(DtwError::NonFiniteValue {
                point: index / dims,
                dim: index % dims,
            });
        }
        Ok(Self { data, dims })
    }

    /// Borrow this sequence as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView {
            data: &self.data,
            dims: self.dims,
        }
    }

    /// Return the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.dims
    }

    /// Return true if the sequence has no points.
    ///
    /// Always `false` for sequences built through the validating constructors.
    /// Provided to satisfy the `len_without_is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of dimensions per point.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Return point `i` as a slice of length [`dims`][Self::dims].
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> &[f64] {
        self.as_view().point(i)
    }

    /// Consume and return the row-major buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl AsRef<[f64]> for Sequence {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl TryFrom<Vec<f64>> for Sequence {
    type Error = DtwError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_scalars(values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Sequence {
    type Error = DtwError;

    fn try_from(points: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

/// Borrowed view into a validated sequence.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    data: &'a [f64],
    dims: usize,
}

impl<'a> SequenceView<'a> {
    /// Create a view over row-major storage, validating it like [`Sequence::from_flat`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySequence`] | `data` is empty |
    /// | [`DtwError::Shape`] | `dims` is zero or does not divide `data.len()` |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(data: &'a [f64], dims: usize) -> Result<Self, DtwError> {
        if data.is_empty() {
            return Err(DtwError::EmptySequence);
        }
        if dims == 0 || data.len() % dims != 0 {
            return Err(DtwError::Shape {
                point: data.len() / dims.max(1),
                expected: dims.max(1),
                got: if dims == 0 { 0 } else { data.len() % dims },
            });
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(DtwError::NonFiniteValue {
                point: index / dims,
                dim: index % dims,
            });
        }
        Ok(Self { data, dims })
    }

    /// Return the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() / self.dims
    }

    /// Return true if the view has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the number of dimensions per point.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Return point `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> &'a [f64] {
        let start = i * self.dims;
        &self.data[start..start + self.dims]
    }

    /// Iterate over the points in order.
    pub fn points(&self) -> ChunksExact<'a, f64> {
        self.data.chunks_exact(self.dims)
    }

    /// Return the underlying row-major slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }
}

impl Index<usize> for SequenceView<'_> {
    type Output = [f64];

    fn index(&self, index: usize) -> &Self::Output {
        self.point(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_become_single_dimension_points() {
        let s = Sequence::from_scalars(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.dims(), 1);
        assert_eq!(s.point(1), &[2.0]);
    }

    #[test]
    fn points_are_stored_row_major() {
        let s = Sequence::from_points(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.dims(), 2);
        assert_eq!(s.as_ref(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(s.point(2), &[5.0, 6.0]);
    }

    #[test]
    fn rejects_empty_scalars() {
        let result = Sequence::from_scalars(vec![]);
        assert!(matches!(result, Err(DtwError::EmptySequence)));
    }

    #[test]
    fn rejects_empty_points() {
        let result = Sequence::from_points(vec![]);
        assert!(matches!(result, Err(DtwError::EmptySequence)));
    }

    #[test]
    fn rejects_zero_dimensional_points() {
        let result = Sequence::from_points(vec![vec![], vec![]]);
        assert!(matches!(result, Err(DtwError::Shape { point: 0, .. })));
    }

    #[test]
    fn rejects_ragged_points() {
        let result = Sequence::from_points(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
        assert_eq!(
            result,
            Err(DtwError::Shape {
                point: 2,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn rejects_flat_buffer_not_divisible_by_dims() {
        let result = Sequence::from_flat(vec![1.0, 2.0, 3.0], 2);
        assert!(matches!(result, Err(DtwError::Shape { expected: 2, got: 1, .. })));
    }

    #[test]
    fn rejects_nan_with_position() {
        let result = Sequence::from_points(vec![vec![1.0, 2.0], vec![3.0, f64::NAN]]);
        assert_eq!(result, Err(DtwError::NonFiniteValue { point: 1, dim: 1 }));
    }

    #[test]
    fn rejects_infinity() {
        let result = Sequence::from_scalars(vec![1.0, f64::NEG_INFINITY]);
        assert_eq!(result, Err(DtwError::NonFiniteValue { point: 1, dim: 0 }));
    }

    #[test]
    fn try_from_both_shapes() {
        let a: Result<Sequence, _> = vec![1.0, 2.0].try_into();
        let b: Result<Sequence, _> = vec![vec![1.0], vec![2.0]].try_into();
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn view_iterates_points() {
        let s = Sequence::from_points(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let view = s.as_view();
        let points: Vec<&[f64]> = view.points().collect();
        assert_eq!(points, vec![&[1.0, 2.0][..], &[3.0, 4.0][..]]);
        assert_eq!(&view[1], &[3.0, 4.0]);
    }

    #[test]
    fn view_new_validates() {
        assert!(matches!(SequenceView::new(&[], 1), Err(DtwError::EmptySequence)));
        assert!(matches!(SequenceView::new(&[1.0, 2.0, 3.0], 0), Err(DtwError::Shape { .. })));
        assert!(matches!(
            SequenceView::new(&[1.0, f64::NAN], 1),
            Err(DtwError::NonFiniteValue { point: 1, dim: 0 })
        ));
        let view = SequenceView::new(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(view.len(), 2);
    }
}
