//! Sequence preprocessing: per-dimension z-normalization and derivative transform.

use crate::error::PreprocessError;
use crate::sequence::Sequence;

/// Z-normalize every dimension of a sequence to zero mean and unit variance.
///
/// Each dimension is normalized independently over all points, using the
/// population standard deviation (divides by n, not n-1).
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PreprocessError::ConstantDimension`] | A dimension has the same value at every point |
/// | [`PreprocessError::Sequence`] | Normalization overflowed to a non-finite value |
#[must_use = "returns a new normalized sequence; the original is unchanged"]
pub fn z_normalize(sequence: &Sequence) -> Result<Sequence, PreprocessError> {
    let view = sequence.as_view();
    let dims = view.dims();
    let n = view.len() as f64;

    let mut mean = vec![0.0; dims];
    for point in view.points() {
        for (m, &v) in mean.iter_mut().zip(point) {
            *m += v;
        }
    }
    mean.iter_mut().for_each(|m| *m /= n);

    let mut std = vec![0.0; dims];
    for point in view.points() {
        for ((s, &v), &m) in std.iter_mut().zip(point).zip(&mean) {
            *s += (v - m).powi(2);
        }
    }
    std.iter_mut().for_each(|s| *s = (*s / n).sqrt());

    if let Some(dim) = std.iter().position(|&s| s == 0.0) {
        return Err(PreprocessError::ConstantDimension {
            dim,
            n: view.len(),
            value: view.point(0)[dim],
        });
    }

    let normalized: Vec<f64> = view
        .points()
        .flat_map(|point| {
            point
                .iter()
                .zip(&mean)
                .zip(&std)
                .map(|((&v, &m), &s)| (v - m) / s)
        })
        .collect();
    Ok(Sequence::from_flat(normalized, dims)?)
}

/// Compute the Keogh-Pazzani first derivative of every dimension.
///
/// For interior points (1..n-1): `d[i] = ((x[i] - x[i-1]) + (x[i+1] - x[i-1]) / 2) / 2`
/// Output length is `n - 2` (drops first and last points); dimensionality is kept.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`PreprocessError::TooShort`] | Sequence has fewer than 3 points |
#[must_use = "returns a new derivative sequence; the original is unchanged"]
pub fn derivative(sequence: &Sequence) -> Result<Sequence, PreprocessError> {
    let view = sequence.as_view();
    let n = view.len();

    if n < 3 {
        return Err(PreprocessError::TooShort { len: n });
    }

    let mut deriv = Vec::with_capacity((n - 2) * view.dims());
    for i in 1..n - 1 {
        let (before, here, after) = (view.point(i - 1), view.point(i), view.point(i + 1));
        for d in 0..view.dims() {
            deriv.push(((here[d] - before[d]) + (after[d] - before[d]) / 2.0) / 2.0);
        }
    }

    Ok(Sequence::from_flat(deriv, view.dims())?)
}
