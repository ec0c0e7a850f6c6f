//! Error types for sequence construction, DTW alignment, and preprocessing.

/// Errors from sequence validation and DTW alignment.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DtwError {
    /// Returned when a sequence has no points.
    #[error("sequence must be non-empty")]
    EmptySequence,

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at point {point}, dimension {dim}")]
    NonFiniteValue {
        /// Index of the offending point.
        point: usize,
        /// Dimension within that point.
        dim: usize,
    },

    /// Returned when points cannot be arranged into a rectangular N x M shape.
    #[error("point {point} has {got} dimensions, expected {expected}")]
    Shape {
        /// Index of the first point that breaks the shape.
        point: usize,
        /// Dimensionality established by the sequence.
        expected: usize,
        /// Dimensionality (or trailing length) actually found.
        got: usize,
    },

    /// Returned by a point metric when the two points have different lengths.
    #[error("cannot compare a {left}-dimensional point with a {right}-dimensional point")]
    DimensionMismatch {
        /// Dimensionality of the point from the first sequence.
        left: usize,
        /// Dimensionality of the point from the second sequence.
        right: usize,
    },

    /// Returned when a point metric yields a negative or NaN cost.
    #[error("local cost at ({row}, {col}) is {value}, expected a non-negative number")]
    InvalidCost {
        /// Point index in the first sequence.
        row: usize,
        /// Point index in the second sequence.
        col: usize,
        /// The offending cost.
        value: f64,
    },
}

/// Errors from sequence preprocessing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreprocessError {
    /// Returned when a dimension has zero variance and cannot be z-normalized.
    #[error("dimension {dim} is constant ({value}) across {n} points")]
    ConstantDimension {
        /// The constant dimension.
        dim: usize,
        /// Number of points in the sequence.
        n: usize,
        /// The constant value.
        value: f64,
    },

    /// Returned when a sequence is too short for the derivative transform.
    #[error("derivative needs at least 3 points, got {len}")]
    TooShort {
        /// Number of points in the sequence.
        len: usize,
    },

    /// Wraps a validation error on the transformed sequence.
    #[error("preprocessed sequence is invalid: {0}")]
    Sequence(#[from] DtwError),
}
