//! Dynamic Time Warping alignment of multi-dimensional sequences.
//!
//! Pure math library — zero I/O. Builds the accumulated-cost matrix between
//! two sequences with an optional Sakoe-Chiba band, traces back the optimal
//! warping path, and reports a distance normalized by the combined length.
//!
//! ```
//! use warpath_dtw::{Dtw, Sequence};
//!
//! let x = Sequence::from_scalars(vec![1.0, 2.0, 3.0]).unwrap();
//! let y = Sequence::from_scalars(vec![2.0, 3.0, 4.0]).unwrap();
//! let alignment = Dtw::new().align(x.as_view(), y.as_view()).unwrap();
//!
//! assert_eq!(alignment.total_cost(), 2.0);
//! assert_eq!(alignment.path_indices(), (vec![0, 1, 2, 2], vec![0, 0, 1, 2]));
//! ```

mod alignment;
mod constraint;
mod distance;
mod dtw;
mod error;
mod matrix;
pub mod metric;
mod path;
mod preprocess;
mod sequence;
mod traceback;

pub use alignment::Alignment;
pub use constraint::BandConstraint;
pub use distance::DtwDistance;
pub use dtw::Dtw;
pub use error::{DtwError, PreprocessError};
pub use matrix::CostMatrix;
pub use metric::{Chebyshev, Euclidean, Manhattan, PointDistance, SquaredEuclidean};
pub use path::{WarpingPath, WarpingStep};
pub use preprocess::{derivative, z_normalize};
pub use sequence::{Sequence, SequenceView};
pub use traceback::traceback;
