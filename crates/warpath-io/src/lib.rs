//! File I/O, validation, and serialization for the warpath pipeline.

mod domain;
mod error;
mod reader;
mod writer;

pub use domain::{ExperimentName, SequenceData};
pub use error::IoError;
pub use reader::SequenceReader;
pub use writer::AlignmentWriter;
