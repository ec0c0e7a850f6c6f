//! CSV sequence reader with full input validation.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};
use warpath_dtw::Sequence;

use crate::IoError;
use crate::domain::SequenceData;

/// Reads one sequence from a CSV file.
///
/// Expected CSV format:
/// - Header row required, one column per dimension: `x,y,z`
/// - One row per point, in sequence order
/// - All rows must have the same number of columns as the header
///
/// A single-column file yields a one-dimensional sequence.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptySequence`] | Zero data rows after header |
/// | [`IoError::InconsistentRowLength`] | Row has different column count than header |
/// | [`IoError::NonFiniteValue`] | Cell is NaN, Inf, or unparseable float |
/// | [`IoError::InvalidSequence`] | Header has no columns |
pub struct SequenceReader {
    path: PathBuf,
}

impl SequenceReader {
    /// Create a new reader for the given CSV file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the CSV file, returning its [`SequenceData`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<SequenceData, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) allows rows with varying column counts so that our own
        // InconsistentRowLength check fires instead of a low-level CsvParse error.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let header = rdr.headers().map_err(|e| self.parse_error(e))?;
        let columns: Vec<String> = header.iter().map(str::to_string).collect();
        let dims = columns.len();
        debug!(dims, "read CSV header");

        let mut values = Vec::new();
        let mut n_points = 0usize;

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| self.parse_error(e))?;

            if record.len() != dims {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: dims,
                    got: record.len(),
                });
            }

            for (col_index, raw) in record.iter().enumerate() {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index,
                        raw: raw.to_string(),
                    })?;
                values.push(value);
            }
            n_points += 1;
        }

        if n_points == 0 {
            return Err(IoError::EmptySequence {
                path: self.path.clone(),
            });
        }

        let sequence = Sequence::from_flat(values, dims).map_err(|e| IoError::InvalidSequence {
            path: self.path.clone(),
            source: e,
        })?;

        info!(n_points, dims, "sequence loaded");
        Ok(SequenceData { columns, sequence })
    }

    fn parse_error(&self, e: csv::Error) -> IoError {
        IoError::CsvParse {
            path: self.path.clone(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        }
    }
}
