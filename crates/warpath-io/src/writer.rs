//! JSON writer for alignment results.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};
use warpath_dtw::Alignment;

use crate::IoError;
use crate::domain::ExperimentName;

/// Writes alignment results to JSON files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{experiment}_alignment.json`.
pub struct AlignmentWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl AlignmentWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Write an alignment to `{experiment}_alignment.json` and return the file path.
    ///
    /// Cells outside a Sakoe-Chiba band are written as `null`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`IoError::Serialize`] | The artifact cannot be encoded |
    /// | [`IoError::WriteFile`] | The file cannot be written |
    #[instrument(skip_all)]
    pub fn write(&self, alignment: &Alignment) -> Result<PathBuf, IoError> {
        let path = self
            .output_dir
            .join(format!("{}_alignment.json", self.experiment.as_str()));

        let (p, q) = alignment.path_indices();
        let cost_matrix: Vec<Vec<Option<f64>>> = alignment
            .cost
            .rows()
            .map(|row| row.iter().map(|&c| c.is_finite().then_some(c)).collect())
            .collect();

        let artifact = AlignmentArtifact {
            experiment: self.experiment.as_str(),
            distance: alignment.distance.value(),
            total_cost: alignment.total_cost(),
            shape: alignment.cost.shape(),
            path: PathEntry { p, q },
            cost_matrix,
        };

        let json = serde_json::to_string_pretty(&artifact).map_err(|e| IoError::Serialize {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, &json).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "alignment written");
        Ok(path)
    }
}

#[derive(Serialize)]
struct AlignmentArtifact<'a> {
    experiment: &'a str,
    distance: f64,
    total_cost: f64,
    shape: (usize, usize),
    path: PathEntry,
    cost_matrix: Vec<Vec<Option<f64>>>,
}

#[derive(Serialize)]
struct PathEntry {
    p: Vec<usize>,
    q: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use warpath_dtw::{Dtw, Sequence};

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn write_alignment_json_structure() {
        let dir = TempDir::new().unwrap();
        let experiment = ExperimentName::new("test_run".into()).unwrap();
        let writer = AlignmentWriter::new(dir.path(), experiment).unwrap();

        let x = Sequence::from_scalars(vec![1.0, 2.0, 3.0]).unwrap();
        let y = Sequence::from_scalars(vec![2.0, 3.0, 4.0]).unwrap();
        let alignment = Dtw::new().align(x.as_view(), y.as_view()).unwrap();

        let path = writer.write(&alignment).unwrap();
        assert_eq!(path, dir.path().join("test_run_alignment.json"));

        let content = read_json(&path);
        assert_eq!(content["experiment"], "test_run");
        assert_eq!(content["total_cost"], 2.0);
        assert!((content["distance"].as_f64().unwrap() - 2.0 / 6.0).abs() < 1e-12);
        assert_eq!(content["shape"], serde_json::json!([3, 3]));
        assert_eq!(content["path"]["p"], serde_json::json!([0, 1, 2, 2]));
        assert_eq!(content["path"]["q"], serde_json::json!([0, 0, 1, 2]));
        assert_eq!(
            content["cost_matrix"],
            serde_json::json!([[1.0, 3.0, 6.0], [1.0, 2.0, 4.0], [2.0, 1.0, 2.0]])
        );
    }

    #[test]
    fn out_of_band_cells_are_null() {
        let dir = TempDir::new().unwrap();
        let writer = AlignmentWriter::new(dir.path(), ExperimentName::new("band".into()).unwrap()).unwrap();

        let x = Sequence::from_scalars(vec![0.0, 1.0, 2.0]).unwrap();
        let alignment = Dtw::with_sakoe_chiba(0).align(x.as_view(), x.as_view()).unwrap();
        let content = read_json(&writer.write(&alignment).unwrap());

        let rows = content["cost_matrix"].as_array().unwrap();
        for (i, row) in rows.iter().enumerate() {
            for (j, cell) in row.as_array().unwrap().iter().enumerate() {
                assert_eq!(cell.is_null(), i != j, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn creates_nested_output_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = AlignmentWriter::new(&nested, ExperimentName::new("nested".into()).unwrap());
        assert!(writer.is_ok());
        assert!(nested.is_dir());
    }
}
