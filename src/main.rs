use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;

use warpath_dtw::{
    Alignment, BandConstraint, Chebyshev, Dtw, Euclidean, Manhattan, Sequence, SquaredEuclidean,
    derivative, z_normalize,
};
use warpath_io::{AlignmentWriter, ExperimentName, SequenceReader};

#[derive(Parser)]
#[command(name = "warpath")]
#[command(about = "Dynamic Time Warping alignment of multi-dimensional sequences")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Point metric used as the local cost of each cell.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum MetricArg {
    /// Sum of absolute differences (L1)
    Manhattan,
    /// Euclidean distance (L2)
    Euclidean,
    /// Squared Euclidean distance
    Sqeuclidean,
    /// Largest absolute difference (L-infinity)
    Chebyshev,
}

/// Shared alignment parameters.
#[derive(Args, Debug, Clone)]
struct AlignArgs {
    /// Sakoe-Chiba warping window radius (0 = unconstrained)
    #[arg(long, default_value_t = 0)]
    window: usize,

    /// Point metric for local costs
    #[arg(long, value_enum, default_value_t = MetricArg::Manhattan)]
    metric: MetricArg,

    /// Z-normalize each dimension before alignment
    #[arg(long, default_value_t = false)]
    normalize: bool,

    /// Align first derivatives (Keogh-Pazzani) instead of raw values
    #[arg(long, default_value_t = false)]
    derivative: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Align two sequences and report their DTW distance and warping path
    Align {
        /// CSV file with the first sequence (header row, one point per row)
        #[arg(long)]
        x: PathBuf,

        /// CSV file with the second sequence
        #[arg(long)]
        y: PathBuf,

        /// Experiment name for the full JSON artifact (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: Option<String>,

        /// Output directory for the JSON artifact
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        params: AlignArgs,
    },

    /// Print only the normalized DTW distance (no cost matrix or path)
    Distance {
        /// CSV file with the first sequence
        #[arg(long)]
        x: PathBuf,

        /// CSV file with the second sequence
        #[arg(long)]
        y: PathBuf,

        #[command(flatten)]
        params: AlignArgs,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct AlignOutput {
    distance: f64,
    total_cost: f64,
    n_x: usize,
    n_y: usize,
    dims: usize,
    window: Option<usize>,
    metric: MetricArg,
    path_len: usize,
    artifact: Option<PathBuf>,
}

#[derive(Serialize)]
struct DistanceOutput {
    distance: f64,
    n_x: usize,
    n_y: usize,
    window: Option<usize>,
    metric: MetricArg,
}

fn build_constraint(window: usize) -> BandConstraint {
    if window == 0 {
        BandConstraint::Unconstrained
    } else {
        BandConstraint::SakoeChibaRadius(window)
    }
}

fn window_of(constraint: BandConstraint) -> Option<usize> {
    match constraint {
        BandConstraint::Unconstrained => None,
        BandConstraint::SakoeChibaRadius(r) => Some(r),
    }
}

fn load_sequence(path: &Path, params: &AlignArgs) -> Result<Sequence> {
    let data = SequenceReader::new(path)
        .read()
        .with_context(|| format!("failed to read sequence from {}", path.display()))?;
    let mut sequence = data.sequence;
    if params.normalize {
        sequence = z_normalize(&sequence).context("z-normalization failed")?;
        info!(path = %path.display(), "z-normalized sequence");
    }
    if params.derivative {
        sequence = derivative(&sequence).context("derivative computation failed")?;
        info!(path = %path.display(), n = sequence.len(), "computed derivative sequence");
    }
    Ok(sequence)
}

fn run_align(x: &Sequence, y: &Sequence, params: &AlignArgs) -> Result<Alignment> {
    let dtw = Dtw::from_constraint(build_constraint(params.window));
    let alignment = match params.metric {
        MetricArg::Manhattan => dtw.with_metric(Manhattan).align(x.as_view(), y.as_view()),
        MetricArg::Euclidean => dtw.with_metric(Euclidean).align(x.as_view(), y.as_view()),
        MetricArg::Sqeuclidean => dtw.with_metric(SquaredEuclidean).align(x.as_view(), y.as_view()),
        MetricArg::Chebyshev => dtw.with_metric(Chebyshev).align(x.as_view(), y.as_view()),
    };
    alignment.context("DTW alignment failed")
}

fn run_distance(x: &Sequence, y: &Sequence, params: &AlignArgs) -> Result<f64> {
    let dtw = Dtw::from_constraint(build_constraint(params.window));
    let distance = match params.metric {
        MetricArg::Manhattan => dtw.with_metric(Manhattan).distance(x.as_view(), y.as_view()),
        MetricArg::Euclidean => dtw.with_metric(Euclidean).distance(x.as_view(), y.as_view()),
        MetricArg::Sqeuclidean => dtw.with_metric(SquaredEuclidean).distance(x.as_view(), y.as_view()),
        MetricArg::Chebyshev => dtw.with_metric(Chebyshev).distance(x.as_view(), y.as_view()),
    };
    Ok(distance.context("DTW distance failed")?.value())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{json}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Align {
            x,
            y,
            experiment,
            output_dir,
            params,
        } => {
            // Validate the experiment name before doing any work.
            let experiment = experiment
                .map(ExperimentName::new)
                .transpose()
                .context("invalid experiment name")?;

            let xs = load_sequence(&x, &params)?;
            let ys = load_sequence(&y, &params)?;
            let alignment = run_align(&xs, &ys, &params)?;
            info!(
                distance = alignment.distance.value(),
                path_len = alignment.path.len(),
                "alignment complete"
            );

            let artifact = match experiment {
                Some(experiment) => {
                    let writer = AlignmentWriter::new(&output_dir, experiment)
                        .context("failed to prepare output directory")?;
                    Some(writer.write(&alignment).context("failed to write alignment")?)
                }
                None => None,
            };

            print_json(&AlignOutput {
                distance: alignment.distance.value(),
                total_cost: alignment.total_cost(),
                n_x: xs.len(),
                n_y: ys.len(),
                dims: xs.dims(),
                window: window_of(build_constraint(params.window)),
                metric: params.metric,
                path_len: alignment.path.len(),
                artifact,
            })?;
        }

        Command::Distance { x, y, params } => {
            let xs = load_sequence(&x, &params)?;
            let ys = load_sequence(&y, &params)?;
            let distance = run_distance(&xs, &ys, &params)?;
            info!(distance, "distance computed");

            print_json(&DistanceOutput {
                distance,
                n_x: xs.len(),
                n_y: ys.len(),
                window: window_of(build_constraint(params.window)),
                metric: params.metric,
            })?;
        }
    }

    Ok(())
}
