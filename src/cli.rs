use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// k-nearest-neighbor classification and regression, plus a
/// maximum-likelihood line fit.
#[derive(Parser)]
#[command(
    name = "nearfit",
    version,
    about = "k-nearest-neighbor classification and regression"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Predict class labels by majority vote of the k nearest neighbors.
    Classify(ClassifyArgs),
    /// Predict numeric targets as the mean of the k nearest neighbors.
    Regress(RegressArgs),
    /// Fit a straight line to generated data by maximum likelihood.
    Mle(MleArgs),
}

/// Options shared by the neighbor-based subcommands.
#[derive(clap::Args)]
pub struct KnnArgs {
    /// Training CSV (overrides the config file).
    #[arg(long)]
    pub train: Option<PathBuf>,

    /// Test CSV with the same feature columns as the training CSV.
    #[arg(long)]
    pub test: Option<PathBuf>,

    /// Number of neighbors.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Distance metric: euclidean or legacy-sqrt-abs-sum.
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Disable parallel prediction.
    #[arg(long)]
    pub sequential: bool,

    /// Write predictions to this CSV file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub knn: KnnArgs,

    /// Name of the label column (defaults to the last column).
    #[arg(long)]
    pub target: Option<String>,
}

/// Arguments for the `regress` subcommand.
#[derive(clap::Args)]
pub struct RegressArgs {
    #[command(flatten)]
    pub knn: KnnArgs,

    /// Feature column names (repeatable).
    #[arg(short, long = "feature")]
    pub features: Vec<String>,

    /// Name of the target column.
    #[arg(long)]
    pub target: Option<String>,
}

/// Arguments for the `mle` subcommand.
#[derive(clap::Args)]
pub struct MleArgs {
    /// Number of generated points.
    #[arg(short, long)]
    pub n: Option<usize>,

    /// RNG seed.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
