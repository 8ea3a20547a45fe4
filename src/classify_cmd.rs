//! Classify command: majority-vote labels for query points.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use nearfit_io::{TableSpec, read_table, write_column};
use nearfit_knn::{Features, classify};

use crate::cli::ClassifyArgs;
use crate::config::NearfitConfig;
use crate::convert;

/// Run the classification pipeline.
///
/// Queries come from `--test` (or `[classify].test`) when given, otherwise
/// from `[classify].queries`.
pub fn run(args: ClassifyArgs, config: &NearfitConfig) -> Result<()> {
    let _cmd = info_span!("classify").entered();
    let cfg = &config.classify;

    let train_path = args
        .knn
        .train
        .as_ref()
        .or(cfg.train.as_ref())
        .ok_or_else(|| anyhow!("no training data: set [classify].train in config or use --train"))?;
    let knn_cfg = convert::build_knn_config_with_args(&config.knn, &args.knn, cfg.k)?;

    let mut spec = TableSpec::default();
    if let Some(ref features) = cfg.features {
        spec = spec.with_features(features.iter().cloned());
    }
    if let Some(target) = args.target.as_ref().or(cfg.target.as_ref()) {
        spec = spec.with_target(target.clone());
    }

    info!(path = %train_path.display(), "reading training data");
    let train = read_table(train_path, &spec)
        .with_context(|| format!("failed to read training CSV: {}", train_path.display()))?;
    let labels = train
        .class_labels()
        .context("training labels must be integers")?;
    info!(
        n_rows = train.n_rows(),
        n_vars = train.n_vars(),
        "training data loaded"
    );

    let queries = match args.knn.test.as_ref().or(cfg.test.as_ref()) {
        Some(test_path) => read_queries(test_path, train.feature_names())?,
        None => convert::flatten_queries(&cfg.queries, train.n_vars())?,
    };

    let train_x = Features::new(train.features(), train.n_vars())?;
    let test_x = Features::new(&queries, train.n_vars())?;
    info!(
        n_queries = test_x.n_rows(),
        k = knn_cfg.k(),
        metric = %knn_cfg.metric(),
        "classifying"
    );
    let predictions = classify(train_x, &labels, test_x, &knn_cfg).context("classification failed")?;

    for (query, label) in test_x.rows().zip(predictions.iter()) {
        println!("{query:?} -> {label}");
    }

    if let Some(ref output) = args.knn.output {
        write_column(output, "prediction", &predictions)
            .with_context(|| format!("failed to write predictions: {}", output.display()))?;
        info!(path = %output.display(), "predictions written");
    }

    Ok(())
}

/// Reads the training feature columns from a test CSV.
fn read_queries(path: &Path, feature_names: &[String]) -> Result<Vec<f64>> {
    info!(path = %path.display(), "reading test data");
    let spec = TableSpec::default()
        .with_features(feature_names.iter().cloned())
        .without_target();
    let table = read_table(path, &spec)
        .with_context(|| format!("failed to read test CSV: {}", path.display()))?;
    Ok(table.features().to_vec())
}
