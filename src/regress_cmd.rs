//! Regress command: neighbor-mean predictions and their error.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use nearfit_io::{TableSpec, read_table, write_column};
use nearfit_knn::{Features, regress};

use crate::cli::RegressArgs;
use crate::config::NearfitConfig;
use crate::convert;

/// Run the regression pipeline.
///
/// Without a test CSV the model predicts its own training rows. A test CSV
/// must carry the same feature and target columns as the training CSV.
pub fn run(args: RegressArgs, config: &NearfitConfig) -> Result<()> {
    let _cmd = info_span!("regress").entered();
    let cfg = &config.regress;

    let train_path = args
        .knn
        .train
        .as_ref()
        .or(cfg.train.as_ref())
        .ok_or_else(|| anyhow!("no training data: set [regress].train in config or use --train"))?;
    let knn_cfg = convert::build_knn_config_with_args(&config.knn, &args.knn, cfg.k)?;

    let features = if args.features.is_empty() {
        &cfg.features
    } else {
        &args.features
    };
    let target = args.target.as_ref().unwrap_or(&cfg.target);
    let spec = TableSpec::default()
        .with_features(features.iter().cloned())
        .with_target(target.clone());

    info!(path = %train_path.display(), "reading training data");
    let train = read_table(train_path, &spec)
        .with_context(|| format!("failed to read training CSV: {}", train_path.display()))?;
    info!(
        n_rows = train.n_rows(),
        n_vars = train.n_vars(),
        "training data loaded"
    );

    let test = match args.knn.test.as_ref().or(cfg.test.as_ref()) {
        Some(test_path) => {
            info!(path = %test_path.display(), "reading test data");
            Some(
                read_table(test_path, &spec)
                    .with_context(|| format!("failed to read test CSV: {}", test_path.display()))?,
            )
        }
        None => None,
    };
    let eval = test.as_ref().unwrap_or(&train);

    let train_x = Features::new(train.features(), train.n_vars())?;
    let test_x = Features::new(eval.features(), eval.n_vars())?;
    info!(
        n_queries = test_x.n_rows(),
        k = knn_cfg.k(),
        metric = %knn_cfg.metric(),
        "regressing"
    );
    let predictions =
        regress(train_x, train.targets(), test_x, &knn_cfg).context("regression failed")?;

    let observed = eval.targets();
    let norm = nearfit_stats::residual_norm(observed, &predictions);
    println!("residual norm: {norm:.6}");
    match nearfit_stats::rmse(observed, &predictions) {
        Some(rmse) => println!("rmse: {rmse:.6}"),
        None => warn!("no rows to evaluate"),
    }

    if let Some(ref output) = args.knn.output {
        write_column(output, "prediction", &predictions)
            .with_context(|| format!("failed to write predictions: {}", output.display()))?;
        info!(path = %output.display(), "predictions written");
    }

    Ok(())
}
