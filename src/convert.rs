//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use tracing::warn;

use nearfit_knn::{KnnConfig, Metric};

use crate::cli::KnnArgs;
use crate::config::KnnToml;

/// Parses a distance metric name.
///
/// The legacy `"manhattan"` name still resolves but logs a warning, since the
/// metric it selects is `sqrt(Σ|aᵢ − bᵢ|)` rather than the L1 distance.
pub fn parse_metric(s: &str) -> Result<Metric> {
    let metric: Metric = s.parse()?;
    if s.trim().eq_ignore_ascii_case("manhattan") {
        warn!(
            metric = metric.name(),
            "\"manhattan\" selects the square root of the L1 sum, not the L1 distance"
        );
    }
    Ok(metric)
}

/// Builds a [`KnnConfig`] from the `[knn]` table and the resolved `k`.
pub fn build_knn_config(knn: &KnnToml, k: usize) -> Result<KnnConfig> {
    if k == 0 {
        bail!("k must be >= 1, got 0");
    }
    let metric = parse_metric(&knn.metric)
        .with_context(|| format!("invalid [knn].metric {:?}", knn.metric))?;
    Ok(KnnConfig::new(k)
        .with_metric(metric)
        .with_parallel(knn.parallel))
}

/// Builds a [`KnnConfig`] from the `[knn]` table with command-line overrides
/// applied. `default_k` is the subcommand's configured `k`.
pub fn build_knn_config_with_args(
    knn: &KnnToml,
    args: &KnnArgs,
    default_k: usize,
) -> Result<KnnConfig> {
    let merged = KnnToml {
        metric: args.metric.clone().unwrap_or_else(|| knn.metric.clone()),
        parallel: knn.parallel && !args.sequential,
    };
    build_knn_config(&merged, args.k.unwrap_or(default_k))
}

/// Flattens query rows into a row-major buffer, checking every row has
/// `n_vars` values.
pub fn flatten_queries(queries: &[Vec<f64>], n_vars: usize) -> Result<Vec<f64>> {
    let mut flat = Vec::with_capacity(queries.len() * n_vars);
    for (i, q) in queries.iter().enumerate() {
        if q.len() != n_vars {
            bail!(
                "query {i} has {} values but the training data has {n_vars} features",
                q.len()
            );
        }
        flat.extend_from_slice(q);
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert_eq!(parse_metric("euclidean").unwrap(), Metric::Euclidean);
        assert_eq!(parse_metric("Eucledian").unwrap(), Metric::Euclidean);
        assert_eq!(
            parse_metric("manhattan").unwrap(),
            Metric::LegacySqrtAbsSum
        );
        assert!(parse_metric("cosine").is_err());
    }

    #[test]
    fn test_build_knn_config() {
        let knn = KnnToml {
            metric: "legacy-sqrt-abs-sum".to_string(),
            parallel: false,
        };
        let cfg = build_knn_config(&knn, 4).unwrap();
        assert_eq!(cfg.k(), 4);
        assert_eq!(cfg.metric(), Metric::LegacySqrtAbsSum);
        assert!(!cfg.parallel());
    }

    #[test]
    fn test_build_knn_config_rejects_zero_k() {
        assert!(build_knn_config(&KnnToml::default(), 0).is_err());
    }

    #[test]
    fn test_build_knn_config_bad_metric() {
        let knn = KnnToml {
            metric: "chebyshev".to_string(),
            parallel: true,
        };
        let err = build_knn_config(&knn, 3).unwrap_err();
        assert!(format!("{err:#}").contains("chebyshev"));
    }

    #[test]
    fn test_cli_overrides() {
        let args = KnnArgs {
            train: None,
            test: None,
            k: Some(2),
            metric: Some("manhattan".to_string()),
            sequential: true,
            output: None,
        };
        let cfg = build_knn_config_with_args(&KnnToml::default(), &args, 5).unwrap();
        assert_eq!(cfg.k(), 2);
        assert_eq!(cfg.metric(), Metric::LegacySqrtAbsSum);
        assert!(!cfg.parallel());
    }

    #[test]
    fn test_defaults_without_overrides() {
        let args = KnnArgs {
            train: None,
            test: None,
            k: None,
            metric: None,
            sequential: false,
            output: None,
        };
        let cfg = build_knn_config_with_args(&KnnToml::default(), &args, 5).unwrap();
        assert_eq!(cfg.k(), 5);
        assert_eq!(cfg.metric(), Metric::Euclidean);
        assert!(cfg.parallel());
    }

    #[test]
    fn test_flatten_queries() {
        let flat = flatten_queries(&[vec![1.0, 2.0], vec![3.0, 4.0]], 2).unwrap();
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(flatten_queries(&[vec![1.0]], 2).is_err());
        assert!(flatten_queries(&[], 2).unwrap().is_empty());
    }
}
